//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    AppointmentListResponse, AvailabilityQuery, AvailabilityResponse, BookAppointmentRequest,
    BookAppointmentResponse, CommissionReportResponse, EmployeeListResponse, HealthResponse,
    ServiceListResponse, TenantListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{EmployeeId, ServiceId, TenantId};
use crate::db::repository::{AppointmentRepository, CatalogRepository};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Tenant Directory & Catalog
// =============================================================================

/// GET /v1/tenants
///
/// List all tenants.
pub async fn list_tenants(State(state): State<AppState>) -> HandlerResult<TenantListResponse> {
    let tenants = state.repository.list_tenants().await?;
    let total = tenants.len();

    Ok(Json(TenantListResponse { tenants, total }))
}

/// GET /v1/tenants/{tenant_id}/services
///
/// List a tenant's service catalog.
pub async fn list_services(
    State(state): State<AppState>,
    Path(tenant_id): Path<i64>,
) -> HandlerResult<ServiceListResponse> {
    let tenant_id = TenantId::new(tenant_id);

    // 404 for unknown tenants rather than an empty catalog.
    let tenant = state.repository.get_tenant(tenant_id).await?;
    let services = state.repository.list_services(tenant.id).await?;
    let total = services.len();

    Ok(Json(ServiceListResponse { services, total }))
}

/// GET /v1/tenants/{tenant_id}/employees
///
/// List a tenant's staff, including their weekly schedules.
pub async fn list_employees(
    State(state): State<AppState>,
    Path(tenant_id): Path<i64>,
) -> HandlerResult<EmployeeListResponse> {
    let tenant_id = TenantId::new(tenant_id);

    let tenant = state.repository.get_tenant(tenant_id).await?;
    let employees = state.repository.list_employees(tenant.id).await?;
    let total = employees.len();

    Ok(Json(EmployeeListResponse { employees, total }))
}

// =============================================================================
// Availability
// =============================================================================

/// GET /v1/tenants/{tenant_id}/availability
///
/// Bookable start times for a service/professional/day selection. Missing
/// or unknown selection parameters yield an empty list, not an error.
pub async fn get_availability(
    State(state): State<AppState>,
    Path(tenant_id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> HandlerResult<AvailabilityResponse> {
    let slots = services::resolve_availability(
        state.repository.as_ref(),
        TenantId::new(tenant_id),
        query.service_id.map(ServiceId::new),
        query.employee_id.map(EmployeeId::new),
        query.date,
    )
    .await?;

    let slots: Vec<String> = slots.iter().map(|slot| slot.to_string()).collect();
    let total = slots.len();

    Ok(Json(AvailabilityResponse { slots, total }))
}

// =============================================================================
// Appointments
// =============================================================================

/// GET /v1/tenants/{tenant_id}/appointments
///
/// List a tenant's appointments, ordered by start time.
pub async fn list_appointments(
    State(state): State<AppState>,
    Path(tenant_id): Path<i64>,
) -> HandlerResult<AppointmentListResponse> {
    let tenant_id = TenantId::new(tenant_id);

    let tenant = state.repository.get_tenant(tenant_id).await?;
    let appointments = state.repository.list_appointments(tenant.id).await?;
    let total = appointments.len();

    Ok(Json(AppointmentListResponse {
        appointments,
        total,
    }))
}

/// POST /v1/tenants/{tenant_id}/appointments
///
/// Book an appointment. The slot is re-validated at write time; a window
/// taken since the customer saw it returns 409.
pub async fn create_appointment(
    State(state): State<AppState>,
    Path(tenant_id): Path<i64>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<BookAppointmentResponse>), AppError> {
    let confirmation = services::book_appointment(
        state.repository.as_ref(),
        services::BookingRequest {
            tenant_id: TenantId::new(tenant_id),
            service_id: ServiceId::new(request.service_id),
            employee_id: EmployeeId::new(request.employee_id),
            date: request.date,
            time: request.time,
            customer_name: request.customer_name,
            payment_method: request.payment_method,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookAppointmentResponse {
            appointment: confirmation.appointment,
            voucher_code: confirmation.voucher_code,
        }),
    ))
}

// =============================================================================
// Reports
// =============================================================================

/// GET /v1/tenants/{tenant_id}/reports/commissions
///
/// Commission lines for each of the tenant's professionals.
pub async fn get_commission_report(
    State(state): State<AppState>,
    Path(tenant_id): Path<i64>,
) -> HandlerResult<CommissionReportResponse> {
    let entries =
        services::commission_report(state.repository.as_ref(), TenantId::new(tenant_id)).await?;
    let total = entries.len();

    Ok(Json(CommissionReportResponse { entries, total }))
}
