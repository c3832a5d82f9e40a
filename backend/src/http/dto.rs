//! Data Transfer Objects for the HTTP API.
//!
//! Requests and responses for the REST API. The catalog and appointment
//! domain types already derive Serialize/Deserialize and are re-exported
//! here rather than duplicated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export domain types that are already serializable
pub use crate::api::{
    Appointment, Employee, PaymentMethod, Service, Tenant, TimeOfDay,
};
pub use crate::services::finance::{CommissionStatus, CommissionSummary};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}

/// Tenant directory response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantListResponse {
    pub tenants: Vec<Tenant>,
    pub total: usize,
}

/// Service catalog response for one tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceListResponse {
    pub services: Vec<Service>,
    pub total: usize,
}

/// Staff directory response for one tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
    pub total: usize,
}

/// Query parameters for the availability endpoint.
///
/// All three are optional; missing parameters produce an empty slot list,
/// matching the booking UI's incremental selection flow.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub service_id: Option<i64>,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Bookable slots for a service/professional/day selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Bookable start times, "HH:MM", ascending
    pub slots: Vec<String>,
    pub total: usize,
}

/// Appointment list response for one tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<Appointment>,
    pub total: usize,
}

/// Request body for booking an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub service_id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    /// Start time, "HH:MM"
    pub time: TimeOfDay,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

/// Response for a successful booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentResponse {
    pub appointment: Appointment,
    /// Code to present at the reception desk
    pub voucher_code: String,
}

/// Commission report response for one tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionReportResponse {
    pub entries: Vec<CommissionSummary>,
    pub total: usize,
}
