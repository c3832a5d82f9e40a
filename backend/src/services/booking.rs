//! Booking service.
//!
//! Turns a booking request into a stored appointment. The repository
//! re-validates the slot while holding its write lock, so a request that
//! raced another customer for the same window comes back as a conflict
//! instead of a double booking.

use chrono::{Datelike, NaiveDate};
use log::info;

use crate::api::{
    Appointment, AppointmentId, AppointmentStatus, EmployeeId, PaymentMethod, ServiceId, TenantId,
    TimeOfDay,
};
use crate::db::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};

/// A booking flow submission.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub tenant_id: TenantId,
    pub service_id: ServiceId,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub customer_name: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

/// A confirmed booking with its reception voucher.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub appointment: Appointment,
    pub voucher_code: String,
}

/// Voucher shown at the reception desk, derived from the booking date and
/// service (e.g. `SF0603-01`).
pub fn voucher_code(date: NaiveDate, service_id: ServiceId) -> String {
    format!(
        "SF{:02}{:02}-{:02}",
        date.day(),
        date.month(),
        service_id.value().rem_euclid(100)
    )
}

/// Book an appointment for a tenant's customer.
///
/// Unknown tenant, service, or employee ids are `NotFound` errors; a
/// selection that crosses tenants or targets an inactive service is a
/// validation error. The time is not checked against the employee's shifts:
/// the back office books walk-ins outside the public grid, and the
/// reservation check still guards the window itself.
pub async fn book_appointment<R: FullRepository + ?Sized>(
    repo: &R,
    request: BookingRequest,
) -> RepositoryResult<BookingConfirmation> {
    let tenant = repo.get_tenant(request.tenant_id).await?;
    let service = repo.get_service(request.service_id).await?;
    let employee = repo.get_employee(request.employee_id).await?;

    if service.tenant_id != tenant.id {
        return Err(RepositoryError::validation_with_context(
            format!("Service {} does not belong to tenant {}", service.id, tenant.id),
            ErrorContext::new("book_appointment")
                .with_entity("service")
                .with_entity_id(service.id),
        ));
    }
    if employee.tenant_id != tenant.id {
        return Err(RepositoryError::validation_with_context(
            format!(
                "Employee {} does not belong to tenant {}",
                employee.id, tenant.id
            ),
            ErrorContext::new("book_appointment")
                .with_entity("employee")
                .with_entity_id(employee.id),
        ));
    }
    if !service.active {
        return Err(RepositoryError::validation_with_context(
            format!("Service {} is not bookable", service.id),
            ErrorContext::new("book_appointment")
                .with_entity("service")
                .with_entity_id(service.id),
        ));
    }

    let appointment = Appointment {
        id: AppointmentId::new(0),
        tenant_id: tenant.id,
        staff_id: employee.id,
        service_id: service.id,
        customer_name: request.customer_name,
        date: request.date,
        time: request.time,
        duration_minutes: service.duration_minutes,
        status: AppointmentStatus::Scheduled,
        price: service.price,
        payment_method: request.payment_method.unwrap_or_default(),
    };

    let stored = repo
        .store_appointment(
            &appointment,
            service.total_required_minutes(),
            tenant.scheduling_mode,
        )
        .await?;

    info!(
        "booked appointment {} for tenant {} ({} at {} {})",
        stored.id, tenant.id, service.name, stored.date, stored.time
    );

    Ok(BookingConfirmation {
        voucher_code: voucher_code(stored.date, stored.service_id),
        appointment: stored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voucher_code_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
        assert_eq!(voucher_code(date, ServiceId::new(1)), "SF0603-01");
        assert_eq!(voucher_code(date, ServiceId::new(142)), "SF0603-42");
    }
}
