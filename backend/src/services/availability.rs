//! Availability service.
//!
//! Repo-backed wrapper around the pure resolver in [`crate::booking`]: loads
//! the tenant, the selected service and professional, and the day's
//! appointment snapshot, then computes the offered slots.

use chrono::NaiveDate;
use log::debug;

use crate::api::{EmployeeId, ServiceId, TenantId, TimeOfDay};
use crate::booking::available_slots;
use crate::db::repository::{FullRepository, RepositoryError, RepositoryResult};

/// Compute the bookable start times for a tenant's booking flow.
///
/// An unset service, professional, or date yields an empty list rather than
/// an error, and so does a selection that points at nothing (unknown id,
/// inactive service, wrong tenant): availability is a hint for the booking
/// UI, not a validation surface. An unknown tenant is still an error, as is
/// any store failure.
pub async fn resolve_availability<R: FullRepository + ?Sized>(
    repo: &R,
    tenant_id: TenantId,
    service_id: Option<ServiceId>,
    employee_id: Option<EmployeeId>,
    date: Option<NaiveDate>,
) -> RepositoryResult<Vec<TimeOfDay>> {
    let tenant = repo.get_tenant(tenant_id).await?;

    let (Some(service_id), Some(employee_id), Some(date)) = (service_id, employee_id, date)
    else {
        return Ok(Vec::new());
    };

    let service = match repo.get_service(service_id).await {
        Ok(service) => service,
        Err(RepositoryError::NotFound { .. }) => {
            debug!("availability: unknown service {}, no slots", service_id);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let employee = match repo.get_employee(employee_id).await {
        Ok(employee) => employee,
        Err(RepositoryError::NotFound { .. }) => {
            debug!("availability: unknown employee {}, no slots", employee_id);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    if service.tenant_id != tenant.id || employee.tenant_id != tenant.id || !service.active {
        debug!(
            "availability: selection not bookable for tenant {}, no slots",
            tenant.id
        );
        return Ok(Vec::new());
    }

    let snapshot = repo.appointments_for_day(date).await?;

    Ok(available_slots(
        &service,
        &employee,
        date,
        &snapshot,
        &tenant,
    ))
}
