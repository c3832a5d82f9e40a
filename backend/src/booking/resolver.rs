//! Availability resolution.
//!
//! Composes the slot generator and the conflict filter into the list of
//! bookable start times offered to the booking flow. This is a pure
//! function of its arguments; the caller supplies a point-in-time snapshot
//! of existing appointments and the resolver is simply re-run whenever the
//! selection changes.

use chrono::{Datelike, NaiveDate};

use crate::models::{Appointment, Employee, Service, Tenant, TimeOfDay};

use super::conflicts::{window_is_taken, IsolationScope, SlotWindow};
use super::slots::{candidate_starts, SLOT_STEP_MINUTES};

/// Compute the bookable start times for one service/professional/day
/// combination, in chronological generation order.
///
/// A weekday with no configured shifts yields an empty list, not an error.
/// Every returned slot fits within the shift that produced it and has no
/// overlapping booking under the tenant's isolation policy.
pub fn available_slots(
    service: &Service,
    employee: &Employee,
    date: NaiveDate,
    appointments: &[Appointment],
    tenant: &Tenant,
) -> Vec<TimeOfDay> {
    let shifts = employee.working_hours.shifts_for(date.weekday());
    let required_minutes = service.total_required_minutes();

    let scope = IsolationScope {
        mode: tenant.scheduling_mode,
        tenant_id: tenant.id,
        staff_id: employee.id,
    };

    candidate_starts(shifts, required_minutes, SLOT_STEP_MINUTES)
        .into_iter()
        .filter(|slot| {
            let window = SlotWindow::new(date, *slot, required_minutes);
            !window_is_taken(&window, appointments, &scope)
        })
        .collect()
}
