//! Conflict detection between a candidate window and existing bookings.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::api::{EmployeeId, TenantId};
use crate::models::{Appointment, SchedulingMode, TimeOfDay};

/// The absolute half-open interval a candidate booking would occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl SlotWindow {
    /// Build the window for a candidate starting at `time` on `date` and
    /// occupying `required_minutes` (service duration plus buffers).
    pub fn new(date: NaiveDate, time: TimeOfDay, required_minutes: u32) -> Self {
        let start = time.on(date);
        Self {
            start,
            end: start + Duration::minutes(i64::from(required_minutes)),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Half-open interval intersection; touching endpoints do not overlap.
    fn overlaps(&self, other_start: NaiveDateTime, other_end: NaiveDateTime) -> bool {
        self.start < other_end && self.end > other_start
    }
}

/// Who a conflicting appointment must belong to before it blocks a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsolationScope {
    pub mode: SchedulingMode,
    pub tenant_id: TenantId,
    pub staff_id: EmployeeId,
}

impl IsolationScope {
    /// True when an overlapping `appointment` counts as a conflict under
    /// this scope.
    fn blocks(&self, appointment: &Appointment) -> bool {
        match self.mode {
            // Individual calendars: only the selected professional's own
            // bookings matter.
            SchedulingMode::Individual => appointment.staff_id == self.staff_id,
            // One shared calendar: any booking in the salon blocks the slot.
            SchedulingMode::Shared => appointment.tenant_id == self.tenant_id,
        }
    }
}

/// Whether `window` collides with any existing appointment under `scope`.
pub fn window_is_taken(
    window: &SlotWindow,
    appointments: &[Appointment],
    scope: &IsolationScope,
) -> bool {
    appointments.iter().any(|appointment| {
        window.overlaps(appointment.start(), appointment.end()) && scope.blocks(appointment)
    })
}
