//! Property tests for the availability engine.

use chrono::NaiveDate;
use proptest::prelude::*;
use salonflow::api::*;
use salonflow::booking::{available_slots, candidate_starts, SLOT_STEP_MINUTES};
use salonflow::models::{Shift, WeeklySchedule};

fn time(minutes: u16) -> TimeOfDay {
    TimeOfDay::from_minutes(minutes).unwrap()
}

/// 2026-03-02 is a Monday.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

prop_compose! {
    fn arb_shift()(start in 0u16..1200, len in 30u16..480) -> Shift {
        let end = (start + len).min(1439);
        Shift::new(time(start), time(end.max(start + 1))).unwrap()
    }
}

prop_compose! {
    fn arb_appointment()(
        staff in 1i64..4,
        start in 0u16..1380,
        duration in 15u32..180,
    ) -> Appointment {
        Appointment {
            id: AppointmentId::new(0),
            tenant_id: TenantId::new(1),
            staff_id: EmployeeId::new(staff),
            service_id: ServiceId::new(1),
            customer_name: None,
            date: monday(),
            time: time(start),
            duration_minutes: duration,
            status: AppointmentStatus::Confirmed,
            price: 100.0,
            payment_method: PaymentMethod::Card,
        }
    }
}

fn tenant(mode: SchedulingMode) -> Tenant {
    Tenant {
        id: TenantId::new(1),
        slug: "studio-test".to_string(),
        name: "Studio Test".to_string(),
        scheduling_mode: mode,
        commission: CommissionSettings::default(),
    }
}

fn service(required: u32) -> Service {
    Service {
        id: ServiceId::new(1),
        tenant_id: TenantId::new(1),
        name: "Corte".to_string(),
        duration_minutes: required,
        buffer_before_minutes: 0,
        buffer_after_minutes: 0,
        price: 100.0,
        active: true,
    }
}

fn employee(shifts: Vec<Shift>) -> Employee {
    Employee {
        id: EmployeeId::new(1),
        tenant_id: TenantId::new(1),
        full_name: "Ana Souza".to_string(),
        specialty: None,
        commission_rate_pct: None,
        working_hours: WeeklySchedule {
            monday: shifts,
            ..Default::default()
        },
    }
}

proptest! {
    /// Every candidate fits inside the shift that produced it.
    #[test]
    fn prop_candidates_fit_their_shift(
        shifts in prop::collection::vec(arb_shift(), 0..4),
        required in 1u32..240,
    ) {
        for slot in candidate_starts(&shifts, required, SLOT_STEP_MINUTES) {
            let fits = shifts.iter().any(|shift| {
                u32::from(slot.minutes()) >= u32::from(shift.start().minutes())
                    && u32::from(slot.minutes()) + required <= u32::from(shift.end().minutes())
            });
            prop_assert!(fits, "slot {} does not fit any shift", slot);
        }
    }

    /// No offered slot overlaps an existing appointment under the policy.
    #[test]
    fn prop_offered_slots_are_conflict_free(
        shifts in prop::collection::vec(arb_shift(), 0..3),
        appointments in prop::collection::vec(arb_appointment(), 0..8),
        required in 15u32..180,
        individual in any::<bool>(),
    ) {
        let mode = if individual {
            SchedulingMode::Individual
        } else {
            SchedulingMode::Shared
        };
        let tenant = tenant(mode);
        let service = service(required);
        let employee = employee(shifts);

        for slot in available_slots(&service, &employee, monday(), &appointments, &tenant) {
            let slot_start = slot.on(monday());
            let slot_end = slot_start + chrono::Duration::minutes(i64::from(required));

            for appointment in &appointments {
                let relevant = match mode {
                    SchedulingMode::Individual => appointment.staff_id == employee.id,
                    SchedulingMode::Shared => appointment.tenant_id == tenant.id,
                };
                if !relevant {
                    continue;
                }
                let overlap =
                    slot_start < appointment.end() && slot_end > appointment.start();
                prop_assert!(
                    !overlap,
                    "slot {} overlaps appointment at {}",
                    slot,
                    appointment.time
                );
            }
        }
    }

    /// Two runs over identical inputs produce identical, identically-ordered
    /// output.
    #[test]
    fn prop_resolver_is_idempotent(
        shifts in prop::collection::vec(arb_shift(), 0..3),
        appointments in prop::collection::vec(arb_appointment(), 0..6),
        required in 15u32..180,
    ) {
        let tenant = tenant(SchedulingMode::Shared);
        let service = service(required);
        let employee = employee(shifts);

        let first = available_slots(&service, &employee, monday(), &appointments, &tenant);
        let second = available_slots(&service, &employee, monday(), &appointments, &tenant);
        prop_assert_eq!(first, second);
    }

    /// Output is chronologically ascending within a single shift.
    #[test]
    fn prop_single_shift_output_is_sorted(
        shift in arb_shift(),
        required in 15u32..120,
    ) {
        let slots = candidate_starts(&[shift], required, SLOT_STEP_MINUTES);
        prop_assert!(slots.windows(2).all(|w| w[0] < w[1]));
    }
}
