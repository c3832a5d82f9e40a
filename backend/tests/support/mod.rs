//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use salonflow::api::*;
use salonflow::db::repositories::LocalRepository;
use salonflow::models::{Shift, WeeklySchedule};

pub fn t(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap()
}

pub fn shift(start: (u8, u8), end: (u8, u8)) -> Shift {
    Shift::new(t(start.0, start.1), t(end.0, end.1)).unwrap()
}

/// 2026-03-02 is a Monday.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

/// Ids of the records inserted by [`setup_salon`].
pub struct SalonFixture {
    pub repo: LocalRepository,
    pub tenant_id: TenantId,
    pub service_id: ServiceId,
    pub employee_id: EmployeeId,
}

/// One salon with a 60-minute service and one professional working
/// Mondays 09:00-12:00.
pub fn setup_salon(mode: SchedulingMode) -> SalonFixture {
    let repo = LocalRepository::new();

    let tenant_id = repo.insert_tenant(Tenant {
        id: TenantId::new(0),
        slug: "studio-test".to_string(),
        name: "Studio Test".to_string(),
        scheduling_mode: mode,
        commission: CommissionSettings::default(),
    });

    let service_id = repo.insert_service(Service {
        id: ServiceId::new(0),
        tenant_id,
        name: "Corte".to_string(),
        duration_minutes: 60,
        buffer_before_minutes: 0,
        buffer_after_minutes: 0,
        price: 100.0,
        active: true,
    });

    let employee_id = repo.insert_employee(Employee {
        id: EmployeeId::new(0),
        tenant_id,
        full_name: "Ana Souza".to_string(),
        specialty: None,
        commission_rate_pct: None,
        working_hours: WeeklySchedule {
            monday: vec![shift((9, 0), (12, 0))],
            ..Default::default()
        },
    });

    SalonFixture {
        repo,
        tenant_id,
        service_id,
        employee_id,
    }
}

/// Add a second professional with the same Monday schedule.
pub fn add_second_employee(fixture: &SalonFixture) -> EmployeeId {
    fixture.repo.insert_employee(Employee {
        id: EmployeeId::new(0),
        tenant_id: fixture.tenant_id,
        full_name: "Juliana Lima".to_string(),
        specialty: None,
        commission_rate_pct: None,
        working_hours: WeeklySchedule {
            monday: vec![shift((9, 0), (12, 0))],
            ..Default::default()
        },
    })
}

pub fn appointment(
    tenant_id: TenantId,
    staff_id: EmployeeId,
    service_id: ServiceId,
    date: NaiveDate,
    time: TimeOfDay,
    duration_minutes: u32,
) -> Appointment {
    Appointment {
        id: AppointmentId::new(0),
        tenant_id,
        staff_id,
        service_id,
        customer_name: None,
        date,
        time,
        duration_minutes,
        status: AppointmentStatus::Confirmed,
        price: 100.0,
        payment_method: PaymentMethod::Card,
    }
}

pub fn rendered(slots: &[TimeOfDay]) -> Vec<String> {
    slots.iter().map(|s| s.to_string()).collect()
}
