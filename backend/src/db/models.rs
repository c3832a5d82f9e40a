//! Shared data models re-exported for store layer consumers.

pub use crate::api::{
    Appointment, AppointmentId, AppointmentStatus, CommissionSettings, Employee, EmployeeId,
    PaymentMethod, SchedulingMode, Service, ServiceId, Shift, Tenant, TenantId, TimeOfDay,
    WeeklySchedule,
};
