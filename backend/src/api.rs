//! Public API surface for the booking backend.
//!
//! This file consolidates the identifier newtypes and re-exports the domain
//! types used across the repository, service, and HTTP layers. All types
//! derive Serialize/Deserialize for JSON serialization.

pub use crate::models::appointment::{Appointment, AppointmentStatus, PaymentMethod};
pub use crate::models::catalog::{
    CommissionSettings, Employee, SchedulingMode, Service, Tenant,
};
pub use crate::models::schedule::{Shift, WeeklySchedule};
pub use crate::models::time::TimeOfDay;

use serde::{Deserialize, Serialize};

/// Tenant identifier (one salon account).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TenantId(pub i64);

/// Service identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub i64);

/// Employee identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub i64);

/// Appointment identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub i64);

impl TenantId {
    pub fn new(value: i64) -> Self {
        TenantId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ServiceId {
    pub fn new(value: i64) -> Self {
        ServiceId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EmployeeId {
    pub fn new(value: i64) -> Self {
        EmployeeId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AppointmentId {
    pub fn new(value: i64) -> Self {
        AppointmentId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
