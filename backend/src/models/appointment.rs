//! Appointment records.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::api::{AppointmentId, EmployeeId, ServiceId, TenantId};

use super::time::TimeOfDay;

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

/// How the customer paid (or intends to pay).
///
/// Replaces the untyped `metadata.payment_method` bag of the booking front
/// end. Defaults to `Card` when the channel recorded nothing, which is the
/// fallback the finance calculations always used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
    #[default]
    Card,
    Debit,
    /// Paid at the salon when the service is done.
    Local,
}

/// A booked service occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub tenant_id: TenantId,
    pub staff_id: EmployeeId,
    pub service_id: ServiceId,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    pub price: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl Appointment {
    /// Absolute start of the booked interval.
    pub fn start(&self) -> NaiveDateTime {
        self.time.on(self.date)
    }

    /// Absolute end of the booked interval (exclusive).
    pub fn end(&self) -> NaiveDateTime {
        self.start() + Duration::minutes(i64::from(self.duration_minutes))
    }
}
