//! Tenant catalog records: salons, services, and staff.

use serde::{Deserialize, Serialize};

use crate::api::{EmployeeId, ServiceId, TenantId};

use super::schedule::WeeklySchedule;

/// Conflict isolation policy for a tenant's bookings.
///
/// `individual` scopes conflicts to the selected professional; any other
/// configured value falls back to `shared`, where one booking blocks the
/// whole salon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulingMode {
    Individual,
    #[serde(other)]
    Shared,
}

/// Card-fee and commission percentages used by the finance reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionSettings {
    /// Credit-card acquirer fee, percent of the service price.
    pub card_fee_credit_pct: f64,
    /// Debit-card acquirer fee, percent of the service price.
    pub card_fee_debit_pct: f64,
    /// Commission percent applied when the employee has no rate of their own.
    pub default_commission_pct: f64,
    /// Deduct the card fee before applying the commission rate.
    pub deduct_fees_from_commission: bool,
}

impl Default for CommissionSettings {
    fn default() -> Self {
        Self {
            card_fee_credit_pct: 3.5,
            card_fee_debit_pct: 1.5,
            default_commission_pct: 40.0,
            deduct_fees_from_commission: true,
        }
    }
}

/// One salon account in the multi-tenant system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub slug: String,
    pub name: String,
    pub scheduling_mode: SchedulingMode,
    #[serde(default)]
    pub commission: CommissionSettings,
}

/// A bookable service offered by a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub tenant_id: TenantId,
    pub name: String,
    pub duration_minutes: u32,
    /// Preparation time blocked before the service starts.
    #[serde(default)]
    pub buffer_before_minutes: u32,
    /// Cleanup time blocked after the service ends.
    #[serde(default)]
    pub buffer_after_minutes: u32,
    pub price: f64,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Service {
    /// Minutes a booking of this service keeps the calendar occupied,
    /// buffers included.
    pub fn total_required_minutes(&self) -> u32 {
        self.buffer_before_minutes + self.duration_minutes + self.buffer_after_minutes
    }
}

/// A staff member who can be booked for services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub tenant_id: TenantId,
    pub full_name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    /// Commission percent overriding the tenant default.
    #[serde(default)]
    pub commission_rate_pct: Option<f64>,
    #[serde(default)]
    pub working_hours: WeeklySchedule,
}
