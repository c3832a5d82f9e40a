//! Appointment repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{Appointment, SchedulingMode, TenantId};

/// Repository trait for reading and writing appointments.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Snapshot of every appointment whose booked window touches `date`.
    ///
    /// The snapshot is not tenant-scoped: under individual isolation,
    /// conflicts are matched by staff member alone, so the caller needs the
    /// cross-tenant view. Includes appointments started on the previous day
    /// that run past midnight.
    async fn appointments_for_day(&self, date: NaiveDate) -> RepositoryResult<Vec<Appointment>>;

    /// All appointments of one tenant, ordered by start time.
    async fn list_appointments(&self, tenant_id: TenantId) -> RepositoryResult<Vec<Appointment>>;

    /// Store a new appointment, reserving its slot.
    ///
    /// Before inserting, the implementation must re-check that the window
    /// `[appointment.start, appointment.start + required_minutes)` is still
    /// free under `mode` against its current state, atomically with the
    /// insert. `required_minutes` covers the service duration plus buffers
    /// and may exceed the stored `duration_minutes`.
    ///
    /// # Returns
    /// * `Ok(Appointment)` - The stored appointment with its assigned ID
    /// * `Err(RepositoryError::Conflict)` - If the window was taken meanwhile
    async fn store_appointment(
        &self,
        appointment: &Appointment,
        required_minutes: u32,
        mode: SchedulingMode,
    ) -> RepositoryResult<Appointment>;
}
