//! Repository trait definitions for store operations.
//!
//! Access to the data store is split across focused traits so that
//! implementations stay testable and read-only consumers can depend on a
//! narrow interface:
//!
//! - [`error`]: Error types for repository operations
//! - [`catalog`]: Read access to tenants, services, and staff
//! - [`appointment`]: Appointment snapshots and reservation-checked writes
//!
//! Functions that need everything take the composite [`FullRepository`]
//! bound.

pub mod appointment;
pub mod catalog;
pub mod error;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use appointment::AppointmentRepository;
pub use catalog::CatalogRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements both repository
/// traits. Use this as a convenient bound when a service needs catalog and
/// appointment access together.
pub trait FullRepository: CatalogRepository + AppointmentRepository {}

impl<T> FullRepository for T where T: CatalogRepository + AppointmentRepository {}
