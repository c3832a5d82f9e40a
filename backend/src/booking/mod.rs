//! Appointment slot availability engine.
//!
//! The public booking flow asks one question: for this service, this
//! professional, and this day, which start times can still be booked? The
//! answer is computed in three steps:
//!
//! 1. [`slots`] walks the professional's shifts for the day and emits raw
//!    candidate start times on a fixed 15-minute grid.
//! 2. [`conflicts`] rejects candidates whose window overlaps an existing
//!    booking under the tenant's isolation policy.
//! 3. [`resolver`] composes the two into the offered slot list.
//!
//! Everything here is pure: the caller supplies the appointment snapshot
//! and no state is mutated.

pub mod conflicts;
pub mod resolver;
pub mod slots;

pub use conflicts::{window_is_taken, IsolationScope, SlotWindow};
pub use resolver::available_slots;
pub use slots::{candidate_starts, SLOT_STEP_MINUTES};
