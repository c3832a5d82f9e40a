//! Candidate slot generation.

use crate::models::{Shift, TimeOfDay};

/// Granularity of the booking grid, in minutes.
pub const SLOT_STEP_MINUTES: u16 = 15;

/// Generate raw candidate start times for one day's shifts.
///
/// Shifts are walked in list order. Within each shift a cursor starts at the
/// shift's start and advances by `step_minutes`, emitting a candidate while
/// the full `required_minutes` window still fits before the shift ends. A
/// day with no shifts yields no candidates.
pub fn candidate_starts(
    shifts: &[Shift],
    required_minutes: u32,
    step_minutes: u16,
) -> Vec<TimeOfDay> {
    let mut candidates = Vec::new();
    if step_minutes == 0 {
        return candidates;
    }

    for shift in shifts {
        let mut cursor = u32::from(shift.start().minutes());
        let end = u32::from(shift.end().minutes());

        while cursor + required_minutes <= end {
            // In range: cursor < end < MINUTES_PER_DAY.
            if let Some(slot) = TimeOfDay::from_minutes(cursor as u16) {
                candidates.push(slot);
            }
            cursor += u32::from(step_minutes);
        }
    }

    candidates
}
