use crate::validation::ValidationError;
use chrono::NaiveTime;

/// Checks that a lecture slot ends strictly after it starts
pub fn validate_slot_times(start: NaiveTime, end: NaiveTime) -> Result<(), ValidationError> {
    if end <= start {
        return Err(ValidationError::EndNotAfterStart);
    }

    Ok(())
}

/// Formats a slot on the 12-hour clock, e.g. "08:30 AM - 09:30 AM"
pub fn format_slot(start: NaiveTime, end: NaiveTime) -> String {
    format!("{} - {}", start.format("%I:%M %p"), end.format("%I:%M %p"))
}
