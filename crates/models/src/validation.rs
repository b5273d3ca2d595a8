use thiserror::Error;

/// Rejected user input that never reached storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("End time must be after start time")]
    EndNotAfterStart,
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

/// Counts such as years and semester numbers are stored unsigned
pub fn validate_non_negative(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field });
    }

    Ok(())
}
