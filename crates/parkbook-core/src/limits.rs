//! Input validation limits for visitor names, park names and trip dates
//!
//! Lengths are counted in characters, not bytes.

use thiserror::Error;

/// Minimum length for visitor names (1 char)
pub const MIN_VISITOR_NAME_LEN: usize = 1;

/// Maximum length for visitor names (15 chars)
pub const MAX_VISITOR_NAME_LEN: usize = 15;

/// Minimum length for park names (3 chars)
pub const MIN_PARK_NAME_LEN: usize = 3;

/// Minimum length for trip dates (7 chars, e.g. "July 4th")
pub const MIN_DATE_LEN: usize = 7;

/// Which end of a trip a date belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "Start date"),
            Self::End => write!(f, "End date"),
        }
    }
}

/// Validation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Visitor name must be between {min} and {max} chars, got {len}")]
    VisitorNameLength { len: usize, min: usize, max: usize },

    #[error("Park name too short: {len} chars (min {min})")]
    ParkNameTooShort { len: usize, min: usize },

    #[error("{field} too short: {len} chars (min {min})")]
    DateTooShort {
        field: DateField,
        len: usize,
        min: usize,
    },
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validate visitor name
pub fn validate_visitor_name(name: &str) -> Result<(), ValidationError> {
    let len = char_len(name);
    if !(MIN_VISITOR_NAME_LEN..=MAX_VISITOR_NAME_LEN).contains(&len) {
        return Err(ValidationError::VisitorNameLength {
            len,
            min: MIN_VISITOR_NAME_LEN,
            max: MAX_VISITOR_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate park name
pub fn validate_park_name(name: &str) -> Result<(), ValidationError> {
    let len = char_len(name);
    if len < MIN_PARK_NAME_LEN {
        return Err(ValidationError::ParkNameTooShort {
            len,
            min: MIN_PARK_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate a trip start or end date
pub fn validate_date(field: DateField, date: &str) -> Result<(), ValidationError> {
    let len = char_len(date);
    if len < MIN_DATE_LEN {
        return Err(ValidationError::DateTooShort {
            field,
            len,
            min: MIN_DATE_LEN,
        });
    }
    Ok(())
}
