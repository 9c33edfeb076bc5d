//! Input validation limits for parks, visitors and trips

use crate::park::ParkId;
use crate::trip::TripId;
use crate::visitor::VisitorId;
use serde::{Deserialize, Serialize};

/// Minimum length for park names (3 chars)
pub const MIN_PARK_NAME_LEN: usize = 3;

/// Minimum length for visitor names (1 char)
pub const MIN_VISITOR_NAME_LEN: usize = 1;

/// Maximum length for visitor names (15 chars)
pub const MAX_VISITOR_NAME_LEN: usize = 15;

/// Minimum length for trip start and end dates (7 chars)
pub const MIN_TRIP_DATE_LEN: usize = 7;

/// Length limits applied on every write
///
/// Lengths count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_park_name_min")]
    pub park_name_min: usize,

    #[serde(default = "default_visitor_name_min")]
    pub visitor_name_min: usize,

    #[serde(default = "default_visitor_name_max")]
    pub visitor_name_max: usize,

    #[serde(default = "default_trip_date_min")]
    pub trip_date_min: usize,
}

fn default_park_name_min() -> usize {
    MIN_PARK_NAME_LEN
}

fn default_visitor_name_min() -> usize {
    MIN_VISITOR_NAME_LEN
}

fn default_visitor_name_max() -> usize {
    MAX_VISITOR_NAME_LEN
}

fn default_trip_date_min() -> usize {
    MIN_TRIP_DATE_LEN
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            park_name_min: MIN_PARK_NAME_LEN,
            visitor_name_min: MIN_VISITOR_NAME_LEN,
            visitor_name_max: MAX_VISITOR_NAME_LEN,
            trip_date_min: MIN_TRIP_DATE_LEN,
        }
    }
}

impl Limits {
    /// Reject limit combinations no name could ever satisfy
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.visitor_name_min == 0 {
            return Err(ValidationError::InvalidLimits(
                "visitor_name_min must be at least 1".to_string(),
            ));
        }
        if self.visitor_name_min > self.visitor_name_max {
            return Err(ValidationError::InvalidLimits(format!(
                "visitor_name_min ({}) exceeds visitor_name_max ({})",
                self.visitor_name_min, self.visitor_name_max
            )));
        }
        Ok(())
    }
}

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    ParkNameTooShort { len: usize, min: usize },
    ParkNameImmutable,
    VisitorNameEmpty,
    VisitorNameTooShort { len: usize, min: usize },
    VisitorNameTooLong { len: usize, max: usize },
    StartDateTooShort { len: usize, min: usize },
    EndDateTooShort { len: usize, min: usize },
    UnknownPark(ParkId),
    UnknownVisitor(VisitorId),
    UnknownTrip(TripId),
    InvalidLimits(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParkNameTooShort { len, min } => {
                write!(f, "Park name too short: {} chars (min {})", len, min)
            }
            Self::ParkNameImmutable => write!(f, "Cannot change national park name"),
            Self::VisitorNameEmpty => write!(f, "Visitor name cannot be empty"),
            Self::VisitorNameTooShort { len, min } => {
                write!(f, "Visitor name too short: {} chars (min {})", len, min)
            }
            Self::VisitorNameTooLong { len, max } => {
                write!(f, "Visitor name too long: {} chars (max {})", len, max)
            }
            Self::StartDateTooShort { len, min } => {
                write!(f, "Start date too short: {} chars (min {})", len, min)
            }
            Self::EndDateTooShort { len, min } => {
                write!(f, "End date too short: {} chars (min {})", len, min)
            }
            Self::UnknownPark(id) => write!(f, "Not a registered national park: {}", id),
            Self::UnknownVisitor(id) => write!(f, "Not a registered visitor: {}", id),
            Self::UnknownTrip(id) => write!(f, "Not a registered trip: {}", id),
            Self::InvalidLimits(msg) => write!(f, "Invalid limits: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate park name
pub fn validate_park_name(name: &str, limits: &Limits) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len < limits.park_name_min {
        return Err(ValidationError::ParkNameTooShort {
            len,
            min: limits.park_name_min,
        });
    }
    Ok(())
}

/// Validate visitor name
pub fn validate_visitor_name(name: &str, limits: &Limits) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len == 0 {
        return Err(ValidationError::VisitorNameEmpty);
    }
    if len < limits.visitor_name_min {
        return Err(ValidationError::VisitorNameTooShort {
            len,
            min: limits.visitor_name_min,
        });
    }
    if len > limits.visitor_name_max {
        return Err(ValidationError::VisitorNameTooLong {
            len,
            max: limits.visitor_name_max,
        });
    }
    Ok(())
}

/// Validate trip start date
pub fn validate_start_date(date: &str, limits: &Limits) -> Result<(), ValidationError> {
    let len = date.chars().count();
    if len < limits.trip_date_min {
        return Err(ValidationError::StartDateTooShort {
            len,
            min: limits.trip_date_min,
        });
    }
    Ok(())
}

/// Validate trip end date
pub fn validate_end_date(date: &str, limits: &Limits) -> Result<(), ValidationError> {
    let len = date.chars().count();
    if len < limits.trip_date_min {
        return Err(ValidationError::EndDateTooShort {
            len,
            min: limits.trip_date_min,
        });
    }
    Ok(())
}
