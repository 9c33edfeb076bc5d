//! Trip (join) types linking a visitor to a park

use crate::limits::{validate_end_date, validate_start_date, Limits, ValidationError};
use crate::park::{Park, ParkId};
use crate::visitor::{Visitor, VisitorId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

/// Unique identifier for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId(pub Ulid);

impl TripId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trip: one visitor at one park between two dates
///
/// The visitor and park references are fixed at construction. Dates are free
/// text with a minimum length and may be changed later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    /// Unique identifier
    pub id: TripId,

    visitor_id: VisitorId,

    park_id: ParkId,

    start_date: String,

    end_date: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Create a new trip with the default limits
    pub fn new(
        visitor: &Visitor,
        park: &Park,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_limits(visitor, park, start_date, end_date, &Limits::default())
    }

    pub fn with_limits(
        visitor: &Visitor,
        park: &Park,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        limits: &Limits,
    ) -> Result<Self, ValidationError> {
        let start_date = start_date.into();
        let end_date = end_date.into();
        validate_start_date(&start_date, limits)?;
        validate_end_date(&end_date, limits)?;
        Ok(Self {
            id: TripId::new(),
            visitor_id: visitor.id,
            park_id: park.id,
            start_date,
            end_date,
            created_at: Utc::now(),
        })
    }

    pub fn visitor_id(&self) -> VisitorId {
        self.visitor_id
    }

    pub fn park_id(&self) -> ParkId {
        self.park_id
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn set_start_date(&mut self, date: impl Into<String>) -> Result<(), ValidationError> {
        self.set_start_date_with_limits(date, &Limits::default())
    }

    pub fn set_start_date_with_limits(
        &mut self,
        date: impl Into<String>,
        limits: &Limits,
    ) -> Result<(), ValidationError> {
        let date = date.into();
        validate_start_date(&date, limits)?;
        self.start_date = date;
        Ok(())
    }

    pub fn set_end_date(&mut self, date: impl Into<String>) -> Result<(), ValidationError> {
        self.set_end_date_with_limits(date, &Limits::default())
    }

    pub fn set_end_date_with_limits(
        &mut self,
        date: impl Into<String>,
        limits: &Limits,
    ) -> Result<(), ValidationError> {
        let date = date.into();
        validate_end_date(&date, limits)?;
        self.end_date = date;
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Trip {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Record {
            id: TripId,
            visitor_id: VisitorId,
            park_id: ParkId,
            start_date: String,
            end_date: String,
            created_at: DateTime<Utc>,
        }

        let record = Record::deserialize(deserializer)?;
        let limits = Limits::default();
        validate_start_date(&record.start_date, &limits).map_err(serde::de::Error::custom)?;
        validate_end_date(&record.end_date, &limits).map_err(serde::de::Error::custom)?;
        Ok(Self {
            id: record.id,
            visitor_id: record.visitor_id,
            park_id: record.park_id,
            start_date: record.start_date,
            end_date: record.end_date,
            created_at: record.created_at,
        })
    }
}

/// Data for creating a new trip in a graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrip {
    pub visitor_id: VisitorId,
    pub park_id: ParkId,
    pub start_date: String,
    pub end_date: String,
}

impl NewTrip {
    pub fn new(
        visitor_id: VisitorId,
        park_id: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            visitor_id,
            park_id,
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}
