//! National park types

use crate::limits::{validate_park_name, Limits, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

/// Unique identifier for a park
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParkId(pub Ulid);

impl ParkId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for ParkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A national park
///
/// The name is fixed at construction. There is no setter; [`Park::rename`]
/// exists only to report that the name cannot change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Park {
    /// Unique identifier
    pub id: ParkId,

    name: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Park {
    /// Create a new park with the default limits
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_limits(name, &Limits::default())
    }

    /// Create a new park, validating the name against `limits`
    pub fn with_limits(name: impl Into<String>, limits: &Limits) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_park_name(&name, limits)?;
        Ok(Self {
            id: ParkId::new(),
            name,
            created_at: Utc::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always fails: a park keeps the name it was created with
    pub fn rename(&mut self, _name: impl Into<String>) -> Result<(), ValidationError> {
        Err(ValidationError::ParkNameImmutable)
    }
}

impl<'de> Deserialize<'de> for Park {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Record {
            id: ParkId,
            name: String,
            created_at: DateTime<Utc>,
        }

        let record = Record::deserialize(deserializer)?;
        validate_park_name(&record.name, &Limits::default()).map_err(serde::de::Error::custom)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
        })
    }
}
