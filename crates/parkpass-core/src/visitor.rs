//! Visitor types

use crate::limits::{validate_visitor_name, Limits, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

/// Unique identifier for a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitorId(pub Ulid);

impl VisitorId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for VisitorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VisitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A park visitor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visitor {
    /// Unique identifier
    pub id: VisitorId,

    name: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Visitor {
    /// Create a new visitor with the default limits
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_limits(name, &Limits::default())
    }

    pub fn with_limits(name: impl Into<String>, limits: &Limits) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_visitor_name(&name, limits)?;
        let now = Utc::now();
        Ok(Self {
            id: VisitorId::new(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the visitor's name
    ///
    /// On error the previous name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.set_name_with_limits(name, &Limits::default())
    }

    pub fn set_name_with_limits(
        &mut self,
        name: impl Into<String>,
        limits: &Limits,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        validate_visitor_name(&name, limits)?;
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Visitor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Record {
            id: VisitorId,
            name: String,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
        }

        let record = Record::deserialize(deserializer)?;
        validate_visitor_name(&record.name, &Limits::default())
            .map_err(serde::de::Error::custom)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}
