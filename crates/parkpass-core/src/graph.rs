//! Park graph trait definition

use crate::error::Result;
use crate::park::{Park, ParkId};
use crate::trip::{NewTrip, Trip, TripId};
use crate::visitor::{Visitor, VisitorId};
use serde::{Deserialize, Serialize};

/// Snapshot of every park, visitor and trip, in registration order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    pub parks: Vec<Park>,
    pub visitors: Vec<Visitor>,
    pub trips: Vec<Trip>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parks(mut self, parks: Vec<Park>) -> Self {
        self.parks = parks;
        self
    }

    pub fn with_visitors(mut self, visitors: Vec<Visitor>) -> Self {
        self.visitors = visitors;
        self
    }

    pub fn with_trips(mut self, trips: Vec<Trip>) -> Self {
        self.trips = trips;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Main trait for park graph operations
///
/// Trips are the only relationship store: parks and visitors never hold
/// their trips directly. Any id not registered in the graph is rejected with
/// a validation error.
pub trait ParkGraph: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Park Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create and register a new park
    fn create_park(&self, name: &str) -> Result<Park>;

    /// Get a park by id
    fn get_park(&self, id: &ParkId) -> Result<Option<Park>>;

    /// Always fails: park names are write-once
    fn rename_park(&self, id: &ParkId, name: &str) -> Result<Park>;

    /// All parks in registration order
    fn list_parks(&self) -> Result<Vec<Park>>;

    /// Trips to a park, in registration order
    fn park_trips(&self, id: &ParkId) -> Result<Vec<Trip>>;

    /// Distinct visitors of a park, ordered by first trip
    fn park_visitors(&self, id: &ParkId) -> Result<Vec<Visitor>>;

    /// Number of trips to a park
    fn park_total_visits(&self, id: &ParkId) -> Result<usize>;

    /// Visitor with the most trips to a park
    ///
    /// Ties go to the visitor whose first trip there was registered earliest.
    /// `None` when the park has no trips.
    fn best_visitor(&self, id: &ParkId) -> Result<Option<Visitor>>;

    /// Park with the most trips across the whole graph
    ///
    /// Ties go to the park registered earliest. `None` when there are no
    /// parks or no park has been visited.
    fn most_visited(&self) -> Result<Option<Park>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Visitor Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create and register a new visitor
    fn create_visitor(&self, name: &str) -> Result<Visitor>;

    /// Get a visitor by id
    fn get_visitor(&self, id: &VisitorId) -> Result<Option<Visitor>>;

    /// Change a visitor's name
    fn rename_visitor(&self, id: &VisitorId, name: &str) -> Result<Visitor>;

    /// All visitors in registration order
    fn list_visitors(&self) -> Result<Vec<Visitor>>;

    /// Trips taken by a visitor, in registration order
    fn visitor_trips(&self, id: &VisitorId) -> Result<Vec<Trip>>;

    /// Distinct parks a visitor has been to, ordered by first trip
    fn visitor_parks(&self, id: &VisitorId) -> Result<Vec<Park>>;

    /// Number of trips a visitor took to one park
    fn total_visits_at_park(&self, visitor: &VisitorId, park: &ParkId) -> Result<usize>;

    // ─────────────────────────────────────────────────────────────────────────
    // Trip Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create and register a new trip
    fn create_trip(&self, trip: NewTrip) -> Result<Trip>;

    /// Get a trip by id
    fn get_trip(&self, id: &TripId) -> Result<Option<Trip>>;

    /// Change a trip's start date
    fn set_trip_start_date(&self, id: &TripId, date: &str) -> Result<Trip>;

    /// Change a trip's end date
    fn set_trip_end_date(&self, id: &TripId, date: &str) -> Result<Trip>;

    /// All trips in registration order
    fn list_trips(&self) -> Result<Vec<Trip>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Graph Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Read the entire graph
    fn read_graph(&self) -> Result<Graph> {
        Ok(Graph::new()
            .with_parks(self.list_parks()?)
            .with_visitors(self.list_visitors()?)
            .with_trips(self.list_trips()?))
    }
}
