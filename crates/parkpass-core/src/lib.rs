//! Parkpass Core - Parks, visitors and the trips between them
//!
//! This crate provides the validated record types, limits and the
//! `ParkGraph` trait that storage backends implement.

pub mod config;
pub mod error;
pub mod graph;
pub mod limits;
pub mod park;
pub mod trip;
pub mod visitor;

pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Graph, ParkGraph};
pub use limits::{Limits, ValidationError};
pub use park::{Park, ParkId};
pub use trip::{NewTrip, Trip, TripId};
pub use visitor::{Visitor, VisitorId};
