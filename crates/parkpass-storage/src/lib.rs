//! Parkpass Storage - Storage backends for the park graph
//!
//! This crate provides the in-memory context that owns the park, visitor
//! and trip registries along with the indexes used to answer queries.

pub mod memory;

pub use memory::MemoryStorage;
