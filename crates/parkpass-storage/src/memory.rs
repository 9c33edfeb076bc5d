//! In-memory park graph

use parkpass_core::{
    Error, Graph, GraphConfig, NewTrip, Park, ParkGraph, ParkId, Result, Trip, TripId, ValidationError,
    Visitor, VisitorId,
};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Registries plus the indexes derived from them
///
/// Every `Vec` is append-only, so positions stored in the indexes stay valid.
#[derive(Default)]
struct State {
    parks: Vec<Park>,
    park_index: HashMap<ParkId, usize>,
    visitors: Vec<Visitor>,
    visitor_index: HashMap<VisitorId, usize>,
    trips: Vec<Trip>,
    trip_index: HashMap<TripId, usize>,
    trips_by_park: HashMap<ParkId, Vec<usize>>,
    trips_by_visitor: HashMap<VisitorId, Vec<usize>>,
}

impl State {
    fn park(&self, id: &ParkId) -> std::result::Result<&Park, ValidationError> {
        self.park_index
            .get(id)
            .map(|&i| &self.parks[i])
            .ok_or(ValidationError::UnknownPark(*id))
    }

    fn visitor(&self, id: &VisitorId) -> std::result::Result<&Visitor, ValidationError> {
        self.visitor_index
            .get(id)
            .map(|&i| &self.visitors[i])
            .ok_or(ValidationError::UnknownVisitor(*id))
    }

    fn trip_mut(&mut self, id: &TripId) -> std::result::Result<&mut Trip, ValidationError> {
        match self.trip_index.get(id) {
            Some(&i) => Ok(&mut self.trips[i]),
            None => Err(ValidationError::UnknownTrip(*id)),
        }
    }

    fn trips_at<'a>(
        &'a self,
        positions: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a Trip> + 'a {
        positions
            .into_iter()
            .flatten()
            .map(move |&i| &self.trips[i])
    }

    fn park_trips<'a>(&'a self, id: &ParkId) -> impl Iterator<Item = &'a Trip> + 'a {
        self.trips_at(self.trips_by_park.get(id))
    }

    fn visitor_trips<'a>(&'a self, id: &VisitorId) -> impl Iterator<Item = &'a Trip> + 'a {
        self.trips_at(self.trips_by_visitor.get(id))
    }

    fn park_visit_count(&self, id: &ParkId) -> usize {
        self.trips_by_park.get(id).map_or(0, Vec::len)
    }
}

/// Count occurrences of each key, ordered by first appearance
fn tally<K: Copy + Eq + Hash>(keys: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();
    for key in keys {
        match positions.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

/// Highest count wins; the earliest entry wins ties
fn first_max<K>(counts: impl IntoIterator<Item = (K, usize)>) -> Option<(K, usize)> {
    counts.into_iter().fold(None, |best, (key, count)| match best {
        Some((_, best_count)) if best_count >= count => best,
        _ => Some((key, count)),
    })
}

fn rejected<E: std::fmt::Display>(what: &'static str) -> impl Fn(E) -> E {
    move |e| {
        tracing::warn!("Rejected {}: {}", what, e);
        e
    }
}

/// In-memory park graph
///
/// Trips are indexed by park and by visitor as they are created, so
/// per-park and per-visitor queries only touch the relevant trips.
pub struct MemoryStorage {
    state: RwLock<State>,
    config: GraphConfig,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
            config: GraphConfig::default(),
        }
    }

    /// Create a graph that validates writes against `config.limits`
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        config.limits.validate()?;
        Ok(Self {
            state: RwLock::new(State::default()),
            config,
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|e| Error::Storage(format!("Lock error: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|e| Error::Storage(format!("Lock error: {}", e)))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ParkGraph for MemoryStorage {
    // Park operations

    fn create_park(&self, name: &str) -> Result<Park> {
        let park = Park::with_limits(name, &self.config.limits).map_err(rejected("park"))?;

        let mut state = self.write()?;
        let position = state.parks.len();
        state.park_index.insert(park.id, position);
        state.parks.push(park.clone());

        tracing::debug!("Created park: {} ({})", park.name(), park.id);
        Ok(park)
    }

    fn get_park(&self, id: &ParkId) -> Result<Option<Park>> {
        let state = self.read()?;
        Ok(state.park(id).ok().cloned())
    }

    fn rename_park(&self, id: &ParkId, name: &str) -> Result<Park> {
        let mut state = self.write()?;
        let position = *state
            .park_index
            .get(id)
            .ok_or(ValidationError::UnknownPark(*id))?;
        let park = &mut state.parks[position];
        park.rename(name).map_err(rejected("park rename"))?;
        Ok(park.clone())
    }

    fn list_parks(&self) -> Result<Vec<Park>> {
        let state = self.read()?;
        Ok(state.parks.clone())
    }

    fn park_trips(&self, id: &ParkId) -> Result<Vec<Trip>> {
        let state = self.read()?;
        state.park(id)?;
        Ok(state.park_trips(id).cloned().collect())
    }

    fn park_visitors(&self, id: &ParkId) -> Result<Vec<Visitor>> {
        let state = self.read()?;
        state.park(id)?;
        let counts = tally(state.park_trips(id).map(Trip::visitor_id));
        counts
            .into_iter()
            .map(|(visitor_id, _)| state.visitor(&visitor_id).cloned().map_err(Error::from))
            .collect()
    }

    fn park_total_visits(&self, id: &ParkId) -> Result<usize> {
        let state = self.read()?;
        state.park(id)?;
        Ok(state.park_visit_count(id))
    }

    fn best_visitor(&self, id: &ParkId) -> Result<Option<Visitor>> {
        let state = self.read()?;
        state.park(id)?;
        let counts = tally(state.park_trips(id).map(Trip::visitor_id));
        match first_max(counts) {
            Some((visitor_id, count)) => {
                tracing::debug!("Best visitor at {}: {} ({} trips)", id, visitor_id, count);
                Ok(Some(state.visitor(&visitor_id)?.clone()))
            }
            None => Ok(None),
        }
    }

    fn most_visited(&self) -> Result<Option<Park>> {
        let state = self.read()?;
        let counts = state
            .parks
            .iter()
            .map(|park| (park, state.park_visit_count(&park.id)));
        Ok(match first_max(counts) {
            Some((park, count)) if count > 0 => Some(park.clone()),
            _ => None,
        })
    }

    // Visitor operations

    fn create_visitor(&self, name: &str) -> Result<Visitor> {
        let visitor =
            Visitor::with_limits(name, &self.config.limits).map_err(rejected("visitor"))?;

        let mut state = self.write()?;
        let position = state.visitors.len();
        state.visitor_index.insert(visitor.id, position);
        state.visitors.push(visitor.clone());

        tracing::debug!("Created visitor: {} ({})", visitor.name(), visitor.id);
        Ok(visitor)
    }

    fn get_visitor(&self, id: &VisitorId) -> Result<Option<Visitor>> {
        let state = self.read()?;
        Ok(state.visitor(id).ok().cloned())
    }

    fn rename_visitor(&self, id: &VisitorId, name: &str) -> Result<Visitor> {
        let mut state = self.write()?;
        let position = *state
            .visitor_index
            .get(id)
            .ok_or(ValidationError::UnknownVisitor(*id))?;
        let visitor = &mut state.visitors[position];
        visitor
            .set_name_with_limits(name, &self.config.limits)
            .map_err(rejected("visitor rename"))?;

        tracing::debug!("Renamed visitor {} to {}", visitor.id, visitor.name());
        Ok(visitor.clone())
    }

    fn list_visitors(&self) -> Result<Vec<Visitor>> {
        let state = self.read()?;
        Ok(state.visitors.clone())
    }

    fn visitor_trips(&self, id: &VisitorId) -> Result<Vec<Trip>> {
        let state = self.read()?;
        state.visitor(id)?;
        Ok(state.visitor_trips(id).cloned().collect())
    }

    fn visitor_parks(&self, id: &VisitorId) -> Result<Vec<Park>> {
        let state = self.read()?;
        state.visitor(id)?;
        let counts = tally(state.visitor_trips(id).map(Trip::park_id));
        counts
            .into_iter()
            .map(|(park_id, _)| state.park(&park_id).cloned().map_err(Error::from))
            .collect()
    }

    fn total_visits_at_park(&self, visitor: &VisitorId, park: &ParkId) -> Result<usize> {
        let state = self.read()?;
        state.visitor(visitor)?;
        state.park(park).map_err(rejected("park lookup"))?;
        Ok(state
            .visitor_trips(visitor)
            .filter(|trip| trip.park_id() == *park)
            .count())
    }

    // Trip operations

    fn create_trip(&self, trip: NewTrip) -> Result<Trip> {
        let mut state = self.write()?;
        let visitor = state.visitor(&trip.visitor_id).map_err(rejected("trip"))?;
        let park = state.park(&trip.park_id).map_err(rejected("trip"))?;
        let trip = Trip::with_limits(
            visitor,
            park,
            trip.start_date,
            trip.end_date,
            &self.config.limits,
        )
        .map_err(rejected("trip"))?;

        let position = state.trips.len();
        state.trip_index.insert(trip.id, position);
        state
            .trips_by_park
            .entry(trip.park_id())
            .or_default()
            .push(position);
        state
            .trips_by_visitor
            .entry(trip.visitor_id())
            .or_default()
            .push(position);
        state.trips.push(trip.clone());

        tracing::debug!(
            "Created trip {}: visitor {} at park {}",
            trip.id,
            trip.visitor_id(),
            trip.park_id()
        );
        Ok(trip)
    }

    fn get_trip(&self, id: &TripId) -> Result<Option<Trip>> {
        let state = self.read()?;
        Ok(state.trip_index.get(id).map(|&i| state.trips[i].clone()))
    }

    fn set_trip_start_date(&self, id: &TripId, date: &str) -> Result<Trip> {
        let mut state = self.write()?;
        let trip = state.trip_mut(id)?;
        trip.set_start_date_with_limits(date, &self.config.limits)
            .map_err(rejected("start date"))?;
        Ok(trip.clone())
    }

    fn set_trip_end_date(&self, id: &TripId, date: &str) -> Result<Trip> {
        let mut state = self.write()?;
        let trip = state.trip_mut(id)?;
        trip.set_end_date_with_limits(date, &self.config.limits)
            .map_err(rejected("end date"))?;
        Ok(trip.clone())
    }

    fn list_trips(&self) -> Result<Vec<Trip>> {
        let state = self.read()?;
        Ok(state.trips.clone())
    }

    // Graph operations

    fn read_graph(&self) -> Result<Graph> {
        let state = self.read()?;
        Ok(Graph::new()
            .with_parks(state.parks.clone())
            .with_visitors(state.visitors.clone())
            .with_trips(state.trips.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkpass_core::Limits;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn validation(err: Error) -> ValidationError {
        match err {
            Error::Validation(e) => e,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    fn trip(storage: &MemoryStorage, visitor: &Visitor, park: &Park) -> Trip {
        storage
            .create_trip(NewTrip::new(visitor.id, park.id, "May 15th", "May 20th"))
            .unwrap()
    }

    #[test]
    fn test_memory_storage() {
        init_tracing();
        let storage = MemoryStorage::new();

        let park = storage.create_park("Yosemite").unwrap();
        let visitor = storage.create_visitor("Steve").unwrap();
        let created = trip(&storage, &visitor, &park);

        assert_eq!(storage.get_park(&park.id).unwrap(), Some(park.clone()));
        assert_eq!(storage.get_visitor(&visitor.id).unwrap(), Some(visitor.clone()));
        assert_eq!(storage.get_trip(&created.id).unwrap(), Some(created.clone()));
        assert_eq!(storage.get_park(&ParkId::new()).unwrap(), None);
        assert_eq!(storage.get_trip(&TripId::new()).unwrap(), None);
    }

    #[test]
    fn test_park_and_visitor_validation() {
        let storage = MemoryStorage::new();

        assert_eq!(
            validation(storage.create_park("Ab").unwrap_err()),
            ValidationError::ParkNameTooShort { len: 2, min: 3 }
        );
        assert!(storage.create_visitor("").is_err());
        assert!(storage.create_visitor("Sixteen_chars___").is_err());
        assert!(storage.list_parks().unwrap().is_empty());
        assert!(storage.list_visitors().unwrap().is_empty());
    }

    #[test]
    fn test_rename_park_always_fails() {
        let storage = MemoryStorage::new();
        let park = storage.create_park("Yosemite").unwrap();

        for name in ["Grand Canyon", "x"] {
            assert_eq!(
                validation(storage.rename_park(&park.id, name).unwrap_err()),
                ValidationError::ParkNameImmutable
            );
        }
        assert_eq!(storage.get_park(&park.id).unwrap().unwrap().name(), "Yosemite");

        let unknown = ParkId::new();
        assert_eq!(
            validation(storage.rename_park(&unknown, "Acadia").unwrap_err()),
            ValidationError::UnknownPark(unknown)
        );
    }

    #[test]
    fn test_rename_visitor() {
        let storage = MemoryStorage::new();
        let visitor = storage.create_visitor("Steve").unwrap();

        let renamed = storage.rename_visitor(&visitor.id, "Stephanie").unwrap();
        assert_eq!(renamed.name(), "Stephanie");

        assert!(storage.rename_visitor(&visitor.id, "").is_err());
        assert!(storage
            .rename_visitor(&visitor.id, "Much too long a name")
            .is_err());
        let stored = storage.get_visitor(&visitor.id).unwrap().unwrap();
        assert_eq!(stored.name(), "Stephanie");
    }

    #[test]
    fn test_invalid_trip_is_not_registered() {
        let storage = MemoryStorage::new();
        let park = storage.create_park("Yosemite").unwrap();
        let visitor = storage.create_visitor("Steve").unwrap();
        let stranger = VisitorId::new();
        let nowhere = ParkId::new();

        let err = storage
            .create_trip(NewTrip::new(stranger, park.id, "May 15th", "May 20th"))
            .unwrap_err();
        assert_eq!(validation(err), ValidationError::UnknownVisitor(stranger));

        let err = storage
            .create_trip(NewTrip::new(visitor.id, nowhere, "May 15th", "May 20th"))
            .unwrap_err();
        assert_eq!(validation(err), ValidationError::UnknownPark(nowhere));

        let err = storage
            .create_trip(NewTrip::new(visitor.id, park.id, "May 1", "May 20th"))
            .unwrap_err();
        assert!(matches!(
            validation(err),
            ValidationError::StartDateTooShort { .. }
        ));

        assert!(storage.list_trips().unwrap().is_empty());
        assert_eq!(storage.park_total_visits(&park.id).unwrap(), 0);
        assert!(storage.visitor_trips(&visitor.id).unwrap().is_empty());
    }

    #[test]
    fn test_trip_date_updates() {
        let storage = MemoryStorage::new();
        let park = storage.create_park("Yosemite").unwrap();
        let visitor = storage.create_visitor("Steve").unwrap();
        let created = trip(&storage, &visitor, &park);

        let updated = storage.set_trip_start_date(&created.id, "June 1st").unwrap();
        assert_eq!(updated.start_date(), "June 1st");
        let updated = storage.set_trip_end_date(&created.id, "June 9th").unwrap();
        assert_eq!(updated.end_date(), "June 9th");

        assert!(storage.set_trip_start_date(&created.id, "Jun 1").is_err());
        assert!(storage.set_trip_end_date(&created.id, "Jun 9").is_err());

        let stored = storage.get_trip(&created.id).unwrap().unwrap();
        assert_eq!(stored.start_date(), "June 1st");
        assert_eq!(stored.end_date(), "June 9th");
        assert_eq!(stored.visitor_id(), visitor.id);
        assert_eq!(stored.park_id(), park.id);

        let unknown = TripId::new();
        assert_eq!(
            validation(storage.set_trip_end_date(&unknown, "June 9th").unwrap_err()),
            ValidationError::UnknownTrip(unknown)
        );
    }

    #[test]
    fn test_aggregate_queries() {
        init_tracing();
        let storage = MemoryStorage::new();
        let p1 = storage.create_park("Yosemite").unwrap();
        let p2 = storage.create_park("Grand Canyon").unwrap();
        let v = storage.create_visitor("Steve").unwrap();

        trip(&storage, &v, &p1);
        trip(&storage, &v, &p1);
        trip(&storage, &v, &p2);

        assert_eq!(storage.park_total_visits(&p1.id).unwrap(), 2);
        assert_eq!(storage.park_total_visits(&p2.id).unwrap(), 1);
        assert_eq!(storage.park_trips(&p1.id).unwrap().len(), 2);
        assert_eq!(storage.visitor_trips(&v.id).unwrap().len(), 3);

        let parks = storage.visitor_parks(&v.id).unwrap();
        assert_eq!(parks.len(), 2);
        assert_eq!(parks[0].id, p1.id);
        assert_eq!(parks[1].id, p2.id);

        assert_eq!(storage.park_visitors(&p1.id).unwrap(), vec![v.clone()]);
        assert_eq!(storage.best_visitor(&p1.id).unwrap(), Some(v.clone()));
        assert_eq!(storage.most_visited().unwrap().map(|p| p.id), Some(p1.id));

        assert_eq!(storage.total_visits_at_park(&v.id, &p1.id).unwrap(), 2);
        assert_eq!(storage.total_visits_at_park(&v.id, &p2.id).unwrap(), 1);
    }

    #[test]
    fn test_queries_on_unvisited_park() {
        let storage = MemoryStorage::new();
        let park = storage.create_park("Yosemite").unwrap();
        let visitor = storage.create_visitor("Steve").unwrap();

        assert_eq!(storage.best_visitor(&park.id).unwrap(), None);
        assert_eq!(storage.park_total_visits(&park.id).unwrap(), 0);
        assert!(storage.park_trips(&park.id).unwrap().is_empty());
        assert!(storage.park_visitors(&park.id).unwrap().is_empty());
        assert!(storage.visitor_parks(&visitor.id).unwrap().is_empty());
        assert_eq!(storage.total_visits_at_park(&visitor.id, &park.id).unwrap(), 0);
        assert_eq!(storage.most_visited().unwrap(), None);
    }

    #[test]
    fn test_most_visited_empty_registry() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.most_visited().unwrap(), None);
    }

    #[test]
    fn test_total_visits_at_unknown_park() {
        let storage = MemoryStorage::new();
        let visitor = storage.create_visitor("Steve").unwrap();
        let nowhere = ParkId::new();

        let err = storage.total_visits_at_park(&visitor.id, &nowhere).unwrap_err();
        assert_eq!(validation(err), ValidationError::UnknownPark(nowhere));
    }

    #[test]
    fn test_queries_reject_unknown_ids() {
        let storage = MemoryStorage::new();
        let park = ParkId::new();
        let visitor = VisitorId::new();

        assert!(storage.park_trips(&park).is_err());
        assert!(storage.park_visitors(&park).is_err());
        assert!(storage.park_total_visits(&park).is_err());
        assert!(storage.best_visitor(&park).is_err());
        assert!(storage.visitor_trips(&visitor).is_err());
        assert!(storage.visitor_parks(&visitor).is_err());
    }

    #[test]
    fn test_tie_breaks_follow_registration_order() {
        let storage = MemoryStorage::new();
        let yosemite = storage.create_park("Yosemite").unwrap();
        let zion = storage.create_park("Zion").unwrap();
        let alice = storage.create_visitor("Alice").unwrap();
        let bob = storage.create_visitor("Bob").unwrap();

        trip(&storage, &bob, &zion);
        trip(&storage, &alice, &zion);
        trip(&storage, &alice, &yosemite);
        trip(&storage, &bob, &yosemite);

        // Bob reached Zion first, both have one trip there
        assert_eq!(storage.best_visitor(&zion.id).unwrap().unwrap().id, bob.id);
        assert_eq!(
            storage.best_visitor(&yosemite.id).unwrap().unwrap().id,
            alice.id
        );
        // Yosemite was registered first
        assert_eq!(storage.most_visited().unwrap().unwrap().id, yosemite.id);

        // A strictly higher count beats registration order
        trip(&storage, &alice, &zion);
        assert_eq!(storage.best_visitor(&zion.id).unwrap().unwrap().id, alice.id);
        assert_eq!(storage.most_visited().unwrap().unwrap().id, zion.id);
    }

    #[test]
    fn test_visitor_without_trips() {
        let storage = MemoryStorage::new();
        let park = storage.create_park("Yosemite").unwrap();
        let regular = storage.create_visitor("Steve").unwrap();
        let homebody = storage.create_visitor("Dana").unwrap();
        trip(&storage, &regular, &park);

        assert!(storage.visitor_trips(&homebody.id).unwrap().is_empty());
        assert_eq!(storage.park_visitors(&park.id).unwrap(), vec![regular]);
        assert_eq!(storage.list_visitors().unwrap().len(), 2);
    }

    #[test]
    fn test_queries_see_visitor_renames() {
        let storage = MemoryStorage::new();
        let park = storage.create_park("Yosemite").unwrap();
        let visitor = storage.create_visitor("Steve").unwrap();
        trip(&storage, &visitor, &park);

        storage.rename_visitor(&visitor.id, "Stephanie").unwrap();
        let best = storage.best_visitor(&park.id).unwrap().unwrap();
        assert_eq!(best.name(), "Stephanie");
    }

    #[test]
    fn test_with_config_limits() {
        let config = GraphConfig {
            limits: Limits {
                visitor_name_max: 4,
                trip_date_min: 10,
                ..Limits::default()
            },
        };
        let storage = MemoryStorage::with_config(config).unwrap();
        assert_eq!(storage.config().limits.visitor_name_max, 4);
        assert_eq!(storage.config().limits.park_name_min, 3);
        let park = storage.create_park("Yosemite").unwrap();

        assert!(storage.create_visitor("Steve").is_err());
        let visitor = storage.create_visitor("Stu").unwrap();

        assert!(storage
            .create_trip(NewTrip::new(visitor.id, park.id, "May 15th", "May 20th"))
            .is_err());
        assert!(storage
            .create_trip(NewTrip::new(visitor.id, park.id, "2024-05-15", "2024-05-20"))
            .is_ok());
    }

    #[test]
    fn test_with_config_rejects_invalid_limits() {
        let config = GraphConfig {
            limits: Limits {
                visitor_name_min: 0,
                ..Limits::default()
            },
        };
        assert!(MemoryStorage::with_config(config).is_err());
    }

    #[test]
    fn test_read_graph() {
        let storage = MemoryStorage::new();
        let park = storage.create_park("Yosemite").unwrap();
        let visitor = storage.create_visitor("Steve").unwrap();
        trip(&storage, &visitor, &park);

        let graph = storage.read_graph().unwrap();
        assert_eq!(graph.parks, vec![park]);
        assert_eq!(graph.visitors, vec![visitor]);
        assert_eq!(graph.trips.len(), 1);
        assert!(graph.to_json().unwrap().contains("Yosemite"));
    }

    #[test]
    fn test_shared_across_threads() {
        let storage = std::sync::Arc::new(MemoryStorage::new());
        let park = storage.create_park("Yosemite").unwrap();
        let visitor = storage.create_visitor("Steve").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let storage = storage.clone();
                let (visitor_id, park_id) = (visitor.id, park.id);
                std::thread::spawn(move || {
                    storage
                        .create_trip(NewTrip::new(visitor_id, park_id, "May 15th", "May 20th"))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(storage.park_total_visits(&park.id).unwrap(), 4);
    }

    #[test]
    fn test_default_config() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.config(), &GraphConfig::default());
    }

    #[test]
    fn test_read_graph_is_consistent_under_writes() {
        let storage = std::sync::Arc::new(MemoryStorage::new());
        let park = storage.create_park("Yosemite").unwrap();

        let writer = {
            let storage = storage.clone();
            let park_id = park.id;
            std::thread::spawn(move || {
                for _ in 0..200 {
                    let visitor = storage.create_visitor("Steve").unwrap();
                    storage
                        .create_trip(NewTrip::new(visitor.id, park_id, "May 15th", "May 20th"))
                        .unwrap();
                }
            })
        };

        for _ in 0..200 {
            let graph = storage.read_graph().unwrap();
            for trip in &graph.trips {
                assert!(graph.visitors.iter().any(|v| v.id == trip.visitor_id()));
                assert!(graph.parks.iter().any(|p| p.id == trip.park_id()));
            }
        }
        writer.join().unwrap();

        let graph = storage.read_graph().unwrap();
        assert_eq!(graph.visitors.len(), 200);
        assert_eq!(graph.trips.len(), 200);
    }
}
