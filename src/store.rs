//! Event data model and the typed per-event data store
//!
//! Towers, geometry entries and vertices are owned by the surrounding
//! framework's event store and borrowed read-only for the duration of one
//! pipeline call. [`EventDataStore`] is the lookup seam; absence of a
//! product is a normal, non-exceptional outcome and is reported as `None`.
//! [`InMemoryEventStore`] is the bundled adapter used by tests and by
//! frameworks that materialize one event at a time.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Detector-wide unique tower identifier.
pub type TowerId = u32;

/// Node key of the per-event vertex collection.
pub const GLOBAL_VERTEX_MAP: &str = "GlobalVertexMap";

// ═══════════════════════════════════════════════════════════════════════════
// VALUE TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// One calorimeter cell's calibrated energy deposit for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerRecord {
    pub id: TowerId,
    /// Calibrated energy; sign and magnitude are not filtered here.
    pub energy: f64,
}

/// Physical center and radius of one tower, from the static geometry table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub center_z: f64,
    /// Distance of the tower center from the beam axis.
    pub center_radius: f64,
}

impl TowerGeometry {
    pub fn new(center_x: f64, center_y: f64, center_z: f64, center_radius: f64) -> Self {
        Self { center_x, center_y, center_z, center_radius }
    }
}

/// Reconstructed primary interaction point. Only `z` is consumed by the
/// jet-input pipeline; `z` may be NaN when the reconstruction failed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EventVertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EventVertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vertex on the beam axis at the given z.
    pub fn at_z(z: f64) -> Self {
        Self { x: 0.0, y: 0.0, z }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CONTAINERS
// ═══════════════════════════════════════════════════════════════════════════

/// Calibrated towers of one subdetector for one event.
///
/// Enumeration order is ascending tower id: deterministic, but carrying no
/// physical meaning (ids do not sort by detector position).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TowerContainer {
    towers: BTreeMap<TowerId, f64>,
}

impl TowerContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a calibrated tower; replaces any previous energy for the id.
    pub fn insert(&mut self, id: TowerId, energy: f64) {
        self.towers.insert(id, energy);
    }

    pub fn get(&self, id: TowerId) -> Option<TowerRecord> {
        self.towers.get(&id).map(|&energy| TowerRecord { id, energy })
    }

    pub fn len(&self) -> usize {
        self.towers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    /// Enumerate every tower, unfiltered, in container order. Each call
    /// starts a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = TowerRecord> + '_ {
        self.towers
            .iter()
            .map(|(&id, &energy)| TowerRecord { id, energy })
    }
}

impl FromIterator<(TowerId, f64)> for TowerContainer {
    fn from_iter<I: IntoIterator<Item = (TowerId, f64)>>(iter: I) -> Self {
        Self { towers: iter.into_iter().collect() }
    }
}

/// Static geometry table of one subdetector, keyed by tower id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TowerGeometryContainer {
    geometries: HashMap<TowerId, TowerGeometry>,
}

impl TowerGeometryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: TowerId, geometry: TowerGeometry) {
        self.geometries.insert(id, geometry);
    }

    pub fn lookup(&self, id: TowerId) -> Option<&TowerGeometry> {
        self.geometries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

impl FromIterator<(TowerId, TowerGeometry)> for TowerGeometryContainer {
    fn from_iter<I: IntoIterator<Item = (TowerId, TowerGeometry)>>(iter: I) -> Self {
        Self { geometries: iter.into_iter().collect() }
    }
}

/// Reconstructed vertices of one event, in reconstruction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexCollection {
    vertices: Vec<EventVertex>,
}

impl VertexCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vertex: EventVertex) {
        self.vertices.push(vertex);
    }

    /// The event's primary vertex: the first entry in collection order.
    /// With more than one vertex the choice is arbitrary; no quality
    /// ranking is applied.
    pub fn primary(&self) -> Option<&EventVertex> {
        self.vertices.first()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventVertex> {
        self.vertices.iter()
    }
}

impl FromIterator<EventVertex> for VertexCollection {
    fn from_iter<I: IntoIterator<Item = EventVertex>>(iter: I) -> Self {
        Self { vertices: iter.into_iter().collect() }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// EVENT DATA STORE
// ═══════════════════════════════════════════════════════════════════════════

/// Typed per-event data-product lookup.
///
/// Implemented by the enclosing framework's event store; `None` means the
/// product was not materialized for this event.
pub trait EventDataStore {
    fn towers(&self, key: &str) -> Option<&TowerContainer>;

    fn tower_geometry(&self, key: &str) -> Option<&TowerGeometryContainer>;

    fn vertex_map(&self, key: &str) -> Option<&VertexCollection>;
}

/// Owning store holding one event's data products, keyed by node name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    towers: HashMap<String, TowerContainer>,
    geometry: HashMap<String, TowerGeometryContainer>,
    vertex_maps: HashMap<String, VertexCollection>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_towers(&mut self, key: impl Into<String>, container: TowerContainer) {
        self.towers.insert(key.into(), container);
    }

    pub fn insert_geometry(&mut self, key: impl Into<String>, container: TowerGeometryContainer) {
        self.geometry.insert(key.into(), container);
    }

    pub fn insert_vertex_map(&mut self, key: impl Into<String>, map: VertexCollection) {
        self.vertex_maps.insert(key.into(), map);
    }

    pub fn with_towers(mut self, key: impl Into<String>, container: TowerContainer) -> Self {
        self.insert_towers(key, container);
        self
    }

    pub fn with_geometry(
        mut self,
        key: impl Into<String>,
        container: TowerGeometryContainer,
    ) -> Self {
        self.insert_geometry(key, container);
        self
    }

    pub fn with_vertex_map(mut self, key: impl Into<String>, map: VertexCollection) -> Self {
        self.insert_vertex_map(key, map);
        self
    }
}

impl EventDataStore for InMemoryEventStore {
    fn towers(&self, key: &str) -> Option<&TowerContainer> {
        self.towers.get(key)
    }

    fn tower_geometry(&self, key: &str) -> Option<&TowerGeometryContainer> {
        self.geometry.get(key)
    }

    fn vertex_map(&self, key: &str) -> Option<&VertexCollection> {
        self.vertex_maps.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tower_enumeration_is_id_ordered() {
        let mut towers = TowerContainer::new();
        towers.insert(30, 1.5);
        towers.insert(10, 2.5);
        towers.insert(20, -0.5);

        let ids: Vec<TowerId> = towers.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_tower_enumeration_keeps_negative_energies() {
        let towers: TowerContainer = [(1, -3.0), (2, 0.0), (3, 9.0)].into_iter().collect();

        let energies: Vec<f64> = towers.iter().map(|t| t.energy).collect();
        assert_eq!(energies, vec![-3.0, 0.0, 9.0]);
    }

    #[test]
    fn test_tower_enumeration_restarts_fresh() {
        let towers: TowerContainer = [(1, 1.0), (2, 2.0)].into_iter().collect();

        let first: Vec<TowerRecord> = towers.iter().collect();
        let second: Vec<TowerRecord> = towers.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_geometry_lookup() {
        let mut geom = TowerGeometryContainer::new();
        geom.insert(5, TowerGeometry::new(100.0, 0.0, 50.0, 100.0));

        assert!(geom.lookup(5).is_some());
        assert!(geom.lookup(6).is_none());
    }

    #[test]
    fn test_primary_vertex_is_first() {
        let map: VertexCollection =
            [EventVertex::at_z(3.0), EventVertex::at_z(-7.0)].into_iter().collect();
        assert_eq!(map.primary().unwrap().z, 3.0);

        assert!(VertexCollection::new().primary().is_none());
    }

    #[test]
    fn test_store_lookup_absence_is_none() {
        let store = InMemoryEventStore::new()
            .with_towers("TOWER_CALIB_CEMC", TowerContainer::new());

        assert!(store.towers("TOWER_CALIB_CEMC").is_some());
        assert!(store.towers("TOWER_CALIB_HCALIN").is_none());
        assert!(store.tower_geometry("TOWERGEOM_CEMC").is_none());
        assert!(store.vertex_map(GLOBAL_VERTEX_MAP).is_none());
    }

    #[test]
    fn test_container_serde_round_trip() {
        let towers: TowerContainer = [(1, 1.25), (9, -0.5)].into_iter().collect();
        let json = serde_json::to_string(&towers).unwrap();
        let back: TowerContainer = serde_json::from_str(&json).unwrap();
        assert_eq!(towers, back);
    }
}
