//! The transport graph: stations and mode-tagged undirected edges.
//!
//! Built once from static data and never mutated afterwards. Adjacency is
//! stored per station and per mode as sorted, de-duplicated lists, so
//! lookups are a slice access plus a binary search and neighbour order is
//! stable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GraphError;
use crate::core::{StationId, TransportMode};

/// A station on the board.
///
/// Coordinates are only carried through for the renderer; the engine
/// never reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub x: i32,
    pub y: i32,
}

impl Station {
    #[must_use]
    pub fn new(id: StationId, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }
}

/// An undirected edge of one transport mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: StationId,
    pub b: StationId,
    pub mode: TransportMode,
}

impl Edge {
    #[must_use]
    pub fn new(a: StationId, b: StationId, mode: TransportMode) -> Self {
        Self { a, b, mode }
    }

    /// Same edge with endpoints ordered, for de-duplication.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            Self { a: self.b, b: self.a, mode: self.mode }
        }
    }
}

/// Largest board the loader accepts. Adjacency is allocated per station up
/// front, so an oversized id in the edge list is rejected before that.
pub const MAX_STATIONS: u32 = 65_536;

/// Per-station adjacency, one sorted list per mode.
type ModeAdjacency = [Vec<StationId>; 3];

/// Static adjacency data for the whole board.
///
/// ## Example
///
/// ```
/// use pursuit_engine::core::{StationId, TransportMode};
/// use pursuit_engine::graph::{Edge, TransportGraph};
///
/// let graph = TransportGraph::from_edges(vec![
///     Edge::new(StationId(1), StationId(2), TransportMode::Short),
///     Edge::new(StationId(2), StationId(3), TransportMode::Long),
/// ]).unwrap();
///
/// assert_eq!(graph.station_count(), 3);
/// assert!(graph.is_connected(StationId(2), StationId(1), TransportMode::Short));
/// assert!(!graph.is_connected(StationId(1), StationId(2), TransportMode::Long));
/// ```
#[derive(Clone, Debug)]
pub struct TransportGraph {
    station_count: u32,
    /// Indexed by `station - 1`. Empty when the board was built from edges alone.
    stations: Vec<Station>,
    /// Indexed by `station - 1`.
    adjacency: Vec<ModeAdjacency>,
    edges: Vec<Edge>,
}

impl TransportGraph {
    /// Build a graph from a station list and an edge list.
    ///
    /// Station ids must be unique and contiguous from 1 (any order).
    /// Every edge must reference a listed station.
    pub fn new(mut stations: Vec<Station>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        stations.sort_by_key(|s| s.id);
        for (i, station) in stations.iter().enumerate() {
            let expected = StationId(i as u32 + 1);
            if station.id != expected {
                if i > 0 && station.id == stations[i - 1].id {
                    return Err(GraphError::DuplicateStation(station.id));
                }
                return Err(GraphError::NonContiguousStations {
                    expected,
                    found: station.id,
                });
            }
        }
        let station_count = stations.len() as u32;
        Self::build(station_count, stations, edges)
    }

    /// Build a graph from edges alone.
    ///
    /// The station count is the highest id any edge references.
    pub fn from_edges(edges: Vec<Edge>) -> Result<Self, GraphError> {
        let station_count = edges
            .iter()
            .map(|e| e.a.max(e.b).raw())
            .max()
            .unwrap_or(0);
        Self::build(station_count, Vec::new(), edges)
    }

    fn build(station_count: u32, stations: Vec<Station>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        if edges.is_empty() {
            return Err(GraphError::NoEdges);
        }
        if station_count > MAX_STATIONS {
            return Err(GraphError::TooManyStations {
                station_count,
                max: MAX_STATIONS,
            });
        }

        let mut adjacency: Vec<ModeAdjacency> = vec![Default::default(); station_count as usize];
        let mut unique: Vec<Edge> = Vec::with_capacity(edges.len());

        for edge in edges {
            for station in [edge.a, edge.b] {
                if !station.in_range(station_count) {
                    return Err(GraphError::StationOutOfRange {
                        station,
                        station_count,
                    });
                }
            }
            if edge.a == edge.b {
                return Err(GraphError::SelfLoop(edge.a));
            }

            let mode = edge.mode.index();
            adjacency[slot(edge.a)][mode].push(edge.b);
            adjacency[slot(edge.b)][mode].push(edge.a);
            unique.push(edge.normalized());
        }

        for per_mode in &mut adjacency {
            for neighbors in per_mode.iter_mut() {
                neighbors.sort_unstable();
                neighbors.dedup();
            }
        }
        unique.sort_by_key(|e| (e.a, e.b, e.mode));
        unique.dedup();

        Ok(Self {
            station_count,
            stations,
            adjacency,
            edges: unique,
        })
    }

    /// Number of stations on the board.
    #[must_use]
    pub fn station_count(&self) -> u32 {
        self.station_count
    }

    /// Check that a station id exists on this board.
    #[must_use]
    pub fn contains(&self, station: StationId) -> bool {
        station.in_range(self.station_count)
    }

    /// Station record with display coordinates, if stations were loaded.
    #[must_use]
    pub fn station(&self, station: StationId) -> Option<&Station> {
        if !self.contains(station) {
            return None;
        }
        self.stations.get(slot(station))
    }

    /// Stations reachable from `station` in one hop of `mode`.
    ///
    /// Unknown stations have no neighbours.
    #[must_use]
    pub fn neighbors(&self, station: StationId, mode: TransportMode) -> &[StationId] {
        if !self.contains(station) {
            return &[];
        }
        &self.adjacency[slot(station)][mode.index()]
    }

    /// Check if `a` and `b` share an edge of `mode`.
    #[must_use]
    pub fn is_connected(&self, a: StationId, b: StationId, mode: TransportMode) -> bool {
        self.neighbors(a, mode).binary_search(&b).is_ok()
    }

    /// Every mode with an edge between `a` and `b`.
    #[must_use]
    pub fn modes_between(&self, a: StationId, b: StationId) -> SmallVec<[TransportMode; 3]> {
        TransportMode::ALL
            .into_iter()
            .filter(|&mode| self.is_connected(a, b, mode))
            .collect()
    }

    /// Stations reachable from `station` in one hop of any mode, sorted.
    #[must_use]
    pub fn reachable(&self, station: StationId) -> Vec<StationId> {
        let mut all: Vec<StationId> = TransportMode::ALL
            .into_iter()
            .flat_map(|mode| self.neighbors(station, mode).iter().copied())
            .collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    /// Distinct edges, endpoints ordered.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Loaded station records (empty when built from edges alone).
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }
}

fn slot(station: StationId) -> usize {
    station.raw() as usize - 1
}
