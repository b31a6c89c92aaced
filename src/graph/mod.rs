//! Transport graph: static board data and its loaders.
//!
//! The graph is loaded once at startup. Malformed data is fatal
//! (`GraphError`); after loading the graph is read-only and shared by
//! every session through an `Arc`.

pub mod error;
pub mod loader;
pub mod transport;

pub use error::GraphError;
pub use loader::{load_files, load_json, load_text, parse_edges, parse_stations, BoardData};
pub use transport::{Edge, Station, TransportGraph, MAX_STATIONS};
