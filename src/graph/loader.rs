//! Board data loading.
//!
//! Two text formats and one JSON format are accepted:
//!
//! - Edge list, one edge per line: `a,b,mode` (e.g. `1,8,taxi`)
//! - Station list, one station per line: `id,x,y`
//! - JSON: `{ "stations": [{"id":1,"x":10,"y":20}], "edges": [{"a":1,"b":8,"mode":"short"}] }`
//!
//! Blank lines and lines starting with `#` are skipped. Line numbers in
//! errors are 1-based.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::GraphError;
use super::transport::{Edge, Station, TransportGraph};
use crate::core::{StationId, TransportMode};

/// Serialized board description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default)]
    pub stations: Vec<Station>,
    pub edges: Vec<Edge>,
}

impl BoardData {
    /// Build the graph. Without stations the count is inferred from the edges.
    pub fn into_graph(self) -> Result<TransportGraph, GraphError> {
        if self.stations.is_empty() {
            TransportGraph::from_edges(self.edges)
        } else {
            TransportGraph::new(self.stations, self.edges)
        }
    }
}

/// Parse an edge list.
pub fn parse_edges(text: &str) -> Result<Vec<Edge>, GraphError> {
    data_lines(text)
        .map(|(line, content)| -> Result<Edge, GraphError> {
            let fields = split_fields(line, content, 3)?;
            let mode: TransportMode = fields[2]
                .parse()
                .map_err(|source| GraphError::UnknownMode { line, source })?;
            Ok(Edge::new(
                StationId(parse_number(line, fields[0])?),
                StationId(parse_number(line, fields[1])?),
                mode,
            ))
        })
        .collect()
}

/// Parse a station list.
pub fn parse_stations(text: &str) -> Result<Vec<Station>, GraphError> {
    data_lines(text)
        .map(|(line, content)| -> Result<Station, GraphError> {
            let fields = split_fields(line, content, 3)?;
            let id = parse_number(line, fields[0])?;
            let x = parse_coordinate(line, fields[1])?;
            let y = parse_coordinate(line, fields[2])?;
            Ok(Station::new(StationId(id), x, y))
        })
        .collect()
}

/// Parse a JSON board and build its graph.
pub fn load_json(json: &str) -> Result<TransportGraph, GraphError> {
    let data: BoardData = serde_json::from_str(json)?;
    let graph = data.into_graph()?;
    log_loaded(&graph);
    Ok(graph)
}

/// Build a graph from in-memory edge and (optional) station text.
pub fn load_text(edges: &str, stations: Option<&str>) -> Result<TransportGraph, GraphError> {
    let edges = parse_edges(edges)?;
    let graph = match stations {
        Some(text) => TransportGraph::new(parse_stations(text)?, edges)?,
        None => TransportGraph::from_edges(edges)?,
    };
    log_loaded(&graph);
    Ok(graph)
}

/// Read edge and (optional) station files from disk.
pub fn load_files(edges_path: &Path, stations_path: Option<&Path>) -> Result<TransportGraph, GraphError> {
    let edges = read(edges_path)?;
    let stations = stations_path.map(read).transpose()?;
    load_text(&edges, stations.as_deref())
}

fn read(path: &Path) -> Result<String, GraphError> {
    std::fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn log_loaded(graph: &TransportGraph) {
    info!(
        stations = graph.station_count(),
        edges = graph.edges().len(),
        "loaded transport graph"
    );
}

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.lines()
        .enumerate()
        .map(|(i, content)| (i + 1, content.trim()))
        .filter(|(_, content)| !content.is_empty() && !content.starts_with('#'))
}

fn split_fields(line: usize, content: &str, expected: usize) -> Result<Vec<&str>, GraphError> {
    let fields: Vec<&str> = content.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(GraphError::Malformed {
            line,
            reason: format!("expected {} comma-separated fields, found {}", expected, fields.len()),
        });
    }
    Ok(fields)
}

fn parse_number(line: usize, field: &str) -> Result<u32, GraphError> {
    field.parse().map_err(|_| GraphError::Malformed {
        line,
        reason: format!("`{}` is not a station number", field),
    })
}

fn parse_coordinate(line: usize, field: &str) -> Result<i32, GraphError> {
    field.parse().map_err(|_| GraphError::Malformed {
        line,
        reason: format!("`{}` is not a coordinate", field),
    })
}
