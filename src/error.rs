//! Errors raised while loading route data, building the graph or answering a query.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RouteError {
    /// a row of the edge table has a missing field or a cost that is not a number.
    /// record is the 1-based rank of the data record (header excluded)
    #[error("malformed record {record}: {reason}")]
    MalformedRecord { record: usize, reason: String },
    /// a row of a location table file cannot be used
    #[error("malformed location at record {record}: {reason}")]
    MalformedLocation { record: usize, reason: String },
    /// shortest path engine asked to start from a node absent of graph
    #[error("origin {0} is not a node of the graph")]
    UnknownOrigin(String),
    #[error("no location configured for index {0}")]
    UnknownLocationIndex(u32),
    /// one or more resolved names are absent of graph
    #[error("node(s) {} not in graph", .0.join(", "))]
    NodeNotInGraph(Vec<String>),
    #[error("no edge between {0} and {1}")]
    EdgeNotFound(String, String),
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RouteError>;
