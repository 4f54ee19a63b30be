//! To ease access to most frequently items
//! 


pub use crate::error::RouteError;
pub use crate::tools::edge::RouteEdge;
pub use crate::io::{csv::*, output::*};

pub use crate::routegraph::RouteGraph;
pub use crate::dijkstra::{dijkstra, dijkstra_heap, all_pairs, ShortestPaths};
pub use crate::locations::{LocationTable, DEFAULT_LOCATIONS};
pub use crate::route::{Distance, RouteAnswer, RouteQuery};
