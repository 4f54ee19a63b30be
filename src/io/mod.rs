//! reading route data and dumping the graph

pub mod csv;

pub mod output;
