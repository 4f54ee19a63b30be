//! small types shared by loader and graph

pub mod edge;

pub use edge::RouteEdge;
