//! lib target
//!
//! Shortest routes between a small set of named locations.
//!
//! - [io::csv] reads the edge table and the location table,
//! - [routegraph::RouteGraph] stores the undirected weighted graph,
//! - [dijkstra] computes single source shortest distances,
//! - [route::RouteQuery] answers queries given as menu indexes,
//! - [io::output] dumps the graph for visualization.


use env_logger::{Builder};

#[macro_use]
extern crate  lazy_static;

lazy_static! {
    pub static ref LOG: u64 = {
        let res = init_log();
        res
    };
}

// install a logger facility
fn init_log() -> u64 {
    Builder::from_default_env().init();
    log::debug!("logger initialized");
    return 1;
}

pub mod error;

pub mod tools;

pub mod io;

pub mod routegraph;

pub mod dijkstra;

pub mod locations;

pub mod route;

pub mod prelude;
