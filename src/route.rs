//! Answers route queries given as menu indexes.
//!
//! Indexes are resolved through the [LocationTable], names are checked against the [RouteGraph], then
//! the shortest path engine runs from origin. Failures of a query are returned as [RouteError] variants,
//! [RouteQuery::answer] turns success or failure into the text shown to the user.

use std::fmt;

use crate::dijkstra::dijkstra;
use crate::error::{Result, RouteError};
use crate::locations::LocationTable;
use crate::routegraph::RouteGraph;


/// distance of a route. Unreachable is kept apart and is never displayed as a number
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Distance {
    Finite(f64),
    Unreachable,
}

impl Distance {
    /// the engine gives f64::INFINITY for unreachable nodes
    pub fn from_value(value : f64) -> Self {
        if value.is_finite() { Distance::Finite(value) } else { Distance::Unreachable }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(v) => write!(f, "{}", v),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}


/// a successful query
#[derive(Clone, Debug)]
pub struct RouteAnswer<'a> {
    origin : &'a str,
    destination : &'a str,
    distance : Distance,
    /// nodes along the route, from origin to destination. Empty if unreachable
    path : Vec<&'a str>,
}

impl <'a> RouteAnswer<'a> {
    pub fn get_origin(&self) -> &'a str { self.origin }

    pub fn get_destination(&self) -> &'a str { self.destination }

    pub fn get_distance(&self) -> Distance { self.distance }

    pub fn get_path(&self) -> &[&'a str] { &self.path }
}

impl fmt::Display for RouteAnswer<'_> {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "distance from {} to {} is {}", self.origin, self.destination, self.distance)?;
        if self.distance.is_reachable() && self.path.len() > 1 {
            write!(f, "\nroute: {}", self.path.join(" -> "))?;
        }
        Ok(())
    }
}


/// Query facade over a built graph and the location table. Both are borrowed, nothing is mutated.
pub struct RouteQuery<'a> {
    graph : &'a RouteGraph,
    locations : &'a LocationTable,
}


impl <'a> RouteQuery<'a> {

    pub fn new(graph : &'a RouteGraph, locations : &'a LocationTable) -> Self {
        RouteQuery{graph, locations}
    }

    pub fn get_graph(&self) -> &'a RouteGraph { self.graph }

    pub fn get_locations(&self) -> &'a LocationTable { self.locations }

    // index to name, name must be a node
    fn resolve_in_graph(&self, index : u32) -> Result<&'a str> {
        let name = self.locations.resolve(index)?;
        if !self.graph.has_node(name) {
            return Err(RouteError::NodeNotInGraph(vec![String::from(name)]));
        }
        Ok(name)
    }


    /// shortest route between two locations given by index
    pub fn shortest(&self, origin_index : u32, destination_index : u32) -> Result<RouteAnswer<'a>> {
        let origin = self.locations.resolve(origin_index)?;
        let destination = self.locations.resolve(destination_index)?;
        let missing : Vec<String> = [origin, destination].iter()
                .filter(|name| !self.graph.has_node(name))
                .map(|name| String::from(*name))
                .collect();
        if !missing.is_empty() {
            log::debug!("shortest {} -> {} : missing {:?}", origin_index, destination_index, missing);
            return Err(RouteError::NodeNotInGraph(missing));
        }
        let paths = dijkstra(self.graph, origin).map_err(|e| {
            log::error!("internal error, origin {} validated but rejected by engine : {}", origin, e);
            e
        })?;
        let distance = Distance::from_value(paths.get_distance(destination).unwrap_or(f64::INFINITY));
        let path = paths.path_to(destination).unwrap_or_default();
        log::info!("shortest {} -> {} : {}", origin, destination, distance);
        Ok(RouteAnswer{origin, destination, distance, path})
    } // end of shortest


    /// names of locations directly connected to a location given by index
    pub fn neighbors_of(&self, index : u32) -> Result<Vec<&'a str>> {
        let name = self.resolve_in_graph(index)?;
        self.graph.neighbors(name)
    }


    /// text answer to a route query. Errors are reported in the text, never propagated.
    pub fn answer(&self, origin_index : u32, destination_index : u32) -> String {
        match self.shortest(origin_index, destination_index) {
            Ok(answer) => answer.to_string(),
            Err(e) => format!("error: {}", e),
        }
    }


    /// text answer to a neighbours query
    pub fn answer_neighbors(&self, index : u32) -> String {
        match self.neighbors_of(index) {
            Ok(neighbours) if neighbours.is_empty() => {
                format!("{} has no direct route", self.locations.get_name(index).unwrap_or_default())
            },
            Ok(neighbours) => {
                format!("neighbours of {} : {}", self.locations.get_name(index).unwrap_or_default(), neighbours.join(", "))
            },
            Err(e) => format!("error: {}", e),
        }
    } // end of answer_neighbors

} // end of impl RouteQuery


//=====================================================================================


// end of mod tests
