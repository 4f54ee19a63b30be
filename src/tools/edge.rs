//! just an edge


use serde::{Deserialize, Serialize};


/// A route read from the edge table: origin, destination and cost of travel.
/// The graph is undirected so origin and destination only keep track of the data file layout.
///
/// Column names are the english ones or the spanish ones of the historical data file
/// (estacion, destino, costo).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEdge {
    #[serde(alias = "estacion")]
    pub origin : String,
    #[serde(alias = "destino")]
    pub destination : String,
    #[serde(alias = "costo")]
    pub cost : f64,
}

impl RouteEdge {
    pub fn new(origin : &str, destination : &str, cost : f64) -> Self {
        RouteEdge{origin : String::from(origin), destination : String::from(destination), cost}
    }

    /// get origin name
    pub fn get_origin(&self) -> &str { &self.origin }

    /// get destination name
    pub fn get_destination(&self) -> &str { &self.destination }

    /// get cost
    pub fn get_cost(&self) -> f64 { self.cost }
}  // end of impl RouteEdge
