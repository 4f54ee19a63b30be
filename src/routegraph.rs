//! The graph of routes: an undirected weighted graph keyed by location names.
//!
//! It is built once from the edge table and then only read by queries.
//! Storage is a petgraph StableGraph, names are mapped to NodeIndex with an IndexMap.
//! As nodes are never removed, the rank of a name in the IndexMap is the index of its NodeIndex,
//! this is what the shortest path engine relies on to keep its tables in plain vectors.


use indexmap::IndexMap;

use petgraph::stable_graph::{NodeIndex, EdgeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::error::{Result, RouteError};
use crate::tools::edge::RouteEdge;


pub struct RouteGraph {
    /// node weight is the location name, edge weight the cost
    graph : StableUnGraph<String, f64>,
    /// name to NodeIndex, in order of first insertion
    nodeset : IndexMap<String, NodeIndex>,
} // end of struct RouteGraph


impl RouteGraph {

    pub fn new() -> Self {
        RouteGraph{graph : StableUnGraph::default(), nodeset : IndexMap::new()}
    }

    /// Build protocol: each edge in input order is given to add_edge
    pub fn from_edges<'b, I>(edges : I) -> Self
        where I : IntoIterator<Item = &'b RouteEdge> {
        let mut graph = RouteGraph::new();
        for edge in edges {
            graph.add_edge(edge.get_origin(), edge.get_destination(), edge.get_cost());
        }
        log::info!("RouteGraph::from_edges built graph with {} nodes and {} edges", graph.nb_nodes(), graph.nb_edges());
        graph
    } // end of from_edges


    /// inserts node if not already present. returns its index in any case.
    pub fn add_node(&mut self, name : &str) -> NodeIndex {
        if let Some(idx) = self.nodeset.get(name) {
            return *idx;
        }
        let idx = self.graph.add_node(String::from(name));
        self.nodeset.insert(String::from(name), idx);
        log::debug!("added node {} at index {}", name, idx.index());
        idx
    } // end of add_node


    /// Creates missing end nodes and the edge. If the pair is already connected the weight is replaced,
    /// the last write wins.
    /// A self loop is not stored.
    pub fn add_edge(&mut self, a : &str, b : &str, weight : f64) {
        if a == b {
            log::warn!("add_edge skipping self loop on {}", a);
            self.add_node(a);
            return;
        }
        if weight < 0. {
            log::warn!("add_edge negative weight {} between {} and {}, shortest paths are unspecified", weight, a, b);
        }
        let idx_a = self.add_node(a);
        let idx_b = self.add_node(b);
        match self.graph.find_edge(idx_a, idx_b) {
            Some(e) => {
                log::debug!("edge {} - {} already present, weight {} replaced by {}", a, b, self.graph[e], weight);
                self.graph[e] = weight;
            },
            None => {
                self.graph.add_edge(idx_a, idx_b, weight);
            },
        }
    } // end of add_edge


    pub fn has_node(&self, name : &str) -> bool {
        self.nodeset.contains_key(name)
    }

    /// node names in order of first insertion
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodeset.keys().map(|s| s.as_str())
    }

    pub fn nb_nodes(&self) -> usize { self.nodeset.len() }

    pub fn nb_edges(&self) -> usize { self.graph.edge_count() }

    /// get NodeIndex of a name, if name is a node
    pub fn get_nodeindex(&self, name : &str) -> Option<NodeIndex> {
        self.nodeset.get(name).copied()
    }

    /// rank of name in node order
    pub fn get_rank(&self, name : &str) -> Option<usize> {
        self.nodeset.get_index_of(name)
    }

    /// name of node at a given rank
    pub fn get_name(&self, rank : usize) -> Option<&str> {
        self.nodeset.get_index(rank).map(|(name, _)| name.as_str())
    }


    /// returns weight of edge between a and b
    pub fn edge_weight(&self, a : &str, b : &str) -> Result<f64> {
        let not_found = || RouteError::EdgeNotFound(String::from(a), String::from(b));
        let idx_a = self.get_nodeindex(a).ok_or_else(not_found)?;
        let idx_b = self.get_nodeindex(b).ok_or_else(not_found)?;
        let e = self.graph.find_edge(idx_a, idx_b).ok_or_else(not_found)?;
        Ok(self.graph[e])
    } // end of edge_weight


    // edges incident to a node, sorted by EdgeIndex, i.e. by insertion order as we never remove edges.
    fn sorted_incident(&self, idx : NodeIndex) -> Vec<(EdgeIndex, NodeIndex, f64)> {
        let mut incident : Vec<(EdgeIndex, NodeIndex, f64)> = self.graph.edges(idx)
                .map(|e| {
                    let other = if e.source() == idx { e.target() } else { e.source() };
                    (e.id(), other, *e.weight())
                })
                .collect();
        incident.sort_unstable_by_key(|t| t.0);
        incident
    }


    /// neighbours of a node, in order of edge insertion
    pub fn neighbors(&self, name : &str) -> Result<Vec<&str>> {
        let idx = self.get_nodeindex(name).ok_or_else(|| RouteError::NodeNotInGraph(vec![String::from(name)]))?;
        let neighbours = self.sorted_incident(idx).into_iter()
                .map(|(_, other, _)| self.graph[other].as_str())
                .collect();
        Ok(neighbours)
    } // end of neighbors


    /// neighbours as (rank, weight) of node at a rank. Empty if rank is out of range
    pub(crate) fn rank_neighbors(&self, rank : usize) -> Vec<(usize, f64)> {
        match self.nodeset.get_index(rank) {
            Some((_, idx)) => {
                self.sorted_incident(*idx).into_iter().map(|(_, other, w)| (other.index(), w)).collect()
            },
            None => Vec::new(),
        }
    } // end of rank_neighbors


    /// each edge once as (a, b, weight), in insertion order. This is what a renderer needs with nodes()
    pub fn edges(&self) -> Vec<(&str, &str, f64)> {
        self.graph.edge_references()
            .map(|e| (self.graph[e.source()].as_str(), self.graph[e.target()].as_str(), *e.weight()))
            .collect()
    } // end of edges


    /// access to underlying petgraph
    pub fn get_graph(&self) -> &StableUnGraph<String, f64> {
        &self.graph
    }

} // end of impl RouteGraph


impl Default for RouteGraph {
    fn default() -> Self {
        RouteGraph::new()
    }
}


//==========================================================================================


#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }


    fn kanto_edges() -> Vec<RouteEdge> {
        vec![
            RouteEdge::new("Pueblo Paleta", "Aldea Azalea", 5.),
            RouteEdge::new("Aldea Azalea", "Ciudad Safiro", 3.),
            RouteEdge::new("Pueblo Paleta", "Ciudad Safiro", 10.),
        ]
    }


    #[test]
    fn build_from_edges() {
        log_init_test();
        //
        let graph = RouteGraph::from_edges(&kanto_edges());
        assert_eq!(graph.nb_nodes(), 3);
        assert_eq!(graph.nb_edges(), 3);
        let nodes : Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["Pueblo Paleta", "Aldea Azalea", "Ciudad Safiro"]);
        // undirected
        assert_eq!(graph.edge_weight("Ciudad Safiro", "Aldea Azalea").unwrap(), 3.);
        assert_eq!(graph.edge_weight("Aldea Azalea", "Ciudad Safiro").unwrap(), 3.);
        for (rank, name) in graph.nodes().enumerate() {
            assert_eq!(graph.get_rank(name), Some(rank));
            assert_eq!(graph.get_nodeindex(name).unwrap().index(), rank);
            assert_eq!(graph.get_name(rank), Some(name));
        }
    } // end of build_from_edges


    #[test]
    fn add_node_idempotent() {
        log_init_test();
        //
        let mut graph = RouteGraph::new();
        let first = graph.add_node("Aldea Fuego");
        let second = graph.add_node("Aldea Fuego");
        assert_eq!(first, second);
        assert_eq!(graph.nb_nodes(), 1);
        assert!(graph.has_node("Aldea Fuego"));
        assert!(graph.neighbors("Aldea Fuego").unwrap().is_empty());
    }


    #[test]
    fn repeated_edge_last_write_wins() {
        log_init_test();
        //
        let mut graph = RouteGraph::new();
        graph.add_edge("Pueblo Paleta", "Aldea Azalea", 5.);
        graph.add_edge("Aldea Azalea", "Pueblo Paleta", 7.);
        assert_eq!(graph.nb_edges(), 1);
        assert_eq!(graph.edge_weight("Pueblo Paleta", "Aldea Azalea").unwrap(), 7.);
    }


    #[test]
    fn hub_destination_is_reused() {
        log_init_test();
        //
        let mut graph = RouteGraph::new();
        graph.add_edge("Pueblo Paleta", "Ciudad Lavanda", 4.);
        graph.add_edge("Aldea Azalea", "Ciudad Lavanda", 2.);
        graph.add_edge("Aldea Fuego", "Ciudad Lavanda", 1.);
        assert_eq!(graph.nb_nodes(), 4);
        assert_eq!(graph.nb_edges(), 3);
        let neighbours = graph.neighbors("Ciudad Lavanda").unwrap();
        assert_eq!(neighbours, vec!["Pueblo Paleta", "Aldea Azalea", "Aldea Fuego"]);
    } // end of hub_destination_is_reused


    #[test]
    fn self_loop_not_stored() {
        log_init_test();
        //
        let mut graph = RouteGraph::new();
        graph.add_edge("Aldea Fuego", "Aldea Fuego", 1.);
        assert!(graph.has_node("Aldea Fuego"));
        assert_eq!(graph.nb_edges(), 0);
        assert!(matches!(graph.edge_weight("Aldea Fuego", "Aldea Fuego"), Err(RouteError::EdgeNotFound(_, _))));
    }


    #[test]
    fn missing_edge_and_node() {
        log_init_test();
        //
        let graph = RouteGraph::from_edges(&kanto_edges());
        graph.edges().iter().for_each(|e| log::debug!("{:?}", e));
        assert!(matches!(graph.edge_weight("Pueblo Paleta", "Aldea Fuego"), Err(RouteError::EdgeNotFound(_, _))));
        match graph.neighbors("Aldea Fuego") {
            Err(RouteError::NodeNotInGraph(names)) => assert_eq!(names, vec![String::from("Aldea Fuego")]),
            _ => panic!("expected NodeNotInGraph"),
        }
        assert!(graph.rank_neighbors(10).is_empty());
    }


    #[test]
    fn edges_listed_once() {
        log_init_test();
        //
        let graph = RouteGraph::from_edges(&kanto_edges());
        let edges = graph.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], ("Pueblo Paleta", "Aldea Azalea", 5.));
        assert_eq!(edges[2], ("Pueblo Paleta", "Ciudad Safiro", 10.));
        let ranks = graph.rank_neighbors(0);
        assert_eq!(ranks, vec![(1, 5.), (2, 10.)]);
    }

} // end of mod tests
