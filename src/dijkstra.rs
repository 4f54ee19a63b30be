//! Single source shortest paths by Dijkstra algorithm, for non negative weights.
//!
//! Two variants are provided:
//! - [dijkstra] selects the next node by a linear scan over unvisited nodes, O(V²). This is the reference.
//! - [dijkstra_heap] uses a binary heap, O((V+E) log V).
//!
//! Both return the same distances. Working tables are allocated per call, the graph is only read
//! so queries can run concurrently on a shared graph, see [all_pairs].
//!
//! Unreachable nodes keep distance f64::INFINITY.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::error::{Result, RouteError};
use crate::routegraph::RouteGraph;


/// Result of a single source computation: one distance per node of the graph and the predecessor
/// of each reached node on one of its shortest paths.
#[derive(Clone, Debug)]
pub struct ShortestPaths<'a> {
    origin : &'a str,
    /// distance to each node, in graph node order
    distances : IndexMap<&'a str, f64>,
    /// predecessor on a shortest path, absent for origin and unreachable nodes
    predecessors : IndexMap<&'a str, &'a str>,
} // end of struct ShortestPaths


impl <'a> ShortestPaths<'a> {

    // converts rank indexed tables to name keyed maps
    fn from_ranks(graph : &'a RouteGraph, origin : &'a str, dist : Vec<f64>, pred : Vec<Option<usize>>) -> Self {
        let mut distances = IndexMap::<&'a str, f64>::with_capacity(dist.len());
        let mut predecessors = IndexMap::<&'a str, &'a str>::new();
        for (rank, name) in graph.nodes().enumerate() {
            distances.insert(name, dist[rank]);
            if let Some(p) = pred[rank].and_then(|p| graph.get_name(p)) {
                predecessors.insert(name, p);
            }
        }
        ShortestPaths{origin, distances, predecessors}
    } // end of from_ranks

    pub fn get_origin(&self) -> &'a str { self.origin }

    /// distance to node, None if name is not a node. f64::INFINITY if unreachable
    pub fn get_distance(&self, name : &str) -> Option<f64> {
        self.distances.get(name).copied()
    }

    pub fn is_reachable(&self, name : &str) -> bool {
        self.get_distance(name).map_or(false, |d| d.is_finite())
    }

    /// all distances, one entry per node
    pub fn get_distances(&self) -> &IndexMap<&'a str, f64> { &self.distances }

    pub fn len(&self) -> usize { self.distances.len() }

    pub fn is_empty(&self) -> bool { self.distances.is_empty() }

    /// nodes from origin to destination along a shortest path. None if destination is not reachable
    pub fn path_to(&self, destination : &str) -> Option<Vec<&'a str>> {
        if !self.is_reachable(destination) {
            return None;
        }
        let (mut current, _) = self.distances.get_key_value(destination)?;
        let mut path = vec![*current];
        while let Some(p) = self.predecessors.get(current) {
            // a cycle can only come from negative weights
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(*p);
            current = p;
        }
        path.reverse();
        Some(path)
    } // end of path_to

} // end of impl ShortestPaths


// checks origin and returns its rank
fn origin_rank(graph : &RouteGraph, origin : &str) -> Result<usize> {
    graph.get_rank(origin).ok_or_else(|| RouteError::UnknownOrigin(String::from(origin)))
}


/// Dijkstra with selection by linear scan.
/// Among unvisited nodes of same distance the first in node order is selected.
pub fn dijkstra<'a>(graph : &'a RouteGraph, origin : &str) -> Result<ShortestPaths<'a>> {
    let start = origin_rank(graph, origin)?;
    let nb_nodes = graph.nb_nodes();
    let mut dist = vec![f64::INFINITY; nb_nodes];
    let mut pred : Vec<Option<usize>> = vec![None; nb_nodes];
    let mut visited = vec![false; nb_nodes];
    dist[start] = 0.;
    //
    for _ in 0..nb_nodes {
        let mut current : Option<usize> = None;
        for rank in 0..nb_nodes {
            if visited[rank] {
                continue;
            }
            match current {
                Some(c) if dist[c] <= dist[rank] => {},
                _ => { current = Some(rank); },
            }
        }
        let current = match current {
            Some(c) => c,
            None => break,
        };
        visited[current] = true;
        if dist[current].is_infinite() {
            // what remains is not reachable from origin, relaxing would not change anything
            log::trace!("dijkstra from {}: {} nodes unreachable", origin, visited.iter().filter(|v| !**v).count() + 1);
            break;
        }
        for (neighbour, weight) in graph.rank_neighbors(current) {
            let candidate = dist[current] + weight;
            if candidate < dist[neighbour] {
                dist[neighbour] = candidate;
                pred[neighbour] = Some(current);
            }
        }
    }
    //
    let origin = graph.get_name(start).unwrap_or_default();
    let paths = ShortestPaths::from_ranks(graph, origin, dist, pred);
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("dijkstra from {} : {:?}", origin, paths.get_distances());
    }
    Ok(paths)
} // end of dijkstra


//===================================================================================


// heap entry. Ordering is reversed so that BinaryHeap pops smallest cost first, rank breaks ties
#[derive(Copy, Clone, Debug, PartialEq)]
struct State {
    cost : f64,
    rank : usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other : &Self) -> Ordering {
        other.cost.total_cmp(&self.cost).then_with(|| other.rank.cmp(&self.rank))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other : &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


/// Dijkstra with a binary heap. Same distances as [dijkstra]
pub fn dijkstra_heap<'a>(graph : &'a RouteGraph, origin : &str) -> Result<ShortestPaths<'a>> {
    let start = origin_rank(graph, origin)?;
    let nb_nodes = graph.nb_nodes();
    let mut dist = vec![f64::INFINITY; nb_nodes];
    let mut pred : Vec<Option<usize>> = vec![None; nb_nodes];
    let mut visited = vec![false; nb_nodes];
    let mut heap = BinaryHeap::<State>::new();
    dist[start] = 0.;
    heap.push(State{cost : 0., rank : start});
    //
    while let Some(State{cost, rank}) = heap.pop() {
        // stale entry
        if visited[rank] || cost > dist[rank] {
            continue;
        }
        visited[rank] = true;
        for (neighbour, weight) in graph.rank_neighbors(rank) {
            let candidate = cost + weight;
            if candidate < dist[neighbour] {
                dist[neighbour] = candidate;
                pred[neighbour] = Some(rank);
                heap.push(State{cost : candidate, rank : neighbour});
            }
        }
    }
    //
    let origin = graph.get_name(start).unwrap_or_default();
    Ok(ShortestPaths::from_ranks(graph, origin, dist, pred))
} // end of dijkstra_heap


/// shortest paths from every node, one dijkstra per origin run in parallel. Keys are in node order.
pub fn all_pairs(graph : &RouteGraph) -> Result<IndexMap<&str, ShortestPaths<'_>>> {
    let origins : Vec<&str> = graph.nodes().collect();
    let paths = origins.par_iter()
            .map(|origin| dijkstra(graph, origin))
            .collect::<Result<Vec<ShortestPaths>>>()?;
    log::info!("all_pairs computed {} single source distances", paths.len());
    Ok(origins.into_iter().zip(paths).collect())
} // end of all_pairs


//===================================================================================


// end of mod tests
