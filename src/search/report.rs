use std::time::Duration;

use super::{SearchState, VisitRecord, NO_PARENT};
use crate::collections::FxIndexMap;


/// Outcome of one search run
/// Dijkstra and A* produce the identical shape so runs can be compared
/// side by side
#[derive(Debug, Clone)]
pub struct SearchReport<N> {
    /// Node sequence from start to end, empty when the end is unreachable
    pub path: Vec<N>,
    /// Sum of edge weights along the path, None when the end is unreachable
    pub distance: Option<f64>,
    /// Entries ever pushed onto the frontier
    pub nodes_explored: usize,
    /// Nodes settled with a final distance
    pub nodes_visited: usize,
    /// Wall-clock duration of the search
    pub elapsed: Duration,
}

impl<N> SearchReport<N> {
    /// Number of nodes on the path
    pub fn path_length(&self) -> usize {
        self.path.len()
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}


/// Report for a run that settled the end node
pub(crate) fn found<N: Clone>(
    state: &SearchState<N>,
    end_index: usize,
    elapsed: Duration,
) -> SearchReport<N> {
    SearchReport {
        path: reconstruct_path(&state.nodes, end_index),
        distance: state
            .nodes
            .get_index(end_index)
            .map(|(_, record)| record.dist),
        nodes_explored: state.explored,
        nodes_visited: state.visited,
        elapsed,
    }
}

/// Report for a run that emptied the frontier without reaching the end
pub(crate) fn exhausted<N>(state: &SearchState<N>, elapsed: Duration) -> SearchReport<N> {
    SearchReport {
        path: Vec::new(),
        distance: None,
        nodes_explored: state.explored,
        nodes_visited: state.visited,
        elapsed,
    }
}

/// Construct the path from the end node back to the start
/// Follows parent indices until the start's sentinel, then reverses
fn reconstruct_path<N: Clone>(nodes: &FxIndexMap<N, VisitRecord>, end_index: usize) -> Vec<N> {
    let mut path = Vec::new();
    let mut current_index = end_index;

    while current_index != NO_PARENT {
        if let Some((node, record)) = nodes.get_index(current_index) {
            path.push(node.clone());
            current_index = record.parent;
        } else {
            break;
        }
    }

    // The walk runs end to start, flip it
    path.reverse();
    path
}
