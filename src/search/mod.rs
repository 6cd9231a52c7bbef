pub mod a_star;
pub mod dijkstra;
mod report;

pub use report::SearchReport;

use std::hash::Hash;

use crate::collections::{Frontier, FxIndexMap};


/// Parent index of the start node, which has no predecessor
pub(crate) const NO_PARENT: usize = usize::MAX;


/// Best-known route to one node during a single run
#[derive(Debug, Clone, Copy)]
pub(crate) struct VisitRecord {
    /// Index of the predecessor in the node map, NO_PARENT for the start
    pub parent: usize,
    /// Cost from the start along the best-known route
    pub dist: f64,
    /// Distance finalized, the node left the frontier for good
    pub settled: bool,
}


/// Mutable bookkeeping for one search invocation
/// Created fresh per call and consumed by the reporter; the counters live
/// here rather than anywhere shared, so concurrent comparison runs against
/// the same graph never interfere
pub(crate) struct SearchState<N> {
    pub nodes: FxIndexMap<N, VisitRecord>,
    pub frontier: Frontier,
    /// Entries ever pushed onto the frontier, the start push included
    pub explored: usize,
    /// Nodes settled
    pub visited: usize,
}

impl<N> SearchState<N>
where
    N: Eq + Hash,
{
    /// State with the start node enqueued at cost zero
    pub fn new(start: N) -> Self {
        let mut nodes = FxIndexMap::default();
        let start_index = nodes
            .insert_full(
                start,
                VisitRecord {
                    parent: NO_PARENT,
                    dist: 0.0,
                    settled: false,
                },
            )
            .0;

        let mut frontier = Frontier::new();
        frontier.push(0.0, 0.0, start_index);

        Self {
            nodes,
            frontier,
            explored: 1,
            visited: 0,
        }
    }

    pub fn settle(&mut self, index: usize) {
        if let Some((_, record)) = self.nodes.get_index_mut(index) {
            record.settled = true;
        }
        self.visited += 1;
    }
}
