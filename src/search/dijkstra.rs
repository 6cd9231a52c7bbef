use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;

use super::report::{exhausted, found};
use super::{SearchReport, SearchState, VisitRecord};
use crate::errors::RouteError;
use crate::graph::Graph;


/// Identify the shortest path between two nodes using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Always expands the cheapest unsettled node next, so the first time the
/// end node is settled its distance is final. An unreachable end is a normal
/// outcome reported in the result, not an error.
pub fn dijkstra<N>(graph: &Graph<N>, start: &N, end: &N) -> Result<SearchReport<N>, RouteError>
where
    N: Eq + Hash + Clone + Debug,
{
    // Validate before any search work
    for node in [start, end] {
        if !graph.contains(node) {
            return Err(RouteError::unknown_node(node));
        }
    }

    let timer = Instant::now();
    let mut state = SearchState::new(start.clone());

    while !state.frontier.is_empty() {
        let entry = state.frontier.pop_min()?;

        // fetch current best cost for the node
        let (node, &record) = state.nodes.get_index(entry.index).unwrap();

        // If the entry's cost is higher than the best cost, skip it
        // This implies a better route to this node was found after the push
        if record.settled || entry.cost > record.dist {
            continue;
        }
        let node = node.clone();

        // The distance to this node is now final
        state.settle(entry.index);

        if node == *end {
            debug!("dijkstra settled the end after visiting {} nodes", state.visited);
            return Ok(found(&state, entry.index, timer.elapsed()));
        }

        // loop over neighbors
        for (neighbor, weight) in graph.neighbors(&node)? {
            // cost to reach the neighbor through the current node
            let new_dist = record.dist + weight;

            let neighbor_index = match state.nodes.entry(neighbor.clone()) {
                Vacant(e) => {
                    // First time seeing this neighbor
                    let index = e.index();
                    e.insert(VisitRecord {
                        parent: entry.index,
                        dist: new_dist,
                        settled: false,
                    });
                    index
                }
                Occupied(mut e) => {
                    // The existing route is at least as good, keep it
                    if e.get().settled || e.get().dist <= new_dist {
                        continue;
                    }
                    e.insert(VisitRecord {
                        parent: entry.index,
                        dist: new_dist,
                        settled: false,
                    });
                    e.index()
                }
            };

            // Only pushed when this is a strictly better route
            state.frontier.push(new_dist, new_dist, neighbor_index);
            state.explored += 1;
        }
    }

    debug!(
        "dijkstra exhausted the frontier after visiting {} nodes, end is unreachable",
        state.visited
    );
    Ok(exhausted(&state, timer.elapsed()))
}
