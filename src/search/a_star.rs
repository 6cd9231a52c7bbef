use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;

use super::report::{exhausted, found};
use super::{SearchReport, SearchState, VisitRecord};
use crate::errors::RouteError;
use crate::geometry::Coord;
use crate::graph::Graph;


/// Identify the shortest path between two nodes using A* search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The frontier is keyed by cost so far plus the heuristic estimate of the
/// remaining distance, while the recorded cost keeps accumulating true edge
/// weights, so the reconstructed path and the reported distance stay exact.
///
/// The shortest-path guarantee needs two things from the heuristic:
/// 1. It never overestimates the remaining distance to the end (admissible)
/// 2. It is consistent with the edge weights
/// Neither is checked at runtime. [`crate::geometry::haversine`] satisfies
/// both whenever edge weights are great-circle or road distances in meters,
/// and is the heuristic to reach for on geographic graphs.
pub fn astar<N, H>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
    heuristic: H,
) -> Result<SearchReport<N>, RouteError>
where
    N: Eq + Hash + Clone + Debug,
    H: Fn(Coord, Coord) -> f64,
{
    // Validate before any search work
    for node in [start, end] {
        if !graph.contains(node) {
            return Err(RouteError::unknown_node(node));
        }
    }
    let end_coord = graph.coord(end)?;

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
            debug!("astar settled the end after visiting {} nodes", state.visited);
            return Ok(found(&state, entry.index, timer.elapsed()));
        }

        // loop over neighbors
        for (neighbor, weight) in graph.neighbors(&node)? {
            // confirmed cost through the current node, no heuristic in it
            let new_dist = record.dist + weight;
            // estimated remaining distance, only ever used for ordering
            let estimate = heuristic(graph.coord(neighbor)?, end_coord);

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
            state.frontier.push(new_dist + estimate, new_dist, neighbor_index);
            state.explored += 1;
        }
    }

    debug!(
        "astar exhausted the frontier after visiting {} nodes, end is unreachable",
        state.visited
    );
    Ok(exhausted(&state, timer.elapsed()))
}
