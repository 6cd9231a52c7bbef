//! Road network shortest path search
//!
//! Computes shortest paths between two nodes of a weighted road graph with
//! Dijkstra's algorithm and A* search, and reports the path together with
//! exploration statistics so the two algorithms can be compared side by side.
//!
//! ```
//! use wayfinder::{astar, dijkstra, haversine, Coord, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_node(1, Coord::new(52.5200, 13.4050)).unwrap();
//! graph.add_node(2, Coord::new(52.5206, 13.4094)).unwrap();
//! graph.add_edge(&1, &2, 320.0).unwrap();
//!
//! let blind = dijkstra(&graph, &1, &2).unwrap();
//! let guided = astar(&graph, &1, &2, haversine).unwrap();
//! assert_eq!(blind.distance, guided.distance);
//! assert!(guided.nodes_visited <= guided.nodes_explored);
//! ```

mod collections;

pub mod errors;
pub mod geometry;
pub mod graph;
pub mod search;

pub use errors::RouteError;
pub use geometry::{haversine, Coord};
pub use graph::Graph;
pub use search::a_star::astar;
pub use search::dijkstra::dijkstra;
pub use search::SearchReport;
