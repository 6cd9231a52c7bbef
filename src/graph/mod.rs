use std::fmt::Debug;
use std::hash::Hash;

use indexmap::map::Entry::Vacant;
use kdtree::KdTree;
use kdtree::distance::squared_euclidean;

use crate::collections::FxIndexMap;
use crate::errors::RouteError;
use crate::geometry::Coord;


/// Coordinate and outgoing edges of a single node
#[derive(Debug, Clone)]
struct NodeData<N> {
    coord: Coord,
    edges: Vec<(N, f64)>,
}


/// Weighted directed road graph with a coordinate per node
///
/// Edge weights are non-negative distances in the same unit throughout the
/// graph (meters for road networks). Construction is mutable; searches only
/// ever borrow the graph, so independent searches can run concurrently
/// against the same instance.
pub struct Graph<N> {
    nodes: FxIndexMap<N, NodeData<N>>,
    // coordinate -> index in nodes, serves nearest-node lookup
    tree: KdTree<f64, usize, [f64; 2]>,
}

impl<N> Graph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            nodes: FxIndexMap::default(),
            tree: KdTree::new(2),
        }
    }

    /// Add a node at the given coordinate
    /// Adding a node that already exists is a no-op; the graph is built once
    /// and nodes do not move, which keeps the spatial index in step with the
    /// node map
    pub fn add_node(&mut self, node: N, coord: Coord) -> Result<(), RouteError> {
        if let Vacant(e) = self.nodes.entry(node) {
            let index = e.index();
            e.insert(NodeData {
                coord,
                edges: Vec::new(),
            });
            self.tree.add([coord.lat, coord.lon], index)?;
        }
        Ok(())
    }

    /// Add a directed edge between two existing nodes
    /// Weights must be non-negative for the searches to be correct; this is
    /// a precondition, not a runtime check
    pub fn add_edge(&mut self, from: &N, to: &N, weight: f64) -> Result<(), RouteError> {
        debug_assert!(weight >= 0.0, "edge weights must be non-negative");
        if !self.nodes.contains_key(to) {
            return Err(RouteError::unknown_node(to));
        }
        let data = self
            .nodes
            .get_mut(from)
            .ok_or_else(|| RouteError::unknown_node(from))?;
        data.edges.push((to.clone(), weight));
        Ok(())
    }

    /// Outgoing (neighbor, weight) pairs of a node
    pub fn neighbors(&self, node: &N) -> Result<&[(N, f64)], RouteError> {
        self.nodes
            .get(node)
            .map(|data| data.edges.as_slice())
            .ok_or_else(|| RouteError::unknown_node(node))
    }

    /// Coordinate of a node
    pub fn coord(&self, node: &N) -> Result<Coord, RouteError> {
        self.nodes
            .get(node)
            .map(|data| data.coord)
            .ok_or_else(|| RouteError::unknown_node(node))
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the node identifiers in insertion order
    pub fn iter_nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    /// Node closest to an arbitrary coordinate, None for an empty graph
    /// Lets callers snap a map click to the road network before searching
    pub fn nearest_node(&self, coord: Coord) -> Result<Option<&N>, RouteError> {
        if self.nodes.is_empty() {
            return Ok(None);
        }
        let found = self.tree.nearest(&[coord.lat, coord.lon], 1, &squared_euclidean)?;
        Ok(found
            .first()
            .and_then(|&(_, &index)| self.nodes.get_index(index).map(|(node, _)| node)))
    }

    /// Map a node path to coordinates for rendering as a line overlay
    pub fn path_coords(&self, path: &[N]) -> Result<Vec<Coord>, RouteError> {
        path.iter().map(|node| self.coord(node)).collect()
    }
}

impl<N> Default for Graph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
