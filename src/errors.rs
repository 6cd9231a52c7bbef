use std::fmt::Debug;

use thiserror::Error;

/// Errors surfaced by graph lookups and the search entry points
/// An unreachable destination is not an error, it is reported in the search result
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("node {0} is not present in the graph")]
    UnknownNode(String),
    #[error("frontier popped while empty")]
    EmptyFrontier,
    #[error("spatial index error: {0}")]
    SpatialIndex(String),
}

impl RouteError {
    pub(crate) fn unknown_node<N: Debug>(node: &N) -> Self {
        RouteError::UnknownNode(format!("{node:?}"))
    }
}

impl From<kdtree::ErrorKind> for RouteError {
    fn from(error: kdtree::ErrorKind) -> Self {
        RouteError::SpatialIndex(error.to_string())
    }
}
