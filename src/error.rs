//! Error types for graph construction and traversal.

use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building or traversing a graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A node index does not fit in the adjacency structure.
    #[error("Node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node index
        node: usize,
        /// Number of node slots in the graph
        node_count: usize,
    },

    /// The graph has no node slots at all.
    #[error("Graph is empty - no nodes allocated")]
    EmptyGraph,
}

impl GraphError {
    /// Create a NodeOutOfRange error.
    pub fn node_out_of_range(node: usize, node_count: usize) -> Self {
        Self::NodeOutOfRange { node, node_count }
    }
}
