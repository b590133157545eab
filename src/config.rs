//! The hardcoded traversal problem.
//!
//! Six node slots (0 is never connected), four undirected edges, start at 1.

use crate::error::GraphResult;
use crate::graph::Graph;

pub const NODE_COUNT: usize = 6;
pub const START_NODE: usize = 1;
pub const EDGES: [(usize, usize); 4] = [(1, 2), (1, 3), (3, 4), (3, 5)];
pub const LABEL: &str = "DFS traversal starting from node";

#[derive(Debug, Clone)]
pub struct TraversalConfig {
    pub node_count: usize,
    pub start: usize,
    pub edges: Vec<(usize, usize)>,
    pub label: String,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            node_count: NODE_COUNT,
            start: START_NODE,
            edges: EDGES.to_vec(),
            label: LABEL.to_string(),
        }
    }
}

impl TraversalConfig {
    /// Build the graph, adding edges in listed order.
    pub fn build_graph(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.node_count)?;
        for &(a, b) in &self.edges {
            graph.add_undirected_edge(a, b)?;
        }
        Ok(graph)
    }
}
