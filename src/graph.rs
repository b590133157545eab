use tracing::debug;

use crate::error::{GraphError, GraphResult};

/// An undirected graph stored as an adjacency list.
///
/// Nodes are identified by `usize` indices in `0..num_nodes()`. Neighbor
/// order is insertion order, which is also the order a traversal tries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edges: usize,
}

impl Graph {
    /// Allocate `n` node slots with no edges.
    pub fn new(n: usize) -> GraphResult<Self> {
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Graph {
            adj: vec![Vec::new(); n],
            edges: 0,
        })
    }

    /// Append `b` to `a`'s neighbors and `a` to `b`'s neighbors.
    ///
    /// No de-duplication and no self-loop guard: adding `(a, a)` lists `a`
    /// twice among its own neighbors. Out-of-range endpoints are rejected
    /// and leave the graph untouched.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize) -> GraphResult<()> {
        self.check_node(a)?;
        self.check_node(b)?;

        self.adj[a].push(b);
        self.adj[b].push(a);
        self.edges += 1;

        debug!(a, b, "added undirected edge");
        Ok(())
    }

    /// Neighbors of `u` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `u >= num_nodes()`. Call `check_node` first when `u` comes
    /// from outside the graph.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }

    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn check_node(&self, node: usize) -> GraphResult<()> {
        if node < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::node_out_of_range(node, self.adj.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_stored_both_ways_in_insertion_order() {
        let mut g = Graph::new(6).unwrap();
        g.add_undirected_edge(1, 2).unwrap();
        g.add_undirected_edge(1, 3).unwrap();
        g.add_undirected_edge(3, 4).unwrap();
        g.add_undirected_edge(3, 5).unwrap();

        assert_eq!(g.neighbors(1), &[2, 3]);
        assert_eq!(g.neighbors(2), &[1]);
        assert_eq!(g.neighbors(3), &[1, 4, 5]);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn untouched_node_has_no_neighbors() {
        let mut g = Graph::new(6).unwrap();
        g.add_undirected_edge(1, 2).unwrap();
        assert!(g.neighbors(0).is_empty());
    }

    #[test]
    fn duplicates_and_self_loops_are_kept() {
        let mut g = Graph::new(3).unwrap();
        g.add_undirected_edge(0, 1).unwrap();
        g.add_undirected_edge(0, 1).unwrap();
        g.add_undirected_edge(2, 2).unwrap();

        assert_eq!(g.neighbors(0), &[1, 1]);
        assert_eq!(g.neighbors(2), &[2, 2]);
    }

    #[test]
    fn out_of_range_edge_is_rejected_without_mutation() {
        let mut g = Graph::new(6).unwrap();
        let before = g.clone();

        let err = g.add_undirected_edge(1, 6).unwrap_err();
        assert_eq!(err, GraphError::node_out_of_range(6, 6));
        assert_eq!(g, before);
    }

    #[test]
    #[should_panic]
    fn neighbors_of_missing_node_panics() {
        let g = Graph::new(6).unwrap();
        g.neighbors(6);
    }

    #[test]
    fn zero_nodes_is_an_error() {
        assert_eq!(Graph::new(0).unwrap_err(), GraphError::EmptyGraph);
    }
}
