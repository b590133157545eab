//! Recursive depth-first traversal.
//!
//! Neighbors are tried in the order they were inserted; the first one still
//! unvisited is recursed into immediately. Recursion depth is bounded by the
//! number of nodes.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::GraphResult;
use crate::graph::Graph;

/// Per-node visited markers for a single traversal run.
///
/// Every node starts Unvisited. `mark` is the only transition and it is
/// one-way: nothing resets a marker during the run.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    marks: Vec<bool>,
}

impl VisitedSet {
    pub fn new(n: usize) -> Self {
        VisitedSet {
            marks: vec![false; n],
        }
    }

    /// Mark `node` visited. Returns `false` if it already was.
    ///
    /// Panics if `node` is out of range, like `contains`.
    pub fn mark(&mut self, node: usize) -> bool {
        !std::mem::replace(&mut self.marks[node], true)
    }

    pub fn contains(&self, node: usize) -> bool {
        self.marks[node]
    }
}

/// Result of a depth-first traversal.
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    /// Visited node ids in DFS pre-order.
    pub visited_order: Vec<usize>,

    /// Depth at which each node was discovered (start is 0).
    pub depths: HashMap<usize, usize>,

    /// DFS-tree parent of each visited node (start has None).
    pub parents: HashMap<usize, Option<usize>>,
}

impl Traversal {
    pub fn node_count(&self) -> usize {
        self.visited_order.len()
    }

    pub fn is_visited(&self, node: usize) -> bool {
        self.parents.contains_key(&node)
    }

    pub fn max_depth_reached(&self) -> usize {
        self.depths.values().copied().max().unwrap_or(0)
    }

    /// Tree path from the start node to `target`, or None if `target` was
    /// never reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_visited(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(Some(parent)) = self.parents.get(&current) {
            path.push(*parent);
            current = *parent;
        }

        path.reverse();
        Some(path)
    }
}

/// Run a depth-first search from `start`, returning nodes in pre-order.
///
/// The visited markers are created fresh for this call and owned by it, so
/// the same graph can be traversed any number of times.
pub fn depth_first_search(graph: &Graph, start: usize) -> GraphResult<Traversal> {
    graph.check_node(start)?;

    let mut visited = VisitedSet::new(graph.num_nodes());
    let mut result = Traversal::default();
    visit(graph, start, None, 0, &mut visited, &mut result);

    debug!(
        start,
        visited = result.node_count(),
        max_depth = result.max_depth_reached(),
        "DFS complete"
    );

    Ok(result)
}

fn visit(
    graph: &Graph,
    node: usize,
    parent: Option<usize>,
    depth: usize,
    visited: &mut VisitedSet,
    out: &mut Traversal,
) {
    let newly_marked = visited.mark(node);
    debug_assert!(newly_marked, "node {} visited twice", node);
    out.visited_order.push(node);
    out.depths.insert(node, depth);
    out.parents.insert(node, parent);
    trace!(node, depth, "visited");

    for &next in graph.neighbors(node) {
        if !visited.contains(next) {
            visit(graph, next, Some(node), depth + 1, visited, out);
        }
    }
}
