//! Depth-first traversal of a small, hardcoded undirected graph.

pub mod config;
pub mod dfs;
pub mod error;
pub mod graph;
pub mod report;

pub use config::TraversalConfig;
pub use dfs::{depth_first_search, Traversal, VisitedSet};
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
