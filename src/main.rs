use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use dfs_traversal::report::write_report;
use dfs_traversal::{depth_first_search, TraversalConfig};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = TraversalConfig::default();
    let graph = config.build_graph()?;
    info!(
        nodes = graph.num_nodes(),
        edges = graph.edge_count(),
        start = config.start,
        "graph built"
    );

    let traversal = depth_first_search(&graph, config.start)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &config.label, config.start, &traversal)?;

    info!(visited = traversal.node_count(), "traversal printed");
    Ok(())
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the result line.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("traversal failed: {e}");
            ExitCode::FAILURE
        }
    }
}
