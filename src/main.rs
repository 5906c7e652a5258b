use std::io::Write;

use anyhow::Context;
use or_path::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let buf = io::stdin_at_once().context("reading stdin")?;
    let io::Problem {
        mut graph,
        start,
        goal,
    } = io::read_problem(&buf).context("parsing input")?;
    tracing::info!(
        nodes = graph.node_count(),
        edge_records = graph.edge_record_count(),
        start,
        goal,
        "problem loaded"
    );

    let report = or_path::solve_with_report(&mut graph, start, goal);
    tracing::info!(cost = ?report.cost, essential_bits = ?report.essential_bits, "resolved");

    let mut output = io::stdout();
    io::write_cost(&mut output, report.cost)?;
    output.flush()?;
    Ok(())
}
