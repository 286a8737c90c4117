use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chromatic::coloring::{self, Algorithm, SizeLimitExceeded, DEFAULT_VERTEX_LIMIT};
use chromatic::graph;
use chromatic::report::{measure, Report};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Assignments are listed only for graphs smaller than this.
const SHOW_LIMIT: usize = 10;

#[derive(Parser)]
#[command(name = "chromatic")]
#[command(about = "Vertex coloring of undirected graphs", long_about = None)]
struct Cli {
    /// Graph file (edge list, "n m" header + edges, or DIMACS)
    #[arg(short, long)]
    input: PathBuf,

    /// Coloring strategy
    #[arg(short, long, value_enum)]
    algo: Algorithm,

    /// Check that no edge joins two vertices of the same color
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// Print the vertex -> color assignment (graphs under 10 vertices)
    #[arg(long, default_value_t = false)]
    show: bool,

    /// Largest vertex count accepted by the brute-force search
    #[arg(long, default_value_t = DEFAULT_VERTEX_LIMIT, env = "CHROMATIC_LIMIT")]
    limit: usize,

    /// Emit the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Skip the color-coded terminal listing
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn main() -> ExitCode {
    let default_level = "warn";
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if err.downcast_ref::<SizeLimitExceeded>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let loaded = graph::load(&cli.input)
        .with_context(|| format!("failed to load graph from {}", cli.input.display()))?;
    let graph = &loaded.graph;
    info!(stats = ?graph.statistics(), declared = ?loaded.declared_vertices, "graph loaded");

    // Refuse before timing anything.
    if cli.algo.is_exhaustive() && graph.vertex_count() > cli.limit {
        return Err(SizeLimitExceeded {
            vertices: graph.vertex_count(),
            limit: cli.limit,
        }
        .into());
    }

    let (result, elapsed) = measure(|| coloring::color_with(cli.algo, graph, cli.limit));
    let colors = result?;
    info!(algorithm = %cli.algo, colors = colors.color_count(), ?elapsed, "coloring finished");

    let mut report = Report::new(cli.algo, graph, &colors, elapsed);
    if cli.verify {
        report = report.with_validity(graph, &colors);
    }
    let show = cli.show && graph.vertex_count() < SHOW_LIMIT;
    if show {
        report = report.with_assignment(&colors, &loaded.mapping);
    }

    if cli.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("{report}");
    if show && !cli.no_color {
        if let Some(listing) = report.ansi_listing() {
            println!();
            println!("{listing}");
        }
    }
    Ok(())
}
