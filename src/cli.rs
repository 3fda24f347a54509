// src/cli.rs
//! Argument parsing and the load -> rank -> report pipeline.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;

use crate::config::Settings;
use crate::{engine, loader, report};

#[derive(Parser, Debug, Default)]
#[command(name = "linkrank")]
#[command(about = "Rank pages by link structure from flat page/link tables")]
pub struct Cli {
    /// Page table: one `<id>\t<name>` per line, ids dense from 0
    pub pages: Option<PathBuf>,

    /// Link table: one `<from_id>\t<to_id>` per line
    pub links: Option<PathBuf>,

    /// Number of propagation rounds
    #[arg(long, short)]
    pub iterations: Option<usize>,

    /// Number of top-ranked pages to print
    #[arg(long, short = 'k')]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,

    /// Print the final weight of a single page instead of the top list
    #[arg(long)]
    pub query: Option<String>,

    /// Print per-phase timings to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Runs the full pipeline and returns the rendered output.
///
/// # Errors
/// Returns an error on any load failure, on an unknown `--query` name, or
/// if rendering fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let settings = Settings::load()?;
    let pages = cli.pages.clone().unwrap_or(settings.pages_file);
    let links = cli.links.clone().unwrap_or(settings.links_file);
    let iterations = cli.iterations.unwrap_or(settings.iterations);
    let top = cli.top.unwrap_or(settings.top);

    let start = Instant::now();
    let mut graph = loader::load_nodes(&pages)?;
    phase_time(cli.verbose, "read pages", start);

    let start = Instant::now();
    loader::load_edges(&links, &mut graph)?;
    phase_time(cli.verbose, "read links", start);

    let start = Instant::now();
    engine::run(&mut graph, iterations);
    phase_time(cli.verbose, "pagerank", start);

    if let Some(name) = &cli.query {
        let Some(id) = graph.lookup(name) else {
            bail!("no page named {name:?}");
        };
        return Ok(format!("{}\t{:.6}\n", name, graph.node(id).weight));
    }

    let ranked = report::top(&graph, top);
    match cli.format {
        Format::Text => Ok(report::render_text(&ranked)),
        Format::Json => report::render_json(&ranked).context("failed to serialize ranking"),
    }
}

fn phase_time(verbose: bool, what: &str, start: Instant) {
    if verbose {
        let msg = format!("{what}: {:.3} [s]", start.elapsed().as_secs_f64());
        eprintln!("{}", msg.dimmed());
    }
}
