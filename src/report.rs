// src/report.rs
//! Final ranking output: top-K selection and console/JSON rendering.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::graph::Graph;

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPage {
    pub name: String,
    pub weight: f64,
}

/// Returns the `k` heaviest nodes as `(name, weight)` rows, weight
/// descending. Ties break on node id ascending, explicitly rather than by
/// leaning on sort stability. Does not mutate the graph.
#[must_use]
pub fn top(graph: &Graph, k: usize) -> Vec<RankedPage> {
    let mut ids: Vec<usize> = (0..graph.len()).collect();
    ids.sort_by(|&a, &b| {
        let wa = graph.node(a).weight;
        let wb = graph.node(b).weight;
        wb.partial_cmp(&wa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    ids.truncate(k);

    ids.into_iter()
        .map(|id| RankedPage {
            name: graph.node(id).name.clone(),
            weight: graph.node(id).weight,
        })
        .collect()
}

/// Renders the ranking as an aligned console table.
#[must_use]
pub fn render_text(pages: &[RankedPage]) -> String {
    let name_width = pages.iter().map(|p| p.name.len()).max().unwrap_or(4);
    let mut out = String::new();
    for (i, page) in pages.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<width$}  {}",
            i + 1,
            page.name,
            format!("{:.6}", page.weight).cyan(),
            width = name_width,
        );
    }
    out
}

/// Renders the ranking as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(pages: &[RankedPage]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(pages)
}
