// src/engine.rs
//! Fixed-iteration rank propagation.
//!
//! A round is two strictly separated phases over the whole arena: scatter
//! (every node's `distribute`, reading only previous-round weights) and
//! commit (every node's `update_weight`). The separation is what makes the
//! result independent of iteration order; a single interleaved pass would
//! read partially-updated weights.

use rayon::prelude::*;

use crate::graph::Graph;

/// Runs one synchronized round over the arena.
///
/// Scatter runs sequentially in id order because multiple sources fan into
/// shared `next_weight` accumulators. Commit touches each node exactly once
/// and is parallelized.
pub fn step(graph: &mut Graph) {
    let n = graph.len();
    if n == 0 {
        return;
    }

    let mut total_damping = 0.0;
    for id in 0..n {
        total_damping += graph.distribute(id);
    }

    // Phase barrier: no commit before every scatter above has finished.
    #[allow(clippy::cast_precision_loss)]
    let damping_share = total_damping / n as f64;
    graph
        .nodes_mut()
        .par_iter_mut()
        .for_each(|node| node.update_weight(damping_share));
}

/// Runs exactly `iterations` rounds, no convergence check.
pub fn run(graph: &mut Graph, iterations: usize) {
    for _ in 0..iterations {
        step(graph);
    }
}
