// src/graph.rs
//! The in-memory graph: a dense node arena with index-based edges.
//!
//! Node identity is positional: a node's id is its index in the arena, and
//! the loader guarantees ids arrive as 0, 1, 2, … with no gaps. Edges store
//! destination indices rather than references, so the scatter phase resolves
//! them against the arena on the fly.

use std::collections::HashMap;

/// Fraction of a node's weight retained for the global damping pool each
/// round, as opposed to distributed directly to out-links.
pub const DAMPING_FACTOR: f64 = 0.15;

/// A single graph vertex.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub weight: f64,
    pub(crate) next_weight: f64,
    pub(crate) out_links: Vec<usize>,
}

impl Node {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            weight: 1.0,
            next_weight: 0.0,
            out_links: Vec::new(),
        }
    }

    /// Destination indices, in edge-file order (duplicates and self-links
    /// are kept as-is).
    #[must_use]
    pub fn out_links(&self) -> &[usize] {
        &self.out_links
    }

    #[must_use]
    pub fn is_dangling(&self) -> bool {
        self.out_links.is_empty()
    }

    /// Commit step: fold the accumulated scatter mass and this node's share
    /// of the damping pool into the new weight, and clear the accumulator.
    pub fn update_weight(&mut self, damping_share: f64) {
        self.weight = self.next_weight + damping_share;
        self.next_weight = 0.0;
    }
}

/// Dense node arena plus a name lookup.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    by_name: HashMap<String, usize>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its id (== its arena index).
    pub fn push_node(&mut self, name: &str) -> usize {
        let id = self.nodes.len();
        self.by_name.insert(name.to_string(), id);
        self.nodes.push(Node::new(name.to_string()));
        id
    }

    /// Appends an edge `from -> to`. Both ids must already be in the arena;
    /// the loader validates this before calling.
    pub fn push_edge(&mut self, from: usize, to: usize) {
        self.nodes[from].out_links.push(to);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Resolves a node id by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Sum of current weights over the whole arena.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.nodes.iter().map(|n| n.weight).sum()
    }

    /// Scatter step for one node. Returns the node's contribution to the
    /// global damping pool.
    ///
    /// A dangling node distributes nothing and hands its entire weight to
    /// the pool. Every other node splits `weight * (1 - DAMPING_FACTOR)`
    /// evenly over its out-links (a duplicate link receives a share per
    /// occurrence) and contributes `weight * DAMPING_FACTOR` to the pool.
    ///
    /// Reads only the previous round's `weight`; writes only `next_weight`
    /// accumulators. Must not be interleaved with `update_weight` calls.
    pub fn distribute(&mut self, id: usize) -> f64 {
        let weight = self.nodes[id].weight;
        let degree = self.nodes[id].out_links.len();
        if degree == 0 {
            return weight;
        }

        #[allow(clippy::cast_precision_loss)]
        let share = weight * (1.0 - DAMPING_FACTOR) / degree as f64;
        for slot in 0..degree {
            let to = self.nodes[id].out_links[slot];
            self.nodes[to].next_weight += share;
        }
        weight * DAMPING_FACTOR
    }
}
