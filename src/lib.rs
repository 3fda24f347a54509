// src/lib.rs
//! linkrank: PageRank over flat page/link tables.
//!
//! The pipeline is load ([`loader`]) -> fixed-iteration two-phase
//! propagation ([`engine`]) -> top-K report ([`report`]).

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod loader;
pub mod report;

pub use error::{RankError, Result};
pub use graph::{Graph, Node, DAMPING_FACTOR};
