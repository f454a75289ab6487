#![forbid(unsafe_code)]

//! Site percolation on an `n`x`n` grid and a Monte Carlo estimator of its
//! percolation threshold.

pub mod error;
pub mod grid;
pub mod site;
pub mod stats;
pub mod union_find;

pub use error::{Error, Result};
pub use grid::Percolation;
pub use site::{Indexing, Layout, Site};
pub use stats::{
    run_trial, sampler_from_rng, PercolationStats, SampleStatistics, SiteSampler, Statistics,
};
pub use union_find::{DisjointSet, QuickFind, WeightedQuickUnion};
