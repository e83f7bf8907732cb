//! # Workflows Module
//!
//! The public entry points of the library: score decoys against a target
//! across a cutoff set ([`score`]), or tabulate whole-graph bond-set
//! agreement ([`compare`]). Workflows own batching, grouping and progress
//! reporting; the number crunching lives in [`crate::engine`].

pub mod compare;
pub mod score;
