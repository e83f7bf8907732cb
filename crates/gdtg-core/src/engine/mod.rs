//! # Engine Module
//!
//! The scoring machinery of GDT-Graph: grow matching subgraphs outward from
//! small seed windows of the target and decoy bond graphs, and measure how
//! large a region stays structurally consistent within a bounded edit
//! distance.
//!
//! ## Architecture
//!
//! - **Subgraphs** ([`subgraph`]) - seed-window extraction and transactional
//!   one-ring growth against a supergraph
//! - **Distance** ([`distance`]) - the bond-set plus backbone-edge edit
//!   distance between two subgraphs
//! - **Scoring** ([`scorer`]) - the per-seed growth loop and the
//!   max-over-seeds per-cutoff score
//! - **Bond-set agreement** ([`bondset`]) - whole-graph endpoint-pair
//!   comparison with its sentinel conventions
//! - **Configuration** ([`config`]) - cutoff sets and validation
//! - **Progress** ([`progress`]) - callback-based progress events
//! - **Errors** ([`error`]) - engine error types

pub mod bondset;
pub mod config;
pub mod distance;
pub mod error;
pub mod progress;
pub mod scorer;
pub mod subgraph;
