//! # GDT-Graph Core Library
//!
//! A library for graph-based structural-similarity scoring of predicted
//! protein structures ("decoys") against their experimental targets,
//! computed purely over detected hydrogen- and tertiary-bond graphs.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict direction of
//! dependency, keeping the scoring machinery free of I/O and the data model
//! free of policy.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`BondGraph`, bond
//!   records, the atom/residue id convention) and loaders for the external
//!   bond-listing and sequence-length formats.
//!
//! - **[`engine`]: The Logic Core.** The stateful scoring machinery: seed
//!   subgraph extraction, transactional ring-growth against a supergraph,
//!   the bond/backbone edit distance, per-seed and per-cutoff scoring, and
//!   whole-graph bond-set agreement.
//!
//! - **[`workflows`]: The Public API.** High-level entry points tying the
//!   engine together: score one decoy (or a directory of them) against a
//!   target across a cutoff set, or tabulate bond-set agreement.

pub mod core;
pub mod engine;
pub mod workflows;
