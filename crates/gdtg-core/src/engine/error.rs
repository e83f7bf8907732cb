use crate::core::models::ids::{AtomId, ResidueId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A bond endpoint does not resolve to a residue inside the supergraph's
    /// residue universe. Fatal for the growth call that found it; the
    /// subgraph is rolled back before this is returned.
    #[error("Bond endpoint atom {atom} does not resolve to a residue of graph '{graph}'")]
    MalformedGraph { graph: String, atom: AtomId },

    /// A failed growth call could not restore its subgraph to the exact
    /// pre-call state. Aborts the enclosing target/decoy comparison.
    #[error("Failed to restore subgraph of '{graph}' to its pre-growth state")]
    Rollback { graph: String },

    /// The growth loop for one seed ran for a full residue-count worth of
    /// iterations without terminating, which only happens when the
    /// supergraph's residue universe is malformed.
    #[error("Growth from seed {seed} failed to terminate after {iterations} iterations")]
    StalledGrowth { seed: ResidueId, iterations: usize },

    /// No usable residue count is available for a target, so its scores
    /// cannot be normalized. Distinct from per-seed failures.
    #[error("No residue count known for target '{0}'")]
    MissingResidueCount(String),

    /// Scoring was requested with an empty cutoff set.
    #[error("Scoring requires at least one cutoff value")]
    EmptyCutoffSet,
}
