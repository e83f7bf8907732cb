use super::distance::distance;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::subgraph::Subgraph;
use crate::core::models::graph::BondGraph;
use crate::core::models::ids::ResidueId;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Length of the seed window every growth run starts from.
pub const SEED_WINDOW: u32 = 3;

/// How the growth loop for one seed ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTermination {
    /// Growing one more ring pushed the edit distance past the cutoff; the
    /// recorded extent is the last one that stayed within budget.
    Exceeded { extent: usize },
    /// The target subgraph reached the target's full residue set while
    /// staying within budget.
    Exhausted { extent: usize },
}

impl SeedTermination {
    pub fn extent(self) -> usize {
        match self {
            SeedTermination::Exceeded { extent } | SeedTermination::Exhausted { extent } => extent,
        }
    }
}

/// Grows one seed window against both supergraphs until the edit distance
/// exceeds `limit` or the target's whole chain is covered.
///
/// The loop is capped at one iteration per target residue; a well-formed
/// contiguous residue universe always terminates well before the cap, so
/// exhausting it means the supergraph is malformed.
pub fn seed_extent(
    target: &BondGraph,
    decoy: &BondGraph,
    seed: ResidueId,
    limit: usize,
) -> Result<SeedTermination, EngineError> {
    let window = (seed.0..seed.0 + SEED_WINDOW).map(ResidueId);
    let mut tsub = Subgraph::extract(target, window.clone());
    let mut dsub = Subgraph::extract(decoy, window);

    if distance(&tsub, &dsub) > limit {
        // The unmodified seed already busts the budget.
        return Ok(SeedTermination::Exceeded {
            extent: dsub.extent(),
        });
    }

    let max_rounds = target.residue_count();
    for _ in 0..max_rounds {
        let extent = dsub.extent();
        tsub.grow(target)?;
        dsub.grow(decoy)?;

        if distance(&tsub, &dsub) > limit {
            // This growth step is invalidated; report the pre-growth extent.
            return Ok(SeedTermination::Exceeded { extent });
        }
        if tsub.residue_ids() == target.residue_ids() {
            return Ok(SeedTermination::Exhausted {
                extent: tsub.extent(),
            });
        }
    }
    Err(EngineError::StalledGrowth {
        seed,
        iterations: max_rounds,
    })
}

/// Seed starts for `target`: every residue of the ordered universe except
/// the last three.
fn seed_starts(target: &BondGraph) -> Vec<ResidueId> {
    let ids: Vec<ResidueId> = target.residue_ids().iter().copied().collect();
    let usable = ids.len().saturating_sub(SEED_WINDOW as usize);
    ids[..usable].to_vec()
}

/// Scores `decoy` against `target` at a single cutoff: the largest
/// surviving extent over all seeds, as a percentage of the chain length.
///
/// The aggregation is deliberately the maximum, not a mean: the score
/// reports the single largest region that stays consistent within budget.
#[instrument(skip(target, decoy, reporter), name = "cutoff_score")]
pub fn cutoff_score(
    target: &BondGraph,
    decoy: &BondGraph,
    limit: usize,
    reporter: &ProgressReporter,
) -> Result<f64, EngineError> {
    let residue_count = target.residue_count();
    if residue_count == 0 {
        return Err(EngineError::MissingResidueCount(target.name().to_string()));
    }

    let seeds = seed_starts(target);
    reporter.report(Progress::CutoffStart {
        limit,
        seeds: seeds.len() as u64,
    });

    let score_one = |seed: &ResidueId| -> Result<usize, EngineError> {
        let termination = seed_extent(target, decoy, *seed, limit)?;
        reporter.report(Progress::SeedScored);
        Ok(termination.extent())
    };

    #[cfg(feature = "parallel")]
    let extents: Result<Vec<usize>, EngineError> = seeds.par_iter().map(score_one).collect();
    #[cfg(not(feature = "parallel"))]
    let extents: Result<Vec<usize>, EngineError> = seeds.iter().map(score_one).collect();

    // An empty seed set (fewer than four residues) folds to extent zero.
    let best = extents?.into_iter().max().unwrap_or(0);
    let score = best as f64 / residue_count as f64 * 100.0;

    debug!(
        target = target.name(),
        decoy = decoy.name(),
        limit,
        best,
        score,
        "Scored decoy at one cutoff."
    );
    reporter.report(Progress::CutoffFinish { limit, score });
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::HydrogenBond;
    use crate::core::models::ids::AtomId;
    use std::collections::BTreeSet;

    fn hydrogen(donor: u32, acceptor: u32) -> HydrogenBond {
        HydrogenBond {
            donor: AtomId(donor),
            acceptor: AtomId(acceptor),
            length: 2.9,
            cluster: 0,
            flags: String::new(),
        }
    }

    fn bare_graph(name: &str, residues: u32) -> BondGraph {
        let mut graph = BondGraph::new(name);
        graph.set_residue_span(residues);
        graph
    }

    /// Target and decoy agreeing inside residues 1..=3 and diverging on
    /// bonds reachable from every seed window.
    fn diverging_pair() -> (BondGraph, BondGraph) {
        let mut target = bare_graph("t", 10);
        let mut decoy = bare_graph("d", 10);
        // Shared bond inside the first window (residues 1 and 2).
        target.add_hydrogen_bond(hydrogen(4, 7));
        decoy.add_hydrogen_bond(hydrogen(4, 7));
        // Every residue past the third binds back to residue 1, but to a
        // different atom on each side, so any growth step that leaves the
        // window picks up divergent bonds.
        for r in 4..=10 {
            target.add_hydrogen_bond(hydrogen(3 * r, 4));
            decoy.add_hydrogen_bond(hydrogen(3 * r, 5));
        }
        (target, decoy)
    }

    mod seeds {
        use super::*;

        #[test]
        fn seed_starts_skip_the_last_three_residues() {
            let target = bare_graph("t", 10);
            let starts = seed_starts(&target);
            assert_eq!(starts.first(), Some(&ResidueId(1)));
            assert_eq!(starts.last(), Some(&ResidueId(7)));
            assert_eq!(starts.len(), 7);
        }

        #[test]
        fn short_chains_admit_no_seed() {
            let target = bare_graph("t", 3);
            assert!(seed_starts(&target).is_empty());
        }
    }

    mod seed_extents {
        use super::*;

        #[test]
        fn identical_graphs_exhaust_the_full_chain() {
            let (target, _) = diverging_pair();
            let termination =
                seed_extent(&target, &target.clone(), ResidueId(1), 0).unwrap();
            assert_eq!(termination, SeedTermination::Exhausted { extent: 10 });
        }

        #[test]
        fn divergence_past_the_window_stops_at_the_seed_extent() {
            let (target, decoy) = diverging_pair();
            let termination = seed_extent(&target, &decoy, ResidueId(1), 0).unwrap();
            assert_eq!(termination, SeedTermination::Exceeded { extent: 3 });
        }

        #[test]
        fn a_mismatched_seed_window_reports_the_window_size() {
            let mut target = bare_graph("t", 10);
            target.add_hydrogen_bond(hydrogen(4, 7));
            let decoy = bare_graph("d", 10);

            let termination = seed_extent(&target, &decoy, ResidueId(1), 0).unwrap();
            assert_eq!(termination, SeedTermination::Exceeded { extent: 3 });
        }

        #[test]
        fn extent_never_decreases_with_the_cutoff() {
            let (target, decoy) = diverging_pair();
            let mut previous = 0;
            for limit in [0, 2, 14, 1000] {
                let extent = seed_extent(&target, &decoy, ResidueId(1), limit)
                    .unwrap()
                    .extent();
                assert!(extent >= previous, "extent shrank at limit {limit}");
                previous = extent;
            }
            // A limit beyond any possible difference covers the whole chain.
            assert_eq!(previous, 10);
        }

        #[test]
        fn stalled_growth_is_reported_not_looped() {
            let mut target = BondGraph::new("t");
            let mut universe: BTreeSet<ResidueId> =
                (1..=3).map(ResidueId).collect();
            universe.insert(ResidueId(10));
            target.set_residue_ids(universe.clone());
            let mut decoy = BondGraph::new("d");
            decoy.set_residue_ids(universe);

            let err = seed_extent(&target, &decoy, ResidueId(1), 0).unwrap_err();
            assert!(matches!(
                err,
                EngineError::StalledGrowth { seed: ResidueId(1), .. }
            ));
        }
    }

    mod cutoff_scores {
        use super::*;

        #[test]
        fn identical_pair_scores_one_hundred_at_every_default_cutoff() {
            let (target, _) = diverging_pair();
            let decoy = target.clone();
            for limit in crate::engine::config::DEFAULT_CUTOFFS {
                let score =
                    cutoff_score(&target, &decoy, limit, &ProgressReporter::new()).unwrap();
                assert!((score - 100.0).abs() < f64::EPSILON);
            }
        }

        #[test]
        fn bondless_pair_matches_trivially_even_at_cutoff_zero() {
            let target = bare_graph("t", 10);
            let decoy = bare_graph("d", 10);
            let score = cutoff_score(&target, &decoy, 0, &ProgressReporter::new()).unwrap();
            assert!((score - 100.0).abs() < f64::EPSILON);
        }

        #[test]
        fn early_divergence_caps_the_score_at_the_window_share() {
            let (target, decoy) = diverging_pair();
            let score = cutoff_score(&target, &decoy, 0, &ProgressReporter::new()).unwrap();
            assert!((score - 30.0).abs() < f64::EPSILON);
        }

        #[test]
        fn scores_stay_within_percentage_bounds() {
            let (target, decoy) = diverging_pair();
            for limit in [0, 1, 3, 25, 200] {
                let score =
                    cutoff_score(&target, &decoy, limit, &ProgressReporter::new()).unwrap();
                assert!((0.0..=100.0).contains(&score));
            }
        }

        #[test]
        fn empty_residue_universe_cannot_be_normalized() {
            let target = BondGraph::new("t");
            let decoy = BondGraph::new("d");
            let err = cutoff_score(&target, &decoy, 0, &ProgressReporter::new()).unwrap_err();
            assert!(matches!(err, EngineError::MissingResidueCount(_)));
        }
    }
}
