use crate::core::io::seqlen::SeqLenTable;
use crate::core::models::graph::BondGraph;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scorer;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{info, instrument, warn};

/// Scores for one decoy: one entry per cutoff plus their mean.
#[derive(Debug, Clone)]
pub struct DecoyScore {
    pub decoy: String,
    pub per_cutoff: Vec<(usize, f64)>,
    pub mean: f64,
}

/// Outcome of a batch run: successful scores in input order, plus every
/// pair that failed. Callers decide how to surface the failures; they are
/// never dropped here.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub scores: Vec<DecoyScore>,
    pub failures: Vec<(String, EngineError)>,
}

/// Scores `decoy` against `target` at a single cutoff. Both graphs must
/// already carry their residue universe.
pub fn compute_score(
    target: &BondGraph,
    decoy: &BondGraph,
    cutoff: usize,
) -> Result<f64, EngineError> {
    scorer::cutoff_score(target, decoy, cutoff, &ProgressReporter::new())
}

/// Scores `decoy` against `target` at every cutoff and averages the
/// results.
#[instrument(skip_all, name = "score_decoy")]
pub fn score_decoy(
    target: &BondGraph,
    decoy: &BondGraph,
    cutoffs: &[usize],
    reporter: &ProgressReporter,
) -> Result<DecoyScore, EngineError> {
    if cutoffs.is_empty() {
        return Err(EngineError::EmptyCutoffSet);
    }
    reporter.report(Progress::DecoyStart {
        name: decoy.name().to_string(),
        cutoffs: cutoffs.len() as u64,
    });

    let mut per_cutoff = Vec::with_capacity(cutoffs.len());
    for &limit in cutoffs {
        let score = scorer::cutoff_score(target, decoy, limit, reporter)?;
        per_cutoff.push((limit, score));
    }
    let mean = per_cutoff.iter().map(|(_, score)| score).sum::<f64>() / per_cutoff.len() as f64;

    reporter.report(Progress::DecoyFinish {
        name: decoy.name().to_string(),
        score: mean,
    });
    info!(
        target = target.name(),
        decoy = decoy.name(),
        mean,
        "Scored decoy across the cutoff set."
    );
    Ok(DecoyScore {
        decoy: decoy.name().to_string(),
        per_cutoff,
        mean,
    })
}

/// Scores an ordered batch of decoys against one target.
///
/// A growth failure aborts the failing pair only; the rest of the batch
/// still runs, and the failure is recorded in the outcome.
#[instrument(skip_all, name = "score_batch")]
pub fn score_decoys<'a>(
    target: &BondGraph,
    decoys: impl IntoIterator<Item = &'a BondGraph>,
    cutoffs: &[usize],
    reporter: &ProgressReporter,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for decoy in decoys {
        match score_decoy(target, decoy, cutoffs, reporter) {
            Ok(score) => outcome.scores.push(score),
            Err(err) => {
                warn!(decoy = decoy.name(), %err, "Scoring failed for decoy.");
                outcome.failures.push((decoy.name().to_string(), err));
            }
        }
    }
    outcome
}

/// Spans `target`'s residue universe from the sequence-length table and
/// returns the residue count.
///
/// A missing or zero-length entry cannot normalize any score for this
/// target and is reported as [`EngineError::MissingResidueCount`].
pub fn resolve_residue_span(
    target: &mut BondGraph,
    table: &SeqLenTable,
) -> Result<u32, EngineError> {
    let stem = target_stem(target.name());
    let count = table
        .get(stem)
        .filter(|&count| count > 0)
        .ok_or_else(|| EngineError::MissingResidueCount(target.name().to_string()))?;
    target.set_residue_span(count);
    Ok(count)
}

/// Name stem linking a decoy to its target: everything before the first
/// underscore. Target names pass through unchanged.
pub fn target_stem(name: &str) -> &str {
    name.split('_').next().unwrap_or(name)
}

/// Groups an ordered sequence of items by a key function, preserving the
/// input order inside each bucket.
pub fn group_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Groups loaded decoys under their target stem.
pub fn group_by_target(
    decoys: impl IntoIterator<Item = BondGraph>,
) -> HashMap<String, Vec<BondGraph>> {
    group_by_key(decoys, |decoy| target_stem(decoy.name()).to_string())
}
