//! Whole-graph bond-set agreement.
//!
//! Compares the endpoint-pair sets of two graphs directly, without any
//! subgraph growth: exact overlap as a percentage, plus a tolerance score
//! for the mismatched remainder that rewards bonds landing near a
//! counterpart on the other side.

use crate::core::models::ids::AtomId;
use std::collections::HashSet;

/// Score of a bond compared against an empty candidate set. A defined edge
/// case of the scoring function, not a fault.
pub const EMPTY_CANDIDATE_SCORE: f64 = -1.0;

/// Overlap percentage reported when the target set is empty and the
/// fraction is undefined.
pub const EMPTY_TARGET_OVERLAP_PCT: f64 = 100.0;

/// Endpoint pair of a bond as recorded in the listing (donor, acceptor).
pub type EndpointPair = (AtomId, AtomId);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgreementParams {
    /// Half-width of the tent function scoring endpoint offsets.
    pub half_width: u32,
}

impl Default for AgreementParams {
    fn default() -> Self {
        Self { half_width: 5 }
    }
}

/// Tent function over an endpoint offset: 1 at zero, falling linearly to
/// -1 at twice the half-width, constant -1 beyond.
fn offset_score(offset: i64, half_width: u32) -> f64 {
    let magnitude = offset.unsigned_abs();
    if magnitude > 2 * u64::from(half_width) {
        -1.0
    } else {
        1.0 - magnitude as f64 / f64::from(half_width)
    }
}

/// Best agreement of one bond against a candidate set: the maximum over
/// candidates of the summed endpoint tent scores. The empty candidate set
/// yields [`EMPTY_CANDIDATE_SCORE`].
pub fn bond_agreement(
    bond: EndpointPair,
    candidates: &HashSet<EndpointPair>,
    params: AgreementParams,
) -> f64 {
    if candidates.is_empty() {
        return EMPTY_CANDIDATE_SCORE;
    }
    candidates
        .iter()
        .map(|candidate| {
            offset_score(i64::from(bond.0.0) - i64::from(candidate.0.0), params.half_width)
                + offset_score(i64::from(bond.1.0) - i64::from(candidate.1.0), params.half_width)
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Set-level summary of a target/decoy endpoint-pair comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetAgreement {
    pub target_size: usize,
    pub decoy_size: usize,
    /// Share of the target's bonds found verbatim in the decoy, in percent.
    pub overlap_pct: f64,
    /// Mean [`bond_agreement`] of the bonds unique to either side.
    pub mismatch: f64,
    /// Overlap with the mismatch score folded into the remaining headroom.
    pub combined: f64,
}

/// Compares two endpoint-pair sets.
pub fn set_agreement(
    target: &HashSet<EndpointPair>,
    decoy: &HashSet<EndpointPair>,
    params: AgreementParams,
) -> SetAgreement {
    let common: HashSet<EndpointPair> = target.intersection(decoy).copied().collect();
    let overlap_pct = if target.is_empty() {
        EMPTY_TARGET_OVERLAP_PCT
    } else {
        common.len() as f64 / target.len() as f64 * 100.0
    };

    let target_only: HashSet<EndpointPair> = target.difference(&common).copied().collect();
    let decoy_only: HashSet<EndpointPair> = decoy.difference(&common).copied().collect();

    let mut mismatch = 0.0;
    for &bond in &target_only {
        mismatch += bond_agreement(bond, &decoy_only, params);
    }
    for &bond in &decoy_only {
        mismatch += bond_agreement(bond, &target_only, params);
    }
    let mismatched = target_only.len() + decoy_only.len();
    if mismatched > 0 {
        mismatch /= mismatched as f64;
    }

    let combined = overlap_pct + mismatch * (100.0 - overlap_pct);
    SetAgreement {
        target_size: target.len(),
        decoy_size: decoy.len(),
        overlap_pct,
        mismatch,
        combined,
    }
}
