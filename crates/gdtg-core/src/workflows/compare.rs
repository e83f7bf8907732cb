use crate::core::models::graph::BondGraph;
use crate::engine::bondset::{self, AgreementParams, EndpointPair, SetAgreement};
use std::collections::HashSet;
use tracing::instrument;

/// Bond-set agreement of one decoy against the target, with the hydrogen
/// and tertiary pools scored separately.
#[derive(Debug, Clone)]
pub struct AgreementRow {
    pub decoy: String,
    pub hydrogen: SetAgreement,
    pub tertiary: SetAgreement,
}

fn hydrogen_pairs(graph: &BondGraph) -> HashSet<EndpointPair> {
    graph
        .hydrogen_bonds()
        .map(|bond| (bond.donor, bond.acceptor))
        .collect()
}

fn tertiary_pairs(graph: &BondGraph) -> HashSet<EndpointPair> {
    graph
        .tertiary_bonds()
        .map(|bond| (bond.donor, bond.acceptor))
        .collect()
}

/// Tabulates bond-set agreement for an ordered batch of decoys.
///
/// A decoy without tertiary data simply contributes an empty tertiary set;
/// the sentinel conventions of [`bondset`] apply.
#[instrument(skip_all, name = "compare_workflow")]
pub fn run<'a>(
    target: &BondGraph,
    decoys: impl IntoIterator<Item = &'a BondGraph>,
    params: AgreementParams,
) -> Vec<AgreementRow> {
    let target_hydrogen = hydrogen_pairs(target);
    let target_tertiary = tertiary_pairs(target);

    decoys
        .into_iter()
        .map(|decoy| AgreementRow {
            decoy: decoy.name().to_string(),
            hydrogen: bondset::set_agreement(&target_hydrogen, &hydrogen_pairs(decoy), params),
            tertiary: bondset::set_agreement(&target_tertiary, &tertiary_pairs(decoy), params),
        })
        .collect()
}
