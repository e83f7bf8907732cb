use super::subgraph::Subgraph;
use std::collections::BTreeSet;

/// Edit distance between two subgraphs: the number of edges that must be
/// added or removed to turn one into the other.
///
/// Counts the symmetric difference of the two bond-key sets (hydrogen and
/// tertiary pooled, metadata ignored) plus the symmetric difference of the
/// backbone edges synthesized from each side's residue set. The result is a
/// raw count, not normalized.
pub fn distance(a: &Subgraph, b: &Subgraph) -> usize {
    let bond_term = a.bond_keys().symmetric_difference(b.bond_keys()).count();

    let backbone_a: BTreeSet<_> = a.backbone_edges().collect();
    let backbone_b: BTreeSet<_> = b.backbone_edges().collect();
    let backbone_term = backbone_a.symmetric_difference(&backbone_b).count();

    bond_term + backbone_term
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::{HydrogenBond, TertiaryBond};
    use crate::core::models::graph::BondGraph;
    use crate::core::models::ids::{AtomId, ResidueId};

    fn hydrogen(donor: u32, acceptor: u32, cluster: u32) -> HydrogenBond {
        HydrogenBond {
            donor: AtomId(donor),
            acceptor: AtomId(acceptor),
            length: 2.9,
            cluster,
            flags: String::new(),
        }
    }

    fn window(start: u32, len: u32) -> impl Iterator<Item = ResidueId> {
        (start..start + len).map(ResidueId)
    }

    #[test]
    fn distance_to_self_is_zero() {
        let mut graph = BondGraph::new("t0001");
        graph.set_residue_span(6);
        graph.add_hydrogen_bond(hydrogen(6, 9, 0));
        graph.add_tertiary_bond(TertiaryBond {
            donor: AtomId(10),
            acceptor: AtomId(16),
            vdw_distance: 4.0,
        });

        let sub = Subgraph::extract(&graph, window(1, 6));
        assert_eq!(distance(&sub, &sub), 0);
    }

    #[test]
    fn empty_extractions_are_at_distance_zero() {
        let graph = BondGraph::new("t0001");
        let a = Subgraph::extract(&graph, std::iter::empty());
        let b = Subgraph::extract(&graph, std::iter::empty());
        assert_eq!(distance(&a, &b), 0);
    }

    #[test]
    fn bond_term_counts_both_directions_of_the_difference() {
        let mut target = BondGraph::new("t");
        target.set_residue_span(6);
        target.add_hydrogen_bond(hydrogen(6, 9, 0));
        target.add_hydrogen_bond(hydrogen(7, 12, 0));

        let mut decoy = BondGraph::new("d");
        decoy.set_residue_span(6);
        decoy.add_hydrogen_bond(hydrogen(6, 9, 0));
        decoy.add_hydrogen_bond(hydrogen(8, 15, 0));

        let t = Subgraph::extract(&target, window(1, 6));
        let d = Subgraph::extract(&decoy, window(1, 6));

        // One bond only in the target, one only in the decoy.
        assert_eq!(distance(&t, &d), 2);
    }

    #[test]
    fn metadata_differences_do_not_count() {
        let mut target = BondGraph::new("t");
        target.set_residue_span(4);
        target.add_hydrogen_bond(hydrogen(6, 9, 3));

        let mut decoy = BondGraph::new("d");
        decoy.set_residue_span(4);
        decoy.add_hydrogen_bond(hydrogen(6, 9, 27));

        let t = Subgraph::extract(&target, window(1, 4));
        let d = Subgraph::extract(&decoy, window(1, 4));

        assert_eq!(distance(&t, &d), 0);
    }

    #[test]
    fn hydrogen_and_tertiary_bonds_on_the_same_atoms_differ() {
        let mut target = BondGraph::new("t");
        target.set_residue_span(4);
        target.add_hydrogen_bond(hydrogen(6, 9, 0));

        let mut decoy = BondGraph::new("d");
        decoy.set_residue_span(4);
        decoy.add_tertiary_bond(TertiaryBond {
            donor: AtomId(6),
            acceptor: AtomId(9),
            vdw_distance: 4.0,
        });

        let t = Subgraph::extract(&target, window(1, 4));
        let d = Subgraph::extract(&decoy, window(1, 4));

        assert_eq!(distance(&t, &d), 2);
    }

    #[test]
    fn backbone_term_reflects_residue_coverage_differences() {
        let target = BondGraph::new("t");
        let decoy = BondGraph::new("d");

        let t = Subgraph::extract(&target, window(1, 4));
        let d = Subgraph::extract(&decoy, window(1, 3));

        // Target side carries backbone edge (3, 4); the decoy side does not.
        assert_eq!(distance(&t, &d), 1);
    }
}
