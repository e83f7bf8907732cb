use super::error::EngineError;
use crate::core::models::bond::{Bond, BondKey};
use crate::core::models::graph::BondGraph;
use crate::core::models::ids::{AtomId, ResidueId};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

/// A working subgraph of one protein's bond graph.
///
/// Created over a seed window by [`Subgraph::extract`] and expanded one
/// adjacency ring at a time by [`Subgraph::grow`]. The subgraph owns its
/// bond list, vertex set and residue set; the supergraph it came from is
/// only ever read.
#[derive(Debug, Clone, PartialEq)]
pub struct Subgraph {
    bonds: Vec<Bond>,
    keys: HashSet<BondKey>,
    /// Atoms appearing as an endpoint of any included bond.
    vertices: HashSet<AtomId>,
    residue_ids: BTreeSet<ResidueId>,
}

impl Subgraph {
    /// Builds the subgraph induced by `residues`: exactly the bonds of
    /// `graph` whose both endpoints map to residues in the range, with the
    /// residue set equal to the range.
    ///
    /// An empty range yields an empty subgraph, which is valid (its
    /// distance to itself is zero).
    pub fn extract(graph: &BondGraph, residues: impl IntoIterator<Item = ResidueId>) -> Self {
        let mut sub = Self {
            bonds: Vec::new(),
            keys: HashSet::new(),
            vertices: HashSet::new(),
            residue_ids: residues.into_iter().collect(),
        };
        for bond in graph.bonds() {
            let (donor, acceptor) = bond.endpoints();
            if sub.residue_ids.contains(&donor.residue())
                && sub.residue_ids.contains(&acceptor.residue())
            {
                sub.insert(bond.clone());
            }
        }
        sub
    }

    /// Expands the subgraph by one adjacency ring inside `supergraph`.
    ///
    /// All-or-nothing: on failure the subgraph is restored verbatim from a
    /// snapshot taken before the first mutation and the error is returned;
    /// a growth call never leaves the subgraph partially mutated.
    pub fn grow(&mut self, supergraph: &BondGraph) -> Result<(), EngineError> {
        let bonds_before = self.bonds.len();
        let residues_before = self.residue_ids.len();
        let snapshot = self.clone();

        match self.grow_inner(supergraph) {
            Ok(()) => Ok(()),
            Err(err) => {
                *self = snapshot;
                if self.bonds.len() != bonds_before || self.residue_ids.len() != residues_before {
                    return Err(EngineError::Rollback {
                        graph: supergraph.name().to_string(),
                    });
                }
                Err(err)
            }
        }
    }

    fn grow_inner(&mut self, sup: &BondGraph) -> Result<(), EngineError> {
        // 1. Bonds reachable from the atoms of the current residue span
        //    that are not yet part of the subgraph. Deduplicated by
        //    identity; a bond seen from both endpoints is one bond.
        let mut outgoing: Vec<&Bond> = Vec::new();
        let mut reached: HashSet<BondKey> = HashSet::new();
        for atom in self.residue_ids.iter().flat_map(|r| r.atoms()) {
            for bond in sup.bonds_at(atom) {
                let key = bond.key();
                if !self.keys.contains(&key) && reached.insert(key) {
                    outgoing.push(bond);
                }
            }
        }

        // 2. One adjacency ring around the current residue set, clipped to
        //    the supergraph's residue universe.
        let ring: BTreeSet<ResidueId> = self
            .residue_ids
            .iter()
            .flat_map(|r| r.with_neighbours())
            .filter(|r| sup.residue_ids().contains(r))
            .collect();

        // 3. Apply the growth step.
        for bond in outgoing {
            for atom in [bond.donor(), bond.acceptor()] {
                if !sup.residue_ids().contains(&atom.residue()) {
                    return Err(EngineError::MalformedGraph {
                        graph: sup.name().to_string(),
                        atom,
                    });
                }
            }
            if !self.keys.contains(&bond.key()) {
                self.insert(bond.clone());
            }
        }

        let mut grown = ring;
        grown.extend(self.residue_ids.iter().copied());
        grown.extend(self.vertices.iter().map(|a| a.residue()));
        trace!(
            residues = grown.len(),
            bonds = self.bonds.len(),
            "Grew subgraph by one ring."
        );
        self.residue_ids = grown;
        Ok(())
    }

    fn insert(&mut self, bond: Bond) {
        self.keys.insert(bond.key());
        let (donor, acceptor) = bond.endpoints();
        self.vertices.insert(donor);
        self.vertices.insert(acceptor);
        self.bonds.push(bond);
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Value-identity set of the included bonds.
    pub fn bond_keys(&self) -> &HashSet<BondKey> {
        &self.keys
    }

    pub fn residue_ids(&self) -> &BTreeSet<ResidueId> {
        &self.residue_ids
    }

    /// Number of residues currently covered.
    pub fn extent(&self) -> usize {
        self.residue_ids.len()
    }

    /// Backbone edges `(i, i + 1)` synthesized from the residue set; both
    /// members must be present. These are derived purely from sequence
    /// adjacency, never copied from the bond list.
    pub fn backbone_edges(&self) -> impl Iterator<Item = (ResidueId, ResidueId)> {
        self.residue_ids
            .iter()
            .copied()
            .tuple_windows()
            .filter(|(a, b)| b.0 == a.0 + 1)
    }
}
