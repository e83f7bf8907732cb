use super::bond::{Bond, BondKey, HydrogenBond, TertiaryBond};
use super::ids::{AtomId, ResidueId};
use std::collections::{BTreeSet, HashMap, HashSet};

/// A protein's bond graph: every detected hydrogen and tertiary bond,
/// indexed by endpoint atom, together with the ordered residue set defining
/// the graph's extent.
///
/// A `BondGraph` is built once per protein from loaded bond data and is not
/// mutated afterwards; scoring reads it through shared references, so a
/// single graph can back any number of concurrent comparisons.
#[derive(Debug, Clone, Default)]
pub struct BondGraph {
    name: String,
    /// All bonds in listing order.
    bonds: Vec<Bond>,
    /// Value-identity set of `bonds`.
    keys: HashSet<BondKey>,
    /// Indices into `bonds` for every atom that appears as an endpoint.
    incidence: HashMap<AtomId, Vec<usize>>,
    residue_ids: BTreeSet<ResidueId>,
}

impl BondGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a hydrogen-bond record.
    ///
    /// Idempotent on bond identity: a bond whose key is already present is
    /// ignored and `false` is returned.
    pub fn add_hydrogen_bond(&mut self, bond: HydrogenBond) -> bool {
        self.insert(Bond::Hydrogen(bond))
    }

    /// Appends a tertiary-bond record. Idempotent like
    /// [`add_hydrogen_bond`](Self::add_hydrogen_bond).
    pub fn add_tertiary_bond(&mut self, bond: TertiaryBond) -> bool {
        self.insert(Bond::Tertiary(bond))
    }

    fn insert(&mut self, bond: Bond) -> bool {
        if !self.keys.insert(bond.key()) {
            return false;
        }
        let index = self.bonds.len();
        let (donor, acceptor) = bond.endpoints();
        self.incidence.entry(donor).or_default().push(index);
        if acceptor != donor {
            self.incidence.entry(acceptor).or_default().push(index);
        }
        self.bonds.push(bond);
        true
    }

    /// Sets the residue universe to the contiguous span `1..=count`.
    pub fn set_residue_span(&mut self, count: u32) {
        self.residue_ids = (1..=count).map(ResidueId).collect();
    }

    /// Sets the residue universe explicitly.
    pub fn set_residue_ids(&mut self, residue_ids: BTreeSet<ResidueId>) {
        self.residue_ids = residue_ids;
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn hydrogen_bonds(&self) -> impl Iterator<Item = &HydrogenBond> {
        self.bonds.iter().filter_map(|bond| match bond {
            Bond::Hydrogen(b) => Some(b),
            Bond::Tertiary(_) => None,
        })
    }

    pub fn tertiary_bonds(&self) -> impl Iterator<Item = &TertiaryBond> {
        self.bonds.iter().filter_map(|bond| match bond {
            Bond::Tertiary(b) => Some(b),
            Bond::Hydrogen(_) => None,
        })
    }

    pub fn contains_bond(&self, key: &BondKey) -> bool {
        self.keys.contains(key)
    }

    /// Bonds incident to `atom`, in listing order.
    pub fn bonds_at(&self, atom: AtomId) -> impl Iterator<Item = &Bond> {
        self.incidence
            .get(&atom)
            .into_iter()
            .flatten()
            .map(|&index| &self.bonds[index])
    }

    /// Whether `atom` appears as an endpoint of any bond.
    pub fn has_bonds_at(&self, atom: AtomId) -> bool {
        self.incidence.contains_key(&atom)
    }

    pub fn residue_ids(&self) -> &BTreeSet<ResidueId> {
        &self.residue_ids
    }

    pub fn residue_count(&self) -> usize {
        self.residue_ids.len()
    }
}
