use std::fmt;

/// Number of atom ids owned by each residue in the upstream bond-listing
/// convention.
pub const ATOMS_PER_RESIDUE: u32 = 3;

/// Identifier of an atom, as assigned by the upstream bond-listing format.
///
/// Residue `r` (1-based) owns exactly the three consecutive ids `3r`,
/// `3r + 1` and `3r + 2`, so the first N atom of a chain carries id 3. The
/// offset convention is dictated by the external format and is not
/// configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AtomId(pub u32);

/// 1-based identifier of a residue along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResidueId(pub u32);

impl AtomId {
    /// The residue owning this atom.
    pub fn residue(self) -> ResidueId {
        ResidueId(self.0 / ATOMS_PER_RESIDUE)
    }
}

impl ResidueId {
    /// The three atom ids owned by this residue, in ascending order.
    pub fn atoms(self) -> [AtomId; ATOMS_PER_RESIDUE as usize] {
        let base = self.0 * ATOMS_PER_RESIDUE;
        [AtomId(base), AtomId(base + 1), AtomId(base + 2)]
    }

    /// This residue together with its two sequence neighbours.
    pub fn with_neighbours(self) -> [ResidueId; 3] {
        [ResidueId(self.0.saturating_sub(1)), self, ResidueId(self.0 + 1)]
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_ids_map_back_to_their_residue() {
        for r in [1u32, 2, 17, 400] {
            let residue = ResidueId(r);
            for atom in residue.atoms() {
                assert_eq!(atom.residue(), residue);
            }
        }
    }

    #[test]
    fn first_residue_owns_atoms_three_to_five() {
        assert_eq!(
            ResidueId(1).atoms(),
            [AtomId(3), AtomId(4), AtomId(5)]
        );
    }

    #[test]
    fn neighbourhood_is_clamped_at_zero() {
        assert_eq!(
            ResidueId(1).with_neighbours(),
            [ResidueId(0), ResidueId(1), ResidueId(2)]
        );
    }
}
