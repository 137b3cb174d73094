use super::ids::ResidueId;
use nalgebra::Point3;

/// A single atom of a prebuilt system.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "OXT").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// Zero-based position of the atom in system order.
    pub index: usize,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub(crate) fn new(
        name: &str,
        residue_id: ResidueId,
        index: usize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            residue_id,
            index,
            position,
        }
    }
}
