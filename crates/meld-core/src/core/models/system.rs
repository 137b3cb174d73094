use super::atom::Atom;
use super::ids::{AtomId, ResidueId};
use super::residue::Residue;
use crate::core::temperature::TemperatureScaler;
use nalgebra::{DMatrix, Point3};
use slotmap::SlotMap;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SystemError {
    #[error("Cannot add atom '{atom_name}' before a residue has been started")]
    NoCurrentResidue { atom_name: String },

    #[error("Residue {residue_number} already contains an atom named '{atom_name}'")]
    DuplicateAtomName {
        residue_number: usize,
        atom_name: String,
    },

    #[error("Residue number {number} must be greater than {previous}")]
    ResidueNumberOrder { previous: usize, number: usize },
}

/// A prebuilt molecular system as seen by the exchange layer.
///
/// Atoms are kept in the order they were added, which is the order of the
/// parallel per-atom arrays returned by the accessors. Residues are numbered
/// from one and atom lookups return one-based atom indices.
#[derive(Debug, Clone, Default)]
pub struct System {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Atoms in system order.
    atom_order: Vec<AtomId>,
    /// Lookup map for finding residues by their residue number.
    residue_number_map: HashMap<usize, ResidueId>,
    temperature_scaler: Option<TemperatureScaler>,
}

impl System {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_residue(&mut self, number: usize, name: &str) -> ResidueId {
        let residue_id = self.residues.insert(Residue::new(number, name));
        self.residue_number_map.insert(number, residue_id);
        residue_id
    }

    pub(crate) fn push_atom(
        &mut self,
        residue_id: ResidueId,
        name: &str,
        position: Point3<f64>,
    ) -> Result<AtomId, SystemError> {
        let index = self.atom_order.len();
        let residue =
            self.residues
                .get_mut(residue_id)
                .ok_or_else(|| SystemError::NoCurrentResidue {
                    atom_name: name.to_string(),
                })?;
        if residue.get_atom_id_by_name(name).is_some() {
            return Err(SystemError::DuplicateAtomName {
                residue_number: residue.number,
                atom_name: name.to_string(),
            });
        }

        let atom_id = self
            .atoms
            .insert(Atom::new(name, residue_id, index, position));
        residue.add_atom(name, atom_id);
        self.atom_order.push(atom_id);
        Ok(atom_id)
    }

    pub fn n_atoms(&self) -> usize {
        self.atom_order.len()
    }

    pub fn n_residues(&self) -> usize {
        self.residues.len()
    }

    /// Returns an iterator over atoms in system order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = &Atom> {
        self.atom_order.iter().map(|&id| &self.atoms[id])
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    pub fn find_residue_by_number(&self, residue_number: usize) -> Option<ResidueId> {
        self.residue_number_map.get(&residue_number).copied()
    }

    /// Atom coordinates as an `n_atoms x 3` matrix, one row per atom.
    pub fn coordinates(&self) -> DMatrix<f64> {
        let positions: Vec<_> = self.atoms_iter().map(|atom| atom.position).collect();
        DMatrix::from_fn(positions.len(), 3, |i, j| positions[i][j])
    }

    pub fn atom_names(&self) -> Vec<&str> {
        self.atoms_iter().map(|atom| atom.name.as_str()).collect()
    }

    pub fn residue_names(&self) -> Vec<&str> {
        self.atoms_iter()
            .map(|atom| self.residues[atom.residue_id].name.as_str())
            .collect()
    }

    pub fn residue_numbers(&self) -> Vec<usize> {
        self.atoms_iter()
            .map(|atom| self.residues[atom.residue_id].number)
            .collect()
    }

    /// One-based index of the atom named `atom_name` in residue `residue_number`.
    ///
    /// # Return
    ///
    /// Returns `None` if the residue or the atom does not exist.
    pub fn index_of_atom(&self, residue_number: usize, atom_name: &str) -> Option<usize> {
        let residue_id = self.find_residue_by_number(residue_number)?;
        let atom_id = self.residues[residue_id].get_atom_id_by_name(atom_name)?;
        Some(self.atoms[atom_id].index + 1)
    }

    pub fn temperature_scaler(&self) -> Option<&TemperatureScaler> {
        self.temperature_scaler.as_ref()
    }

    pub fn set_temperature_scaler(&mut self, scaler: TemperatureScaler) {
        self.temperature_scaler = Some(scaler);
    }
}
