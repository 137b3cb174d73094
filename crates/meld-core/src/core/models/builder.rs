use super::ids::ResidueId;
use super::system::{System, SystemError};
use nalgebra::Point3;

/// Assembles a [`System`] residue by residue from explicit atom records.
pub struct SystemBuilder {
    system: System,

    // --- Builder-specific state for efficient construction ---
    current_residue: Option<ResidueId>,
    last_residue_number: usize,
}

impl Default for SystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemBuilder {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            current_residue: None,
            last_residue_number: 0,
        }
    }

    /// Starts a new residue. Residue numbers start at one and must increase.
    pub fn start_residue(&mut self, number: usize, name: &str) -> Result<&mut Self, SystemError> {
        if number <= self.last_residue_number {
            return Err(SystemError::ResidueNumberOrder {
                previous: self.last_residue_number,
                number,
            });
        }
        self.current_residue = Some(self.system.push_residue(number, name));
        self.last_residue_number = number;
        Ok(self)
    }

    /// Appends an atom to the current residue.
    pub fn add_atom(&mut self, name: &str, position: Point3<f64>) -> Result<&mut Self, SystemError> {
        let residue_id = self
            .current_residue
            .ok_or_else(|| SystemError::NoCurrentResidue {
                atom_name: name.to_string(),
            })?;
        self.system.push_atom(residue_id, name, position)?;
        Ok(self)
    }

    pub fn build(self) -> System {
        self.system
    }
}
