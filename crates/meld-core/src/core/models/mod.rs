//! # Core Models Module
//!
//! The system/topology boundary consumed by the exchange layer: a prebuilt
//! molecular system exposing atom counts, coordinates and residue/atom
//! indexing. Building systems from sequences is handled elsewhere; here a
//! [`builder::SystemBuilder`] assembles a [`system::System`] from explicit
//! atom records.
//!
//! - [`atom`] - Individual atom with name, parent residue and coordinates
//! - [`residue`] - Residue with name, number and atom-name lookup
//! - [`system`] - Complete system with the per-atom array accessors
//! - [`builder`] - Incremental construction of a system
//! - [`ids`] - Stable identifier types for atoms and residues
//!
//! ```ignore
//! use meld::core::models::builder::SystemBuilder;
//!
//! let mut builder = SystemBuilder::new();
//! builder
//!     .start_residue(1, "ALA")?
//!     .add_atom("N", Point3::new(0.0, 0.0, 0.0))?;
//! let system = builder.build();
//! assert_eq!(system.index_of_atom(1, "N"), Some(1));
//! ```

pub mod atom;
pub mod builder;
pub mod ids;
pub mod residue;
pub mod system;
