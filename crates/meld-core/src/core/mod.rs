//! # Core Module
//!
//! Stateless building blocks of the exchange core.
//!
//! - **Temperature Schedules** ([`temperature`]) - Validated maps from ladder position to temperature
//! - **Exchange Energies** ([`energy`]) - The per-round pairwise energy matrix
//! - **Molecular Representation** ([`models`]) - The prebuilt system boundary

pub mod energy;
pub mod models;
pub mod temperature;
