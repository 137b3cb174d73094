//! # Engine Module
//!
//! The stateful exchange layer of the replica-exchange core. Given the energy
//! of every replica evaluated under every rung's Hamiltonian, it decides which
//! replica occupies which rung for the next round.
//!
//! ## Architecture
//!
//! - **Ladder** ([`ladder`]) - Nearest-neighbor exchange attempts under the Metropolis criterion
//! - **Permutation** ([`permutation`]) - Replica-to-rung assignment produced by a round
//! - **Adaptors** ([`adaptor`]) - Hooks notified of every attempted exchange
//! - **Configuration** ([`config`]) - Ladder size, trial count, seed and temperature schedule
//! - **Error Handling** ([`error`]) - Engine-specific error types
//! - **Sampling** ([`utils::sampling`]) - Random draws and the acceptance test

pub mod adaptor;
pub mod config;
pub mod error;
pub mod ladder;
pub mod permutation;
pub mod utils;
