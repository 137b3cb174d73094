//! # Meld Exchange Core
//!
//! The replica-exchange step of a replica-exchange molecular dynamics driver.
//! Between dynamics segments, replicas at neighboring positions of a
//! temperature (or Hamiltonian) ladder attempt to swap under the Metropolis
//! criterion; the result is a new assignment of replicas to rungs.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Stateless data: the molecular system model,
//!   the [`core::energy::EnergyMatrix`] of cross-evaluated replica energies and
//!   the [`core::temperature::TemperatureScaler`] schedules.
//!
//! - **[`engine`]: The Logic Core.** The [`engine::ladder::NearestNeighborLadder`]
//!   exchange algorithm, the [`engine::permutation::Permutation`] it produces,
//!   the adaptor contract and run configuration.
//!
//! - **[`workflows`]: The Public API.** One exchange round end to end, from an
//!   energy matrix to the temperature each replica runs at next.

pub mod core;
pub mod engine;
pub mod workflows;
