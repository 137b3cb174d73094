//! # Workflows Module
//!
//! High-level entry points that tie the temperature schedule in [`crate::core`]
//! to the exchange ladder in [`crate::engine`].
//!
//! - **Exchange Workflow** ([`exchange`]) - One exchange round, from energies to
//!   the temperature each replica runs at next.

pub mod exchange;
