//! Helpers shared by the exchange engine.

pub mod sampling;
