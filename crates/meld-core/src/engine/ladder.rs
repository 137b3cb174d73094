use super::adaptor::ExchangeAdaptor;
use super::config::ExchangeConfig;
use super::error::EngineError;
use super::permutation::Permutation;
use super::utils::sampling::{RandomSource, metropolis_accept};
use crate::core::energy::EnergyMatrix;
use tracing::{debug, instrument, trace};

/// Randomized nearest-neighbor exchange ladder.
///
/// Each call to [`compute_exchanges`](Self::compute_exchanges) runs a fixed
/// number of sequential exchange trials. Every trial picks one adjacent rung
/// pair uniformly at random, evaluates the swap against the assignment left by
/// the previous trial and accepts it with the Metropolis criterion. Because
/// pairs are redrawn every trial, a replica can travel several rungs within a
/// single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestNeighborLadder {
    n_trials: usize,
}

impl NearestNeighborLadder {
    pub fn new(n_trials: usize) -> Self {
        Self { n_trials }
    }

    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Runs one exchange round and returns the resulting rung assignment.
    ///
    /// The shape of `energies` is validated before any trial runs; on error
    /// neither `adaptor` nor `rng` is touched. Otherwise `adaptor` receives
    /// exactly one `update(rung, accepted)` per trial, in trial order.
    ///
    /// # Arguments
    ///
    /// * `energies` - Square matrix of exchange energies indexed by original replica.
    /// * `adaptor` - Observer notified of every accept/reject decision.
    /// * `rng` - Source of pair choices and acceptance draws.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NonSquareEnergies`] for a non-square matrix and
    /// [`EngineError::TooFewReplicas`] for fewer than two replicas.
    #[instrument(
        level = "debug",
        skip_all,
        name = "compute_exchanges",
        fields(n_replicas = energies.n_replicas(), n_trials = self.n_trials)
    )]
    pub fn compute_exchanges<A, R>(
        &self,
        energies: &EnergyMatrix,
        adaptor: &mut A,
        rng: &mut R,
    ) -> Result<Permutation, EngineError>
    where
        A: ExchangeAdaptor + ?Sized,
        R: RandomSource + ?Sized,
    {
        let (rows, cols) = energies.shape();
        if rows != cols {
            return Err(EngineError::NonSquareEnergies { rows, cols });
        }
        if rows < 2 {
            return Err(EngineError::TooFewReplicas(rows));
        }

        let n_pairs = rows - 1;
        let mut permutation = Permutation::identity(rows);
        let mut n_accepted = 0usize;

        for trial in 0..self.n_trials {
            let lower = if n_pairs == 1 {
                0
            } else {
                rng.pick_pair(n_pairs)
            };

            let delta = permutation.exchange_delta(energies, lower);
            let accepted = metropolis_accept(delta, rng);
            trace!(trial, lower, delta, accepted, "Exchange trial evaluated.");

            adaptor.update(lower, accepted);
            if accepted {
                permutation.swap_adjacent(lower);
                n_accepted += 1;
            }
        }

        debug!(
            "Accepted {} of {} exchange trials. Final assignment: {:?}",
            n_accepted,
            self.n_trials,
            permutation.as_slice()
        );
        Ok(permutation)
    }
}

impl From<&ExchangeConfig> for NearestNeighborLadder {
    fn from(config: &ExchangeConfig) -> Self {
        Self::new(config.n_trials)
    }
}
