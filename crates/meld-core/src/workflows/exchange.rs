use crate::core::energy::EnergyMatrix;
use crate::core::temperature::TemperatureScaler;
use crate::engine::adaptor::ExchangeAdaptor;
use crate::engine::config::ExchangeConfig;
use crate::engine::error::EngineError;
use crate::engine::ladder::NearestNeighborLadder;
use crate::engine::permutation::Permutation;
use crate::engine::utils::sampling::RandomSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

/// Result of one exchange round.
///
/// Only produced by [`run_round`], so there is always one rung temperature
/// per replica.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeOutcome {
    permutation: Permutation,
    rung_temperatures: Vec<f64>,
}

impl ExchangeOutcome {
    /// Replica on each rung after the round, bottom rung first.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Temperature of each rung, bottom rung first.
    pub fn rung_temperatures(&self) -> &[f64] {
        &self.rung_temperatures
    }

    pub fn into_permutation(self) -> Permutation {
        self.permutation
    }

    /// Temperature each replica runs at next, indexed by original replica.
    pub fn replica_temperatures(&self) -> Vec<f64> {
        let mut temperatures = vec![0.0; self.permutation.len()];
        for (&replica, &temperature) in self
            .permutation
            .as_slice()
            .iter()
            .zip(&self.rung_temperatures)
        {
            temperatures[replica] = temperature;
        }
        temperatures
    }

    /// Number of replicas that ended the round away from their starting rung.
    pub fn n_swapped(&self) -> usize {
        self.permutation
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(rung, &replica)| rung != replica)
            .count()
    }
}

/// Runs one exchange round and maps the new assignment onto rung temperatures.
///
/// Rung temperatures come from evaluating `scaler` at evenly spaced ladder
/// positions. Nothing is exchanged if the energies are rejected.
#[instrument(skip_all, name = "exchange_round", fields(n_replicas = energies.n_replicas()))]
pub fn run_round<A, R>(
    ladder: &NearestNeighborLadder,
    scaler: &TemperatureScaler,
    energies: &EnergyMatrix,
    adaptor: &mut A,
    rng: &mut R,
) -> Result<ExchangeOutcome, EngineError>
where
    A: ExchangeAdaptor + ?Sized,
    R: RandomSource + ?Sized,
{
    let permutation = ladder.compute_exchanges(energies, adaptor, rng)?;
    let rung_temperatures = scaler.rung_temperatures(permutation.len())?;

    let outcome = ExchangeOutcome {
        permutation,
        rung_temperatures,
    };
    info!(
        "Exchange round complete: {} of {} replicas changed rung.",
        outcome.n_swapped(),
        outcome.permutation.len()
    );
    Ok(outcome)
}

/// Runs one exchange round with the ladder and schedule described by `config`.
///
/// A configured seed gives a reproducible round; without one the thread-local
/// generator is used.
///
/// # Errors
///
/// Fails with [`EngineError::ReplicaCountMismatch`] when the energy matrix
/// does not describe `config.n_replicas` replicas, in addition to the ladder's
/// own validation errors.
pub fn run_round_with_config<A>(
    config: &ExchangeConfig,
    energies: &EnergyMatrix,
    adaptor: &mut A,
) -> Result<ExchangeOutcome, EngineError>
where
    A: ExchangeAdaptor + ?Sized,
{
    let (rows, cols) = energies.shape();
    if rows != config.n_replicas || cols != config.n_replicas {
        return Err(EngineError::ReplicaCountMismatch {
            expected: config.n_replicas,
            rows,
            cols,
        });
    }

    let ladder = NearestNeighborLadder::from(config);
    match config.seed {
        Some(seed) => run_round(
            &ladder,
            &config.temperature,
            energies,
            adaptor,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => run_round(
            &ladder,
            &config.temperature,
            energies,
            adaptor,
            &mut rand::thread_rng(),
        ),
    }
}
