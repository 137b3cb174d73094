use rand::Rng;
use tracing::instrument;

/// Source of the random draws consumed by the exchange ladder.
///
/// Every [`rand::Rng`] is a `RandomSource`. Tests substitute scripted
/// sources to pin down the pair choices and acceptance draws.
pub trait RandomSource {
    /// Uniform index in `0..n_pairs`. `n_pairs` is never zero.
    fn pick_pair(&mut self, n_pairs: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_pair(&mut self, n_pairs: usize) -> usize {
        self.gen_range(0..n_pairs)
    }

    fn uniform(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

/// Metropolis criterion for an exchange costing `delta` (in units of kT).
///
/// Non-positive deltas are accepted without drawing. Otherwise exactly one
/// uniform value is drawn and the move is accepted if it falls below
/// `exp(-delta)`.
#[instrument(level = "trace", skip(rng))]
pub fn metropolis_accept<R: RandomSource + ?Sized>(delta: f64, rng: &mut R) -> bool {
    if delta <= 0.0 {
        return true;
    }
    rng.uniform() < (-delta).exp()
}
