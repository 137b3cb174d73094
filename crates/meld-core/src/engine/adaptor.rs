use tracing::warn;

/// Observer notified of every exchange decision.
///
/// The ladder calls [`update`](ExchangeAdaptor::update) exactly once per
/// trial, in trial order, with the lower rung of the attempted pair. It never
/// calls an adaptor concurrently. Implementations must not fail.
pub trait ExchangeAdaptor {
    fn update(&mut self, rung: usize, accepted: bool);
}

impl<A: ExchangeAdaptor + ?Sized> ExchangeAdaptor for &mut A {
    fn update(&mut self, rung: usize, accepted: bool) {
        (**self).update(rung, accepted);
    }
}

/// Adaptor that ignores every decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAdaptor;

impl ExchangeAdaptor for NullAdaptor {
    fn update(&mut self, _rung: usize, _accepted: bool) {}
}

/// Per-pair tallies of attempted and accepted exchanges.
///
/// Pair `k` is the exchange between rungs `k` and `k + 1`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcceptanceCounter {
    attempts: Vec<u64>,
    accepted: Vec<u64>,
}

impl AcceptanceCounter {
    /// Creates a counter for a ladder with `n_rungs` rungs.
    pub fn new(n_rungs: usize) -> Self {
        let n_pairs = n_rungs.saturating_sub(1);
        Self {
            attempts: vec![0; n_pairs],
            accepted: vec![0; n_pairs],
        }
    }

    pub fn n_pairs(&self) -> usize {
        self.attempts.len()
    }

    pub fn attempts(&self, rung: usize) -> u64 {
        self.attempts.get(rung).copied().unwrap_or(0)
    }

    pub fn accepted(&self, rung: usize) -> u64 {
        self.accepted.get(rung).copied().unwrap_or(0)
    }

    pub fn total_attempts(&self) -> u64 {
        self.attempts.iter().sum()
    }

    /// Fraction of accepted exchanges for pair `rung`, or `None` before any attempt.
    pub fn acceptance_rate(&self, rung: usize) -> Option<f64> {
        match self.attempts(rung) {
            0 => None,
            n => Some(self.accepted(rung) as f64 / n as f64),
        }
    }

    pub fn acceptance_rates(&self) -> Vec<Option<f64>> {
        (0..self.n_pairs())
            .map(|rung| self.acceptance_rate(rung))
            .collect()
    }

    pub fn reset(&mut self) {
        self.attempts.fill(0);
        self.accepted.fill(0);
    }
}

impl ExchangeAdaptor for AcceptanceCounter {
    fn update(&mut self, rung: usize, accepted: bool) {
        let Some(attempts) = self.attempts.get_mut(rung) else {
            warn!(
                "Ignoring exchange update for rung {} on a counter tracking {} pairs.",
                rung,
                self.accepted.len()
            );
            return;
        };
        *attempts += 1;
        if accepted {
            self.accepted[rung] += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_tracks_attempts_and_acceptances_per_pair() {
        let mut counter = AcceptanceCounter::new(3);
        counter.update(0, true);
        counter.update(0, false);
        counter.update(1, true);
        counter.update(0, true);

        assert_eq!(counter.n_pairs(), 2);
        assert_eq!(counter.attempts(0), 3);
        assert_eq!(counter.accepted(0), 2);
        assert_eq!(counter.attempts(1), 1);
        assert_eq!(counter.total_attempts(), 4);
        assert_eq!(counter.acceptance_rate(1), Some(1.0));
        let rate = counter.acceptance_rate(0).unwrap();
        assert!((rate - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn untouched_pair_has_no_rate() {
        let mut counter = AcceptanceCounter::new(3);
        counter.update(1, false);
        assert_eq!(counter.acceptance_rates(), vec![None, Some(0.0)]);
    }

    #[test]
    fn out_of_range_update_is_ignored() {
        let mut counter = AcceptanceCounter::new(2);
        counter.update(5, true);
        assert_eq!(counter.total_attempts(), 0);
        assert_eq!(counter.attempts(5), 0);
    }

    #[test]
    fn reset_clears_tallies() {
        let mut counter = AcceptanceCounter::new(4);
        counter.update(2, true);
        counter.reset();
        assert_eq!(counter.total_attempts(), 0);
        assert_eq!(counter.n_pairs(), 3);
    }

    #[test]
    fn mutable_reference_forwards_updates() {
        fn notify(mut adaptor: impl ExchangeAdaptor) {
            adaptor.update(0, true);
        }

        let mut counter = AcceptanceCounter::new(2);
        notify(&mut counter);
        notify(&mut counter);
        assert_eq!(counter.accepted(0), 2);

        notify(NullAdaptor);
    }
}
