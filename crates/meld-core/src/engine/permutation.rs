use crate::core::energy::EnergyMatrix;
use std::ops::Index;

/// Assignment of replicas to ladder rungs.
///
/// `permutation[r]` is the original index of the replica currently on rung
/// `r`. Rung 0 is the bottom of the ladder. The only mutation is swapping two
/// adjacent rungs, so the sequence always stays a permutation of `0..N`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    replicas: Vec<usize>,
}

impl Permutation {
    pub fn identity(n_rungs: usize) -> Self {
        Self {
            replicas: (0..n_rungs).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.replicas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replicas.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.replicas.iter().enumerate().all(|(rung, &r)| rung == r)
    }

    /// Original replica index currently sitting on `rung`.
    #[inline]
    pub fn replica_at(&self, rung: usize) -> usize {
        self.replicas[rung]
    }

    /// Rung currently occupied by the replica with original index `replica`.
    pub fn rung_of(&self, replica: usize) -> Option<usize> {
        self.replicas.iter().position(|&r| r == replica)
    }

    /// Exchanges the replicas on rungs `lower` and `lower + 1`.
    #[inline]
    pub fn swap_adjacent(&mut self, lower: usize) {
        self.replicas.swap(lower, lower + 1);
    }

    /// Energy cost of swapping the replicas currently on rungs `lower` and `lower + 1`.
    ///
    /// The lookup goes through the current assignment, so the same rung pair
    /// reads a different matrix entry once replicas have moved.
    #[inline]
    pub fn exchange_delta(&self, energies: &EnergyMatrix, lower: usize) -> f64 {
        energies.get(self.replica_at(lower), self.replica_at(lower + 1))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.replicas
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.replicas
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, rung: usize) -> &usize {
        &self.replicas[rung]
    }
}

impl PartialEq<[usize]> for Permutation {
    fn eq(&self, other: &[usize]) -> bool {
        self.replicas == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for Permutation {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.replicas == other
    }
}

impl PartialEq<Vec<usize>> for Permutation {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.replicas == other
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(permutation: Permutation) -> Self {
        permutation.replicas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_maps_each_rung_to_itself() {
        let p = Permutation::identity(4);
        assert_eq!(p, [0, 1, 2, 3]);
        assert!(p.is_identity());
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn swap_adjacent_moves_replicas_between_rungs() {
        let mut p = Permutation::identity(3);
        p.swap_adjacent(1);
        assert_eq!(p, [0, 2, 1]);
        p.swap_adjacent(0);
        assert_eq!(p, [2, 0, 1]);
        assert!(!p.is_identity());
        assert_eq!(p.rung_of(2), Some(0));
        assert_eq!(p.rung_of(1), Some(2));
        assert_eq!(p.rung_of(5), None);
    }

    #[test]
    fn exchange_delta_follows_current_assignment() {
        let energies = EnergyMatrix::from_rows(&[
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![-2.0, -1.0, 0.0],
        ])
        .unwrap();
        let mut p = Permutation::identity(3);
        assert_eq!(p.exchange_delta(&energies, 0), 0.0);
        assert_eq!(p.exchange_delta(&energies, 1), 0.0);

        p.swap_adjacent(1);
        // replica 2 now sits on rung 1, replica 0 below it
        assert_eq!(p.exchange_delta(&energies, 0), 0.0);
        assert_eq!(p.exchange_delta(&energies, 1), -1.0);
    }

    #[test]
    fn converts_into_plain_vector() {
        let mut p = Permutation::identity(2);
        p.swap_adjacent(0);
        assert_eq!(p[0], 1);
        assert_eq!(p.as_slice(), &[1, 0]);
        let v: Vec<usize> = p.into();
        assert_eq!(v, vec![1, 0]);
    }
}
