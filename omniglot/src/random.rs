//! Random sources used for episode sampling and dataset splitting.

use crate::common::*;
use rand::seq::index;
use std::collections::VecDeque;

/// The source of randomness of sampling operations.
///
/// Implementors must return distinct indices below the requested bound. The
/// dataset checks the bounds and reports violations as errors.
pub trait RandomSource {
    /// Draw `count` distinct indices from `0..population` in draw order.
    fn choose_without_replacement(&mut self, population: usize, count: usize) -> Vec<usize>;

    /// Produce a permutation of `0..len`.
    fn random_permutation(&mut self, len: usize) -> Vec<usize>;
}

/// The random source backed by a [rand] generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>
where
    R: Rng,
{
    rng: R,
}

impl<R> RngSource<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Build a reproducible source from a seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R> RandomSource for RngSource<R>
where
    R: Rng,
{
    fn choose_without_replacement(&mut self, population: usize, count: usize) -> Vec<usize> {
        // index::sample panics when asked for more than the population
        let count = count.min(population);
        index::sample(&mut self.rng, population, count).into_vec()
    }

    fn random_permutation(&mut self, len: usize) -> Vec<usize> {
        let mut indices = (0..len).collect_vec();
        indices.shuffle(&mut self.rng);
        indices
    }
}

/// The random source replaying prerecorded draws, for reproducing a task or split
/// exactly.
///
/// Choices and permutations are replayed in the order given, regardless of the
/// requested bounds. Once exhausted it returns empty draws, which sampling and
/// splitting reject as invalid.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    choices: VecDeque<Vec<usize>>,
    permutations: VecDeque<Vec<usize>>,
}

impl ReplaySource {
    pub fn new(
        choices: impl IntoIterator<Item = Vec<usize>>,
        permutations: impl IntoIterator<Item = Vec<usize>>,
    ) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            permutations: permutations.into_iter().collect(),
        }
    }

    /// Whether every recorded draw has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.choices.is_empty() && self.permutations.is_empty()
    }
}

impl RandomSource for ReplaySource {
    fn choose_without_replacement(&mut self, _population: usize, _count: usize) -> Vec<usize> {
        self.choices.pop_front().unwrap_or_default()
    }

    fn random_permutation(&mut self, _len: usize) -> Vec<usize> {
        self.permutations.pop_front().unwrap_or_default()
    }
}

/// Check that a draw holds `count` distinct indices below `population`.
pub(crate) fn validate_draw(draw: &[usize], count: usize, population: usize) -> Result<()> {
    ensure_arg!(
        draw.len() == count,
        "random source returned {} indices, but {} were requested",
        draw.len(),
        count
    );
    if let Some(&index) = draw.iter().find(|&&index| index >= population) {
        return Err(Error::Index {
            index,
            len: population,
        });
    }
    ensure_arg!(
        draw.iter().all_unique(),
        "random source returned duplicated indices {:?}",
        draw
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_distinct_and_in_range() {
        let mut rng = RngSource::seed_from_u64(7);
        for _ in 0..100 {
            let choices = rng.choose_without_replacement(10, 4);
            assert_eq!(choices.len(), 4);
            assert!(choices.iter().all(|&index| index < 10));
            assert_eq!(choices.iter().collect::<HashSet<_>>().len(), 4);
        }
    }

    #[test]
    fn permutation_covers_every_index() {
        let mut rng = RngSource::seed_from_u64(7);
        let mut permutation = rng.random_permutation(20);
        permutation.sort_unstable();
        assert_eq!(permutation, (0..20).collect_vec());
    }

    #[test]
    fn faulty_draws_are_rejected() {
        assert!(validate_draw(&[2, 0, 1], 3, 3).is_ok());
        assert!(matches!(
            validate_draw(&[0, 1], 3, 3),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_draw(&[0, 3], 2, 3),
            Err(Error::Index { index: 3, len: 3 })
        ));
        assert!(matches!(
            validate_draw(&[1, 1], 2, 3),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn replay_returns_recorded_draws_then_empty() {
        let mut rng = ReplaySource::new(vec![vec![2, 0], vec![1]], vec![vec![1, 0]]);
        assert_eq!(rng.choose_without_replacement(3, 2), vec![2, 0]);
        assert_eq!(rng.random_permutation(2), vec![1, 0]);
        assert_eq!(rng.choose_without_replacement(3, 1), vec![1]);
        assert!(rng.is_exhausted());
        assert_eq!(rng.choose_without_replacement(3, 1), Vec::<usize>::new());
        assert_eq!(rng.random_permutation(2), Vec::<usize>::new());
    }

    #[test]
    fn equal_seeds_draw_equal_sequences() {
        let mut lhs = RngSource::seed_from_u64(42);
        let mut rhs = RngSource::seed_from_u64(42);
        assert_eq!(
            lhs.choose_without_replacement(100, 5),
            rhs.choose_without_replacement(100, 5)
        );
        assert_eq!(lhs.random_permutation(30), rhs.random_permutation(30));
    }
}
