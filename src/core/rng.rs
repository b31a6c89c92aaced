//! Deterministic random number generation for session setup.
//!
//! Uses ChaCha8: the same seed produces identical placements, which keeps
//! games reproducible in tests and replays.
//!
//! ```
//! use pursuit_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.distinct_stations(200, 5), b.distinct_stations(200, 5));
//! ```

use rand::{seq::index, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::station::StationId;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw `amount` pairwise-distinct stations from `1..=station_count`.
    ///
    /// Returns `None` if the board has fewer than `amount` stations.
    pub fn distinct_stations(&mut self, station_count: u32, amount: usize) -> Option<Vec<StationId>> {
        let count = station_count as usize;
        if amount > count {
            return None;
        }
        Some(
            index::sample(&mut self.inner, count, amount)
                .into_iter()
                .map(|i| StationId(i as u32 + 1))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(rng1.distinct_stations(200, 4), rng2.distinct_stations(200, 4));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).flat_map(|_| rng1.distinct_stations(1000, 3).unwrap()).collect();
        let seq2: Vec<_> = (0..10).flat_map(|_| rng2.distinct_stations(1000, 3).unwrap()).collect();
        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_distinct_stations_cover_board() {
        let mut rng = GameRng::new(9);
        let mut stations = rng.distinct_stations(6, 6).unwrap();
        stations.sort();
        let expected: Vec<_> = StationId::all(6).collect();
        assert_eq!(stations, expected);
    }

    #[test]
    fn test_distinct_stations_in_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..100 {
            let stations = rng.distinct_stations(5, 2).unwrap();
            assert_ne!(stations[0], stations[1]);
            assert!(stations.iter().all(|s| s.in_range(5)));
        }
    }

    #[test]
    fn test_distinct_stations_too_many() {
        let mut rng = GameRng::new(9);
        assert!(rng.distinct_stations(3, 4).is_none());
        assert_eq!(rng.distinct_stations(3, 0), Some(vec![]));
    }

    #[test]
    fn test_seed() {
        assert_eq!(GameRng::new(77).seed(), 77);
    }
}
