use rand::{SeedableRng, rngs::StdRng};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Chooses which neighbors of a node get expanded when there are more than
/// the branching cap allows. `ranked` is always most-popular first.
pub trait NeighborSampler {
    fn sample<T: Copy, K: Hash>(&self, origin: &K, ranked: &[T], cap: usize) -> Vec<T>;
}

/// Keeps the `cap` most popular neighbors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopRanked;

impl NeighborSampler for TopRanked {
    fn sample<T: Copy, K: Hash>(&self, _origin: &K, ranked: &[T], cap: usize) -> Vec<T> {
        ranked.iter().take(cap).copied().collect()
    }
}

/// Random `cap` neighbors, seeded per origin node.
///
/// The draw depends only on `(seed, origin)`, so every expansion of the same
/// node sees the same neighbors within one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRandom {
    pub seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn rng_for<K: Hash>(&self, origin: &K) -> StdRng {
        let mut hasher = FxHasher::default();
        origin.hash(&mut hasher);
        StdRng::seed_from_u64(self.seed ^ hasher.finish())
    }
}

impl NeighborSampler for SeededRandom {
    fn sample<T: Copy, K: Hash>(&self, origin: &K, ranked: &[T], cap: usize) -> Vec<T> {
        if ranked.len() <= cap {
            return ranked.to_vec();
        }

        let mut rng = self.rng_for(origin);
        let mut picked = rand::seq::index::sample(&mut rng, ranked.len(), cap).into_vec();
        // Keep popularity order among the picked neighbors
        picked.sort_unstable();
        picked.into_iter().map(|index| ranked[index]).collect()
    }
}

/// Serializable sampler choice for configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "strategy")]
pub enum NeighborSampling {
    TopRanked,
    SeededRandom { seed: u64 },
}

impl Default for NeighborSampling {
    fn default() -> Self {
        NeighborSampling::SeededRandom { seed: 0 }
    }
}

impl NeighborSampler for NeighborSampling {
    fn sample<T: Copy, K: Hash>(&self, origin: &K, ranked: &[T], cap: usize) -> Vec<T> {
        match self {
            NeighborSampling::TopRanked => TopRanked.sample(origin, ranked, cap),
            NeighborSampling::SeededRandom { seed } => {
                SeededRandom::new(*seed).sample(origin, ranked, cap)
            }
        }
    }
}
