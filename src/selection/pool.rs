use super::SelectionConfig;
use crate::difficulty::DifficultyProfile;
use crate::graph::ConnectionGraph;
use crate::snapshot::{Person, PersonId};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePair {
    pub start: PersonId,
    pub target: PersonId,
}

impl CandidatePair {
    fn unordered(&self) -> (PersonId, PersonId) {
        (self.start.min(self.target), self.start.max(self.target))
    }
}

/// Performers that may be drawn as start or target, most popular first:
/// they need a profile image and enough credits left after filtering.
pub fn eligible_pool<'g>(graph: &ConnectionGraph<'g>, profile: &DifficultyProfile) -> Vec<&'g Person> {
    let mut pool: Vec<&Person> = graph
        .snapshot()
        .values()
        .filter(|person| person.has_profile_image())
        .filter(|person| graph.eligible_credit_count(person.id) >= profile.min_credits)
        .collect();

    pool.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    pool
}

/// Draws starts from the top of the pool and targets from the difficulty's
/// popularity band. Never pairs a performer with itself and never repeats
/// an unordered pair.
pub(super) fn draw_candidates<R: Rng>(
    pool: &[&Person],
    profile: &DifficultyProfile,
    config: &SelectionConfig,
    rng: &mut R,
) -> Vec<CandidatePair> {
    let start_band_len = ((pool.len() as f64) * config.start_band_fraction).ceil() as usize;
    let start_band_len = start_band_len.clamp(1, config.max_start_band.max(1)).min(pool.len());
    let starts = sample_people(&pool[..start_band_len], config.start_candidates, rng);

    let target_band = &pool[profile.target_band.index_range(pool.len())];

    let mut seen_pairs = FxHashSet::default();
    let mut candidates = Vec::new();

    for start in starts {
        let mut options: Vec<&Person> = target_band
            .iter()
            .copied()
            .filter(|person| person.id != start.id)
            .collect();
        if options.is_empty() {
            options = pool.iter().copied().filter(|person| person.id != start.id).collect();
        }

        for target in sample_people(&options, config.targets_per_start, rng) {
            let pair = CandidatePair {
                start: start.id,
                target: target.id,
            };
            if seen_pairs.insert(pair.unordered()) {
                candidates.push(pair);
            }
        }
    }

    candidates
}

fn sample_people<'p, R: Rng>(people: &[&'p Person], amount: usize, rng: &mut R) -> Vec<&'p Person> {
    let amount = amount.min(people.len());
    rand::seq::index::sample(rng, people.len(), amount)
        .into_iter()
        .map(|index| people[index])
        .collect()
}
