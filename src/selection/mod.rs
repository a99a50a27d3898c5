mod pool;

pub use pool::{CandidatePair, eligible_pool};

use crate::cancellation::CancellationFlag;
use crate::difficulty::DifficultyProfile;
use crate::error::EngineError;
use crate::graph::{ConnectionGraph, NeighborSampling};
use crate::pathfinding::{Path, PathFinder, PathVerifier};
use crate::pathfinding_config::PathfindingConfig;
use crate::snapshot::{Person, PersonId};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Most popular fraction of the pool that start performers come from
    pub start_band_fraction: f64,
    /// Upper bound on the start band size
    pub max_start_band: usize,
    pub start_candidates: usize,
    pub targets_per_start: usize,
    /// Pairs probed before giving up, across all candidates
    pub attempt_budget: usize,
    /// Seed for drawing candidates. Fixed seeds reproduce a selection.
    pub seed: u64,
    /// How credits pick which performers to expand during searches
    pub sampling: NeighborSampling,
}

impl SelectionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.sampling = NeighborSampling::SeededRandom { seed };
        self
    }
}

/// Defaults draw a fresh seed, so two default selectors pick independently.
impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            start_band_fraction: 0.1,
            max_start_band: 100,
            start_candidates: 5,
            targets_per_start: 20,
            attempt_budget: 60,
            seed: 0,
            sampling: NeighborSampling::default(),
        }
        .with_seed(rand::random())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSelection {
    pub start: Person,
    pub target: Person,
    pub optimal_path: Path,
    pub connection_count: usize,
    /// False when this is the closest fallback rather than an in-range pair
    pub in_range: bool,
}

struct SelectionRun {
    accepted: Vec<PairSelection>,
    closest: Option<(f64, PairSelection)>,
    pairs_with_path: usize,
}

/// Picks start/target performers whose connection count fits a difficulty.
pub struct PairSelector<'g> {
    graph: &'g ConnectionGraph<'g>,
    profile: DifficultyProfile,
    config: SelectionConfig,
    pathfinding: PathfindingConfig,
    cancellation: Option<&'g CancellationFlag>,
    attempts: usize,
    rng: StdRng,
}

impl<'g> PairSelector<'g> {
    pub fn new(graph: &'g ConnectionGraph<'g>, profile: DifficultyProfile, config: SelectionConfig) -> Self {
        Self {
            graph,
            pathfinding: PathfindingConfig::for_profile(&profile),
            profile,
            rng: StdRng::seed_from_u64(config.seed),
            config,
            cancellation: None,
            attempts: 0,
        }
    }

    pub fn with_pathfinding_config(mut self, pathfinding: PathfindingConfig) -> Self {
        self.pathfinding = pathfinding;
        self
    }

    pub fn with_cancellation(mut self, flag: &'g CancellationFlag) -> Self {
        self.cancellation = Some(flag);
        self
    }

    /// Pairs probed by the latest run.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns the first in-range pair, else the pair closest to the middle
    /// of the range among those with any path.
    pub fn select(&mut self) -> Result<PairSelection, EngineError> {
        let run = self.run(1)?;
        if let Some(selection) = run.accepted.into_iter().next() {
            return Ok(selection);
        }

        match run.closest {
            Some((distance, selection)) => {
                info!(
                    start = selection.start.id,
                    target = selection.target.id,
                    connections = selection.connection_count,
                    distance,
                    "no in-range pair, using closest"
                );
                Ok(selection)
            }
            None => Err(self.exhausted()),
        }
    }

    /// Collects up to `count` distinct in-range pairs within the budget.
    pub fn select_many(&mut self, count: usize) -> Result<Vec<PairSelection>, EngineError> {
        let run = self.run(count)?;
        if run.pairs_with_path == 0 {
            return Err(self.exhausted());
        }
        Ok(run.accepted)
    }

    fn exhausted(&self) -> EngineError {
        warn!(attempts = self.attempts, "pair selection exhausted");
        EngineError::SelectionExhausted {
            attempts: self.attempts,
        }
    }

    fn run(&mut self, wanted: usize) -> Result<SelectionRun, EngineError> {
        self.attempts = 0;

        let pool = eligible_pool(self.graph, &self.profile);
        if pool.len() < 2 {
            return Err(EngineError::GraphTooSmall {
                eligible: pool.len(),
            });
        }

        let candidates = pool::draw_candidates(&pool, &self.profile, &self.config, &mut self.rng);
        debug!(
            pool = pool.len(),
            candidates = candidates.len(),
            "drew candidate pairs"
        );

        // Finder and verifier share config and sampler, so a verified pair
        // always yields a path.
        let sampler = self.config.sampling;
        let graph = self.graph;
        let cancellation = self.cancellation;
        let mut verifier = PathVerifier::new(graph, self.pathfinding, &sampler);
        let mut finder = PathFinder::new(graph, self.pathfinding, &sampler);
        if let Some(flag) = cancellation {
            verifier = verifier.with_cancellation(flag);
            finder = finder.with_cancellation(flag);
        }

        let midpoint = self.profile.midpoint();
        let mut run = SelectionRun {
            accepted: Vec::new(),
            closest: None,
            pairs_with_path: 0,
        };

        for pair in candidates {
            if self.attempts >= self.config.attempt_budget || run.accepted.len() >= wanted {
                break;
            }
            if cancellation.is_some_and(CancellationFlag::is_cancelled) {
                return Err(EngineError::Cancelled);
            }
            self.attempts += 1;

            if !verifier.exists(pair.start, pair.target)? {
                debug!(start = pair.start, target = pair.target, "no path within depth");
                continue;
            }
            let Some(path) = finder.find(pair.start, pair.target)?.path else {
                warn!(start = pair.start, target = pair.target, "verifier and finder disagree");
                continue;
            };

            run.pairs_with_path += 1;
            let connection_count = path.connection_count();
            let in_range = self.profile.accepts(connection_count);
            debug!(
                start = pair.start,
                target = pair.target,
                connection_count,
                in_range,
                "probed pair"
            );

            let Some(selection) = self.build_selection(pair, path, in_range) else {
                continue;
            };

            if in_range {
                info!(
                    start = pair.start,
                    target = pair.target,
                    connection_count,
                    attempts = self.attempts,
                    "selected pair"
                );
                run.accepted.push(selection);
                continue;
            }

            let distance = (connection_count as f64 - midpoint).abs();
            if run.closest.as_ref().is_none_or(|(best, _)| distance < *best) {
                run.closest = Some((distance, selection));
            }
        }

        Ok(run)
    }

    fn build_selection(&self, pair: CandidatePair, path: Path, in_range: bool) -> Option<PairSelection> {
        let start = self.person(pair.start)?;
        let target = self.person(pair.target)?;

        Some(PairSelection {
            start,
            target,
            connection_count: path.connection_count(),
            optimal_path: path,
            in_range,
        })
    }

    fn person(&self, person_id: PersonId) -> Option<Person> {
        self.graph.person(person_id).cloned()
    }
}
