use crate::difficulty::DifficultyProfile;
use serde::{Deserialize, Serialize};

/// Configuration for pathfinding algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfindingConfig {
    /// Nodes at this BFS depth are matched but not expanded
    pub max_depth: usize,
    /// Expand at most N credits per performer, most popular first
    pub credits_per_performer: usize,
    /// Expand at most N performers per credit, chosen by the sampler
    pub performers_per_credit: usize,
}

impl PathfindingConfig {
    pub fn new(max_depth: usize, credits_per_performer: usize, performers_per_credit: usize) -> Self {
        Self {
            max_depth,
            credits_per_performer,
            performers_per_credit,
        }
    }

    pub fn for_profile(profile: &DifficultyProfile) -> Self {
        Self {
            max_depth: profile.max_depth,
            ..Self::default()
        }
    }
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            credits_per_performer: 15,
            performers_per_credit: 40,
        }
    }
}
