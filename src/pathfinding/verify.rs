use super::bfs::{BfsState, NoPredecessors};
use super::node::NodeKey;
use super::utils::SearchContext;
use crate::cancellation::CancellationFlag;
use crate::error::EngineError;
use crate::graph::{ConnectionGraph, NeighborSampler};
use crate::pathfinding_config::PathfindingConfig;
use crate::snapshot::PersonId;

/// Existence-only twin of [`PathFinder`](super::PathFinder).
///
/// Runs the same layered traversal without predecessor bookkeeping. With
/// the same config and sampler it answers `true` exactly when the finder
/// returns a path.
pub struct PathVerifier<'g, S> {
    context: SearchContext<'g, S>,
}

impl<'g, S: NeighborSampler> PathVerifier<'g, S> {
    pub fn new(graph: &'g ConnectionGraph<'g>, config: PathfindingConfig, sampler: &'g S) -> Self {
        Self {
            context: SearchContext::new(graph, config, sampler),
        }
    }

    pub fn with_cancellation(mut self, flag: &'g CancellationFlag) -> Self {
        self.context.cancellation = Some(flag);
        self
    }

    pub fn exists(&self, start: PersonId, target: PersonId) -> Result<bool, EngineError> {
        if !self.context.endpoints_known(start, target) {
            return Ok(false);
        }
        if start == target {
            return Ok(self.context.graph.contains(NodeKey::Actor(start)));
        }

        let mut bfs_state: BfsState<NoPredecessors> = BfsState::new(start);
        bfs_state.search_target(target, &self.context)
    }
}
