mod state;

pub use state::{BfsState, NoPredecessors, PredecessorLog};

use super::node::NodeKey;
use super::path::{Path, PathNode};
use super::utils::{ParentMap, SearchContext, SearchResult, reconstruct_path};
use crate::cancellation::CancellationFlag;
use crate::error::EngineError;
use crate::graph::{ConnectionGraph, NeighborSampler};
use crate::pathfinding_config::PathfindingConfig;
use crate::snapshot::PersonId;
use tracing::debug;

/// Shortest alternating performer/credit path between two performers.
///
/// Performers expand to their `credits_per_performer` most popular credits
/// and credits expand to `performers_per_credit` performers picked by the
/// sampler, so the result is the shortest path through the sampled graph.
pub struct PathFinder<'g, S> {
    context: SearchContext<'g, S>,
}

impl<'g, S: NeighborSampler> PathFinder<'g, S> {
    pub fn new(graph: &'g ConnectionGraph<'g>, config: PathfindingConfig, sampler: &'g S) -> Self {
        Self {
            context: SearchContext::new(graph, config, sampler),
        }
    }

    pub fn with_cancellation(mut self, flag: &'g CancellationFlag) -> Self {
        self.context.cancellation = Some(flag);
        self
    }

    pub fn config(&self) -> &PathfindingConfig {
        &self.context.config
    }

    pub fn find(&self, start: PersonId, target: PersonId) -> Result<SearchResult, EngineError> {
        let graph = self.context.graph;
        if !self.context.endpoints_known(start, target) {
            debug!(start, target, "path search skipped, endpoint not in snapshot");
            return Ok(SearchResult::not_found(0, 0));
        }

        if start == target {
            let path = graph
                .person(start)
                .map(|person| Path::new(vec![PathNode::actor(person)]));
            return Ok(SearchResult {
                path,
                nodes_visited: 1,
                layers_explored: 0,
            });
        }

        let mut bfs_state: BfsState<ParentMap> = BfsState::new(start);
        let found = bfs_state.search_target(target, &self.context)?;

        let path = if found {
            reconstruct_path(
                &bfs_state.predecessors,
                NodeKey::Actor(start),
                NodeKey::Actor(target),
                graph,
            )
        } else {
            None
        };

        debug!(
            start,
            target,
            nodes_visited = bfs_state.visited.len(),
            connections = path.as_ref().map(Path::connection_count),
            "path search finished"
        );

        Ok(SearchResult {
            path,
            nodes_visited: bfs_state.visited.len(),
            layers_explored: bfs_state.layers_explored,
        })
    }
}
