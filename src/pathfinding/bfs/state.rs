use super::super::node::{ConnectionNode, NodeKey};
use super::super::utils::{ParentMap, SearchContext};
use crate::error::EngineError;
use crate::graph::NeighborSampler;
use crate::snapshot::PersonId;
use rustc_hash::FxHashSet;

/// What a traversal remembers about how each node was reached.
pub trait PredecessorLog: Default {
    fn record(&mut self, child: NodeKey, parent: NodeKey);
}

impl PredecessorLog for ParentMap {
    fn record(&mut self, child: NodeKey, parent: NodeKey) {
        self.insert(child, parent);
    }
}

/// Existence checks keep no predecessors.
#[derive(Debug, Default)]
pub struct NoPredecessors;

impl PredecessorLog for NoPredecessors {
    fn record(&mut self, _child: NodeKey, _parent: NodeKey) {}
}

pub struct BfsState<P> {
    frontier: Vec<ConnectionNode>,
    pub visited: FxHashSet<NodeKey>,
    pub predecessors: P,
    pub layers_explored: usize,
}

impl<P: PredecessorLog> BfsState<P> {
    pub fn new(start: PersonId) -> Self {
        let origin = ConnectionNode::origin(start);
        let mut visited = FxHashSet::default();
        visited.insert(origin.key());

        Self {
            frontier: vec![origin],
            visited,
            predecessors: P::default(),
            layers_explored: 0,
        }
    }

    fn visit_neighbor(&mut self, neighbor: ConnectionNode, current: NodeKey) {
        let key = neighbor.key();
        if self.visited.insert(key) {
            self.predecessors.record(key, current);
            self.frontier.push(neighbor);
        }
    }

    /// Runs layer by layer until `target` is dequeued or the frontier runs
    /// dry. Cancellation is only observed between layers.
    pub fn search_target<S: NeighborSampler>(
        &mut self,
        target: PersonId,
        context: &SearchContext<'_, S>,
    ) -> Result<bool, EngineError> {
        let target_key = NodeKey::Actor(target);

        while !self.frontier.is_empty() {
            if context.is_cancelled() {
                return Err(EngineError::Cancelled);
            }

            let layer = std::mem::take(&mut self.frontier);
            self.layers_explored += 1;

            for node in layer {
                if node.key() == target_key {
                    return Ok(true);
                }
                if node.depth() >= context.config.max_depth {
                    continue;
                }

                for neighbor in context.expand(&node) {
                    self.visit_neighbor(neighbor, node.key());
                }
            }
        }

        Ok(false)
    }
}
