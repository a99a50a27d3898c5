use super::node::{ConnectionNode, NodeKey};
use super::path::{Path, PathNode};
use crate::cancellation::CancellationFlag;
use crate::graph::{ConnectionGraph, CreditKey, NeighborSampler};
use crate::pathfinding_config::PathfindingConfig;
use crate::snapshot::PersonId;
use rustc_hash::FxHashMap;

pub type ParentMap = FxHashMap<NodeKey, NodeKey>;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub path: Option<Path>,
    pub nodes_visited: usize,
    pub layers_explored: usize,
}

impl SearchResult {
    pub fn not_found(nodes_visited: usize, layers_explored: usize) -> Self {
        Self {
            path: None,
            nodes_visited,
            layers_explored,
        }
    }

    pub fn connection_count(&self) -> Option<usize> {
        self.path.as_ref().map(Path::connection_count)
    }
}

/// Everything a traversal reads: graph, caps, sampler and the optional
/// cancellation flag.
pub struct SearchContext<'g, S> {
    pub graph: &'g ConnectionGraph<'g>,
    pub config: PathfindingConfig,
    pub sampler: &'g S,
    pub cancellation: Option<&'g CancellationFlag>,
}

impl<'g, S: NeighborSampler> SearchContext<'g, S> {
    pub fn new(graph: &'g ConnectionGraph<'g>, config: PathfindingConfig, sampler: &'g S) -> Self {
        Self {
            graph,
            config,
            sampler,
            cancellation: None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_some_and(CancellationFlag::is_cancelled)
    }

    /// Both endpoints must be in the snapshot for a search to start.
    pub fn endpoints_known(&self, start: PersonId, target: PersonId) -> bool {
        self.graph.contains(NodeKey::Actor(start)) && self.graph.contains(NodeKey::Actor(target))
    }

    /// Neighbors of a node one layer deeper. Performers expand to their most
    /// popular credits, credits expand to a sampled part of their cast.
    pub fn expand(&self, node: &ConnectionNode) -> Vec<ConnectionNode> {
        let depth = node.depth() + 1;

        match *node {
            ConnectionNode::Actor { person_id, .. } => self
                .graph
                .neighbors_of_person(person_id, Some(self.config.credits_per_performer))
                .into_iter()
                .map(|credit| ConnectionNode::Media {
                    credit: CreditKey::of(credit),
                    depth,
                })
                .collect(),
            ConnectionNode::Media { credit, .. } => self
                .graph
                .neighbors_of_credit(credit, Some(self.config.performers_per_credit), self.sampler)
                .into_iter()
                .map(|person_id| ConnectionNode::Actor { person_id, depth })
                .collect(),
        }
    }
}

pub fn reconstruct_path(
    parent_map: &ParentMap,
    start: NodeKey,
    target: NodeKey,
    graph: &ConnectionGraph,
) -> Option<Path> {
    let mut keys = vec![target];
    let mut current_node = target;

    while current_node != start {
        current_node = *parent_map.get(&current_node)?;
        keys.push(current_node);
    }
    keys.reverse();

    keys.into_iter()
        .map(|key| resolve_node(key, graph))
        .collect::<Option<Vec<_>>>()
        .map(Path::new)
}

pub fn resolve_node(key: NodeKey, graph: &ConnectionGraph) -> Option<PathNode> {
    match key {
        NodeKey::Actor(person_id) => graph.person(person_id).map(PathNode::actor),
        NodeKey::Media(credit) => graph.credit(credit).map(PathNode::media),
    }
}
