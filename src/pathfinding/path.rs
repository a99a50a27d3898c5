use super::node::NodeKey;
use crate::graph::CreditKey;
use crate::snapshot::{CreditId, MediaCredit, MediaKind, Person, PersonId};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PathNode {
    Actor {
        id: PersonId,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        profile_path: Option<String>,
    },
    Media {
        id: CreditId,
        kind: MediaKind,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poster_path: Option<String>,
    },
}

impl PathNode {
    pub fn actor(person: &Person) -> Self {
        PathNode::Actor {
            id: person.id,
            name: person.name.clone(),
            profile_path: person.profile_path.clone(),
        }
    }

    pub fn media(credit: &MediaCredit) -> Self {
        PathNode::Media {
            id: credit.id,
            kind: credit.kind,
            title: credit.title.clone(),
            poster_path: credit.poster_path.clone(),
        }
    }

    pub fn key(&self) -> NodeKey {
        match self {
            PathNode::Actor { id, .. } => NodeKey::Actor(*id),
            PathNode::Media { id, kind, .. } => NodeKey::Media(CreditKey::new(*kind, *id)),
        }
    }

    /// Performer name or credit title.
    pub fn display_name(&self) -> &str {
        match self {
            PathNode::Actor { name, .. } => name,
            PathNode::Media { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathDefect {
    #[error("path is empty")]
    Empty,
    #[error("path has {0} nodes; a connection path always has an odd count")]
    EvenLength(usize),
    #[error("node {index} breaks actor/media alternation")]
    BrokenAlternation { index: usize },
    #[error("{0} appears more than once")]
    DuplicateNode(NodeKey),
}

/// Alternating Actor, Media, ..., Actor sequence. An empty path means no
/// route was found.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<PathNode>,
}

impl Path {
    pub fn new(nodes: Vec<PathNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<PathNode> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&PathNode> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&PathNode> {
        self.nodes.last()
    }

    pub fn keys(&self) -> Vec<NodeKey> {
        self.nodes.iter().map(PathNode::key).collect()
    }

    pub fn position_of(&self, key: NodeKey) -> Option<usize> {
        self.nodes.iter().position(|node| node.key() == key)
    }

    /// Performer-to-performer hops.
    pub fn connection_count(&self) -> usize {
        self.nodes.len().saturating_sub(1) / 2
    }

    pub fn validate(&self) -> Result<(), PathDefect> {
        validate_keys(&self.keys())
    }
}

/// Checks a key sequence against the path shape: odd length, strict
/// alternation starting and ending on actors, no repeated node.
pub fn validate_keys(keys: &[NodeKey]) -> Result<(), PathDefect> {
    if keys.is_empty() {
        return Err(PathDefect::Empty);
    }
    if keys.len() % 2 == 0 {
        return Err(PathDefect::EvenLength(keys.len()));
    }

    let mut seen = FxHashSet::default();
    for (index, key) in keys.iter().enumerate() {
        let should_be_actor = index % 2 == 0;
        if key.is_actor() != should_be_actor {
            return Err(PathDefect::BrokenAlternation { index });
        }
        if !seen.insert(*key) {
            return Err(PathDefect::DuplicateNode(*key));
        }
    }

    Ok(())
}
