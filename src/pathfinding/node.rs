use crate::graph::CreditKey;
use crate::snapshot::PersonId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a graph node: its type plus id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum NodeKey {
    Actor(PersonId),
    Media(CreditKey),
}

impl NodeKey {
    pub fn is_actor(&self) -> bool {
        matches!(self, NodeKey::Actor(_))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Actor(person_id) => write!(f, "actor:{person_id}"),
            NodeKey::Media(key) => write!(f, "{key}"),
        }
    }
}

/// A node reached by a search, tagged with its BFS distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionNode {
    Actor { person_id: PersonId, depth: usize },
    Media { credit: CreditKey, depth: usize },
}

impl ConnectionNode {
    pub fn origin(person_id: PersonId) -> Self {
        ConnectionNode::Actor { person_id, depth: 0 }
    }

    pub fn key(&self) -> NodeKey {
        match *self {
            ConnectionNode::Actor { person_id, .. } => NodeKey::Actor(person_id),
            ConnectionNode::Media { credit, .. } => NodeKey::Media(credit),
        }
    }

    pub fn depth(&self) -> usize {
        match *self {
            ConnectionNode::Actor { depth, .. } | ConnectionNode::Media { depth, .. } => depth,
        }
    }
}
