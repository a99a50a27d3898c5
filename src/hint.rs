use crate::pathfinding::{NodeKey, Path, PathNode};
use crate::string_normalization::initial_of;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintType {
    Actor,
    Media,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub message: String,
    pub hinted_type: HintType,
}

impl Hint {
    fn general(message: &str) -> Self {
        Self {
            message: message.to_string(),
            hinted_type: HintType::General,
        }
    }
}

const OFF_ROUTE_HINT: &str =
    "You're on a different route. Try a well-known title or co-star to get closer to the target.";
const NO_MOVES_HINT: &str = "Start with one of the most popular titles of your starting performer.";
const AT_TARGET_HINT: &str = "You've already reached the target performer.";

/// Describes the reference node following the player's current position.
///
/// Only the node type and the first letter of its name are revealed. A
/// player who left the reference route gets a general hint.
pub fn derive_hint(player_path: &[NodeKey], reference: &Path) -> Hint {
    let Some(&current) = player_path.last() else {
        return Hint::general(NO_MOVES_HINT);
    };
    let Some(position) = reference.position_of(current) else {
        return Hint::general(OFF_ROUTE_HINT);
    };
    let Some(next) = reference.nodes().get(position + 1) else {
        return Hint::general(AT_TARGET_HINT);
    };

    describe_next(next)
}

fn describe_next(next: &PathNode) -> Hint {
    let initial = initial_of(next.display_name());

    match (next, initial) {
        (PathNode::Actor { .. }, Some(letter)) => Hint {
            message: format!("Look for a performer whose name starts with \"{letter}\"."),
            hinted_type: HintType::Actor,
        },
        (PathNode::Actor { .. }, None) => Hint {
            message: "Look for a co-star from your current title.".to_string(),
            hinted_type: HintType::Actor,
        },
        (PathNode::Media { kind, .. }, Some(letter)) => Hint {
            message: format!("Look for a {} whose title starts with \"{letter}\".", kind.label()),
            hinted_type: HintType::Media,
        },
        (PathNode::Media { kind, .. }, None) => Hint {
            message: format!("Look for a {} in your current performer's credits.", kind.label()),
            hinted_type: HintType::Media,
        },
    }
}
