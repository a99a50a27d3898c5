use crate::pathfinding::NodeKey;
use thiserror::Error;

/// Failures surfaced by the connection engine.
///
/// Missing paths and unknown ids are not errors: searches report them as
/// `None`, `false` or empty neighbor lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("need at least two eligible performers, found {eligible}")]
    GraphTooSmall { eligible: usize },

    #[error("no sampled performer pair had a path after {attempts} attempts")]
    SelectionExhausted { attempts: usize },

    #[error("search cancelled")]
    Cancelled,

    #[error("a pair selection is already running for this session")]
    SelectionInProgress,

    #[error("selection result belongs to an abandoned game")]
    StaleSelection,

    #[error("next hint available in {remaining_ms} ms")]
    HintCooldown { remaining_ms: u64 },

    #[error("{to} is not connected to {from}")]
    InvalidMove { from: NodeKey, to: NodeKey },

    #[error("no game in progress")]
    NoActiveGame,
}

pub type EngineResult<T> = Result<T, EngineError>;
