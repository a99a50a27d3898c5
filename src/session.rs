use crate::difficulty::Difficulty;
use crate::error::EngineError;
use crate::graph::ConnectionGraph;
use crate::hint::{Hint, derive_hint};
use crate::pathfinding::{NodeKey, Path};
use crate::selection::PairSelection;
use crate::snapshot::PersonId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_HINT_COOLDOWN_MS: u64 = 30_000;

/// Caller-owned state of one game session.
///
/// In-flight selection and hint cooldown are plain values compared against
/// tokens and timestamps the caller passes in, so the state can be stored
/// and restored between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub game_id: Uuid,
    pub difficulty: Difficulty,
    pub hint_cooldown_ms: u64,
    selection_token: Option<Uuid>,
    player_path: Vec<NodeKey>,
    target: Option<PersonId>,
    last_hint_at_ms: Option<u64>,
    last_hint: Option<Hint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub player_connections: usize,
    pub optimal_connections: usize,
    pub extra_connections: usize,
}

impl SessionState {
    pub fn new(difficulty: Difficulty, hint_cooldown_ms: u64) -> Self {
        Self {
            game_id: Uuid::new_v4(),
            difficulty,
            hint_cooldown_ms,
            selection_token: None,
            player_path: Vec::new(),
            target: None,
            last_hint_at_ms: None,
            last_hint: None,
        }
    }

    /// Drops the current game. Any selection still running becomes stale.
    pub fn reset(&mut self) {
        self.game_id = Uuid::new_v4();
        self.selection_token = None;
        self.player_path.clear();
        self.target = None;
        self.clear_hint();
    }

    pub fn selection_in_progress(&self) -> bool {
        self.selection_token.is_some()
    }

    pub fn begin_selection(&mut self) -> Result<Uuid, EngineError> {
        if self.selection_token.is_some() {
            return Err(EngineError::SelectionInProgress);
        }
        let token = Uuid::new_v4();
        self.selection_token = Some(token);
        Ok(token)
    }

    /// Seed for the running selection, derived from its token.
    ///
    /// Pass it to [`SelectionConfig::with_seed`](crate::SelectionConfig::with_seed)
    /// so every game draws its own pair and samples its own cast per credit.
    pub fn selection_seed(&self) -> Option<u64> {
        self.selection_token.map(seed_from_token)
    }

    /// Releases the token after a failed or cancelled selection.
    pub fn abandon_selection(&mut self, token: Uuid) {
        if self.selection_token == Some(token) {
            self.selection_token = None;
        }
    }

    /// Installs a finished selection as the new game. Rejects results whose
    /// token was invalidated by a reset in the meantime.
    pub fn finish_selection(&mut self, token: Uuid, selection: &PairSelection) -> Result<(), EngineError> {
        if self.selection_token != Some(token) {
            return Err(EngineError::StaleSelection);
        }
        self.selection_token = None;
        self.player_path = vec![NodeKey::Actor(selection.start.id)];
        self.target = Some(selection.target.id);
        self.clear_hint();
        Ok(())
    }

    pub fn player_path(&self) -> &[NodeKey] {
        &self.player_path
    }

    pub fn last_hint(&self) -> Option<&Hint> {
        self.last_hint.as_ref()
    }

    pub fn record_move(&mut self, graph: &ConnectionGraph, node: NodeKey) -> Result<(), EngineError> {
        let Some(&current) = self.player_path.last() else {
            return Err(EngineError::NoActiveGame);
        };
        if self.is_complete() {
            return Err(EngineError::NoActiveGame);
        }
        if self.player_path.contains(&node) || !graph.connects(current, node) {
            return Err(EngineError::InvalidMove {
                from: current,
                to: node,
            });
        }

        self.player_path.push(node);
        self.clear_hint();
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        match (self.player_path.last(), self.target) {
            (Some(&last), Some(target)) => last == NodeKey::Actor(target),
            _ => false,
        }
    }

    pub fn hint_ready_in(&self, now_ms: u64) -> u64 {
        self.last_hint_at_ms.map_or(0, |issued_at| {
            let elapsed = now_ms.saturating_sub(issued_at);
            self.hint_cooldown_ms.saturating_sub(elapsed)
        })
    }

    pub fn request_hint(&mut self, now_ms: u64, reference: &Path) -> Result<Hint, EngineError> {
        if self.player_path.is_empty() {
            return Err(EngineError::NoActiveGame);
        }
        let remaining_ms = self.hint_ready_in(now_ms);
        if remaining_ms > 0 {
            return Err(EngineError::HintCooldown { remaining_ms });
        }

        let hint = derive_hint(&self.player_path, reference);
        self.last_hint_at_ms = Some(now_ms);
        self.last_hint = Some(hint.clone());
        Ok(hint)
    }

    /// Player result against the optimal path, once the target is reached.
    pub fn summary(&self, optimal: &Path) -> Option<GameSummary> {
        if !self.is_complete() {
            return None;
        }
        let player_connections = self.player_path.len().saturating_sub(1) / 2;
        let optimal_connections = optimal.connection_count();

        Some(GameSummary {
            player_connections,
            optimal_connections,
            extra_connections: player_connections.saturating_sub(optimal_connections),
        })
    }

    fn clear_hint(&mut self) {
        self.last_hint_at_ms = None;
        self.last_hint = None;
    }
}

fn seed_from_token(token: Uuid) -> u64 {
    let (high, low) = token.as_u64_pair();
    high ^ low
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Difficulty::default(), DEFAULT_HINT_COOLDOWN_MS)
    }
}
