pub mod cancellation;
pub mod credit_filter;
pub mod difficulty;
pub mod error;
pub mod graph;
pub mod hint;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod selection;
pub mod session;
pub mod snapshot;
pub mod string_normalization;

// Re-export commonly used items
pub use cancellation::CancellationFlag;
pub use credit_filter::{CreditFilterOptions, filter_credits, is_substantive};
pub use difficulty::{Difficulty, DifficultyProfile, PopularityBand};
pub use error::{EngineError, EngineResult};
pub use graph::{ConnectionGraph, CreditKey, NeighborSampler, NeighborSampling, SeededRandom, TopRanked};
pub use hint::{Hint, HintType, derive_hint};
pub use pathfinding::{NodeKey, Path, PathFinder, PathNode, PathVerifier, SearchResult};
pub use pathfinding_config::PathfindingConfig;
pub use selection::{PairSelection, PairSelector, SelectionConfig};
pub use session::{GameSummary, SessionState};
pub use snapshot::{
    InMemorySnapshotProvider, MediaCredit, MediaKind, Person, PersonId, Snapshot, SnapshotProvider,
};
