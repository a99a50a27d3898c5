pub mod bfs;
pub mod node;
pub mod path;
pub mod utils;
pub mod verify;

// Re-export the public types
pub use bfs::PathFinder;
pub use node::{ConnectionNode, NodeKey};
pub use path::{Path, PathDefect, PathNode, validate_keys};
pub use utils::{SearchContext, SearchResult};
pub use verify::PathVerifier;
