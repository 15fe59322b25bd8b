//! Core module - pure game rules with no UI dependencies
//!
//! Everything the puzzle is, lives here: the board and its rotation, the
//! slide-merge engine, the batched tile dealer, the bonus-release watcher
//! and the session that ties them together. Nothing in this module knows
//! about terminals, timing or input.

pub mod board;
pub mod rng;
pub mod session;
pub mod slide;
pub mod supply;
pub mod watcher;

// Re-export commonly used types
pub use board::{rotate_coord, Board, MotionBoard, ParseBoardError};
pub use rng::SimpleRng;
pub use session::{GameSession, SessionConfig};
pub use slide::{slide_left, SlideOutcome};
pub use supply::{SupplyConfig, TileSupply};
pub use watcher::{DealWatcher, DistributionWarning, WatcherConfig};
