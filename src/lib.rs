//! Threes-style sliding-tile puzzle core.
//!
//! A 4x4 grid of tiles is shifted in one of four directions; adjacent tiles
//! merge under the Threes rules (1+2=3, equal power tiles double) and a new
//! tile is dealt into one of the cells the shift opened up. The deal comes
//! from shuffled balanced batches of {1,2,3}, optionally gated by the bonus
//! release rule.
//!
//! The crate is deterministic for a fixed seed, does no I/O, and exposes a
//! small in-process API meant to sit behind any presentation layer:
//!
//! - [`GameSession::new`] / [`GameSession::from_text`] to construct a game
//! - [`GameSession::board`] for a read-only view of cell values
//! - [`GameSession::peek`] for the next-tile preview
//! - [`GameSession::shift`] to apply a move and get back a motion board
//!   describing which tile slides into each cell, for one animation step
//!
//! # Example
//!
//! ```
//! use tui_threes::core::{GameSession, SessionConfig};
//! use tui_threes::types::Direction;
//!
//! let mut game = GameSession::new(SessionConfig::default(), 12345);
//! assert!((1..=3).contains(&game.peek()));
//!
//! let motion = game.shift(Direction::Left);
//! # let _ = motion;
//! ```

pub mod core;
pub mod types;

// Re-export the public surface at the crate root for convenience
pub use crate::core::{Board, GameSession, MotionBoard, SessionConfig};
pub use crate::types::{Direction, Motion, Tile};
