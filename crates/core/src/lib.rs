//! Core game logic - pure, deterministic, and testable
//!
//! This crate is the whole falling-block engine: piece geometry, the
//! playfield grid, random piece selection and the per-session state
//! machine. It has zero dependencies on UI, input or timing, so any
//! front-end can drive it:
//!
//! - **Deterministic**: a seeded session replays the same game
//! - **Synchronous**: every command is an immediate state transition;
//!   gravity is the caller invoking [`GameSession::soft_drop`] on its own
//!   schedule
//! - **Portable**: terminal, GUI or headless drivers all consume the same
//!   command/query surface
//!
//! # Module structure
//!
//! - [`pieces`]: tetromino shape catalog (7 kinds x 4 orientations)
//! - [`board`]: runtime-sized grid with collision queries and row clears
//! - [`rng`]: seedable uniform piece selection behind a swappable trait
//! - [`session`]: the game session - spawn, move, rotate, drop, land,
//!   game over
//!
//! # Example
//!
//! ```
//! use termtris_core::GameSession;
//!
//! let mut session = GameSession::with_seed(12, 20, 1).unwrap();
//! let moved = session.move_left().unwrap();
//! assert!(!moved.landed());
//!
//! let outcome = session.hard_drop().unwrap();
//! assert!(outcome.landed());
//! ```

pub mod board;
pub mod pieces;
pub mod rng;
pub mod session;

pub use termtris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use pieces::{shape, PieceShape};
pub use rng::{PieceSource, SimpleRng, UniformSource};
pub use session::{GameSession, Piece, SessionError, StepOutcome};
