//! Keyboard input layer: maps crossterm key events to engine actions.

pub mod map;

pub use map::{is_pause, map_key, should_quit};
