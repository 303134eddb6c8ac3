//! Shared types module - pure data structures and constants
//!
//! Everything here is plain data with no dependencies, usable from the
//! engine, the input layer and the terminal view alike.
//!
//! # Board dimensions
//!
//! The playfield size is chosen at session construction time. The engine
//! enforces lower bounds so every piece and rotation fits and spawns
//! safely:
//!
//! - **Width**: at least 12 columns
//! - **Height**: at least 20 rows
//!
//! # Driver policy tables
//!
//! Scoring and leveling are driver configuration, not engine state. The
//! engine only reports how many rows a landing cleared; [`SCORE_TABLE`]
//! and [`LEVEL_TABLE`] map that signal to points and gravity speed.

/// Minimum playfield width in cells.
pub const MIN_BOARD_WIDTH: usize = 12;

/// Minimum playfield height in cells.
pub const MIN_BOARD_HEIGHT: usize = 20;

/// Default playfield width when none is requested.
pub const DEFAULT_BOARD_WIDTH: usize = 12;

/// Default playfield height when none is requested.
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Driver tick length in milliseconds.
///
/// Gravity advances once every `speed` ticks, where `speed` comes from
/// the level table.
pub const TICK_MS: u64 = 100;

/// Points awarded per landing, indexed by rows cleared (0 through 4).
pub const SCORE_TABLE: [u32; 5] = [10, 100, 200, 400, 800];

/// Cumulative score thresholds for leveling up.
///
/// The current level is the index of the first threshold the score has
/// not yet reached; gravity speed (in ticks per row) is the number of
/// remaining thresholds, so higher levels fall faster.
pub const LEVEL_TABLE: [u32; 8] = [
    1000, 2000, 4000, 8000, 16_000, 32_000, 64_000, 80_000_000,
];

/// The seven tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in a fixed order for iteration and uniform draws.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single-letter name, mostly for debug output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// One of the four discrete rotation states of a piece.
///
/// Rotation is cyclic: four clockwise steps return to the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// Clockwise successor (270° wraps back to 0°).
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Deg0.next(), Orientation::Deg90);
    /// assert_eq!(Orientation::Deg270.next(), Orientation::Deg0);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Orientation::Deg0 => Orientation::Deg90,
            Orientation::Deg90 => Orientation::Deg180,
            Orientation::Deg180 => Orientation::Deg270,
            Orientation::Deg270 => Orientation::Deg0,
        }
    }
}

/// A cell on the playfield.
///
/// `None` is empty; `Some(kind)` remembers which piece settled there so
/// the view can color it. The engine itself only cares about occupancy.
pub type Cell = Option<PieceKind>;

/// Player/gravity commands accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the active piece one column left.
    MoveLeft,
    /// Move the active piece one column right.
    MoveRight,
    /// Rotate the active piece 90° clockwise.
    Rotate,
    /// Drop the active piece one row (gravity step or soft drop).
    SoftDrop,
    /// Drop the active piece to its lowest valid position at once.
    HardDrop,
    /// Reset the board and start a fresh game.
    NewGame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_cycles_in_four_steps() {
        let mut o = Orientation::Deg0;
        for _ in 0..4 {
            o = o.next();
        }
        assert_eq!(o, Orientation::Deg0);
    }

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn level_table_is_strictly_increasing() {
        for pair in LEVEL_TABLE.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
