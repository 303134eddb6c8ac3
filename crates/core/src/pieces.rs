//! Pieces module - tetromino shape catalog
//!
//! Pure, stateless geometry lookup. Each (kind, orientation) pair maps to
//! four `(Δrow, Δcol)` offsets relative to the piece anchor, all within a
//! 4x4 box whose top-left corner is the anchor. Rotation advances the
//! orientation cyclically; there is no wall-kick repositioning.

use termtris_types::{Orientation, PieceKind};

/// Offset of a single cell relative to the piece anchor, (Δrow, Δcol).
pub type CellOffset = (i8, i8);

/// Shape of a piece - four cell offsets from the anchor.
pub type PieceShape = [CellOffset; 4];

/// Get the shape (cell offsets) for a piece kind and orientation.
pub fn shape(kind: PieceKind, orientation: Orientation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(orientation),
        PieceKind::O => o_shape(orientation),
        PieceKind::T => t_shape(orientation),
        PieceKind::S => s_shape(orientation),
        PieceKind::Z => z_shape(orientation),
        PieceKind::J => j_shape(orientation),
        PieceKind::L => l_shape(orientation),
    }
}

/// I piece shapes
fn i_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        // horizontal, on row 1
        Orientation::Deg0 => [(1, 0), (1, 1), (1, 2), (1, 3)],
        // vertical, right of center
        Orientation::Deg90 => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // horizontal, on row 2
        Orientation::Deg180 => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // vertical, left of center
        Orientation::Deg270 => [(0, 1), (1, 1), (2, 1), (3, 1)],
    }
}

/// O piece shapes (identical in every orientation)
fn o_shape(_orientation: Orientation) -> PieceShape {
    [(0, 1), (0, 2), (1, 1), (1, 2)]
}

/// T piece shapes
fn t_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Deg0 => [(0, 1), (1, 0), (1, 1), (1, 2)],
        Orientation::Deg90 => [(0, 1), (1, 1), (1, 2), (2, 1)],
        Orientation::Deg180 => [(1, 0), (1, 1), (1, 2), (2, 1)],
        Orientation::Deg270 => [(0, 1), (1, 0), (1, 1), (2, 1)],
    }
}

/// S piece shapes
fn s_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Deg0 => [(0, 1), (0, 2), (1, 0), (1, 1)],
        Orientation::Deg90 => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Orientation::Deg180 => [(1, 1), (1, 2), (2, 0), (2, 1)],
        Orientation::Deg270 => [(0, 0), (1, 0), (1, 1), (2, 1)],
    }
}

/// Z piece shapes
fn z_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Deg0 => [(0, 0), (0, 1), (1, 1), (1, 2)],
        Orientation::Deg90 => [(0, 2), (1, 1), (1, 2), (2, 1)],
        Orientation::Deg180 => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Orientation::Deg270 => [(0, 1), (1, 0), (1, 1), (2, 0)],
    }
}

/// J piece shapes
fn j_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Deg0 => [(0, 0), (1, 0), (1, 1), (1, 2)],
        Orientation::Deg90 => [(0, 1), (0, 2), (1, 1), (2, 1)],
        Orientation::Deg180 => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Orientation::Deg270 => [(0, 1), (1, 1), (2, 0), (2, 1)],
    }
}

/// L piece shapes
fn l_shape(orientation: Orientation) -> PieceShape {
    match orientation {
        Orientation::Deg0 => [(0, 2), (1, 0), (1, 1), (1, 2)],
        Orientation::Deg90 => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Orientation::Deg180 => [(1, 0), (1, 1), (1, 2), (2, 0)],
        Orientation::Deg270 => [(0, 0), (0, 1), (1, 1), (2, 1)],
    }
}

/// Row every piece spawns on (board top).
pub const SPAWN_ROW: i16 = 0;

/// Spawn column for a board of the given width: top-center, so the 4-wide
/// shape box sits in the middle of the playfield.
pub fn spawn_col(board_width: usize) -> i16 {
    (board_width as i16 - 4) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_orientations() -> [Orientation; 4] {
        [
            Orientation::Deg0,
            Orientation::Deg90,
            Orientation::Deg180,
            Orientation::Deg270,
        ]
    }

    #[test]
    fn shapes_have_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for orientation in all_orientations() {
                let cells = shape(kind, orientation);
                for (i, a) in cells.iter().enumerate() {
                    for b in cells.iter().skip(i + 1) {
                        assert_ne!(a, b, "duplicate cell in {:?} {:?}", kind, orientation);
                    }
                }
            }
        }
    }

    #[test]
    fn shapes_fit_in_four_by_four_box() {
        for kind in PieceKind::ALL {
            for orientation in all_orientations() {
                for (dr, dc) in shape(kind, orientation) {
                    assert!((0..4).contains(&dr), "{:?} {:?} row {}", kind, orientation, dr);
                    assert!((0..4).contains(&dc), "{:?} {:?} col {}", kind, orientation, dc);
                }
            }
        }
    }

    #[test]
    fn o_piece_ignores_orientation() {
        for orientation in all_orientations() {
            assert_eq!(
                shape(PieceKind::O, orientation),
                shape(PieceKind::O, Orientation::Deg0)
            );
        }
    }

    #[test]
    fn spawn_col_centers_shape_box() {
        assert_eq!(spawn_col(12), 4);
        assert_eq!(spawn_col(20), 8);
    }
}
