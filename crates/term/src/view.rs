//! GameView: maps a `GameSession` into a terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use termtris_core::{shape, GameSession, Piece};
use termtris_types::{Orientation, PieceKind};

use crate::frame::{Frame, Glyph, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Driver-side stats shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub score: u32,
    pub highest: u32,
    pub level: u32,
    pub paused: bool,
}

/// Help text in the side panel, one line each.
const HELP_LINES: [&str; 8] = [
    "Right:  Move Right",
    "Left:   Move Left",
    "Up:     Rotate",
    "Down:   Speed up Fall",
    "Space:  Fall to Ground",
    "Enter:  New Game",
    "Esc:    Pause Game",
    "Ctrl-X: Exit Game",
];

/// Width of the side panel in terminal columns.
const PANEL_W: u16 = 22;

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the session and HUD into a fresh frame.
    pub fn render(&self, session: &GameSession, hud: &Hud, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);

        let board_w = session.width() as u16;
        let board_h = session.height() as u16;
        let frame_w = board_w * self.cell_w + 2;
        let frame_h = board_h + 2;
        let total_w = frame_w + 1 + PANEL_W;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut frame, start_x, start_y, frame_w, frame_h);

        // Settled stack.
        for row in 0..board_h {
            for col in 0..board_w {
                let cell = session.cells()[row as usize * board_w as usize + col as usize];
                match cell {
                    Some(kind) => {
                        self.draw_cell(&mut frame, start_x, start_y, row, col, kind, false)
                    }
                    None => self.draw_empty(&mut frame, start_x, start_y, row, col),
                }
            }
        }

        // Active piece (in game over this is the blocked spawn).
        if let Some(piece) = session.active() {
            self.draw_piece(&mut frame, start_x, start_y, piece);
        }

        self.draw_panel(&mut frame, session, hud, start_x + frame_w + 1, start_y);

        if hud.paused {
            self.draw_banner(&mut frame, start_x, start_y, frame_w, frame_h, " PAUSED ");
        } else if session.is_game_over() {
            self.draw_banner(&mut frame, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        }

        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::fg(Color::Grey);
        for dx in 1..w.saturating_sub(1) {
            frame.set(x + dx, y, Glyph { ch: '─', style });
            frame.set(x + dx, y + h - 1, Glyph { ch: '─', style });
        }
        for dy in 1..h.saturating_sub(1) {
            frame.set(x, y + dy, Glyph { ch: '│', style });
            frame.set(x + w - 1, y + dy, Glyph { ch: '│', style });
        }
        frame.set(x, y, Glyph { ch: '┌', style });
        frame.set(x + w - 1, y, Glyph { ch: '┐', style });
        frame.set(x, y + h - 1, Glyph { ch: '└', style });
        frame.set(x + w - 1, y + h - 1, Glyph { ch: '┘', style });
    }

    fn draw_cell(
        &self,
        frame: &mut Frame,
        x: u16,
        y: u16,
        row: u16,
        col: u16,
        kind: PieceKind,
        active: bool,
    ) {
        let mut style = Style::bg(kind_color(kind));
        if active {
            style = style.bold();
        }
        let cx = x + 1 + col * self.cell_w;
        let cy = y + 1 + row;
        for dx in 0..self.cell_w {
            frame.set(cx + dx, cy, Glyph { ch: ' ', style });
        }
    }

    fn draw_empty(&self, frame: &mut Frame, x: u16, y: u16, row: u16, col: u16) {
        let style = Style::fg(Color::DarkGrey).dim();
        let cx = x + 1 + col * self.cell_w;
        let cy = y + 1 + row;
        frame.set(cx, cy, Glyph { ch: ' ', style });
        for dx in 1..self.cell_w {
            frame.set(cx + dx, cy, Glyph { ch: '.', style });
        }
    }

    fn draw_piece(&self, frame: &mut Frame, x: u16, y: u16, piece: Piece) {
        for (row, col) in piece.cells() {
            if row >= 0 && col >= 0 {
                self.draw_cell(frame, x, y, row as u16, col as u16, piece.kind, true);
            }
        }
    }

    fn draw_panel(&self, frame: &mut Frame, session: &GameSession, hud: &Hud, x: u16, y: u16) {
        let text = Style::default();
        let title = Style::fg(Color::Yellow).bold();
        let rule = Style::fg(Color::Grey);

        frame.put_str(x + (PANEL_W.saturating_sub(8)) / 2, y, "Termtris", title);
        frame.put_str(x, y + 1, &"─".repeat(PANEL_W as usize), rule);

        for (i, line) in HELP_LINES.iter().enumerate() {
            frame.put_str(x, y + 2 + i as u16, line, text);
        }
        let mut line = y + 2 + HELP_LINES.len() as u16;
        frame.put_str(x, line, &"─".repeat(PANEL_W as usize), rule);
        line += 1;

        frame.put_str(x, line, "Next Tetro:", text);
        self.draw_preview(frame, session.peek_next(), x + 2, line + 1);
        line += 4;

        frame.put_str(x, line, &format!("Level:   {}", hud.level), text);
        frame.put_str(x, line + 1, &format!("Score:   {}", hud.score), text);
        frame.put_str(x, line + 2, &format!("Highest: {}", hud.highest), text);
    }

    fn draw_preview(&self, frame: &mut Frame, kind: PieceKind, x: u16, y: u16) {
        let style = Style::bg(kind_color(kind));
        for (dr, dc) in shape(kind, Orientation::Deg0) {
            let cx = x + dc as u16 * self.cell_w;
            let cy = y + dr as u16;
            for dx in 0..self.cell_w {
                frame.set(cx + dx, cy, Glyph { ch: ' ', style });
            }
        }
    }

    fn draw_banner(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = Style::fg(Color::White).bold();
        let bx = x + w.saturating_sub(text.len() as u16) / 2;
        let by = y + h / 2;
        frame.put_str(bx, by, text, style);
    }
}

/// Display color for a piece kind.
pub fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::DarkYellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termtris_core::GameSession;

    fn session() -> GameSession {
        GameSession::with_seed(12, 20, 1).unwrap()
    }

    #[test]
    fn render_produces_viewport_sized_frame() {
        let view = GameView::default();
        let frame = view.render(&session(), &Hud::default(), Viewport::new(80, 24));
        assert_eq!(frame.width(), 80);
        assert_eq!(frame.height(), 24);
    }

    #[test]
    fn render_shows_title_and_help() {
        let view = GameView::default();
        let frame = view.render(&session(), &Hud::default(), Viewport::new(80, 24));
        assert!(frame.contains_text("Termtris"));
        assert!(frame.contains_text("Enter:  New Game"));
        assert!(frame.contains_text("Score:   0"));
    }

    #[test]
    fn render_shows_pause_banner() {
        let view = GameView::default();
        let hud = Hud {
            paused: true,
            ..Hud::default()
        };
        let frame = view.render(&session(), &hud, Viewport::new(80, 24));
        assert!(frame.contains_text("PAUSED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let frame = view.render(&session(), &Hud::default(), Viewport::new(10, 5));
        assert_eq!(frame.width(), 10);
    }
}
