//! A plain character framebuffer the view draws into.
//!
//! Pure data, no I/O; [`crate::screen`] flushes it to the terminal.

use crossterm::style::Color;

/// Visual attributes of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
            dim: false,
        }
    }
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Self::default()
        }
    }

    pub fn bg(color: Color) -> Self {
        Self {
            bg: color,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// One terminal cell: a character plus its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// A width x height grid of glyphs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Set a cell; writes outside the frame are dropped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = glyph;
    }

    /// Write a string starting at (x, y); clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as u16, y, Glyph { ch, style });
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, Glyph { ch, style });
            }
        }
    }

    /// True if the given text appears contiguously anywhere in the frame.
    ///
    /// Only used by tests; kept here because it needs the raw cells.
    pub fn contains_text(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        for y in 0..self.height {
            for x in 0..self.width.saturating_sub(chars.len() as u16 - 1) {
                if chars
                    .iter()
                    .enumerate()
                    .all(|(i, &ch)| self.get(x + i as u16, y).map(|g| g.ch) == Some(ch))
                {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_roundtrip() {
        let mut frame = Frame::new(4, 2);
        let glyph = Glyph {
            ch: 'X',
            style: Style::fg(Color::Red),
        };
        frame.set(3, 1, glyph);
        assert_eq!(frame.get(3, 1), Some(glyph));
        assert_eq!(frame.get(0, 0), Some(Glyph::default()));
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut frame = Frame::new(4, 2);
        frame.set(4, 0, Glyph { ch: 'X', style: Style::default() });
        frame.set(0, 2, Glyph { ch: 'X', style: Style::default() });
        assert!(!frame.contains_text("X"));
    }

    #[test]
    fn put_str_clips_at_edge() {
        let mut frame = Frame::new(4, 1);
        frame.put_str(2, 0, "abcd", Style::default());
        assert!(frame.contains_text("ab"));
        assert!(!frame.contains_text("abc"));
    }
}
