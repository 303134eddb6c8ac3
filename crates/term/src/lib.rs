//! Terminal presentation layer: a pure view plus a crossterm screen.
//!
//! [`view::GameView`] lays the session and HUD out into a [`frame::Frame`]
//! with no I/O; [`screen::Screen`] owns the terminal and flushes frames.

pub mod frame;
pub mod screen;
pub mod view;

pub use frame::{Frame, Glyph, Style};
pub use screen::Screen;
pub use view::{kind_color, GameView, Hud, Viewport};
