//! Terminal Termtris runner (default binary).
//!
//! The engine has no clocks of its own: this loop polls the keyboard with
//! a tick-sized timeout and issues one gravity step every `speed` ticks,
//! where `speed` shrinks as the score climbs. Pause is purely a driver
//! concern - the loop stops issuing gravity and ignores game keys.

mod score;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use termtris::core::{GameSession, StepOutcome};
use termtris::input::{is_pause, map_key, should_quit};
use termtris::term::{GameView, Hud, Screen, Viewport};
use termtris::types::{GameAction, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, TICK_MS};

use crate::score::{level_for, score_for};

fn main() -> Result<()> {
    let (width, height) = board_size_from_args()?;
    let mut session =
        GameSession::new(width, height).context("invalid board size on command line")?;

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, &mut session);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

/// Optional `termtris [width] [height]`, defaulting to the standard 12x20.
fn board_size_from_args() -> Result<(usize, usize)> {
    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(w), Some(h)) => {
            let width = w.parse().context("width must be a number")?;
            let height = h.parse().context("height must be a number")?;
            Ok((width, height))
        }
        _ => Ok((DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)),
    }
}

/// Per-run driver state: scoring, gravity phase, pause.
struct Driver {
    score: u32,
    highest: u32,
    ticks: u32,
    paused: bool,
}

impl Driver {
    fn new() -> Self {
        Self {
            score: 0,
            highest: 0,
            ticks: 0,
            paused: false,
        }
    }

    /// Fold a landing into the score; non-landing outcomes are ignored.
    fn settle(&mut self, outcome: &StepOutcome) {
        if let Some(rows) = &outcome.cleared {
            self.score += score_for(rows.len());
            if self.score > self.highest {
                self.highest = self.score;
            }
        }
    }
}

fn run(screen: &mut Screen, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut driver = Driver::new();

    loop {
        // Render.
        let level = level_for(driver.score);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            score: driver.score,
            highest: driver.highest,
            level: level.number,
            paused: driver.paused,
        };
        let frame = view.render(session, &hud, Viewport::new(w, h));
        screen.draw(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_pause(key) {
                        driver.paused = !driver.paused;
                        continue;
                    }
                    if driver.paused {
                        continue;
                    }
                    if let Some(action) = map_key(key) {
                        if action == GameAction::NewGame {
                            driver.score = 0;
                            driver.ticks = 0;
                        }
                        if let Some(outcome) = session.apply(action) {
                            driver.settle(&outcome);
                        }
                    }
                }
            }
        }

        // Gravity tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();

            if !driver.paused && !session.is_game_over() {
                driver.ticks = (driver.ticks + 1) % level.speed;
                if driver.ticks == 0 {
                    if let Some(outcome) = session.soft_drop() {
                        driver.settle(&outcome);
                    }
                }
            }
        }
    }
}
