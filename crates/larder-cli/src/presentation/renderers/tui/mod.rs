//! Interactive board: three shelves side by side, modal add/edit form,
//! delete confirmation.
//!
//! The renderer owns cursor and form buffers only. Items live in the
//! [`Controller`]; every key press and every sync tick re-presents the
//! shelves through the same presenter the one-shot commands use.

mod app;
mod components;
mod ui;

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use larder_runtime::Controller;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

use app::AppState;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the board until the user quits. `today` is asked again on every
/// tick so an open board rolls over at midnight.
pub fn run(controller: &mut Controller, today: impl Fn() -> NaiveDate) -> Result<()> {
    let _guard = TerminalGuard::new(
        || {
            enable_raw_mode()?;
            execute!(io::stdout(), EnterAlternateScreen)
        },
        restore_terminal,
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    ctrlc::set_handler(|| {
        restore_terminal();
        std::process::exit(0);
    })?;

    event_loop(&mut terminal, controller, &today)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Runs `restore` when dropped. A setup step that fails after raw mode
/// was enabled still leaves raw mode.
struct TerminalGuard<R: FnMut()> {
    restore: R,
}

impl<R: FnMut()> TerminalGuard<R> {
    fn new(enter: impl FnOnce() -> io::Result<()>, restore: R) -> io::Result<Self> {
        let guard = Self { restore };
        enter()?;
        Ok(guard)
    }
}

impl<R: FnMut()> Drop for TerminalGuard<R> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller,
    today: &impl Fn() -> NaiveDate,
) -> Result<()> {
    let mut state = AppState::new(controller, today());
    let mut last_tick = Instant::now();

    while !state.should_quit {
        terminal.draw(|f| ui::draw(f, &state))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            state.handle_key(key, controller);
        }

        if last_tick.elapsed() >= TICK_RATE {
            state.tick(controller, today());
            last_tick = Instant::now();
        }
    }

    Ok(())
}
