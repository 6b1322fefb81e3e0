//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Structure:
//! - `mod.rs`: `TuiRuntime` (terminal + event loop) and `Driver` (state,
//!   timers and effect dispatch, usable without a terminal)
//! - `timers.rs`: deadline queue for deferred events

mod timers;

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tele_core::Config;
pub use timers::{TimerKind, TimerQueue};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, TeleTerminal};
use crate::{render, update};

/// Longest the loop blocks waiting for input when no timer is closer.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// State plus pending timers; runs the reducer and executes its effects.
#[derive(Debug)]
pub struct Driver {
    pub state: AppState,
    pub timers: TimerQueue,
}

impl Driver {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            timers: TimerQueue::new(),
        }
    }

    /// Runs one event through the reducer and executes the effects.
    ///
    /// Errors only on a failed file read, which ends the run.
    pub fn dispatch(&mut self, event: UiEvent, now: Instant) -> Result<()> {
        let effects = update::update(&mut self.state, event);
        self.execute_effects(effects, now)
    }

    /// Delivers every timer due at `now`.
    pub fn fire_due_timers(&mut self, now: Instant) -> Result<()> {
        for kind in self.timers.drain_due(now) {
            self.dispatch(kind.into_event(now), now)?;
        }
        Ok(())
    }

    /// How long the loop may block before the next timer is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.timers
            .time_until_next(now)
            .map_or(IDLE_POLL_DURATION, |until| until.min(IDLE_POLL_DURATION))
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>, now: Instant) -> Result<()> {
        for effect in effects {
            self.execute_effect(effect, now)?;
        }
        Ok(())
    }

    fn execute_effect(&mut self, effect: UiEffect, now: Instant) -> Result<()> {
        match effect {
            UiEffect::Quit => {
                tracing::info!(screen = self.state.screen_name(), "quit requested");
                self.state.should_quit = true;
            }
            UiEffect::ScheduleTick { after } => {
                self.timers.schedule(now, after, TimerKind::Tick);
            }
            UiEffect::ScheduleErrorClear { after } => {
                self.timers.schedule(now, after, TimerKind::ClearError);
            }
            UiEffect::LoadFile { path } => {
                let bytes = load_file(&path)?;
                self.dispatch(UiEvent::SourceLoaded { path, bytes }, now)?;
            }
        }
        Ok(())
    }
}

/// Reads a selected source file.
pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Full-screen TUI runtime.
///
/// Owns the terminal and the driver. Terminal state is restored on drop,
/// so a fatal error returned from `run` leaves a usable shell behind.
pub struct TuiRuntime {
    terminal: TeleTerminal,
    driver: Driver,
}

impl TuiRuntime {
    pub fn new(config: &Config) -> Result<Self> {
        // Panic hook before entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            driver: Driver::new(AppState::new(config)),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.driver.state
    }

    /// Runs the main event loop until quit or a fatal error.
    pub fn run(&mut self) -> Result<()> {
        let size = self.terminal.size().context("Failed to read terminal size")?;
        self.driver.dispatch(
            UiEvent::Terminal(Event::Resize(size.width, size.height)),
            Instant::now(),
        )?;
        tracing::info!(
            width = size.width,
            height = size.height,
            "teleprompter started"
        );

        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.driver.state.should_quit {
            if dirty {
                let state = &self.driver.state;
                self.terminal.draw(|frame| render::render(state, frame))?;
                dirty = false;
            }

            let timeout = self.driver.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                self.driver
                    .dispatch(UiEvent::Terminal(event::read()?), Instant::now())?;
                // Drain anything already buffered.
                while !self.driver.state.should_quit && event::poll(Duration::ZERO)? {
                    self.driver
                        .dispatch(UiEvent::Terminal(event::read()?), Instant::now())?;
                }
                dirty = true;
            }

            if !self.driver.state.should_quit {
                let now = Instant::now();
                if self.driver.timers.next_due().is_some_and(|due| due <= now) {
                    self.driver.fire_due_timers(now)?;
                    dirty = true;
                }
            }
        }

        Ok(())
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
