//! # Terminal Session
//!
//! Exclusive ownership of the terminal display while the target list is up.
//!
//! [`CrosstermSession::acquire`] enables raw mode and switches to the
//! alternate screen; [`CrosstermSession::release`] undoes both so a child
//! process can take over the real terminal. Every acquire clears the screen
//! and forces ratatui to repaint from scratch, since whatever the child drew
//! is not in ratatui's buffers.
//!
//! The session releases itself on drop, and [`restore_terminal`] is exposed
//! for the panic hook.

use crate::ui::app::App;
use crate::ui::render;
use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
pub trait EventReader {
    /// Block until the next event. `None` means the input stream is closed.
    fn read_event(&mut self) -> Result<Option<Event>>;

    /// Drop input that is already queued, such as keys typed while a session
    /// owned the terminal. Returns how many events were dropped.
    fn discard_pending(&mut self) -> Result<usize>;
}

/// Production event reader that blocks on crossterm's event stream
pub struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self) -> Result<Option<Event>> {
        Ok(Some(
            event::read().context("Failed to read keyboard event")?,
        ))
    }

    fn discard_pending(&mut self) -> Result<usize> {
        let mut discarded = 0;
        while event::poll(Duration::ZERO).context("Failed to poll keyboard events")? {
            event::read().context("Failed to read keyboard event")?;
            discarded += 1;
        }
        Ok(discarded)
    }
}

/// The display side of the mode switch.
pub trait TerminalSession {
    /// Take over the terminal. No-op when already acquired.
    fn acquire(&mut self) -> Result<()>;
    /// Give the terminal back. No-op when already released.
    fn release(&mut self) -> Result<()>;
    /// Repaint the full UI. Only valid while acquired.
    fn draw(&mut self, app: &App) -> Result<()>;
    /// Print a line on the plain terminal. Only valid while released.
    fn announce(&mut self, message: &str) -> Result<()>;
}

pub struct CrosstermSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    acquired: bool,
}

impl CrosstermSession {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            acquired: false,
        })
    }
}

impl TerminalSession for CrosstermSession {
    fn acquire(&mut self) -> Result<()> {
        if self.acquired {
            return Ok(());
        }

        enable_raw_mode().context("Failed to enable raw mode for terminal")?;
        // From here on a failure still needs a release
        self.acquired = true;

        execute!(self.terminal.backend_mut(), EnterAlternateScreen, Hide)
            .context("Failed to setup terminal")?;
        self.terminal
            .clear()
            .context("Failed to clear terminal")?;

        tracing::debug!("terminal acquired");
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        if !self.acquired {
            return Ok(());
        }
        self.acquired = false;

        restore_terminal()?;
        self.terminal
            .show_cursor()
            .context("Failed to show cursor")?;

        tracing::debug!("terminal released");
        Ok(())
    }

    fn draw(&mut self, app: &App) -> Result<()> {
        self.terminal
            .draw(|f| render::render(f, app))
            .context("Failed to draw terminal UI")?;
        Ok(())
    }

    fn announce(&mut self, message: &str) -> Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{message}").context("Failed to write status message")?;
        stdout.flush().context("Failed to flush stdout")?;
        Ok(())
    }
}

impl Drop for CrosstermSession {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!(error = %e, "failed to restore terminal on drop");
        }
    }
}

/// Leave raw mode and the alternate screen, and show the cursor.
///
/// Every step is attempted even if an earlier one fails; the first error is
/// returned.
pub fn restore_terminal() -> Result<()> {
    let raw_result = disable_raw_mode().context("Failed to disable raw mode");
    let screen_result = execute!(io::stdout(), LeaveAlternateScreen, Show)
        .context("Failed to restore terminal");
    raw_result?;
    screen_result?;
    Ok(())
}
