//! # Mode Controller
//!
//! Drives the event loop and the hand-off between the target list and a
//! running session:
//!
//! ```text
//!            Up / Down                   run() returns
//!           ┌─────────┐      Enter     ┌─────────────┐
//!           ▼         │  ────────────▶ │             │
//!        Browsing ────┘                │  Executing  │
//!           ▲                          │             │
//!           └──────────────────────────┴─────────────┘
//!  release → run → announce → pause → acquire → draw
//! ```
//!
//! The terminal is acquired by exactly one side at a time. The release
//! happens before the child is spawned and the acquire happens after it is
//! gone, whatever the outcome.

use crate::config::LauncherSettings;
use crate::session::SessionRunner;
use crate::target::Target;
use crate::ui::app::{App, InputEvent, Transition};
use crate::ui::terminal::{EventReader, TerminalSession};
use anyhow::{Context, Result};
use crossterm::event::Event;

/// Run the launcher until the user quits or input closes.
///
/// The terminal must already be acquired. It is released before returning
/// `Ok`; on error the caller is responsible for cleanup.
pub async fn run_app<R: SessionRunner>(
    terminal: &mut dyn TerminalSession,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    runner: &mut R,
    settings: &LauncherSettings,
) -> Result<()> {
    terminal.draw(app)?;

    loop {
        let Some(event) = event_reader.read_event()? else {
            tracing::debug!("input stream closed");
            break;
        };

        let input = match event {
            Event::Key(key) => InputEvent::from_key(key),
            Event::Resize(_, _) => {
                terminal.draw(app)?;
                continue;
            }
            _ => None,
        };

        let Some(input) = input else {
            continue;
        };

        match app.transition(input) {
            Transition::Redraw => terminal.draw(app)?,
            Transition::Execute(target) => {
                let result =
                    run_session(terminal, app, event_reader, runner, settings, &target).await;
                if result.is_err() {
                    app.resume_browsing();
                }
                result?;
            }
            Transition::Quit => break,
            Transition::Ignore => {}
        }
    }

    terminal.release()
}

/// Hand the terminal to `target`'s command and take it back afterwards.
///
/// Input typed while the command owned the terminal is still queued when the
/// list comes back. It is dropped so it cannot act on the list.
async fn run_session<R: SessionRunner>(
    terminal: &mut dyn TerminalSession,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    runner: &mut R,
    settings: &LauncherSettings,
    target: &Target,
) -> Result<()> {
    terminal
        .release()
        .context("Failed to release terminal before running session")?;

    let outcome = runner.run(target, settings.timeout).await;
    let message = app.record_outcome(target, &outcome, settings.timeout);

    // The list comes back regardless; a lost status line is not worth failing over
    if let Err(e) = terminal.announce(&message) {
        tracing::warn!(error = %e, "failed to print session status");
    }
    if !settings.pause.is_zero() {
        tokio::time::sleep(settings.pause).await;
    }

    terminal
        .acquire()
        .context("Failed to restore terminal after session")?;
    let discarded = event_reader
        .discard_pending()
        .context("Failed to discard input typed during session")?;
    if discarded > 0 {
        tracing::debug!(discarded, "dropped input typed during session");
    }
    app.resume_browsing();
    terminal.draw(app)
}
