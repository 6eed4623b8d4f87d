use crate::session::ExecutionOutcome;
use crate::target::{Direction, Target, TargetRegistry};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Which side currently owns the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The TUI owns the terminal and accepts navigation input
    Browsing,
    /// A child process owns the terminal
    Executing,
}

/// Input the controller reacts to, decoded from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    NavigateUp,
    NavigateDown,
    Select,
    Quit,
}

impl InputEvent {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            // In raw mode a stray newline arrives as Ctrl+J
            return match key.code {
                KeyCode::Char('c') => Some(InputEvent::Quit),
                _ => None,
            };
        }
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();

        match key.code {
            KeyCode::Up => Some(InputEvent::NavigateUp),
            KeyCode::Down => Some(InputEvent::NavigateDown),
            KeyCode::Enter => Some(InputEvent::Select),
            KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('k') if plain => Some(InputEvent::NavigateUp),
            KeyCode::Char('j') if plain => Some(InputEvent::NavigateDown),
            KeyCode::Char('q') | KeyCode::Char('Q') if plain => Some(InputEvent::Quit),
            _ => None,
        }
    }
}

/// What the controller has to do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Redraw,
    /// Hand the terminal to this target's command
    Execute(Target),
    Quit,
    Ignore,
}

/// Outcome of the last session, shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    pub mode: Mode,
    pub registry: TargetRegistry,
    pub theme: &'static Theme,
    pub last_status: Option<StatusLine>,
    pub should_quit: bool,
}

impl App {
    pub fn new(registry: TargetRegistry, theme: &'static Theme) -> Self {
        Self {
            mode: Mode::Browsing,
            registry,
            theme,
            last_status: None,
            should_quit: false,
        }
    }

    /// Apply one input to the mode state machine.
    pub fn transition(&mut self, event: InputEvent) -> Transition {
        let transition = match (self.mode, event) {
            (Mode::Browsing, InputEvent::NavigateUp) => {
                self.registry.move_cursor(Direction::Up);
                Transition::Redraw
            }
            (Mode::Browsing, InputEvent::NavigateDown) => {
                self.registry.move_cursor(Direction::Down);
                Transition::Redraw
            }
            (Mode::Browsing, InputEvent::Select) => {
                self.mode = Mode::Executing;
                Transition::Execute(self.registry.current().clone())
            }
            (Mode::Browsing, InputEvent::Quit) => {
                self.should_quit = true;
                Transition::Quit
            }
            // No input is read while a session runs; anything that slips
            // through is dropped.
            (Mode::Executing, _) => Transition::Ignore,
        };
        tracing::debug!(?event, mode = ?self.mode, ?transition, "input handled");
        transition
    }

    /// Record how a session ended and return the message to announce.
    pub fn record_outcome(
        &mut self,
        target: &Target,
        outcome: &ExecutionOutcome,
        timeout: Duration,
    ) -> String {
        let text = outcome.status_message(target, timeout);
        self.last_status = Some(StatusLine {
            text: text.clone(),
            is_error: outcome.is_error(),
        });
        text
    }

    pub fn resume_browsing(&mut self) {
        self.mode = Mode::Browsing;
    }

    pub fn selected_target(&self) -> &Target {
        self.registry.current()
    }
}
