//! End-to-end session flow tests
//!
//! Drive the controller with scripted keys, the real shell runner, and a
//! terminal double that checks the acquire/release pairing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use jump::config::LauncherSettings;
use jump::session::{self, ExecutionOutcome, ShellRunner};
use jump::target::{Target, TargetRegistry};
use jump::ui::app::Mode;
use jump::ui::terminal::{EventReader, TerminalSession};
use jump::ui::theme::Theme;
use jump::ui::{run_app, App};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Terminal double that fails the test if both sides own the terminal
#[derive(Default)]
struct FakeTerminal {
    acquired: bool,
    acquires: usize,
    releases: usize,
    messages: Vec<String>,
}

impl TerminalSession for FakeTerminal {
    fn acquire(&mut self) -> Result<()> {
        self.acquired = true;
        self.acquires += 1;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        self.acquired = false;
        self.releases += 1;
        Ok(())
    }

    fn draw(&mut self, _app: &App) -> Result<()> {
        assert!(self.acquired, "drew while a session owned the terminal");
        Ok(())
    }

    fn announce(&mut self, message: &str) -> Result<()> {
        assert!(!self.acquired, "announced while the UI owned the terminal");
        self.messages.push(message.to_string());
        Ok(())
    }
}

struct ScriptedKeys(VecDeque<Event>);

impl ScriptedKeys {
    fn new(codes: &[KeyCode]) -> Self {
        Self(
            codes
                .iter()
                .map(|code| Event::Key(KeyEvent::new(*code, KeyModifiers::empty())))
                .collect(),
        )
    }
}

impl EventReader for ScriptedKeys {
    fn read_event(&mut self) -> Result<Option<Event>> {
        Ok(self.0.pop_front())
    }

    fn discard_pending(&mut self) -> Result<usize> {
        Ok(0)
    }
}

fn settings(timeout: Duration) -> LauncherSettings {
    LauncherSettings {
        timeout,
        pause: Duration::ZERO,
        theme: Theme::default_theme(),
    }
}

#[tokio::test]
async fn test_select_first_target_completes_and_keeps_cursor() {
    let registry = TargetRegistry::new(vec![
        Target::new("A", "echo hi"),
        Target::new("B", "sleep 2"),
    ])
    .expect("registry");
    let mut app = App::new(registry, Theme::default_theme());
    let mut terminal = FakeTerminal {
        acquired: true,
        ..Default::default()
    };
    let mut keys = ScriptedKeys::new(&[KeyCode::Enter]);

    run_app(
        &mut terminal,
        &mut app,
        &mut keys,
        &mut ShellRunner,
        &settings(Duration::from_secs(10)),
    )
    .await
    .expect("run_app");

    assert_eq!(app.registry.cursor(), 0);
    assert_eq!(app.mode, Mode::Browsing);
    assert_eq!(terminal.acquires, 1);
    // One release for the session, one when input closes
    assert_eq!(terminal.releases, 2);
    assert_eq!(terminal.messages.len(), 1);
    assert!(terminal.messages[0].contains("\"A\" ended"));
    assert!(app.last_status.as_ref().is_some_and(|s| !s.is_error));
}

#[tokio::test]
async fn test_timed_out_session_returns_to_list() {
    let registry = TargetRegistry::new(vec![Target::new("C", "sleep 10")]).expect("registry");
    let mut app = App::new(registry, Theme::default_theme());
    let mut terminal = FakeTerminal {
        acquired: true,
        ..Default::default()
    };
    let mut keys = ScriptedKeys::new(&[KeyCode::Enter, KeyCode::Char('q')]);

    let started = Instant::now();
    run_app(
        &mut terminal,
        &mut app,
        &mut keys,
        &mut ShellRunner,
        &settings(Duration::from_secs(1)),
    )
    .await
    .expect("run_app");

    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(terminal.messages[0].contains("timed out after 1s"));
    assert_eq!(terminal.acquires, 1);
    assert!(!terminal.acquired);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_run_produces_exactly_one_outcome() {
    let cases = [
        ("true", ExecutionOutcome::Completed),
        ("exit 3", ExecutionOutcome::Completed),
        ("sleep 5", ExecutionOutcome::TimedOut),
    ];

    for (command, expected) in cases {
        let target = Target::new("case", command);
        let outcome = session::run(&target, Duration::from_millis(500)).await;
        assert_eq!(outcome, expected, "command: {command}");
    }
}
