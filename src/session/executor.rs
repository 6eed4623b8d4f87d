//! # Session Executor
//!
//! Runs a target's command with full terminal access and a hard deadline.
//!
//! ## Full Terminal Access
//!
//! The child inherits stdin, stdout, and stderr from the launcher:
//!
//! ```ignore
//! Command::new("bash")
//!     .arg("-c")
//!     .arg(&target.command)
//!     .stdin(Stdio::inherit())
//!     .stdout(Stdio::inherit())
//!     .stderr(Stdio::inherit())
//! ```
//!
//! so `ssh`, password prompts, and full-screen remote programs behave exactly
//! as they would from a shell. The caller must have released the TUI first.
//!
//! ## Deadline
//!
//! Waiting on the child races against a timer. Whichever finishes first
//! decides the [`ExecutionOutcome`]:
//!
//! | First to finish | Outcome |
//! |-----------------|---------|
//! | child exits (any status) | `Completed` |
//! | spawn / wait error | `Failed(detail)` |
//! | timer | child is killed once, `TimedOut` |
//!
//! After a kill, reaping is bounded by [`KILL_GRACE`] so a child that
//! ignores the signal cannot hold the launcher past the deadline. On Linux
//! the shell's descendants are killed along with it.

use crate::target::Target;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::{Child, Command};

/// How long to wait for a killed child to be reaped
pub const KILL_GRACE: Duration = Duration::from_millis(500);

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The command exited before the deadline, with any exit status
    Completed,
    /// The deadline elapsed and the command was killed
    TimedOut,
    /// The command could not be launched or waited on
    Failed(String),
}

impl ExecutionOutcome {
    pub fn is_error(&self) -> bool {
        !matches!(self, ExecutionOutcome::Completed)
    }

    /// Message printed on the plain terminal before the list comes back
    pub fn status_message(&self, target: &Target, timeout: Duration) -> String {
        match self {
            ExecutionOutcome::Completed => format!(
                "Session \"{}\" ended. Returning to the target list...",
                target.name
            ),
            ExecutionOutcome::TimedOut => format!(
                "Session \"{}\" timed out after {}s. Check your network connection. Returning to the target list...",
                target.name,
                timeout.as_secs()
            ),
            ExecutionOutcome::Failed(detail) => {
                format!("Failed to run \"{}\": {}", target.name, detail)
            }
        }
    }
}

/// Everything known about a finished session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub outcome: ExecutionOutcome,
    /// Process id of the spawned shell, if it was spawned
    pub pid: Option<u32>,
    /// Exit code when the child exited normally before the deadline
    pub exit_code: Option<i32>,
    pub elapsed: Duration,
}

/// Run a target's command and classify how it ended.
pub async fn run(target: &Target, timeout: Duration) -> ExecutionOutcome {
    tracing::info!(target_name = %target.name, "starting session");
    let report = run_command(&target.command, timeout).await;
    tracing::info!(
        target_name = %target.name,
        outcome = ?report.outcome,
        exit_code = ?report.exit_code,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "session finished"
    );
    report.outcome
}

/// Run `bash -c <command>` with inherited stdio, bounded by `timeout`.
pub async fn run_command(command: &str, timeout: Duration) -> SessionReport {
    let started_at = Instant::now();

    let mut child = match build_command(command).spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::error!(error = %e, "failed to launch session command");
            return SessionReport {
                outcome: ExecutionOutcome::Failed(format!("failed to launch bash: {e}")),
                pid: None,
                exit_code: None,
                elapsed: started_at.elapsed(),
            };
        }
    };
    let pid = child.id();

    let (outcome, exit_code) = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => (ExecutionOutcome::Completed, status.code()),
        Ok(Err(e)) => {
            tracing::error!(error = %e, ?pid, "failed waiting for session command");
            terminate(&mut child).await;
            (
                ExecutionOutcome::Failed(format!("failed waiting for command: {e}")),
                None,
            )
        }
        Err(_) => {
            tracing::warn!(
                ?pid,
                timeout_secs = timeout.as_secs(),
                "session deadline elapsed, killing command"
            );
            terminate(&mut child).await;
            (ExecutionOutcome::TimedOut, None)
        }
    };

    SessionReport {
        outcome,
        pid,
        exit_code,
        elapsed: started_at.elapsed(),
    }
}

fn build_command(command: &str) -> Command {
    let mut cmd = Command::new("bash");
    cmd.arg("-c")
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);
    cmd
}

/// Kill the child once and give it [`KILL_GRACE`] to be reaped.
///
/// `bash -c` forks every command of a list except the last, so the shell's
/// descendants are collected first and killed right after it. Otherwise
/// `ssh host; echo bye` would leave `ssh` holding the terminal.
async fn terminate(child: &mut Child) {
    let descendants = child.id().map(descendant_pids).unwrap_or_default();

    if let Err(e) = child.start_kill() {
        tracing::warn!(error = %e, "failed to kill session command");
        return;
    }
    kill_pids(&descendants).await;

    match tokio::time::timeout(KILL_GRACE, child.wait()).await {
        Ok(Ok(status)) => tracing::debug!(%status, "killed session command reaped"),
        Ok(Err(e)) => tracing::warn!(error = %e, "failed to reap killed session command"),
        Err(_) => tracing::warn!("killed session command did not exit within grace period"),
    }
}

/// Send SIGKILL to `pids` through the shell's `kill` builtin.
async fn kill_pids(pids: &[u32]) {
    if pids.is_empty() {
        return;
    }
    tracing::debug!(?pids, "killing session command descendants");

    let mut kill = Command::new("bash");
    kill.arg("-c")
        .arg("kill -KILL -- \"$@\" 2>/dev/null")
        .arg("kill")
        .args(pids.iter().map(u32::to_string))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    match tokio::time::timeout(KILL_GRACE, kill.status()).await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, "failed to kill session command descendants"),
        Err(_) => tracing::warn!("killing session command descendants timed out"),
    }
}

/// Every process below `root` in the process tree.
#[cfg(target_os = "linux")]
fn descendant_pids(root: u32) -> Vec<u32> {
    let entries = match std::fs::read_dir("/proc") {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut parents = Vec::new();
    for entry in entries.flatten() {
        let Ok(pid) = entry.file_name().to_string_lossy().parse::<u32>() else {
            continue;
        };
        let Ok(stat) = std::fs::read_to_string(entry.path().join("stat")) else {
            continue;
        };
        if let Some(ppid) = parse_ppid(&stat) {
            parents.push((pid, ppid));
        }
    }

    let mut found = Vec::new();
    let mut pending = vec![root];
    while let Some(parent) = pending.pop() {
        for &(pid, ppid) in &parents {
            if ppid == parent && !found.contains(&pid) {
                found.push(pid);
                pending.push(pid);
            }
        }
    }
    found
}

#[cfg(not(target_os = "linux"))]
fn descendant_pids(_root: u32) -> Vec<u32> {
    Vec::new()
}

/// Parent pid from the contents of `/proc/<pid>/stat`.
#[cfg(target_os = "linux")]
fn parse_ppid(stat: &str) -> Option<u32> {
    // The command name may contain spaces and parentheses
    let rest = &stat[stat.rfind(')')? + 1..];
    rest.split_whitespace().nth(1)?.parse().ok()
}
