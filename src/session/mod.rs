//! # Session Module
//!
//! Runs a target's command with the real terminal attached, under a deadline.
//!
//! The controller talks to a [`SessionRunner`] so the process backend can be
//! swapped out in tests. [`ShellRunner`] is the production implementation and
//! delegates to [`executor::run`].

pub mod executor;

pub use executor::{run, run_command, ExecutionOutcome, SessionReport, KILL_GRACE};

use crate::target::Target;
use std::time::Duration;

/// Runs one session to completion and reports how it ended.
#[allow(async_fn_in_trait)]
pub trait SessionRunner {
    async fn run(&mut self, target: &Target, timeout: Duration) -> ExecutionOutcome;
}

/// Spawns `bash -c <command>` with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl SessionRunner for ShellRunner {
    async fn run(&mut self, target: &Target, timeout: Duration) -> ExecutionOutcome {
        executor::run(target, timeout).await
    }
}
