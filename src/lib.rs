//! Jump - a terminal launcher for remote targets
//!
//! This library provides the target registry, the session executor that runs
//! a target's command under a deadline, and the TUI that switches between the
//! two.

pub mod config;
pub mod logging;
pub mod session;
pub mod target;
pub mod ui;
