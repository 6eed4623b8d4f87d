//! # UI Module
//!
//! The terminal side of the launcher.
//!
//! ## Components
//!
//! - [`App`] - Mode state machine, registry, and last session status
//! - [`mod@render`] - Draws the header, target list, and status footer
//! - [`terminal`] - Terminal acquire/release and the event reader seam
//! - [`controller`] - The event loop and the hand-off to a session
//! - [`theme`] - Colour pairs
//!
//! ## Layout
//!
//! ```text
//! (blank)
//!                 Jump - Target Launcher
//!   Use ↑ ↓ to select, Enter to connect, Esc or q to quit
//!   prod            <- cursor, selected colours
//!   staging
//!   bastion
//! Session "prod" ended. Returning to the target list...
//! ```

pub mod app;
pub mod controller;
pub mod render;
pub mod terminal;
pub mod theme;

pub use app::App;
pub use controller::run_app;
pub use render::render;
