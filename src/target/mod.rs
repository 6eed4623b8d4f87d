//! # Target Module
//!
//! Named, selectable entries and the registry that holds them.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Target`] | A display name plus the shell command it runs |
//! | [`TargetRegistry`] | Ordered targets with a clamped cursor |
//! | [`Direction`] | Cursor movement (`Up` / `Down`) |
//! | [`RegistryError`] | Load failures (empty target list) |

pub mod registry;

pub use registry::{Direction, RegistryError, TargetRegistry};

use serde::{Deserialize, Serialize};

/// A selectable launcher entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    /// Label shown in the list
    pub name: String,
    /// Command string handed to `bash -c`
    pub command: String,
}

impl Target {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}
