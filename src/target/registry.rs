use super::Target;
use thiserror::Error;

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no targets configured; add at least one entry with a name and a command")]
    EmptyRegistry,
}

/// Ordered list of targets plus the selection cursor.
///
/// A registry is never empty: [`TargetRegistry::new`] and
/// [`TargetRegistry::load`] reject an empty list, so `0 <= cursor < len`
/// holds for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct TargetRegistry {
    targets: Vec<Target>,
    cursor: usize,
}

impl TargetRegistry {
    pub fn new(targets: Vec<Target>) -> Result<Self, RegistryError> {
        if targets.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        Ok(Self { targets, cursor: 0 })
    }

    /// Replace all targets and reset the cursor to the first entry.
    /// On error the registry is left untouched.
    pub fn load(&mut self, targets: Vec<Target>) -> Result<(), RegistryError> {
        if targets.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        self.targets = targets;
        self.cursor = 0;
        Ok(())
    }

    /// Move the cursor one step, stopping at either end of the list
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            Direction::Down => {
                if self.cursor < self.targets.len() - 1 {
                    self.cursor += 1;
                }
            }
        }
    }

    pub fn current(&self) -> &Target {
        &self.targets[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }
}
