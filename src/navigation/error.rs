//! Navigation error types.

use thiserror::Error;

/// Errors raised by the navigation machine.
///
/// `DuplicateKey` and `IllegalStart` are set-up mistakes. `NotFound` and
/// `AlreadyActive` are runtime navigation mistakes: they are logged and
/// returned, and the machine stays usable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// A state is already registered under this id
    #[error("A state with the same id already exists: {id}")]
    DuplicateKey { id: String },

    /// `start` was called before any starting state was set
    #[error("No starting state has been defined")]
    IllegalStart,

    /// Navigation target is not registered
    #[error("The expected state does not exist: {id}")]
    NotFound { id: String },

    /// Pushed state is already on the stack
    #[error("State is already on the navigation stack: {id}")]
    AlreadyActive { id: String },
}

impl NavigationError {
    pub(crate) fn duplicate_key(id: &impl std::fmt::Debug) -> Self {
        Self::DuplicateKey {
            id: format!("{id:?}"),
        }
    }

    pub(crate) fn not_found(id: &impl std::fmt::Debug) -> Self {
        Self::NotFound {
            id: format!("{id:?}"),
        }
    }

    pub(crate) fn already_active(id: &impl std::fmt::Debug) -> Self {
        Self::AlreadyActive {
            id: format!("{id:?}"),
        }
    }

    /// Check if the error comes from set-up rather than navigation.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. } | Self::IllegalStart)
    }
}
