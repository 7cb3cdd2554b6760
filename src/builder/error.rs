//! Build errors for the state machine builder.

use thiserror::Error;

/// Configuration mistakes found when building a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Starting state not specified. Call .starting(id) before .build()")]
    MissingStartingState,

    #[error("No states registered. Add at least one state")]
    NoStates,

    #[error("State id {id} is registered more than once")]
    DuplicateState { id: String },

    #[error("Starting state {id} is not registered")]
    UnknownStartingState { id: String },
}
