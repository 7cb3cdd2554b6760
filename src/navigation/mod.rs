//! The navigation controller.
//!
//! This module is the stateful shell around the core contracts:
//! - `StateMachine` owns the registry and the live stack and drives every
//!   lifecycle call
//! - `Navigator` queues commands for the owning thread to apply
//! - `NavigationError` is the error taxonomy shared by all operations

mod command;
mod error;
mod machine;

pub use command::{NavigationCommand, Navigator};
pub use error::NavigationError;
pub use machine::{BoxedState, StateMachine};
