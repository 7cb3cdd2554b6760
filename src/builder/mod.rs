//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder that validates the whole
//! configuration up front, and the `state_ids!` macro for declaring
//! enum identity keys.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::core::{StateId, StateView, ViewState};
use crate::navigation::BoxedState;

/// Box a view-backed state for [`StateMachineBuilder::states`].
///
/// # Example
///
/// ```
/// use navstack::builder::{view_state, StateMachineBuilder};
/// use navstack::core::VisibilityView;
///
/// let screens = ["home", "settings"]
///     .into_iter()
///     .map(|id| view_state(id, VisibilityView::new()));
///
/// let machine = StateMachineBuilder::new()
///     .states(screens)
///     .starting("home")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.registered_count(), 2);
/// ```
pub fn view_state<Id, V>(id: Id, view: V) -> BoxedState<Id>
where
    Id: StateId,
    V: StateView + 'static,
{
    Box::new(ViewState::new(id, view))
}
