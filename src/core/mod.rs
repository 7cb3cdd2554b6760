//! Core navigation types.
//!
//! This module contains the contracts the navigation machine drives:
//! - States and their identity keys via the `State` and `StateId` traits
//! - Activatable surfaces via the `StateView` trait, plus stock views
//! - `ViewState`, the default state forwarding its lifecycle to a view
//! - Bounded, immutable navigation history

mod history;
mod state;
mod view;
mod view_state;

pub use history::{NavigationHistory, NavigationKind, NavigationRecord, DEFAULT_HISTORY_LIMIT};
pub use state::{LifecyclePhase, State, StateId};
pub use view::{FnView, StateView, VisibilityView};
pub use view_state::ViewState;
