//! Navstack: a stack-based navigation state machine
//!
//! Navstack decides which logical screen of an application is live. States
//! are registered once under a stable id; the machine keeps a LIFO stack of
//! live states and drives their lifecycle hooks as the application navigates.
//!
//! # Core Concepts
//!
//! - **State**: a navigable unit with `enter`, `exit`, `pause` and `resume` hooks
//! - **StateView**: a surface a state shows and hides, see `ViewState`
//! - **StateMachine**: the controller owning the registry and the stack
//! - **Navigator**: a queue handle for navigating from callbacks or other threads
//!
//! Navigation comes in two flavours: `change_state` replaces the whole stack,
//! while `push_state` / `pop_state` layer an overlay (a dialog, a wizard) over
//! a screen that is paused meanwhile and resumed afterwards.
//!
//! # Example
//!
//! ```rust
//! use navstack::builder::StateMachineBuilder;
//! use navstack::core::{ViewState, VisibilityView};
//! use navstack::state_ids;
//!
//! state_ids! {
//!     enum Screen {
//!         Home,
//!         Settings,
//!     }
//! }
//!
//! let home = VisibilityView::new();
//! let settings = VisibilityView::new();
//!
//! let mut machine = StateMachineBuilder::new()
//!     .state(ViewState::new(Screen::Home, home.clone()))
//!     .state(ViewState::new(Screen::Settings, settings.clone()))
//!     .starting(Screen::Home)
//!     .build()
//!     .unwrap();
//!
//! machine.start().unwrap();
//! machine.push_state(Screen::Settings).unwrap();
//! assert!(settings.is_visible());
//! assert!(!home.is_visible());
//!
//! machine.pop_state();
//! assert!(home.is_visible());
//! ```

pub mod builder;
pub mod core;
pub mod navigation;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{LifecyclePhase, State, StateId, StateView, ViewState};
pub use crate::navigation::{NavigationCommand, NavigationError, Navigator, StateMachine};
