//! Core State trait for navigable states.
//!
//! A state is a unit of application logic the navigation machine can put on
//! its stack. The machine drives it through `enter`, `pause`, `resume` and
//! `exit`; the state only has to react.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identity key of a registrable state.
///
/// Anything cheap to clone, hashable and debuggable qualifies: string slices,
/// owned strings, integers, or enums declared with [`state_ids!`](crate::state_ids).
pub trait StateId: Clone + Eq + Hash + Debug + 'static {}

impl<T> StateId for T where T: Clone + Eq + Hash + Debug + 'static {}

/// Trait for navigable states.
///
/// The id must stay the same for the whole lifetime of the instance: it is the
/// key the machine registers the state under and the value kept on the stack.
///
/// # Lifecycle
///
/// ```text
/// Dormant --enter--> Active --pause--> Paused --resume--> Active --exit--> Dormant
/// ```
///
/// `Active --exit--> Dormant` is valid without an intermediate pause, and a
/// state may be entered again after it exited.
///
/// # Example
///
/// ```rust
/// use navstack::core::State;
///
/// struct Home {
///     visits: usize,
/// }
///
/// impl State for Home {
///     type Id = &'static str;
///
///     fn id(&self) -> &Self::Id {
///         &"home"
///     }
///
///     fn enter(&mut self) {
///         self.visits += 1;
///     }
///
///     fn exit(&mut self) {}
/// }
/// ```
pub trait State {
    /// Key type used to register and navigate to this state.
    type Id: StateId;

    /// Get the state's identity key.
    fn id(&self) -> &Self::Id;

    /// Called when the state becomes the new top of the stack.
    fn enter(&mut self);

    /// Called when the state is permanently removed from the stack.
    fn exit(&mut self);

    /// Called when another state is pushed above this one.
    ///
    /// Default implementation does nothing.
    fn pause(&mut self) {}

    /// Called when this state becomes the top again after a pop.
    ///
    /// Default implementation does nothing.
    fn resume(&mut self) {}
}

/// Lifecycle phase of a state, as seen from the machine's stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Not on the stack.
    Dormant,
    /// Top of the stack.
    Active,
    /// On the stack, below the top.
    Paused,
}

impl LifecyclePhase {
    /// Check if the state is currently on the stack.
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Dormant)
    }
}
