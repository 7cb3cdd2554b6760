//! Default state that forwards its lifecycle to a view.

use super::state::{State, StateId};
use super::view::StateView;
use tracing::debug;

/// A state whose whole behaviour is showing and hiding one view.
///
/// `enter` and `resume` activate the view; `exit` and `pause` deactivate it.
///
/// # Example
///
/// ```rust
/// use navstack::core::{State, ViewState, VisibilityView};
///
/// let view = VisibilityView::new();
/// let mut settings = ViewState::new("settings", view.clone());
///
/// settings.enter();
/// assert!(view.is_visible());
///
/// settings.pause();
/// assert!(!view.is_visible());
/// ```
#[derive(Debug)]
pub struct ViewState<Id, V> {
    id: Id,
    view: V,
}

impl<Id: StateId, V: StateView> ViewState<Id, V> {
    pub fn new(id: Id, view: V) -> Self {
        Self { id, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consume the state, returning its view.
    pub fn into_view(self) -> V {
        self.view
    }
}

impl<Id: StateId, V: StateView> State for ViewState<Id, V> {
    type Id = Id;

    fn id(&self) -> &Id {
        &self.id
    }

    fn enter(&mut self) {
        debug!(state = ?self.id, "Entering");
        self.view.activate();
    }

    fn exit(&mut self) {
        debug!(state = ?self.id, "Exiting");
        self.view.deactivate();
    }

    fn pause(&mut self) {
        debug!(state = ?self.id, "Pausing");
        self.view.deactivate();
    }

    fn resume(&mut self) {
        debug!(state = ?self.id, "Resuming");
        self.view.activate();
    }
}
