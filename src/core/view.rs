//! Activatable surfaces driven by view-backed states.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// A surface that can be shown and hidden.
///
/// Activation happens when the owning state is entered or resumed,
/// deactivation when it is exited or paused. Both calls must be safe to repeat:
/// activating an active view simply re-asserts it.
pub trait StateView {
    /// Make the surface visible and interactive.
    fn activate(&mut self);

    /// Hide or disable the surface.
    fn deactivate(&mut self);
}

impl<V: StateView + ?Sized> StateView for Box<V> {
    fn activate(&mut self) {
        (**self).activate();
    }

    fn deactivate(&mut self) {
        (**self).deactivate();
    }
}

impl<V: StateView + ?Sized> StateView for &mut V {
    fn activate(&mut self) {
        (**self).activate();
    }

    fn deactivate(&mut self) {
        (**self).deactivate();
    }
}

/// Shared views let the application shell keep a handle on the surface
/// while the machine drives it.
impl<V: StateView + ?Sized> StateView for Rc<RefCell<V>> {
    fn activate(&mut self) {
        self.borrow_mut().activate();
    }

    fn deactivate(&mut self) {
        self.borrow_mut().deactivate();
    }
}

/// A visibility flag shared between a state and whoever renders it.
///
/// Clones observe the same flag, so the shell keeps one clone and hands
/// the other to a [`ViewState`](crate::core::ViewState).
///
/// # Example
///
/// ```rust
/// use navstack::core::{StateView, VisibilityView};
///
/// let mut dialog = VisibilityView::new();
/// let shell_handle = dialog.clone();
///
/// dialog.activate();
/// assert!(shell_handle.is_visible());
///
/// dialog.deactivate();
/// assert!(!shell_handle.is_visible());
/// ```
#[derive(Clone, Default)]
pub struct VisibilityView {
    visible: Rc<Cell<bool>>,
}

impl VisibilityView {
    /// Create a hidden view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the view is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl StateView for VisibilityView {
    fn activate(&mut self) {
        self.visible.set(true);
    }

    fn deactivate(&mut self) {
        self.visible.set(false);
    }
}

impl fmt::Debug for VisibilityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityView")
            .field("visible", &self.visible.get())
            .finish()
    }
}

/// A view assembled from two closures.
///
/// Handy for attaching a surface to a parent container on activation and
/// detaching it on deactivation without writing a dedicated type.
pub struct FnView<A, D> {
    on_activate: A,
    on_deactivate: D,
}

impl<A, D> FnView<A, D>
where
    A: FnMut(),
    D: FnMut(),
{
    pub fn new(on_activate: A, on_deactivate: D) -> Self {
        Self {
            on_activate,
            on_deactivate,
        }
    }
}

impl<A, D> StateView for FnView<A, D>
where
    A: FnMut(),
    D: FnMut(),
{
    fn activate(&mut self) {
        (self.on_activate)();
    }

    fn deactivate(&mut self) {
        (self.on_deactivate)();
    }
}
