//! Queued navigation commands.
//!
//! The machine is single-threaded and lifecycle callbacks cannot borrow it
//! while it is driving them. Anything that wants to navigate from such a
//! context (a dialog's cancel button, a worker thread finishing a load)
//! holds a [`Navigator`] and enqueues a command; the owning thread applies
//! them with [`StateMachine::process_pending`](crate::navigation::StateMachine::process_pending).

use std::sync::mpsc::Sender;

/// A navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationCommand<Id> {
    /// Navigate to the starting state.
    Start,
    /// Replace the whole stack with this state.
    Change(Id),
    /// Push this state over the current top.
    Push(Id),
    /// Pop the current top.
    Pop,
}

/// Handle for enqueuing navigation commands.
///
/// Cloneable, and `Send` whenever the id type is, so it can be handed to
/// states, views and other threads.
#[derive(Debug)]
pub struct Navigator<Id> {
    sender: Sender<NavigationCommand<Id>>,
}

impl<Id> Clone for Navigator<Id> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<Id> Navigator<Id> {
    pub(crate) fn new(sender: Sender<NavigationCommand<Id>>) -> Self {
        Self { sender }
    }

    /// Enqueue a command.
    ///
    /// Returns `false` if the machine has been dropped.
    pub fn send(&self, command: NavigationCommand<Id>) -> bool {
        self.sender.send(command).is_ok()
    }

    pub fn start(&self) -> bool {
        self.send(NavigationCommand::Start)
    }

    pub fn change_state(&self, id: Id) -> bool {
        self.send(NavigationCommand::Change(id))
    }

    pub fn push_state(&self, id: Id) -> bool {
        self.send(NavigationCommand::Push(id))
    }

    pub fn pop_state(&self) -> bool {
        self.send(NavigationCommand::Pop)
    }
}
