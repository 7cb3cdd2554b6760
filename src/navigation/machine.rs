//! Stack-based navigation machine.

use crate::core::{
    LifecyclePhase, NavigationHistory, NavigationKind, NavigationRecord, State, StateId,
    DEFAULT_HISTORY_LIMIT,
};
use crate::navigation::command::{NavigationCommand, Navigator};
use crate::navigation::error::NavigationError;
use chrono::Utc;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, error, trace, warn};

/// Boxed state as stored in the registry.
pub type BoxedState<Id> = Box<dyn State<Id = Id>>;

/// Controller deciding which states are live and in what order.
///
/// States are registered once, then navigated to by id. The machine keeps a
/// LIFO stack: the top is active, everything below it is paused.
///
/// - [`change_state`](Self::change_state) exits the whole stack and enters one state.
/// - [`push_state`](Self::push_state) pauses the top and enters an overlay above it.
/// - [`pop_state`](Self::pop_state) exits the overlay and resumes what was below.
///
/// The machine is meant to live on the thread owning the UI. Other threads and
/// lifecycle callbacks navigate through a [`Navigator`].
///
/// # Example
///
/// ```rust
/// use navstack::core::{ViewState, VisibilityView};
/// use navstack::navigation::StateMachine;
///
/// let home = VisibilityView::new();
/// let settings = VisibilityView::new();
///
/// let mut machine = StateMachine::new();
/// machine.register(ViewState::new("home", home.clone())).unwrap();
/// machine.register(ViewState::new("settings", settings.clone())).unwrap();
/// machine.set_starting_state("home");
///
/// machine.start().unwrap();
/// assert!(home.is_visible());
///
/// machine.push_state("settings").unwrap();
/// assert!(!home.is_visible());
/// assert!(settings.is_visible());
///
/// machine.pop_state();
/// assert!(home.is_visible());
/// assert_eq!(machine.stack(), &["home"]);
/// ```
pub struct StateMachine<Id: StateId> {
    registered: HashMap<Id, BoxedState<Id>>,
    stack: Vec<Id>,
    starting: Option<Id>,
    history: NavigationHistory<Id>,
    sender: Sender<NavigationCommand<Id>>,
    commands: Receiver<NavigationCommand<Id>>,
}

impl<Id: StateId> StateMachine<Id> {
    /// Create an empty machine.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty machine keeping at most `limit` history records.
    pub fn with_history_limit(limit: usize) -> Self {
        let (sender, commands) = mpsc::channel();
        Self {
            registered: HashMap::new(),
            stack: Vec::new(),
            starting: None,
            history: NavigationHistory::with_limit(limit),
            sender,
            commands,
        }
    }

    /// Register a state under its own id.
    ///
    /// Fails with `DuplicateKey` if the id is taken; the registry and the
    /// stack are left untouched.
    pub fn register<S>(&mut self, state: S) -> Result<(), NavigationError>
    where
        S: State<Id = Id> + 'static,
    {
        self.register_boxed(Box::new(state))
    }

    pub fn register_boxed(&mut self, state: BoxedState<Id>) -> Result<(), NavigationError> {
        match self.registered.entry(state.id().clone()) {
            Entry::Occupied(entry) => Err(NavigationError::duplicate_key(entry.key())),
            Entry::Vacant(entry) => {
                trace!(state = ?entry.key(), "Registering state");
                entry.insert(state);
                Ok(())
            }
        }
    }

    /// Define the state used by [`start`](Self::start). Last call wins.
    ///
    /// The id is not checked here; an unknown id surfaces on `start`.
    pub fn set_starting_state(&mut self, id: Id) {
        trace!(state = ?id, "Defining starting state");
        self.starting = Some(id);
    }

    pub fn starting_state(&self) -> Option<&Id> {
        self.starting.as_ref()
    }

    /// Navigate to the starting state.
    ///
    /// Fails with `IllegalStart` if no starting state was ever set. Otherwise
    /// behaves exactly like `change_state(starting)`.
    pub fn start(&mut self) -> Result<(), NavigationError> {
        debug!("Starting the state machine");
        let starting = self.starting.clone().ok_or(NavigationError::IllegalStart)?;
        self.change_state(starting)
    }

    /// Replace the whole stack with `id`.
    ///
    /// Every live state is exited, top first, before `id` is entered. If `id`
    /// is not registered the error is logged and returned, and the stack is
    /// left empty.
    pub fn change_state(&mut self, id: Id) -> Result<(), NavigationError> {
        debug!(state = ?id, "change state");
        let from = self.stack.last().cloned();

        while let Some(top) = self.stack.pop() {
            if let Some(state) = self.registered.get_mut(&top) {
                state.exit();
            }
        }

        let result = match self.registered.get_mut(&id) {
            Some(state) => {
                self.stack.push(id);
                state.enter();
                Ok(())
            }
            None => {
                error!(state = ?id, "The expected state does not exist");
                Err(NavigationError::not_found(&id))
            }
        };

        self.record(NavigationKind::Change, from);
        result
    }

    /// Push `id` over the current top.
    ///
    /// The current top is paused, then `id` is entered. Unknown ids and ids
    /// already on the stack are rejected before anything is paused.
    pub fn push_state(&mut self, id: Id) -> Result<(), NavigationError> {
        debug!(state = ?id, "push state");

        if !self.registered.contains_key(&id) {
            error!(state = ?id, "The expected state does not exist");
            return Err(NavigationError::not_found(&id));
        }
        if self.stack.contains(&id) {
            error!(state = ?id, "State is already on the navigation stack");
            return Err(NavigationError::already_active(&id));
        }

        let from = self.stack.last().cloned();
        if let Some(state) = from.as_ref().and_then(|top| self.registered.get_mut(top)) {
            state.pause();
        }

        if let Some(state) = self.registered.get_mut(&id) {
            self.stack.push(id);
            state.enter();
        }

        self.record(NavigationKind::Push, from);
        Ok(())
    }

    /// Pop the current top and resume the state below it.
    ///
    /// Returns the popped id, or `None` when the stack was already empty
    /// (a no-op).
    pub fn pop_state(&mut self) -> Option<Id> {
        let Some(popped) = self.stack.pop() else {
            debug!("pop state on empty stack");
            return None;
        };
        debug!(state = ?popped, "pop state");

        if let Some(state) = self.registered.get_mut(&popped) {
            state.exit();
        }
        if let Some(state) = self.stack.last().and_then(|top| self.registered.get_mut(top)) {
            state.resume();
        }

        self.record(NavigationKind::Pop, Some(popped.clone()));
        Some(popped)
    }

    /// Apply a single command.
    pub fn apply(&mut self, command: NavigationCommand<Id>) -> Result<(), NavigationError> {
        match command {
            NavigationCommand::Start => self.start(),
            NavigationCommand::Change(id) => self.change_state(id),
            NavigationCommand::Push(id) => self.push_state(id),
            NavigationCommand::Pop => {
                self.pop_state();
                Ok(())
            }
        }
    }

    /// Handle for enqueuing commands from callbacks or other threads.
    pub fn navigator(&self) -> Navigator<Id> {
        Navigator::new(self.sender.clone())
    }

    /// Apply every queued command in FIFO order.
    ///
    /// Commands enqueued by lifecycle callbacks while draining are applied in
    /// the same call. A failing command does not stop the drain; all errors
    /// are returned.
    pub fn process_pending(&mut self) -> Vec<NavigationError> {
        let mut errors = Vec::new();
        while let Ok(command) = self.commands.try_recv() {
            if let Err(err) = self.apply(command) {
                warn!(error = %err, "Queued navigation failed");
                errors.push(err);
            }
        }
        errors
    }

    /// Look up a registered state.
    pub fn get_state(&self, id: &Id) -> Option<&(dyn State<Id = Id> + 'static)> {
        self.registered.get(id).map(|state| &**state)
    }

    pub fn get_state_mut(&mut self, id: &Id) -> Option<&mut (dyn State<Id = Id> + 'static)> {
        self.registered.get_mut(id).map(|state| &mut **state)
    }

    pub fn is_registered(&self, id: &Id) -> bool {
        self.registered.contains_key(id)
    }

    /// Number of registered states.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Id of the active state, if any.
    pub fn current(&self) -> Option<&Id> {
        self.stack.last()
    }

    /// Live ids, bottom of the stack first.
    pub fn stack(&self) -> &[Id] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Lifecycle phase of `id` according to the stack.
    pub fn phase(&self, id: &Id) -> LifecyclePhase {
        match self.stack.iter().position(|live| live == id) {
            Some(index) if index + 1 == self.stack.len() => LifecyclePhase::Active,
            Some(_) => LifecyclePhase::Paused,
            None => LifecyclePhase::Dormant,
        }
    }

    pub fn history(&self) -> &NavigationHistory<Id> {
        &self.history
    }

    fn record(&mut self, kind: NavigationKind, from: Option<Id>) {
        let record = NavigationRecord {
            kind,
            from,
            to: self.stack.last().cloned(),
            timestamp: Utc::now(),
            depth: self.stack.len(),
        };
        self.history = self.history.record(record);
    }
}

impl<Id: StateId> Default for StateMachine<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: StateId> fmt::Debug for StateMachine<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("registered", &self.registered.keys().collect::<Vec<_>>())
            .field("stack", &self.stack)
            .field("starting", &self.starting)
            .field("history", &self.history.len())
            .finish()
    }
}
