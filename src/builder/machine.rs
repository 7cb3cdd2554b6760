//! Builder for constructing navigation machines.

use crate::builder::error::BuildError;
use crate::core::{State, StateId, DEFAULT_HISTORY_LIMIT};
use crate::navigation::{BoxedState, StateMachine};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing navigation machines with a fluent API.
///
/// Unlike registering states one by one, building validates the whole
/// configuration at once and reports every mistake, not just the first.
///
/// # Example
///
/// ```rust
/// use navstack::builder::StateMachineBuilder;
/// use navstack::core::{ViewState, VisibilityView};
///
/// let mut machine = StateMachineBuilder::new()
///     .state(ViewState::new("home", VisibilityView::new()))
///     .state(ViewState::new("settings", VisibilityView::new()))
///     .starting("home")
///     .build()
///     .unwrap();
///
/// machine.start().unwrap();
/// assert_eq!(machine.current(), Some(&"home"));
/// ```
pub struct StateMachineBuilder<Id: StateId> {
    states: Vec<BoxedState<Id>>,
    starting: Option<Id>,
    history_limit: usize,
}

impl<Id: StateId> StateMachineBuilder<Id> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            starting: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Add a state.
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<Id = Id> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Add several pre-boxed states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = BoxedState<Id>>,
    {
        self.states.extend(states);
        self
    }

    /// Set the starting state (required).
    pub fn starting(mut self, id: Id) -> Self {
        self.starting = Some(id);
        self
    }

    /// Set how many navigation records the machine keeps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Check the configuration, accumulating ALL errors.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        if self.states.is_empty() {
            checks.push(Validation::fail(BuildError::NoStates));
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for state in &self.states {
            let id = state.id();
            if !seen.insert(id) && reported.insert(id) {
                checks.push(Validation::fail(BuildError::DuplicateState {
                    id: format!("{id:?}"),
                }));
            }
        }

        match &self.starting {
            None => checks.push(Validation::fail(BuildError::MissingStartingState)),
            Some(id) if !seen.contains(id) => {
                checks.push(Validation::fail(BuildError::UnknownStartingState {
                    id: format!("{id:?}"),
                }));
            }
            Some(_) => {}
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the machine, registering every state and the starting state.
    /// Returns every configuration error if validation fails.
    pub fn build(self) -> Result<StateMachine<Id>, Vec<BuildError>> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(errors.iter().cloned().collect());
        }

        let Some(starting) = self.starting else {
            return Err(vec![BuildError::MissingStartingState]);
        };

        let mut machine = StateMachine::with_history_limit(self.history_limit);
        for state in self.states {
            let id = state.id().clone();
            machine.register_boxed(state).map_err(|_| {
                vec![BuildError::DuplicateState {
                    id: format!("{id:?}"),
                }]
            })?;
        }
        machine.set_starting_state(starting);

        Ok(machine)
    }
}

impl<Id: StateId> Default for StateMachineBuilder<Id> {
    fn default() -> Self {
        Self::new()
    }
}
