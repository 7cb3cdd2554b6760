//! Property-based tests for the navigation machine.
//!
//! These tests use proptest to drive the machine with random command
//! sequences and check the stack discipline against a simple model.

use navstack::core::{LifecyclePhase, State};
use navstack::{NavigationError, StateMachine};
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const REGISTERED: [u8; 3] = [0, 1, 2];
const UNREGISTERED: u8 = 3;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Hook {
    Enter,
    Exit,
    Pause,
    Resume,
}

#[derive(Default)]
struct Tracker {
    events: Vec<(u8, Hook)>,
    phases: HashMap<u8, LifecyclePhase>,
    violations: Vec<String>,
    entered_tags: Vec<&'static str>,
}

type Shared = Rc<RefCell<Tracker>>;

struct Tracked {
    id: u8,
    tag: &'static str,
    tracker: Shared,
}

impl Tracked {
    fn hook(&self, hook: Hook) {
        let mut tracker = self.tracker.borrow_mut();
        let current = tracker
            .phases
            .get(&self.id)
            .copied()
            .unwrap_or(LifecyclePhase::Dormant);

        let next = match (current, hook) {
            (LifecyclePhase::Dormant, Hook::Enter) => LifecyclePhase::Active,
            (LifecyclePhase::Active, Hook::Pause) => LifecyclePhase::Paused,
            (LifecyclePhase::Paused, Hook::Resume) => LifecyclePhase::Active,
            (LifecyclePhase::Active | LifecyclePhase::Paused, Hook::Exit) => {
                LifecyclePhase::Dormant
            }
            (phase, hook) => {
                tracker
                    .violations
                    .push(format!("{:?} received in {:?} by {}", hook, phase, self.id));
                phase
            }
        };

        tracker.phases.insert(self.id, next);
        tracker.events.push((self.id, hook));
        if hook == Hook::Enter {
            tracker.entered_tags.push(self.tag);
        }
    }
}

impl State for Tracked {
    type Id = u8;

    fn id(&self) -> &u8 {
        &self.id
    }

    fn enter(&mut self) {
        self.hook(Hook::Enter);
    }

    fn exit(&mut self) {
        self.hook(Hook::Exit);
    }

    fn pause(&mut self) {
        self.hook(Hook::Pause);
    }

    fn resume(&mut self) {
        self.hook(Hook::Resume);
    }
}

#[derive(Clone, Debug)]
enum Op {
    Change(u8),
    Push(u8),
    Pop,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..=UNREGISTERED).prop_map(Op::Change),
        (0..=UNREGISTERED).prop_map(Op::Push),
        Just(Op::Pop),
    ]
}

fn tracked_machine() -> (StateMachine<u8>, Shared) {
    let tracker: Shared = Rc::new(RefCell::new(Tracker::default()));
    let mut machine = StateMachine::new();
    for id in REGISTERED {
        machine
            .register(Tracked {
                id,
                tag: "original",
                tracker: Rc::clone(&tracker),
            })
            .unwrap();
    }
    (machine, tracker)
}

/// Expected stack after applying `op` to `model`.
fn apply_model(model: &mut Vec<u8>, op: &Op) {
    let registered = |id: &u8| REGISTERED.contains(id);
    match op {
        Op::Change(id) => {
            model.clear();
            if registered(id) {
                model.push(*id);
            }
        }
        Op::Push(id) => {
            if registered(id) && !model.contains(id) {
                model.push(*id);
            }
        }
        Op::Pop => {
            model.pop();
        }
    }
}

fn run(machine: &mut StateMachine<u8>, op: &Op) {
    match op {
        Op::Change(id) => {
            let _ = machine.change_state(*id);
        }
        Op::Push(id) => {
            let _ = machine.push_state(*id);
        }
        Op::Pop => {
            machine.pop_state();
        }
    }
}

prop_compose! {
    fn arbitrary_ops()(ops in prop::collection::vec(arbitrary_op(), 0..30)) -> Vec<Op> {
        ops
    }
}

proptest! {
    #[test]
    fn stack_matches_model(ops in arbitrary_ops()) {
        let (mut machine, _tracker) = tracked_machine();
        let mut model = Vec::new();

        for op in &ops {
            run(&mut machine, op);
            apply_model(&mut model, op);
            prop_assert_eq!(machine.stack(), model.as_slice());
        }
    }

    #[test]
    fn only_top_of_stack_is_active(ops in arbitrary_ops()) {
        let (mut machine, tracker) = tracked_machine();

        for op in &ops {
            run(&mut machine, op);

            let tracker = tracker.borrow();
            prop_assert!(tracker.violations.is_empty(), "{:?}", tracker.violations);

            let active: Vec<u8> = tracker
                .phases
                .iter()
                .filter(|(_, phase)| **phase == LifecyclePhase::Active)
                .map(|(id, _)| *id)
                .collect();
            prop_assert!(active.len() <= 1);
            prop_assert_eq!(active.first(), machine.current());

            for id in REGISTERED {
                let observed = tracker
                    .phases
                    .get(&id)
                    .copied()
                    .unwrap_or(LifecyclePhase::Dormant);
                prop_assert_eq!(observed, machine.phase(&id));
            }
        }
    }

    #[test]
    fn change_exits_everything_before_entering(
        ops in arbitrary_ops(),
        target in 0..=UNREGISTERED,
    ) {
        let (mut machine, tracker) = tracked_machine();
        for op in &ops {
            run(&mut machine, op);
        }
        let previous: Vec<u8> = machine.stack().to_vec();
        tracker.borrow_mut().events.clear();

        let _ = machine.change_state(target);

        let mut expected: Vec<(u8, Hook)> =
            previous.iter().rev().map(|id| (*id, Hook::Exit)).collect();
        if REGISTERED.contains(&target) {
            expected.push((target, Hook::Enter));
        }
        prop_assert_eq!(&tracker.borrow().events, &expected);
    }

    #[test]
    fn push_then_pop_pauses_and_resumes_once(
        ops in arbitrary_ops(),
        overlay in 0..3u8,
    ) {
        let (mut machine, tracker) = tracked_machine();
        for op in &ops {
            run(&mut machine, op);
        }
        let below = machine.current().copied();
        tracker.borrow_mut().events.clear();

        if machine.push_state(overlay).is_ok() {
            machine.pop_state();

            let events = tracker.borrow().events.clone();
            let mut expected = Vec::new();
            if let Some(below) = below {
                expected.push((below, Hook::Pause));
            }
            expected.push((overlay, Hook::Enter));
            expected.push((overlay, Hook::Exit));
            if let Some(below) = below {
                expected.push((below, Hook::Resume));
            }
            prop_assert_eq!(events, expected);
            prop_assert_eq!(machine.current().copied(), below);
        } else {
            prop_assert!(tracker.borrow().events.is_empty());
        }
    }

    #[test]
    fn unregistered_change_empties_stack(ops in arbitrary_ops()) {
        let (mut machine, _tracker) = tracked_machine();
        for op in &ops {
            run(&mut machine, op);
        }

        let result = machine.change_state(UNREGISTERED);

        prop_assert!(
            matches!(result, Err(NavigationError::NotFound { .. })),
            "expected NotFound, got {:?}",
            result
        );
        prop_assert!(machine.is_empty());
        prop_assert_eq!(machine.registered_count(), REGISTERED.len());
    }

    #[test]
    fn duplicate_registration_keeps_first(id in 0..3u8) {
        let (mut machine, tracker) = tracked_machine();

        let result = machine.register(Tracked {
            id,
            tag: "impostor",
            tracker: Rc::clone(&tracker),
        });

        prop_assert!(
            matches!(result, Err(NavigationError::DuplicateKey { .. })),
            "expected DuplicateKey, got {:?}",
            result
        );
        prop_assert_eq!(machine.registered_count(), REGISTERED.len());

        machine.change_state(id).unwrap();
        prop_assert_eq!(&tracker.borrow().entered_tags, &vec!["original"]);
    }
}
