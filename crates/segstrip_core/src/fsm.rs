//! State machine runtime
//!
//! Flat statecharts for widget interaction states, with entry/exit actions
//! and transition actions. The segmented control drives its indicator with a
//! two-state machine (idle / animating); the runtime itself is
//! widget-agnostic.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// An action function executed on transitions or state entry/exit
pub type Action = Box<dyn FnMut() + Send>;

/// A transition in the state machine
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
    pub actions: SmallVec<[Action; 2]>,
}

impl Transition {
    /// Create a simple transition without actions
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            actions: SmallVec::new(),
        }
    }

    /// Add an action to execute during transition
    pub fn with_action<F: FnMut() + Send + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<StateId, Vec<Action>>,
    exit_callbacks: FxHashMap<StateId, Vec<Action>>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add an entry action for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: StateId, action: F) -> Self {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Add an exit action for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(mut self, state: StateId, action: F) -> Self {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            entry_callbacks: self.entry_callbacks,
            exit_callbacks: self.exit_callbacks,
            history: Vec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine {
    current_state: StateId,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<StateId, Vec<Action>>,
    exit_callbacks: FxHashMap<StateId, Vec<Action>>,
    /// History of state transitions (for debugging)
    history: Vec<(StateId, EventId, StateId)>,
}

impl StateMachine {
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: StateId, transitions: Vec<Transition>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
            history: Vec::new(),
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Get transition history
    pub fn history(&self) -> &[(StateId, EventId, StateId)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from the current state
    pub fn can_send(&self, event: EventId) -> bool {
        let current = self.current_state;
        self.transitions
            .iter()
            .any(|t| t.from_state == current && t.event == event)
    }

    /// Send an event to the state machine, potentially triggering a
    /// transition. Returns the (possibly unchanged) current state.
    ///
    /// Self transitions re-run exit, transition, and entry actions, so a
    /// state that models an in-flight animation can be restarted in place.
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;

        let transition_idx = self
            .transitions
            .iter()
            .position(|t| t.from_state == current && t.event == event);

        let Some(idx) = transition_idx else {
            return current;
        };

        let to_state = self.transitions[idx].to_state;

        if let Some(callbacks) = self.exit_callbacks.get_mut(&current) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        for action in self.transitions[idx].actions.iter_mut() {
            action();
        }

        self.current_state = to_state;
        self.history.push((current, event, to_state));
        tracing::trace!(from = current, event, to = to_state, "fsm transition");

        if let Some(callbacks) = self.entry_callbacks.get_mut(&to_state) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        to_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const IDLE: StateId = 0;
    const ANIMATING: StateId = 1;

    const ACTIVATE: EventId = 1;
    const SETTLED: EventId = 2;

    fn indicator_fsm() -> StateMachine {
        StateMachine::builder(IDLE)
            .on(IDLE, ACTIVATE, ANIMATING)
            .on(ANIMATING, ACTIVATE, ANIMATING)
            .on(ANIMATING, SETTLED, IDLE)
            .build()
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = indicator_fsm();
        assert_eq!(fsm.current_state(), IDLE);

        fsm.send(ACTIVATE);
        assert_eq!(fsm.current_state(), ANIMATING);

        fsm.send(SETTLED);
        assert_eq!(fsm.current_state(), IDLE);
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = indicator_fsm();

        // SETTLED is not valid in IDLE state
        fsm.send(SETTLED);
        assert_eq!(fsm.current_state(), IDLE);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_self_transition_restarts_state() {
        let entry_count = Arc::new(Mutex::new(0));
        let entry_clone = entry_count.clone();

        let mut fsm = StateMachine::builder(IDLE)
            .on(IDLE, ACTIVATE, ANIMATING)
            .on(ANIMATING, ACTIVATE, ANIMATING)
            .on_enter(ANIMATING, move || {
                *entry_clone.lock().unwrap() += 1;
            })
            .build();

        fsm.send(ACTIVATE);
        // Re-activation while animating re-enters the state
        fsm.send(ACTIVATE);
        assert_eq!(fsm.current_state(), ANIMATING);
        assert_eq!(*entry_count.lock().unwrap(), 2);
    }

    #[test]
    fn test_entry_exit_callbacks() {
        let entry_count = Arc::new(Mutex::new(0));
        let exit_count = Arc::new(Mutex::new(0));

        let entry_clone = entry_count.clone();
        let exit_clone = exit_count.clone();

        let mut fsm = StateMachine::builder(IDLE)
            .on(IDLE, ACTIVATE, ANIMATING)
            .on(ANIMATING, SETTLED, IDLE)
            .on_enter(ANIMATING, move || {
                *entry_clone.lock().unwrap() += 1;
            })
            .on_exit(ANIMATING, move || {
                *exit_clone.lock().unwrap() += 1;
            })
            .build();

        fsm.send(ACTIVATE);
        assert_eq!(*entry_count.lock().unwrap(), 1);
        assert_eq!(*exit_count.lock().unwrap(), 0);

        fsm.send(SETTLED);
        assert_eq!(*entry_count.lock().unwrap(), 1);
        assert_eq!(*exit_count.lock().unwrap(), 1);
    }

    #[test]
    fn test_transition_actions() {
        let action_count = Arc::new(Mutex::new(0));
        let action_clone = action_count.clone();

        let mut fsm = StateMachine::builder(IDLE)
            .transition(
                Transition::new(IDLE, ACTIVATE, ANIMATING).with_action(move || {
                    *action_clone.lock().unwrap() += 1;
                }),
            )
            .build();

        fsm.send(ACTIVATE);
        assert_eq!(*action_count.lock().unwrap(), 1);
    }

    #[test]
    fn test_history() {
        let mut fsm = indicator_fsm();

        fsm.send(ACTIVATE);
        fsm.send(ACTIVATE);
        fsm.send(SETTLED);

        let history = fsm.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0], (IDLE, ACTIVATE, ANIMATING));
        assert_eq!(history[1], (ANIMATING, ACTIVATE, ANIMATING));
        assert_eq!(history[2], (ANIMATING, SETTLED, IDLE));
    }

    #[test]
    fn test_can_send() {
        let fsm = indicator_fsm();

        assert!(fsm.can_send(ACTIVATE));
        assert!(!fsm.can_send(SETTLED));
    }
}
