//! Widget context
//!
//! Owns per-widget interaction state machines and dirty flags. Widgets hold
//! their [`WidgetId`] and reach their FSM through the context, so the host
//! can inspect and drive all widgets from one place.

use segstrip_core::fsm::{EventId, StateId, StateMachine};
use slotmap::SlotMap;

use crate::widget::WidgetId;

struct WidgetEntry {
    fsm: StateMachine,
    dirty: bool,
}

/// Registry of live widgets and their state machines
pub struct WidgetContext {
    widgets: SlotMap<WidgetId, WidgetEntry>,
}

impl WidgetContext {
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
        }
    }

    /// Register a widget with its interaction state machine
    pub fn register_widget_with_fsm(&mut self, fsm: StateMachine) -> WidgetId {
        self.widgets.insert(WidgetEntry { fsm, dirty: true })
    }

    /// Remove a widget
    pub fn remove_widget(&mut self, id: WidgetId) {
        self.widgets.remove(id);
    }

    /// Check if a widget is registered
    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Current FSM state of a widget
    pub fn get_fsm_state(&self, id: WidgetId) -> Option<StateId> {
        self.widgets.get(id).map(|e| e.fsm.current_state())
    }

    /// Send an event to a widget's FSM
    pub fn send_fsm(&mut self, id: WidgetId, event: EventId) -> Option<StateId> {
        self.widgets.get_mut(id).map(|e| e.fsm.send(event))
    }

    /// Mark a widget as needing redraw
    pub fn mark_dirty(&mut self, id: WidgetId) {
        if let Some(entry) = self.widgets.get_mut(id) {
            entry.dirty = true;
        }
    }

    /// Read and clear a widget's dirty flag
    pub fn take_dirty(&mut self, id: WidgetId) -> bool {
        self.widgets
            .get_mut(id)
            .map(|e| std::mem::take(&mut e.dirty))
            .unwrap_or(false)
    }

    /// Number of registered widgets
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }
}

impl Default for WidgetContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: StateId = 0;
    const ANIMATING: StateId = 1;
    const ACTIVATE: EventId = 1;

    #[test]
    fn test_register_and_dispatch() {
        let mut ctx = WidgetContext::new();
        let fsm = StateMachine::builder(IDLE).on(IDLE, ACTIVATE, ANIMATING).build();
        let id = ctx.register_widget_with_fsm(fsm);

        assert!(ctx.is_registered(id));
        assert_eq!(ctx.get_fsm_state(id), Some(IDLE));

        ctx.send_fsm(id, ACTIVATE);
        assert_eq!(ctx.get_fsm_state(id), Some(ANIMATING));

        ctx.remove_widget(id);
        assert!(!ctx.is_registered(id));
        assert_eq!(ctx.get_fsm_state(id), None);
    }

    #[test]
    fn test_dirty_flag_is_cleared_on_read() {
        let mut ctx = WidgetContext::new();
        let id = ctx.register_widget_with_fsm(StateMachine::builder(IDLE).build());

        // Newly registered widgets need an initial draw
        assert!(ctx.take_dirty(id));
        assert!(!ctx.take_dirty(id));

        ctx.mark_dirty(id);
        assert!(ctx.take_dirty(id));
    }
}
