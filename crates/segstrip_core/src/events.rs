//! Event dispatch types
//!
//! Unified event handling across host platforms. The host forwards raw
//! pointer and resize events; widgets hit-test and react on the main event
//! loop. All mutation happens single-threaded in response to these events.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const RESIZE: EventType = 40;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Widget ID of the dispatch target (0 when broadcast)
    pub target: u64,
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
        pressure: f32,
    },
    Resize {
        width: f32,
        height: f32,
    },
    None,
}

impl Event {
    /// A pointer-up event at widget-local coordinates
    pub fn pointer_up(x: f32, y: f32) -> Self {
        Self {
            event_type: event_types::POINTER_UP,
            target: 0,
            data: EventData::Pointer {
                x,
                y,
                button: 0,
                pressure: 1.0,
            },
            timestamp: 0,
        }
    }

    /// A pointer-down event at widget-local coordinates
    pub fn pointer_down(x: f32, y: f32) -> Self {
        Self {
            event_type: event_types::POINTER_DOWN,
            target: 0,
            data: EventData::Pointer {
                x,
                y,
                button: 0,
                pressure: 1.0,
            },
            timestamp: 0,
        }
    }

    /// A container-resize event
    pub fn resize(width: f32, height: f32) -> Self {
        Self {
            event_type: event_types::RESIZE,
            target: 0,
            data: EventData::Resize { width, height },
            timestamp: 0,
        }
    }

    /// Pointer location, if this event carries one
    pub fn pointer_position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}
