//! Segstrip Core Primitives
//!
//! This crate provides the foundational primitives for the segstrip widget
//! workspace:
//!
//! - **Geometry**: points, sizes, rects, insets, and colors for frame math
//! - **Events**: unified pointer/resize event handling across platforms
//! - **State Machines**: flat statecharts for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use segstrip_core::geometry::{Point, Rect};
//!
//! let frame = Rect::new(100.0, 0.0, 100.0, 50.0);
//! assert!(frame.contains(Point::new(150.0, 25.0)));
//! assert_eq!(frame.center(), Point::new(150.0, 25.0));
//! ```

pub mod events;
pub mod fsm;
pub mod geometry;

pub use events::{Event, EventData, EventType};
pub use fsm::{EventId, StateId, StateMachine, Transition};
pub use geometry::{Color, EdgeInsets, Point, Rect, Size};
