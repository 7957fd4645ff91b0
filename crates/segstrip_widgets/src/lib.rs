//! Segstrip Widget Library
//!
//! A segmented control: a single row of up to six mutually-exclusive tappable
//! segments with a spring-animated highlight indicator. Segments carry text,
//! icons, or both; selection changes are reported to a single observer
//! callback.
//!
//! The host platform owns the view hierarchy, touch dispatch, and the frame
//! loop; it forwards pointer/resize events via [`SegmentedControl::handle_event`]
//! and drives animation via [`SegmentedControl::tick`].

pub mod content;
pub mod context;
pub mod control;
pub mod error;
pub mod layout;
pub mod style;
pub mod view;
pub mod widget;

pub use content::{ContentType, Icon, SegmentModel, MAX_SEGMENTS};
pub use context::WidgetContext;
pub use control::{segmented, segmented_hybrid, segmented_icons, SegmentedControl};
pub use error::{Result, WidgetError};
pub use style::{Font, HighlightStyle, StyleConfig};
pub use widget::WidgetId;
