//! Base widget types

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a widget registered with a [`crate::WidgetContext`]
    pub struct WidgetId;
}
