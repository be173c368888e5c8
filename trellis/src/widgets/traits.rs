//! Shared widget traits.

use super::events::{EventResult, EventSink};

/// Type-erased interface shared by every widget.
///
/// Registry factories hand out `Box<dyn AnyWidget>`, so hosts can hold
/// widgets without knowing their concrete type.
pub trait AnyWidget: Send + Sync {
    /// Get the unique ID as a string (for node binding).
    fn id(&self) -> String;

    /// Registered widget name, e.g. `"checkbox"`.
    fn kind(&self) -> &'static str;

    /// Check if the widget state has changed and needs re-render.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after rendering.
    fn clear_dirty(&self);

    /// Whether the widget can receive focus.
    fn is_focusable(&self) -> bool {
        true
    }

    /// Handle a click on the widget as a whole.
    fn dispatch_click(&self, _cx: &dyn EventSink) -> EventResult {
        EventResult::Ignored
    }
}
