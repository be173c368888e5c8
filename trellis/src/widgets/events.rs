//! Widget event handling types and traits.
//!
//! Widgets never apply the changes they request. They push a [`WidgetEvent`]
//! into an [`EventSink`] and the owner decides what to do with it: clamp it,
//! apply it, or drop it.
//!
//! The usual sink is an [`EventQueue`], which the owner drains after each
//! interaction. Plain closures work too:
//!
//! ```
//! use trellis::widgets::events::{EventQueue, EventSink, WidgetEvent, WidgetEventKind};
//!
//! let queue = EventQueue::new();
//! queue.push_event(WidgetEvent::new(WidgetEventKind::PageIndexChange(3), "pager"));
//! assert_eq!(queue.drain().len(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// Widget Event Types
// =============================================================================

/// Identifies what a widget is asking its owner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEventKind {
    /// Value changed (checkbox state, group selection)
    Change,
    /// A new 1-based page index was requested. Not validated, may be out of range.
    PageIndexChange(i64),
    /// A new page size was requested.
    PageSizeChange(usize),
}

/// A widget event to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEvent {
    /// Which kind of event
    pub kind: WidgetEventKind,
    /// Widget ID that triggered the event
    pub widget_id: String,
}

impl WidgetEvent {
    /// Create a new widget event.
    pub fn new(kind: WidgetEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
        }
    }
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

// =============================================================================
// Event Sinks
// =============================================================================

/// Destination for outbound widget events.
pub trait EventSink {
    /// Push an event for the owner to handle.
    fn push_event(&self, event: WidgetEvent);
}

impl<F> EventSink for F
where
    F: Fn(WidgetEvent),
{
    fn push_event(&self, event: WidgetEvent) {
        self(event)
    }
}

/// A FIFO event queue shared between a widget tree and its owner.
///
/// Cloning is cheap; clones push into and drain from the same queue.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Arc<Mutex<VecDeque<WidgetEvent>>>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> Vec<WidgetEvent> {
        self.events
            .lock()
            .map(|mut guard| guard.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Check if there are no pending events.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for EventQueue {
    fn push_event(&self, event: WidgetEvent) {
        log::trace!("Queued {:?} from {}", event.kind, event.widget_id);
        if let Ok(mut guard) = self.events.lock() {
            guard.push_back(event);
        }
    }
}
