//! Pagination owner: validates the view's requests and applies them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::widgets::events::{EventQueue, EventResult, EventSink, WidgetEvent, WidgetEventKind};
use crate::widgets::traits::AnyWidget;

use super::config::PaginationConfig;
use super::default::PaginationDefault;
use super::item::PageItem;
use super::state::{PaginationError, PaginationState};

/// Unique identifier for a Pagination widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationId(usize);

impl PaginationId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for PaginationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__pagination_{}", self.0)
    }
}

/// A complete pagination control.
///
/// Wraps a [`PaginationDefault`] view and acts as its owner: requested page
/// indices are clamped into `[1, last_index]`, no-op and disabled requests
/// are dropped, and accepted changes are applied to the view and re-emitted
/// under this control's id for the host.
///
/// # Example
///
/// ```
/// use trellis::widgets::events::{EventQueue, WidgetEventKind};
/// use trellis::widgets::pagination::{PageItem, Pagination, PaginationState};
///
/// let pagination = Pagination::new(PaginationState::new(95, 10, 1).unwrap());
/// let host = EventQueue::new();
///
/// pagination.click_item(&PageItem::page(42), &host);
/// assert_eq!(pagination.state().page_index(), 10);
/// assert_eq!(host.drain()[0].kind, WidgetEventKind::PageIndexChange(10));
/// ```
#[derive(Debug)]
pub struct Pagination {
    /// Unique identifier for this instance
    id: PaginationId,
    /// Authoritative state
    state: Arc<RwLock<PaginationState>>,
    /// The view this control owns
    view: PaginationDefault,
}

impl Pagination {
    /// Create a control with default display config
    pub fn new(state: PaginationState) -> Self {
        Self::with_view(state, PaginationDefault::new())
    }

    /// Create a control with the given display config
    pub fn with_config(state: PaginationState, config: PaginationConfig) -> Self {
        Self::with_view(state, PaginationDefault::with_config(config))
    }

    /// Create a control around a prepared view (e.g. one with custom renderers)
    pub fn with_view(state: PaginationState, view: PaginationDefault) -> Self {
        view.apply(state);
        Self {
            id: PaginationId::new(),
            state: Arc::new(RwLock::new(state)),
            view,
        }
    }

    /// Get the unique ID for this instance
    pub fn id(&self) -> PaginationId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// The owned view
    pub fn view(&self) -> &PaginationDefault {
        &self.view
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Current state
    pub fn state(&self) -> PaginationState {
        self.state.read().map(|guard| *guard).unwrap_or_default()
    }

    /// Number of pages
    pub fn last_index(&self) -> usize {
        self.state().last_index()
    }

    /// Clamp a requested page into `[1, last_index]`
    pub fn validate_page_index(&self, requested: i64) -> usize {
        self.state().validate_page_index(requested)
    }

    /// Page items of the owned view
    pub fn items(&self) -> Vec<PageItem> {
        self.view.items()
    }

    /// Whether the host should hide the control entirely
    pub fn is_hidden(&self) -> bool {
        self.view.config().hide_on_single_page && self.last_index() <= 1
    }

    // -------------------------------------------------------------------------
    // Host-side setters (no events)
    // -------------------------------------------------------------------------

    /// Set the total item count
    pub fn set_total(&self, total: usize) {
        self.replace(self.state().with_total(total));
    }

    /// Set the page size
    pub fn set_page_size(&self, page_size: usize) -> Result<(), PaginationError> {
        let next = self
            .state()
            .with_page_size(page_size)
            .inspect_err(|e| log::warn!("{}: {}", self.id, e))?;
        self.replace(next);
        Ok(())
    }

    /// Set the page index as-is; the host is trusted here
    pub fn set_page_index(&self, page_index: usize) {
        self.replace(self.state().with_page_index(page_index));
    }

    /// Replace the display configuration
    pub fn set_config(&self, config: PaginationConfig) {
        self.view.set_config(config);
    }

    fn replace(&self, next: PaginationState) {
        if let Ok(mut guard) = self.state.write() {
            *guard = next;
        }
        self.view.apply(next);
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Handle a request coming from the owned view.
    ///
    /// Accepted changes are applied and re-emitted to `cx` under this
    /// control's id. Events from other widgets are ignored.
    pub fn handle_event(&self, event: &WidgetEvent, cx: &dyn EventSink) -> EventResult {
        if event.widget_id != self.view.id_string() {
            return EventResult::Ignored;
        }
        match event.kind {
            WidgetEventKind::PageIndexChange(index) => self.on_page_index_change(index, cx),
            WidgetEventKind::PageSizeChange(size) => self.on_page_size_change(size, cx),
            WidgetEventKind::Change => EventResult::Ignored,
        }
    }

    fn on_page_index_change(&self, requested: i64, cx: &dyn EventSink) -> EventResult {
        let state = self.state();
        let index = state.validate_page_index(requested);
        if index == state.page_index() || self.view.is_disabled() {
            log::trace!("{}: page request {} dropped", self.id, requested);
            return EventResult::Ignored;
        }
        self.set_page_index(index);
        cx.push_event(WidgetEvent::new(
            WidgetEventKind::PageIndexChange(index as i64),
            self.id_string(),
        ));
        EventResult::Consumed
    }

    fn on_page_size_change(&self, size: usize, cx: &dyn EventSink) -> EventResult {
        if self.set_page_size(size).is_err() {
            return EventResult::Ignored;
        }
        cx.push_event(WidgetEvent::new(
            WidgetEventKind::PageSizeChange(size),
            self.id_string(),
        ));
        let state = self.state();
        let last = state.last_index();
        if state.page_index() > last {
            self.on_page_index_change(last as i64, cx);
        }
        EventResult::Consumed
    }

    fn route(&self, queue: EventQueue, cx: &dyn EventSink) -> EventResult {
        let mut result = EventResult::Ignored;
        for event in queue.drain() {
            if self.handle_event(&event, cx).is_handled() {
                result = EventResult::Consumed;
            }
        }
        result
    }

    /// Click a page item of the view
    pub fn click_item(&self, item: &PageItem, cx: &dyn EventSink) -> EventResult {
        let queue = EventQueue::new();
        self.view.click_item(item, &queue);
        self.route(queue, cx)
    }

    /// Submit quick jumper text
    pub fn quick_jump(&self, text: &str, cx: &dyn EventSink) -> EventResult {
        let queue = EventQueue::new();
        self.view.quick_jump(text, &queue);
        self.route(queue, cx)
    }

    /// Select a page size in the size changer
    pub fn change_page_size(&self, size: usize, cx: &dyn EventSink) -> EventResult {
        let queue = EventQueue::new();
        self.view.change_page_size(size, &queue);
        self.route(queue, cx)
    }
}

impl Clone for Pagination {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            state: Arc::clone(&self.state),
            view: self.view.clone(),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PaginationState::default())
    }
}

impl AnyWidget for Pagination {
    fn id(&self) -> String {
        self.id_string()
    }

    fn kind(&self) -> &'static str {
        "pagination"
    }

    fn is_dirty(&self) -> bool {
        self.view.is_dirty()
    }

    fn clear_dirty(&self) {
        self.view.clear_dirty()
    }

    fn is_focusable(&self) -> bool {
        !self.view.is_disabled()
    }
}
