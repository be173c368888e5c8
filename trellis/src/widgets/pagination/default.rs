//! The default pagination view.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::widgets::events::{EventQueue, EventResult, EventSink, WidgetEvent, WidgetEventKind};
use crate::widgets::traits::AnyWidget;

use super::config::{PaginationConfig, PaginationLocale, PaginationSize};
use super::item::{Jump, PageItem};
use super::options::{PageSizeOption, PaginationOptions};
use super::render::{DefaultItemRender, ItemRender, ItemRenderContext, TotalRender};
use super::state::PaginationState;

/// Unique identifier for a PaginationDefault widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationDefaultId(usize);

impl PaginationDefaultId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for PaginationDefaultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__pagination_default_{}", self.0)
    }
}

struct PaginationDefaultInner {
    state: PaginationState,
    config: PaginationConfig,
    item_render: Arc<dyn ItemRender>,
    total_render: Option<Arc<dyn TotalRender>>,
    /// Render cache, derived from `state`
    ranges: (usize, usize),
    /// Render cache, derived from `state`
    items: Vec<PageItem>,
}

impl PaginationDefaultInner {
    fn recompute(&mut self) {
        self.ranges = self.state.ranges();
        self.items = self.state.page_items();
    }
}

impl fmt::Debug for PaginationDefaultInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationDefaultInner")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("has_total_render", &self.total_render.is_some())
            .field("ranges", &self.ranges)
            .field("items", &self.items.len())
            .finish()
    }
}

/// Page list with prev/next, numbered pages and jump markers.
///
/// The view caches the page items and the visible item range for its
/// current [`PaginationState`]. It never changes that state itself: clicks
/// become `PageIndexChange` events and size changes become `PageSizeChange`
/// events for the owner, which answers by calling [`apply`](Self::apply).
///
/// # Example
///
/// ```
/// use trellis::widgets::events::{EventQueue, WidgetEventKind};
/// use trellis::widgets::pagination::{PaginationDefault, PaginationState};
///
/// let view = PaginationDefault::new();
/// view.apply(PaginationState::new(95, 10, 3).unwrap());
/// assert_eq!(view.ranges(), (21, 30));
///
/// let queue = EventQueue::new();
/// view.jump_diff(5, &queue);
/// assert_eq!(queue.drain()[0].kind, WidgetEventKind::PageIndexChange(8));
/// ```
#[derive(Debug)]
pub struct PaginationDefault {
    /// Unique identifier for this instance
    id: PaginationDefaultId,
    /// Internal state
    inner: Arc<RwLock<PaginationDefaultInner>>,
    /// Size changer / quick jumper child
    options: PaginationOptions,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl PaginationDefault {
    /// Create a view for an empty collection with default config
    pub fn new() -> Self {
        Self::with_config(PaginationConfig::default())
    }

    /// Create a view with the given config
    pub fn with_config(config: PaginationConfig) -> Self {
        let state = PaginationState::default();
        let options = PaginationOptions::new();
        sync_options(&options, &state, &config);

        let mut inner = PaginationDefaultInner {
            state,
            config,
            item_render: Arc::new(DefaultItemRender),
            total_render: None,
            ranges: (0, 0),
            items: Vec::new(),
        };
        inner.recompute();

        Self {
            id: PaginationDefaultId::new(),
            inner: Arc::new(RwLock::new(inner)),
            options,
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use a custom item renderer
    pub fn with_item_render(self, render: impl ItemRender + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.item_render = Arc::new(render);
        }
        self
    }

    /// Show a total summary produced by `render`
    pub fn with_total_render(self, render: impl TotalRender + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.total_render = Some(Arc::new(render));
        }
        self
    }

    /// Get the unique ID for this instance
    pub fn id(&self) -> PaginationDefaultId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// The size changer / quick jumper child
    pub fn options(&self) -> &PaginationOptions {
        &self.options
    }

    // -------------------------------------------------------------------------
    // Change notification
    // -------------------------------------------------------------------------

    /// Take a new state from the owner.
    ///
    /// Recomputes the cached ranges and page items when total, page size or
    /// page index changed. Returns whether it recomputed.
    pub fn apply(&self, state: PaginationState) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if guard.state == state {
            return false;
        }
        guard.state = state;
        guard.recompute();
        log::debug!(
            "{}: page {}/{} ranges {:?}",
            self.id,
            state.page_index(),
            state.last_index(),
            guard.ranges
        );
        sync_options(&self.options, &guard.state, &guard.config);
        self.dirty.store(true, Ordering::SeqCst);
        true
    }

    /// Unconditionally rebuild the cached ranges and page items.
    pub fn recompute(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.recompute();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Replace the display configuration
    pub fn set_config(&self, config: PaginationConfig) {
        if let Ok(mut guard) = self.inner.write() {
            sync_options(&self.options, &guard.state, &config);
            guard.config = config;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The state the cache was computed from
    pub fn state(&self) -> PaginationState {
        self.inner
            .read()
            .map(|guard| guard.state)
            .unwrap_or_default()
    }

    /// Current 1-based page
    pub fn page_index(&self) -> usize {
        self.state().page_index()
    }

    /// Display configuration
    pub fn config(&self) -> PaginationConfig {
        self.inner
            .read()
            .map(|guard| guard.config.clone())
            .unwrap_or_default()
    }

    /// Inclusive range of items on the current page, `(0, 0)` when empty
    pub fn ranges(&self) -> (usize, usize) {
        self.inner
            .read()
            .map(|guard| guard.ranges)
            .unwrap_or((0, 0))
    }

    /// Cached page items
    pub fn items(&self) -> Vec<PageItem> {
        self.inner
            .read()
            .map(|guard| guard.items.clone())
            .unwrap_or_default()
    }

    /// Check if interaction is disabled
    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.config.disabled)
            .unwrap_or(false)
    }

    /// Check if the compact variant is used
    pub fn is_small(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.config.size == PaginationSize::Small)
            .unwrap_or(false)
    }

    /// Whether the size changer or quick jumper is shown
    pub fn shows_options(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.config.show_size_changer || guard.config.show_quick_jumper)
            .unwrap_or(false)
    }

    /// Size changer entries
    pub fn size_options(&self) -> Vec<PageSizeOption> {
        self.options.size_options()
    }

    // -------------------------------------------------------------------------
    // Display helpers
    // -------------------------------------------------------------------------

    /// Whether `item` is the current page
    pub fn is_active(&self, item: &PageItem) -> bool {
        item.index == Some(self.page_index())
    }

    /// Tooltip text for `item`
    pub fn item_title(&self, item: &PageItem) -> String {
        self.inner
            .read()
            .map(|guard| item.title(&guard.config.locale))
            .unwrap_or_default()
    }

    /// Label for `item` from the item renderer
    pub fn item_label(&self, item: &PageItem) -> String {
        let Ok(guard) = self.inner.read() else {
            return String::new();
        };
        let cx = ItemRenderContext {
            item,
            active: item.index == Some(guard.state.page_index()),
            locale: &guard.config.locale,
        };
        guard.item_render.render(&cx)
    }

    /// Total summary, if a total renderer was given
    pub fn total_text(&self) -> Option<String> {
        let guard = self.inner.read().ok()?;
        let render = guard.total_render.as_ref()?;
        Some(render.render(guard.state.total(), guard.ranges))
    }

    /// Text bundle
    pub fn locale(&self) -> PaginationLocale {
        self.inner
            .read()
            .map(|guard| guard.config.locale.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Request page `index`. Not clamped; the owner validates.
    pub fn jump_page(&self, index: i64, cx: &dyn EventSink) {
        log::trace!("{}: page {} requested", self.id, index);
        cx.push_event(WidgetEvent::new(
            WidgetEventKind::PageIndexChange(index),
            self.id_string(),
        ));
    }

    /// Request the page `diff` away from the current one.
    pub fn jump_diff(&self, diff: i64, cx: &dyn EventSink) {
        self.jump_page(self.page_index() as i64 + diff, cx);
    }

    /// Handle a click on one of the page items.
    pub fn click_item(&self, item: &PageItem, cx: &dyn EventSink) -> EventResult {
        match item.jump() {
            Some(Jump::To(index)) => self.jump_page(index as i64, cx),
            Some(Jump::By(diff)) => self.jump_diff(diff, cx),
            None => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    /// Submit quick jumper text; forwarded from the options child.
    pub fn quick_jump(&self, text: &str, cx: &dyn EventSink) -> EventResult {
        let queue = EventQueue::new();
        let result = self.options.jump_to_page_via_input(text, &queue);
        self.forward(queue, cx);
        result
    }

    /// Select a page size; forwarded from the options child.
    pub fn change_page_size(&self, size: usize, cx: &dyn EventSink) -> EventResult {
        let queue = EventQueue::new();
        let result = self.options.select_page_size(size, &queue);
        self.forward(queue, cx);
        result
    }

    fn forward(&self, queue: EventQueue, cx: &dyn EventSink) {
        for event in queue.drain() {
            cx.push_event(WidgetEvent::new(event.kind, self.id_string()));
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the view or its options child has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst) || self.options.is_dirty()
    }

    /// Clear the dirty flags of the view and its options child
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
        self.options.clear_dirty();
    }
}

fn sync_options(options: &PaginationOptions, state: &PaginationState, config: &PaginationConfig) {
    options.set_page(state.page_index(), state.page_size());
    options.set_page_size_options(config.page_size_options.clone());
    options.set_locale(config.locale.clone());
    options.set_disabled(config.disabled);
    options.set_visible(config.show_size_changer, config.show_quick_jumper);
}

impl Clone for PaginationDefault {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            options: self.options.clone(),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for PaginationDefault {
    fn default() -> Self {
        Self::new()
    }
}

impl AnyWidget for PaginationDefault {
    fn id(&self) -> String {
        self.id_string()
    }

    fn kind(&self) -> &'static str {
        "pagination_default"
    }

    fn is_dirty(&self) -> bool {
        PaginationDefault::is_dirty(self)
    }

    fn clear_dirty(&self) {
        PaginationDefault::clear_dirty(self)
    }

    fn is_focusable(&self) -> bool {
        !self.is_disabled()
    }
}
