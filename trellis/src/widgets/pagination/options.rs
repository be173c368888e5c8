//! Size changer and quick jumper sub-widget.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::widgets::events::{EventResult, EventSink, WidgetEvent, WidgetEventKind};
use crate::widgets::traits::AnyWidget;

use super::config::{DEFAULT_PAGE_SIZE, PaginationLocale};

/// Unique identifier for a PaginationOptions widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationOptionsId(usize);

impl PaginationOptionsId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for PaginationOptionsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__pagination_options_{}", self.0)
    }
}

/// One entry of the size changer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSizeOption {
    /// Page size
    pub value: usize,
    /// Display label, e.g. "20 / page"
    pub label: String,
}

#[derive(Debug)]
struct PaginationOptionsInner {
    page_index: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    disabled: bool,
    show_size_changer: bool,
    show_quick_jumper: bool,
    locale: PaginationLocale,
    /// Derived from `page_size_options`, `page_size` and `locale`
    size_options: Vec<PageSizeOption>,
}

impl Default for PaginationOptionsInner {
    fn default() -> Self {
        let mut inner = Self {
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 30, 40],
            disabled: false,
            show_size_changer: false,
            show_quick_jumper: false,
            locale: PaginationLocale::default(),
            size_options: Vec::new(),
        };
        inner.rebuild_size_options();
        inner
    }
}

impl PaginationOptionsInner {
    fn rebuild_size_options(&mut self) {
        let mut values: Vec<usize> = Vec::with_capacity(self.page_size_options.len() + 1);
        for &value in self.page_size_options.iter().chain(std::iter::once(&self.page_size)) {
            if !values.contains(&value) {
                values.push(value);
            }
        }
        self.size_options = values
            .into_iter()
            .map(|value| PageSizeOption {
                value,
                label: format!("{} {}", value, self.locale.items_per_page),
            })
            .collect();
    }
}

/// The quick jumper input and size changer shown next to the page list.
///
/// Like the page list itself, it only requests changes: selecting a size or
/// submitting a page number pushes an event and leaves its own state alone.
#[derive(Debug)]
pub struct PaginationOptions {
    /// Unique identifier for this instance
    id: PaginationOptionsId,
    /// Internal state
    inner: Arc<RwLock<PaginationOptionsInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl PaginationOptions {
    /// Create options with the default size list
    pub fn new() -> Self {
        Self {
            id: PaginationOptionsId::new(),
            inner: Arc::new(RwLock::new(PaginationOptionsInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this instance
    pub fn id(&self) -> PaginationOptionsId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Current page index as last set by the parent
    pub fn page_index(&self) -> usize {
        self.inner.read().map(|guard| guard.page_index).unwrap_or(1)
    }

    /// Current page size as last set by the parent
    pub fn page_size(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Size changer entries: configured sizes plus the current one, deduplicated
    pub fn size_options(&self) -> Vec<PageSizeOption> {
        self.inner
            .read()
            .map(|guard| guard.size_options.clone())
            .unwrap_or_default()
    }

    /// Check if interaction is disabled
    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Whether the size changer is shown
    pub fn shows_size_changer(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.show_size_changer)
            .unwrap_or(false)
    }

    /// Whether the quick jumper is shown
    pub fn shows_quick_jumper(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.show_quick_jumper)
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the current page index and size
    pub fn set_page(&self, page_index: usize, page_size: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.page_index = page_index;
            if guard.page_size != page_size {
                guard.page_size = page_size;
                guard.rebuild_size_options();
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the sizes offered by the size changer
    pub fn set_page_size_options(&self, options: Vec<usize>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.page_size_options = options;
            guard.rebuild_size_options();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the text bundle
    pub fn set_locale(&self, locale: PaginationLocale) {
        if let Ok(mut guard) = self.inner.write() {
            guard.locale = locale;
            guard.rebuild_size_options();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Enable or disable interaction
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Choose which sub-controls are shown
    pub fn set_visible(&self, show_size_changer: bool, show_quick_jumper: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.show_size_changer = show_size_changer;
            guard.show_quick_jumper = show_quick_jumper;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Request a new page size. Re-selecting the current size does nothing.
    pub fn select_page_size(&self, size: usize, cx: &dyn EventSink) -> EventResult {
        if self.is_disabled() || size == self.page_size() {
            return EventResult::Ignored;
        }
        log::debug!("{}: page size {} requested", self.id_string(), size);
        cx.push_event(WidgetEvent::new(
            WidgetEventKind::PageSizeChange(size),
            self.id_string(),
        ));
        EventResult::Consumed
    }

    /// Request the page typed into the quick jumper.
    ///
    /// Numbers are floored; text that is not a number requests the current page.
    pub fn jump_to_page_via_input(&self, text: &str, cx: &dyn EventSink) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }
        let index = parse_page_input(text).unwrap_or_else(|| {
            log::debug!("{}: '{}' is not a page number", self.id_string(), text);
            self.page_index() as i64
        });
        cx.push_event(WidgetEvent::new(
            WidgetEventKind::PageIndexChange(index),
            self.id_string(),
        ));
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

fn parse_page_input(text: &str) -> Option<i64> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.floor() as i64)
}

impl Clone for PaginationOptions {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl AnyWidget for PaginationOptions {
    fn id(&self) -> String {
        self.id_string()
    }

    fn kind(&self) -> &'static str {
        "pagination_options"
    }

    fn is_dirty(&self) -> bool {
        PaginationOptions::is_dirty(self)
    }

    fn clear_dirty(&self) {
        PaginationOptions::clear_dirty(self)
    }

    fn is_focusable(&self) -> bool {
        !self.is_disabled()
    }
}
