//! Checkbox widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Unique identifier for a Checkbox widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxId(usize);

impl CheckboxId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckboxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__checkbox_{}", self.0)
    }
}

/// Internal state for a Checkbox widget
#[derive(Debug, Default)]
struct CheckboxInner {
    /// Whether the checkbox is checked
    checked: bool,
    /// Whether clicks are ignored
    disabled: bool,
    /// Partially-checked display state, owned by the host
    indeterminate: bool,
    /// Label text
    label: String,
    /// Value reported by a wrapper when checked
    value: String,
}

/// A checkbox widget with shared state.
///
/// `Checkbox` is a cheap handle: clones share the same state, so a
/// [`CheckboxWrapper`](super::CheckboxWrapper) can hold a clone while the host
/// keeps its own.
///
/// # Example
///
/// ```
/// use trellis::widgets::checkbox::Checkbox;
/// use trellis::widgets::events::EventQueue;
///
/// let terms = Checkbox::with_label("I accept the terms");
/// let queue = EventQueue::new();
/// terms.click(&queue);
/// assert!(terms.is_checked());
/// ```
#[derive(Debug)]
pub struct Checkbox {
    /// Unique identifier for this checkbox instance
    id: CheckboxId,
    /// Internal state
    inner: Arc<RwLock<CheckboxInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Checkbox {
    /// Create a new unchecked checkbox without a label
    pub fn new() -> Self {
        Self::from_inner(CheckboxInner::default())
    }

    /// Create a checkbox with a label
    pub fn with_label(label: impl Into<String>) -> Self {
        Self::from_inner(CheckboxInner {
            label: label.into(),
            ..Default::default()
        })
    }

    /// Create a checked checkbox
    pub fn checked() -> Self {
        Self::from_inner(CheckboxInner {
            checked: true,
            ..Default::default()
        })
    }

    fn from_inner(inner: CheckboxInner) -> Self {
        Self {
            id: CheckboxId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the value reported when this checkbox is checked
    pub fn with_value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
        self
    }

    /// Get the unique ID for this checkbox
    pub fn id(&self) -> CheckboxId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Check if the checkbox is checked
    pub fn is_checked(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.checked)
            .unwrap_or(false)
    }

    /// Check if the checkbox ignores clicks
    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Check if the checkbox shows the partially-checked state
    pub fn is_indeterminate(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.indeterminate)
            .unwrap_or(false)
    }

    /// Get the label text
    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    /// Get the value reported when checked
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the checked state
    pub fn set_checked(&self, checked: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.checked != checked
        {
            guard.checked = checked;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle the checked state
    pub fn toggle(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = !guard.checked;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Enable or disable the checkbox
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.disabled != disabled
        {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the partially-checked state
    pub fn set_indeterminate(&self, indeterminate: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.indeterminate != indeterminate
        {
            guard.indeterminate = indeterminate;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the label text
    pub fn set_label(&self, label: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the checkbox state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Checkbox {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}
