//! Checkbox group widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Unique identifier for a CheckboxGroup widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxGroupId(usize);

impl CheckboxGroupId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckboxGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__checkbox_group_{}", self.0)
    }
}

/// One entry of a checkbox group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxOption {
    /// Displayed label
    pub label: String,
    /// Reported value
    pub value: String,
    /// Whether the option is checked
    pub checked: bool,
    /// Whether the option ignores toggles
    pub disabled: bool,
}

impl CheckboxOption {
    /// Create an unchecked option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Mark the option as checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Mark the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Default)]
struct CheckboxGroupInner {
    options: Vec<CheckboxOption>,
    disabled: bool,
}

/// A group of independent checkboxes sharing one widget id.
///
/// Unlike a radio group, any number of options can be checked at once.
#[derive(Debug)]
pub struct CheckboxGroup {
    /// Unique identifier for this group instance
    id: CheckboxGroupId,
    /// Internal state
    inner: Arc<RwLock<CheckboxGroupInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl CheckboxGroup {
    /// Create a new empty group
    pub fn new() -> Self {
        Self::with_options(Vec::new())
    }

    /// Create a group with options
    pub fn with_options(options: Vec<CheckboxOption>) -> Self {
        Self {
            id: CheckboxGroupId::new(),
            inner: Arc::new(RwLock::new(CheckboxGroupInner {
                options,
                disabled: false,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this group
    pub fn id(&self) -> CheckboxGroupId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get all options
    pub fn options(&self) -> Vec<CheckboxOption> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Get the option at index
    pub fn option(&self, index: usize) -> Option<CheckboxOption> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.options.get(index).cloned())
    }

    /// Get the number of options
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.options.len())
            .unwrap_or(0)
    }

    /// Check if there are no options
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the whole group ignores toggles
    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Values of the checked options, in option order
    pub fn checked_values(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .options
                    .iter()
                    .filter(|o| o.checked)
                    .map(|o| o.value.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace all options
    pub fn set_options(&self, options: Vec<CheckboxOption>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Enable or disable the whole group
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.disabled != disabled
        {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Flip one option, returning whether anything changed.
    ///
    /// Disabled groups, disabled options and out-of-range indices are left alone.
    pub(super) fn flip(&self, index: usize) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if guard.disabled {
            return false;
        }
        match guard.options.get_mut(index) {
            Some(option) if !option.disabled => {
                option.checked = !option.checked;
                self.dirty.store(true, Ordering::SeqCst);
                true
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the group state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for CheckboxGroup {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for CheckboxGroup {
    fn default() -> Self {
        Self::new()
    }
}
