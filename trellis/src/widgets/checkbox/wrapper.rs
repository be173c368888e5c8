//! Checkbox wrapper widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::Checkbox;

/// Unique identifier for a CheckboxWrapper widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxWrapperId(usize);

impl CheckboxWrapperId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckboxWrapperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__checkbox_wrapper_{}", self.0)
    }
}

/// Collects free-standing checkboxes and reports their checked values together.
#[derive(Debug)]
pub struct CheckboxWrapper {
    /// Unique identifier for this wrapper instance
    id: CheckboxWrapperId,
    /// Child checkbox handles, in insertion order
    children: Arc<RwLock<Vec<Checkbox>>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl CheckboxWrapper {
    /// Create an empty wrapper
    pub fn new() -> Self {
        Self {
            id: CheckboxWrapperId::new(),
            children: Arc::new(RwLock::new(Vec::new())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this wrapper
    pub fn id(&self) -> CheckboxWrapperId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Attach a child checkbox. The wrapper keeps a shared handle.
    pub fn add(&self, checkbox: &Checkbox) {
        if let Ok(mut guard) = self.children.write() {
            guard.push(checkbox.clone());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Detach a child checkbox by id, returning whether it was attached.
    pub fn remove(&self, checkbox: &Checkbox) -> bool {
        let Ok(mut guard) = self.children.write() else {
            return false;
        };
        let before = guard.len();
        guard.retain(|c| c.id() != checkbox.id());
        let removed = guard.len() != before;
        if removed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        removed
    }

    /// Get the child at index
    pub fn child(&self, index: usize) -> Option<Checkbox> {
        self.children
            .read()
            .ok()
            .and_then(|guard| guard.get(index).cloned())
    }

    /// Get the number of children
    pub fn len(&self) -> usize {
        self.children.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Check if there are no children
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values of the checked children, in insertion order
    pub fn checked_values(&self) -> Vec<String> {
        self.children
            .read()
            .map(|guard| {
                guard
                    .iter()
                    .filter(|c| c.is_checked())
                    .map(|c| c.value())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check if the wrapper or any child has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
            || self
                .children
                .read()
                .map(|guard| guard.iter().any(|c| c.is_dirty()))
                .unwrap_or(false)
    }

    /// Clear the dirty flag of the wrapper and its children
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
        if let Ok(guard) = self.children.read() {
            guard.iter().for_each(Checkbox::clear_dirty);
        }
    }
}

impl Clone for CheckboxWrapper {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            children: Arc::clone(&self.children),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for CheckboxWrapper {
    fn default() -> Self {
        Self::new()
    }
}
