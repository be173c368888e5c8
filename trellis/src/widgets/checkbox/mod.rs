//! Checkbox widgets: a single checkbox, a checkbox group and a wrapper
//! collecting free-standing checkboxes.

pub mod events;
mod group;
mod module;
mod state;
mod wrapper;

pub use group::{CheckboxGroup, CheckboxGroupId, CheckboxOption};
pub use module::{CHECKBOX_MODULE, CheckboxModule};
pub use state::{Checkbox, CheckboxId};
pub use wrapper::{CheckboxWrapper, CheckboxWrapperId};
