//! Registration of the checkbox widget bundle.

use crate::registration::{
    ModuleDeclaration, ModuleRegistration, RegistryError, WidgetRegistration, resolve_module,
};
use crate::widgets::traits::AnyWidget;

use super::{Checkbox, CheckboxGroup, CheckboxWrapper};

/// Registered name of the checkbox bundle.
pub const CHECKBOX_MODULE: &str = "checkbox";

inventory::submit! {
    ModuleRegistration::new(
        CHECKBOX_MODULE,
        &["common", "forms"],
        &["checkbox", "checkbox_group", "checkbox_wrapper"],
    )
}

inventory::submit! {
    WidgetRegistration::new("checkbox", CHECKBOX_MODULE, new_checkbox)
}

inventory::submit! {
    WidgetRegistration::new("checkbox_group", CHECKBOX_MODULE, new_checkbox_group)
}

inventory::submit! {
    WidgetRegistration::new("checkbox_wrapper", CHECKBOX_MODULE, new_checkbox_wrapper)
}

fn new_checkbox() -> Box<dyn AnyWidget> {
    Box::new(Checkbox::new())
}

fn new_checkbox_group() -> Box<dyn AnyWidget> {
    Box::new(CheckboxGroup::new())
}

fn new_checkbox_wrapper() -> Box<dyn AnyWidget> {
    Box::new(CheckboxWrapper::new())
}

/// Handle on the checkbox bundle for hosts that import it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxModule;

impl CheckboxModule {
    /// Resolve the bundle's imports and exports from the registry.
    pub fn declaration() -> Result<ModuleDeclaration, RegistryError> {
        resolve_module(CHECKBOX_MODULE)
    }
}
