//! Registration types for inventory-based auto-discovery.
//!
//! Widget families submit one [`ModuleRegistration`] naming the bundle and
//! its external imports, plus one [`WidgetRegistration`] per widget they
//! declare. Hosts resolve a bundle by name with [`resolve_module`].

use thiserror::Error;

use crate::widgets::traits::AnyWidget;

/// Widget registration entry for inventory.
pub struct WidgetRegistration {
    /// Widget name.
    pub name: &'static str,
    /// Module that declares the widget.
    pub module: &'static str,
    /// Factory function to create the widget.
    pub factory: fn() -> Box<dyn AnyWidget>,
}

impl WidgetRegistration {
    /// Create a new widget registration.
    pub const fn new(
        name: &'static str,
        module: &'static str,
        factory: fn() -> Box<dyn AnyWidget>,
    ) -> Self {
        Self {
            name,
            module,
            factory,
        }
    }
}

inventory::collect!(WidgetRegistration);

/// Module registration entry for inventory.
pub struct ModuleRegistration {
    /// Module name.
    pub name: &'static str,
    /// External modules this one depends on.
    pub imports: &'static [&'static str],
    /// Widgets declared and exported by this module, in order.
    pub declarations: &'static [&'static str],
}

impl ModuleRegistration {
    /// Create a new module registration.
    pub const fn new(
        name: &'static str,
        imports: &'static [&'static str],
        declarations: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            imports,
            declarations,
        }
    }
}

inventory::collect!(ModuleRegistration);

/// Get all registered widgets.
pub fn registered_widgets() -> impl Iterator<Item = &'static WidgetRegistration> {
    inventory::iter::<WidgetRegistration>()
}

/// Get all registered modules.
pub fn registered_modules() -> impl Iterator<Item = &'static ModuleRegistration> {
    inventory::iter::<ModuleRegistration>()
}

/// Errors raised while resolving registrations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No widget with this name was registered.
    #[error("Widget '{0}' not registered")]
    WidgetNotRegistered(String),

    /// No module with this name was registered.
    #[error("Module '{0}' not registered")]
    ModuleNotRegistered(String),

    /// A module declares a widget nobody registered.
    #[error("Module '{module}' declares widget '{widget}' but it is not registered")]
    MissingWidget {
        /// The declaring module.
        module: &'static str,
        /// The missing widget name.
        widget: &'static str,
    },
}

/// A resolved module bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDeclaration {
    /// Module name.
    pub name: &'static str,
    /// External modules this one depends on.
    pub imports: Vec<&'static str>,
    /// Widgets made available to the host, in declaration order.
    pub exports: Vec<&'static str>,
}

/// Look up a widget registration by name.
pub fn find_widget(name: &str) -> Option<&'static WidgetRegistration> {
    registered_widgets().find(|w| w.name == name)
}

/// Create a widget instance through its registered factory.
pub fn create_widget(name: &str) -> Result<Box<dyn AnyWidget>, RegistryError> {
    let registration =
        find_widget(name).ok_or_else(|| RegistryError::WidgetNotRegistered(name.to_string()))?;
    log::debug!(
        "Creating widget '{}' from module '{}'",
        registration.name,
        registration.module
    );
    Ok((registration.factory)())
}

/// Resolve a module into its declaration, checking every declared widget exists.
pub fn resolve_module(name: &str) -> Result<ModuleDeclaration, RegistryError> {
    let module = registered_modules()
        .find(|m| m.name == name)
        .ok_or_else(|| RegistryError::ModuleNotRegistered(name.to_string()))?;

    for &widget in module.declarations {
        let registered = registered_widgets().any(|w| w.name == widget && w.module == module.name);
        if !registered {
            log::warn!("Module '{}' is missing widget '{}'", module.name, widget);
            return Err(RegistryError::MissingWidget {
                module: module.name,
                widget,
            });
        }
    }

    Ok(ModuleDeclaration {
        name: module.name,
        imports: module.imports.to_vec(),
        exports: module.declarations.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::events::EventQueue;

    #[test]
    fn test_resolve_checkbox_module() {
        let declaration = resolve_module("checkbox").unwrap();
        assert_eq!(declaration.imports, vec!["common", "forms"]);
        assert_eq!(
            declaration.exports,
            vec!["checkbox", "checkbox_group", "checkbox_wrapper"]
        );
    }

    #[test]
    fn test_resolve_pagination_module() {
        let declaration = resolve_module("pagination").unwrap();
        assert_eq!(declaration.imports, vec!["common", "forms", "i18n", "select"]);
        assert_eq!(
            declaration.exports,
            vec!["pagination", "pagination_default", "pagination_options"]
        );
    }

    #[test]
    fn test_resolve_unknown_module() {
        assert_eq!(
            resolve_module("carousel"),
            Err(RegistryError::ModuleNotRegistered("carousel".to_string()))
        );
    }

    #[test]
    fn test_create_widget_by_name() {
        let widget = create_widget("checkbox").unwrap();
        assert_eq!(widget.kind(), "checkbox");
        assert!(!widget.is_dirty());

        let queue = EventQueue::new();
        assert!(widget.dispatch_click(&queue).is_handled());
        assert!(widget.is_dirty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_create_unknown_widget() {
        assert!(matches!(
            create_widget("slider"),
            Err(RegistryError::WidgetNotRegistered(name)) if name == "slider"
        ));
    }

    #[test]
    fn test_every_registered_widget_kind_matches_name() {
        for registration in registered_widgets() {
            let widget = (registration.factory)();
            assert_eq!(widget.kind(), registration.name);
        }
    }
}
