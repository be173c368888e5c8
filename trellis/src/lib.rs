pub mod registration;
pub mod widgets;

pub mod prelude {
    pub use crate::registration::{ModuleDeclaration, RegistryError, create_widget, resolve_module};
    pub use crate::widgets::checkbox::{
        Checkbox, CheckboxGroup, CheckboxModule, CheckboxOption, CheckboxWrapper,
    };
    pub use crate::widgets::events::{
        EventQueue, EventResult, EventSink, WidgetEvent, WidgetEventKind,
    };
    pub use crate::widgets::pagination::{
        PageItem, PageItemKind, Pagination, PaginationConfig, PaginationDefault,
        PaginationError, PaginationLocale, PaginationOptions, PaginationSize, PaginationState,
        build_page_items,
    };
    pub use crate::widgets::traits::AnyWidget;
}
