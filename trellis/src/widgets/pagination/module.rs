//! Registration of the pagination widget bundle.

use crate::registration::{ModuleRegistration, WidgetRegistration};
use crate::widgets::traits::AnyWidget;

use super::{Pagination, PaginationDefault, PaginationOptions};

/// Registered name of the pagination bundle.
pub const PAGINATION_MODULE: &str = "pagination";

inventory::submit! {
    ModuleRegistration::new(
        PAGINATION_MODULE,
        &["common", "forms", "i18n", "select"],
        &["pagination", "pagination_default", "pagination_options"],
    )
}

inventory::submit! {
    WidgetRegistration::new("pagination", PAGINATION_MODULE, new_pagination)
}

inventory::submit! {
    WidgetRegistration::new("pagination_default", PAGINATION_MODULE, new_pagination_default)
}

inventory::submit! {
    WidgetRegistration::new("pagination_options", PAGINATION_MODULE, new_pagination_options)
}

fn new_pagination() -> Box<dyn AnyWidget> {
    Box::new(Pagination::default())
}

fn new_pagination_default() -> Box<dyn AnyWidget> {
    Box::new(PaginationDefault::new())
}

fn new_pagination_options() -> Box<dyn AnyWidget> {
    Box::new(PaginationOptions::new())
}
