//! Pagination widgets.
//!
//! - [`build_page_items`] - the pure page-list builder
//! - [`PaginationState`] - total, page size and current page
//! - [`PaginationDefault`] - the page list view, emitting change requests
//! - [`PaginationOptions`] - size changer and quick jumper
//! - [`Pagination`] - the owner that clamps and applies requests

mod config;
mod controller;
mod default;
mod item;
mod module;
mod options;
mod render;
mod state;

pub use config::{DEFAULT_PAGE_SIZE, PaginationConfig, PaginationLocale, PaginationSize};
pub use controller::{Pagination, PaginationId};
pub use default::{PaginationDefault, PaginationDefaultId};
pub use item::{JUMP_DISTANCE, Jump, MAX_UNELIDED_PAGES, PageItem, PageItemKind, build_page_items};
pub use module::PAGINATION_MODULE;
pub use options::{PageSizeOption, PaginationOptions, PaginationOptionsId};
pub use render::{DefaultItemRender, ItemRender, ItemRenderContext, TotalRender};
pub use state::{PaginationError, PaginationState};
