//! Built-in widgets for trellis.
//!
//! Every widget is a cheap, cloneable handle around shared state. Widgets
//! never apply the changes a user asks for: they push a
//! [`WidgetEvent`](events::WidgetEvent) into an
//! [`EventSink`](events::EventSink), and the owner decides.
//!
//! Widget families register themselves with the
//! [`registration`](crate::registration) module, so a host can look up a
//! bundle by name and instantiate its widgets.

pub mod checkbox;
pub mod events;
pub mod pagination;
pub mod traits;

pub use checkbox::{Checkbox, CheckboxGroup, CheckboxWrapper};
pub use pagination::{Pagination, PaginationDefault, PaginationOptions};
