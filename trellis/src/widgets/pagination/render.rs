//! Formatting strategies injected by the host.
//!
//! Neither strategy draws anything. Each turns pagination state into a
//! string, and the host puts that string wherever its renderer wants it.

use super::config::PaginationLocale;
use super::item::{PageItem, PageItemKind};

/// Everything an item renderer may look at.
#[derive(Debug, Clone, Copy)]
pub struct ItemRenderContext<'a> {
    /// The item being rendered
    pub item: &'a PageItem,
    /// Whether the item is the current page
    pub active: bool,
    /// Text bundle of the owning control
    pub locale: &'a PaginationLocale,
}

/// Produces the label of a page item.
pub trait ItemRender: Send + Sync {
    /// Label for one item.
    fn render(&self, cx: &ItemRenderContext<'_>) -> String;
}

impl<F> ItemRender for F
where
    F: Fn(&ItemRenderContext<'_>) -> String + Send + Sync,
{
    fn render(&self, cx: &ItemRenderContext<'_>) -> String {
        self(cx)
    }
}

/// Page numbers as digits, arrows for prev/next, guillemets for jumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultItemRender;

impl ItemRender for DefaultItemRender {
    fn render(&self, cx: &ItemRenderContext<'_>) -> String {
        match cx.item.kind {
            PageItemKind::Page => cx.item.index.map(|i| i.to_string()).unwrap_or_default(),
            PageItemKind::Prev => "<".into(),
            PageItemKind::Next => ">".into(),
            PageItemKind::Prev5 => "«".into(),
            PageItemKind::Next5 => "»".into(),
        }
    }
}

/// Produces the "showing x-y of n" summary.
pub trait TotalRender: Send + Sync {
    /// Summary for `total` items with the inclusive `range` on screen.
    fn render(&self, total: usize, range: (usize, usize)) -> String;
}

impl<F> TotalRender for F
where
    F: Fn(usize, (usize, usize)) -> String + Send + Sync,
{
    fn render(&self, total: usize, range: (usize, usize)) -> String {
        self(total, range)
    }
}
