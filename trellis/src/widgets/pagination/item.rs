//! Page items and the page-list builder.

use serde::{Deserialize, Serialize};

use super::config::PaginationLocale;

/// Up to this many pages, every page is listed and no jump markers appear.
pub const MAX_UNELIDED_PAGES: usize = 9;

/// How far the `prev_5`/`next_5` markers move.
pub const JUMP_DISTANCE: i64 = 5;

/// The kind of a pagination control item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageItemKind {
    /// Previous page
    #[serde(rename = "prev")]
    Prev,
    /// Next page
    #[serde(rename = "next")]
    Next,
    /// Jump back five pages
    #[serde(rename = "prev_5")]
    Prev5,
    /// Jump forward five pages
    #[serde(rename = "next_5")]
    Next5,
    /// A numbered page
    #[serde(rename = "page")]
    Page,
}

impl PageItemKind {
    /// Stable name, also used in display keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageItemKind::Prev => "prev",
            PageItemKind::Next => "next",
            PageItemKind::Prev5 => "prev_5",
            PageItemKind::Next5 => "next_5",
            PageItemKind::Page => "page",
        }
    }

    /// Relative move requested by a non-page item.
    pub fn diff(&self) -> Option<i64> {
        match self {
            PageItemKind::Prev => Some(-1),
            PageItemKind::Next => Some(1),
            PageItemKind::Prev5 => Some(-JUMP_DISTANCE),
            PageItemKind::Next5 => Some(JUMP_DISTANCE),
            PageItemKind::Page => None,
        }
    }
}

impl std::fmt::Display for PageItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What clicking an item asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    /// Go to this 1-based page.
    To(usize),
    /// Move by this many pages.
    By(i64),
}

/// One control in the rendered page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageItem {
    /// Item kind
    #[serde(rename = "type")]
    pub kind: PageItemKind,
    /// Page number, only set for `page` items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Only `prev`/`next` are ever disabled
    #[serde(default)]
    pub disabled: bool,
}

impl PageItem {
    /// A numbered page item.
    pub fn page(index: usize) -> Self {
        Self {
            kind: PageItemKind::Page,
            index: Some(index),
            disabled: false,
        }
    }

    /// A page-less control item.
    pub fn control(kind: PageItemKind) -> Self {
        Self {
            kind,
            index: None,
            disabled: false,
        }
    }

    fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Key identifying the item across recomputations.
    pub fn key(&self) -> String {
        match self.index {
            Some(index) => format!("{}-{}", self.kind, index),
            None => self.kind.to_string(),
        }
    }

    /// What a click on this item requests, or `None` if it is disabled.
    pub fn jump(&self) -> Option<Jump> {
        if self.disabled {
            return None;
        }
        match (self.kind, self.index) {
            (PageItemKind::Page, Some(index)) => Some(Jump::To(index)),
            (kind, _) => kind.diff().map(Jump::By),
        }
    }

    /// Tooltip text for the item.
    pub fn title(&self, locale: &PaginationLocale) -> String {
        match self.kind {
            PageItemKind::Page => self.index.map(|i| i.to_string()).unwrap_or_default(),
            PageItemKind::Prev => locale.prev_page.clone(),
            PageItemKind::Next => locale.next_page.clone(),
            PageItemKind::Prev5 => locale.prev_5.clone(),
            PageItemKind::Next5 => locale.next_5.clone(),
        }
    }
}

fn pages(start: usize, end: usize) -> impl Iterator<Item = PageItem> {
    (start..=end).map(PageItem::page)
}

/// Build the ordered list of controls for `page_index` out of `last_index` pages.
///
/// Short lists show every page. Longer ones keep pages 1 and `last_index` as
/// anchors around a five-page window, with jump markers on the elided sides:
///
/// ```
/// use trellis::widgets::pagination::build_page_items;
///
/// let keys: Vec<String> = build_page_items(10, 20).iter().map(|i| i.key()).collect();
/// assert_eq!(
///     keys,
///     ["prev", "page-1", "prev_5", "page-8", "page-9", "page-10", "page-11",
///      "page-12", "next_5", "page-20", "next"]
/// );
/// ```
pub fn build_page_items(page_index: usize, last_index: usize) -> Vec<PageItem> {
    let mut items = Vec::with_capacity(MAX_UNELIDED_PAGES + 2);
    items.push(PageItem::control(PageItemKind::Prev).disabled_if(page_index == 1));

    if last_index <= MAX_UNELIDED_PAGES {
        items.extend(pages(1, last_index));
    } else {
        items.push(PageItem::page(1));
        if page_index < 4 {
            items.extend(pages(2, 5));
            items.push(PageItem::control(PageItemKind::Next5));
        } else if page_index < last_index - 3 {
            items.push(PageItem::control(PageItemKind::Prev5));
            items.extend(pages(page_index - 2, page_index + 2));
            items.push(PageItem::control(PageItemKind::Next5));
        } else {
            items.push(PageItem::control(PageItemKind::Prev5));
            items.extend(pages(last_index - 4, last_index - 1));
        }
        items.push(PageItem::page(last_index));
    }

    items.push(PageItem::control(PageItemKind::Next).disabled_if(page_index == last_index));
    items
}
