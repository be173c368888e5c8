//! Pagination configuration types.

use serde::{Deserialize, Serialize};

/// Page size used when the host does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Size variant of the pagination control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationSize {
    /// Regular control
    #[default]
    Default,
    /// Compact control
    Small,
}

/// Text bundle used for titles and sub-control labels.
///
/// Defaults to US English. Missing fields fall back to the defaults when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationLocale {
    /// Suffix of size changer options, e.g. "10 / page"
    pub items_per_page: String,
    /// Quick jumper prompt
    pub jump_to: String,
    /// Quick jumper confirm button
    pub jump_to_confirm: String,
    /// Suffix after the quick jumper input
    pub page: String,
    /// Title of the `prev` item
    pub prev_page: String,
    /// Title of the `next` item
    pub next_page: String,
    /// Title of the `prev_5` item
    pub prev_5: String,
    /// Title of the `next_5` item
    pub next_5: String,
}

impl Default for PaginationLocale {
    fn default() -> Self {
        Self {
            items_per_page: "/ page".into(),
            jump_to: "Go to".into(),
            jump_to_confirm: "confirm".into(),
            page: String::new(),
            prev_page: "Previous Page".into(),
            next_page: "Next Page".into(),
            prev_5: "Previous 5 Pages".into(),
            next_5: "Next 5 Pages".into(),
        }
    }
}

/// Display configuration for a pagination control.
///
/// The numeric state (total, page size, page index) lives in
/// [`PaginationState`](super::PaginationState); this holds everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Size variant.
    pub size: PaginationSize,

    /// Sizes offered by the size changer.
    pub page_size_options: Vec<usize>,

    /// Show the page size selector.
    pub show_size_changer: bool,

    /// Show the "go to page" input.
    pub show_quick_jumper: bool,

    /// Ignore every interaction.
    pub disabled: bool,

    /// Hide the whole control when there is at most one page.
    pub hide_on_single_page: bool,

    /// Text bundle.
    pub locale: PaginationLocale,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            size: PaginationSize::Default,
            page_size_options: vec![10, 20, 30, 40],
            show_size_changer: false,
            show_quick_jumper: false,
            disabled: false,
            hide_on_single_page: false,
            locale: PaginationLocale::default(),
        }
    }
}

impl PaginationConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the compact size variant.
    pub fn small(mut self) -> Self {
        self.size = PaginationSize::Small;
        self
    }

    /// Set the sizes offered by the size changer.
    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Show the page size selector.
    pub fn show_size_changer(mut self) -> Self {
        self.show_size_changer = true;
        self
    }

    /// Show the "go to page" input.
    pub fn show_quick_jumper(mut self) -> Self {
        self.show_quick_jumper = true;
        self
    }

    /// Disable all interaction.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Hide the control when there is at most one page.
    pub fn hide_on_single_page(mut self) -> Self {
        self.hide_on_single_page = true;
        self
    }

    /// Set the text bundle.
    pub fn locale(mut self, locale: PaginationLocale) -> Self {
        self.locale = locale;
        self
    }
}
