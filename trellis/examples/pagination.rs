//! Pagination example - a host application driving a pagination control.
//!
//! Builds a pagination control over 250 records, prints the page list as
//! plain text, then replays a few user interactions and prints what the
//! control asked the host to do after each one.
//!
//! Logs go to `pagination.log`.

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use trellis::prelude::*;
use trellis::widgets::pagination::ItemRenderContext;

// =============================================================================
// Rendering
// =============================================================================

/// Highlights the current page, shows jumps as ellipses.
fn label(cx: &ItemRenderContext<'_>) -> String {
    match (cx.item.kind, cx.item.index) {
        (PageItemKind::Page, Some(index)) if cx.active => format!("[{index}]"),
        (PageItemKind::Page, Some(index)) => index.to_string(),
        (PageItemKind::Prev5 | PageItemKind::Next5, _) => "...".into(),
        (PageItemKind::Prev, _) => "<".into(),
        _ => ">".into(),
    }
}

fn print(pagination: &Pagination) {
    let view = pagination.view();
    let items: Vec<String> = view
        .items()
        .iter()
        .map(|item| {
            let text = view.item_label(item);
            if item.disabled { format!("({text})") } else { text }
        })
        .collect();
    println!("{}", items.join(" "));
    if let Some(total) = view.total_text() {
        println!("  {total}");
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() {
    if let Ok(log_file) = File::create("pagination.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let state = match PaginationState::new(250, 10, 1) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let config = PaginationConfig::new()
        .show_size_changer()
        .show_quick_jumper();
    let view = PaginationDefault::with_config(config)
        .with_item_render(label)
        .with_total_render(|total: usize, (start, end): (usize, usize)| {
            format!("{start}-{end} of {total} records")
        });
    let pagination = Pagination::with_view(state, view);
    let host = EventQueue::new();

    print(&pagination);

    println!("\n> click page 5");
    pagination.click_item(&PageItem::page(5), &host);
    print(&pagination);

    println!("\n> click next 5");
    pagination.click_item(&PageItem::control(PageItemKind::Next5), &host);
    print(&pagination);

    println!("\n> type 99 into the quick jumper");
    pagination.quick_jump("99", &host);
    print(&pagination);

    println!("\n> pick 50 per page");
    pagination.change_page_size(50, &host);
    print(&pagination);

    println!("\nHost received:");
    for event in host.drain() {
        println!("  {:?}", event.kind);
    }
}
