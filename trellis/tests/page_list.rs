//! Tests for the page-list builder.

use trellis::widgets::pagination::{PageItem, PageItemKind, build_page_items};

fn keys(items: &[PageItem]) -> Vec<String> {
    items.iter().map(PageItem::key).collect()
}

fn window(items: &[PageItem]) -> Vec<usize> {
    items.iter().filter_map(|i| i.index).collect()
}

fn has(items: &[PageItem], kind: PageItemKind) -> bool {
    items.iter().any(|i| i.kind == kind)
}

#[test]
fn test_short_lists_show_every_page() {
    for last in 1..=9 {
        for page in 1..=last {
            let items = build_page_items(page, last);
            assert_eq!(items.len(), last + 2, "page {page} of {last}");
            assert!(!has(&items, PageItemKind::Prev5));
            assert!(!has(&items, PageItemKind::Next5));
            assert_eq!(window(&items), (1..=last).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_first_page_of_ten() {
    let items = build_page_items(1, 10);
    assert_eq!(
        keys(&items),
        [
            "prev", "page-1", "page-2", "page-3", "page-4", "page-5", "next_5", "page-10",
            "next"
        ]
    );
    assert!(items[0].disabled);
    assert!(!items[items.len() - 1].disabled);
}

#[test]
fn test_middle_page_of_twenty() {
    let items = build_page_items(10, 20);
    assert!(has(&items, PageItemKind::Prev5));
    assert!(has(&items, PageItemKind::Next5));
    assert_eq!(window(&items), [1, 8, 9, 10, 11, 12, 20]);
}

#[test]
fn test_near_end_of_twenty() {
    let items = build_page_items(19, 20);
    assert!(has(&items, PageItemKind::Prev5));
    assert!(!has(&items, PageItemKind::Next5));
    assert_eq!(window(&items), [1, 16, 17, 18, 19, 20]);
    assert_eq!(items.iter().filter(|i| i.index == Some(20)).count(), 1);
}

#[test]
fn test_head_window_boundary() {
    // 3 is the last page using the head window, 4 the first using the middle one
    assert_eq!(window(&build_page_items(3, 20)), [1, 2, 3, 4, 5, 20]);
    assert!(!has(&build_page_items(3, 20), PageItemKind::Prev5));

    let items = build_page_items(4, 20);
    assert_eq!(window(&items), [1, 2, 3, 4, 5, 6, 20]);
    assert!(has(&items, PageItemKind::Prev5));
    assert!(has(&items, PageItemKind::Next5));
}

#[test]
fn test_tail_window_boundary() {
    // last - 4 is the last page using the middle window, last - 3 the first using the tail one
    let items = build_page_items(16, 20);
    assert_eq!(window(&items), [1, 14, 15, 16, 17, 18, 20]);
    assert!(has(&items, PageItemKind::Next5));

    let items = build_page_items(17, 20);
    assert_eq!(window(&items), [1, 16, 17, 18, 19, 20]);
    assert!(!has(&items, PageItemKind::Next5));
}

#[test]
fn test_ten_pages_at_every_index() {
    assert_eq!(window(&build_page_items(6, 10)), [1, 4, 5, 6, 7, 8, 10]);
    assert_eq!(window(&build_page_items(7, 10)), [1, 6, 7, 8, 9, 10]);
    assert_eq!(
        keys(&build_page_items(10, 10)),
        [
            "prev", "page-1", "prev_5", "page-6", "page-7", "page-8", "page-9", "page-10",
            "next"
        ]
    );
}

#[test]
fn test_prev_next_disabled_at_ends() {
    for last in [1, 5, 9, 10, 37] {
        for page in 1..=last {
            let items = build_page_items(page, last);
            let prev = items[0];
            let next = items[items.len() - 1];
            assert_eq!(prev.kind, PageItemKind::Prev);
            assert_eq!(next.kind, PageItemKind::Next);
            assert_eq!(prev.disabled, page == 1);
            assert_eq!(next.disabled, page == last);
        }
    }
}

#[test]
fn test_single_page_disables_both_ends() {
    let items = build_page_items(1, 1);
    assert_eq!(keys(&items), ["prev", "page-1", "next"]);
    assert!(items[0].disabled);
    assert!(items[2].disabled);
}

#[test]
fn test_builder_is_idempotent() {
    assert_eq!(build_page_items(13, 42), build_page_items(13, 42));
}

#[test]
fn test_only_prev_next_are_disabled() {
    let items = build_page_items(1, 30);
    assert!(
        items
            .iter()
            .filter(|i| i.disabled)
            .all(|i| i.kind == PageItemKind::Prev)
    );
}

#[test]
fn test_page_item_serializes_with_type_names() {
    let json = serde_json::to_string(&build_page_items(10, 20)[2]).unwrap();
    assert_eq!(json, r#"{"type":"prev_5","disabled":false}"#);

    let page: PageItem = serde_json::from_str(r#"{"type":"page","index":7}"#).unwrap();
    assert_eq!(page, PageItem::page(7));
}
