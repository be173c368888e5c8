//! Tests for pagination state, the default view, its options and the owner.

use trellis::widgets::events::{EventQueue, WidgetEvent, WidgetEventKind};
use trellis::widgets::pagination::{
    ItemRenderContext, PageItem, PageItemKind, Pagination, PaginationConfig, PaginationDefault,
    PaginationError, PaginationLocale, PaginationOptions, PaginationSize, PaginationState,
};

fn state(total: usize, page_size: usize, page_index: usize) -> PaginationState {
    PaginationState::new(total, page_size, page_index).unwrap()
}

fn kinds(queue: &EventQueue) -> Vec<WidgetEventKind> {
    queue.drain().into_iter().map(|e| e.kind).collect()
}

// =============================================================================
// State
// =============================================================================

#[test]
fn test_ranges_middle_page() {
    assert_eq!(state(95, 10, 3).ranges(), (21, 30));
}

#[test]
fn test_ranges_clamped_on_last_page() {
    assert_eq!(state(95, 10, 10).ranges(), (91, 95));
}

#[test]
fn test_empty_total_has_one_page_and_empty_range() {
    let empty = state(0, 10, 1);
    assert_eq!(empty.last_index(), 1);
    assert_eq!(empty.ranges(), (0, 0));
    assert_eq!(empty.page_items().len(), 3);
}

#[test]
fn test_zero_page_size_rejected() {
    assert_eq!(
        PaginationState::new(10, 0, 1),
        Err(PaginationError::ZeroPageSize)
    );
    assert_eq!(
        state(10, 5, 1).with_page_size(0),
        Err(PaginationError::ZeroPageSize)
    );
}

#[test]
fn test_last_index_rounds_up() {
    assert_eq!(state(95, 10, 1).last_index(), 10);
    assert_eq!(state(100, 10, 1).last_index(), 10);
    assert_eq!(state(101, 10, 1).last_index(), 11);
}

#[test]
fn test_validate_page_index_clamps() {
    let s = state(95, 10, 1);
    assert_eq!(s.validate_page_index(-4), 1);
    assert_eq!(s.validate_page_index(0), 1);
    assert_eq!(s.validate_page_index(7), 7);
    assert_eq!(s.validate_page_index(11), 10);
}

// =============================================================================
// Default view
// =============================================================================

#[test]
fn test_apply_recomputes_only_on_change() {
    let view = PaginationDefault::new();
    assert!(view.apply(state(95, 10, 3)));
    view.clear_dirty();
    assert!(!view.apply(state(95, 10, 3)));
    assert!(!view.is_dirty());

    assert!(view.apply(state(200, 10, 3)));
    assert!(view.is_dirty());
    assert_eq!(view.items().iter().filter_map(|i| i.index).max(), Some(20));
}

#[test]
fn test_view_does_not_update_itself_on_jump() {
    let view = PaginationDefault::new();
    view.apply(state(95, 10, 3));
    let queue = EventQueue::new();

    view.jump_page(7, &queue);
    assert_eq!(view.page_index(), 3);
    assert_eq!(kinds(&queue), [WidgetEventKind::PageIndexChange(7)]);
}

#[test]
fn test_jump_diff_is_unclamped() {
    let view = PaginationDefault::new();
    view.apply(state(200, 10, 4));
    let queue = EventQueue::new();

    view.jump_diff(-5, &queue);
    view.jump_diff(5, &queue);
    assert_eq!(
        kinds(&queue),
        [
            WidgetEventKind::PageIndexChange(-1),
            WidgetEventKind::PageIndexChange(9)
        ]
    );
}

#[test]
fn test_click_item_maps_kinds_to_jumps() {
    let view = PaginationDefault::new();
    view.apply(state(200, 10, 10));
    let queue = EventQueue::new();

    for kind in [
        PageItemKind::Prev,
        PageItemKind::Next,
        PageItemKind::Prev5,
        PageItemKind::Next5,
    ] {
        assert!(view.click_item(&PageItem::control(kind), &queue).is_handled());
    }
    view.click_item(&PageItem::page(13), &queue);

    assert_eq!(
        kinds(&queue),
        [
            WidgetEventKind::PageIndexChange(9),
            WidgetEventKind::PageIndexChange(11),
            WidgetEventKind::PageIndexChange(5),
            WidgetEventKind::PageIndexChange(15),
            WidgetEventKind::PageIndexChange(13),
        ]
    );
}

#[test]
fn test_click_disabled_item_is_ignored() {
    let view = PaginationDefault::new();
    view.apply(state(95, 10, 1));
    let queue = EventQueue::new();

    let prev = view.items()[0];
    assert!(prev.disabled);
    assert!(!view.click_item(&prev, &queue).is_handled());
    assert!(queue.is_empty());
}

#[test]
fn test_events_carry_view_id() {
    let view = PaginationDefault::new();
    let queue = EventQueue::new();
    view.jump_page(2, &queue);
    view.change_page_size(20, &queue);

    for event in queue.drain() {
        assert_eq!(event.widget_id, view.id_string());
    }
}

#[test]
fn test_display_helpers() {
    let config = PaginationConfig::new().small().show_quick_jumper();
    let view = PaginationDefault::with_config(config)
        .with_total_render(|total: usize, (start, end): (usize, usize)| {
            format!("{start}-{end} of {total} items")
        });
    view.apply(state(95, 10, 3));

    assert!(view.is_small());
    assert!(view.shows_options());
    assert!(!view.is_disabled());
    assert_eq!(view.total_text().as_deref(), Some("21-30 of 95 items"));

    let items = view.items();
    let active: Vec<_> = items.iter().filter(|i| view.is_active(i)).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].index, Some(3));

    assert_eq!(view.item_title(&items[0]), "Previous Page");
    assert_eq!(view.item_title(&PageItem::page(4)), "4");
    assert_eq!(view.item_label(&items[0]), "<");
    assert_eq!(view.item_label(&PageItem::page(4)), "4");
}

#[test]
fn test_total_text_absent_without_renderer() {
    let view = PaginationDefault::new();
    view.apply(state(95, 10, 3));
    assert_eq!(view.total_text(), None);
}

fn bracket_active(cx: &ItemRenderContext<'_>) -> String {
    match cx.item.index {
        Some(index) if cx.active => format!("[{index}]"),
        Some(index) => index.to_string(),
        None => cx.item.title(cx.locale),
    }
}

#[test]
fn test_custom_item_render() {
    let view = PaginationDefault::new().with_item_render(bracket_active);
    view.apply(state(95, 10, 2));

    assert_eq!(view.item_label(&PageItem::page(2)), "[2]");
    assert_eq!(view.item_label(&PageItem::page(3)), "3");
    assert_eq!(
        view.item_label(&PageItem::control(PageItemKind::Next)),
        "Next Page"
    );
}

#[test]
fn test_view_forwards_size_change_unmodified() {
    let view = PaginationDefault::with_config(PaginationConfig::new().show_size_changer());
    view.apply(state(95, 10, 3));
    let queue = EventQueue::new();

    assert!(view.change_page_size(30, &queue).is_handled());
    assert_eq!(kinds(&queue), [WidgetEventKind::PageSizeChange(30)]);
    assert_eq!(view.state().page_size(), 10);
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn test_size_options_include_current_size_once() {
    let options = PaginationOptions::new();
    options.set_page(1, 25);
    let values: Vec<usize> = options.size_options().iter().map(|o| o.value).collect();
    assert_eq!(values, [10, 20, 30, 40, 25]);

    options.set_page(1, 20);
    let values: Vec<usize> = options.size_options().iter().map(|o| o.value).collect();
    assert_eq!(values, [10, 20, 30, 40]);
}

#[test]
fn test_size_options_deduplicate_configured_sizes() {
    let options = PaginationOptions::new();
    options.set_page_size_options(vec![50, 10, 50]);
    let values: Vec<usize> = options.size_options().iter().map(|o| o.value).collect();
    assert_eq!(values, [50, 10]);
}

#[test]
fn test_size_option_labels_use_locale() {
    let options = PaginationOptions::new();
    assert_eq!(options.size_options()[0].label, "10 / page");

    options.set_locale(PaginationLocale {
        items_per_page: "条/页".into(),
        ..Default::default()
    });
    assert_eq!(options.size_options()[1].label, "20 条/页");
}

#[test]
fn test_select_current_size_is_ignored() {
    let options = PaginationOptions::new();
    let queue = EventQueue::new();
    assert!(!options.select_page_size(10, &queue).is_handled());
    assert!(options.select_page_size(40, &queue).is_handled());
    assert_eq!(kinds(&queue), [WidgetEventKind::PageSizeChange(40)]);
}

#[test]
fn test_quick_jumper_parses_input() {
    let options = PaginationOptions::new();
    options.set_page(4, 10);
    let queue = EventQueue::new();

    options.jump_to_page_via_input("7", &queue);
    options.jump_to_page_via_input(" 8.9 ", &queue);
    options.jump_to_page_via_input("abc", &queue);
    options.jump_to_page_via_input("", &queue);

    assert_eq!(
        kinds(&queue),
        [
            WidgetEventKind::PageIndexChange(7),
            WidgetEventKind::PageIndexChange(8),
            WidgetEventKind::PageIndexChange(4),
            WidgetEventKind::PageIndexChange(4),
        ]
    );
}

#[test]
fn test_disabled_options_ignore_input() {
    let options = PaginationOptions::new();
    options.set_disabled(true);
    let queue = EventQueue::new();

    assert!(!options.jump_to_page_via_input("3", &queue).is_handled());
    assert!(!options.select_page_size(20, &queue).is_handled());
    assert!(queue.is_empty());
}

// =============================================================================
// Owner
// =============================================================================

#[test]
fn test_owner_clamps_and_applies() {
    let pagination = Pagination::new(state(95, 10, 1));
    let host = EventQueue::new();

    assert!(pagination.quick_jump("99", &host).is_handled());
    assert_eq!(pagination.state().page_index(), 10);
    assert_eq!(pagination.view().page_index(), 10);
    assert_eq!(pagination.view().ranges(), (91, 95));

    let events = host.drain();
    assert_eq!(
        events,
        [WidgetEvent::new(
            WidgetEventKind::PageIndexChange(10),
            pagination.id_string()
        )]
    );
}

#[test]
fn test_owner_drops_noop_requests() {
    let pagination = Pagination::new(state(95, 10, 1));
    let host = EventQueue::new();

    // prev_5 from page 1 clamps back to page 1
    assert!(
        !pagination
            .click_item(&PageItem::control(PageItemKind::Prev5), &host)
            .is_handled()
    );
    assert!(host.is_empty());
}

#[test]
fn test_owner_ignores_requests_when_disabled() {
    let pagination = Pagination::with_config(state(95, 10, 1), PaginationConfig::new().disabled());
    let host = EventQueue::new();

    pagination.click_item(&PageItem::page(5), &host);
    assert_eq!(pagination.state().page_index(), 1);
    assert!(host.is_empty());
}

#[test]
fn test_owner_page_size_change_follows_last_index() {
    let pagination = Pagination::new(state(95, 10, 10));
    let host = EventQueue::new();

    assert!(pagination.change_page_size(40, &host).is_handled());
    assert_eq!(pagination.state().page_size(), 40);
    assert_eq!(pagination.state().page_index(), 3);
    assert_eq!(
        kinds(&host),
        [
            WidgetEventKind::PageSizeChange(40),
            WidgetEventKind::PageIndexChange(3)
        ]
    );
}

#[test]
fn test_owner_ignores_foreign_events() {
    let pagination = Pagination::new(state(95, 10, 1));
    let host = EventQueue::new();
    let foreign = WidgetEvent::new(WidgetEventKind::PageIndexChange(3), "__checkbox_0");

    assert!(!pagination.handle_event(&foreign, &host).is_handled());
    assert_eq!(pagination.state().page_index(), 1);
}

#[test]
fn test_owner_setters_do_not_emit() {
    let pagination = Pagination::new(state(95, 10, 1));
    pagination.set_total(300);
    pagination.set_page_index(12);
    assert_eq!(pagination.last_index(), 30);
    assert_eq!(pagination.view().ranges(), (111, 120));
    assert_eq!(
        pagination.set_page_size(0),
        Err(PaginationError::ZeroPageSize)
    );
    assert_eq!(pagination.state().page_size(), 10);
}

#[test]
fn test_hide_on_single_page() {
    let pagination = Pagination::with_config(
        state(8, 10, 1),
        PaginationConfig::new().hide_on_single_page(),
    );
    assert!(pagination.is_hidden());
    pagination.set_total(11);
    assert!(!pagination.is_hidden());
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: PaginationConfig =
        serde_json::from_str(r#"{"size":"small","show_size_changer":true}"#).unwrap();
    assert_eq!(config.size, PaginationSize::Small);
    assert!(config.show_size_changer);
    assert_eq!(config.page_size_options, [10, 20, 30, 40]);
    assert_eq!(config.locale.next_5, "Next 5 Pages");
}
