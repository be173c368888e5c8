//! Tests for the checkbox widgets.

use std::cell::RefCell;

use trellis::widgets::checkbox::{Checkbox, CheckboxGroup, CheckboxOption, CheckboxWrapper};
use trellis::widgets::events::{EventQueue, WidgetEvent, WidgetEventKind};
use trellis::widgets::traits::AnyWidget;

#[test]
fn test_checkbox_click_toggles_and_notifies() {
    let checkbox = Checkbox::with_label("Remember me");
    let queue = EventQueue::new();

    assert!(checkbox.click(&queue).is_handled());
    assert!(checkbox.is_checked());
    assert!(checkbox.is_dirty());
    assert_eq!(
        queue.drain(),
        [WidgetEvent::new(WidgetEventKind::Change, checkbox.id_string())]
    );

    checkbox.click(&queue);
    assert!(!checkbox.is_checked());
}

#[test]
fn test_disabled_checkbox_ignores_clicks() {
    let checkbox = Checkbox::checked();
    checkbox.set_disabled(true);
    let queue = EventQueue::new();

    assert!(!checkbox.click(&queue).is_handled());
    assert!(checkbox.is_checked());
    assert!(queue.is_empty());
    assert!(!AnyWidget::is_focusable(&checkbox));
}

#[test]
fn test_click_keeps_indeterminate_state() {
    let checkbox = Checkbox::new();
    checkbox.set_indeterminate(true);
    checkbox.click(&EventQueue::new());
    assert!(checkbox.is_indeterminate());
}

#[test]
fn test_set_checked_only_dirties_on_change() {
    let checkbox = Checkbox::new();
    checkbox.set_checked(false);
    assert!(!checkbox.is_dirty());
    checkbox.set_checked(true);
    assert!(checkbox.is_dirty());
}

#[test]
fn test_clones_share_state() {
    let checkbox = Checkbox::new();
    let handle = checkbox.clone();
    handle.toggle();
    assert!(checkbox.is_checked());
    assert_eq!(checkbox.id(), handle.id());
}

#[test]
fn test_closure_event_sink() {
    let seen = RefCell::new(Vec::new());
    let sink = |event: WidgetEvent| seen.borrow_mut().push(event.kind);

    Checkbox::new().click(&sink);
    assert_eq!(*seen.borrow(), [WidgetEventKind::Change]);
}

fn fruit() -> CheckboxGroup {
    CheckboxGroup::with_options(vec![
        CheckboxOption::new("Apple", "apple").checked(),
        CheckboxOption::new("Pear", "pear"),
        CheckboxOption::new("Orange", "orange").disabled(),
    ])
}

#[test]
fn test_group_toggle_updates_checked_values() {
    let group = fruit();
    let queue = EventQueue::new();

    assert!(group.toggle(1, &queue).is_handled());
    assert_eq!(group.checked_values(), ["apple", "pear"]);
    assert_eq!(queue.len(), 1);

    group.toggle(0, &queue);
    assert_eq!(group.checked_values(), ["pear"]);
}

#[test]
fn test_group_ignores_disabled_and_missing_options() {
    let group = fruit();
    let queue = EventQueue::new();

    assert!(!group.toggle(2, &queue).is_handled());
    assert!(!group.toggle(9, &queue).is_handled());
    assert!(queue.is_empty());
    assert!(!group.option(2).unwrap().checked);
}

#[test]
fn test_disabled_group_ignores_toggles() {
    let group = fruit();
    group.set_disabled(true);
    let queue = EventQueue::new();

    assert!(!group.toggle(1, &queue).is_handled());
    assert_eq!(group.checked_values(), ["apple"]);
}

#[test]
fn test_group_options_deserialize() {
    let options: Vec<CheckboxOption> =
        serde_json::from_str(r#"[{"label":"A","value":"a","checked":true},{"label":"B","value":"b"}]"#)
            .unwrap();
    let group = CheckboxGroup::with_options(options);
    assert_eq!(group.len(), 2);
    assert_eq!(group.checked_values(), ["a"]);
}

#[test]
fn test_wrapper_collects_checked_children() {
    let wrapper = CheckboxWrapper::new();
    let a = Checkbox::new().with_value("a");
    let b = Checkbox::new().with_value("b");
    let c = Checkbox::checked().with_value("c");
    for checkbox in [&a, &b, &c] {
        wrapper.add(checkbox);
    }
    assert_eq!(wrapper.checked_values(), ["c"]);

    let queue = EventQueue::new();
    assert!(wrapper.click_child(0, &queue).is_handled());
    assert_eq!(wrapper.checked_values(), ["a", "c"]);

    let ids: Vec<String> = queue.drain().into_iter().map(|e| e.widget_id).collect();
    assert_eq!(ids, [a.id_string(), wrapper.id_string()]);
}

#[test]
fn test_wrapper_skips_disabled_child() {
    let wrapper = CheckboxWrapper::new();
    let locked = Checkbox::new().with_value("locked");
    locked.set_disabled(true);
    wrapper.add(&locked);

    let queue = EventQueue::new();
    assert!(!wrapper.click_child(0, &queue).is_handled());
    assert!(!wrapper.click_child(5, &queue).is_handled());
    assert!(queue.is_empty());
}

#[test]
fn test_wrapper_remove_and_dirty_tracking() {
    let wrapper = CheckboxWrapper::new();
    let a = Checkbox::new();
    wrapper.add(&a);
    wrapper.clear_dirty();
    assert!(!wrapper.is_dirty());

    a.toggle();
    assert!(wrapper.is_dirty());
    wrapper.clear_dirty();
    assert!(!a.is_dirty());

    assert!(wrapper.remove(&a));
    assert!(!wrapper.remove(&a));
    assert!(wrapper.is_empty());
}
