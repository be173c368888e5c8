//! Event handling for the checkbox widgets.

use crate::widgets::events::{EventResult, EventSink, WidgetEvent, WidgetEventKind};
use crate::widgets::traits::AnyWidget;

use super::{Checkbox, CheckboxGroup, CheckboxWrapper};

impl Checkbox {
    /// Toggle on click and notify the owner. Disabled checkboxes ignore clicks.
    pub fn click(&self, cx: &dyn EventSink) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }
        self.toggle();
        cx.push_event(WidgetEvent::new(WidgetEventKind::Change, self.id_string()));
        EventResult::Consumed
    }
}

impl CheckboxGroup {
    /// Toggle the option at `index` and notify the owner.
    pub fn toggle(&self, index: usize, cx: &dyn EventSink) -> EventResult {
        if !self.flip(index) {
            log::trace!("{}: toggle of option {} ignored", self.id_string(), index);
            return EventResult::Ignored;
        }
        cx.push_event(WidgetEvent::new(WidgetEventKind::Change, self.id_string()));
        EventResult::Consumed
    }
}

impl CheckboxWrapper {
    /// Click the child at `index`; if it toggled, the wrapper reports a change too.
    pub fn click_child(&self, index: usize, cx: &dyn EventSink) -> EventResult {
        let Some(child) = self.child(index) else {
            return EventResult::Ignored;
        };
        let result = child.click(cx);
        if result.is_handled() {
            cx.push_event(WidgetEvent::new(WidgetEventKind::Change, self.id_string()));
        }
        result
    }
}

impl AnyWidget for Checkbox {
    fn id(&self) -> String {
        self.id_string()
    }

    fn kind(&self) -> &'static str {
        "checkbox"
    }

    fn is_dirty(&self) -> bool {
        Checkbox::is_dirty(self)
    }

    fn clear_dirty(&self) {
        Checkbox::clear_dirty(self)
    }

    fn is_focusable(&self) -> bool {
        !self.is_disabled()
    }

    fn dispatch_click(&self, cx: &dyn EventSink) -> EventResult {
        self.click(cx)
    }
}

impl AnyWidget for CheckboxGroup {
    fn id(&self) -> String {
        self.id_string()
    }

    fn kind(&self) -> &'static str {
        "checkbox_group"
    }

    fn is_dirty(&self) -> bool {
        CheckboxGroup::is_dirty(self)
    }

    fn clear_dirty(&self) {
        CheckboxGroup::clear_dirty(self)
    }

    fn is_focusable(&self) -> bool {
        !self.is_disabled()
    }
}

impl AnyWidget for CheckboxWrapper {
    fn id(&self) -> String {
        self.id_string()
    }

    fn kind(&self) -> &'static str {
        "checkbox_wrapper"
    }

    fn is_dirty(&self) -> bool {
        CheckboxWrapper::is_dirty(self)
    }

    fn clear_dirty(&self) {
        CheckboxWrapper::clear_dirty(self)
    }

    fn is_focusable(&self) -> bool {
        false
    }
}
