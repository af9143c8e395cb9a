//! Event dispatch for the table.

use crossterm::event::KeyEvent;

use crate::input::{self, ClickEvent, EventResult, ScrollDirection, ScrollEvent};
use crate::table::Table;

impl Table {
    /// Handle a click in the table's area. Row zero is the header row.
    pub fn on_click(&self, event: &ClickEvent, width: u16) -> EventResult {
        if event.position.y != 0 {
            return EventResult::Ignored;
        }
        let Some(index) = self.column_at(event.position.x, width) else {
            return EventResult::Ignored;
        };
        let prop = {
            let inner = self.read();
            inner.config.columns.get(index).and_then(|c| c.prop.clone())
        };
        match prop {
            Some(prop) => self.click_header(&prop),
            None => EventResult::Ignored,
        }
    }

    /// Handle a scroll over the body.
    pub fn on_scroll(&self, event: &ScrollEvent) -> EventResult {
        let delta = match event.direction {
            ScrollDirection::Up => -i32::from(event.amount),
            ScrollDirection::Down => i32::from(event.amount),
        };
        self.scroll_rows(delta)
    }

    /// Handle a key press while a header has focus. Enter and Space
    /// act like a click on that header.
    pub fn on_key(&self, event: &KeyEvent, focused_column: usize) -> EventResult {
        if !input::is_activate(event) {
            return EventResult::Ignored;
        }
        let prop = {
            let inner = self.read();
            inner
                .config
                .columns
                .get(focused_column)
                .and_then(|c| c.prop.clone())
        };
        match prop {
            Some(prop) => self.click_header(&prop),
            None => EventResult::Ignored,
        }
    }
}
