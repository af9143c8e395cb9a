//! Row windowing for capped-height tables.
//!
//! The window tracks a scroll offset and the collection being shown,
//! and answers which slice of rows must actually be built. Items are
//! compared by pointer identity: replacing the collection with a new
//! allocation invalidates the window even when the contents are equal,
//! and handing back the same `Arc` never does.

use std::ops::Range;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::row::Row;

/// Visible-range tracker for a fixed-item-height list.
#[derive(Debug, Clone)]
pub struct VirtualWindow {
    item_height: u16,
    /// Extra rows rendered above and below the visible span.
    buffer: usize,
    scroll_top: u16,
    scroll_delay: Duration,
    last_scroll: Option<Instant>,
    items: Option<Arc<Vec<Row>>>,
}

impl VirtualWindow {
    /// Buffer size is derived from the height cap: one screenful of
    /// rows on each side.
    pub fn new(content_max_height: u16, item_height: u16) -> Self {
        let buffer = (content_max_height / item_height.max(1)) as usize;
        Self {
            item_height: item_height.max(1),
            buffer,
            scroll_top: 0,
            scroll_delay: Duration::ZERO,
            last_scroll: None,
            items: None,
        }
    }

    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    pub fn buffer(&self) -> usize {
        self.buffer
    }

    pub fn scroll_top(&self) -> u16 {
        self.scroll_top
    }

    /// Jump to an absolute offset. Returns false when the update was
    /// coalesced by the scroll delay or the offset did not change.
    pub fn scroll_to(&mut self, offset: u16) -> bool {
        if !self.scroll_delay.is_zero() {
            let now = Instant::now();
            if let Some(last) = self.last_scroll {
                if now.duration_since(last) < self.scroll_delay {
                    self.scroll_top = offset;
                    return false;
                }
            }
            self.last_scroll = Some(now);
        }
        if self.scroll_top == offset {
            return false;
        }
        self.scroll_top = offset;
        true
    }

    /// Scroll by a signed number of cells, clamping at zero.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let next = (i32::from(self.scroll_top) + delta).max(0) as u16;
        self.scroll_to(next)
    }

    /// Adopt a collection. Returns true when it is a different
    /// allocation than the current one.
    pub fn set_items(&mut self, items: &Arc<Vec<Row>>) -> bool {
        let changed = match &self.items {
            Some(current) => !Arc::ptr_eq(current, items),
            None => true,
        };
        if changed {
            self.items = Some(Arc::clone(items));
            log::trace!(
                "virtual window adopted {} items",
                items.len()
            );
        }
        changed
    }

    /// Index range of rows to build for the given viewport height,
    /// including the buffer on both sides.
    pub fn visible_range(&self, viewport_height: u16, total: usize) -> Range<usize> {
        let first = (self.scroll_top / self.item_height) as usize;
        let last = (u32::from(self.scroll_top) + u32::from(viewport_height))
            .div_ceil(u32::from(self.item_height)) as usize;
        let start = first.saturating_sub(self.buffer).min(total);
        let end = (last + self.buffer).min(total);
        start..end
    }
}
