//! Sortable, optionally virtualized table.
//!
//! The table is cheap to clone and safe to share: all state lives
//! behind an `Arc<RwLock>`, and a shared dirty flag tells the host
//! when a re-render is due. Rendering is pure with respect to the
//! data: sorting never mutates the caller's collection.
//!
//! Lifecycle: construct, render once, call [`Table::did_mount`], and
//! render again. When a height cap is configured the first render
//! produces an empty body, the mount hook measures it against the cap,
//! and the second render windows rows into the measured viewport.

pub mod body;
pub mod config;
pub mod header;

mod events;

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::ConfigError;
use crate::input::EventResult;
use crate::node::{Element, Node, Tag};
use crate::row::Row;
use crate::sort::{self, SortState};
use crate::transitions::TransitionGroup;
use crate::viewport::{measure_body, Measurement};
use crate::virtualized::VirtualWindow;

pub use config::{RowOptionsFn, SortCallback, TableConfig};

static NEXT_TABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-unique identifier, used in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn next() -> Self {
        Self(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table-{}", self.0)
    }
}

struct TableInner {
    config: TableConfig,
    data: Arc<Vec<Row>>,
    sort_by: SortState,
    measurement: Measurement,
    window: Option<VirtualWindow>,
    transition_rows: Option<TransitionGroup>,
    mounted: bool,
}

/// A sortable table over shared row data.
#[derive(Clone)]
pub struct Table {
    id: TableId,
    inner: Arc<RwLock<TableInner>>,
    dirty: Arc<AtomicBool>,
}

impl Table {
    /// Validate the configuration, seed the initial sort, and build
    /// the table.
    pub fn new(config: TableConfig, data: Arc<Vec<Row>>) -> Result<Self, ConfigError> {
        config.validate()?;
        let id = TableId::next();

        let window = config.content_max_height.map(|cap| {
            VirtualWindow::new(cap, config.item_height)
                .with_scroll_delay(config.scroll_delay)
        });
        let transition_rows = config
            .transition
            .then(|| TransitionGroup::new("table-row"));

        let table = Self {
            id,
            inner: Arc::new(RwLock::new(TableInner {
                config,
                data,
                sort_by: SortState::unsorted(),
                measurement: Measurement::default(),
                window,
                transition_rows,
                mounted: false,
            })),
            dirty: Arc::new(AtomicBool::new(true)),
        };

        // An initial sort with an explicit order is adopted as-is; a
        // bare prop goes through the toggle like a first click.
        let initial = {
            let inner = table.read();
            inner.config.sort_by.clone()
        };
        if let Some(initial) = initial {
            match initial.order {
                Some(_) => table.apply_sort(initial),
                None => {
                    if let Some(prop) = initial.prop {
                        let next = {
                            let inner = table.read();
                            sort::toggle(&inner.sort_by, &prop)
                        };
                        table.apply_sort(next);
                    }
                }
            }
        }
        Ok(table)
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, TableInner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, TableInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Whether a re-render is due. Cleared by [`Table::render`].
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// The current sort state.
    pub fn sort_by(&self) -> SortState {
        self.read().sort_by.clone()
    }

    fn apply_sort(&self, next: SortState) {
        let (previous, callback) = {
            let mut inner = self.write();
            let previous = std::mem::replace(&mut inner.sort_by, next.clone());
            (previous, inner.config.on_sort.clone())
        };
        log::debug!(
            "{}: sort {:?} {:?} -> {:?} {:?}",
            self.id,
            previous.prop,
            previous.order,
            next.prop,
            next.order
        );
        self.mark_dirty();
        // The callback observes the state that was replaced.
        if let Some(callback) = callback {
            callback(&previous);
        }
    }

    /// Run the toggle for a clicked header. Ignored when the column is
    /// not sortable or unknown.
    pub fn click_header(&self, prop: &str) -> EventResult {
        let sortable = {
            let inner = self.read();
            inner
                .config
                .columns
                .iter()
                .any(|c| c.is_sortable() && c.prop.as_deref() == Some(prop))
        };
        if !sortable {
            return EventResult::Ignored;
        }
        let next = {
            let inner = self.read();
            sort::toggle(&inner.sort_by, prop)
        };
        self.apply_sort(next);
        EventResult::Consumed
    }

    /// Set the sort state directly, bypassing the toggle.
    pub fn set_sort(&self, sort_by: SortState) {
        self.apply_sort(sort_by);
    }

    /// Swap in a new collection. Dirty only when the allocation
    /// actually changed.
    pub fn set_data(&self, data: Arc<Vec<Row>>) {
        let changed = {
            let mut inner = self.write();
            let changed = !Arc::ptr_eq(&inner.data, &data);
            if changed {
                inner.data = data;
            }
            changed
        };
        if changed {
            self.mark_dirty();
        }
    }

    /// Change the height cap after construction. Resets measurement so
    /// the next mount cycle measures against the new cap.
    pub fn set_content_max_height(&self, height: Option<u16>) {
        {
            let mut inner = self.write();
            inner.config.content_max_height = height;
            inner.measurement = Measurement::Unmeasured;
            inner.window = height.map(|cap| {
                VirtualWindow::new(cap, inner.config.item_height)
                    .with_scroll_delay(inner.config.scroll_delay)
            });
            inner.mounted = false;
        }
        self.mark_dirty();
    }

    /// Post-mount hook. Measures the body once when a height cap is
    /// configured; later calls are no-ops.
    pub fn did_mount(&self) {
        let measure = {
            let mut inner = self.write();
            if inner.mounted {
                return;
            }
            inner.mounted = true;
            inner.config.content_max_height.is_some() && !inner.measurement.is_measured()
        };
        if !measure {
            return;
        }
        let viewport = {
            let inner = self.read();
            let sorted = sort::sort_data(&inner.config.columns, &inner.data, &inner.sort_by);
            let body = Element::new(Tag::Body)
                .children(body::build_rows(&sorted, &inner.config, &inner.sort_by))
                .build();
            let mut viewport = measure_body(&body, inner.config.item_height);
            // The viewport is capped, the content may not be.
            if let Some(cap) = inner.config.content_max_height {
                viewport.height = viewport.height.min(cap);
            }
            viewport
        };
        {
            let mut inner = self.write();
            inner.measurement = Measurement::Measured(viewport);
        }
        log::debug!("{}: measured {}x{}", self.id, viewport.width, viewport.height);
        self.mark_dirty();
    }

    /// Scroll the virtualized body by a signed number of rows.
    pub fn scroll_rows(&self, delta: i32) -> EventResult {
        let applied = {
            let mut inner = self.write();
            let item_height = i32::from(inner.config.item_height);
            match &mut inner.window {
                Some(window) => window.scroll_by(delta.saturating_mul(item_height)),
                None => false,
            }
        };
        if applied {
            self.mark_dirty();
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Which column a header click at `x` lands on, assuming columns
    /// share the width evenly.
    pub fn column_at(&self, x: u16, width: u16) -> Option<usize> {
        let count = self.read().config.columns.len();
        if count == 0 || width == 0 {
            return None;
        }
        let column_width = (width / count as u16).max(1);
        let index = (x / column_width) as usize;
        (index < count).then_some(index)
    }

    /// Build the render tree and clear the dirty flag.
    pub fn render(&self) -> Node {
        let mut inner = self.write();
        let TableInner {
            config,
            data,
            sort_by,
            measurement,
            window,
            transition_rows,
            ..
        } = &mut *inner;

        let sorted = sort::sort_data(&config.columns, data, sort_by);

        let head = Element::new(Tag::Head)
            .child(
                Element::new(Tag::Row)
                    .children(header::build_headers(&config.columns, sort_by)),
            )
            .build();

        let body = match (window.as_mut(), *measurement) {
            (Some(window), Measurement::Measured(viewport)) => {
                window.set_items(&sorted);
                let range = window.visible_range(viewport.height, sorted.len());
                let rows = body::build_rows(&sorted[range], config, sort_by);
                let list = Element::new(Tag::Container)
                    .class("virtual-list")
                    .children(rows)
                    .build();
                let scroll_table = Element::new(Tag::Table)
                    .class(config.scroll_element_class.as_str());
                let scroll_table = match &config.col_group {
                    Some(group) => scroll_table.child(group.clone()),
                    None => scroll_table,
                }
                .child(list)
                .build();
                let container = Element::new(Tag::Container)
                    .class(config.scroll_container_class.as_str())
                    .attr("height", viewport.height.to_string())
                    .child(scroll_table)
                    .build();
                let wrapper = Element::new(Tag::Row)
                    .child(
                        Element::new(Tag::Cell)
                            .span(config.columns.len().max(1))
                            .class(config.scroll_table_class.as_str())
                            .child(container),
                    )
                    .build();
                Element::new(Tag::Body).child(wrapper).build()
            }
            // Height cap configured but not measured yet: render an
            // intentionally empty body for the measuring pass.
            (Some(_), Measurement::Unmeasured) => {
                Element::new(Tag::Body).build()
            }
            _ => {
                let rows = body::build_rows(&sorted, config, sort_by);
                let rows = match transition_rows.as_mut() {
                    Some(group) => vec![group.reconcile(rows)],
                    None => rows,
                };
                Element::new(Tag::Body).children(rows).build()
            }
        };

        let mut table = Element::new(Tag::Table);
        if let Some(class) = &config.class_name {
            table = table.class(class.as_str());
        }
        let table = match &config.col_group {
            Some(group) if !measurement.is_measured() || window.is_none() => {
                table.child(group.clone())
            }
            _ => table,
        };
        let node = table.child(head).child(body).build();

        drop(inner);
        self.dirty.store(false, Ordering::Release);
        node
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("rows", &inner.data.len())
            .field("sort_by", &inner.sort_by)
            .field("measurement", &inner.measurement)
            .field("dirty", &self.is_dirty())
            .finish_non_exhaustive()
    }
}
