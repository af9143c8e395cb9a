//! Table configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::column::{Column, Heading};
use crate::error::ConfigError;
use crate::node::Node;
use crate::row::Row;
use crate::sort::SortState;

/// Called after every sort change with the state that was replaced.
pub type SortCallback = Arc<dyn Fn(&SortState) + Send + Sync>;

/// Produces extra attributes for a row element.
pub type RowOptionsFn = Arc<dyn Fn(&Row) -> BTreeMap<String, String> + Send + Sync>;

/// Everything a [`Table`](crate::table::Table) needs besides its data.
#[derive(Clone)]
pub struct TableConfig {
    pub columns: Vec<Column>,
    /// Field names whose values identify a row across re-sorts.
    pub keys: Vec<String>,
    /// Height cap that turns on measurement and virtualization.
    pub content_max_height: Option<u16>,
    /// Fixed height of every row, in cells.
    pub item_height: u16,
    /// Initial sort. A prop without an order runs the toggle instead.
    pub sort_by: Option<SortState>,
    /// Animate row enter/leave.
    pub transition: bool,
    /// Column-group node passed through into scroll tables.
    pub col_group: Option<Node>,
    pub class_name: Option<String>,
    pub scroll_container_class: String,
    pub scroll_element_class: String,
    pub scroll_table_class: String,
    pub scroll_delay: Duration,
    pub on_sort: Option<SortCallback>,
    pub build_row_options: Option<RowOptionsFn>,
}

impl TableConfig {
    pub fn new(columns: Vec<Column>, keys: Vec<String>) -> Self {
        Self {
            columns,
            keys,
            content_max_height: None,
            item_height: 1,
            sort_by: None,
            transition: false,
            col_group: None,
            class_name: None,
            scroll_container_class: "flex-container-col".into(),
            scroll_element_class: "container-scrollable".into(),
            scroll_table_class: "scroll-table".into(),
            scroll_delay: Duration::ZERO,
            on_sort: None,
            build_row_options: None,
        }
    }

    pub fn content_max_height(mut self, height: u16) -> Self {
        self.content_max_height = Some(height);
        self
    }

    pub fn item_height(mut self, height: u16) -> Self {
        self.item_height = height;
        self
    }

    pub fn sort_by(mut self, sort_by: SortState) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn transition(mut self, transition: bool) -> Self {
        self.transition = transition;
        self
    }

    pub fn col_group(mut self, col_group: Node) -> Self {
        self.col_group = Some(col_group);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    pub fn on_sort(mut self, callback: SortCallback) -> Self {
        self.on_sort = Some(callback);
        self
    }

    pub fn build_row_options(mut self, f: RowOptionsFn) -> Self {
        self.build_row_options = Some(f);
        self
    }

    /// Reject configurations that cannot render sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, column) in self.columns.iter().enumerate() {
            if let Heading::Static(text) = &column.heading {
                if text.trim().is_empty() {
                    return Err(ConfigError::EmptyHeading { index });
                }
            }
        }
        let mut seen = std::collections::BTreeSet::new();
        for column in &self.columns {
            if let Some(prop) = &column.prop {
                if !seen.insert(prop.clone()) {
                    return Err(ConfigError::DuplicateProp { prop: prop.clone() });
                }
            }
        }
        if self.keys.is_empty() {
            return Err(ConfigError::EmptyKeys);
        }
        if self.item_height == 0 {
            return Err(ConfigError::ZeroItemHeight);
        }
        if self.content_max_height == Some(0) {
            return Err(ConfigError::ZeroContentMaxHeight);
        }
        Ok(())
    }
}

impl fmt::Debug for TableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("columns", &self.columns)
            .field("keys", &self.keys)
            .field("content_max_height", &self.content_max_height)
            .field("item_height", &self.item_height)
            .field("sort_by", &self.sort_by)
            .field("transition", &self.transition)
            .field("class_name", &self.class_name)
            .field("scroll_delay", &self.scroll_delay)
            .field("on_sort", &self.on_sort.as_ref().map(|_| "..."))
            .field("build_row_options", &self.build_row_options.as_ref().map(|_| "..."))
            .finish_non_exhaustive()
    }
}
