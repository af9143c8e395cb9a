//! Column definitions.
//!
//! A [`Column`] is an explicit typed configuration struct, validated when
//! the table is constructed. The heading is required; everything else is
//! builder-optional.
//!
//! # Example
//!
//! ```ignore
//! let columns = vec![
//!     Column::new("Name").prop("name"),
//!     Column::new("Age").prop("age").default_content(0),
//!     Column::new("Notes").sortable(false),
//! ];
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::row::Row;
use crate::sort::{SortFunction, SortOrder, SortState};
use crate::value::Value;

/// Function form of a heading: `(prop, current order, sort state)`.
///
/// The order argument is the table's current direction when this column is
/// sortable, absent otherwise, which lets a heading render its own
/// direction indicator.
pub type HeadingFn = Arc<dyn Fn(Option<&str>, Option<SortOrder>, &SortState) -> String + Send + Sync>;

/// A column heading: a static label or a function of the sort state.
#[derive(Clone)]
pub enum Heading {
    Static(String),
    Render(HeadingFn),
}

impl Heading {
    /// Resolve the heading text for the current sort state.
    pub fn resolve(&self, prop: Option<&str>, order: Option<SortOrder>, sort_by: &SortState) -> String {
        match self {
            Heading::Static(s) => s.clone(),
            Heading::Render(f) => f(prop, order, sort_by),
        }
    }
}

impl fmt::Debug for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Heading::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Function form of a class resolver: `(prop, sort state, row)`.
/// Row is absent when resolving a header cell.
pub type ClassFn = Arc<dyn Fn(Option<&str>, &SortState, Option<&Row>) -> String + Send + Sync>;

/// Per-column CSS class: nothing, a static string, or a resolver.
#[derive(Clone, Default)]
pub enum ClassName {
    #[default]
    None,
    Static(String),
    Resolve(ClassFn),
}

impl ClassName {
    /// Resolve the class for a header (`row = None`) or a body cell.
    pub fn resolve(&self, prop: Option<&str>, sort_by: &SortState, row: Option<&Row>) -> String {
        match self {
            ClassName::None => String::new(),
            ClassName::Static(s) => s.clone(),
            ClassName::Resolve(f) => f(prop, sort_by, row),
        }
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassName::None => f.write_str("None"),
            ClassName::Static(s) => f.debug_tuple("Static").field(s).finish(),
            ClassName::Resolve(_) => f.write_str("Resolve(..)"),
        }
    }
}

/// Custom cell renderer: `(prop, row)` to the value to display, or `None`
/// to fall through to the column's default content.
pub type CellRenderFn = Arc<dyn Fn(&str, &Row) -> Option<Value> + Send + Sync>;

/// A table column definition.
#[derive(Clone)]
pub struct Column {
    /// The row field this column reads. A column without a `prop` is never
    /// sortable, whatever `sortable` says.
    pub prop: Option<String>,
    /// Header content. Required.
    pub heading: Heading,
    /// Whether header activation sorts by this column. Defaults to true.
    pub sortable: bool,
    /// Custom sort key extraction (see [`SortFunction`]).
    pub sort_function: Option<SortFunction>,
    /// Custom cell renderer; when absent the cell shows `row[prop]`.
    pub render: Option<CellRenderFn>,
    /// Substituted when the resolved cell value is absent.
    pub default_content: Option<Value>,
    /// CSS class for this column's cells and header.
    pub class_name: ClassName,
    /// Extra attributes applied to this column's body cells.
    pub attributes: BTreeMap<String, String>,
}

impl Column {
    /// Create a column with a static heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            prop: None,
            heading: Heading::Static(heading.into()),
            sortable: true,
            sort_function: None,
            render: None,
            default_content: None,
            class_name: ClassName::None,
            attributes: BTreeMap::new(),
        }
    }

    /// Create a column whose heading is rendered from the sort state.
    pub fn with_heading_fn(
        f: impl Fn(Option<&str>, Option<SortOrder>, &SortState) -> String + Send + Sync + 'static,
    ) -> Self {
        let mut column = Self::new("");
        column.heading = Heading::Render(Arc::new(f));
        column
    }

    /// Set the row field this column reads.
    pub fn prop(mut self, prop: impl Into<String>) -> Self {
        self.prop = Some(prop.into());
        self
    }

    /// Set whether this column is sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set a custom sort key extractor factory.
    pub fn sort_function(
        mut self,
        f: impl Fn(&str) -> crate::sort::SortKeyFn + Send + Sync + 'static,
    ) -> Self {
        self.sort_function = Some(Arc::new(f));
        self
    }

    /// Set a custom cell renderer.
    pub fn render(
        mut self,
        f: impl Fn(&str, &Row) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    /// Set the content substituted into empty cells.
    pub fn default_content(mut self, value: impl Into<Value>) -> Self {
        self.default_content = Some(value.into());
        self
    }

    /// Set a static CSS class.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = ClassName::Static(class.into());
        self
    }

    /// Set a class resolver.
    pub fn class_fn(
        mut self,
        f: impl Fn(Option<&str>, &SortState, Option<&Row>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.class_name = ClassName::Resolve(Arc::new(f));
        self
    }

    /// Add an attribute to this column's body cells.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Whether header activation may sort by this column: requires both the
    /// `sortable` flag and a `prop`.
    pub fn is_sortable(&self) -> bool {
        self.sortable && self.prop.is_some()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("prop", &self.prop)
            .field("heading", &self.heading)
            .field("sortable", &self.sortable)
            .field("sort_function", &self.sort_function.as_ref().map(|_| ".."))
            .field("render", &self.render.as_ref().map(|_| ".."))
            .field("default_content", &self.default_content)
            .field("class_name", &self.class_name)
            .field("attributes", &self.attributes)
            .finish()
    }
}
