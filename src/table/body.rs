//! Body row and cell construction.

use crate::column::Column;
use crate::node::{Element, Node, Tag};
use crate::row::Row;
use crate::sort::SortState;
use crate::table::config::TableConfig;
use crate::value::Value;

/// Build the body rows, or the single placeholder row when the data is
/// empty.
pub fn build_rows(
    data: &[Row],
    config: &TableConfig,
    sort_by: &SortState,
) -> Vec<Node> {
    if data.is_empty() {
        return vec![build_empty_row(config.columns.len())];
    }
    data.iter()
        .map(|row| build_row(row, config, sort_by))
        .collect()
}

/// A single full-width row shown when there is nothing to render.
fn build_empty_row(column_count: usize) -> Node {
    Element::new(Tag::Row)
        .key("empty-row")
        .child(
            Element::new(Tag::Cell)
                .span(column_count.max(1))
                .text("No data."),
        )
        .into()
}

/// Build one row. The row's key is its identity projected onto the
/// configured key fields, so it survives re-sorting.
pub fn build_row(row: &Row, config: &TableConfig, sort_by: &SortState) -> Node {
    let mut element = Element::new(Tag::Row);
    if let Some(build_options) = &config.build_row_options {
        for (name, value) in build_options(row) {
            element = element.attr(name, value);
        }
    }
    // Identity wins over anything build_row_options set.
    element = element.key(row.identity(&config.keys).to_string());
    for (index, column) in config.columns.iter().enumerate() {
        element = element.child(build_cell(index, column, row, sort_by));
    }
    element.into()
}

fn build_cell(index: usize, column: &Column, row: &Row, sort_by: &SortState) -> Node {
    let prop = column.prop.as_deref();
    let raw: Option<Value> = match &column.render {
        Some(render) => render(prop.unwrap_or_default(), row),
        None => prop.and_then(|p| row.get(p).cloned()),
    };

    let mut cell = Element::new(Tag::Cell).key(index.to_string());
    let class = column.class_name.resolve(prop, sort_by, Some(row));
    if !class.is_empty() {
        cell = cell.class(class);
    }
    for (name, value) in &column.attributes {
        cell = cell.attr(name.clone(), value.clone());
    }

    let content = match raw {
        Some(value) => value,
        None => {
            cell = cell.class("empty-cell");
            column.default_content.clone().unwrap_or(Value::Str(String::new()))
        }
    };
    cell.text(content.to_string()).into()
}
