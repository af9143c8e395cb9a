//! Header row construction.

use crate::column::Column;
use crate::node::{Action, Element, Node, Tag};
use crate::sort::SortState;

/// Build one header cell per column.
///
/// Sortable headers carry a sort action, keyboard focusability, and the
/// ARIA sort attributes for the currently sorted column.
pub fn build_headers(columns: &[Column], sort_by: &SortState) -> Vec<Node> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| build_header(index, column, sort_by))
        .collect()
}

fn build_header(index: usize, column: &Column, sort_by: &SortState) -> Node {
    let prop = column.prop.as_deref();
    let sortable = column.is_sortable();
    let order = if sortable { sort_by.order } else { None };

    let mut cell = Element::new(Tag::HeaderCell).key(index.to_string());

    let class = column.class_name.resolve(prop, sort_by, None);
    if !class.is_empty() {
        cell = cell.class(class);
    }

    if sortable {
        // is_sortable guarantees a prop.
        let prop = prop.unwrap_or_default();
        cell = cell
            .action(Action::Sort { prop: prop.into() })
            .attr("tabindex", "0");
        if let Some(current) = sort_by.order {
            cell = cell.attr("aria-sort", current.as_str());
            cell = cell.attr(
                "aria-label",
                format!("{prop}: activate to sort column {}", current.as_str()),
            );
        } else {
            cell = cell.attr("aria-label", format!("{prop}: activate to sort column"));
        }
    }

    cell.text(column.heading.resolve(prop, order, sort_by)).into()
}
