//! Sort state and the sort engine.
//!
//! The engine is a pure function over the row collection: given column
//! definitions and the current [`SortState`] it produces a stably ordered
//! copy, or hands back the input collection untouched when no sort is
//! active. The source collection is externally owned and never mutated in
//! place.
//!
//! Direction follows the invert-by-default convention: the stable sort runs
//! in the key's natural order, that output is the `Desc` presentation, and
//! `Asc` is produced by reversing it. A custom [`sort_function`] is subject
//! to the same rule: its natural output order is treated as descending.
//!
//! [`sort_function`]: crate::column::Column::sort_function

use std::cmp::Ordering;
use std::sync::Arc;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::row::Row;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// The wire/ARIA spelling of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// The active sort criteria: which column and which direction.
///
/// An absent `prop` means unsorted, i.e. rows display in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// The `prop` of the sorted column.
    pub prop: Option<String>,
    /// The active direction.
    pub order: Option<SortOrder>,
}

impl SortState {
    /// The unsorted state.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// A fully specified sort.
    pub fn sorted(prop: impl Into<String>, order: SortOrder) -> Self {
        Self {
            prop: Some(prop.into()),
            order: Some(order),
        }
    }

    /// Whether both a column and a direction are active.
    pub fn is_sorted(&self) -> bool {
        self.prop.is_some() && self.order.is_some()
    }
}

/// The header-activation transition.
///
/// Activating `prop` while it is sorted descending flips to ascending;
/// every other state (unsorted, ascending, or a different column) lands on
/// descending. Once sorted, no sequence of activations reaches unsorted
/// again.
pub fn toggle(current: &SortState, prop: &str) -> SortState {
    let order = match (&current.prop, current.order) {
        (Some(p), Some(SortOrder::Desc)) if p == prop => SortOrder::Asc,
        _ => SortOrder::Desc,
    };
    trace!("sort toggle: {prop} -> {}", order.as_str());
    SortState::sorted(prop, order)
}

/// The key a sort extracts from a row. Rows lacking the field yield `None`,
/// which orders before every present value.
pub type SortKey = Option<Value>;

/// Extracts the sort key from one row.
pub type SortKeyFn = Arc<dyn Fn(&Row) -> SortKey + Send + Sync>;

/// Column-supplied sort customization: given the column's `prop`, returns
/// the key extractor to sort by. This is a higher-order key-extraction
/// function, not a two-argument comparator.
pub type SortFunction = Arc<dyn Fn(&str) -> SortKeyFn + Send + Sync>;

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.total_cmp(b),
    }
}

/// Order the collection according to `sort_by`.
///
/// With no active sort this returns the same shared collection handle, no
/// copy made; callers must not mutate the source in place (swap in a fresh
/// collection instead). With an active sort, the column matching
/// `sort_by.prop` supplies the key extractor via its `sort_function` when
/// declared, falling back to by-field-value extraction. The sort is stable,
/// so ties keep their input order before the `Asc` reversal is applied.
pub fn sort_data(columns: &[Column], data: &Arc<Vec<Row>>, sort_by: &SortState) -> Arc<Vec<Row>> {
    let (Some(prop), Some(order)) = (&sort_by.prop, sort_by.order) else {
        return Arc::clone(data);
    };

    let key_fn = columns
        .iter()
        .find(|c| c.prop.as_deref() == Some(prop.as_str()))
        .and_then(|c| c.sort_function.as_ref())
        .map(|f| f(prop))
        .unwrap_or_else(|| field_key(prop));

    let mut rows: Vec<Row> = data.as_ref().clone();
    rows.sort_by(|a, b| compare_keys(&key_fn(a), &key_fn(b)));

    if order == SortOrder::Asc {
        rows.reverse();
    }

    Arc::new(rows)
}

fn field_key(prop: &str) -> SortKeyFn {
    let prop = prop.to_string();
    Arc::new(move |row: &Row| row.get(&prop).cloned())
}
