//! Sortable, virtualized table components.
//!
//! The centerpiece is [`table::Table`]: a column-configured table over
//! shared row data with a click-to-sort state machine, a two-phase
//! measure-then-render lifecycle, and row windowing for height-capped
//! tables. Around it sit the collaborator surfaces the table and its
//! hosts need: an overlay host for detached subtrees, a modal built on
//! it, and keyed enter/leave transitions for animated row churn.

pub mod column;
pub mod error;
pub mod input;
pub mod modal;
pub mod node;
pub mod overlay;
pub mod row;
pub mod sort;
pub mod state;
pub mod table;
pub mod transitions;
pub mod value;
pub mod viewport;
pub mod virtualized;

pub mod prelude {
    pub use crate::column::{ClassName, Column, Heading};
    pub use crate::error::ConfigError;
    pub use crate::input::{ClickEvent, EventResult, Modifiers, Position, ScrollEvent};
    pub use crate::modal::{Modal, ModalSize};
    pub use crate::node::{Action, Element, Node, Tag};
    pub use crate::overlay::{DetachedOverlay, OverlayHost};
    pub use crate::row::{Row, RowKey};
    pub use crate::sort::{SortOrder, SortState};
    pub use crate::state::State;
    pub use crate::table::{Table, TableConfig, TableId};
    pub use crate::transitions::TransitionGroup;
    pub use crate::value::Value;
    pub use crate::viewport::{Measurement, Viewport};
    pub use crate::virtualized::VirtualWindow;
}
