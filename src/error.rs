//! Configuration errors.
//!
//! Malformed configuration is a construction-time fault, surfaced
//! immediately by validation; nothing fails during render.

use thiserror::Error;

/// Errors raised when validating a table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A column's static heading is blank.
    #[error("column {index} has an empty heading")]
    EmptyHeading {
        /// Index of the offending column.
        index: usize,
    },

    /// Two columns read the same row field.
    #[error("duplicate column prop '{prop}'")]
    DuplicateProp {
        /// The repeated prop.
        prop: String,
    },

    /// No identity fields were supplied.
    #[error("`keys` must name at least one identity field")]
    EmptyKeys,

    /// Item height of zero would make the window degenerate.
    #[error("`item_height` must be non-zero")]
    ZeroItemHeight,

    /// A zero max height cannot bound a viewport.
    #[error("`content_max_height` must be non-zero when configured")]
    ZeroContentMaxHeight,
}
