//! Viewport measurement.
//!
//! A table with a height cap needs to know its content's natural size
//! before it can window rows. Measurement is a one-shot state machine:
//! it starts `Unmeasured`, runs once after mount, and stays `Measured`
//! so further renders never re-trigger it.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::node::{Node, Tag};

/// Measured content dimensions, in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: u16,
    pub width: u16,
}

impl Viewport {
    pub const fn new(height: u16, width: u16) -> Self {
        Self { height, width }
    }
}

/// Whether content dimensions have been captured yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Measurement {
    #[default]
    Unmeasured,
    Measured(Viewport),
}

impl Measurement {
    pub fn viewport(&self) -> Option<Viewport> {
        match self {
            Self::Unmeasured => None,
            Self::Measured(v) => Some(*v),
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, Self::Measured(_))
    }
}

/// Measure a rendered body: height is row count times the fixed item
/// height, width is the widest row's summed cell text width.
pub fn measure_body(body: &Node, item_height: u16) -> Viewport {
    let rows = body.find_all(Tag::Row);
    let height = (rows.len() as u16).saturating_mul(item_height);
    let width = rows
        .iter()
        .map(|row| {
            row.children
                .iter()
                .map(|cell| cell.text_content().width() as u16)
                .sum::<u16>()
        })
        .max()
        .unwrap_or(0);
    Viewport { height, width }
}
