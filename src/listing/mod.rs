//! Filterable listings over in-memory records
//!
//! Every screen that shows a list (courses, students, course performance,
//! curriculum lessons) goes through this module. Filtering is a pure
//! function of the record slice and a [`FilterState`]; the slice is never
//! mutated and the output keeps the input order.

mod filter;
mod grouped;

pub use filter::{filter, filter_indices, matches, FilterState};
pub use grouped::{filter_grouped, filter_grouped_with, Group, GroupView};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a record across re-filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row that can be searched and narrowed by category.
pub trait Record {
    /// Category dimensions this record type answers to. Selections keyed by
    /// anything else are ignored by the filter.
    const DIMENSIONS: &'static [&'static str];

    fn id(&self) -> RecordId;

    /// Primary text; grouped listings match children on this alone.
    fn title(&self) -> &str;

    /// Fields the text query is matched against, in display order.
    fn searchable_text(&self) -> Vec<&str> {
        vec![self.title()]
    }

    /// Value of `dimension` for this record, if it has one.
    fn category(&self, dimension: &str) -> Option<&str>;
}
