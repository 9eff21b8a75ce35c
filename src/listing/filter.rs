use std::collections::BTreeMap;

use super::Record;

/// Current query and category selections of one listing.
///
/// A dimension mapped to `None` (or not present at all) means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    selections: BTreeMap<String, Option<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selections: BTreeMap::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select `value` on `dimension`; `None` resets it to "all".
    pub fn select(&mut self, dimension: &str, value: Option<String>) {
        let value = value.filter(|v| !v.trim().is_empty());
        self.selections.insert(dimension.to_lowercase(), value);
    }

    pub fn selection(&self, dimension: &str) -> Option<&str> {
        self.selections
            .get(&dimension.to_lowercase())
            .and_then(|value| value.as_deref())
    }

    /// Dimensions with a concrete value selected, in name order.
    pub fn active_selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .filter_map(|(dimension, value)| value.as_deref().map(|v| (dimension.as_str(), v)))
    }

    /// True when the query is non-empty or any dimension is narrowed.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.active_selections().next().is_some()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selections.clear();
    }

    /// Short human readable form, e.g. `"python" status:published`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.query.is_empty() {
            parts.push(format!("\"{}\"", self.query));
        }
        for (dimension, value) in self.active_selections() {
            parts.push(format!("{dimension}:{value}"));
        }
        parts.join(" ")
    }
}

/// Lower-cased predicate compiled from a [`FilterState`] for one record type.
pub(crate) struct Matcher<'s> {
    needle: String,
    selections: Vec<(&'s str, String)>,
}

impl<'s> Matcher<'s> {
    pub(crate) fn for_record<R: Record>(state: &'s FilterState) -> Self {
        let selections = state
            .active_selections()
            .filter(|(dimension, _)| R::DIMENSIONS.iter().any(|known| *known == *dimension))
            .map(|(dimension, value)| (dimension, value.to_lowercase()))
            .collect();
        Self {
            needle: state.query.to_lowercase(),
            selections,
        }
    }

    /// No query and no applicable selection: everything passes.
    pub(crate) fn is_inactive(&self) -> bool {
        self.needle.is_empty() && self.selections.is_empty()
    }

    pub(crate) fn text_matches(&self, text: &str) -> bool {
        self.needle.is_empty() || text.to_lowercase().contains(&self.needle)
    }

    pub(crate) fn matches<R: Record>(&self, record: &R) -> bool {
        let text_ok = self.needle.is_empty()
            || record
                .searchable_text()
                .into_iter()
                .any(|field| self.text_matches(field));
        text_ok
            && self.selections.iter().all(|(dimension, wanted)| {
                record
                    .category(dimension)
                    .is_some_and(|value| value.to_lowercase() == *wanted)
            })
    }
}

/// Whether a single record passes `state`.
pub fn matches<R: Record>(record: &R, state: &FilterState) -> bool {
    Matcher::for_record::<R>(state).matches(record)
}

/// Records passing `state`, in input order.
pub fn filter<'a, R: Record>(records: &'a [R], state: &FilterState) -> Vec<&'a R> {
    let matcher = Matcher::for_record::<R>(state);
    records
        .iter()
        .filter(|record| matcher.matches(*record))
        .collect()
}

/// Positions in `records` of the records passing `state`, ascending.
pub fn filter_indices<R: Record>(records: &[R], state: &FilterState) -> Vec<usize> {
    let matcher = Matcher::for_record::<R>(state);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matcher.matches(*record))
        .map(|(idx, _)| idx)
        .collect()
}
