//! Screen modules
//!
//! Each module implements the Module trait and handles its own:
//! - Key input processing
//! - Command handling
//! - Rendering
//!
//! Modules:
//! - overview: headline stats, recent courses and activity
//! - courses: searchable course catalog (grid or list)
//! - students: student roster with status filter
//! - analytics: pass/fail performance, score distribution, engagement
//! - player: course player with a searchable curriculum
//! - export: CSV/JSON export of what a screen currently shows

pub mod analytics;
pub mod courses;
pub mod export;
pub mod overview;
pub mod player;
pub mod students;

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Command};
use crate::listing::{FilterState, Record, RecordId};

/// Selected row of a filtered listing, keyed by row identity so it survives
/// re-filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<K = RecordId>(Option<K>);

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self(None)
    }
}

impl<K: Copy + PartialEq> Selection<K> {
    pub fn id(&self) -> Option<K> {
        self.0
    }

    pub fn set(&mut self, id: Option<K>) {
        self.0 = id;
    }

    /// Position of the selection in `visible`. Falls back to the first row
    /// when the selected record is filtered out.
    pub fn index_in(&self, visible: &[K]) -> Option<usize> {
        if visible.is_empty() {
            return None;
        }
        Some(
            self.0
                .and_then(|id| visible.iter().position(|candidate| *candidate == id))
                .unwrap_or(0),
        )
    }

    /// Pin the selection to what is actually shown.
    pub fn resolve(&mut self, visible: &[K]) {
        self.0 = self.index_in(visible).map(|idx| visible[idx]);
    }

    pub fn step(&mut self, visible: &[K], forward: bool) {
        let Some(idx) = self.index_in(visible) else {
            self.0 = None;
            return;
        };
        let next = if forward {
            (idx + 1).min(visible.len() - 1)
        } else {
            idx.saturating_sub(1)
        };
        self.0 = Some(visible[next]);
    }

    pub fn first(&mut self, visible: &[K]) {
        self.0 = visible.first().copied();
    }

    pub fn last(&mut self, visible: &[K]) {
        self.0 = visible.last().copied();
    }
}

/// Apply the list-navigation keys shared by every listing screen.
/// Returns false when the key is not a navigation key.
pub fn navigate<K: Copy + PartialEq>(
    selection: &mut Selection<K>,
    visible: &[K],
    key: &KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => selection.step(visible, true),
        KeyCode::Up | KeyCode::Char('k') => selection.step(visible, false),
        KeyCode::Home | KeyCode::Char('g') => selection.first(visible),
        KeyCode::End | KeyCode::Char('G') => selection.last(visible),
        _ => return false,
    }
    true
}

/// Next value of a select box: all → first option → … → last → all.
pub fn cycle_option(options: &[String], current: Option<&str>) -> Option<String> {
    let position = current.and_then(|value| {
        options
            .iter()
            .position(|option| option.eq_ignore_ascii_case(value))
    });
    match position {
        None => options.first().cloned(),
        Some(idx) => options.get(idx + 1).cloned(),
    }
}

/// Step a select box on `dimension` and report the new value.
pub fn cycle_dimension(
    filter: &mut FilterState,
    dimension: &str,
    options: &[String],
    label: &str,
) -> Action {
    let next = cycle_option(options, filter.selection(dimension));
    let shown = next.clone().unwrap_or_else(|| "all".to_string());
    filter.select(dimension, next);
    Action::info(format!("{label}: {shown}"))
}

/// Shared handling of filter commands for a listing of `R`.
pub fn apply_filter_command<R: Record>(filter: &mut FilterState, cmd: &Command) -> Option<Action> {
    match cmd {
        Command::Search(query) => {
            filter.set_query(query.clone());
            Some(Action::None)
        }
        Command::Select { dimension, value } => {
            if R::DIMENSIONS.iter().any(|known| *known == dimension.as_str()) {
                filter.select(dimension, value.clone());
                Some(Action::None)
            } else {
                Some(Action::warn(format!(
                    "No {dimension} filter on this screen"
                )))
            }
        }
        Command::Clear => {
            filter.clear();
            Some(Action::info("Filters cleared"))
        }
        _ => None,
    }
}

/// Ids of `records`, in order.
pub fn ids<R: Record>(records: &[&R]) -> Vec<RecordId> {
    records.iter().map(|record| record.id()).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn visible() -> Vec<RecordId> {
        vec![RecordId(3), RecordId(5), RecordId(9)]
    }

    #[test]
    fn test_selection_survives_refilter() {
        let mut selection = Selection::default();
        selection.set(Some(RecordId(5)));
        assert_eq!(selection.index_in(&visible()), Some(1));
        assert_eq!(selection.index_in(&[RecordId(9), RecordId(5)]), Some(1));
        assert_eq!(selection.index_in(&[RecordId(9)]), Some(0));
        assert_eq!(selection.index_in(&[]), None);
    }

    #[test]
    fn test_selection_steps_clamp() {
        let rows = visible();
        let mut selection = Selection::default();
        selection.step(&rows, true);
        assert_eq!(selection.id(), Some(RecordId(5)));
        selection.step(&rows, true);
        selection.step(&rows, true);
        assert_eq!(selection.id(), Some(RecordId(9)));
        selection.first(&rows);
        selection.step(&rows, false);
        assert_eq!(selection.id(), Some(RecordId(3)));
    }

    #[test]
    fn test_cycle_option_wraps_through_all() {
        let options = vec!["published".to_string(), "draft".to_string()];
        assert_eq!(cycle_option(&options, None), Some("published".to_string()));
        assert_eq!(cycle_option(&options, Some("Published")), Some("draft".to_string()));
        assert_eq!(cycle_option(&options, Some("draft")), None);
        assert_eq!(cycle_option(&[], None), None);
    }
}
