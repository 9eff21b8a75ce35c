//! Assessment analytics: per-course pass/fail counts and chart series

use serde::{Deserialize, Serialize};

use super::metrics::{pass_rate, weighted_mean, PassRate};
use crate::listing::{Record, RecordId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePerformance {
    pub id: RecordId,
    pub course: String,
    /// Cohort the numbers belong to, e.g. "Group A".
    #[serde(default)]
    pub group: Option<String>,
    pub completed: u32,
    pub passed: u32,
    pub failed: u32,
    /// Average score in percent.
    pub avg_score: u32,
    /// Pass grade in percent.
    pub threshold: u32,
}

impl CoursePerformance {
    pub fn pass_rate(&self) -> PassRate {
        pass_rate(u64::from(self.passed), u64::from(self.completed))
    }
}

impl Record for CoursePerformance {
    const DIMENSIONS: &'static [&'static str] = &["course", "group"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.course
    }

    fn category(&self, dimension: &str) -> Option<&str> {
        match dimension {
            "course" => Some(self.course.as_str()),
            "group" => self.group.as_deref(),
            _ => None,
        }
    }
}

/// Totals over a set of performance rows. Counters are widened so large
/// catalogs cannot overflow them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerformanceSummary {
    pub completed: u64,
    pub passed: u64,
    pub failed: u64,
    /// Average score weighted by completions.
    pub avg_score: Option<u32>,
}

impl PerformanceSummary {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a CoursePerformance>) -> Self {
        let mut summary = Self::default();
        let mut scores = Vec::new();
        for row in rows {
            summary.completed += u64::from(row.completed);
            summary.passed += u64::from(row.passed);
            summary.failed += u64::from(row.failed);
            scores.push((row.avg_score, row.completed));
        }
        summary.avg_score = weighted_mean(&scores);
        summary
    }

    pub fn pass_rate(&self) -> PassRate {
        pass_rate(self.passed, self.completed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBucket {
    /// Label such as "81-90%".
    pub range: String,
    pub students: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementPoint {
    pub month: String,
    pub enrollments: u32,
    pub completions: u32,
    /// Average minutes spent per session.
    #[serde(default)]
    pub avg_time: u32,
}

/// Headline figure on the overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Change against the previous period, e.g. "+12%".
    #[serde(default)]
    pub change: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Enrollment,
    Completion,
    NewCourse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    pub kind: ActivityKind,
    pub message: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32, completed: u32, passed: u32, avg_score: u32) -> CoursePerformance {
        CoursePerformance {
            id: RecordId(id),
            course: format!("Course {id}"),
            group: None,
            completed,
            passed,
            failed: completed - passed,
            avg_score,
            threshold: 70,
        }
    }

    #[test]
    fn test_summary_totals() {
        let rows = [row(1, 45, 42, 89), row(2, 52, 48, 92)];
        let summary = PerformanceSummary::from_rows(&rows);
        assert_eq!(summary.completed, 97);
        assert_eq!(summary.passed, 90);
        assert_eq!(summary.failed, 7);
        assert_eq!(summary.avg_score, Some(91));
        assert_eq!(summary.pass_rate(), PassRate::Percent(93));
    }

    #[test]
    fn test_summary_of_large_rows() {
        let rows = [
            row(1, 4_000_000_000, 3_000_000_000, 80),
            row(2, 4_000_000_000, 4_000_000_000, 90),
        ];
        let summary = PerformanceSummary::from_rows(&rows);
        assert_eq!(summary.completed, 8_000_000_000);
        assert_eq!(summary.passed, 7_000_000_000);
        assert_eq!(summary.failed, 1_000_000_000);
        assert_eq!(summary.avg_score, Some(85));
        assert_eq!(summary.pass_rate(), PassRate::Percent(88));
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = PerformanceSummary::from_rows(std::iter::empty());
        assert_eq!(summary.avg_score, None);
        assert_eq!(summary.pass_rate(), PassRate::NotApplicable);
    }

    #[test]
    fn test_group_dimension_absent() {
        let perf = row(1, 10, 5, 60);
        assert_eq!(perf.category("group"), None);
        assert_eq!(perf.category("course"), Some("Course 1"));
        assert_eq!(perf.pass_rate(), PassRate::Percent(50));
    }
}
