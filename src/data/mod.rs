//! Catalog loading
//!
//! The dashboard never reaches for global data: a [`CatalogSource`] is
//! injected at startup and asked for a fresh [`Catalog`] on reload.

mod file;
mod sample;

pub use file::JsonCatalog;
pub use sample::SampleCatalog;

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    Activity, Course, CoursePerformance, Curriculum, EngagementPoint, ScoreBucket, StatCard,
    Student,
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the screens render. Read-only once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub performance: Vec<CoursePerformance>,
    pub curriculum: Curriculum,
    pub score_distribution: Vec<ScoreBucket>,
    pub engagement: Vec<EngagementPoint>,
    pub stats: Vec<StatCard>,
    pub activities: Vec<Activity>,
}

impl Catalog {
    /// Distinct non-empty course categories, sorted.
    pub fn course_categories(&self) -> Vec<String> {
        self.courses
            .iter()
            .map(|course| course.category.clone())
            .filter(|category| !category.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Course names of the performance table, first-seen order.
    pub fn performance_courses(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.performance
            .iter()
            .filter(|row| seen.insert(row.course.to_lowercase()))
            .map(|row| row.course.clone())
            .collect()
    }

    /// Distinct cohort names of the performance table, sorted.
    pub fn performance_groups(&self) -> Vec<String> {
        self.performance
            .iter()
            .filter_map(|row| row.group.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn counts(&self) -> String {
        format!(
            "{} courses, {} students, {} lessons",
            self.courses.len(),
            self.students.len(),
            self.curriculum.lessons().count()
        )
    }
}

/// Where the catalog comes from.
pub trait CatalogSource {
    /// Short label for the status line and logs.
    fn describe(&self) -> String;
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Pick the source: a JSON file when a path is given, the samples otherwise.
pub fn source_for(path: Option<PathBuf>) -> Box<dyn CatalogSource> {
    match path {
        Some(path) => Box::new(JsonCatalog::new(path)),
        None => Box::new(SampleCatalog),
    }
}
