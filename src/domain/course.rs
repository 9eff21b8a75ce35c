use serde::{Deserialize, Serialize};

use crate::listing::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    #[serde(alias = "Published")]
    Published,
    #[serde(alias = "Draft")]
    Draft,
    #[serde(alias = "Archived")]
    Archived,
}

impl CourseStatus {
    pub const ALL: [CourseStatus; 3] = [
        CourseStatus::Published,
        CourseStatus::Draft,
        CourseStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Published => "Published",
            CourseStatus::Draft => "Draft",
            CourseStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub instructor: String,
    #[serde(default)]
    pub students: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub price: f64,
    pub status: CourseStatus,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub last_updated: String,
    /// Completion rate shown on the overview, when tracked.
    #[serde(default)]
    pub completion: Option<u32>,
}

impl Course {
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

impl Record for Course {
    const DIMENSIONS: &'static [&'static str] = &["status", "category"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![&self.title, &self.instructor]
    }

    fn category(&self, dimension: &str) -> Option<&str> {
        match dimension {
            "status" => Some(self.status.as_str()),
            "category" => Some(self.category.as_str()).filter(|c| !c.is_empty()),
            _ => None,
        }
    }
}
