use serde::{Deserialize, Serialize};

use crate::listing::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "Inactive")]
    Inactive,
    #[serde(alias = "Completed")]
    Completed,
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 3] = [
        StudentStatus::Active,
        StudentStatus::Inactive,
        StudentStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::Inactive => "Inactive",
            StudentStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// Avatar fallback, e.g. "AJ".
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub enrolled_courses: u32,
    #[serde(default)]
    pub completed_courses: u32,
    /// Overall progress in percent.
    #[serde(default)]
    pub overall_progress: u32,
    #[serde(default)]
    pub last_active: String,
    pub status: StudentStatus,
    #[serde(default)]
    pub join_date: String,
}

impl Student {
    pub fn initials(&self) -> String {
        if !self.initials.trim().is_empty() {
            return self.initials.clone();
        }
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

impl Record for Student {
    const DIMENSIONS: &'static [&'static str] = &["status"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn category(&self, dimension: &str) -> Option<&str> {
        match dimension {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}
