use serde::{Deserialize, Serialize};

use crate::listing::{Group, Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Quiz,
    Assignment,
    Text,
}

impl LessonKind {
    pub const ALL: [LessonKind; 4] = [
        LessonKind::Video,
        LessonKind::Quiz,
        LessonKind::Assignment,
        LessonKind::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonKind::Video => "video",
            LessonKind::Quiz => "quiz",
            LessonKind::Assignment => "assignment",
            LessonKind::Text => "text",
        }
    }

    /// Plural label used by the type select.
    pub fn label(&self) -> &'static str {
        match self {
            LessonKind::Video => "Videos",
            LessonKind::Quiz => "Quizzes",
            LessonKind::Assignment => "Assignments",
            LessonKind::Text => "Reading",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: RecordId,
    pub title: String,
    pub kind: LessonKind,
    /// Free-form length hint, e.g. "< 15 MIN" or "5 questions".
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub current: bool,
}

impl Record for Lesson {
    const DIMENSIONS: &'static [&'static str] = &["type"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self, dimension: &str) -> Option<&str> {
        match dimension {
            "type" => Some(self.kind.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Group for Chapter {
    type Item = Lesson;

    fn id(&self) -> RecordId {
        self.id
    }

    fn children(&self) -> &[Lesson] {
        &self.lessons
    }
}

/// The course shown in the player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Curriculum {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Curriculum {
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.chapters.iter().flat_map(|chapter| chapter.lessons.iter())
    }

    pub fn lesson(&self, id: RecordId) -> Option<(&Chapter, &Lesson)> {
        self.chapters.iter().find_map(|chapter| {
            chapter
                .lessons
                .iter()
                .find(|lesson| lesson.id == id)
                .map(|lesson| (chapter, lesson))
        })
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.lessons().find(|lesson| lesson.current)
    }
}
