//! JSON Export
//!
//! Writes the player's filtered curriculum to a JSON file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::domain::{Curriculum, Lesson};
use crate::listing::RecordId;
use crate::modules::player::PlayerScreen;

/// Exportable curriculum (visible chapters and lessons, session progress
/// folded in; no cursor or expansion state)
#[derive(Debug, Serialize)]
pub struct CurriculumExport {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub chapters: Vec<ChapterExport>,
}

#[derive(Debug, Serialize)]
pub struct ChapterExport {
    pub id: RecordId,
    pub title: String,
    pub lessons: Vec<LessonExport>,
}

#[derive(Debug, Serialize)]
pub struct LessonExport {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub duration: String,
    pub completed: bool,
    pub current: bool,
}

impl CurriculumExport {
    pub fn lesson_count(&self) -> usize {
        self.chapters.iter().map(|chapter| chapter.lessons.len()).sum()
    }
}

/// Snapshot of what the player shows for `curriculum`.
pub fn curriculum_export(player: &PlayerScreen, curriculum: &Curriculum) -> CurriculumExport {
    let current = player.current_lesson(curriculum).map(|lesson| lesson.id);
    let lesson = |lesson: &Lesson| LessonExport {
        id: lesson.id,
        title: lesson.title.clone(),
        kind: lesson.kind.as_str(),
        duration: lesson.duration.clone(),
        completed: player.is_completed(lesson),
        current: current == Some(lesson.id),
    };

    let filter = player
        .filter()
        .is_active()
        .then(|| player.filter().describe());

    CurriculumExport {
        title: curriculum.title.clone(),
        progress: player.progress(curriculum),
        filter,
        chapters: player
            .visible(curriculum)
            .iter()
            .map(|view| ChapterExport {
                id: view.group.id,
                title: view.group.title.clone(),
                lessons: view.children.iter().copied().map(&lesson).collect(),
            })
            .collect(),
    }
}

/// Write a curriculum snapshot to JSON file
pub fn write_curriculum(path: &Path, export: &CurriculumExport) -> Result<usize> {
    let json = serde_json::to_string_pretty(export)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(export.lesson_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, Context, Module};
    use crate::data::{CatalogSource, SampleCatalog};

    fn ctx() -> Context {
        Context::new(SampleCatalog.load().expect("samples"), "sample data")
    }

    #[test]
    fn test_export_follows_filter() {
        let mut ctx = ctx();
        let mut player = PlayerScreen::new(&ctx.catalog.curriculum);
        player.handle_command(&Command::Search("hooks".into()), &mut ctx);

        let export = curriculum_export(&player, &ctx.catalog.curriculum);
        assert_eq!(export.chapters.len(), 2);
        assert_eq!(export.lesson_count(), 2);
        assert_eq!(export.filter.as_deref(), Some("\"hooks\""));
        assert!(export.chapters[0].lessons[0].current);
        assert_eq!(export.progress, Some(25));
    }

    #[test]
    fn test_write_curriculum() {
        let ctx = ctx();
        let player = PlayerScreen::new(&ctx.catalog.curriculum);
        let export = curriculum_export(&player, &ctx.catalog.curriculum);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("curriculum.json");

        assert_eq!(write_curriculum(&path, &export).expect("write"), 12);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(value["title"], "Complete React Development Course");
        assert_eq!(value["chapters"][1]["lessons"][3]["type"], "quiz");
        assert!(value.get("filter").is_none());
    }
}
