//! Exporting the visible rows of each screen

use std::fs;
use std::path::{Path, PathBuf};

use campus::app::{App, Screen};
use campus::config::Config;
use campus::core::{Command, NotifyLevel};
use campus::data::SampleCatalog;

fn app_exporting_to(dir: &Path) -> App {
    let mut app = App::new(Box::new(SampleCatalog), &Config::default()).expect("samples");
    app.system_clipboard = false;
    app.set_export_dir(dir);
    app
}

fn exported_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
        .unwrap_or_default();
    files.sort();
    files
}

#[test]
fn test_export_filtered_courses() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app_exporting_to(dir.path());
    app.go(Screen::Courses);
    app.execute_command(Command::Select {
        dimension: "status".to_string(),
        value: Some("published".to_string()),
    });
    app.execute_command(Command::Export);

    let files = exported_files(dir.path());
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().and_then(|n| n.to_str()).unwrap_or_default();
    assert!(name.starts_with("courses-") && name.ends_with(".csv"));

    let content = fs::read_to_string(&files[0]).expect("read");
    assert_eq!(content.lines().count(), 4);
    assert!(!content.contains("UI/UX Design Fundamentals"));

    let (text, level) = app.status_text().expect("status");
    assert_eq!(level, NotifyLevel::Info);
    assert!(text.starts_with("Exported 3 courses to "));
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("out").join("campus");
    let mut app = app_exporting_to(&nested);
    app.go(Screen::Analytics);
    app.export();

    let files = exported_files(&nested);
    assert_eq!(files.len(), 1);
    let content = fs::read_to_string(&files[0]).expect("read");
    assert!(content.starts_with("id,course,group,"));
    assert!(content.contains("\n3,Python Basics,Group A,52,48,4,92%,92,70\n"));
}

#[test]
fn test_export_empty_listing_warns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app_exporting_to(dir.path());
    app.go(Screen::Students);
    app.execute_command(Command::Search("no such student".to_string()));
    app.export();

    assert!(exported_files(dir.path()).is_empty());
    assert_eq!(
        app.status_text(),
        Some(("No students to export", NotifyLevel::Warn))
    );
}

#[test]
fn test_export_curriculum_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app_exporting_to(dir.path());
    app.go(Screen::Player);
    app.execute_command(Command::Select {
        dimension: "type".to_string(),
        value: Some("quiz".to_string()),
    });
    app.export();

    let files = exported_files(dir.path());
    assert_eq!(files.len(), 1);
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&files[0]).expect("read")).expect("json");
    assert_eq!(value["filter"], "type:quiz");
    let lessons: Vec<&serde_json::Value> = value["chapters"]
        .as_array()
        .expect("chapters")
        .iter()
        .flat_map(|chapter| chapter["lessons"].as_array().into_iter().flatten())
        .collect();
    assert!(!lessons.is_empty());
    assert!(lessons.iter().all(|lesson| lesson["type"] == "quiz"));
}

#[test]
fn test_overview_has_nothing_to_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app_exporting_to(dir.path());
    app.export();

    assert!(exported_files(dir.path()).is_empty());
    assert_eq!(
        app.status_text(),
        Some(("Nothing to export in this view", NotifyLevel::Warn))
    );
}
