//! Export Module
//!
//! Writes what the active screen currently shows (after filtering) to disk.
//!
//! - 'e' key or `:export` triggers export of the active screen
//! - Courses, Students, Analytics → CSV
//! - Course Player → JSON (filtered curriculum)
//! - Files saved to the export directory (`<data dir>/exports` by default)

mod csv_export;
mod json_export;

pub use json_export::{curriculum_export, CurriculumExport};

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::Local;

use crate::app::{App, Screen};
use crate::core::{Action, NotifyLevel};

/// Generate a timestamped filename
pub fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Export the active screen's visible rows
///
/// Routes to the exporter for the active screen; screens without a
/// listing report that there is nothing to export.
pub fn export_current_view(app: &App) -> Action {
    let dir = app.export_dir();
    let ctx = &app.ctx;
    match app.screen {
        Screen::Courses => {
            let rows = app.courses.visible(ctx);
            export_rows(dir, "courses", "csv", rows.len(), |path| {
                csv_export::write_courses(path, &rows)
            })
        }
        Screen::Students => {
            let rows = app.students.visible(ctx);
            export_rows(dir, "students", "csv", rows.len(), |path| {
                csv_export::write_students(path, &rows)
            })
        }
        Screen::Analytics => {
            let rows = app.analytics.visible(ctx);
            export_rows(dir, "performance", "csv", rows.len(), |path| {
                csv_export::write_performance(path, &rows)
            })
        }
        Screen::Player => {
            let export = curriculum_export(&app.player, &ctx.catalog.curriculum);
            let lessons = export.lesson_count();
            export_rows(dir, "curriculum", "json", lessons, |path| {
                json_export::write_curriculum(path, &export)
            })
        }
        Screen::Overview => Action::Notify(
            "Nothing to export in this view".to_string(),
            NotifyLevel::Warn,
        ),
    }
}

fn export_rows(
    dir: &Path,
    prefix: &str,
    extension: &str,
    count: usize,
    write: impl FnOnce(&Path) -> Result<usize>,
) -> Action {
    if count == 0 {
        return Action::Notify(format!("No {prefix} to export"), NotifyLevel::Warn);
    }

    let filename = generate_filename(prefix, extension);
    let path = dir.join(&filename);
    let written = fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))
        .and_then(|_| write(&path));

    match written {
        Ok(count) => {
            tracing::info!(path = %path.display(), count, "exported");
            Action::Notify(
                format!("Exported {} {} to {}", count, prefix, path.display()),
                NotifyLevel::Info,
            )
        }
        Err(err) => {
            tracing::warn!(error = ?err, "export failed");
            Action::Notify(format!("Export failed: {err:#}"), NotifyLevel::Error)
        }
    }
}
