//! Colors and status badges
//!
//! Records carry closed status enums; how each variant looks lives here.

use ratatui::style::{Color, Modifier, Style};

use crate::core::NotifyLevel;
use crate::domain::{ActivityKind, CourseStatus, LessonKind, PerformanceBand, StudentStatus};

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;

pub fn border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn label() -> Style {
    Style::default().fg(MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

pub fn highlight() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

pub fn course_status(status: CourseStatus) -> Style {
    match status {
        CourseStatus::Published => Style::default().fg(Color::LightGreen),
        CourseStatus::Draft => Style::default().fg(Color::LightYellow),
        CourseStatus::Archived => Style::default().fg(Color::Gray),
    }
}

pub fn student_status(status: StudentStatus) -> Style {
    match status {
        StudentStatus::Active => Style::default().fg(Color::LightGreen),
        StudentStatus::Completed => Style::default().fg(Color::LightBlue),
        StudentStatus::Inactive => Style::default().fg(Color::Gray),
    }
}

pub fn band(band: PerformanceBand) -> Style {
    match band {
        PerformanceBand::High => Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
        PerformanceBand::Low => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        PerformanceBand::Neutral => Style::default().fg(Color::White),
    }
}

pub fn notify(level: NotifyLevel) -> Style {
    match level {
        NotifyLevel::Info => Style::default().fg(Color::LightGreen),
        NotifyLevel::Warn => Style::default().fg(Color::LightYellow),
        NotifyLevel::Error => Style::default().fg(Color::LightRed),
    }
}

/// Single-cell glyph shown before a lesson title.
pub fn lesson_icon(kind: LessonKind) -> &'static str {
    match kind {
        LessonKind::Video => "▶",
        LessonKind::Quiz => "?",
        LessonKind::Assignment => "✎",
        LessonKind::Text => "≡",
    }
}

pub fn activity_icon(kind: ActivityKind) -> (&'static str, Style) {
    match kind {
        ActivityKind::Enrollment => ("+", Style::default().fg(Color::LightBlue)),
        ActivityKind::Completion => ("✓", Style::default().fg(Color::LightGreen)),
        ActivityKind::NewCourse => ("★", Style::default().fg(Color::LightMagenta)),
    }
}

/// Style for a signed change like "+12.5%" on a stat card.
pub fn change(value: &str) -> Style {
    if value.trim_start().starts_with('-') {
        Style::default().fg(Color::LightRed)
    } else {
        Style::default().fg(Color::LightGreen)
    }
}
