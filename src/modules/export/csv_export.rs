//! CSV Export
//!
//! Writes courses, students, and course performance rows to CSV files.

use std::path::Path;

use anyhow::Result;

use crate::domain::{Course, CoursePerformance, Student};

/// Write courses to CSV file
pub fn write_courses(path: &Path, courses: &[&Course]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "title",
        "instructor",
        "category",
        "status",
        "students",
        "rating",
        "price",
        "duration",
        "completion",
    ])?;

    for course in courses {
        wtr.write_record([
            course.id.to_string(),
            course.title.clone(),
            course.instructor.clone(),
            course.category.clone(),
            course.status.as_str().to_string(),
            course.students.to_string(),
            format!("{:.1}", course.rating),
            format!("{:.2}", course.price),
            course.duration.clone(),
            course
                .completion
                .map(|value| value.to_string())
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(courses.len())
}

/// Write students to CSV file
pub fn write_students(path: &Path, students: &[&Student]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "email",
        "status",
        "enrolled_courses",
        "completed_courses",
        "overall_progress",
        "last_active",
        "join_date",
    ])?;

    for student in students {
        wtr.write_record([
            student.id.to_string(),
            student.name.clone(),
            student.email.clone(),
            student.status.as_str().to_string(),
            student.enrolled_courses.to_string(),
            student.completed_courses.to_string(),
            student.overall_progress.to_string(),
            student.last_active.clone(),
            student.join_date.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(students.len())
}

/// Write course performance rows, including the derived pass rate
pub fn write_performance(path: &Path, rows: &[&CoursePerformance]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "course",
        "group",
        "completed",
        "passed",
        "failed",
        "pass_rate",
        "avg_score",
        "threshold",
    ])?;

    for row in rows {
        wtr.write_record([
            row.id.to_string(),
            row.course.clone(),
            row.group.clone().unwrap_or_default(),
            row.completed.to_string(),
            row.passed.to_string(),
            row.failed.to_string(),
            row.pass_rate().to_string(),
            row.avg_score.to_string(),
            row.threshold.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(rows.len())
}
