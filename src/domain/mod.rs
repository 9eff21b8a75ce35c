//! Typed records shown by the dashboard

pub mod analytics;
pub mod course;
pub mod curriculum;
pub mod metrics;
pub mod student;

pub use analytics::{
    Activity, ActivityKind, CoursePerformance, EngagementPoint, PerformanceSummary, ScoreBucket,
    StatCard,
};
pub use course::{Course, CourseStatus};
pub use curriculum::{Chapter, Curriculum, Lesson, LessonKind};
pub use metrics::{pass_rate, percent, PassRate, PerformanceBand};
pub use student::{Student, StudentStatus};
