use super::{Catalog, CatalogError, CatalogSource};
use crate::domain::{
    Activity, ActivityKind, Chapter, Course, CoursePerformance, CourseStatus, Curriculum,
    EngagementPoint, Lesson, LessonKind, ScoreBucket, StatCard, Student, StudentStatus,
};
use crate::listing::RecordId;

/// Built-in demo data, used when no catalog file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl CatalogSource for SampleCatalog {
    fn describe(&self) -> String {
        "sample data".to_string()
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(Catalog {
            courses: courses(),
            students: students(),
            performance: performance(),
            curriculum: curriculum(),
            score_distribution: score_distribution(),
            engagement: engagement(),
            stats: stats(),
            activities: activities(),
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: u32,
    title: &str,
    description: &str,
    instructor: &str,
    students: u32,
    rating: f32,
    price: f64,
    status: CourseStatus,
    category: &str,
    duration: &str,
    thumbnail: &str,
    last_updated: &str,
    completion: Option<u32>,
) -> Course {
    Course {
        id: RecordId(id),
        title: title.to_string(),
        description: description.to_string(),
        instructor: instructor.to_string(),
        students,
        rating,
        price,
        status,
        category: category.to_string(),
        duration: duration.to_string(),
        thumbnail: thumbnail.to_string(),
        last_updated: last_updated.to_string(),
        completion,
    }
}

fn courses() -> Vec<Course> {
    vec![
        course(
            1,
            "Complete React Development Course",
            "Learn React from basics to advanced concepts with hands-on projects",
            "Sarah Johnson",
            1247,
            4.8,
            99.99,
            CourseStatus::Published,
            "Web Development",
            "24 hours",
            "🚀",
            "2 days ago",
            Some(92),
        ),
        course(
            2,
            "Advanced JavaScript Mastery",
            "Master advanced JavaScript concepts and modern ES6+ features",
            "Mike Chen",
            892,
            4.6,
            79.99,
            CourseStatus::Published,
            "Programming",
            "18 hours",
            "⚡",
            "1 week ago",
            Some(78),
        ),
        course(
            3,
            "UI/UX Design Fundamentals",
            "Learn the principles of user interface and user experience design",
            "Emma Davis",
            0,
            0.0,
            129.99,
            CourseStatus::Draft,
            "Design",
            "32 hours",
            "🎨",
            "3 days ago",
            Some(85),
        ),
        course(
            4,
            "Python for Data Science",
            "Complete guide to Python programming for data analysis and machine learning",
            "David Wilson",
            556,
            4.7,
            89.99,
            CourseStatus::Published,
            "Data Science",
            "28 hours",
            "🐍",
            "5 days ago",
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn student(
    id: u32,
    name: &str,
    email: &str,
    initials: &str,
    enrolled_courses: u32,
    completed_courses: u32,
    overall_progress: u32,
    last_active: &str,
    status: StudentStatus,
    join_date: &str,
) -> Student {
    Student {
        id: RecordId(id),
        name: name.to_string(),
        email: email.to_string(),
        initials: initials.to_string(),
        enrolled_courses,
        completed_courses,
        overall_progress,
        last_active: last_active.to_string(),
        status,
        join_date: join_date.to_string(),
    }
}

fn students() -> Vec<Student> {
    vec![
        student(
            1,
            "Alice Johnson",
            "alice@example.com",
            "AJ",
            3,
            2,
            85,
            "2 hours ago",
            StudentStatus::Active,
            "Jan 15, 2024",
        ),
        student(
            2,
            "Bob Smith",
            "bob@example.com",
            "BS",
            2,
            1,
            65,
            "1 day ago",
            StudentStatus::Active,
            "Feb 3, 2024",
        ),
        student(
            3,
            "Carol Davis",
            "carol@example.com",
            "CD",
            4,
            4,
            100,
            "3 days ago",
            StudentStatus::Completed,
            "Dec 10, 2023",
        ),
    ]
}

fn performance() -> Vec<CoursePerformance> {
    let rows = [
        (1, "React Fundamentals", "Group A", 45, 42, 3, 89, 70),
        (2, "JavaScript Advanced", "Group B", 38, 35, 3, 85, 75),
        (3, "Python Basics", "Group A", 52, 48, 4, 92, 70),
        (4, "Data Structures", "Group C", 29, 25, 4, 82, 80),
        (5, "Web Design", "Group B", 41, 39, 2, 88, 70),
    ];
    rows.into_iter()
        .map(
            |(id, course, group, completed, passed, failed, avg_score, threshold)| {
                CoursePerformance {
                    id: RecordId(id),
                    course: course.to_string(),
                    group: Some(group.to_string()),
                    completed,
                    passed,
                    failed,
                    avg_score,
                    threshold,
                }
            },
        )
        .collect()
}

fn lesson(id: u32, title: &str, kind: LessonKind, duration: &str, completed: bool) -> Lesson {
    Lesson {
        id: RecordId(id),
        title: title.to_string(),
        kind,
        duration: duration.to_string(),
        completed,
        current: false,
    }
}

fn curriculum() -> Curriculum {
    let mut hooks = lesson(4, "State Management with Hooks", LessonKind::Video, "< 15 MIN", false);
    hooks.current = true;

    Curriculum {
        title: "Complete React Development Course".to_string(),
        chapters: vec![
            Chapter {
                id: RecordId(1),
                title: "Getting Started".to_string(),
                lessons: vec![
                    lesson(1, "Course Introduction", LessonKind::Video, "< 5 MIN", true),
                    lesson(
                        2,
                        "Setting up Development Environment",
                        LessonKind::Video,
                        "< 10 MIN",
                        true,
                    ),
                    lesson(3, "Your First React App", LessonKind::Video, "< 15 MIN", true),
                ],
            },
            Chapter {
                id: RecordId(2),
                title: "React Fundamentals".to_string(),
                lessons: vec![
                    hooks,
                    lesson(5, "Props and Components", LessonKind::Video, "< 20 MIN", false),
                    lesson(6, "Event Handling", LessonKind::Video, "< 12 MIN", false),
                    lesson(7, "Quiz: React Basics", LessonKind::Quiz, "5 questions", false),
                ],
            },
            Chapter {
                id: RecordId(3),
                title: "Advanced Concepts".to_string(),
                lessons: vec![
                    lesson(8, "Context API", LessonKind::Video, "< 18 MIN", false),
                    lesson(9, "Custom Hooks", LessonKind::Video, "< 25 MIN", false),
                    lesson(
                        10,
                        "Performance Optimization",
                        LessonKind::Video,
                        "< 30 MIN",
                        false,
                    ),
                    lesson(
                        11,
                        "Assignment: Build a Todo App",
                        LessonKind::Assignment,
                        "Submit file",
                        false,
                    ),
                    lesson(12, "Final Project Review", LessonKind::Text, "< 10 MIN", false),
                ],
            },
        ],
    }
}

fn score_distribution() -> Vec<ScoreBucket> {
    [
        ("0-10%", 2),
        ("11-20%", 3),
        ("21-30%", 5),
        ("31-40%", 8),
        ("41-50%", 12),
        ("51-60%", 18),
        ("61-70%", 22),
        ("71-80%", 28),
        ("81-90%", 35),
        ("91-100%", 42),
    ]
    .into_iter()
    .map(|(range, students)| ScoreBucket {
        range: range.to_string(),
        students,
    })
    .collect()
}

fn engagement() -> Vec<EngagementPoint> {
    [
        ("Jan", 120, 98, 45),
        ("Feb", 145, 128, 52),
        ("Mar", 189, 156, 48),
        ("Apr", 203, 178, 55),
        ("May", 234, 201, 49),
        ("Jun", 256, 223, 53),
    ]
    .into_iter()
    .map(|(month, enrollments, completions, avg_time)| EngagementPoint {
        month: month.to_string(),
        enrollments,
        completions,
        avg_time,
    })
    .collect()
}

fn stats() -> Vec<StatCard> {
    [
        ("Total Courses", "24", "+12%"),
        ("Active Students", "1,847", "+23%"),
        ("Course Completion", "87%", "+5%"),
        ("Revenue", "$12,459", "+18%"),
    ]
    .into_iter()
    .map(|(title, value, change)| StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    })
    .collect()
}

fn activities() -> Vec<Activity> {
    [
        (
            1,
            ActivityKind::Enrollment,
            "25 new students enrolled in React Development",
            "2 hours ago",
        ),
        (
            2,
            ActivityKind::Completion,
            "Course 'JavaScript Basics' reached 90% completion rate",
            "4 hours ago",
        ),
        (
            3,
            ActivityKind::NewCourse,
            "New course 'Python for Beginners' was published",
            "1 day ago",
        ),
    ]
    .into_iter()
    .map(|(id, kind, message, time)| Activity {
        id: RecordId(id),
        kind,
        message: message.to_string(),
        time: time.to_string(),
    })
    .collect()
}
