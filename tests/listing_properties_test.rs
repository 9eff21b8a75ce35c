//! Behaviour of the listing engine over the sample catalog

use campus::data::{Catalog, CatalogSource, SampleCatalog};
use campus::domain::{pass_rate, Chapter, Course, CoursePerformance, PassRate};
use campus::listing::{
    filter, filter_grouped, filter_grouped_with, filter_indices, matches, FilterState, Record,
    RecordId,
};

fn catalog() -> Catalog {
    SampleCatalog.load().expect("samples")
}

fn ids<R: Record>(rows: &[&R]) -> Vec<RecordId> {
    rows.iter().map(|row| row.id()).collect()
}

const QUERIES: [&str; 8] = ["", "a", "python", "PYTHON", "sarah", "z", "advanced", " "];

#[test]
fn test_empty_state_is_identity() {
    let catalog = catalog();
    let state = FilterState::new();

    let courses = filter(&catalog.courses, &state);
    assert_eq!(courses.len(), catalog.courses.len());
    assert!(courses
        .iter()
        .zip(&catalog.courses)
        .all(|(kept, original)| std::ptr::eq(*kept, original)));

    assert_eq!(filter(&catalog.students, &state).len(), catalog.students.len());
    assert_eq!(
        filter_indices(&catalog.performance, &state),
        (0..catalog.performance.len()).collect::<Vec<_>>()
    );
}

#[test]
fn test_query_is_sound_and_complete() {
    let catalog = catalog();
    for query in QUERIES {
        let state = FilterState::with_query(query);
        let needle = query.to_lowercase();
        let kept = filter_indices(&catalog.courses, &state);

        for (idx, course) in catalog.courses.iter().enumerate() {
            let hit = course
                .searchable_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            assert_eq!(kept.contains(&idx), hit, "query {query:?} on {}", course.title);
            assert_eq!(matches(course, &state), hit);
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    let catalog = catalog();
    let mut state = FilterState::with_query("a");
    state.select("status", Some("published".to_string()));

    let once: Vec<Course> = filter(&catalog.courses, &state).into_iter().cloned().collect();
    let twice = filter(&once, &state);
    assert_eq!(ids(&twice), once.iter().map(|c| c.id).collect::<Vec<_>>());
}

#[test]
fn test_filter_preserves_order() {
    let catalog = catalog();
    for query in QUERIES {
        let kept = filter_indices(&catalog.performance, &FilterState::with_query(query));
        assert!(kept.windows(2).all(|pair| pair[0] < pair[1]), "query {query:?}");
    }
}

#[test]
fn test_grouped_retention_rule() {
    let catalog = catalog();
    let chapters = &catalog.curriculum.chapters;
    for query in ["", "react", "quiz", "hooks", "nothing-matches"] {
        let views = filter_grouped(chapters, query);
        let needle = query.to_lowercase();

        for chapter in chapters {
            let matching: Vec<RecordId> = chapter
                .lessons
                .iter()
                .filter(|lesson| lesson.title.to_lowercase().contains(&needle))
                .map(|lesson| lesson.id)
                .collect();
            let view = views.iter().find(|view| view.id() == chapter.id);
            if query.is_empty() || !matching.is_empty() {
                let view = view.expect("chapter retained");
                assert_eq!(view.child_ids(), matching);
            } else {
                assert!(view.is_none(), "chapter {} should be dropped", chapter.title);
            }
        }
    }
}

#[test]
fn test_grouped_with_type_selection() {
    let catalog = catalog();
    let mut state = FilterState::new();
    state.select("type", Some("quiz".to_string()));

    let views = filter_grouped_with(&catalog.curriculum.chapters, &state);
    assert!(!views.is_empty());
    assert!(views.iter().all(|view| {
        !view.children.is_empty()
            && view
                .children
                .iter()
                .all(|lesson| lesson.kind.as_str() == "quiz")
    }));
}

#[test]
fn test_empty_collections() {
    let mut active = FilterState::with_query("rust");
    active.select("status", Some("published".to_string()));

    for state in [FilterState::new(), active] {
        assert!(filter(&[] as &[Course], &state).is_empty());
        assert!(filter_indices(&[] as &[CoursePerformance], &state).is_empty());
        assert!(filter_grouped_with(&[] as &[Chapter], &state).is_empty());
    }
    assert!(filter_grouped(&[] as &[Chapter], "").is_empty());
    assert!(filter_grouped(&[] as &[Chapter], "react").is_empty());
}

#[test]
fn test_zero_child_group_with_query_is_dropped() {
    let mut chapters = catalog().curriculum.chapters;
    chapters.insert(
        1,
        Chapter {
            id: RecordId(99),
            title: "Coming Soon".to_string(),
            lessons: Vec::new(),
        },
    );

    let views = filter_grouped(&chapters, "");
    assert_eq!(views.len(), chapters.len());
    assert_eq!(views[1].id(), RecordId(99));
    assert!(views[1].children.is_empty());

    // the group title itself never keeps a group alive
    for query in ["react", "coming", "nothing-matches"] {
        let views = filter_grouped(&chapters, query);
        assert!(views.iter().all(|view| view.id() != RecordId(99)), "query {query:?}");
    }

    let mut state = FilterState::new();
    state.select("type", Some("video".to_string()));
    let views = filter_grouped_with(&chapters, &state);
    assert!(views.iter().all(|view| view.id() != RecordId(99)));
}

#[test]
fn test_order_preserved_with_selections() {
    let catalog = catalog();

    let mut state = FilterState::new();
    state.select("status", Some("published".to_string()));
    let kept = filter_indices(&catalog.courses, &state);
    assert!(kept.len() > 1);
    assert!(kept.windows(2).all(|pair| pair[0] < pair[1]));
    let rows = filter(&catalog.courses, &state);
    assert!(rows
        .iter()
        .zip(&kept)
        .all(|(row, &idx)| std::ptr::eq(*row, &catalog.courses[idx])));

    for query in QUERIES {
        let mut state = FilterState::with_query(query);
        state.select("group", Some("Group A".to_string()));
        let kept = filter_indices(&catalog.performance, &state);
        assert!(kept.windows(2).all(|pair| pair[0] < pair[1]), "query {query:?}");
        assert!(kept
            .iter()
            .all(|&idx| catalog.performance[idx].group.as_deref() == Some("Group A")));
    }
}

#[test]
fn test_filter_is_idempotent_over_states() {
    let catalog = catalog();
    let mut states = Vec::new();
    for query in QUERIES {
        for status in [None, Some("published"), Some("draft"), Some("archived")] {
            let mut state = FilterState::with_query(query);
            state.select("status", status.map(str::to_string));
            states.push(state);
        }
    }
    let mut by_category = FilterState::with_query("e");
    by_category.select("category", Some("Programming".to_string()));
    states.push(by_category);

    for state in &states {
        let once: Vec<Course> = filter(&catalog.courses, state).into_iter().cloned().collect();
        let twice = filter(&once, state);
        assert_eq!(
            ids(&twice),
            once.iter().map(|c| c.id).collect::<Vec<_>>(),
            "state {}",
            state.describe()
        );
    }
}

#[test]
fn test_pass_rate_without_completions() {
    assert_eq!(pass_rate(0, 0), PassRate::NotApplicable);
    assert_eq!(pass_rate(0, 0).to_string(), "N/A");
    assert_eq!(pass_rate(0, 10), PassRate::Percent(0));
}

#[test]
fn test_python_scenario() {
    let catalog = catalog();
    let rows: Vec<CoursePerformance> = catalog
        .performance
        .iter()
        .filter(|row| row.course == "React Fundamentals" || row.course == "Python Basics")
        .cloned()
        .collect();
    assert_eq!(rows.len(), 2);

    let result = filter(&rows, &FilterState::with_query("python"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].course, "Python Basics");
    assert_eq!((result[0].completed, result[0].passed), (52, 48));
    assert_eq!(result[0].pass_rate(), PassRate::Percent(92));
}

#[test]
fn test_published_scenario() {
    let catalog = catalog();
    // Published, Draft, Published
    let records: Vec<Course> = [0, 2, 1]
        .iter()
        .map(|&idx| catalog.courses[idx].clone())
        .collect();
    let mut state = FilterState::new();
    state.select("status", Some("published".to_string()));

    let result = filter(&records, &state);
    assert_eq!(ids(&result), vec![records[0].id, records[2].id]);
}

#[test]
fn test_selection_on_foreign_dimension_is_ignored() {
    let catalog = catalog();
    let mut state = FilterState::new();
    state.select("group", Some("Group A".to_string()));

    assert_eq!(filter(&catalog.courses, &state).len(), catalog.courses.len());
    assert_eq!(filter(&catalog.performance, &state).len(), 2);
}
