//! Student roster with a status select

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::{apply_filter_command, cycle_dimension, ids, navigate, Selection};
use crate::core::{Action, Command, Context, Module};
use crate::domain::metrics::{mean, percent};
use crate::domain::{StatCard, Student, StudentStatus};
use crate::listing::{self, FilterState};
use crate::ui::theme;
use crate::ui::widgets::{gauge_text, stat_cards};

#[derive(Default)]
pub struct StudentsScreen {
    filter: FilterState,
    selection: Selection,
}

impl StudentsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible<'a>(&self, ctx: &'a Context) -> Vec<&'a Student> {
        listing::filter(&ctx.catalog.students, &self.filter)
    }

    pub fn selected<'a>(&self, ctx: &'a Context) -> Option<&'a Student> {
        let visible = self.visible(ctx);
        self.selection
            .index_in(&ids(&visible))
            .map(|idx| visible[idx])
    }

    fn status_options() -> Vec<String> {
        StudentStatus::ALL
            .iter()
            .map(|status| status.as_str().to_lowercase())
            .collect()
    }
}

/// Headline cards computed from the whole roster.
pub fn roster_stats(students: &[Student]) -> Vec<StatCard> {
    let active = students
        .iter()
        .filter(|student| student.status == StudentStatus::Active)
        .count();
    let enrolled: u64 = students.iter().map(|s| u64::from(s.enrolled_courses)).sum();
    let completed: u64 = students.iter().map(|s| u64::from(s.completed_courses)).sum();
    let progress: Vec<u32> = students.iter().map(|s| s.overall_progress).collect();

    let card = |title: &str, value: String| StatCard {
        title: title.to_string(),
        value,
        change: String::new(),
    };
    let pct = |value: Option<u32>| value.map_or_else(|| "N/A".to_string(), |v| format!("{v}%"));

    vec![
        card("Total Students", students.len().to_string()),
        card("Active Students", active.to_string()),
        card("Completion Rate", pct(percent(completed, enrolled))),
        card("Avg. Progress", pct(mean(&progress))),
    ]
}

impl Module for StudentsScreen {
    fn id(&self) -> &'static str {
        "students"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let visible = ids(&self.visible(ctx));
        if navigate(&mut self.selection, &visible, &key) {
            return Action::None;
        }
        let action = match key.code {
            KeyCode::Char('s') => {
                cycle_dimension(&mut self.filter, "status", &Self::status_options(), "Status")
            }
            KeyCode::Char('x') => {
                self.filter.clear();
                Action::info("Filters cleared")
            }
            KeyCode::Char('y') => {
                return match self.selected(ctx) {
                    Some(student) => Action::Copy(student.email.clone()),
                    None => Action::warn("Nothing selected"),
                };
            }
            _ => return Action::None,
        };
        self.on_filter_changed(ctx);
        action
    }

    fn handle_command(&mut self, cmd: &Command, ctx: &mut Context) -> Action {
        match apply_filter_command::<Student>(&mut self.filter, cmd) {
            Some(action) => {
                self.on_filter_changed(ctx);
                action
            }
            None if matches!(cmd, Command::View(_)) => Action::warn("View applies to courses"),
            None => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
            ])
            .split(area);
        stat_cards(frame, chunks[0], &roster_stats(&ctx.catalog.students));

        let visible = self.visible(ctx);
        let toolbar = Line::from(vec![
            Span::styled("Search ", theme::label()),
            Span::raw(format!(
                "{}  ",
                if self.filter.query.is_empty() {
                    "-"
                } else {
                    self.filter.query.as_str()
                }
            )),
            Span::styled("Status ", theme::label()),
            Span::raw(format!("{}  ", self.filter.selection("status").unwrap_or("all"))),
            Span::styled(
                format!("{} of {}", visible.len(), ctx.catalog.students.len()),
                theme::label(),
            ),
        ]);
        frame.render_widget(Paragraph::new(toolbar), chunks[1]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Students")
            .border_style(theme::border(true));
        if visible.is_empty() {
            frame.render_widget(Paragraph::new("No students found").block(block), chunks[2]);
            return;
        }

        let rows: Vec<Row> = visible
            .iter()
            .map(|student| {
                Row::new(vec![
                    Cell::from(Line::from(vec![
                        Span::styled(format!("{} ", student.initials()), theme::title()),
                        Span::raw(student.name.clone()),
                    ])),
                    Cell::from(student.email.clone()),
                    Cell::from(student.enrolled_courses.to_string()),
                    Cell::from(student.completed_courses.to_string()),
                    Cell::from(gauge_text(student.overall_progress, 10)),
                    Cell::from(student.last_active.clone()),
                    Cell::from(student.status.as_str())
                        .style(theme::student_status(student.status)),
                ])
            })
            .collect();
        let widths = [
            Constraint::Min(18),
            Constraint::Length(22),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(15),
            Constraint::Length(12),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(
                Row::new(vec![
                    "Student",
                    "Email",
                    "Enrolled",
                    "Completed",
                    "Progress",
                    "Last Active",
                    "Status",
                ])
                .style(theme::label()),
            )
            .block(block)
            .highlight_style(theme::highlight())
            .highlight_symbol("> ");

        let mut state = TableState::default();
        state.select(self.selection.index_in(&ids(&visible)));
        frame.render_stateful_widget(table, chunks[2], &mut state);
    }

    fn filter_state(&self) -> Option<&FilterState> {
        Some(&self.filter)
    }

    fn filter_state_mut(&mut self) -> Option<&mut FilterState> {
        Some(&mut self.filter)
    }

    fn on_filter_changed(&mut self, ctx: &Context) {
        let visible = ids(&self.visible(ctx));
        self.selection.resolve(&visible);
    }
}
