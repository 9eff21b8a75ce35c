//! Overview: headline stats, recent courses and the activity feed

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::{navigate, Selection};
use crate::app::Screen;
use crate::core::{Action, Command, Context, Module};
use crate::domain::Course;
use crate::listing::{Record, RecordId};
use crate::ui::theme;
use crate::ui::widgets::{badge, gauge_text, stat_cards, truncate};

/// Courses shown under "Recent Courses".
const RECENT_COURSES: usize = 4;

#[derive(Default)]
pub struct OverviewScreen {
    selection: Selection,
}

impl OverviewScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn recent<'a>(&self, ctx: &'a Context) -> Vec<&'a Course> {
        ctx.catalog.courses.iter().take(RECENT_COURSES).collect()
    }

    fn recent_ids(&self, ctx: &Context) -> Vec<RecordId> {
        self.recent(ctx).iter().map(|course| course.id()).collect()
    }

    pub fn selected<'a>(&self, ctx: &'a Context) -> Option<&'a Course> {
        let recent = self.recent(ctx);
        let ids: Vec<RecordId> = recent.iter().map(|course| course.id()).collect();
        self.selection.index_in(&ids).map(|idx| recent[idx])
    }

    fn render_courses(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let recent = self.recent(ctx);
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Recent Courses")
            .border_style(theme::border(true));

        if recent.is_empty() {
            let empty = Paragraph::new("No courses yet").block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = recent
            .iter()
            .map(|course| {
                let completion = course
                    .completion
                    .map(|value| gauge_text(value, 10))
                    .unwrap_or_else(|| "no completion data".to_string());
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(truncate(&course.title, 40), theme::title()),
                        Span::raw(" "),
                        badge(course.status.as_str(), theme::course_status(course.status)),
                    ]),
                    Line::from(vec![
                        Span::styled("by ", theme::label()),
                        Span::raw(course.instructor.clone()),
                        Span::styled("  students ", theme::label()),
                        Span::raw(course.students.to_string()),
                        Span::styled("  completion ", theme::label()),
                        Span::raw(completion),
                    ]),
                ])
            })
            .collect();

        let mut state = ListState::default();
        state.select(self.selection.index_in(&self.recent_ids(ctx)));
        let list = List::new(items)
            .block(block)
            .highlight_style(theme::highlight())
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_activity(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let lines: Vec<Line> = if ctx.catalog.activities.is_empty() {
            vec![Line::from("No recent activity")]
        } else {
            ctx.catalog
                .activities
                .iter()
                .flat_map(|activity| {
                    let (icon, style) = theme::activity_icon(activity.kind);
                    [
                        Line::from(vec![
                            Span::styled(format!("{icon} "), style),
                            Span::raw(activity.message.clone()),
                        ]),
                        Line::from(Span::styled(
                            format!("  {}", activity.time),
                            theme::label(),
                        )),
                    ]
                })
                .collect()
        };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Recent Activity")
                .border_style(theme::border(false)),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Module for OverviewScreen {
    fn id(&self) -> &'static str {
        "overview"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let ids = self.recent_ids(ctx);
        if navigate(&mut self.selection, &ids, &key) {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter => Action::Navigate(Screen::Courses),
            KeyCode::Char('p') => Action::Navigate(Screen::Player),
            KeyCode::Char('y') => match self.selected(ctx) {
                Some(course) => Action::Copy(course.title.clone()),
                None => Action::warn("Nothing selected"),
            },
            _ => Action::None,
        }
    }

    fn handle_command(&mut self, cmd: &Command, _ctx: &mut Context) -> Action {
        match cmd {
            Command::Search(_) | Command::Select { .. } | Command::View(_) => {
                Action::warn("Overview has no filters")
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6)])
            .split(area);
        stat_cards(frame, chunks[0], &ctx.catalog.stats);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        self.render_courses(frame, body[0], ctx);
        self.render_activity(frame, body[1], ctx);
    }
}
