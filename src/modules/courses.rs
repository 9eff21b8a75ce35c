//! Course catalog: search, status and category selects, grid or list view

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use super::{apply_filter_command, cycle_dimension, ids, navigate, Selection};
use crate::config::CourseView;
use crate::core::{Action, Command, Context, Module};
use crate::domain::{Course, CourseStatus};
use crate::listing::{self, FilterState};
use crate::ui::theme;
use crate::ui::widgets::{badge, truncate};

const CARD_WIDTH: u16 = 38;
const CARD_HEIGHT: u16 = 7;

pub struct CoursesScreen {
    filter: FilterState,
    view: CourseView,
    selection: Selection,
}

impl CoursesScreen {
    pub fn new(view: CourseView) -> Self {
        Self {
            filter: FilterState::new(),
            view,
            selection: Selection::default(),
        }
    }

    pub fn view(&self) -> CourseView {
        self.view
    }

    pub fn visible<'a>(&self, ctx: &'a Context) -> Vec<&'a Course> {
        listing::filter(&ctx.catalog.courses, &self.filter)
    }

    pub fn selected<'a>(&self, ctx: &'a Context) -> Option<&'a Course> {
        let visible = self.visible(ctx);
        self.selection
            .index_in(&ids(&visible))
            .map(|idx| visible[idx])
    }

    fn status_options() -> Vec<String> {
        CourseStatus::ALL
            .iter()
            .map(|status| status.as_str().to_lowercase())
            .collect()
    }

    fn toolbar(&self, visible: usize, total: usize) -> Line<'static> {
        let query = if self.filter.query.is_empty() {
            "-".to_string()
        } else {
            self.filter.query.clone()
        };
        Line::from(vec![
            Span::styled("Search ", theme::label()),
            Span::raw(format!("{query}  ")),
            Span::styled("Status ", theme::label()),
            Span::raw(format!("{}  ", self.filter.selection("status").unwrap_or("all"))),
            Span::styled("Category ", theme::label()),
            Span::raw(format!(
                "{}  ",
                self.filter.selection("category").unwrap_or("all")
            )),
            Span::styled("View ", theme::label()),
            Span::raw(format!("{}  ", self.view.title())),
            Span::styled(format!("{visible} of {total}"), theme::label()),
        ])
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let hint = if self.filter.is_active() {
            "Try adjusting your search or filters (x clears them)"
        } else {
            "Create your first course to get started"
        };
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No courses found", theme::title())),
            Line::from(Span::styled(hint, theme::label())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Courses"));
        frame.render_widget(paragraph, area);
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect, visible: &[&Course], selected: usize) {
        let columns = (area.width / CARD_WIDTH).max(1) as usize;
        let rows_fit = (area.height / CARD_HEIGHT).max(1) as usize;
        let selected_row = selected / columns;
        let first_row = selected_row.saturating_sub(rows_fit - 1);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); rows_fit])
            .split(area);

        for (slot, row_area) in row_areas.iter().enumerate() {
            let start = (first_row + slot) * columns;
            if start >= visible.len() {
                break;
            }
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);
            for (offset, cell) in cells.iter().enumerate() {
                let idx = start + offset;
                let Some(course) = visible.get(idx) else {
                    break;
                };
                frame.render_widget(course_card(course, idx == selected), *cell);
            }
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, visible: &[&Course], selected: usize) {
        let header = Row::new(vec![
            "Course",
            "Instructor",
            "Category",
            "Students",
            "Rating",
            "Price",
            "Status",
        ])
        .style(theme::label());

        let rows: Vec<Row> = visible
            .iter()
            .map(|course| {
                Row::new(vec![
                    Cell::from(truncate(&course.title, 34)),
                    Cell::from(course.instructor.clone()),
                    Cell::from(course.category.clone()),
                    Cell::from(course.students.to_string()),
                    Cell::from(rating_label(course)),
                    Cell::from(course.price_label()),
                    Cell::from(course.status.as_str())
                        .style(theme::course_status(course.status)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Courses")
                    .border_style(theme::border(true)),
            )
            .highlight_style(theme::highlight())
            .highlight_symbol("> ");

        let mut state = TableState::default();
        state.select(Some(selected));
        frame.render_stateful_widget(table, area, &mut state);
    }
}

fn rating_label(course: &Course) -> String {
    if course.rating > 0.0 {
        format!("★ {:.1}", course.rating)
    } else {
        "-".to_string()
    }
}

fn course_card(course: &Course, selected: bool) -> Paragraph<'static> {
    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", course.thumbnail)),
            badge(course.status.as_str(), theme::course_status(course.status)),
            Span::styled(format!(" {}", course.category), theme::label()),
        ]),
        Line::from(Span::styled(course.description.clone(), theme::label())),
        Line::from(vec![
            Span::styled("by ", theme::label()),
            Span::raw(course.instructor.clone()),
        ]),
        Line::from(vec![
            Span::raw(format!("{} students  ", course.students)),
            Span::raw(format!("{}  ", rating_label(course))),
            Span::styled(course.price_label(), theme::title()),
        ]),
        Line::from(Span::styled(
            format!("{} · updated {}", course.duration, course.last_updated),
            theme::label(),
        )),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(truncate(&course.title, (CARD_WIDTH - 4) as usize))
                .border_style(theme::border(selected)),
        )
}

impl Module for CoursesScreen {
    fn id(&self) -> &'static str {
        "courses"
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
            KeyCode::Char('c') => cycle_dimension(
                &mut self.filter,
                "category",
                &ctx.catalog.course_categories(),
                "Category",
            ),
            KeyCode::Char('v') => {
                self.view = self.view.toggled();
                return Action::info(format!("{} view", self.view.title()));
            }
            KeyCode::Char('x') => {
                self.filter.clear();
                Action::info("Filters cleared")
            }
            KeyCode::Char('y') => {
                return match self.selected(ctx) {
                    Some(course) => Action::Copy(course.title.clone()),
                    None => Action::warn("Nothing selected"),
                };
            }
            _ => return Action::None,
        };
        self.on_filter_changed(ctx);
        action
    }

    fn handle_command(&mut self, cmd: &Command, ctx: &mut Context) -> Action {
        if let Command::View(view) = cmd {
            self.view = *view;
            return Action::info(format!("{} view", view.title()));
        }
        match apply_filter_command::<Course>(&mut self.filter, cmd) {
            Some(action) => {
                self.on_filter_changed(ctx);
                action
            }
            None => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let visible = self.visible(ctx);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);
        frame.render_widget(
            Paragraph::new(self.toolbar(visible.len(), ctx.catalog.courses.len())),
            chunks[0],
        );

        let Some(selected) = self.selection.index_in(&ids(&visible)) else {
            self.render_empty(frame, chunks[1]);
            return;
        };
        match self.view {
            CourseView::Grid => self.render_grid(frame, chunks[1], &visible, selected),
            CourseView::List => self.render_list(frame, chunks[1], &visible, selected),
        }
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
