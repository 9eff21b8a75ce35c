//! Analytics: pass/fail performance by course and group, score
//! distribution and engagement trends.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{
    Axis, BarChart, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table,
    TableState,
};
use ratatui::Frame;

use super::{apply_filter_command, cycle_dimension, ids, navigate, Selection};
use crate::core::{Action, Command, Context, Module};
use crate::domain::{CoursePerformance, PerformanceBand, PerformanceSummary, StatCard};
use crate::listing::{self, FilterState};
use crate::ui::theme;
use crate::ui::widgets::{sparkline_text, stat_cards};

#[derive(Default)]
pub struct AnalyticsScreen {
    filter: FilterState,
    selection: Selection,
}

impl AnalyticsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible<'a>(&self, ctx: &'a Context) -> Vec<&'a CoursePerformance> {
        listing::filter(&ctx.catalog.performance, &self.filter)
    }

    pub fn summary(&self, ctx: &Context) -> PerformanceSummary {
        PerformanceSummary::from_rows(self.visible(ctx))
    }

    fn render_performance(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let visible = self.visible(ctx);
        let title = format!(
            "Course Performance  course:{} group:{}",
            self.filter.selection("course").unwrap_or("all"),
            self.filter.selection("group").unwrap_or("all")
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme::border(true));
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new("No performance data for this selection").block(block),
                area,
            );
            return;
        }

        let rows: Vec<Row> = visible
            .iter()
            .map(|row| {
                let rate = row.pass_rate();
                let band = rate.band();
                let marker = if band == PerformanceBand::Low { " ⚠" } else { "" };
                Row::new(vec![
                    Cell::from(row.course.clone()),
                    Cell::from(row.group.clone().unwrap_or_else(|| "-".to_string())),
                    Cell::from(row.completed.to_string()),
                    Cell::from(row.passed.to_string())
                        .style(Style::default().fg(Color::LightGreen)),
                    Cell::from(row.failed.to_string())
                        .style(Style::default().fg(Color::LightRed)),
                    Cell::from(format!("{}{marker}", rate)).style(theme::band(band)),
                    Cell::from(format!("{}%", row.avg_score)),
                    Cell::from(format!("{}%", row.threshold)),
                ])
            })
            .collect();
        let widths = [
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(
                Row::new(vec![
                    "Course",
                    "Group",
                    "Completed",
                    "Passed",
                    "Failed",
                    "Pass Rate",
                    "Avg Score",
                    "Threshold",
                ])
                .style(theme::label()),
            )
            .block(block)
            .highlight_style(theme::highlight())
            .highlight_symbol("> ");
        let mut state = TableState::default();
        state.select(self.selection.index_in(&ids(&visible)));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_distribution(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let data: Vec<(&str, u64)> = ctx
            .catalog
            .score_distribution
            .iter()
            .map(|bucket| (bucket.range.as_str(), u64::from(bucket.students)))
            .collect();
        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Score Distribution")
                    .border_style(theme::border(false)),
            )
            .data(data.as_slice())
            .bar_width(7)
            .bar_gap(1)
            .bar_style(Style::default().fg(theme::ACCENT))
            .value_style(Style::default().fg(Color::Black).bg(theme::ACCENT));
        frame.render_widget(chart, area);
    }

    fn render_engagement(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let engagement = &ctx.catalog.engagement;
        let enrollments: Vec<(f64, f64)> = engagement
            .iter()
            .enumerate()
            .map(|(idx, point)| (idx as f64, f64::from(point.enrollments)))
            .collect();
        let completions: Vec<(f64, f64)> = engagement
            .iter()
            .enumerate()
            .map(|(idx, point)| (idx as f64, f64::from(point.completions)))
            .collect();
        let avg_time: Vec<u64> = engagement
            .iter()
            .map(|point| u64::from(point.avg_time))
            .collect();

        let max = engagement
            .iter()
            .map(|point| point.enrollments.max(point.completions))
            .max()
            .unwrap_or(0);
        let y_top = f64::from(max.max(1)) * 1.1;
        let x_top = engagement.len().saturating_sub(1).max(1) as f64;
        let labels: Vec<Span> = match (engagement.first(), engagement.last()) {
            (Some(first), Some(last)) => vec![
                Span::raw(first.month.clone()),
                Span::raw(last.month.clone()),
            ],
            _ => Vec::new(),
        };

        let datasets = vec![
            Dataset::default()
                .name("Enrollments")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme::ACCENT))
                .data(&enrollments),
            Dataset::default()
                .name("Completions")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::LightGreen))
                .data(&completions),
        ];
        let title = format!("Engagement  avg time {}", sparkline_text(&avg_time, 12));
        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(theme::border(false)),
            )
            .x_axis(
                Axis::default()
                    .style(theme::label())
                    .bounds([0.0, x_top])
                    .labels(labels),
            )
            .y_axis(
                Axis::default()
                    .style(theme::label())
                    .bounds([0.0, y_top])
                    .labels(vec![
                        Span::raw("0"),
                        Span::raw(format!("{}", y_top.round() as u64)),
                    ]),
            );
        frame.render_widget(chart, area);
    }
}

/// Key metric cards for a set of performance rows.
pub fn summary_cards(summary: &PerformanceSummary) -> Vec<StatCard> {
    let card = |title: &str, value: String| StatCard {
        title: title.to_string(),
        value,
        change: String::new(),
    };
    vec![
        card("Completed", summary.completed.to_string()),
        card("Passed", summary.passed.to_string()),
        card("Failed", summary.failed.to_string()),
        card("Pass Rate", summary.pass_rate().to_string()),
        card(
            "Avg Score",
            summary
                .avg_score
                .map_or_else(|| "N/A".to_string(), |score| format!("{score}%")),
        ),
    ]
}

impl Module for AnalyticsScreen {
    fn id(&self) -> &'static str {
        "analytics"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let action = match key.code {
            KeyCode::Char('c') => cycle_dimension(
                &mut self.filter,
                "course",
                &ctx.catalog.performance_courses(),
                "Course",
            ),
            KeyCode::Char('o') => cycle_dimension(
                &mut self.filter,
                "group",
                &ctx.catalog.performance_groups(),
                "Group",
            ),
            KeyCode::Char('x') => {
                self.filter.clear();
                Action::info("Filters cleared")
            }
            KeyCode::Char('r') => return Action::Reload,
            KeyCode::Char('y') => {
                let visible = self.visible(ctx);
                return match self.selection.index_in(&ids(&visible)) {
                    Some(idx) => {
                        let row = visible[idx];
                        Action::Copy(format!("{}: {} pass rate", row.course, row.pass_rate()))
                    }
                    None => Action::warn("Nothing selected"),
                };
            }
            _ => {
                let visible = ids(&self.visible(ctx));
                navigate(&mut self.selection, &visible, &key);
                return Action::None;
            }
        };
        self.on_filter_changed(ctx);
        action
    }

    fn handle_command(&mut self, cmd: &Command, ctx: &mut Context) -> Action {
        match apply_filter_command::<CoursePerformance>(&mut self.filter, cmd) {
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
                Constraint::Percentage(45),
                Constraint::Min(5),
            ])
            .split(area);
        stat_cards(frame, chunks[0], &summary_cards(&self.summary(ctx)));

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        self.render_distribution(frame, charts[0], ctx);
        self.render_engagement(frame, charts[1], ctx);
        self.render_performance(frame, chunks[2], ctx);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PassRate;
    use crate::listing::RecordId;
    use crate::modules::test_support::{char_key, key, render_text, sample_ctx};

    #[test]
    fn test_python_search_scenario() {
        let mut ctx = sample_ctx();
        let mut screen = AnalyticsScreen::new();
        screen.handle_command(&Command::Search("python".into()), &mut ctx);
        let visible = screen.visible(&ctx);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].course, "Python Basics");
        assert_eq!(visible[0].pass_rate(), PassRate::Percent(92));
    }

    #[test]
    fn test_group_select_cycles_sorted_groups() {
        let mut ctx = sample_ctx();
        let mut screen = AnalyticsScreen::new();
        screen.handle_key(char_key('o'), &mut ctx);
        assert_eq!(screen.filter.selection("group"), Some("Group A"));
        let courses: Vec<&str> = screen
            .visible(&ctx)
            .iter()
            .map(|row| row.course.as_str())
            .collect();
        assert_eq!(courses, vec!["React Fundamentals", "Python Basics"]);

        let summary = screen.summary(&ctx);
        assert_eq!(summary.completed, 97);
        assert_eq!(summary.passed, 90);
        assert_eq!(summary.pass_rate(), PassRate::Percent(93));
    }

    #[test]
    fn test_course_and_group_combine() {
        let mut ctx = sample_ctx();
        let mut screen = AnalyticsScreen::new();
        screen.handle_command(
            &Command::Select {
                dimension: "course".into(),
                value: Some("web design".into()),
            },
            &mut ctx,
        );
        screen.handle_command(
            &Command::Select {
                dimension: "group".into(),
                value: Some("Group A".into()),
            },
            &mut ctx,
        );
        assert!(screen.visible(&ctx).is_empty());
        assert_eq!(screen.summary(&ctx).pass_rate(), PassRate::NotApplicable);
        let cards = summary_cards(&screen.summary(&ctx));
        assert_eq!(cards[3].value, "N/A");
    }

    #[test]
    fn test_g_and_end_move_selection() {
        let mut ctx = sample_ctx();
        let mut screen = AnalyticsScreen::new();
        screen.handle_key(key(KeyCode::End), &mut ctx);
        assert_eq!(screen.selection.id(), Some(RecordId(5)));

        screen.handle_key(char_key('g'), &mut ctx);
        assert_eq!(screen.selection.id(), Some(RecordId(1)));
        assert_eq!(screen.filter.selection("group"), None);
    }

    #[test]
    fn test_refresh_requests_reload() {
        let mut ctx = sample_ctx();
        let mut screen = AnalyticsScreen::new();
        assert_eq!(screen.handle_key(char_key('r'), &mut ctx), Action::Reload);
    }

    #[test]
    fn test_render_marks_pass_rates() {
        let mut ctx = sample_ctx();
        ctx.catalog.performance[3].passed = 10;
        let text = render_text(&AnalyticsScreen::new(), &ctx, 140, 40);
        assert!(text.contains("Score Distribution"));
        assert!(text.contains("Engagement"));
        assert!(text.contains("92%"));
        // 10 of 29 passed
        assert!(text.contains("34% ⚠"));
    }
}
