//! Course player: lesson pane plus a searchable, collapsible curriculum
//!
//! Expansion, completion marks and the cursor are keyed by record id and
//! live only as long as the screen does.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::{apply_filter_command, cycle_dimension, navigate, Selection};
use crate::core::{Action, Command, Context, Module};
use crate::domain::metrics::percent;
use crate::domain::{Chapter, Curriculum, Lesson, LessonKind};
use crate::listing::{filter_grouped_with, FilterState, GroupView, RecordId};
use crate::ui::theme;

/// Chapters open when the player is first shown.
const INITIALLY_EXPANDED: usize = 2;

/// One line of the curriculum pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurriculumRow {
    Chapter(RecordId),
    Lesson(RecordId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Faster,
    Fast,
    Double,
}

impl Speed {
    pub const ALL: [Speed; 5] = [
        Speed::Half,
        Speed::Normal,
        Speed::Faster,
        Speed::Fast,
        Speed::Double,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Faster => "1.25x",
            Speed::Fast => "1.5x",
            Speed::Double => "2x",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|speed| *speed == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

pub struct PlayerScreen {
    filter: FilterState,
    expanded: BTreeSet<RecordId>,
    cursor: Selection<CurriculumRow>,
    current: Option<RecordId>,
    completed: BTreeSet<RecordId>,
    playing: bool,
    speed: Speed,
}

impl PlayerScreen {
    pub fn new(curriculum: &Curriculum) -> Self {
        Self {
            filter: FilterState::new(),
            expanded: curriculum
                .chapters
                .iter()
                .take(INITIALLY_EXPANDED)
                .map(|chapter| chapter.id)
                .collect(),
            cursor: Selection::default(),
            current: curriculum.current_lesson().map(|lesson| lesson.id),
            completed: BTreeSet::new(),
            playing: false,
            speed: Speed::default(),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible<'a>(&self, curriculum: &'a Curriculum) -> Vec<GroupView<'a, Chapter>> {
        filter_grouped_with(&curriculum.chapters, &self.filter)
    }

    /// Rows of the curriculum pane: every retained chapter, followed by its
    /// visible lessons when expanded.
    pub fn rows(&self, curriculum: &Curriculum) -> Vec<CurriculumRow> {
        let mut rows = Vec::new();
        for view in self.visible(curriculum) {
            rows.push(CurriculumRow::Chapter(view.id()));
            if self.is_expanded(view.id()) {
                rows.extend(view.child_ids().into_iter().map(CurriculumRow::Lesson));
            }
        }
        rows
    }

    pub fn is_expanded(&self, chapter: RecordId) -> bool {
        self.expanded.contains(&chapter)
    }

    pub fn toggle_chapter(&mut self, chapter: RecordId) {
        if !self.expanded.remove(&chapter) {
            self.expanded.insert(chapter);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_completed(&self, lesson: &Lesson) -> bool {
        lesson.completed || self.completed.contains(&lesson.id)
    }

    fn chapter_done(&self, chapter: &Chapter) -> usize {
        chapter
            .lessons
            .iter()
            .filter(|lesson| self.is_completed(lesson))
            .count()
    }

    /// Course progress including lessons marked complete this session.
    pub fn progress(&self, curriculum: &Curriculum) -> Option<u32> {
        let total = curriculum.lessons().count() as u64;
        let done = curriculum
            .lessons()
            .filter(|lesson| self.is_completed(lesson))
            .count() as u64;
        percent(done, total)
    }

    pub fn current_lesson<'a>(&self, curriculum: &'a Curriculum) -> Option<&'a Lesson> {
        self.current
            .and_then(|id| curriculum.lesson(id))
            .map(|(_, lesson)| lesson)
    }

    fn open(&mut self, lesson: &Lesson) -> Action {
        self.current = Some(lesson.id);
        self.playing = false;
        Action::info(format!("Now playing: {}", lesson.title))
    }

    /// Advance to the lesson after the current one, in course order.
    fn continue_next(&mut self, curriculum: &Curriculum) -> Action {
        let lessons: Vec<&Lesson> = curriculum.lessons().collect();
        let next = match self.current {
            Some(id) => lessons
                .iter()
                .position(|lesson| lesson.id == id)
                .and_then(|idx| lessons.get(idx + 1)),
            None => lessons.first(),
        };
        match next {
            Some(lesson) => self.open(lesson),
            None => Action::info("End of course"),
        }
    }

    fn mark_complete(&mut self, curriculum: &Curriculum) -> Action {
        match self.current_lesson(curriculum) {
            Some(lesson) if self.is_completed(lesson) => {
                Action::info(format!("{} is already complete", lesson.title))
            }
            Some(lesson) => {
                self.completed.insert(lesson.id);
                Action::info(format!("Marked complete: {}", lesson.title))
            }
            None => Action::warn("No lesson selected"),
        }
    }

    fn activate(&mut self, curriculum: &Curriculum) -> Action {
        let rows = self.rows(curriculum);
        let Some(row) = self.cursor.index_in(&rows).map(|idx| rows[idx]) else {
            return Action::None;
        };
        match row {
            CurriculumRow::Chapter(id) => {
                self.toggle_chapter(id);
                Action::None
            }
            CurriculumRow::Lesson(id) => match curriculum.lesson(id) {
                Some((_, lesson)) => self.open(lesson),
                None => Action::None,
            },
        }
    }

    /// Chapter owning the row under the cursor.
    fn cursor_chapter(&self, curriculum: &Curriculum) -> Option<RecordId> {
        let rows = self.rows(curriculum);
        match self.cursor.index_in(&rows).map(|idx| rows[idx])? {
            CurriculumRow::Chapter(id) => Some(id),
            CurriculumRow::Lesson(id) => curriculum.lesson(id).map(|(chapter, _)| chapter.id),
        }
    }

    fn set_expanded(&mut self, curriculum: &Curriculum, open: bool) {
        if let Some(chapter) = self.cursor_chapter(curriculum) {
            if open {
                self.expanded.insert(chapter);
            } else {
                self.expanded.remove(&chapter);
                self.cursor.set(Some(CurriculumRow::Chapter(chapter)));
            }
        }
    }

    fn type_options() -> Vec<String> {
        LessonKind::ALL
            .iter()
            .map(|kind| kind.as_str().to_string())
            .collect()
    }

    fn render_lesson(&self, frame: &mut Frame, area: Rect, curriculum: &Curriculum) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6), Constraint::Length(3)])
            .split(area);

        let progress = self.progress(curriculum).unwrap_or(0);
        let title = if curriculum.title.is_empty() {
            "Course".to_string()
        } else {
            curriculum.title.clone()
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(title))
            .gauge_style(Style::default().fg(theme::ACCENT))
            .percent(progress.min(100) as u16)
            .label(format!("{progress}% complete"));
        frame.render_widget(gauge, chunks[0]);

        let body = match self.current_lesson(curriculum) {
            Some(lesson) => {
                let (icon, state) = if self.playing {
                    ("⏸", "Playing")
                } else {
                    ("▶", "Paused")
                };
                let mut lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(format!("{icon}  {state}"), theme::title())),
                    Line::from(""),
                    Line::from(Span::styled(
                        lesson.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("{}  ·  {}", lesson.kind.label(), lesson.duration),
                        theme::label(),
                    )),
                    Line::from(vec![
                        Span::styled("Speed ", theme::label()),
                        Span::raw(self.speed.label()),
                    ]),
                ];
                if self.is_completed(lesson) {
                    lines.push(Line::from(Span::styled(
                        "✓ Completed",
                        Style::default().fg(Color::LightGreen),
                    )));
                }
                lines
            }
            None => vec![Line::from("Select a lesson to start")],
        };
        let player = Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Lesson")
                    .border_style(theme::border(false)),
            );
        frame.render_widget(player, chunks[1]);

        let controls = Paragraph::new(Line::from(vec![
            Span::styled("space", theme::title()),
            Span::raw(" play/pause  "),
            Span::styled("f", theme::title()),
            Span::raw(" speed  "),
            Span::styled("m", theme::title()),
            Span::raw(" mark complete  "),
            Span::styled("n", theme::title()),
            Span::raw(" continue"),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(theme::border(false)));
        frame.render_widget(controls, chunks[2]);
    }

    fn render_curriculum(&self, frame: &mut Frame, area: Rect, curriculum: &Curriculum) {
        let views = self.visible(curriculum);
        let mut items = Vec::new();
        for view in &views {
            let chapter = view.group;
            let arrow = if self.is_expanded(chapter.id) { "▾" } else { "▸" };
            let done = self.chapter_done(chapter);
            let mark = if !chapter.lessons.is_empty() && done == chapter.lessons.len() {
                "✓ "
            } else {
                ""
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("{arrow} {mark}{}", chapter.title), theme::title()),
                Span::styled(
                    format!("  {done}/{}", chapter.lessons.len()),
                    theme::label(),
                ),
            ])));
            if !self.is_expanded(chapter.id) {
                continue;
            }
            for lesson in &view.children {
                let is_current = self.current == Some(lesson.id);
                let check = if self.is_completed(lesson) { "✓" } else { " " };
                let style = if is_current {
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let mut spans = vec![
                    Span::raw(format!("   {check} {} ", theme::lesson_icon(lesson.kind))),
                    Span::styled(lesson.title.clone(), style),
                    Span::styled(format!("  {}", lesson.duration), theme::label()),
                ];
                if is_current {
                    spans.push(Span::styled("  ●", style));
                }
                items.push(ListItem::new(Line::from(spans)));
            }
        }

        let title = format!(
            "Curriculum  search:{} type:{}",
            if self.filter.query.is_empty() {
                "-"
            } else {
                self.filter.query.as_str()
            },
            self.filter.selection("type").unwrap_or("all")
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme::border(true));
        if items.is_empty() {
            frame.render_widget(Paragraph::new("No lessons found").block(block), area);
            return;
        }

        let mut state = ListState::default();
        state.select(self.cursor.index_in(&self.rows(curriculum)));
        let list = List::new(items)
            .block(block)
            .highlight_style(theme::highlight())
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl Module for PlayerScreen {
    fn id(&self) -> &'static str {
        "player"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let curriculum = &ctx.catalog.curriculum;
        let rows = self.rows(curriculum);
        if navigate(&mut self.cursor, &rows, &key) {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter => self.activate(curriculum),
            KeyCode::Left | KeyCode::Char('h') => {
                self.set_expanded(curriculum, false);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.set_expanded(curriculum, true);
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Char('p') => {
                if self.current_lesson(curriculum).is_none() {
                    return Action::warn("No lesson selected");
                }
                self.playing = !self.playing;
                Action::None
            }
            KeyCode::Char('f') => {
                self.speed = self.speed.next();
                Action::info(format!("Playback speed {}", self.speed.label()))
            }
            KeyCode::Char('m') => self.mark_complete(curriculum),
            KeyCode::Char('n') => self.continue_next(curriculum),
            KeyCode::Char('t') => {
                let action =
                    cycle_dimension(&mut self.filter, "type", &Self::type_options(), "Type");
                self.on_filter_changed(ctx);
                action
            }
            KeyCode::Char('x') => {
                self.filter.clear();
                self.on_filter_changed(ctx);
                Action::info("Filters cleared")
            }
            KeyCode::Char('y') => match self.current_lesson(curriculum) {
                Some(lesson) => Action::Copy(lesson.title.clone()),
                None => Action::warn("No lesson selected"),
            },
            _ => Action::None,
        }
    }

    fn handle_command(&mut self, cmd: &Command, ctx: &mut Context) -> Action {
        match apply_filter_command::<Lesson>(&mut self.filter, cmd) {
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
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
            .split(area);
        self.render_curriculum(frame, chunks[0], &ctx.catalog.curriculum);
        self.render_lesson(frame, chunks[1], &ctx.catalog.curriculum);
    }

    fn filter_state(&self) -> Option<&FilterState> {
        Some(&self.filter)
    }

    fn filter_state_mut(&mut self) -> Option<&mut FilterState> {
        Some(&mut self.filter)
    }

    fn on_filter_changed(&mut self, ctx: &Context) {
        let rows = self.rows(&ctx.catalog.curriculum);
        self.cursor.resolve(&rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::test_support::{char_key, key, render_text, sample_ctx};

    fn screen(ctx: &Context) -> PlayerScreen {
        PlayerScreen::new(&ctx.catalog.curriculum)
    }

    #[test]
    fn test_first_two_chapters_start_expanded() {
        let ctx = sample_ctx();
        let player = screen(&ctx);
        assert!(player.is_expanded(RecordId(1)));
        assert!(player.is_expanded(RecordId(2)));
        assert!(!player.is_expanded(RecordId(3)));
        // 3 chapter rows plus 3 + 4 lessons
        assert_eq!(player.rows(&ctx.catalog.curriculum).len(), 10);
    }

    #[test]
    fn test_search_keeps_expansion_and_drops_empty_chapters() {
        let mut ctx = sample_ctx();
        let mut player = screen(&ctx);
        player.handle_command(&Command::Search("hooks".into()), &mut ctx);
        assert_eq!(
            player.rows(&ctx.catalog.curriculum),
            vec![
                CurriculumRow::Chapter(RecordId(2)),
                CurriculumRow::Lesson(RecordId(4)),
                CurriculumRow::Chapter(RecordId(3)),
            ]
        );

        player.toggle_chapter(RecordId(3));
        assert_eq!(
            player.rows(&ctx.catalog.curriculum).last(),
            Some(&CurriculumRow::Lesson(RecordId(9)))
        );
    }

    #[test]
    fn test_type_select_filters_lessons() {
        let mut ctx = sample_ctx();
        let mut player = screen(&ctx);
        player.handle_command(
            &Command::Select {
                dimension: "type".into(),
                value: Some("quiz".into()),
            },
            &mut ctx,
        );
        let views = player.visible(&ctx.catalog.curriculum);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].child_ids(), vec![RecordId(7)]);
    }

    #[test]
    fn test_enter_toggles_chapter_and_opens_lesson() {
        let mut ctx = sample_ctx();
        let mut player = screen(&ctx);
        player.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(!player.is_expanded(RecordId(1)));

        // rows: ch1, ch2, l4 ...
        player.handle_key(char_key('j'), &mut ctx);
        player.handle_key(char_key('j'), &mut ctx);
        player.handle_key(char_key('j'), &mut ctx);
        let action = player.handle_key(key(KeyCode::Enter), &mut ctx);
        assert_eq!(action, Action::info("Now playing: Props and Components"));
        assert_eq!(
            player
                .current_lesson(&ctx.catalog.curriculum)
                .map(|lesson| lesson.id),
            Some(RecordId(5))
        );
    }

    #[test]
    fn test_collapse_from_lesson_moves_cursor_to_chapter() {
        let mut ctx = sample_ctx();
        let mut player = screen(&ctx);
        player.handle_key(char_key('j'), &mut ctx);
        player.handle_key(char_key('h'), &mut ctx);
        assert!(!player.is_expanded(RecordId(1)));
        assert_eq!(player.cursor.id(), Some(CurriculumRow::Chapter(RecordId(1))));
    }

    #[test]
    fn test_playback_controls() {
        let mut ctx = sample_ctx();
        let mut player = screen(&ctx);
        assert!(!player.is_playing());
        player.handle_key(char_key(' '), &mut ctx);
        assert!(player.is_playing());

        let labels: Vec<&str> = (0..5)
            .map(|_| {
                player.handle_key(char_key('f'), &mut ctx);
                player.speed().label()
            })
            .collect();
        assert_eq!(labels, vec!["1.25x", "1.5x", "2x", "0.5x", "1x"]);
    }

    #[test]
    fn test_mark_complete_is_session_only() {
        let mut ctx = sample_ctx();
        let mut player = screen(&ctx);
        assert_eq!(player.progress(&ctx.catalog.curriculum), Some(25));

        player.handle_key(char_key('m'), &mut ctx);
        assert_eq!(player.progress(&ctx.catalog.curriculum), Some(33));
        assert!(ctx
            .catalog
            .curriculum
            .lessons()
            .all(|lesson| lesson.id != RecordId(4) || !lesson.completed));

        let again = player.handle_key(char_key('m'), &mut ctx);
        assert_eq!(again, Action::info("State Management with Hooks is already complete"));

        let fresh = screen(&ctx);
        assert_eq!(fresh.progress(&ctx.catalog.curriculum), Some(25));
    }

    #[test]
    fn test_continue_walks_course_order() {
        let mut ctx = sample_ctx();
        let mut player = screen(&ctx);
        player.handle_key(char_key('n'), &mut ctx);
        assert_eq!(player.current, Some(RecordId(5)));
        for _ in 0..7 {
            player.handle_key(char_key('n'), &mut ctx);
        }
        assert_eq!(player.current, Some(RecordId(12)));
        assert_eq!(
            player.handle_key(char_key('n'), &mut ctx),
            Action::info("End of course")
        );
    }

    #[test]
    fn test_render_marks_current_lesson() {
        let ctx = sample_ctx();
        let text = render_text(&screen(&ctx), &ctx, 140, 30);
        assert!(text.contains("25% complete"));
        assert!(text.contains("State Management with Hooks"));
        assert!(text.contains("●"));
        assert!(!text.contains("Context API"));
    }
}
