//! Small reusable widgets

pub mod sparkline;

pub use sparkline::sparkline_text;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::theme;
use crate::domain::StatCard;

/// Text progress bar such as `██████░░░░ 60%`.
pub fn gauge_text(percent: u32, width: usize) -> String {
    let percent = percent.min(100);
    let filled = (percent as usize * width + 50) / 100;
    format!(
        "{}{} {percent:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

pub fn badge(text: &str, style: Style) -> Span<'static> {
    Span::styled(format!("[{text}]"), style)
}

/// Cut `value` to `max` characters, ending with `…` when shortened.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    value.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
}

/// Row of equally wide stat cards.
pub fn stat_cards(f: &mut Frame, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }
    let share = 100 / cards.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(share); cards.len()])
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let mut value = vec![Span::styled(card.value.clone(), theme::title())];
        if !card.change.is_empty() {
            value.push(Span::raw("  "));
            value.push(Span::styled(card.change.clone(), theme::change(&card.change)));
        }
        let paragraph = Paragraph::new(Line::from(value))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(card.title.clone())
                    .border_style(theme::border(false)),
            )
            .alignment(Alignment::Left);
        f.render_widget(paragraph, *chunk);
    }
}
