use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod theme;
pub mod widgets;

use crate::app::{App, InputMode, Screen};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_sidebar(f, areas.sidebar, app);
    app.active_module().render(f, areas.main, &app.ctx);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Campus",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Screen", theme::label()),
        Span::raw(format!(" {}", app.screen.title())),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let right_line = Line::from(vec![
        Span::styled("Source ", theme::label()),
        Span::raw(format!("{}  ", app.ctx.source)),
        Span::styled("Data ", theme::label()),
        Span::raw(app.ctx.catalog.counts()),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = Screen::ALL
        .iter()
        .map(|screen| {
            let is_active = *screen == app.screen;
            let style = if is_active {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", screen.shortcut()), theme::label()),
                Span::raw(screen.title()),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("LMS")
                .border_style(theme::border(true)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("-> ");

    let mut state = ListState::default();
    state.select(Screen::ALL.iter().position(|screen| *screen == app.screen));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Screen ", theme::label()),
        Span::raw(format!("{}  ", app.screen.title())),
    ];
    if let Some(filter) = app.active_module().filter_state() {
        spans.push(Span::styled("Filter ", theme::label()));
        let describe = filter.describe();
        spans.push(Span::raw(if describe.is_empty() {
            "none".to_string()
        } else {
            describe
        }));
    }
    if let Some(clip) = app.ctx.clipboard.as_deref() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Copied ", theme::label()));
        spans.push(Span::raw(widgets::truncate(clip, 24)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("overview", "Go to overview"),
        ("courses", "Go to courses"),
        ("students", "Go to students"),
        ("analytics", "Go to analytics"),
        ("player", "Go to course player"),
        ("search", "search <text>"),
        ("status", "status <value|all>"),
        ("category", "category <value|all>"),
        ("group", "group <value|all>"),
        ("course", "course <value|all>"),
        ("type", "type <video|quiz|assignment|text|all>"),
        ("clear", "Clear search and selects"),
        ("view", "view grid|list"),
        ("export", "Export visible rows"),
        ("reload", "Reload catalog"),
        ("help", "Show help"),
        ("quit", "Quit"),
    ];

    commands
        .iter()
        .find(|(cmd, _)| cmd.starts_with(input.as_str()))
        .map(|(_, desc)| *desc)
}

fn action_hints(app: &App) -> Line<'static> {
    let keys: &[(&str, &str)] = match app.screen {
        Screen::Overview => &[("j/k", "move"), ("Enter", "courses"), ("p", "player")],
        Screen::Courses => &[("/", "search"), ("s", "status"), ("c", "category"), ("v", "view")],
        Screen::Students => &[("/", "search"), ("s", "status")],
        Screen::Analytics => &[("c", "course"), ("o", "group"), ("r", "refresh")],
        Screen::Player => &[
            ("/", "search"),
            ("t", "type"),
            ("Enter", "open"),
            ("space", "play"),
        ],
    };
    let mut spans = Vec::new();
    for (key, label) in keys.iter().chain([("e", "export"), ("?", "help")].iter()) {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::LightCyan)));
        spans.push(Span::styled(format!(" {label}  "), theme::label()));
    }
    Line::from(spans)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or("screen name | search <text> | <dimension> <value|all>");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(format!("  {}", hint_text), theme::label()),
            ])
        }
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::LightCyan)),
            Span::raw(app.command.input.clone()),
            Span::styled("  (Enter=keep Esc=cancel)", theme::label()),
        ]),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                Line::from(vec![
                    Span::styled("msg: ", theme::label()),
                    Span::styled(text.to_string(), theme::notify(level)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = layout::centered_rect(72, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-5        Jump to screen"),
        Line::from("  Tab        Next screen (Shift-Tab previous)"),
        Line::from("  j / k      Move selection"),
        Line::from("  g / G      Top / bottom"),
        Line::from("  Esc        Close popup / cancel input"),
        Line::from(""),
        Line::from("Filtering"),
        Line::from("  /          Search the active screen"),
        Line::from("  s          Cycle status (Courses, Students)"),
        Line::from("  c          Cycle category (Courses) / course (Analytics)"),
        Line::from("  o          Cycle group (Analytics)"),
        Line::from("  t          Cycle lesson type (Player)"),
        Line::from("  x          Clear search and selects"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  v          Grid / list view (Courses)"),
        Line::from("  Enter      Expand chapter / open lesson (Player)"),
        Line::from("  h / l      Collapse / expand chapter (Player)"),
        Line::from("  space      Play / pause   f  Speed   m  Mark complete   n  Continue"),
        Line::from("  y          Copy selected title"),
        Line::from("  e          Export visible rows"),
        Line::from("  r          Refresh catalog (Analytics), :reload anywhere"),
        Line::from("  :          Command line"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("Command examples:"),
        Line::from("  :status published   :category all   :group Group A"),
        Line::from("  :search python      :view list      :stats"),
        Line::from(""),
        Line::from(format!("Active screen: {}", app.screen.title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}
