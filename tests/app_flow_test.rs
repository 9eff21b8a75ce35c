//! Drive the app through key events, the way the terminal loop does

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use campus::app::{App, InputMode, Screen};
use campus::config::Config;
use campus::core::NotifyLevel;
use campus::data::SampleCatalog;
use campus::{input, ui};

fn app() -> App {
    let mut app = App::new(Box::new(SampleCatalog), &Config::default()).expect("samples");
    app.system_clipboard = false;
    app
}

fn press(app: &mut App, code: KeyCode) {
    input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn screen_text(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_screen_switching() {
    let mut app = app();
    assert_eq!(app.screen, Screen::Overview);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.screen, Screen::Courses);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.screen, Screen::Students);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.screen, Screen::Courses);

    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "stats");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Analytics);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_live_search_and_cancel() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.input_mode, InputMode::Search);
    type_text(&mut app, "pyth");
    assert_eq!(app.courses.visible(&app.ctx).len(), 1);

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.courses.visible(&app.ctx).len(), 4);

    type_text(&mut app, "zzz");
    assert!(app.courses.visible(&app.ctx).is_empty());
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.courses.visible(&app.ctx).len(), 4);
}

#[test]
fn test_accepted_search_sticks() {
    let mut app = app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "example.com");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.students.visible(&app.ctx).len(), 3);

    // a search that misses everything stays applied after Enter
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('!'));
    press(&mut app, KeyCode::Enter);
    assert!(app.students.visible(&app.ctx).is_empty());
}

#[test]
fn test_status_cycle_on_courses() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.courses.visible(&app.ctx).len(), 3);
    assert_eq!(
        app.status_text(),
        Some(("Status: published", NotifyLevel::Info))
    );

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.courses.visible(&app.ctx).len(), 1);

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.courses.visible(&app.ctx).len(), 4);
}

#[test]
fn test_search_on_overview_warns() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(
        app.status_text(),
        Some(("Overview has no search", NotifyLevel::Warn))
    );
}

#[test]
fn test_help_swallows_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.help_open);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.screen, Screen::Overview);

    press(&mut app, KeyCode::Esc);
    assert!(!app.help_open);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = app();
    input::handle_key(
        &mut app,
        KeyEvent::new_with_kind(KeyCode::Char('2'), KeyModifiers::NONE, KeyEventKind::Release),
    );
    assert_eq!(app.screen, Screen::Overview);
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = app();
    input::handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit);
}

#[test]
fn test_copy_fills_in_app_clipboard() {
    let mut app = app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('y'));
    assert!(app
        .ctx
        .clipboard
        .as_deref()
        .is_some_and(|text| text.contains('@')));
    assert!(app
        .status_text()
        .is_some_and(|(text, _)| text.starts_with("Copied: ")));
}

#[test]
fn test_analytics_refresh() {
    let mut app = app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('r'));
    assert!(app
        .status_text()
        .is_some_and(|(text, level)| text.starts_with("Reloaded: ") && level == NotifyLevel::Info));
}

#[test]
fn test_player_keys_reach_the_screen() {
    let mut app = app();
    press(&mut app, KeyCode::Char('5'));
    assert!(!app.player.is_playing());
    press(&mut app, KeyCode::Char(' '));
    assert!(app.player.is_playing());
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.player.speed().label(), "1.25x");
}

#[test]
fn test_draw_shows_frame() {
    let mut app = app();
    let text = screen_text(&app, 140, 40);
    assert!(text.contains("Campus"));
    assert!(text.contains("Course Player"));
    assert!(text.contains("Recent Courses"));

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "cat");
    let text = screen_text(&app, 140, 40);
    assert!(text.contains("category <value|all>"));
}

#[test]
fn test_draw_help_popup() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    let text = screen_text(&app, 140, 50);
    assert!(text.contains("Help"));
    assert!(text.contains("Command line"));
}
