use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::{parse_command, Action, Command, Context, Module, NotifyLevel};
use crate::data::{CatalogError, CatalogSource};
use crate::modules::analytics::AnalyticsScreen;
use crate::modules::courses::CoursesScreen;
use crate::modules::export;
use crate::modules::overview::OverviewScreen;
use crate::modules::player::PlayerScreen;
use crate::modules::students::StudentsScreen;

/// How long a status message stays on the command line.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Pages in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Courses,
    Students,
    Analytics,
    Player,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Overview,
        Screen::Courses,
        Screen::Students,
        Screen::Analytics,
        Screen::Player,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Courses => "Courses",
            Screen::Students => "Students",
            Screen::Analytics => "Analytics",
            Screen::Player => "Course Player",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Screen::Overview => '1',
            Screen::Courses => '2',
            Screen::Students => '3',
            Screen::Analytics => '4',
            Screen::Player => '5',
        }
    }

    /// Screen for a `:` command or config value, case-insensitive.
    pub fn from_name(name: &str) -> Option<Screen> {
        match name.trim().to_lowercase().as_str() {
            "overview" | "home" | "dashboard" => Some(Screen::Overview),
            "courses" => Some(Screen::Courses),
            "students" => Some(Screen::Students),
            "analytics" | "stats" => Some(Screen::Analytics),
            "player" | "learn" | "learning" => Some(Screen::Player),
            _ => None,
        }
    }

    pub fn from_shortcut(key: char) -> Option<Screen> {
        Self::ALL.into_iter().find(|screen| screen.shortcut() == key)
    }

    pub fn next(self) -> Screen {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Screen {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the active screen's search box
    Search,
    Command,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    /// Query to restore when a search is cancelled
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

pub struct App {
    pub ctx: Context,
    pub screen: Screen,
    pub overview: OverviewScreen,
    pub courses: CoursesScreen,
    pub students: StudentsScreen,
    pub analytics: AnalyticsScreen,
    pub player: PlayerScreen,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    /// Copy to the system clipboard as well as the in-app one
    pub system_clipboard: bool,
    export_dir: PathBuf,
    source: Box<dyn CatalogSource>,
}

impl App {
    pub fn new(source: Box<dyn CatalogSource>, config: &Config) -> Result<Self, CatalogError> {
        let catalog = source.load()?;
        tracing::info!(source = %source.describe(), counts = %catalog.counts(), "catalog loaded");

        let ctx = Context::new(catalog, source.describe());
        let player = PlayerScreen::new(&ctx.catalog.curriculum);
        Ok(Self {
            screen: config.start_screen().unwrap_or(Screen::Overview),
            overview: OverviewScreen::new(),
            courses: CoursesScreen::new(config.course_view),
            students: StudentsScreen::new(),
            analytics: AnalyticsScreen::new(),
            player,
            ctx,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            help_open: false,
            should_quit: false,
            system_clipboard: true,
            export_dir: config.export_dir(),
            source,
        })
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn set_export_dir(&mut self, dir: impl Into<PathBuf>) {
        self.export_dir = dir.into();
    }

    pub fn module(&self, screen: Screen) -> &dyn Module {
        match screen {
            Screen::Overview => &self.overview,
            Screen::Courses => &self.courses,
            Screen::Students => &self.students,
            Screen::Analytics => &self.analytics,
            Screen::Player => &self.player,
        }
    }

    pub fn active_module(&self) -> &dyn Module {
        self.module(self.screen)
    }

    /// Split borrow of the active screen and the shared context.
    pub fn active_parts(&mut self) -> (&mut dyn Module, &mut Context) {
        self.parts(self.screen)
    }

    fn parts(&mut self, screen: Screen) -> (&mut dyn Module, &mut Context) {
        let module: &mut dyn Module = match screen {
            Screen::Overview => &mut self.overview,
            Screen::Courses => &mut self.courses,
            Screen::Students => &mut self.students,
            Screen::Analytics => &mut self.analytics,
            Screen::Player => &mut self.player,
        };
        (module, &mut self.ctx)
    }

    pub fn go(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = self.screen.title(), to = screen.title(), "navigate");
        }
        self.screen = screen;
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, NotifyLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    // Search box

    /// Start editing the active screen's query. Returns false when the
    /// screen has no search box.
    pub fn enter_search(&mut self) -> bool {
        let Some(query) = self
            .active_module()
            .filter_state()
            .map(|filter| filter.query.clone())
        else {
            self.set_status(
                format!("{} has no search", self.screen.title()),
                NotifyLevel::Warn,
            );
            return false;
        };
        self.command.input = query.clone();
        self.command.last = Some(query);
        self.input_mode = InputMode::Search;
        true
    }

    /// Push the search box contents into the active filter; results update
    /// while typing.
    pub fn update_search(&mut self) {
        let query = self.command.input.clone();
        self.set_query(query);
    }

    pub fn accept_search(&mut self) {
        self.command.last = None;
        self.command.input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_search(&mut self) {
        if let Some(previous) = self.command.last.take() {
            self.set_query(previous);
        }
        self.command.input.clear();
        self.input_mode = InputMode::Normal;
    }

    fn set_query(&mut self, query: String) {
        let (module, ctx) = self.active_parts();
        if let Some(filter) = module.filter_state_mut() {
            filter.set_query(query);
            module.on_filter_changed(ctx);
        }
    }

    // Command line

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        self.execute_command(parse_command(&input));
    }

    pub fn execute_command(&mut self, cmd: Command) {
        tracing::debug!(?cmd, "command");
        match cmd {
            Command::Go(screen) => self.go(screen),
            Command::Help => self.help_open = true,
            Command::Quit => self.should_quit = true,
            Command::Export => self.export(),
            Command::Reload => self.reload(),
            Command::Unknown(input) => {
                self.set_status(format!("Unknown command: {input}"), NotifyLevel::Warn)
            }
            other => {
                let (module, ctx) = self.active_parts();
                let action = module.handle_command(&other, ctx);
                self.apply_action(action);
            }
        }
    }

    // Actions

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.go(screen),
            Action::Copy(text) => self.copy(text),
            Action::Notify(text, level) => self.set_status(text, level),
            Action::Export => self.export(),
            Action::Reload => self.reload(),
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn copy(&mut self, text: String) {
        if self.system_clipboard {
            let copied = arboard::Clipboard::new().and_then(|mut board| board.set_text(&text));
            if let Err(err) = copied {
                tracing::warn!(error = %err, "clipboard unavailable");
                self.set_status("Clipboard not available", NotifyLevel::Error);
                return;
            }
        }
        let shown = crate::ui::widgets::truncate(&text, 32);
        self.ctx.set_clipboard(text);
        self.set_status(format!("Copied: {shown}"), NotifyLevel::Info);
    }

    /// Ask the source for a fresh catalog. On failure the current catalog
    /// stays in place.
    pub fn reload(&mut self) {
        match self.source.load() {
            Ok(catalog) => {
                tracing::info!(counts = %catalog.counts(), "catalog reloaded");
                self.ctx.catalog = catalog;
                self.ctx.source = self.source.describe();
                for screen in Screen::ALL {
                    let (module, ctx) = self.parts(screen);
                    module.on_filter_changed(ctx);
                }
                let counts = self.ctx.catalog.counts();
                self.set_status(format!("Reloaded: {counts}"), NotifyLevel::Info);
            }
            Err(err) => {
                tracing::warn!(error = ?err, "reload failed");
                let reason = std::error::Error::source(&err)
                    .map(|source| format!("{err}: {source}"))
                    .unwrap_or_else(|| err.to_string());
                self.set_status(reason, NotifyLevel::Error);
            }
        }
    }

    pub fn export(&mut self) {
        let action = export::export_current_view(self);
        self.apply_action(action);
    }
}
