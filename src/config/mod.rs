use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::Screen;

/// How the course catalog lays out its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseView {
    #[default]
    Grid,
    List,
}

impl CourseView {
    pub fn toggled(self) -> Self {
        match self {
            CourseView::Grid => CourseView::List,
            CourseView::List => CourseView::Grid,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CourseView::Grid => "grid",
            CourseView::List => "list",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// JSON catalog to load instead of the built-in samples.
    #[serde(default)]
    pub catalog: Option<String>,

    #[serde(default)]
    pub start_screen: Option<String>,

    #[serde(default)]
    pub course_view: CourseView,

    #[serde(default)]
    pub tick_ms: Option<u64>,

    #[serde(default)]
    pub export_dir: Option<String>,

    /// `tracing` filter directive, e.g. "campus=debug".
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn start_screen(&self) -> Option<Screen> {
        self.start_screen.as_deref().and_then(Screen::from_name)
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_deref().and_then(expand_path)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .as_deref()
            .and_then(expand_path)
            .or_else(|| data_dir().map(|dir| dir.join("exports")))
            .unwrap_or_else(|| PathBuf::from(".campus").join("exports"))
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms.unwrap_or(200).clamp(16, 2_000)
    }
}

/// Load the config file, falling back to defaults when it is missing or
/// malformed.
pub fn load(path_override: Option<&Path>) -> Config {
    let Some(path) = path_override.map(Path::to_path_buf).or_else(config_path) else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    match Config::from_toml(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config");
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CAMPUS_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("campus").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("campus").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "campus", "campus")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("campus"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("campus"));
    }
    directories::ProjectDirs::from("io", "campus", "campus")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("campus.log"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    let mut buf = PathBuf::from(trimmed);
    if buf.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            buf = cwd.join(buf);
        }
    }
    Some(buf)
}
