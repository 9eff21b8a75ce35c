//! Command parser for the : command system

use crate::app::Screen;
use crate::config::CourseView;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Go(Screen),

    // Filtering on the active screen
    Search(String),
    /// Narrow `dimension` to a value; `None` means all.
    Select {
        dimension: String,
        value: Option<String>,
    },
    Clear,
    View(CourseView),

    // Data
    Export,
    Reload,

    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Dimension names that can be narrowed from the command line.
pub const DIMENSIONS: [&str; 5] = ["status", "category", "group", "course", "type"];

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if let Some(screen) = Screen::from_name(&cmd) {
        return Command::Go(screen);
    }

    match cmd.as_str() {
        "search" | "find" | "s" => Command::Search(args.unwrap_or_default()),
        dimension if DIMENSIONS.iter().any(|known| *known == dimension) => match args {
            Some(value) => Command::Select {
                dimension: dimension.to_string(),
                value: (!value.eq_ignore_ascii_case("all")).then_some(value),
            },
            None => Command::Unknown(input.to_string()),
        },
        "clear" | "reset" => Command::Clear,
        "view" => match args.as_deref().map(str::to_lowercase).as_deref() {
            Some("grid") => Command::View(CourseView::Grid),
            Some("list") => Command::View(CourseView::List),
            _ => Command::Unknown(input.to_string()),
        },
        "export" | "exp" => Command::Export,
        "reload" | "refresh" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}
