use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use campus::app::{App, Screen};
use campus::{config, data, input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "campus",
    version,
    about = "Campus: a terminal dashboard for courses, students and learning analytics"
)]
struct Args {
    /// JSON catalog to load instead of the built-in sample data
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Initial screen (overview, courses, students, analytics, player)
    #[arg(long)]
    screen: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load(args.config.as_deref());
    if let Err(err) = logging::init(config.log_filter.as_deref()) {
        eprintln!("logging disabled: {err:#}");
    }

    let source = data::source_for(args.catalog.clone().or_else(|| config.catalog_path()));
    let describe = source.describe();
    let mut app = App::new(source, &config)
        .with_context(|| format!("could not start with {describe}"))?;
    if let Some(name) = args.screen.as_deref() {
        let screen = Screen::from_name(name)
            .with_context(|| format!("unknown screen: {name}"))?;
        app.go(screen);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, Duration::from_millis(config.tick_ms()));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "terminal loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            tracing::info!("quit");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(&mut app, key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
