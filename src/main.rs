//! Vocab Cards - terminal vocabulary flashcard viewer
//!
//! Loads `TERM-MEANING` pairs from a word list, shuffles them and lets you
//! page through the cards.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use vocab_cards::loader;
use vocab_cards::session::Session;
use vocab_cards::ui::{App, Theme, ThemeName};

// ══════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ══════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "vocab")]
#[command(author, version, about = "Terminal vocabulary flashcard viewer", long_about = None)]
struct Args {
    /// Word list with one TERM-MEANING entry per line
    #[arg(short, long, default_value = loader::DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// Color theme
    #[arg(short, long, value_enum, default_value_t)]
    theme: ThemeName,

    /// Log file (defaults to the local data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ══════════════════════════════════════════════════════════════════════════
// Main Entry Point
// ══════════════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.unwrap_or_else(default_log_path));
    log::info!(
        "Starting with word list {} and theme {:?}",
        args.words.display(),
        args.theme
    );

    // Non-critical randomness: a clock seed gives a new order every run.
    let mut rng = StdRng::seed_from_u64(clock_seed());

    // Load before touching the terminal so a failure prints to a normal screen.
    let deck = loader::load_deck(&args.words, &mut rng).map_err(|err| {
        log::error!("{}", err);
        err
    })?;

    let session = Session::new(deck, rng);
    let app = App::new(session, Theme::new(args.theme));

    run_tui(app)
}

fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-cards")
        .join("vocab-cards.log")
}

/// Log to a file since stdout belongs to the TUI. Logging is skipped if the
/// file cannot be created.
fn init_logging(path: PathBuf) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

fn clock_seed() -> u64 {
    chrono::Local::now()
        .timestamp_nanos_opt()
        .unwrap_or_default() as u64
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        log::error!("Event loop failed: {:#}", err);
        return Err(err);
    }

    log::info!("Quit at card {} of {}", app.session.cursor(), app.session.total_words());
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}
