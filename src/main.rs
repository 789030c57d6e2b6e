use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use minimax_connect_four::config::{AppConfig, Difficulty, FirstMover};
use minimax_connect_four::game::Game;
use minimax_connect_four::ui::{text, App};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four against a minimax AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<FirstMover>,

    /// Named search depth: easy (2), medium (4) or hard (6)
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Explicit search depth, overriding the difficulty
    #[arg(long)]
    depth: Option<u32>,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Line-based prompts instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.game.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.game.cols = cols;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = Some(depth);
    }

    if cli.plain {
        let from_file = cli.config.exists();
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        let (first, difficulty) =
            text::preset_answers(&config, from_file, cli.first, cli.difficulty);
        let (first, difficulty) = text::prompt_setup(first, difficulty, &mut input, &mut output)?;
        config.game.first = first;
        config.search.difficulty = difficulty;
        config.validate().context("validating configuration")?;

        let mut game = Game::from_config(&config);
        text::run(&mut game, &mut input, &mut output).context("playing in plain mode")?;
        return Ok(());
    }

    if let Some(first) = cli.first {
        config.game.first = first;
    }
    if let Some(difficulty) = cli.difficulty {
        config.search.difficulty = difficulty;
    }
    config.validate().context("validating configuration")?;

    let label = match config.search.depth {
        Some(_) => "Custom",
        None => config.search.difficulty.name(),
    };
    let game = Game::from_config(&config);
    run_tui(App::new(game, label)).context("running terminal UI")
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
