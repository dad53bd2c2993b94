mod config;
mod error;
mod models;
mod terminal;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::event;
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::config::{Config, default_config_path, default_log_path, load_config, to_toml};
use crate::error::Result;
use crate::terminal::TerminalSession;
use crate::ui::{App, handle_event, render};

#[derive(Parser)]
#[command(name = "tug-of-war", about = "Two sides, one rope. Pull with the arrow keys.")]
struct Cli {
    /// Config file (defaults to ~/.config/tug-of-war/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (overrides the config)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective config and exit
    #[arg(long)]
    print_config: bool,
}

/// 日志写入文件，界面运行时不能写到终端
fn init_logging(config: &Config, cli_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match cli_path.or_else(|| config.log.file.clone()) {
        Some(path) => path,
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_config(&config_path)?;

    if cli.print_config {
        print!("{}", to_toml(&config)?);
        return Ok(());
    }

    let log_path = init_logging(&config, cli.log_file)?;
    let span = tracing::info_span!("session", id = %Uuid::new_v4());
    let _entered = span.enter();
    info!(config = %config_path.display(), log = %log_path.display(), "tug of war starting");

    let mut app = App::new(config);

    let result = {
        let mut session = TerminalSession::enter()?;
        run_app(session.terminal(), &mut app)
    };

    info!(
        rounds = app.game.rounds_played(),
        left = app.game.left_score(),
        right = app.game.right_score(),
        "tug of war exiting"
    );
    println!(
        "{} {} : {} {}",
        app.config.left_team,
        app.game.left_score(),
        app.game.right_score(),
        app.config.right_team
    );

    result?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if handle_event(app, event::read()?)? {
            break;
        }
    }
    Ok(())
}
