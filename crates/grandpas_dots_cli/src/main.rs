//! Grandpa's Dots - terminal game.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use grandpas_dots_cli::{Cli, Command, GameConfig, Repl, SettingsArgs};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { settings, json } => run_play(settings, json),
        Command::Config { settings } => run_config(settings),
    }
}

fn load_config(settings: &SettingsArgs) -> Result<GameConfig> {
    let path = GameConfig::locate(settings.config.clone());
    Ok(GameConfig::resolve(path.as_deref(), settings.overrides())?)
}

fn init_tracing(config: &GameConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play an interactive game on stdin and stdout
#[instrument(skip(settings))]
fn run_play(settings: SettingsArgs, json: bool) -> Result<()> {
    let config = load_config(&settings)?;
    init_tracing(&config);
    info!(
        board_size = config.board_size(),
        players = config.players(),
        "Starting Grandpa's Dots"
    );

    let mut repl = Repl::new(config, json)?;
    let stdin = std::io::stdin();
    repl.run(stdin.lock(), std::io::stdout())
}

/// Print the effective configuration
fn run_config(settings: SettingsArgs) -> Result<()> {
    let config = load_config(&settings)?;
    init_tracing(&config);
    print!("{}", config.to_toml()?);
    Ok(())
}
