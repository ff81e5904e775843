//! Command-line interface for grandpas_dots.

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use grandpas_dots::RankPolicy;
use std::path::PathBuf;

/// Grandpa's Dots - dots and boxes for 2 to 6 players in the terminal
#[derive(Parser, Debug)]
#[command(name = "grandpas_dots")]
#[command(about = "Dots and boxes for 2 to 6 players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin and stdout
    Play {
        /// Game settings
        #[command(flatten)]
        settings: SettingsArgs,

        /// Print a JSON snapshot of the session after every command
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Game settings
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Settings shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length in boxes
    #[arg(short, long)]
    pub board_size: Option<usize>,

    /// Number of players
    #[arg(short, long)]
    pub players: Option<usize>,

    /// Tie ranking: positional or shared
    #[arg(short, long)]
    pub rank_policy: Option<RankPolicy>,
}

impl SettingsArgs {
    /// Values given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            board_size: self.board_size,
            players: self.players,
            rank_policy: self.rank_policy,
        }
    }
}
