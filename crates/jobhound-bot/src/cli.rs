//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Telegram job-search bot for HH.ru.
#[derive(Debug, Parser)]
#[command(name = "jobhound", version, about)]
pub struct Cli {
    /// Telegram bot token (from @BotFather).
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Data directory holding config.toml (default: ~/.jobhound).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
