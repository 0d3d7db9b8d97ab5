use std::time::Duration;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use trueshuffle::{cli, config, scheduler::PollOptions, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Poll all accounts and queue tracks from managed playlists
    Run(RunOptions),

    /// Authorize an account with the Spotify API
    Auth(AuthOptions),

    /// Show accounts, playlist sizes and current playback
    Status,

    /// Take over playback on a device after a period of silence
    Autoplay(AutoplayOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RunOptions {
    /// Seconds between polls (default: TRUESHUFFLE_POLL_INTERVAL or 180)
    #[clap(long)]
    pub interval: Option<u64>,

    /// Only queue tracks while shuffle is enabled on the player
    #[clap(long)]
    pub require_shuffle: bool,

    /// Upcoming queue entries searched for the last queued track
    #[clap(long)]
    pub lookahead: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Account alias (directory name below the credentials directory)
    pub alias: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AutoplayOptions {
    /// Account alias
    pub alias: String,

    /// Name of the device to take over, matched case-insensitively
    #[clap(long)]
    pub device: String,

    /// Seconds between checks
    #[clap(long, default_value_t = config::DEFAULT_AUTOPLAY_INTERVAL_SECS)]
    pub interval: u64,

    /// Seconds of silence before taking over
    #[clap(long, default_value_t = config::DEFAULT_AUTOPLAY_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Volume set on the device before transferring playback
    #[clap(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub volume: u8,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("No environment file loaded, using defaults. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Run(opt) => {
            let mut options = PollOptions::from_env();
            if let Some(interval) = opt.interval {
                options.interval = Duration::from_secs(interval);
            }
            if let Some(lookahead) = opt.lookahead {
                options.lookahead = lookahead.max(1);
            }
            options.require_shuffle |= opt.require_shuffle;
            cli::run(options).await
        }
        Command::Auth(opt) => cli::auth(&opt.alias).await,
        Command::Status => cli::status().await,
        Command::Autoplay(opt) => {
            cli::autoplay(&opt.alias, opt.device, opt.interval, opt.timeout, opt.volume).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
