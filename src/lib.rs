//! True Shuffle for Spotify
//!
//! This library keeps a repeat-free shuffle going on one or more Spotify
//! accounts. It polls each account's playback state and, whenever a managed
//! playlist is playing, appends a track drawn from that playlist's shuffle bag
//! to the playback queue. Every track of the playlist is queued once before
//! any track is queued again.
//!
//! # Modules
//!
//! - `account` - Per-account state: configuration, shuffle bags, snapshot, marker
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `autoplay` - Idle takeover of a configured playback device
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token persistence and refresh
//! - `playback` - Read-only predicates over the playback snapshot
//! - `scheduler` - The multi-account polling loop
//! - `server` - Local HTTP server for OAuth callbacks
//! - `shuffle` - Shuffle bag and the queue reconciler
//! - `spotify` - Spotify Web API client and the service contract
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod account;
pub mod api;
pub mod autoplay;
pub mod cli;
pub mod config;
pub mod management;
pub mod playback;
pub mod scheduler;
pub mod server;
pub mod shuffle;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross await points in the CLI plumbing.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Playlist being played for {}, checking queue...", alias);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added to queue for {}", alias);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable start-up failures. Nothing reachable from the
/// polling loop may use it: a failing account or cycle must never stop the
/// daemon.
///
/// # Example
///
/// ```
/// error!("No accounts found in {}", dir.display());
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures, for example a remote call that failed for
/// one account during one polling cycle.
///
/// # Example
///
/// ```
/// warning!("Failed to fetch playback for {}: {}", alias, e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
