//! Configuration management for trueshuffle.
//!
//! Global settings come from environment variables, optionally loaded from a
//! `.env` file in the local data directory. Every setting has a default so an
//! empty environment is valid.
//!
//! Accounts live in a credentials directory with one sub-directory per account:
//!
//! ```text
//! credentials/
//!   zoey/
//!     credentials.json   {"id": "...", "secret": "...", "playlist_ids": ["..."]}
//!     token.json         written by `trueshuffle auth zoey`
//!   sam/
//!     credentials.json
//! ```

use dotenv;
use futures_lite::StreamExt;
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{types::AccountConfig, utils, warning};

pub const CREDENTIALS_FILE: &str = "credentials.json";
pub const TOKEN_FILE: &str = "token.json";

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 180;
pub const DEFAULT_LOOKAHEAD: usize = 5;
pub const DEFAULT_AUTOPLAY_INTERVAL_SECS: u64 = 900;
pub const DEFAULT_AUTOPLAY_TIMEOUT_SECS: u64 = 1800;

/// Loads environment variables from `<data_local_dir>/trueshuffle/.env`.
///
/// Creates the directory if needed. Returns an error string when the file is
/// missing or cannot be parsed; callers treat that as a warning since every
/// setting has a default.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(())
}

fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trueshuffle");
    path
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Address the local OAuth callback server binds to.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", "127.0.0.1:8888")
}

pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:8888/callback")
}

/// Scopes requested during authorization. Reading playback and the queue,
/// modifying the queue and reading private playlists.
pub fn spotify_scope() -> String {
    var_or(
        "SPOTIFY_API_AUTH_SCOPE",
        "streaming user-modify-playback-state user-read-playback-state user-read-currently-playing user-library-read playlist-read-private",
    )
}

pub fn spotify_apiauth_url() -> String {
    var_or(
        "SPOTIFY_API_AUTH_URL",
        "https://accounts.spotify.com/authorize",
    )
}

pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", "https://api.spotify.com/v1")
}

pub fn spotify_apitoken_url() -> String {
    var_or(
        "SPOTIFY_API_TOKEN_URL",
        "https://accounts.spotify.com/api/token",
    )
}

/// Directory holding one sub-directory per account.
pub fn credentials_dir() -> PathBuf {
    match env::var("TRUESHUFFLE_CREDENTIALS_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => data_dir().join("credentials"),
    }
}

pub fn poll_interval() -> Duration {
    let secs = env::var("TRUESHUFFLE_POLL_INTERVAL")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
    Duration::from_secs(secs)
}

/// Whether injection additionally requires shuffle to be enabled on the player.
pub fn require_shuffle() -> bool {
    env::var("TRUESHUFFLE_REQUIRE_SHUFFLE")
        .ok()
        .and_then(|v| utils::parse_bool(&v))
        .unwrap_or(false)
}

/// Number of upcoming queue entries searched for the queued-track marker.
pub fn lookahead() -> usize {
    env::var("TRUESHUFFLE_LOOKAHEAD")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_LOOKAHEAD)
}

/// Loads one account from its directory.
///
/// The alias is the directory name, the token cache sits next to the
/// credentials file and playlist references are normalized to bare ids.
pub async fn load_account(dir: &Path) -> Result<AccountConfig, String> {
    let path = dir.join(CREDENTIALS_FILE);
    let content = async_fs::read_to_string(&path)
        .await
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    parse_account(dir, &content)
}

/// Parses `credentials.json` content for the account stored in `dir`.
pub fn parse_account(dir: &Path, content: &str) -> Result<AccountConfig, String> {
    let mut account: AccountConfig =
        serde_json::from_str(content).map_err(|e| format!("{}: {}", dir.display(), e))?;

    account.alias = dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "default".to_string());
    account.token_path = dir.join(TOKEN_FILE);
    account.managed_playlist_ids = account
        .managed_playlist_ids
        .iter()
        .map(|reference| utils::normalize_playlist_id(reference))
        .filter(|id| !id.is_empty())
        .collect();

    if account.client_id.trim().is_empty() {
        return Err(format!("{}: client id is empty", dir.display()));
    }

    Ok(account)
}

/// Loads every account below the credentials directory, sorted by alias.
///
/// Broken accounts are reported and skipped. Returns an error when the
/// directory cannot be read or no account could be loaded.
pub async fn load_accounts() -> Result<Vec<AccountConfig>, String> {
    let root = credentials_dir();
    let mut entries = async_fs::read_dir(&root)
        .await
        .map_err(|e| format!("{}: {}", root.display(), e))?;

    let mut dirs: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next().await {
        let Ok(entry) = entry else {
            continue;
        };
        let path = entry.path();
        let is_dir = async_fs::metadata(&path)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if is_dir {
            dirs.push(path);
        }
    }
    dirs.sort();

    let mut accounts = Vec::new();
    for dir in dirs {
        match load_account(&dir).await {
            Ok(account) => accounts.push(account),
            Err(e) => warning!("Skipping account: {}", e),
        }
    }

    if accounts.is_empty() {
        return Err(format!("No accounts found in {}", root.display()));
    }

    Ok(accounts)
}

/// Loads a single account by alias.
pub async fn load_account_by_alias(alias: &str) -> Result<AccountConfig, String> {
    load_account(&credentials_dir().join(alias)).await
}
