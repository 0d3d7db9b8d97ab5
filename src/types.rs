use std::{collections::BTreeSet, path::PathBuf};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A playable item as the Web API names it, e.g. `spotify:track:4uLU6hMCjMI75M1A2tKUQC`.
pub type TrackId = String;

/// The bare id of a playlist, e.g. `37i9dQZF1DXcBWIGoYBM5M`.
pub type PlaylistId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// State shared between the auth flow and the callback handler.
#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub client_id: String,
    pub client_secret: String,
    pub token: Option<Token>,
}

/// Credentials and managed playlists of one account.
///
/// Read from `credentials.json` in the account's directory; the alias is the
/// directory name and is not part of the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(rename = "id")]
    pub client_id: String,
    #[serde(rename = "secret")]
    pub client_secret: String,
    #[serde(rename = "playlist_ids")]
    pub managed_playlist_ids: BTreeSet<PlaylistId>,
    #[serde(skip)]
    pub alias: String,
    #[serde(skip)]
    pub token_path: PathBuf,
}

/// Response of `GET /me/player`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub shuffle_state: bool,
    #[serde(default)]
    pub context: Option<PlaybackContext>,
    #[serde(default)]
    pub item: Option<PlaybackItem>,
    #[serde(default)]
    pub device: Option<Device>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaybackContext {
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaybackItem {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of `GET /me/player/queue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueResponse {
    #[serde(default)]
    pub queue: Vec<PlaybackItem>,
}

/// One page of `GET /playlists/{id}/tracks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    #[serde(default)]
    pub is_local: bool,
    pub track: Option<PlaybackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub volume_percent: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferPlaybackRequest {
    pub device_ids: Vec<String>,
    pub play: bool,
}

#[derive(Tabled)]
pub struct AccountTableRow {
    pub alias: String,
    pub playlists: usize,
    pub tracks: String,
    pub playback: String,
}
