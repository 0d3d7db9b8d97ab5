//! # Spotify Integration Module
//!
//! The boundary between the shuffle logic and the Spotify Web API.
//!
//! [`PlaybackService`] is the contract the rest of the crate consumes: the
//! account's playback snapshot, a playlist's full membership, the upcoming
//! queue, appending to the queue and the device calls used by the idle
//! takeover. [`SpotifyClient`] implements it over HTTP; tests implement it in
//! memory.
//!
//! ```text
//! Scheduler / Reconciler / Takeover
//!          ↓
//! PlaybackService (one instance per account)
//!          ↓
//! SpotifyClient ── TokenManager (refresh, persist)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me/player` - current playback, 204 when nothing is active
//! - `GET /me/player/queue` - upcoming queue
//! - `POST /me/player/queue` - append an item to the queue
//! - `GET /playlists/{id}/tracks` - playlist items, followed page by page
//! - `GET /me/player/devices` - available devices
//! - `PUT /me/player` - transfer playback
//! - `PUT /me/player/volume` - set volume
//!
//! Authorization lives in [`auth`]: the authorization-code flow with PKCE and a
//! temporary local callback server.

pub mod auth;
mod client;
mod player;
mod playlists;

use std::fmt;

pub use client::SpotifyClient;

use crate::types::{Device, PlaybackState, PlaylistId, TrackId};

/// Failure of a remote call.
#[derive(Debug)]
pub enum ServiceError {
    Http(reqwest::Error),
    Auth(String),
    Unexpected(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Http(err)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Http(e) => write!(f, "request failed: {}", e),
            ServiceError::Auth(e) => write!(f, "authorization failed: {}", e),
            ServiceError::Unexpected(e) => write!(f, "unexpected response: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Http(e) => Some(e),
            _ => None,
        }
    }
}

/// Remote playback operations for a single account.
///
/// Every call may fail; callers decide whether a failure abandons the current
/// cycle. Calls are awaited one at a time, so implementations need not be
/// `Send`.
#[allow(async_fn_in_trait)]
pub trait PlaybackService {
    /// Current playback, or `None` when nothing is active on the account.
    async fn current_playback(&mut self) -> Result<Option<PlaybackState>, ServiceError>;

    /// Every track of a playlist, in playlist order, across all pages.
    async fn playlist_tracks(&mut self, playlist_id: &str) -> Result<Vec<TrackId>, ServiceError>;

    /// Upcoming queue entries, or `None` when the service returned no queue.
    async fn queue(&mut self) -> Result<Option<Vec<TrackId>>, ServiceError>;

    async fn add_to_queue(&mut self, track_id: &str) -> Result<(), ServiceError>;

    async fn devices(&mut self) -> Result<Vec<Device>, ServiceError>;

    async fn transfer_playback(&mut self, device_id: &str, play: bool)
    -> Result<(), ServiceError>;

    async fn set_volume(&mut self, volume_percent: u8, device_id: &str)
    -> Result<(), ServiceError>;
}

/// Counts the tracks of the given playlists.
pub async fn count_tracks<'a, S: PlaybackService>(
    service: &mut S,
    playlist_ids: impl IntoIterator<Item = &'a PlaylistId>,
) -> Result<usize, ServiceError> {
    let mut total = 0;
    for playlist_id in playlist_ids {
        total += service.playlist_tracks(playlist_id).await?.len();
    }
    Ok(total)
}
