#![allow(dead_code)]

use std::{
    collections::{BTreeSet, HashMap},
    path::PathBuf,
};

use rand::{SeedableRng, rngs::StdRng};
use trueshuffle::{
    account::Account,
    spotify::{PlaybackService, ServiceError},
    types::{AccountConfig, Device, PlaybackContext, PlaybackItem, PlaybackState, TrackId},
};

/// In-memory playback service with scripted answers and recorded calls.
#[derive(Debug, Default)]
pub struct FakeService {
    pub playback: Option<PlaybackState>,
    pub fail_playback: bool,
    pub queue: Option<Vec<TrackId>>,
    pub fail_queue: bool,
    pub playlists: HashMap<String, Vec<TrackId>>,
    pub fail_playlists: bool,
    pub fail_append: bool,
    pub devices: Vec<Device>,
    pub appended: Vec<TrackId>,
    pub playlist_fetches: usize,
    pub volumes: Vec<(u8, String)>,
    pub transfers: Vec<(String, bool)>,
}

fn scripted_failure() -> ServiceError {
    ServiceError::Unexpected("scripted failure".to_string())
}

impl PlaybackService for FakeService {
    async fn current_playback(&mut self) -> Result<Option<PlaybackState>, ServiceError> {
        if self.fail_playback {
            return Err(scripted_failure());
        }
        Ok(self.playback.clone())
    }

    async fn playlist_tracks(&mut self, playlist_id: &str) -> Result<Vec<TrackId>, ServiceError> {
        self.playlist_fetches += 1;
        if self.fail_playlists {
            return Err(scripted_failure());
        }
        Ok(self.playlists.get(playlist_id).cloned().unwrap_or_default())
    }

    async fn queue(&mut self) -> Result<Option<Vec<TrackId>>, ServiceError> {
        if self.fail_queue {
            return Err(scripted_failure());
        }
        Ok(self.queue.clone())
    }

    async fn add_to_queue(&mut self, track_id: &str) -> Result<(), ServiceError> {
        if self.fail_append {
            return Err(scripted_failure());
        }
        self.appended.push(track_id.to_string());
        Ok(())
    }

    async fn devices(&mut self) -> Result<Vec<Device>, ServiceError> {
        Ok(self.devices.clone())
    }

    async fn transfer_playback(&mut self, device_id: &str, play: bool) -> Result<(), ServiceError> {
        self.transfers.push((device_id.to_string(), play));
        Ok(())
    }

    async fn set_volume(&mut self, volume_percent: u8, device_id: &str) -> Result<(), ServiceError> {
        self.volumes.push((volume_percent, device_id.to_string()));
        Ok(())
    }
}

pub fn ids(items: &[&str]) -> Vec<TrackId> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Playback of `track` from playlist `playlist_id`, playing with shuffle on.
pub fn playing(playlist_id: &str, track: &str) -> PlaybackState {
    PlaybackState {
        is_playing: true,
        shuffle_state: true,
        context: Some(PlaybackContext {
            uri: Some(format!("spotify:playlist:{}", playlist_id)),
        }),
        item: Some(PlaybackItem {
            uri: Some(track.to_string()),
            name: Some("Current".to_string()),
        }),
        device: None,
    }
}

pub fn account_config(alias: &str, playlists: &[&str]) -> AccountConfig {
    AccountConfig {
        client_id: format!("{}-client", alias),
        client_secret: format!("{}-secret", alias),
        managed_playlist_ids: playlists.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        alias: alias.to_string(),
        token_path: PathBuf::from(format!("/tmp/{}/token.json", alias)),
    }
}

pub fn account(alias: &str, playlists: &[&str], service: FakeService) -> Account<FakeService> {
    Account::with_rng(
        account_config(alias, playlists),
        service,
        StdRng::seed_from_u64(7),
    )
}
