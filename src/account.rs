use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    playback::PlaybackMonitor,
    shuffle::ShuffleBag,
    spotify::{PlaybackService, ServiceError},
    types::{AccountConfig, PlaybackState, PlaylistId, TrackId},
    warning,
};

/// One account and everything the daemon tracks for it.
///
/// Accounts share nothing: each owns its remote service, a shuffle bag per
/// managed playlist, the last playback snapshot, the queued-track marker and
/// its own random source.
pub struct Account<S> {
    pub(crate) config: AccountConfig,
    pub(crate) service: S,
    pub(crate) bags: HashMap<PlaylistId, ShuffleBag>,
    pub(crate) snapshot: Option<PlaybackState>,
    pub(crate) queued_track: Option<TrackId>,
    pub(crate) rng: StdRng,
}

impl<S: PlaybackService> Account<S> {
    pub fn new(config: AccountConfig, service: S) -> Self {
        Self::with_rng(config, service, StdRng::from_os_rng())
    }

    /// Like [`Account::new`] with an explicit random source.
    pub fn with_rng(config: AccountConfig, service: S, rng: StdRng) -> Self {
        let bags = config
            .managed_playlist_ids
            .iter()
            .map(|id| (id.clone(), ShuffleBag::new()))
            .collect();

        Self {
            config,
            service,
            bags,
            snapshot: None,
            queued_track: None,
            rng,
        }
    }

    pub fn alias(&self) -> &str {
        &self.config.alias
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    pub fn snapshot(&self) -> Option<&PlaybackState> {
        self.snapshot.as_ref()
    }

    pub fn queued_track(&self) -> Option<&str> {
        self.queued_track.as_deref()
    }

    pub fn bag(&self, playlist_id: &str) -> Option<&ShuffleBag> {
        self.bags.get(playlist_id)
    }

    /// Mutable access to a managed playlist's bag together with the account's
    /// random source. `None` for playlists that are not managed.
    pub fn bag_mut(&mut self, playlist_id: &str) -> Option<(&mut ShuffleBag, &mut StdRng)> {
        let bag = self.bags.get_mut(playlist_id)?;
        Some((bag, &mut self.rng))
    }

    pub fn monitor(&self) -> PlaybackMonitor<'_> {
        PlaybackMonitor::new(self.snapshot.as_ref())
    }

    /// Fetches the playback snapshot.
    ///
    /// On success the snapshot is replaced wholesale, `None` included. On
    /// failure the previous snapshot stays in place.
    pub async fn refresh_playback(&mut self) -> Result<(), ServiceError> {
        self.snapshot = self.service.current_playback().await?;
        Ok(())
    }

    /// Refills a managed playlist's bag from its current membership.
    ///
    /// Returns the number of tracks in the new cycle.
    pub async fn refill(&mut self, playlist_id: &str) -> Result<usize, ServiceError> {
        let tracks = self.service.playlist_tracks(playlist_id).await?;
        let Some(bag) = self.bags.get_mut(playlist_id) else {
            return Ok(0);
        };

        bag.refill(tracks, &mut self.rng);
        Ok(bag.len())
    }

    /// Fills every managed playlist's bag up front.
    ///
    /// A playlist that fails to load is reported and left empty; it is filled
    /// lazily once it is played. Returns the total number of tracks loaded.
    pub async fn prime(&mut self) -> usize {
        let playlist_ids: Vec<PlaylistId> = self.bags.keys().cloned().collect();
        let mut total = 0;

        for playlist_id in playlist_ids {
            match self.refill(&playlist_id).await {
                Ok(count) => total += count,
                Err(e) => warning!(
                    "Failed to load playlist {} for {}: {}",
                    playlist_id,
                    self.alias(),
                    e
                ),
            }
        }

        total
    }
}
