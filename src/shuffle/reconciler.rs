use std::fmt;

use crate::{
    account::Account,
    shuffle::BagError,
    spotify::{PlaybackService, ServiceError},
    types::{PlaylistId, TrackId},
};

/// What a reconcile pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The track was appended to the queue and is the new marker.
    Queued(TrackId),
    /// The previously queued track is still within the lookahead.
    Pending(TrackId),
    /// The playlist holds nothing but the track that is playing.
    NothingToQueue(PlaylistId),
}

#[derive(Debug)]
pub enum ReconcileError {
    /// A fetch (queue or playlist membership) failed.
    Service(ServiceError),
    /// The service returned no queue.
    QueueUnavailable,
    /// The active context is not a managed playlist although the gate let it
    /// through.
    PlaylistMismatch(Option<PlaylistId>),
    /// The playlist has no queueable tracks.
    EmptyPlaylist(PlaylistId),
    /// A draw hit an empty bag right after a refill.
    EmptyBag(PlaylistId),
    /// Appending the drawn track failed. The track is gone from the bag for
    /// this cycle and the marker is unchanged.
    Append { track: TrackId, source: ServiceError },
}

impl From<ServiceError> for ReconcileError {
    fn from(err: ServiceError) -> Self {
        ReconcileError::Service(err)
    }
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileError::Service(e) => write!(f, "{}", e),
            ReconcileError::QueueUnavailable => write!(f, "queue unavailable"),
            ReconcileError::PlaylistMismatch(Some(id)) => {
                write!(f, "playlist {} is not managed but passed the gate", id)
            }
            ReconcileError::PlaylistMismatch(None) => {
                write!(f, "no playlist context but the gate passed")
            }
            ReconcileError::EmptyPlaylist(id) => write!(f, "playlist {} has no tracks", id),
            ReconcileError::EmptyBag(id) => {
                write!(f, "shuffle bag for {} empty after refill", id)
            }
            ReconcileError::Append { track, source } => {
                write!(f, "failed to queue {}: {}", track, source)
            }
        }
    }
}

impl std::error::Error for ReconcileError {}

impl<S: PlaybackService> Account<S> {
    /// Queues the next track of the playing managed playlist if needed.
    ///
    /// Does nothing while the last queued track is among the first
    /// `lookahead` upcoming entries. Otherwise draws from the playlist's bag,
    /// skipping the playing track and refilling when the cycle is over, and
    /// appends the drawn track. The marker moves only once the append
    /// succeeded.
    pub async fn reconcile(&mut self, lookahead: usize) -> Result<Outcome, ReconcileError> {
        let upcoming = self
            .service
            .queue()
            .await?
            .ok_or(ReconcileError::QueueUnavailable)?;

        if let Some(marker) = &self.queued_track {
            if upcoming.iter().take(lookahead).any(|id| id == marker) {
                return Ok(Outcome::Pending(marker.clone()));
            }
        }

        let monitor = self.monitor();
        let current_track = monitor.current_track_id();
        let playlist_id = match monitor.current_playlist_id() {
            Some(id) if self.bags.contains_key(&id) => id,
            other => return Err(ReconcileError::PlaylistMismatch(other)),
        };

        let Some(track) = self.draw(&playlist_id, current_track.as_deref()).await? else {
            return Ok(Outcome::NothingToQueue(playlist_id));
        };

        if let Err(source) = self.service.add_to_queue(&track).await {
            return Err(ReconcileError::Append { track, source });
        }

        self.queued_track = Some(track.clone());
        Ok(Outcome::Queued(track))
    }

    /// Draws one track, refilling on an empty bag and once more when the
    /// excluded track was all that was left.
    async fn draw(
        &mut self,
        playlist_id: &PlaylistId,
        exclude: Option<&str>,
    ) -> Result<Option<TrackId>, ReconcileError> {
        if self.bags.get(playlist_id).is_none_or(|bag| bag.is_empty()) {
            self.refill_for_draw(playlist_id).await?;
        }

        match self.take(playlist_id, exclude) {
            Err(BagError::Exhausted) => {}
            Err(BagError::Empty) => return Err(ReconcileError::EmptyBag(playlist_id.clone())),
            Ok(track) => return Ok(Some(track)),
        }

        self.refill_for_draw(playlist_id).await?;
        match self.take(playlist_id, exclude) {
            Ok(track) => Ok(Some(track)),
            Err(BagError::Exhausted) => Ok(None),
            Err(BagError::Empty) => Err(ReconcileError::EmptyBag(playlist_id.clone())),
        }
    }

    async fn refill_for_draw(&mut self, playlist_id: &PlaylistId) -> Result<(), ReconcileError> {
        if self.refill(playlist_id).await? == 0 {
            return Err(ReconcileError::EmptyPlaylist(playlist_id.clone()));
        }
        Ok(())
    }

    fn take(&mut self, playlist_id: &str, exclude: Option<&str>) -> Result<TrackId, BagError> {
        self.bags
            .get_mut(playlist_id)
            .ok_or(BagError::Empty)?
            .take_next(exclude)
    }
}
