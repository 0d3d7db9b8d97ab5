use std::collections::BTreeSet;

use crate::{
    types::{PlaybackState, PlaylistId, TrackId},
    utils,
};

/// Read-only view over the last playback snapshot.
///
/// Remote playback state is often partial; every predicate answers `false` or
/// `None` instead of failing when a piece is missing.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackMonitor<'a> {
    snapshot: Option<&'a PlaybackState>,
}

impl<'a> PlaybackMonitor<'a> {
    pub fn new(snapshot: Option<&'a PlaybackState>) -> Self {
        Self { snapshot }
    }

    pub fn is_playing(&self) -> bool {
        self.snapshot.is_some_and(|s| s.is_playing)
    }

    /// The playlist the current context refers to, if it is a playlist.
    pub fn current_playlist_id(&self) -> Option<PlaylistId> {
        let uri = self.snapshot?.context.as_ref()?.uri.as_deref()?;
        utils::playlist_id_from_uri(uri)
    }

    pub fn is_managed_playlist(&self, managed_ids: &BTreeSet<PlaylistId>) -> bool {
        self.current_playlist_id()
            .is_some_and(|id| managed_ids.contains(&id))
    }

    pub fn is_shuffle_enabled(&self) -> bool {
        self.snapshot.is_some_and(|s| s.shuffle_state)
    }

    pub fn current_track_id(&self) -> Option<TrackId> {
        self.snapshot?.item.as_ref()?.uri.clone()
    }

    /// Short human-readable description for status output.
    pub fn describe(&self) -> String {
        match self.snapshot {
            None => "idle".to_string(),
            Some(s) => {
                let state = if s.is_playing { "playing" } else { "paused" };
                let track = s
                    .item
                    .as_ref()
                    .and_then(|item| item.name.clone())
                    .unwrap_or_else(|| "unknown track".to_string());
                match self.current_playlist_id() {
                    Some(id) => format!("{} {} (playlist {})", state, track, id),
                    None => format!("{} {}", state, track),
                }
            }
        }
    }
}
