mod common;

use std::collections::BTreeSet;

use common::playing;
use trueshuffle::{
    playback::PlaybackMonitor,
    types::{PlaybackContext, PlaybackItem, PlaybackState},
};

fn managed(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_absent_snapshot_degrades_to_defaults() {
    let monitor = PlaybackMonitor::new(None);

    assert!(!monitor.is_playing());
    assert_eq!(monitor.current_playlist_id(), None);
    assert!(!monitor.is_managed_playlist(&managed(&["p1"])));
    assert!(!monitor.is_shuffle_enabled());
    assert_eq!(monitor.current_track_id(), None);
    assert_eq!(monitor.describe(), "idle");
}

#[test]
fn test_partial_snapshot_degrades_to_defaults() {
    let snapshot = PlaybackState::default();
    let monitor = PlaybackMonitor::new(Some(&snapshot));

    assert!(!monitor.is_playing());
    assert_eq!(monitor.current_playlist_id(), None);
    assert!(!monitor.is_shuffle_enabled());
    assert_eq!(monitor.current_track_id(), None);
}

#[test]
fn test_context_without_uri() {
    let snapshot = PlaybackState {
        is_playing: true,
        context: Some(PlaybackContext { uri: None }),
        ..Default::default()
    };
    let monitor = PlaybackMonitor::new(Some(&snapshot));

    assert!(monitor.is_playing());
    assert_eq!(monitor.current_playlist_id(), None);
}

#[test]
fn test_playing_managed_playlist() {
    let snapshot = playing("p1", "spotify:track:t1");
    let monitor = PlaybackMonitor::new(Some(&snapshot));

    assert!(monitor.is_playing());
    assert!(monitor.is_shuffle_enabled());
    assert_eq!(monitor.current_playlist_id(), Some("p1".to_string()));
    assert!(monitor.is_managed_playlist(&managed(&["p0", "p1"])));
    assert!(!monitor.is_managed_playlist(&managed(&["p2"])));
    assert_eq!(
        monitor.current_track_id(),
        Some("spotify:track:t1".to_string())
    );
}

#[test]
fn test_album_context_is_not_a_playlist() {
    let snapshot = PlaybackState {
        is_playing: true,
        context: Some(PlaybackContext {
            uri: Some("spotify:album:1DFixLWuPkv3KT3TnV35m3".to_string()),
        }),
        item: Some(PlaybackItem {
            uri: Some("spotify:track:t1".to_string()),
            name: None,
        }),
        ..Default::default()
    };
    let monitor = PlaybackMonitor::new(Some(&snapshot));

    assert_eq!(monitor.current_playlist_id(), None);
    assert!(!monitor.is_managed_playlist(&managed(&["1DFixLWuPkv3KT3TnV35m3"])));
}

#[test]
fn test_legacy_user_playlist_uri() {
    let snapshot = PlaybackState {
        is_playing: true,
        context: Some(PlaybackContext {
            uri: Some("spotify:user:someone:playlist:p9".to_string()),
        }),
        ..Default::default()
    };
    let monitor = PlaybackMonitor::new(Some(&snapshot));

    assert_eq!(monitor.current_playlist_id(), Some("p9".to_string()));
}

#[test]
fn test_paused_playback() {
    let mut snapshot = playing("p1", "spotify:track:t1");
    snapshot.is_playing = false;
    snapshot.shuffle_state = false;
    let monitor = PlaybackMonitor::new(Some(&snapshot));

    assert!(!monitor.is_playing());
    assert!(!monitor.is_shuffle_enabled());
    assert_eq!(monitor.describe(), "paused Current (playlist p1)");
}
