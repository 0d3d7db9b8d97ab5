use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{Device, PlaylistId};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Extracts the playlist id from a context URI.
///
/// Accepts `spotify:playlist:<id>` and the legacy
/// `spotify:user:<user>:playlist:<id>` form. Any other context (album, artist,
/// collection) yields `None`.
pub fn playlist_id_from_uri(uri: &str) -> Option<PlaylistId> {
    let mut parts = uri.split(':').skip_while(|part| *part != "playlist");
    parts.next()?;
    match parts.next() {
        Some(id) if !id.is_empty() => Some(id.to_string()),
        _ => None,
    }
}

/// Normalizes a configured playlist reference to a bare id.
///
/// Configuration may hold a bare id, a playlist URI or a share link such as
/// `https://open.spotify.com/playlist/<id>?si=...`.
pub fn normalize_playlist_id(reference: &str) -> PlaylistId {
    let reference = reference.trim();
    if let Some(id) = playlist_id_from_uri(reference) {
        return id;
    }

    if let Some((_, rest)) = reference.split_once("/playlist/") {
        let id = rest.split(['?', '/', '#']).next().unwrap_or(rest);
        return id.to_string();
    }

    reference.to_string()
}

/// Finds a device by case-insensitive name equality.
pub fn find_device<'a>(devices: &'a [Device], name: &str) -> Option<&'a Device> {
    let wanted = name.to_lowercase();
    devices
        .iter()
        .find(|device| device.name.to_lowercase() == wanted)
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
