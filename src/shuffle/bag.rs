use std::{collections::HashSet, fmt};

use rand::{Rng, seq::SliceRandom};

use crate::types::TrackId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    /// The bag held nothing; it has to be refilled before drawing.
    Empty,
    /// Only the excluded track was left. The cycle is over and the bag must be
    /// refilled before a usable track can be drawn.
    Exhausted,
}

impl fmt::Display for BagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BagError::Empty => write!(f, "shuffle bag is empty"),
            BagError::Exhausted => write!(f, "shuffle bag exhausted by the excluded track"),
        }
    }
}

impl std::error::Error for BagError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BagState {
    Draining,
    Empty,
}

/// The tracks of one playlist not yet queued in the current cycle.
///
/// Holds a uniformly random permutation of the playlist's membership at the
/// last refill, without duplicates. Tracks are drawn from the back.
#[derive(Debug, Clone, Default)]
pub struct ShuffleBag {
    tracks: Vec<TrackId>,
}

impl ShuffleBag {
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Replaces the contents with a random permutation of `track_ids`.
    ///
    /// Duplicates are dropped (first occurrence wins) before shuffling.
    /// `SliceRandom::shuffle` is a Fisher-Yates shuffle, so every permutation
    /// is equally likely for a uniform `rng`.
    pub fn refill<I, R>(&mut self, track_ids: I, rng: &mut R)
    where
        I: IntoIterator<Item = TrackId>,
        R: Rng + ?Sized,
    {
        let mut seen = HashSet::new();
        self.tracks = track_ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        self.tracks.shuffle(rng);
    }

    /// Removes and returns the next track, skipping `exclude`.
    ///
    /// A drawn track equal to `exclude` is discarded and the next one is drawn.
    /// If that empties the bag, `BagError::Exhausted` is returned.
    pub fn take_next(&mut self, exclude: Option<&str>) -> Result<TrackId, BagError> {
        let mut drawn = self.tracks.pop().ok_or(BagError::Empty)?;

        while Some(drawn.as_str()) == exclude {
            drawn = self.tracks.pop().ok_or(BagError::Exhausted)?;
        }

        Ok(drawn)
    }

    pub fn state(&self) -> BagState {
        if self.tracks.is_empty() {
            BagState::Empty
        } else {
            BagState::Draining
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|id| id == track_id)
    }

    /// Remaining tracks in draw order reversed (the last one is drawn next).
    pub fn remaining(&self) -> &[TrackId] {
        &self.tracks
    }
}
