// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Building tracks from user imports.
//!
//! An import names a media file and some display metadata. The importer
//! assigns the id, formats the duration and fills in placeholder album
//! art when none was supplied.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::time::format_time;
use crate::config::{ImportSettings, SEED_PLACEHOLDER};
use crate::playlist::{Playlist, Track, TrackId};

/// Rejected imports
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// No media was selected
    #[error("No media selected for import")]
    MissingMedia,

    /// Title was empty
    #[error("Track title cannot be empty")]
    MissingTitle,

    /// Every track id has been handed out
    #[error("No track ids left to assign")]
    IdsExhausted,
}

/// A user's request to add a track
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportRequest {
    /// Title
    pub title: String,
    /// Artist
    pub artist: String,
    /// Media reference
    pub media: Option<String>,
    /// Album art reference
    pub album_art: Option<String>,
    /// Media duration in seconds, once known
    pub duration_secs: Option<f64>,
}

impl ImportRequest {
    /// Create a request with title and artist
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            ..Default::default()
        }
    }

    /// Builder: set media reference
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Builder: set album art reference
    pub fn with_album_art(mut self, album_art: impl Into<String>) -> Self {
        self.album_art = Some(album_art.into());
        self
    }

    /// Builder: set duration
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_secs = Some(seconds);
        self
    }
}

/// Turns import requests into tracks with fresh ids
#[derive(Debug, Clone)]
pub struct Importer {
    /// Next id to hand out, `None` once the id space is used up
    next_id: Option<u64>,
    /// Placeholder art URL template
    art_url: String,
    /// Exclusive upper bound for placeholder seeds
    seed_range: u32,
}

impl Importer {
    /// Create an importer starting at id 1
    pub fn new(settings: &ImportSettings) -> Self {
        Self {
            next_id: Some(1),
            art_url: settings.placeholder_art_url.clone(),
            seed_range: settings.placeholder_seed_range.max(1),
        }
    }

    /// Next id that will be assigned
    pub fn next_id(&self) -> Option<TrackId> {
        self.next_id.map(TrackId)
    }

    /// Make sure future ids are past every id in `playlist`
    pub fn observe(&mut self, playlist: &Playlist) {
        let Some(max) = playlist.iter().map(|track| track.id().value()).max() else {
            return;
        };
        self.next_id = match (self.next_id, max.checked_add(1)) {
            (Some(next), Some(past_max)) => Some(next.max(past_max)),
            _ => None,
        };
        if self.next_id.is_none() {
            warn!(max, "track ids exhausted");
        }
    }

    /// Placeholder album art for a seed
    pub fn placeholder_art(&self, seed: u32) -> String {
        self.art_url.replace(SEED_PLACEHOLDER, &seed.to_string())
    }

    /// Build a track using the thread-local RNG for placeholder art
    pub fn import(&mut self, request: ImportRequest) -> Result<Track, ImportError> {
        self.import_with(request, &mut rand::thread_rng())
    }

    /// Build a track, drawing placeholder art seeds from `rng`
    pub fn import_with<R: Rng>(
        &mut self,
        request: ImportRequest,
        rng: &mut R,
    ) -> Result<Track, ImportError> {
        let media = request
            .media
            .filter(|media| !media.is_empty())
            .ok_or(ImportError::MissingMedia)?;
        if request.title.trim().is_empty() {
            return Err(ImportError::MissingTitle);
        }

        let album_art = match request.album_art.filter(|art| !art.is_empty()) {
            Some(art) => art,
            None => {
                let seed = rng.gen_range(0..self.seed_range);
                debug!(seed, "using placeholder album art");
                self.placeholder_art(seed)
            }
        };
        let duration = format_time(request.duration_secs.unwrap_or(0.0));

        let id = self.next_id.ok_or(ImportError::IdsExhausted)?;
        self.next_id = id.checked_add(1);

        info!(
            id = %TrackId(id),
            title = %request.title,
            artist = %request.artist,
            "imported track"
        );
        Ok(Track::new(id, request.title, request.artist)
            .with_album_art(album_art)
            .with_duration(duration)
            .with_media(media))
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new(&ImportSettings::default())
    }
}
