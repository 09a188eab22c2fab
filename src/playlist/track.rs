// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Track records held by a playlist.
//!
//! A track is an immutable value: identity plus display and media
//! metadata. Media and album art are opaque references the playlist
//! never interprets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-assigned track identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl TrackId {
    /// Raw id value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TrackId {
    fn from(id: u64) -> Self {
        TrackId(id)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single playable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Identity
    id: TrackId,
    /// Display title
    title: String,
    /// Display artist
    artist: String,
    /// Album art reference (URL or content handle)
    album_art: String,
    /// Pre-formatted duration, e.g. "3:05"
    duration_label: String,
    /// Handle to the playable content
    media: String,
}

impl Track {
    /// Create a new track with empty art, duration and media
    pub fn new(id: u64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: TrackId(id),
            title: title.into(),
            artist: artist.into(),
            album_art: String::new(),
            duration_label: String::new(),
            media: String::new(),
        }
    }

    /// Get id
    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Get title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Get album art reference
    pub fn album_art(&self) -> &str {
        &self.album_art
    }

    /// Get duration label
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    /// Get media reference
    pub fn media(&self) -> &str {
        &self.media
    }

    /// Builder: set album art reference
    pub fn with_album_art(mut self, album_art: impl Into<String>) -> Self {
        self.album_art = album_art.into();
        self
    }

    /// Builder: set duration label
    pub fn with_duration(mut self, label: impl Into<String>) -> Self {
        self.duration_label = label.into();
        self
    }

    /// Builder: set media reference
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = media.into();
        self
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.artist.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} - {}", self.artist, self.title)
        }
    }
}
