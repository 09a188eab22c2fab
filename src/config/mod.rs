// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for tracklist.
//!
//! This module provides data structures for loading player settings
//! (TOML) and track list files (YAML) used to seed a playlist.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::playlist::{Playlist, Track};

/// Root player settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Settings {
    /// Playback behaviour
    #[serde(default)]
    pub player: PlayerSettings,
    /// Track import behaviour
    #[serde(default)]
    pub import: ImportSettings,
    /// Log output
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings file: {:?}", path.as_ref()))?;
        let settings = Self::from_toml(&contents)?;
        debug!(path = ?path.as_ref(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse settings TOML")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize settings to TOML")
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.player.initial_volume > 100 {
            bail!(
                "player.initial_volume must be 0-100, got {}",
                self.player.initial_volume
            );
        }
        if self.import.placeholder_seed_range == 0 {
            bail!("import.placeholder_seed_range must be >= 1");
        }
        if !self.import.placeholder_art_url.contains(SEED_PLACEHOLDER) {
            bail!(
                "import.placeholder_art_url must contain {}",
                SEED_PLACEHOLDER
            );
        }
        Ok(())
    }
}

/// Token replaced by a random seed in placeholder art URLs
pub const SEED_PLACEHOLDER: &str = "{seed}";

/// Playback behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSettings {
    /// Starting volume percentage (0 - 100)
    #[serde(default = "default_volume")]
    pub initial_volume: u8,
    /// Start playing when a track is picked directly
    #[serde(default = "default_true")]
    pub autoplay_on_select: bool,
    /// Keep playing after skipping next/previous
    #[serde(default = "default_true")]
    pub resume_after_skip: bool,
}

fn default_volume() -> u8 {
    50
}
fn default_true() -> bool {
    true
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            initial_volume: default_volume(),
            autoplay_on_select: true,
            resume_after_skip: true,
        }
    }
}

/// Track import behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportSettings {
    /// URL template for generated album art; `{seed}` is replaced
    #[serde(default = "default_art_url")]
    pub placeholder_art_url: String,
    /// Seeds are drawn from `0..placeholder_seed_range`
    #[serde(default = "default_seed_range")]
    pub placeholder_seed_range: u32,
}

fn default_art_url() -> String {
    "https://picsum.photos/seed/{seed}/400/400".to_string()
}
fn default_seed_range() -> u32 {
    1000
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            placeholder_art_url: default_art_url(),
            placeholder_seed_range: default_seed_range(),
        }
    }
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// A track list file used to seed a playlist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackListFile {
    /// Display name
    #[serde(default = "default_list_name")]
    pub name: String,
    /// Entries in playlist order
    #[serde(default)]
    pub tracks: Vec<TrackEntry>,
}

fn default_list_name() -> String {
    "Untitled".to_string()
}

impl TrackListFile {
    /// Load a track list from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read track list: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a track list from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse track list YAML")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize track list to YAML")
    }

    /// Build a playlist with every entry appended in file order
    pub fn into_playlist(self) -> Playlist {
        self.tracks.into_iter().map(TrackEntry::into_track).collect()
    }
}

/// One track list entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackEntry {
    /// Track id
    pub id: u64,
    /// Title
    pub title: String,
    /// Artist
    #[serde(default)]
    pub artist: String,
    /// Album art reference
    #[serde(default)]
    pub album_art: String,
    /// Duration label, e.g. "3:05"
    #[serde(default)]
    pub duration: String,
    /// Media reference
    #[serde(default)]
    pub media: String,
}

impl TrackEntry {
    /// Convert into a track
    pub fn into_track(self) -> Track {
        Track::new(self.id, self.title, self.artist)
            .with_album_art(self.album_art)
            .with_duration(self.duration)
            .with_media(self.media)
    }
}
