// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Seams to the media and rendering layers.
//!
//! The controller talks to playback hardware and to whatever draws the
//! playlist only through these traits. `LoggingPlayback` is a headless
//! adapter that records what it was asked to do.

use tracing::{debug, info};

use crate::playlist::{Track, TrackId};

/// Media resource that plays one track at a time
pub trait PlaybackAdapter {
    /// Load a track's media, replacing whatever was loaded
    fn load(&mut self, track: &Track);

    /// Release the loaded media
    fn unload(&mut self);

    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Seek to an absolute position in seconds
    fn seek_to(&mut self, seconds: f64);

    /// Set output volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32);

    /// Duration of the loaded media, if known
    fn duration(&self) -> Option<f64>;

    /// Current position in seconds
    fn position(&self) -> f64;
}

/// One rendered playlist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCard {
    /// Track id, used to route selection back to the controller
    pub id: TrackId,
    /// Title line
    pub title: String,
    /// Artist line
    pub artist: String,
    /// Album art reference
    pub album_art: String,
    /// Whether this entry is under the cursor
    pub active: bool,
}

impl TrackCard {
    /// Build a card from a track
    pub fn from_track(track: &Track, active: bool) -> Self {
        Self {
            id: track.id(),
            title: track.title().to_string(),
            artist: track.artist().to_string(),
            album_art: track.album_art().to_string(),
            active,
        }
    }
}

/// Something that draws the playlist
pub trait PlaylistView {
    /// Redraw all entries in playlist order. An empty slice means an empty playlist.
    fn render(&mut self, cards: &[TrackCard]);

    /// Mark the active entry
    fn highlight(&mut self, id: Option<TrackId>);
}

/// Headless playback that logs requests and keeps a simulated clock
#[derive(Debug, Clone, Default)]
pub struct LoggingPlayback {
    loaded: Option<Track>,
    playing: bool,
    position: f64,
    duration: Option<f64>,
    volume: f32,
}

impl LoggingPlayback {
    /// Create an idle adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently loaded track
    pub fn loaded(&self) -> Option<&Track> {
        self.loaded.as_ref()
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Last volume set
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Advance the simulated clock, returning true when the track finished
    pub fn tick(&mut self, seconds: f64) -> bool {
        if !self.playing {
            return false;
        }
        self.position += seconds;
        match self.duration {
            Some(duration) if self.position >= duration => {
                self.position = duration;
                self.playing = false;
                true
            }
            _ => false,
        }
    }
}

/// Parse an `m:ss` label back into seconds.
///
/// Seconds must be below 60. Labels too large to count in seconds are
/// treated as unknown.
fn parse_duration_label(label: &str) -> Option<f64> {
    let (minutes, seconds) = label.split_once(':')?;
    let minutes: u64 = minutes.trim().parse().ok()?;
    let seconds: u64 = seconds.trim().parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    let total = minutes.checked_mul(60)?.checked_add(seconds)?;
    Some(total as f64)
}

impl PlaybackAdapter for LoggingPlayback {
    fn load(&mut self, track: &Track) {
        info!(id = %track.id(), media = track.media(), "loading {}", track);
        self.duration = parse_duration_label(track.duration_label());
        self.position = 0.0;
        self.playing = false;
        self.loaded = Some(track.clone());
    }

    fn unload(&mut self) {
        debug!("unloading media");
        self.loaded = None;
        self.duration = None;
        self.position = 0.0;
        self.playing = false;
    }

    fn play(&mut self) {
        if let Some(track) = &self.loaded {
            info!("playing {}", track);
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        debug!(position = self.position, "paused");
        self.playing = false;
    }

    fn seek_to(&mut self, seconds: f64) {
        let limit = self.duration.unwrap_or(f64::MAX);
        self.position = seconds.clamp(0.0, limit);
        debug!(position = self.position, "seeked");
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        debug!(volume = self.volume, "volume changed");
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn position(&self) -> f64 {
        self.position
    }
}
