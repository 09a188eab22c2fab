// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Player controller.
//!
//! Owns a playlist together with the playback and view adapters, and
//! keeps them in step: every cursor change reloads the media and moves
//! the highlight, every edit redraws the list.

use tracing::{debug, info};

use super::adapter::{LoggingPlayback, PlaybackAdapter, PlaylistView, TrackCard};
use super::time::format_time;
use crate::config::PlayerSettings;
use crate::playlist::error::Result;
use crate::playlist::{Playlist, PlaylistError, Track, TrackId};

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing playing
    #[default]
    Stopped,
    /// Media is playing
    Playing,
    /// Media is paused mid-track
    Paused,
}

/// Progress bar values
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Elapsed share of the track (0.0 - 100.0)
    pub percent: f64,
    /// Elapsed time label
    pub elapsed: String,
    /// Total time label
    pub total: String,
}

/// Routes user intents to the playlist and adapters
pub struct PlayerController<P: PlaybackAdapter, V: PlaylistView> {
    /// Track list and cursor
    playlist: Playlist,
    /// Media output
    playback: P,
    /// List renderer
    view: V,
    /// Current playback state
    state: PlaybackState,
    /// Volume percentage (0 - 100)
    volume: u8,
    /// Start playing on direct selection
    autoplay_on_select: bool,
    /// Keep playing across next/previous
    resume_after_skip: bool,
}

impl<P: PlaybackAdapter, V: PlaylistView> PlayerController<P, V> {
    /// Create a controller around an existing playlist.
    ///
    /// Applies the initial volume, draws the list and loads the current
    /// track (without playing it).
    pub fn new(playlist: Playlist, playback: P, view: V, settings: &PlayerSettings) -> Self {
        let mut controller = Self {
            playlist,
            playback,
            view,
            state: PlaybackState::default(),
            volume: 0,
            autoplay_on_select: settings.autoplay_on_select,
            resume_after_skip: settings.resume_after_skip,
        };
        controller.set_volume_percent(settings.initial_volume);
        controller.render();
        controller.load_current();
        controller
    }

    /// Read access to the playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Playback adapter
    pub fn playback(&self) -> &P {
        &self.playback
    }

    /// Mutable playback adapter
    pub fn playback_mut(&mut self) -> &mut P {
        &mut self.playback
    }

    /// View adapter
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Get playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Get volume percentage
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Track under the cursor
    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.current_track()
    }

    /// Start playback of the current track
    pub fn play(&mut self) {
        if self.playlist.current_track().is_none() {
            return;
        }
        self.playback.play();
        self.state = PlaybackState::Playing;
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.playback.pause();
            self.state = PlaybackState::Paused;
        }
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) {
        if self.state == PlaybackState::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Skip to the next track, wrapping at the end
    pub fn next(&mut self) -> Option<&Track> {
        self.playlist.advance()?;
        self.after_cursor_move();
        self.playlist.current_track()
    }

    /// Skip to the previous track, wrapping at the start
    pub fn previous(&mut self) -> Option<&Track> {
        self.playlist.retreat()?;
        self.after_cursor_move();
        self.playlist.current_track()
    }

    /// The loaded track finished playing
    pub fn on_track_ended(&mut self) -> Option<&Track> {
        debug!("track ended");
        self.next()
    }

    /// Select a track directly
    pub fn play_by_id(&mut self, id: TrackId) -> Result<&Track> {
        self.playlist.set_cursor_by_id(id)?;
        self.load_current();
        if self.autoplay_on_select {
            self.play();
        } else {
            self.state = PlaybackState::Stopped;
        }
        self.playlist
            .current_track()
            .ok_or(PlaylistError::NotFound(id))
    }

    /// Seek to a percentage of the loaded track
    pub fn seek_percent(&mut self, percent: f64) {
        if let Some(duration) = self.playback.duration() {
            let percent = percent.clamp(0.0, 100.0);
            self.playback.seek_to(percent / 100.0 * duration);
        }
    }

    /// Set volume percentage, clamped to 100
    pub fn set_volume_percent(&mut self, percent: u8) {
        self.volume = percent.min(100);
        self.playback.set_volume(f32::from(self.volume) / 100.0);
    }

    /// Progress of the loaded track, when its duration is known
    pub fn progress(&self) -> Option<Progress> {
        let duration = self.playback.duration().filter(|d| *d > 0.0)?;
        let position = self.playback.position().clamp(0.0, duration);
        Some(Progress {
            percent: position / duration * 100.0,
            elapsed: format_time(position),
            total: format_time(duration),
        })
    }

    /// Append a track and redraw
    pub fn add_track(&mut self, track: Track) -> TrackId {
        let was_empty = self.playlist.is_empty();
        let id = self.playlist.append(track).id();
        self.render();
        if was_empty {
            self.load_current();
        }
        info!(%id, len = self.playlist.len(), "added track");
        id
    }

    /// Insert a track at `position` and redraw
    pub fn insert_track_at(&mut self, position: i64, track: Track) -> Result<TrackId> {
        let was_empty = self.playlist.is_empty();
        let id = self.playlist.insert_at(position, track)?.id();
        self.render();
        if was_empty {
            self.load_current();
        }
        info!(%id, position, "inserted track");
        Ok(id)
    }

    /// Remove a track and redraw. Returns false when `id` is absent.
    ///
    /// Removing the current track reloads whichever track the cursor
    /// moved to.
    pub fn remove_track(&mut self, id: TrackId) -> bool {
        let Some(handle) = self.playlist.handle_of(id) else {
            return false;
        };
        let was_current = self.playlist.cursor() == Some(handle);
        if self.playlist.remove(handle).is_none() {
            return false;
        }

        self.render();
        if was_current {
            self.after_cursor_move();
        }
        info!(%id, len = self.playlist.len(), "removed track");
        true
    }

    /// Reload after the cursor moved, resuming if playback was active
    fn after_cursor_move(&mut self) {
        let was_playing = self.state == PlaybackState::Playing;
        self.load_current();
        if self.playlist.current_track().is_none() {
            return;
        }
        if was_playing && self.resume_after_skip {
            self.play();
        } else {
            self.state = PlaybackState::Stopped;
        }
    }

    /// Load the cursor's track into the playback adapter
    fn load_current(&mut self) {
        match self.playlist.current_track() {
            Some(track) => {
                self.playback.load(track);
                self.view.highlight(Some(track.id()));
            }
            None => {
                self.playback.unload();
                self.view.highlight(None);
                self.state = PlaybackState::Stopped;
            }
        }
    }

    fn render(&mut self) {
        let current = self.playlist.current_track().map(Track::id);
        let cards: Vec<TrackCard> = self
            .playlist
            .iter()
            .map(|track| TrackCard::from_track(track, Some(track.id()) == current))
            .collect();
        self.view.render(&cards);
    }
}

/// Upper bound on simulated clock ticks spent on one track
const MAX_TICKS_PER_TRACK: f64 = 10_000.0;

impl<V: PlaylistView> PlayerController<LoggingPlayback, V> {
    /// Play every track once, starting at the cursor, on the simulated
    /// clock. Each tick advances `step` seconds, stretched so no track
    /// takes more than `MAX_TICKS_PER_TRACK` ticks. Tracks without a known
    /// duration finish immediately.
    ///
    /// Stops on the last track instead of wrapping. Returns the number of
    /// tracks played.
    pub fn play_through(&mut self, step: f64) -> usize {
        let total = self.playlist.len();
        if total == 0 {
            return 0;
        }
        let step = if step.is_finite() && step > 0.0 { step } else { 1.0 };

        self.play();
        for played in 1..=total {
            if let Some(duration) = self.playback.duration() {
                let step = step.max(duration / MAX_TICKS_PER_TRACK);
                while self.playback.is_playing() {
                    if self.playback.tick(step) {
                        break;
                    }
                }
            }
            if let Some(progress) = self.progress() {
                debug!(elapsed = %progress.elapsed, total = %progress.total, "finished track");
            }
            if played == total {
                break;
            }
            self.on_track_ended();
            if self.state != PlaybackState::Playing {
                self.play();
            }
        }

        self.pause();
        self.state = PlaybackState::Stopped;
        info!(tracks = total, "play-through finished");
        total
    }
}
