// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playlist sequencing with a circular "now playing" cursor.
//!
//! The [`playlist`] module holds the core data structure. The
//! [`player`] module drives playback and rendering adapters from it,
//! and [`config`] loads settings and seed track lists.

pub mod config;
pub mod player;
pub mod playlist;

pub use config::{Settings, TrackListFile};
pub use player::{PlaybackAdapter, PlayerController, PlaylistView};
pub use playlist::{Playlist, PlaylistError, Track, TrackHandle, TrackId};
