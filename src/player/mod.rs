// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Player layer over the playlist.
//!
//! This module provides:
//! - Adapters: Traits for media playback and playlist rendering
//! - Controller: Maps user intents onto playlist and adapter calls
//! - Import: Builds tracks from user-supplied media
//! - Time: `m:ss` label formatting

pub mod adapter;
pub mod controller;
pub mod import;
pub mod time;

pub use adapter::{LoggingPlayback, PlaybackAdapter, PlaylistView, TrackCard};
pub use controller::{PlaybackState, PlayerController, Progress};
pub use import::{ImportError, ImportRequest, Importer};
pub use time::format_time;
