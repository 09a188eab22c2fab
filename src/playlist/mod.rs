// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playlist sequencing.
//!
//! This module provides:
//! - Tracks: Immutable records with identity and media metadata
//! - Playlist: Ordered, doubly linked track list with a circular cursor
//! - Handles: Stable references into a playlist's track storage

mod arena;
pub mod error;
pub mod list;
pub mod track;

pub use arena::TrackHandle;
pub use error::PlaylistError;
pub use list::{Iter, Playlist};
pub use track::{Track, TrackId};
