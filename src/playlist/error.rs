// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playlist error types.

use thiserror::Error;

use super::track::TrackId;

/// Recoverable playlist failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// Insertion index outside `[0, len]`
    #[error("Invalid position {position}: playlist holds {len} tracks")]
    InvalidPosition { position: i64, len: usize },

    /// No track with the requested id
    #[error("Track not found: {0}")]
    NotFound(TrackId),
}

/// Convenience Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
