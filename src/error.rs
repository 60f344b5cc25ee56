//! Error types for the cutdraft document model.
//!
//! Every mutation validates its input synchronously and fails fast; no
//! operation partially applies a change before reporting an invalid input.
//! Probe failures cross the async boundary unchanged via [`Error::Probe`].

use crate::model::TrackKind;

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by draft document operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A timerange with a negative start or duration was supplied.
    #[error("invalid timerange: start {start}, duration {duration}")]
    InvalidTimerange { start: i64, duration: i64 },

    /// A split point fell outside the segment's target window.
    #[error("split point {at} not strictly inside target window [{start}, {end})")]
    InvalidSplitPoint { at: i64, start: i64, end: i64 },

    /// A playback rate outside (0, +inf) was supplied.
    #[error("speed out of range: {0}")]
    SpeedOutOfRange(f64),

    /// A volume outside [0, 1] was supplied.
    #[error("volume out of range: {0}")]
    VolumeOutOfRange(f64),

    /// A segment references a material the document does not own.
    #[error("unknown material reference: {0}")]
    UnknownMaterialReference(String),

    /// Strict insertion found the key already present.
    #[error("repository key conflict: {0}")]
    RepositoryKeyConflict(String),

    /// A segment's material kind is incompatible with its track's kind.
    #[error("segment kind {segment} does not match track kind {track}")]
    TrackKindMismatch {
        track: TrackKind,
        segment: TrackKind,
    },

    /// A preset name was not found in the catalog.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// The preset catalog table failed to parse.
    #[error("invalid preset table: {0}")]
    InvalidPresets(#[from] toml::de::Error),

    /// The probing collaborator failed; propagated unchanged.
    #[error(transparent)]
    Probe(#[from] cutdraft_probe::Error),

    /// An I/O error occurred while writing draft documents.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an UnknownMaterialReference error.
    pub fn unknown_material(reference: impl std::fmt::Display) -> Self {
        Self::UnknownMaterialReference(reference.to_string())
    }

    /// Create a RepositoryKeyConflict error.
    pub fn key_conflict(key: impl std::fmt::Display) -> Self {
        Self::RepositoryKeyConflict(key.to_string())
    }

    /// Create an UnknownPreset error.
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset(name.into())
    }
}
