//! Probe result types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata extracted from a media file by the probing backend.
///
/// Durations are expressed in nanoseconds to match the draft document
/// timebase. `width`/`height`/`codec` are present only for assets that
/// carry a video stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Path the descriptor was probed from.
    pub path: PathBuf,
    /// Total duration in nanoseconds.
    pub duration: i64,
    /// Frame width in pixels, for video assets.
    pub width: Option<u32>,
    /// Frame height in pixels, for video assets.
    pub height: Option<u32>,
    /// Video codec name, for video assets.
    pub codec: Option<String>,
}

impl MediaDescriptor {
    /// Whether the probed asset carries a video stream.
    #[must_use]
    pub fn has_video(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }
}
