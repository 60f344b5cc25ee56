//! # cutdraft-probe
//!
//! Async media probing for cutdraft draft documents.
//!
//! This crate is the draft model's single collaborator for extracting real
//! metadata from media files. Given a path it returns a [`MediaDescriptor`]
//! with the asset duration (in nanoseconds) and, for video assets, the frame
//! dimensions and codec name. Probing shells out to `ffprobe` and may suspend
//! while the file is inspected; failures propagate unchanged to the caller,
//! with no retries.
//!
//! ## Example
//!
//! ```no_run
//! # async fn run() -> cutdraft_probe::Result<()> {
//! let desc = cutdraft_probe::probe("/path/to/clip.mp4").await?;
//! println!("duration: {} ns", desc.duration);
//! # Ok(())
//! # }
//! ```

mod error;
mod ffprobe;
mod types;

pub use error::{Error, Result};
pub use types::MediaDescriptor;

use std::path::Path;

/// Probe a media file and return its descriptor.
///
/// Fails with [`Error::AssetNotFound`] when the path does not resolve to a
/// file, and with [`Error::ProbeFailed`] when the underlying inspection tool
/// errors.
pub async fn probe<P: AsRef<Path>>(path: P) -> Result<MediaDescriptor> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::asset_not_found(path));
    }
    tracing::debug!(path = %path.display(), "probing media file");
    ffprobe::probe_with_ffprobe(path).await
}
