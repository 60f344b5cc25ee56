//! # cutdraft
//!
//! In-memory document model and draft exporter for a non-linear video
//! editor. The crate builds a graph of tracks, timed clip instances
//! (segments) and the materials they reference, keeps that graph
//! internally consistent through imperative mutations, and serializes it
//! into the pair of JSON documents the consuming editing application
//! loads as a draft.
//!
//! The model is single-threaded and synchronous; the one async boundary
//! is media probing, delegated to the `cutdraft-probe` crate.
//!
//! ## Example
//!
//! ```
//! use cutdraft::model::{PrimaryRef, Segment, Timerange, Track, TrackKind};
//! use cutdraft::Draft;
//! use cutdraft_probe::MediaDescriptor;
//!
//! # fn run() -> cutdraft::Result<()> {
//! let mut draft = Draft::new();
//! let material_id = draft.register_video(&MediaDescriptor {
//!     path: "/clips/beach.mp4".into(),
//!     duration: 30_000_000_000,
//!     width: Some(1920),
//!     height: Some(1080),
//!     codec: Some("h264".into()),
//! });
//!
//! let mut segment = Segment::new();
//! segment.set_material(PrimaryRef::Video(material_id));
//! segment.set_source_timerange(Timerange::new(0, 5_000_000_000))?;
//! segment.set_target_timerange(Timerange::new(0, 5_000_000_000))?;
//!
//! let mut track = Track::new(TrackKind::Video);
//! track.push_segment(segment)?;
//! draft.content_mut().add_track(track);
//!
//! let (content_json, meta_json) = draft.export()?;
//! assert_eq!(content_json["track_instances"][0]["type"], "video");
//! assert_eq!(meta_json["draft_materials"][0]["path"], "/clips/beach.mp4");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

mod draft;
pub mod error;
pub mod export;
pub mod model;
pub mod presets;

// Re-export the probing collaborator under a stable path.
pub mod probe {
    pub use cutdraft_probe::{probe, Error, MediaDescriptor, Result};
}

pub use draft::Draft;
pub use error::{Error, Result};
