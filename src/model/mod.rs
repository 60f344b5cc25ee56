//! The in-memory draft document graph.
//!
//! Leaf-first: typed ids, the entity contract and the generic repository;
//! then timing and visual value types; then materials and the pool that
//! owns them; then segments, tracks, and the two aggregate documents.

mod clip;
mod content;
mod entity;
mod ids;
mod material;
mod meta;
mod pool;
mod repository;
mod segment;
mod timerange;
mod track;

pub use clip::{ClipPatch, ClipSettings, Scale, Translation};
pub use content::Content;
pub use entity::{Entity, IdPolicy};
pub use ids::{MaterialId, SegmentId, TrackId};
pub use material::{
    AnimationMaterial, AudioMaterial, BeatMaterial, EffectMaterial, MaterialCategory, PrimaryRef,
    SpeedMaterial, SpeedMode, TextMaterial, TextStroke, VideoMaterial,
};
pub use meta::{DraftMaterial, MetaInfo};
pub use pool::{MaterialBatch, MaterialPool};
pub use repository::Repository;
pub use segment::{ExtraMaterialPatch, ExtraMaterialRefs, Segment};
pub use timerange::Timerange;
pub use track::{Track, TrackAttribute, TrackKind};
