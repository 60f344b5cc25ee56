//! The content document: aggregate root of the draft graph.

use crate::error::{Error, Result};
use crate::model::ids::{MaterialId, SegmentId, TrackId};
use crate::model::material::{AnimationMaterial, EffectMaterial};
use crate::model::pool::{MaterialBatch, MaterialPool};
use crate::model::repository::Repository;
use crate::model::segment::{ExtraMaterialPatch, Segment};
use crate::model::track::Track;
use std::collections::HashSet;

/// A repository of tracks plus the material pool they reference.
///
/// This is the aggregate root: the high-level mutations that must preserve
/// cross-entity invariants (splitting segments in place, registering
/// effects, accumulating materials) live here. All referenced material
/// identifiers must resolve against the pool by the time the document is
/// exported.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Content {
    materials: MaterialPool,
    tracks: Repository<Track>,
}

impl Content {
    /// Create an empty content document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn materials(&self) -> &MaterialPool {
        &self.materials
    }

    #[must_use]
    pub fn tracks(&self) -> &Repository<Track> {
        &self.tracks
    }

    /// Replace the whole material pool.
    pub fn set_materials(&mut self, materials: MaterialPool) {
        self.materials = materials;
    }

    /// Append a partial batch of materials, per category present. Existing
    /// entries are never replaced; identifiers are preserved as given.
    pub fn merge_materials(&mut self, batch: MaterialBatch) {
        self.materials.merge(batch);
    }

    /// Replace the track repository wholesale, preserving the identifiers
    /// of the tracks passed in. Fails with
    /// [`Error::RepositoryKeyConflict`] on duplicate track identifiers.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) -> Result<()> {
        let mut repository = Repository::new();
        for track in tracks {
            repository.insert(track)?;
        }
        self.tracks = repository;
        Ok(())
    }

    /// Insert or replace a single track.
    pub fn add_track(&mut self, track: Track) -> TrackId {
        self.tracks.upsert(track).id()
    }

    /// Mutable access to one owned track.
    pub fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.get_mut(id)
    }

    /// The track owning the given segment, if any.
    #[must_use]
    pub fn track_of_segment(&self, segment: SegmentId) -> Option<TrackId> {
        self.tracks
            .iter()
            .find(|track| track.contains_segment(segment))
            .map(Track::id)
    }

    /// Split the segment at an absolute point on the target timeline.
    ///
    /// The two halves partition the original windows (see
    /// [`Segment::split_at`]) and replace the original in its track,
    /// preserving order. Returns the identifier of the new right half.
    ///
    /// Fails with [`Error::UnknownMaterialReference`] when no owned track
    /// holds the segment, and [`Error::InvalidSplitPoint`] when `at` does
    /// not fall strictly inside the segment's target window.
    pub fn split_segment(&mut self, segment: SegmentId, at: i64) -> Result<SegmentId> {
        let track = self
            .tracks
            .iter_mut()
            .find(|track| track.contains_segment(segment))
            .ok_or_else(|| Error::unknown_material(segment))?;

        let (left, right) = track
            .get_segment(segment)
            .ok_or_else(|| Error::unknown_material(segment))?
            .split_at(at)?;
        let right_id = right.id();
        track.splice_split(segment, left, right)?;
        Ok(right_id)
    }

    /// Register the effect in the pool (if not already present) and set it
    /// as the segment's auxiliary effect reference.
    ///
    /// Fails with [`Error::UnknownMaterialReference`] when the segment does
    /// not belong to any track owned by this document.
    pub fn apply_effect(&mut self, effect: EffectMaterial, segment: SegmentId) -> Result<()> {
        let effect_id = effect.id;
        {
            let segment = self
                .segment_mut(segment)
                .ok_or_else(|| Error::unknown_material(segment))?;
            segment.set_extra_materials(ExtraMaterialPatch {
                effects: Some(effect_id),
                ..Default::default()
            });
        }
        if !self.materials.effects.iter().any(|e| e.id == effect_id) {
            self.materials.merge(MaterialBatch {
                effects: vec![effect],
                ..Default::default()
            });
        }
        tracing::debug!(effect = %effect_id, segment = %segment, "applied effect");
        Ok(())
    }

    /// Register the animation in the pool (if not already present), set it
    /// as the segment's auxiliary animation reference, and record the
    /// lookup-only back-reference on the animation itself.
    pub fn apply_animation(
        &mut self,
        animation: AnimationMaterial,
        segment: SegmentId,
    ) -> Result<()> {
        let animation_id = animation.id;
        {
            let segment = self
                .segment_mut(segment)
                .ok_or_else(|| Error::unknown_material(segment))?;
            segment.set_extra_materials(ExtraMaterialPatch {
                material_animations: Some(animation_id),
                ..Default::default()
            });
        }
        if self.materials.animation_mut(animation_id).is_none() {
            self.materials.merge(MaterialBatch {
                material_animations: vec![animation],
                ..Default::default()
            });
        }
        if let Some(animation) = self.materials.animation_mut(animation_id) {
            animation.segment_id = Some(segment);
        }
        tracing::debug!(animation = %animation_id, segment = %segment, "applied animation");
        Ok(())
    }

    /// Every material identifier referenced by any segment, directly or
    /// through its auxiliary slots.
    #[must_use]
    pub fn referenced_materials(&self) -> HashSet<MaterialId> {
        let mut referenced = HashSet::new();
        for track in &self.tracks {
            for segment in track.segments() {
                if let Some(material) = segment.material() {
                    referenced.insert(material.material_id());
                }
                for (_, id) in segment.extra_materials().entries() {
                    referenced.insert(id);
                }
            }
        }
        referenced
    }

    /// Pooled materials no segment references. The model never prunes
    /// these automatically; callers decide what to do with them.
    #[must_use]
    pub fn orphaned_materials(&self) -> Vec<MaterialId> {
        let referenced = self.referenced_materials();
        self.materials
            .material_ids()
            .filter(|id| !referenced.contains(id))
            .collect()
    }

    fn segment_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.tracks
            .iter_mut()
            .find_map(|track| track.get_segment_mut(id))
    }
}
