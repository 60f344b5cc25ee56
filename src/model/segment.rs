//! Segments: timed clip instances placed on tracks.

use crate::error::{Error, Result};
use crate::model::clip::{ClipPatch, ClipSettings};
use crate::model::entity::{Entity, IdPolicy};
use crate::model::ids::{MaterialId, SegmentId};
use crate::model::material::{MaterialCategory, PrimaryRef};
use crate::model::timerange::Timerange;
use serde::{Deserialize, Serialize};

/// Auxiliary material references carried by a segment, one slot per
/// category. Serialized as the segment's `extra_material_ids` object with
/// absent slots omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraMaterialRefs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<MaterialId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_animations: Option<MaterialId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speeds: Option<MaterialId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beats: Option<MaterialId>,
}

impl ExtraMaterialRefs {
    /// Merge a patch, replacing each slot the patch names. Unlike the
    /// document-level material merge this never accumulates: a named slot
    /// is overwritten.
    pub fn merge(&mut self, patch: ExtraMaterialPatch) {
        if let Some(id) = patch.effects {
            self.effects = Some(id);
        }
        if let Some(id) = patch.material_animations {
            self.material_animations = Some(id);
        }
        if let Some(id) = patch.speeds {
            self.speeds = Some(id);
        }
        if let Some(id) = patch.beats {
            self.beats = Some(id);
        }
    }

    /// Occupied slots as (category, id) pairs, for integrity checks.
    pub fn entries(&self) -> impl Iterator<Item = (MaterialCategory, MaterialId)> {
        [
            (MaterialCategory::Effects, self.effects),
            (MaterialCategory::MaterialAnimations, self.material_animations),
            (MaterialCategory::Speeds, self.speeds),
            (MaterialCategory::Beats, self.beats),
        ]
        .into_iter()
        .filter_map(|(category, id)| id.map(|id| (category, id)))
    }
}

/// Partial update for [`ExtraMaterialRefs`]: replace-per-key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtraMaterialPatch {
    pub effects: Option<MaterialId>,
    pub material_animations: Option<MaterialId>,
    pub speeds: Option<MaterialId>,
    pub beats: Option<MaterialId>,
}

/// One timed clip instance: timing, visual state, a primary material
/// reference and a bag of auxiliary references.
///
/// Timing invariant: `target_timerange.duration` equals
/// `source_timerange.duration / speed`; [`set_speed`] and
/// [`speed_to_duration`] keep the coupling in both directions.
///
/// [`set_speed`]: Segment::set_speed
/// [`speed_to_duration`]: Segment::speed_to_duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    id: SegmentId,
    material: Option<PrimaryRef>,
    extra_materials: ExtraMaterialRefs,
    source_timerange: Timerange,
    target_timerange: Timerange,
    clip: ClipSettings,
    volume: f64,
    speed: f64,
}

impl Default for Segment {
    fn default() -> Self {
        Self::new()
    }
}

impl Segment {
    /// Create an empty segment with default visual state, unit speed and
    /// full volume. A primary material is required before export.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: SegmentId::new(),
            material: None,
            extra_materials: ExtraMaterialRefs::default(),
            source_timerange: Timerange::default(),
            target_timerange: Timerange::default(),
            clip: ClipSettings::default(),
            volume: 1.0,
            speed: 1.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> SegmentId {
        self.id
    }

    #[must_use]
    pub fn material(&self) -> Option<PrimaryRef> {
        self.material
    }

    #[must_use]
    pub fn extra_materials(&self) -> &ExtraMaterialRefs {
        &self.extra_materials
    }

    #[must_use]
    pub fn source_timerange(&self) -> Timerange {
        self.source_timerange
    }

    #[must_use]
    pub fn target_timerange(&self) -> Timerange {
        self.target_timerange
    }

    #[must_use]
    pub fn clip(&self) -> &ClipSettings {
        &self.clip
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the primary material reference.
    pub fn set_material(&mut self, material: PrimaryRef) {
        self.material = Some(material);
    }

    /// Merge auxiliary material references, replacing each slot the patch
    /// names.
    pub fn set_extra_materials(&mut self, patch: ExtraMaterialPatch) {
        self.extra_materials.merge(patch);
    }

    /// Assign the window occupied on the track timeline.
    pub fn set_target_timerange(&mut self, range: Timerange) -> Result<()> {
        range.validate()?;
        self.target_timerange = range;
        Ok(())
    }

    /// Assign the window read from the referenced material.
    pub fn set_source_timerange(&mut self, range: Timerange) -> Result<()> {
        range.validate()?;
        self.source_timerange = range;
        Ok(())
    }

    /// Merge a partial update into the clip transform state.
    pub fn merge_clip(&mut self, patch: &ClipPatch) {
        self.clip.merge(patch);
    }

    /// Set the playback rate and recompute the target duration as
    /// `source_timerange.duration / speed`. The source window is unchanged.
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(Error::SpeedOutOfRange(speed));
        }
        self.speed = speed;
        self.target_timerange.duration =
            (self.source_timerange.duration as f64 / speed).round() as i64;
        Ok(())
    }

    /// Inverse of [`set_speed`]: pin the target duration and recompute the
    /// playback rate as `source_timerange.duration / duration`.
    ///
    /// [`set_speed`]: Segment::set_speed
    pub fn speed_to_duration(&mut self, duration: i64) -> Result<()> {
        if duration <= 0 {
            return Err(Error::InvalidTimerange {
                start: self.target_timerange.start,
                duration,
            });
        }
        self.target_timerange.duration = duration;
        self.speed = self.source_timerange.duration as f64 / duration as f64;
        Ok(())
    }

    /// Set the volume, which must lie in [0, 1].
    pub fn set_volume(&mut self, volume: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(Error::VolumeOutOfRange(volume));
        }
        self.volume = volume;
        Ok(())
    }

    /// Split this segment at an absolute point on the target timeline.
    ///
    /// `at` must fall strictly inside the target window. The two halves
    /// partition the target window exactly and the source window in the
    /// same proportion; both share the original's material references,
    /// visual state, volume and speed. The left half keeps this segment's
    /// identifier, the right half receives a fresh one.
    pub fn split_at(&self, at: i64) -> Result<(Segment, Segment)> {
        let target = self.target_timerange;
        if at <= target.start || at >= target.end() {
            return Err(Error::InvalidSplitPoint {
                at,
                start: target.start,
                end: target.end(),
            });
        }

        let elapsed = at - target.start;
        // Proportional source split; i128 to avoid overflow on ns products.
        let source_elapsed = (self.source_timerange.duration as i128 * elapsed as i128
            / target.duration as i128) as i64;

        let mut left = self.duplicate(IdPolicy::KeepId);
        left.target_timerange = Timerange::new(target.start, elapsed);
        left.source_timerange =
            Timerange::new(self.source_timerange.start, source_elapsed);

        let mut right = self.duplicate(IdPolicy::NewId);
        right.target_timerange = Timerange::new(at, target.duration - elapsed);
        right.source_timerange = Timerange::new(
            self.source_timerange.start + source_elapsed,
            self.source_timerange.duration - source_elapsed,
        );

        tracing::debug!(
            segment = %self.id,
            at,
            left = %left.target_timerange,
            right = %right.target_timerange,
            "split segment"
        );
        Ok((left, right))
    }

    pub(crate) fn set_target_start(&mut self, start: i64) {
        self.target_timerange.start = start;
    }
}

impl Entity for Segment {
    type Id = SegmentId;

    fn id(&self) -> SegmentId {
        self.id
    }

    fn duplicate(&self, policy: IdPolicy) -> Self {
        let mut copy = self.clone();
        if policy == IdPolicy::NewId {
            copy.id = SegmentId::new();
        }
        copy
    }
}
