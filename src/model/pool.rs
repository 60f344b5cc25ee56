//! The material instance list: categorized ownership of all resources.

use crate::model::ids::MaterialId;
use crate::model::material::{
    AnimationMaterial, AudioMaterial, BeatMaterial, EffectMaterial, MaterialCategory,
    SpeedMaterial, TextMaterial, VideoMaterial,
};
use serde::{Deserialize, Serialize};

/// Categorized collection of every resource a draft document owns.
///
/// Each category is an ordered sequence; the serialized form of this struct
/// is exactly the `material_instances` object of the content document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialPool {
    pub videos: Vec<VideoMaterial>,
    pub audios: Vec<AudioMaterial>,
    pub texts: Vec<TextMaterial>,
    pub effects: Vec<EffectMaterial>,
    pub material_animations: Vec<AnimationMaterial>,
    pub speeds: Vec<SpeedMaterial>,
    pub beats: Vec<BeatMaterial>,
}

/// A partial set of materials to merge into a pool. Categories left empty
/// are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct MaterialBatch {
    pub videos: Vec<VideoMaterial>,
    pub audios: Vec<AudioMaterial>,
    pub texts: Vec<TextMaterial>,
    pub effects: Vec<EffectMaterial>,
    pub material_animations: Vec<AnimationMaterial>,
    pub speeds: Vec<SpeedMaterial>,
    pub beats: Vec<BeatMaterial>,
}

impl MaterialBatch {
    /// Whether the batch contributes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
            && self.audios.is_empty()
            && self.texts.is_empty()
            && self.effects.is_empty()
            && self.material_animations.is_empty()
            && self.speeds.is_empty()
            && self.beats.is_empty()
    }
}

impl MaterialPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the batch's entities to the existing sequences, per category.
    /// Existing entries are never replaced or deduplicated; call order is
    /// concatenation order.
    pub fn merge(&mut self, batch: MaterialBatch) {
        self.videos.extend(batch.videos);
        self.audios.extend(batch.audios);
        self.texts.extend(batch.texts);
        self.effects.extend(batch.effects);
        self.material_animations.extend(batch.material_animations);
        self.speeds.extend(batch.speeds);
        self.beats.extend(batch.beats);
    }

    /// Whether any category owns a material with this identifier.
    #[must_use]
    pub fn contains(&self, id: MaterialId) -> bool {
        self.category_of(id).is_some()
    }

    /// Whether the given category owns a material with this identifier.
    #[must_use]
    pub fn contains_in(&self, category: MaterialCategory, id: MaterialId) -> bool {
        match category {
            MaterialCategory::Videos => self.videos.iter().any(|m| m.id == id),
            MaterialCategory::Audios => self.audios.iter().any(|m| m.id == id),
            MaterialCategory::Texts => self.texts.iter().any(|m| m.id == id),
            MaterialCategory::Effects => self.effects.iter().any(|m| m.id == id),
            MaterialCategory::MaterialAnimations => {
                self.material_animations.iter().any(|m| m.id == id)
            }
            MaterialCategory::Speeds => self.speeds.iter().any(|m| m.id == id),
            MaterialCategory::Beats => self.beats.iter().any(|m| m.id == id),
        }
    }

    /// The category owning this identifier, if any.
    #[must_use]
    pub fn category_of(&self, id: MaterialId) -> Option<MaterialCategory> {
        const CATEGORIES: [MaterialCategory; 7] = [
            MaterialCategory::Videos,
            MaterialCategory::Audios,
            MaterialCategory::Texts,
            MaterialCategory::Effects,
            MaterialCategory::MaterialAnimations,
            MaterialCategory::Speeds,
            MaterialCategory::Beats,
        ];
        CATEGORIES
            .into_iter()
            .find(|&category| self.contains_in(category, id))
    }

    /// All material identifiers across every category, in category order.
    pub fn material_ids(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.videos
            .iter()
            .map(|m| m.id)
            .chain(self.audios.iter().map(|m| m.id))
            .chain(self.texts.iter().map(|m| m.id))
            .chain(self.effects.iter().map(|m| m.id))
            .chain(self.material_animations.iter().map(|m| m.id))
            .chain(self.speeds.iter().map(|m| m.id))
            .chain(self.beats.iter().map(|m| m.id))
    }

    pub(crate) fn animation_mut(&mut self, id: MaterialId) -> Option<&mut AnimationMaterial> {
        self.material_animations.iter_mut().find(|m| m.id == id)
    }
}
