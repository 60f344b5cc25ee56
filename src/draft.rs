//! The draft aggregate: one content document, one meta-info document, and
//! the preset catalog, built by a single writer.
//!
//! Importing media is the only asynchronous operation; it awaits the
//! probing collaborator and then performs synchronous graph mutations.
//! Probe failures surface unchanged at the await point.

use crate::error::{Error, Result};
use crate::export;
use crate::model::{
    AudioMaterial, Content, DraftMaterial, MaterialBatch, MaterialId, MetaInfo, SegmentId,
    VideoMaterial,
};
use crate::presets::PresetCatalog;
use cutdraft_probe::MediaDescriptor;
use std::path::Path;

/// An editing project under construction.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    content: Content,
    meta: MetaInfo,
    presets: PresetCatalog,
}

impl Draft {
    /// Create an empty draft with no presets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty draft with the given preset catalog.
    #[must_use]
    pub fn with_presets(presets: PresetCatalog) -> Self {
        Self {
            content: Content::new(),
            meta: MetaInfo::new(),
            presets,
        }
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Content {
        &mut self.content
    }

    #[must_use]
    pub fn meta(&self) -> &MetaInfo {
        &self.meta
    }

    #[must_use]
    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    /// Probe a video file and register it in both documents. Returns the
    /// material identifier segments should reference.
    pub async fn import_video(&mut self, path: impl AsRef<Path>) -> Result<MaterialId> {
        let descriptor = cutdraft_probe::probe(path).await?;
        Ok(self.register_video(&descriptor))
    }

    /// Probe an audio file and register it in both documents.
    pub async fn import_audio(&mut self, path: impl AsRef<Path>) -> Result<MaterialId> {
        let descriptor = cutdraft_probe::probe(path).await?;
        Ok(self.register_audio(&descriptor))
    }

    /// Register an already-probed video descriptor.
    pub fn register_video(&mut self, descriptor: &MediaDescriptor) -> MaterialId {
        let material = VideoMaterial::from_descriptor(descriptor);
        let id = material.id;
        self.meta.register(DraftMaterial::from_descriptor(id, descriptor));
        self.content.merge_materials(MaterialBatch {
            videos: vec![material],
            ..Default::default()
        });
        tracing::debug!(material = %id, path = %descriptor.path.display(), "registered video");
        id
    }

    /// Register an already-probed audio descriptor.
    pub fn register_audio(&mut self, descriptor: &MediaDescriptor) -> MaterialId {
        let material = AudioMaterial::from_descriptor(descriptor);
        let id = material.id;
        self.meta.register(DraftMaterial::from_descriptor(id, descriptor));
        self.content.merge_materials(MaterialBatch {
            audios: vec![material],
            ..Default::default()
        });
        tracing::debug!(material = %id, path = %descriptor.path.display(), "registered audio");
        id
    }

    /// Apply a catalog effect preset to a segment. Fails with
    /// [`Error::UnknownPreset`] when the name is not in the catalog.
    pub fn apply_effect_preset(&mut self, name: &str, segment: SegmentId) -> Result<MaterialId> {
        let effect = self
            .presets
            .effect_material(name)
            .ok_or_else(|| Error::unknown_preset(name))?;
        let id = effect.id;
        self.content.apply_effect(effect, segment)?;
        Ok(id)
    }

    /// Serialize both documents, checking referential integrity.
    pub fn export(&self) -> Result<(serde_json::Value, serde_json::Value)> {
        Ok((
            export::content_document(&self.content)?,
            export::meta_document(&self.meta)?,
        ))
    }

    /// Serialize both documents into a draft directory.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<()> {
        export::writer::write_draft(dir.as_ref(), &self.content, &self.meta)
    }
}
