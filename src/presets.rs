//! Named preset tables for audio and effect resources.
//!
//! The catalog is explicit state supplied by the embedding application,
//! either built in code or parsed from a TOML table. Looking up a preset
//! stamps out a fresh material entity; the catalog itself owns no
//! document state.

use crate::error::Result;
use crate::model::{AudioMaterial, EffectMaterial, MaterialId};
use serde::Deserialize;
use std::collections::HashMap;

/// A named audio asset preset (e.g. a bundled sound effect).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AudioPreset {
    pub path: String,
    /// Asset duration in nanoseconds.
    pub duration: i64,
}

/// A named effect preset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EffectPreset {
    pub name: String,
    #[serde(default)]
    pub resource_id: Option<String>,
}

/// Name-keyed preset tables, supplied at construction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetCatalog {
    #[serde(default)]
    audio: HashMap<String, AudioPreset>,
    #[serde(default)]
    effects: HashMap<String, EffectPreset>,
}

impl PresetCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a TOML table:
    ///
    /// ```toml
    /// [audio.whoosh]
    /// path = "/assets/whoosh.mp3"
    /// duration = 800000000
    ///
    /// [effects.blur]
    /// name = "Gaussian Blur"
    /// resource_id = "fx-blur-01"
    /// ```
    pub fn from_toml_str(table: &str) -> Result<Self> {
        Ok(toml::from_str(table)?)
    }

    /// Register an audio preset under a name.
    pub fn insert_audio(&mut self, name: impl Into<String>, preset: AudioPreset) {
        self.audio.insert(name.into(), preset);
    }

    /// Register an effect preset under a name.
    pub fn insert_effect(&mut self, name: impl Into<String>, preset: EffectPreset) {
        self.effects.insert(name.into(), preset);
    }

    /// Look up an audio preset by name.
    pub fn audio(&self, name: &str) -> Option<&AudioPreset> {
        self.audio.get(name)
    }

    /// Look up an effect preset by name.
    pub fn effect(&self, name: &str) -> Option<&EffectPreset> {
        self.effects.get(name)
    }

    /// Stamp a fresh audio material out of a named preset.
    pub fn audio_material(&self, name: &str) -> Option<AudioMaterial> {
        self.audio.get(name).map(|preset| AudioMaterial {
            id: MaterialId::new(),
            path: preset.path.clone(),
            material_name: name.to_string(),
            duration: preset.duration,
        })
    }

    /// Stamp a fresh effect material out of a named preset.
    pub fn effect_material(&self, name: &str) -> Option<EffectMaterial> {
        self.effects.get(name).map(|preset| EffectMaterial {
            id: MaterialId::new(),
            name: preset.name.clone(),
            resource_id: preset.resource_id.clone(),
        })
    }
}
