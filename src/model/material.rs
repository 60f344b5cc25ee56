//! Material (resource) entities referenced by segments.
//!
//! Materials are owned by the document's [`MaterialPool`] and referenced by
//! identifier from segments; a segment never owns the resources it uses.
//!
//! [`MaterialPool`]: crate::model::MaterialPool

use crate::model::entity::{Entity, IdPolicy};
use crate::model::ids::{MaterialId, SegmentId};
use crate::model::track::TrackKind;
use cutdraft_probe::MediaDescriptor;
use serde::{Deserialize, Serialize};

/// The closed set of material categories a draft document owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    Videos,
    Audios,
    Texts,
    Effects,
    MaterialAnimations,
    Speeds,
    Beats,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Videos => write!(f, "videos"),
            Self::Audios => write!(f, "audios"),
            Self::Texts => write!(f, "texts"),
            Self::Effects => write!(f, "effects"),
            Self::MaterialAnimations => write!(f, "material_animations"),
            Self::Speeds => write!(f, "speeds"),
            Self::Beats => write!(f, "beats"),
        }
    }
}

/// A segment's reference to its primary material: exactly one of the three
/// timeline-bearing kinds. Closed tagged variant, not open-ended dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum PrimaryRef {
    Video(MaterialId),
    Audio(MaterialId),
    Text(MaterialId),
}

impl PrimaryRef {
    /// The referenced material's identifier.
    #[must_use]
    pub fn material_id(&self) -> MaterialId {
        match self {
            Self::Video(id) | Self::Audio(id) | Self::Text(id) => *id,
        }
    }

    /// The track kind this primary reference is compatible with.
    #[must_use]
    pub fn kind(&self) -> TrackKind {
        match self {
            Self::Video(_) => TrackKind::Video,
            Self::Audio(_) => TrackKind::Audio,
            Self::Text(_) => TrackKind::Text,
        }
    }

    /// The pool category the referenced material must live in.
    #[must_use]
    pub fn category(&self) -> MaterialCategory {
        match self {
            Self::Video(_) => MaterialCategory::Videos,
            Self::Audio(_) => MaterialCategory::Audios,
            Self::Text(_) => MaterialCategory::Texts,
        }
    }
}

/// A video (or photo) asset backed by a probed media descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMaterial {
    pub id: MaterialId,
    pub path: String,
    pub material_name: String,
    /// Asset duration in nanoseconds, from the probe descriptor.
    pub duration: i64,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
}

impl VideoMaterial {
    /// Wrap an externally probed descriptor into a video material.
    #[must_use]
    pub fn from_descriptor(descriptor: &MediaDescriptor) -> Self {
        Self {
            id: MaterialId::new(),
            path: descriptor.path.display().to_string(),
            material_name: file_stem(descriptor),
            duration: descriptor.duration,
            width: descriptor.width.unwrap_or(0),
            height: descriptor.height.unwrap_or(0),
            codec: descriptor.codec.clone(),
        }
    }
}

/// An audio asset backed by a probed media descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioMaterial {
    pub id: MaterialId,
    pub path: String,
    pub material_name: String,
    /// Asset duration in nanoseconds, from the probe descriptor.
    pub duration: i64,
}

impl AudioMaterial {
    /// Wrap an externally probed descriptor into an audio material.
    #[must_use]
    pub fn from_descriptor(descriptor: &MediaDescriptor) -> Self {
        Self {
            id: MaterialId::new(),
            path: descriptor.path.display().to_string(),
            material_name: file_stem(descriptor),
            duration: descriptor.duration,
        }
    }
}

/// Stroke applied around rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStroke {
    pub color: String,
    pub width: f64,
}

/// A text (title/caption) resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMaterial {
    pub id: MaterialId,
    pub content: String,
    pub font: String,
    pub size: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<TextStroke>,
}

impl TextMaterial {
    /// Create a text material with default styling.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: MaterialId::new(),
            content: content.into(),
            font: "default".to_string(),
            size: 15.0,
            color: "#ffffff".to_string(),
            stroke: None,
        }
    }
}

/// A visual effect resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectMaterial {
    pub id: MaterialId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl EffectMaterial {
    /// Create an effect material by name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MaterialId::new(),
            name: name.into(),
            resource_id: None,
        }
    }
}

/// An animation resource.
///
/// Holds a lookup-only back-reference to the segment it animates. The
/// relation is identity-based in both directions; neither side owns the
/// other, so no reference cycle can form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationMaterial {
    pub id: MaterialId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<SegmentId>,
}

impl AnimationMaterial {
    /// Create an animation material by name, not yet attached to a segment.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MaterialId::new(),
            name: name.into(),
            segment_id: None,
        }
    }
}

/// Playback-rate curve mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpeedMode {
    #[default]
    Normal,
    Curve,
}

/// A playback-rate resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedMaterial {
    pub id: MaterialId,
    pub speed: f64,
    pub mode: SpeedMode,
}

impl SpeedMaterial {
    /// Create a constant-rate speed material.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self {
            id: MaterialId::new(),
            speed,
            mode: SpeedMode::Normal,
        }
    }
}

/// A beat-marker resource attached to audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatMaterial {
    pub id: MaterialId,
    /// Beat positions in nanoseconds on the material's own timeline.
    pub beats: Vec<i64>,
}

impl BeatMaterial {
    /// Create a beat material from marker positions.
    #[must_use]
    pub fn new(beats: Vec<i64>) -> Self {
        Self {
            id: MaterialId::new(),
            beats,
        }
    }
}

macro_rules! material_entity {
    ($ty:ty) => {
        impl Entity for $ty {
            type Id = MaterialId;

            fn id(&self) -> MaterialId {
                self.id
            }

            fn duplicate(&self, policy: IdPolicy) -> Self {
                let mut copy = self.clone();
                if policy == IdPolicy::NewId {
                    copy.id = MaterialId::new();
                }
                copy
            }
        }
    };
}

material_entity!(VideoMaterial);
material_entity!(AudioMaterial);
material_entity!(TextMaterial);
material_entity!(EffectMaterial);
material_entity!(AnimationMaterial);
material_entity!(SpeedMaterial);
material_entity!(BeatMaterial);

fn file_stem(descriptor: &MediaDescriptor) -> String {
    descriptor
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
