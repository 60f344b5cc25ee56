//! Clip transform state and partial updates.

use serde::{Deserialize, Serialize};

/// Per-axis scale factor. Expected to be positive; 1.0 is unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// Normalized translation from frame center, each axis in [-0.5, 0.5].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

/// The visual state of a segment: scale, translation, rotation, opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipSettings {
    pub scale: Scale,
    /// Serialized as `transform` in the draft document.
    pub transform: Translation,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Opacity in [0, 1].
    pub alpha: f64,
}

impl Default for ClipSettings {
    fn default() -> Self {
        Self {
            scale: Scale::default(),
            transform: Translation::default(),
            rotation: 0.0,
            alpha: 1.0,
        }
    }
}

impl ClipSettings {
    /// Merge a partial update field by field; unspecified fields are
    /// untouched.
    pub fn merge(&mut self, patch: &ClipPatch) {
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
        if let Some(transform) = patch.transform {
            self.transform = transform;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(alpha) = patch.alpha {
            self.alpha = alpha;
        }
    }
}

/// Partial clip update: every field optional, overwrite-if-present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClipPatch {
    pub scale: Option<Scale>,
    pub transform: Option<Translation>,
    pub rotation: Option<f64>,
    pub alpha: Option<f64>,
}
