//! Typed ID wrappers for the draft document graph.
//!
//! Newtype wrappers around UUIDs keep the three entity families apart at
//! compile time: a MaterialId can never be handed to an operation expecting
//! a SegmentId. Identifiers are assigned at construction and never change
//! for the lifetime of the entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a material (resource) entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(Uuid);

impl MaterialId {
    /// Generate a new random material ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MaterialId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MaterialId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<MaterialId> for Uuid {
    fn from(id: MaterialId) -> Self {
        id.0
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a segment (timed clip instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(Uuid);

impl SegmentId {
    /// Generate a new random segment ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SegmentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<SegmentId> for Uuid {
    fn from(id: SegmentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(Uuid);

impl TrackId {
    /// Generate a new random track ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TrackId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<TrackId> for Uuid {
    fn from(id: TrackId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_id_uniqueness() {
        let id1 = MaterialId::new();
        let id2 = MaterialId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_segment_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = SegmentId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_track_id_serialization() {
        let id = TrackId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TrackId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_display() {
        let id = MaterialId::new();
        assert!(!format!("{}", id).is_empty());
    }
}
