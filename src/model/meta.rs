//! The meta-info document: externally probed media descriptors.

use crate::model::entity::{Entity, IdPolicy};
use crate::model::ids::MaterialId;
use crate::model::repository::Repository;
use cutdraft_probe::MediaDescriptor;
use serde::{Deserialize, Serialize};

/// One probed media asset recorded in the meta-info document.
///
/// Shares its identifier with the corresponding material in the content
/// document; that shared identity is the only coupling between the two
/// documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftMaterial {
    pub id: MaterialId,
    pub path: String,
    /// Asset duration in nanoseconds.
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
}

impl DraftMaterial {
    /// Record a probed descriptor under the given material identifier.
    #[must_use]
    pub fn from_descriptor(id: MaterialId, descriptor: &MediaDescriptor) -> Self {
        Self {
            id,
            path: descriptor.path.display().to_string(),
            duration: descriptor.duration,
            width: descriptor.width,
            height: descriptor.height,
            codec: descriptor.codec.clone(),
        }
    }
}

impl Entity for DraftMaterial {
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

/// Sibling aggregate to [`Content`], holding the probed descriptors of
/// every imported media asset.
///
/// [`Content`]: crate::model::Content
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetaInfo {
    draft_materials: Repository<DraftMaterial>,
}

impl MetaInfo {
    /// Create an empty meta-info document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a recorded asset, keyed by material identifier.
    pub fn register(&mut self, material: DraftMaterial) {
        self.draft_materials.upsert(material);
    }

    /// All recorded assets, in registration order.
    #[must_use]
    pub fn draft_materials(&self) -> &[DraftMaterial] {
        self.draft_materials.get_all()
    }

    /// Look up a recorded asset by material identifier.
    pub fn get(&self, id: MaterialId) -> Option<&DraftMaterial> {
        self.draft_materials.get_by_id(id)
    }
}
