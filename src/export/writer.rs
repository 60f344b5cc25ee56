//! Filesystem writing of the two draft documents.
//!
//! This is the narrow contract to the embedding application: serialize the
//! content and meta-info aggregates and place them under a draft directory.
//! Nothing beyond serialization happens at this boundary.

use crate::error::Result;
use crate::model::{Content, MetaInfo};
use std::path::Path;

/// File name of the serialized content document.
pub const CONTENT_FILE: &str = "draft_content.json";

/// File name of the serialized meta-info document.
pub const META_FILE: &str = "draft_meta_info.json";

/// Serialize both documents into `dir`, creating it if needed.
///
/// Fails before touching the filesystem when the content document does not
/// pass its referential-integrity check.
pub fn write_draft(dir: &Path, content: &Content, meta: &MetaInfo) -> Result<()> {
    let content_json = super::content_document(content)?;
    let meta_json = super::meta_document(meta)?;

    std::fs::create_dir_all(dir)?;
    std::fs::write(
        dir.join(CONTENT_FILE),
        serde_json::to_string_pretty(&content_json)?,
    )?;
    std::fs::write(
        dir.join(META_FILE),
        serde_json::to_string_pretty(&meta_json)?,
    )?;

    tracing::info!(dir = %dir.display(), "wrote draft documents");
    Ok(())
}
