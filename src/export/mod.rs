//! Serialization of the two draft documents.
//!
//! The DTOs here mirror the consuming application's expected layout
//! field-for-field; this module is the compatibility contract of the whole
//! crate. Export is a plain structural dump, with one check layered on
//! top: every material identifier referenced by any segment must resolve
//! against the document's pool, or export fails with
//! `UnknownMaterialReference` instead of serializing a dangling reference.

pub mod writer;

use crate::error::{Error, Result};
use crate::model::{
    ClipSettings, Content, DraftMaterial, ExtraMaterialRefs, MaterialId, MaterialPool, MetaInfo,
    Segment, SegmentId, Timerange, Track, TrackAttribute, TrackId, TrackKind,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct ContentDocument<'a> {
    material_instances: &'a MaterialPool,
    track_instances: Vec<TrackDto<'a>>,
}

#[derive(Debug, Serialize)]
struct TrackDto<'a> {
    id: TrackId,
    #[serde(rename = "type")]
    kind: TrackKind,
    attribute: TrackAttribute,
    flag: i64,
    segments: Vec<SegmentDto<'a>>,
}

#[derive(Debug, Serialize)]
struct SegmentDto<'a> {
    id: SegmentId,
    material_id: MaterialId,
    extra_material_ids: &'a ExtraMaterialRefs,
    target_timerange: Timerange,
    source_timerange: Timerange,
    clip: &'a ClipSettings,
    volume: f64,
    speed: f64,
}

#[derive(Debug, Serialize)]
struct MetaInfoDocument<'a> {
    draft_materials: &'a [DraftMaterial],
}

/// Serialize the content document, checking referential integrity first.
pub fn content_document(content: &Content) -> Result<Value> {
    let mut track_instances = Vec::with_capacity(content.tracks().len());
    for track in content.tracks() {
        track_instances.push(track_dto(content, track)?);
    }
    let document = ContentDocument {
        material_instances: content.materials(),
        track_instances,
    };
    tracing::debug!(
        tracks = document.track_instances.len(),
        "serializing content document"
    );
    Ok(serde_json::to_value(&document)?)
}

/// Serialize the meta-info document.
pub fn meta_document(meta: &MetaInfo) -> Result<Value> {
    let document = MetaInfoDocument {
        draft_materials: meta.draft_materials(),
    };
    Ok(serde_json::to_value(&document)?)
}

fn track_dto<'a>(content: &'a Content, track: &'a Track) -> Result<TrackDto<'a>> {
    let mut segments = Vec::with_capacity(track.segments().len());
    for segment in track.segments() {
        segments.push(segment_dto(content, segment)?);
    }
    Ok(TrackDto {
        id: track.id(),
        kind: track.kind(),
        attribute: track.attribute(),
        flag: track.flag(),
        segments,
    })
}

fn segment_dto<'a>(content: &'a Content, segment: &'a Segment) -> Result<SegmentDto<'a>> {
    let primary = segment
        .material()
        .ok_or_else(|| Error::unknown_material(format!("segment {} has no primary material", segment.id())))?;
    if !content
        .materials()
        .contains_in(primary.category(), primary.material_id())
    {
        return Err(Error::unknown_material(primary.material_id()));
    }
    for (category, id) in segment.extra_materials().entries() {
        if !content.materials().contains_in(category, id) {
            return Err(Error::unknown_material(format!("{category}/{id}")));
        }
    }
    Ok(SegmentDto {
        id: segment.id(),
        material_id: primary.material_id(),
        extra_material_ids: segment.extra_materials(),
        target_timerange: segment.target_timerange(),
        source_timerange: segment.source_timerange(),
        clip: segment.clip(),
        volume: segment.volume(),
        speed: segment.speed(),
    })
}
