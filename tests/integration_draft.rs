//! End-to-end draft construction tests
//!
//! Builds a complete project the way an embedding application would:
//! register probed media, lay segments onto tracks, mutate the graph
//! (split, compact, apply effects), then export and check the serialized
//! documents against the consuming application's schema.

use cutdraft::model::{
    ClipPatch, EffectMaterial, MaterialBatch, PrimaryRef, Segment, TextMaterial, Timerange, Track,
    TrackAttribute, TrackKind, Translation,
};
use cutdraft::presets::{EffectPreset, PresetCatalog};
use cutdraft::{Draft, Error};
use assert_matches::assert_matches;
use cutdraft_probe::MediaDescriptor;
use std::path::PathBuf;

const SECOND: i64 = 1_000_000_000;

fn beach_descriptor() -> MediaDescriptor {
    MediaDescriptor {
        path: PathBuf::from("/clips/beach.mp4"),
        duration: 30 * SECOND,
        width: Some(1920),
        height: Some(1080),
        codec: Some("h264".to_string()),
    }
}

fn music_descriptor() -> MediaDescriptor {
    MediaDescriptor {
        path: PathBuf::from("/clips/music.mp3"),
        duration: 180 * SECOND,
        width: None,
        height: None,
        codec: None,
    }
}

fn video_segment(material: PrimaryRef, start: i64, duration: i64) -> Segment {
    let mut segment = Segment::new();
    segment.set_material(material);
    segment.set_source_timerange(Timerange::new(0, duration)).unwrap();
    segment.set_target_timerange(Timerange::new(start, duration)).unwrap();
    segment
}

#[test]
fn full_draft_round_trip() {
    let mut catalog = PresetCatalog::new();
    catalog.insert_effect(
        "blur",
        EffectPreset {
            name: "Gaussian Blur".to_string(),
            resource_id: Some("fx-blur-01".to_string()),
        },
    );
    let mut draft = Draft::with_presets(catalog);

    let video_id = draft.register_video(&beach_descriptor());
    let audio_id = draft.register_audio(&music_descriptor());

    // Video track: two clips with a gap, then compacted.
    let first = video_segment(PrimaryRef::Video(video_id), 0, 5 * SECOND);
    let second = video_segment(PrimaryRef::Video(video_id), 7 * SECOND, 5 * SECOND);
    let first_id = first.id();
    let mut video_track = Track::new(TrackKind::Video);
    video_track.push_segment(first).unwrap();
    video_track.push_segment(second).unwrap();
    video_track.remove_empty_track_space();
    let video_track_id = draft.content_mut().add_track(video_track);

    // Audio track, muted.
    let mut audio_segment = Segment::new();
    audio_segment.set_material(PrimaryRef::Audio(audio_id));
    audio_segment
        .set_source_timerange(Timerange::new(0, 10 * SECOND))
        .unwrap();
    audio_segment
        .set_target_timerange(Timerange::new(0, 10 * SECOND))
        .unwrap();
    audio_segment.set_volume(0.6).unwrap();
    let mut audio_track = Track::new(TrackKind::Audio);
    audio_track.set_attribute(TrackAttribute::Mute);
    audio_track.push_segment(audio_segment).unwrap();
    draft.content_mut().add_track(audio_track);

    // Split the first clip and style the left half.
    let right_id = draft
        .content_mut()
        .split_segment(first_id, 2 * SECOND)
        .unwrap();
    assert_eq!(draft.content().track_of_segment(first_id), Some(video_track_id));
    let effect_id = draft.apply_effect_preset("blur", first_id).unwrap();

    let (content, meta) = draft.export().unwrap();

    // Material instances carry everything registered, including the preset.
    assert_eq!(content["material_instances"]["videos"].as_array().unwrap().len(), 1);
    assert_eq!(content["material_instances"]["audios"].as_array().unwrap().len(), 1);
    let effects = content["material_instances"]["effects"].as_array().unwrap();
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0]["id"], effect_id.to_string());
    assert_eq!(effects[0]["name"], "Gaussian Blur");

    // Video track: three segments after compaction + split, contiguous.
    let tracks = content["track_instances"].as_array().unwrap();
    assert_eq!(tracks.len(), 2);
    let video = &tracks[0];
    assert_eq!(video["type"], "video");
    let segments = video["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0]["id"], first_id.to_string());
    assert_eq!(segments[1]["id"], right_id.to_string());
    assert_eq!(segments[0]["target_timerange"]["start"], 0);
    assert_eq!(segments[0]["target_timerange"]["duration"], 2 * SECOND);
    assert_eq!(segments[1]["target_timerange"]["start"], 2 * SECOND);
    assert_eq!(segments[1]["target_timerange"]["duration"], 3 * SECOND);
    assert_eq!(segments[2]["target_timerange"]["start"], 5 * SECOND);
    assert_eq!(
        segments[0]["extra_material_ids"]["effects"],
        effect_id.to_string()
    );

    // Audio track attributes and per-segment volume survive the dump.
    let audio = &tracks[1];
    assert_eq!(audio["type"], "audio");
    assert_eq!(audio["attribute"], "mute");
    assert_eq!(audio["segments"][0]["volume"], 0.6);

    // Meta-info lists both probed assets with the shared identifiers.
    let draft_materials = meta["draft_materials"].as_array().unwrap();
    assert_eq!(draft_materials.len(), 2);
    assert_eq!(draft_materials[0]["id"], video_id.to_string());
    assert_eq!(draft_materials[0]["width"], 1920);
    assert_eq!(draft_materials[1]["id"], audio_id.to_string());
    assert!(draft_materials[1].get("width").is_none());
}

#[test]
fn speed_change_keeps_timing_coupled_through_export() {
    let mut draft = Draft::new();
    let video_id = draft.register_video(&beach_descriptor());

    let mut segment = video_segment(PrimaryRef::Video(video_id), 0, 5_000_000);
    segment.set_speed(2.0).unwrap();
    let mut track = Track::new(TrackKind::Video);
    track.push_segment(segment).unwrap();
    draft.content_mut().add_track(track);

    let (content, _) = draft.export().unwrap();
    let segment = &content["track_instances"][0]["segments"][0];
    assert_eq!(segment["speed"], 2.0);
    assert_eq!(segment["source_timerange"]["duration"], 5_000_000);
    assert_eq!(segment["target_timerange"]["duration"], 2_500_000);
}

#[test]
fn merge_materials_accumulates_across_calls() {
    let mut draft = Draft::new();
    let texts: Vec<TextMaterial> = ["one", "two", "three"]
        .iter()
        .map(|c| TextMaterial::new(*c))
        .collect();
    for text in &texts {
        draft.content_mut().merge_materials(MaterialBatch {
            texts: vec![text.clone()],
            ..Default::default()
        });
    }

    let stored: Vec<String> = draft
        .content()
        .materials()
        .texts
        .iter()
        .map(|t| t.content.clone())
        .collect();
    assert_eq!(stored, vec!["one", "two", "three"]);
}

#[test]
fn export_rejects_dangling_reference() {
    let mut draft = Draft::new();
    let video_id = draft.register_video(&beach_descriptor());

    let mut segment = video_segment(PrimaryRef::Video(video_id), 0, SECOND);
    let effect = EffectMaterial::new("blur");
    segment.set_extra_materials(cutdraft::model::ExtraMaterialPatch {
        effects: Some(effect.id),
        ..Default::default()
    });
    // The effect was never merged into the pool.
    let mut track = Track::new(TrackKind::Video);
    track.push_segment(segment).unwrap();
    draft.content_mut().add_track(track);

    let err = draft.export().unwrap_err();
    assert_matches!(err, Error::UnknownMaterialReference(_));
}

#[test]
fn clip_patches_flow_into_the_document() {
    let mut draft = Draft::new();
    let video_id = draft.register_video(&beach_descriptor());

    let mut segment = video_segment(PrimaryRef::Video(video_id), 0, SECOND);
    segment.merge_clip(&ClipPatch {
        alpha: Some(0.8),
        transform: Some(Translation { x: 0.1, y: -0.1 }),
        ..Default::default()
    });
    let mut track = Track::new(TrackKind::Video);
    track.push_segment(segment).unwrap();
    draft.content_mut().add_track(track);

    let (content, _) = draft.export().unwrap();
    let clip = &content["track_instances"][0]["segments"][0]["clip"];
    assert_eq!(clip["alpha"], 0.8);
    assert_eq!(clip["transform"]["x"], 0.1);
    assert_eq!(clip["transform"]["y"], -0.1);
    // Unpatched fields keep their defaults.
    assert_eq!(clip["scale"]["x"], 1.0);
    assert_eq!(clip["rotation"], 0.0);
}

#[test]
fn write_draft_directory_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut draft = Draft::new();
    let video_id = draft.register_video(&beach_descriptor());
    let mut track = Track::new(TrackKind::Video);
    track
        .push_segment(video_segment(PrimaryRef::Video(video_id), 0, SECOND))
        .unwrap();
    draft.content_mut().add_track(track);

    let target = dir.path().join("beach_draft");
    draft.write_to(&target).unwrap();

    let content: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(target.join("draft_content.json")).unwrap(),
    )
    .unwrap();
    let meta: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(target.join("draft_meta_info.json")).unwrap(),
    )
    .unwrap();

    assert_eq!(
        content["track_instances"][0]["segments"][0]["material_id"],
        video_id.to_string()
    );
    assert_eq!(meta["draft_materials"][0]["path"], "/clips/beach.mp4");
}
