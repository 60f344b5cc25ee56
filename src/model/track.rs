//! Tracks: ordered, kind-fixed sequences of segments.

use crate::error::{Error, Result};
use crate::model::entity::{Entity, IdPolicy};
use crate::model::ids::{SegmentId, TrackId};
use crate::model::segment::Segment;
use serde::{Deserialize, Serialize};

/// The kind of content a track carries, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video,
    Audio,
    Text,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Visibility/lock/mute state of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackAttribute {
    #[default]
    None,
    Mute,
    Hidden,
    MuteHidden,
    Locked,
    MuteLocked,
    HiddenLocked,
    All,
}

/// An ordered sequence of segments of one fixed kind.
///
/// Segments are exclusively owned by their track. Mutations that admit a
/// segment check that its primary material kind is compatible with the
/// track kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    id: TrackId,
    kind: TrackKind,
    attribute: TrackAttribute,
    flag: i64,
    segments: Vec<Segment>,
}

impl Track {
    /// Create an empty track of the given kind.
    #[must_use]
    pub fn new(kind: TrackKind) -> Self {
        Self {
            id: TrackId::new(),
            kind,
            attribute: TrackAttribute::None,
            flag: 0,
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> TrackId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    #[must_use]
    pub fn attribute(&self) -> TrackAttribute {
        self.attribute
    }

    pub fn set_attribute(&mut self, attribute: TrackAttribute) {
        self.attribute = attribute;
    }

    #[must_use]
    pub fn flag(&self) -> i64 {
        self.flag
    }

    pub fn set_flag(&mut self, flag: i64) {
        self.flag = flag;
    }

    /// The track's segments, in timeline order of insertion.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append a segment to the end of the sequence.
    pub fn push_segment(&mut self, segment: Segment) -> Result<()> {
        self.check_kind(&segment)?;
        self.segments.push(segment);
        Ok(())
    }

    /// Replace the whole segment sequence.
    pub fn set_segments(&mut self, segments: Vec<Segment>) -> Result<()> {
        for segment in &segments {
            self.check_kind(segment)?;
        }
        self.segments = segments;
        Ok(())
    }

    /// Recompute every segment's target start so the sequence becomes
    /// contiguous from zero: sort by current start, keep relative order and
    /// durations. Idempotent on an already-contiguous sequence.
    pub fn remove_empty_track_space(&mut self) {
        self.segments
            .sort_by_key(|s| s.target_timerange().start);
        let mut cursor = 0;
        for segment in &mut self.segments {
            if segment.target_timerange().start != cursor {
                tracing::debug!(
                    segment = %segment.id(),
                    from = segment.target_timerange().start,
                    to = cursor,
                    "compacting track gap"
                );
                segment.set_target_start(cursor);
            }
            cursor += segment.target_timerange().duration;
        }
    }

    /// Whether a segment with this identifier belongs to the track.
    #[must_use]
    pub fn contains_segment(&self, id: SegmentId) -> bool {
        self.segments.iter().any(|s| s.id() == id)
    }

    /// Look up a segment by identifier.
    pub fn get_segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id() == id)
    }

    pub(crate) fn get_segment_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|s| s.id() == id)
    }

    /// Replace the segment with `id` by the two halves of a split,
    /// preserving track order.
    pub(crate) fn splice_split(
        &mut self,
        id: SegmentId,
        left: Segment,
        right: Segment,
    ) -> Result<()> {
        let pos = self
            .segments
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| Error::unknown_material(id))?;
        self.segments.splice(pos..=pos, [left, right]);
        Ok(())
    }

    fn check_kind(&self, segment: &Segment) -> Result<()> {
        if let Some(material) = segment.material() {
            if material.kind() != self.kind {
                return Err(Error::TrackKindMismatch {
                    track: self.kind,
                    segment: material.kind(),
                });
            }
        }
        Ok(())
    }
}

impl Entity for Track {
    type Id = TrackId;

    fn id(&self) -> TrackId {
        self.id
    }

    fn duplicate(&self, policy: IdPolicy) -> Self {
        let mut copy = self.clone();
        if policy == IdPolicy::NewId {
            copy.id = TrackId::new();
            // Owned segments become distinct entities alongside their track.
            for segment in &mut copy.segments {
                *segment = segment.duplicate(IdPolicy::NewId);
            }
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::MaterialId;
    use crate::model::material::PrimaryRef;
    use crate::model::timerange::Timerange;
    use assert_matches::assert_matches;

    fn video_segment(start: i64, duration: i64) -> Segment {
        let mut segment = Segment::new();
        segment.set_material(PrimaryRef::Video(MaterialId::new()));
        segment
            .set_target_timerange(Timerange::new(start, duration))
            .unwrap();
        segment
            .set_source_timerange(Timerange::new(0, duration))
            .unwrap();
        segment
    }

    #[test]
    fn test_push_segment_appends() {
        let mut track = Track::new(TrackKind::Video);
        let a = video_segment(0, 5_000_000);
        let b = video_segment(5_000_000, 5_000_000);
        let (a_id, b_id) = (a.id(), b.id());

        track.push_segment(a).unwrap();
        track.push_segment(b).unwrap();

        let ids: Vec<SegmentId> = track.segments().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![a_id, b_id]);
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let mut track = Track::new(TrackKind::Audio);
        let err = track.push_segment(video_segment(0, 1_000_000)).unwrap_err();
        assert_matches!(
            err,
            Error::TrackKindMismatch {
                track: TrackKind::Audio,
                segment: TrackKind::Video,
            }
        );
        assert!(track.segments().is_empty());
    }

    #[test]
    fn test_segment_without_material_is_admitted() {
        let mut track = Track::new(TrackKind::Text);
        track.push_segment(Segment::new()).unwrap();
        assert_eq!(track.segments().len(), 1);
    }

    #[test]
    fn test_remove_empty_track_space_compacts_gaps() {
        let mut track = Track::new(TrackKind::Video);
        track.push_segment(video_segment(0, 5_000_000)).unwrap();
        track
            .push_segment(video_segment(5_000_000, 5_000_000))
            .unwrap();
        track
            .push_segment(video_segment(12_000_000, 5_000_000))
            .unwrap();

        track.remove_empty_track_space();

        let windows: Vec<Timerange> = track
            .segments()
            .iter()
            .map(|s| s.target_timerange())
            .collect();
        assert_eq!(
            windows,
            vec![
                Timerange::new(0, 5_000_000),
                Timerange::new(5_000_000, 5_000_000),
                Timerange::new(10_000_000, 5_000_000),
            ]
        );
    }

    #[test]
    fn test_remove_empty_track_space_idempotent() {
        let mut track = Track::new(TrackKind::Video);
        track.push_segment(video_segment(3_000_000, 2_000_000)).unwrap();
        track.push_segment(video_segment(9_000_000, 4_000_000)).unwrap();

        track.remove_empty_track_space();
        let first_pass: Vec<Timerange> = track
            .segments()
            .iter()
            .map(|s| s.target_timerange())
            .collect();

        track.remove_empty_track_space();
        let second_pass: Vec<Timerange> = track
            .segments()
            .iter()
            .map(|s| s.target_timerange())
            .collect();

        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass[0], Timerange::new(0, 2_000_000));
        assert_eq!(first_pass[1], Timerange::new(2_000_000, 4_000_000));
    }

    #[test]
    fn test_compaction_sorts_by_start_before_packing() {
        let mut track = Track::new(TrackKind::Video);
        let late = video_segment(20_000_000, 1_000_000);
        let early = video_segment(2_000_000, 3_000_000);
        let (late_id, early_id) = (late.id(), early.id());
        track.push_segment(late).unwrap();
        track.push_segment(early).unwrap();

        track.remove_empty_track_space();

        assert_eq!(track.segments()[0].id(), early_id);
        assert_eq!(track.segments()[1].id(), late_id);
        assert_eq!(
            track.segments()[0].target_timerange(),
            Timerange::new(0, 3_000_000)
        );
        assert_eq!(
            track.segments()[1].target_timerange(),
            Timerange::new(3_000_000, 1_000_000)
        );
    }

    #[test]
    fn test_duplicate_new_id_regenerates_segment_ids() {
        let mut track = Track::new(TrackKind::Video);
        track.push_segment(video_segment(0, 1_000_000)).unwrap();
        let original_segment_id = track.segments()[0].id();

        let copy = track.duplicate(IdPolicy::NewId);
        assert_ne!(copy.id(), track.id());
        assert_ne!(copy.segments()[0].id(), original_segment_id);

        let same = track.duplicate(IdPolicy::KeepId);
        assert_eq!(same.id(), track.id());
        assert_eq!(same.segments()[0].id(), original_segment_id);
    }
}
