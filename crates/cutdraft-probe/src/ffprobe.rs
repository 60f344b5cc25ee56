//! FFprobe-based media probing.

use crate::types::MediaDescriptor;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: String,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// Probe a media file using ffprobe.
pub async fn probe_with_ffprobe(path: &Path) -> Result<MediaDescriptor> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found("ffprobe")
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::probe_failed("ffprobe", stderr.to_string()));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("ffprobe", format!("invalid UTF-8: {}", e)))?;

    let ff_output: FfprobeOutput = serde_json::from_str(&json_str)?;

    parse_ffprobe_output(path, ff_output)
}

fn parse_ffprobe_output(path: &Path, output: FfprobeOutput) -> Result<MediaDescriptor> {
    let duration = output
        .format
        .duration
        .as_deref()
        .and_then(parse_duration_ns)
        .ok_or_else(|| Error::parse_error("ffprobe", "no container duration reported"))?;

    let video = output.streams.iter().find(|s| s.codec_type == "video");

    Ok(MediaDescriptor {
        path: path.to_path_buf(),
        duration,
        width: video.and_then(|s| s.width),
        height: video.and_then(|s| s.height),
        codec: video.and_then(|s| s.codec_name.clone()),
    })
}

fn parse_duration_ns(secs: &str) -> Option<i64> {
    let secs: f64 = secs.parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some((secs * NANOS_PER_SECOND).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_duration_ns() {
        assert_eq!(parse_duration_ns("5.0"), Some(5_000_000_000));
        assert_eq!(parse_duration_ns("0.001"), Some(1_000_000));
        assert_eq!(parse_duration_ns("-1"), None);
        assert_eq!(parse_duration_ns("garbage"), None);
    }

    #[test]
    fn test_parse_ffprobe_output_video() {
        let raw = r#"{
            "format": { "duration": "30.5" },
            "streams": [
                { "codec_type": "audio", "codec_name": "aac" },
                { "codec_type": "video", "codec_name": "h264", "width": 1920, "height": 1080 }
            ]
        }"#;
        let output: FfprobeOutput = serde_json::from_str(raw).unwrap();
        let desc = parse_ffprobe_output(&PathBuf::from("/clips/a.mp4"), output).unwrap();
        assert_eq!(desc.duration, 30_500_000_000);
        assert_eq!(desc.width, Some(1920));
        assert_eq!(desc.height, Some(1080));
        assert_eq!(desc.codec.as_deref(), Some("h264"));
    }

    #[test]
    fn test_parse_ffprobe_output_audio_only() {
        let raw = r#"{
            "format": { "duration": "12.0" },
            "streams": [ { "codec_type": "audio", "codec_name": "mp3" } ]
        }"#;
        let output: FfprobeOutput = serde_json::from_str(raw).unwrap();
        let desc = parse_ffprobe_output(&PathBuf::from("/clips/a.mp3"), output).unwrap();
        assert_eq!(desc.duration, 12_000_000_000);
        assert!(!desc.has_video());
    }

    #[test]
    fn test_parse_ffprobe_output_missing_duration() {
        let raw = r#"{ "format": {}, "streams": [] }"#;
        let output: FfprobeOutput = serde_json::from_str(raw).unwrap();
        let err = parse_ffprobe_output(&PathBuf::from("/clips/a.mp4"), output).unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }
}
