//! Error types for cutdraft-probe.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing a media file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The asset path does not resolve to a file.
    #[error("asset not found: {}", path.display())]
    AssetNotFound { path: PathBuf },

    /// The underlying inspection tool errored.
    #[error("probe failed: {tool}: {message}")]
    ProbeFailed { tool: String, message: String },

    /// The inspection tool is not installed.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// Failed to parse inspection tool output.
    #[error("failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an asset not found error.
    pub fn asset_not_found(path: impl Into<PathBuf>) -> Self {
        Self::AssetNotFound { path: path.into() }
    }

    /// Create a probe failure error.
    pub fn probe_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProbeFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::asset_not_found("/missing/clip.mp4");
        assert_eq!(err.to_string(), "asset not found: /missing/clip.mp4");

        let err = Error::probe_failed("ffprobe", "exit code 1");
        assert_eq!(err.to_string(), "probe failed: ffprobe: exit code 1");

        let err = Error::tool_not_found("ffprobe");
        assert_eq!(err.to_string(), "tool not found: ffprobe");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }
}
