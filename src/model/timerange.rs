//! Nanosecond timerange windows.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A `{start, duration}` window in nanoseconds.
///
/// Segments carry two of these: the source window read from the referenced
/// material, and the target window occupied on the track timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Timerange {
    pub start: i64,
    pub duration: i64,
}

impl Timerange {
    /// Create a timerange without validation.
    #[must_use]
    pub const fn new(start: i64, duration: i64) -> Self {
        Self { start, duration }
    }

    /// Create a timerange, failing with [`Error::InvalidTimerange`] when
    /// either field is negative.
    pub fn validated(start: i64, duration: i64) -> Result<Self> {
        let range = Self { start, duration };
        range.validate()?;
        Ok(range)
    }

    /// Check the `start >= 0 && duration >= 0` invariant.
    pub fn validate(&self) -> Result<()> {
        if self.start < 0 || self.duration < 0 {
            return Err(Error::InvalidTimerange {
                start: self.start,
                duration: self.duration,
            });
        }
        Ok(())
    }

    /// Exclusive end of the window.
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.start + self.duration
    }

    /// Whether `ns` lies in the half-open window `[start, end)`.
    #[must_use]
    pub const fn contains(&self, ns: i64) -> bool {
        ns >= self.start && ns < self.end()
    }
}

impl std::fmt::Display for Timerange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}
