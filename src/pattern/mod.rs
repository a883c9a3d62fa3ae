pub mod durations;
pub mod encoder;
pub mod notation;

pub use encoder::{build_pattern, encode_12, encode_remainder, Remainder};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use durations::LONG_BLANK;

/// Whether a segment drives the motor or leaves it idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Vibrate,
    Pause,
}

/// Ordered segment durations (ms), alternating vibrate and pause starting with vibrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VibePattern {
    segments: Vec<u32>,
}

impl VibePattern {
    pub fn new(segments: Vec<u32>) -> Self {
        Self { segments }
    }

    pub fn durations(&self) -> &[u32] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = (SegmentKind, u32)> + '_ {
        self.segments.iter().enumerate().map(|(i, &ms)| {
            let kind = if i % 2 == 0 {
                SegmentKind::Vibrate
            } else {
                SegmentKind::Pause
            };
            (kind, ms)
        })
    }

    /// Sum of all segments.
    pub fn total_ms(&self) -> u64 {
        self.segments.iter().map(|&ms| u64::from(ms)).sum()
    }

    /// How long the caller waits after enqueueing: every segment plus a trailing long blank.
    pub fn playback_ms(&self) -> u64 {
        self.total_ms() + u64::from(LONG_BLANK)
    }

    pub fn playback_duration(&self) -> Duration {
        Duration::from_millis(self.playback_ms())
    }

    pub fn notation(&self) -> String {
        notation::render(self)
    }
}

impl fmt::Display for VibePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
