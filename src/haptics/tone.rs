use rodio::Source;
use std::f32::consts::PI;
use std::time::Duration;

use crate::pattern::{SegmentKind, VibePattern};

const SAMPLE_RATE: u32 = 44100;

/// Audible rendering of a vibe pattern: a sine tone for each pulse, silence for each pause.
/// Finite; ends after the last segment.
pub struct PatternTone {
    /// (audible, sample count) per segment
    segments: Vec<(bool, usize)>,
    index: usize,
    remaining: usize,
    freq: f32,
    amplitude: f32,
    sample_rate: u32,
    num_sample: usize,
    total_ms: u64,
}

impl PatternTone {
    pub fn new(pattern: &VibePattern, freq: f32, amplitude: f32) -> Self {
        let segments: Vec<(bool, usize)> = pattern
            .segments()
            .map(|(kind, ms)| {
                let audible = kind == SegmentKind::Vibrate && ms > 0;
                (audible, samples_for(ms, SAMPLE_RATE))
            })
            .collect();
        let remaining = segments.first().map(|&(_, n)| n).unwrap_or(0);

        Self {
            segments,
            index: 0,
            remaining,
            freq,
            amplitude: amplitude.clamp(0.0, 1.0),
            sample_rate: SAMPLE_RATE,
            num_sample: 0,
            total_ms: pattern.total_ms(),
        }
    }

    #[cfg(test)]
    fn total_samples(&self) -> usize {
        self.segments.iter().map(|&(_, n)| n).sum()
    }
}

fn samples_for(ms: u32, sample_rate: u32) -> usize {
    (u64::from(ms) * u64::from(sample_rate) / 1000) as usize
}

impl Iterator for PatternTone {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        // Skip exhausted and zero-length segments
        while self.remaining == 0 {
            self.index += 1;
            let &(_, n) = self.segments.get(self.index)?;
            self.remaining = n;
        }
        self.remaining -= 1;

        let (audible, _) = self.segments[self.index];
        self.num_sample = self.num_sample.wrapping_add(1);

        if !audible {
            return Some(0.0);
        }

        let t = self.num_sample as f32 / self.sample_rate as f32;
        Some((2.0 * PI * self.freq * t).sin() * self.amplitude)
    }
}

impl Source for PatternTone {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1 // Mono
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_millis(self.total_ms))
    }
}
