pub mod audio;
pub mod tone;

use anyhow::Result;
use log::debug;

use audio::AudioHapticDriver;

use crate::pattern::VibePattern;
use crate::settings::{DriverKind, HapticSettings};

const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Host vibration facility. `enqueue` hands the pattern over and returns
/// immediately; playback runs on its own.
pub trait HapticDriver {
    fn enqueue(&self, pattern: &VibePattern) -> Result<()>;
}

/// Writes patterns to the log instead of a motor.
pub struct LogHapticDriver;

impl HapticDriver for LogHapticDriver {
    fn enqueue(&self, pattern: &VibePattern) -> Result<()> {
        let durations = serde_json::to_string(pattern)?;
        log_info!("vibe {} {}", pattern, durations);
        for (i, (kind, ms)) in pattern.segments().enumerate() {
            debug!("segment {i}: {kind:?} {ms} ms");
        }
        Ok(())
    }
}

pub fn driver_for(settings: &HapticSettings) -> Box<dyn HapticDriver> {
    match settings.driver {
        DriverKind::Audio => Box::new(AudioHapticDriver::new(settings.tone_hz, settings.volume)),
        DriverKind::Log => Box::new(LogHapticDriver),
    }
}
