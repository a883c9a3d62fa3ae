use anyhow::{Context, Result};
use std::time::Duration;
use tokio::time;

use crate::clock::{TimeOfDay, TimeSource};
use crate::haptics::HapticDriver;
use crate::pattern::{build_pattern, VibePattern};

const ENABLE_LOGS: bool = true;

use crate::log_info;

/// What was played on one run.
#[derive(Debug, Clone)]
pub struct Announcement {
    pub time: TimeOfDay,
    pub pattern: VibePattern,
    pub playback: Duration,
}

/// Reads the clock, enqueues the pattern once, then waits until playback has finished.
pub async fn announce(clock: &dyn TimeSource, driver: &dyn HapticDriver) -> Result<Announcement> {
    let time = clock.now();
    let pattern = build_pattern(time);
    let playback = pattern.playback_duration();

    log_info!("{} -> {} ({} segments)", time, pattern, pattern.len());

    driver
        .enqueue(&pattern)
        .with_context(|| format!("failed to enqueue pattern for {time}"))?;

    // Wait out the pattern plus the trailing long blank
    time::sleep(playback).await;

    log_info!("playback finished after {} ms", playback.as_millis());

    Ok(Announcement {
        time,
        pattern,
        playback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use anyhow::bail;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDriver {
        played: Mutex<Vec<VibePattern>>,
    }

    impl HapticDriver for RecordingDriver {
        fn enqueue(&self, pattern: &VibePattern) -> Result<()> {
            self.played.lock().unwrap().push(pattern.clone());
            Ok(())
        }
    }

    struct BrokenDriver;

    impl HapticDriver for BrokenDriver {
        fn enqueue(&self, _pattern: &VibePattern) -> Result<()> {
            bail!("motor offline")
        }
    }

    /// Paused clock: elapsed time is the sleep itself, give or take the timer's 1 ms tick.
    fn assert_slept(start: time::Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(elapsed >= expected, "slept {elapsed:?}, expected {expected:?}");
        assert!(
            elapsed <= expected + Duration::from_millis(1),
            "slept {elapsed:?}, expected {expected:?}"
        );
    }

    fn clock_at(hour: u8, minute: u8) -> FixedClock {
        FixedClock(TimeOfDay::new(hour, minute).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_enqueues_once_and_waits_for_playback() {
        let driver = RecordingDriver::default();
        let start = time::Instant::now();

        let announcement = announce(&clock_at(1, 54), &driver).await.unwrap();

        let played = driver.played.lock().unwrap();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0], announcement.pattern);

        let expected_ms: u64 = announcement
            .pattern
            .durations()
            .iter()
            .map(|&d| u64::from(d))
            .sum::<u64>()
            + 1000;
        assert_eq!(announcement.playback, Duration::from_millis(expected_ms));
        assert_slept(start, Duration::from_millis(expected_ms));
    }

    #[tokio::test(start_paused = true)]
    async fn test_on_the_hour() {
        let driver = RecordingDriver::default();
        let start = time::Instant::now();
        let announcement = announce(&clock_at(6, 0), &driver).await.unwrap();

        assert_eq!(announcement.pattern.durations(), &[0, 400, 200, 400, 0, 1000]);
        assert_eq!(announcement.playback, Duration::from_millis(3000));
        assert_slept(start, Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_failure_is_reported() {
        let result = announce(&clock_at(12, 30), &BrokenDriver).await;
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("motor offline"));
        assert!(format!("{err:#}").contains("12:30"));
    }
}
