pub mod announcer;
pub mod clock;
pub mod haptics;
pub mod pattern;
pub mod settings;
mod utils;

pub use announcer::{announce, Announcement};
pub use clock::{FixedClock, LocalClock, TimeOfDay, TimeSource};
pub use haptics::{HapticDriver, LogHapticDriver};
pub use pattern::{build_pattern, VibePattern};

use anyhow::{Context, Result};
use log::info;
use settings::SettingsStore;

/// One invocation: read the time, play it, wait for the pattern to finish.
pub fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var, Info when unset)
    let rust_log = std::env::var("RUST_LOG").ok();
    utils::logging::builder(rust_log.as_deref(), settings::debug_mode()).init();

    info!("vibe-clock starting up...");

    let store = SettingsStore::from_env()?;
    if let Some(path) = store.path() {
        info!("settings loaded from {}", path.display());
    }
    let haptic_settings = store.haptics();

    let clock = clock::from_env()?;

    let driver = haptics::driver_for(&haptic_settings);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build runtime")?;

    let announcement = runtime.block_on(announce(clock.as_ref(), driver.as_ref()))?;

    info!(
        "announced {} as {} via {:?}",
        announcement.time, announcement.pattern, haptic_settings.driver
    );

    Ok(())
}
