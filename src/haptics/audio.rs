use anyhow::{anyhow, Result};
use rodio::{OutputStream, Sink};
use std::sync::{
    mpsc::{self, Sender},
    Mutex,
};
use std::thread;

use super::tone::PatternTone;
use super::HapticDriver;
use crate::pattern::VibePattern;

const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info};

enum EngineCommand {
    Play(PatternTone),
}

/// Plays patterns through the default audio output, for hosts without a vibration motor.
pub struct AudioHapticDriver {
    tx: Mutex<Option<Sender<EngineCommand>>>,
    tone_hz: f32,
    amplitude: f32,
}

impl AudioHapticDriver {
    pub fn new(tone_hz: f32, amplitude: f32) -> Self {
        Self {
            tx: Mutex::new(None),
            tone_hz,
            amplitude,
        }
    }

    fn ensure_thread(&self) -> Result<Sender<EngineCommand>> {
        let mut guard = self
            .tx
            .lock()
            .map_err(|_| anyhow!("haptic engine lock poisoned"))?;
        if let Some(tx) = guard.as_ref() {
            return Ok(tx.clone());
        }

        let (tx, rx) = mpsc::channel::<EngineCommand>();

        // Output stream and sink are not Send; they live on this thread only
        thread::Builder::new()
            .name("haptic-engine".to_string())
            .spawn(move || {
                let mut _stream: Option<OutputStream> = None;
                let mut sink: Option<Sink> = None;

                fn ensure_sink(
                    stream: &mut Option<OutputStream>,
                    sink: &mut Option<Sink>,
                ) -> Result<(), String> {
                    if sink.is_none() {
                        let (s, handle) = OutputStream::try_default()
                            .map_err(|e| format!("Failed to create audio output stream: {}", e))?;
                        let new_sink = Sink::try_new(&handle)
                            .map_err(|e| format!("Failed to create audio sink: {}", e))?;
                        *stream = Some(s);
                        *sink = Some(new_sink);
                    }
                    Ok(())
                }

                while let Ok(cmd) = rx.recv() {
                    match cmd {
                        EngineCommand::Play(tone) => {
                            if let Err(err) = ensure_sink(&mut _stream, &mut sink) {
                                log_error!("haptic engine unavailable: {}", err);
                                continue;
                            }
                            if let Some(ref s) = sink {
                                s.append(tone);
                                s.play();
                            }
                        }
                    }
                }

                log_info!("haptic engine shutting down");
            })
            .map_err(|e| anyhow!("failed to spawn haptic engine: {e}"))?;

        *guard = Some(tx.clone());
        Ok(tx)
    }
}

impl HapticDriver for AudioHapticDriver {
    fn enqueue(&self, pattern: &VibePattern) -> Result<()> {
        let tx = self.ensure_thread()?;
        let tone = PatternTone::new(pattern, self.tone_hz, self.amplitude);
        log_info!(
            "enqueueing {} segments ({} ms) on audio output at {} Hz",
            pattern.len(),
            pattern.total_ms(),
            self.tone_hz
        );
        tx.send(EngineCommand::Play(tone))
            .map_err(|e| anyhow!("haptic engine gone: {e}"))
    }
}
