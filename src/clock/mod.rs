//! Time-of-day and the host clock the announcer reads from.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveTime, Timelike};
use std::env::VarError;
use std::fmt;
use std::str::FromStr;

/// Env var that pins the clock to a fixed `HH:MM`.
pub const FIXED_TIME_ENV: &str = "VIBE_CLOCK_AT";

const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// Hour (0-23) and minute (0-59) of the local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            bail!("hour out of range: {hour}");
        }
        if minute > 59 {
            bail!("minute out of range: {minute}");
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// 12-hour dial position; noon and midnight both give 0.
    pub fn hour12(&self) -> u8 {
        self.hour % 12
    }
}

impl TimeOfDay {
    fn from_timelike(time: &impl Timelike) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .with_context(|| format!("expected HH:MM, got {s:?}"))?;
        Ok(Self::from_timelike(&time))
    }
}

/// Host clock.
pub trait TimeSource {
    fn now(&self) -> TimeOfDay;
}

/// System local time via chrono.
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_timelike(&Local::now())
    }
}

/// Always reports the same time.
pub struct FixedClock(pub TimeOfDay);

impl TimeSource for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}

/// Picks the clock for this run: a [`FixedClock`] when `VIBE_CLOCK_AT` is set, else local time.
pub fn from_env() -> Result<Box<dyn TimeSource>> {
    clock_for(std::env::var(FIXED_TIME_ENV))
}

fn clock_for(fixed: Result<String, VarError>) -> Result<Box<dyn TimeSource>> {
    match fixed {
        Ok(value) => {
            let time: TimeOfDay = value
                .parse()
                .with_context(|| format!("invalid {FIXED_TIME_ENV}"))?;
            log_warn!("clock pinned to {} by {}", time, FIXED_TIME_ENV);
            Ok(Box::new(FixedClock(time)))
        }
        Err(VarError::NotPresent) => Ok(Box::new(LocalClock)),
        Err(VarError::NotUnicode(value)) => {
            bail!("invalid {FIXED_TIME_ENV}: {value:?} is not valid unicode")
        }
    }
}
