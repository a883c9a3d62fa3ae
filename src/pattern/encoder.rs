use crate::clock::TimeOfDay;

use super::durations::{
    LEAD_IN, LONG_BLANK, LONG_VIBE, MAX_SEGMENTS, NO_VIBE, SHORT_BLANK, SHORT_VIBE,
};
use super::VibePattern;

/// Minutes past the last 5-minute bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remainder {
    None,
    One,
    Two,
    Three,
    Four,
}

impl Remainder {
    pub fn from_minute(minute: u8) -> Self {
        match minute % 5 {
            0 => Remainder::None,
            1 => Remainder::One,
            2 => Remainder::Two,
            3 => Remainder::Three,
            _ => Remainder::Four,
        }
    }
}

/// Encodes a position on a 12-point dial.
///
/// First pulse picks the half (short = 0..6, long = 6..12), the second picks the
/// quarter within it, and a final micro-digit adds 0, 1 or 2. On the 12 and 6
/// positions the second pulse is dropped. The field always ends with a long blank.
pub fn encode_12(value: u32) -> Vec<u32> {
    let mut field = Vec::with_capacity(6);
    let mut n = value % 12;

    field.push(if n < 6 { SHORT_VIBE } else { LONG_VIBE });
    field.push(SHORT_BLANK);
    n %= 6;

    // 12 and 6 o'clock positions stop after the first pulse
    if n != 0 {
        field.push(if n < 3 { SHORT_VIBE } else { LONG_VIBE });
        field.push(SHORT_BLANK);
    }

    field.push(match n % 3 {
        0 => NO_VIBE,
        1 => SHORT_VIBE,
        _ => LONG_VIBE,
    });
    field.push(LONG_BLANK);
    field
}

/// Sub-5-minute tail. Carries no trailing blank; it ends the pattern.
pub fn encode_remainder(remainder: Remainder) -> Vec<u32> {
    match remainder {
        Remainder::None => Vec::new(),
        Remainder::One => vec![SHORT_VIBE],
        Remainder::Two => vec![SHORT_VIBE, SHORT_BLANK, SHORT_VIBE],
        Remainder::Three => vec![LONG_VIBE],
        Remainder::Four => vec![LONG_VIBE, SHORT_BLANK, SHORT_VIBE],
    }
}

/// Builds the full pattern: lead-in, hour field, then (unless on the hour)
/// the minute-bucket field and the remainder.
pub fn build_pattern(time: TimeOfDay) -> VibePattern {
    let mut segments = Vec::with_capacity(MAX_SEGMENTS);
    segments.extend_from_slice(&LEAD_IN);
    segments.extend(encode_12(u32::from(time.hour12())));

    if time.minute() != 0 {
        segments.extend(encode_12(u32::from(time.minute() / 5)));
        segments.extend(encode_remainder(Remainder::from_minute(time.minute())));
    }

    debug_assert!(
        segments.len() <= MAX_SEGMENTS,
        "pattern for {} has {} segments, capacity is {}",
        time,
        segments.len(),
        MAX_SEGMENTS
    );

    VibePattern::new(segments)
}
