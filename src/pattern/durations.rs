//! Segment durations in milliseconds.

/// Placeholder pulse: keeps the vibrate/pause alternation without buzzing.
pub const NO_VIBE: u32 = 0;
pub const SHORT_VIBE: u32 = 50;
pub const LONG_VIBE: u32 = 200;

/// Gap between pulses of the same field.
pub const SHORT_BLANK: u32 = 400;
/// Gap after a field, and the silence appended after the final pulse.
pub const LONG_BLANK: u32 = 1000;

/// Every pattern opens with a silent pulse and a short gap.
pub const LEAD_IN: [u32; 2] = [NO_VIBE, SHORT_BLANK];

/// Upper bound on segments per pattern:
/// lead-in (2) + hour field (6) + minute field (6) + remainder (3).
pub const MAX_SEGMENTS: usize = 17;
