//! Reading notation: `S` for a short pulse, `L` for a long one, a space between fields.
//!
//! 1:54 reads `SSS LLS LS`: hour 1, bucket 10 (50 min), then +4.

use super::durations::{LONG_BLANK, SHORT_VIBE};
use super::{SegmentKind, VibePattern};

pub fn render(pattern: &VibePattern) -> String {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();

    for (kind, ms) in pattern.segments() {
        match kind {
            SegmentKind::Vibrate if ms == 0 => {}
            SegmentKind::Vibrate if ms <= SHORT_VIBE => current.push('S'),
            SegmentKind::Vibrate => current.push('L'),
            SegmentKind::Pause if ms >= LONG_BLANK => {
                if !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                }
            }
            SegmentKind::Pause => {}
        }
    }

    if !current.is_empty() {
        fields.push(current);
    }

    fields.join(" ")
}

#[cfg(test)]
mod tests {
    use crate::clock::TimeOfDay;
    use crate::pattern::build_pattern;

    fn read(hour: u8, minute: u8) -> String {
        build_pattern(TimeOfDay::new(hour, minute).unwrap()).notation()
    }

    #[test]
    fn test_header_examples() {
        assert_eq!(read(1, 54), "SSS LLS LS");
        assert_eq!(read(0, 0), "S");
        assert_eq!(read(6, 0), "L");
        assert_eq!(read(11, 0), "LLL");
    }

    #[test]
    fn test_minute_buckets() {
        assert_eq!(read(0, 5), "S SSS");
        assert_eq!(read(0, 30), "S L");
        assert_eq!(read(0, 55), "S LLL");
    }

    #[test]
    fn test_remainders() {
        assert_eq!(read(0, 1), "S S S");
        assert_eq!(read(0, 2), "S S SS");
        assert_eq!(read(0, 3), "S S L");
        assert_eq!(read(0, 4), "S S LS");
    }

    #[test]
    fn test_display_matches_notation() {
        let pattern = build_pattern(TimeOfDay::new(13, 54).unwrap());
        assert_eq!(pattern.to_string(), "SSS LLS LS");
    }
}
