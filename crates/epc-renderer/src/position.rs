//! Rating to vertical pointer position mapping.
//!
//! The template's rating bar is split into seven bands. Within a band the
//! pointer moves linearly over 58.5px; each band has its own anchor row.

/// Highest rating the bar can show. Larger ratings are drawn at this one.
pub const MAX_RATING: i32 = 100;

/// Vertical travel of a pointer across one band, in pixels.
const BAND_TRAVEL: f64 = 58.5;

/// Offset from a band's anchor row to the top of the pointer glyph.
const GLYPH_LIFT: f64 = 30.0;

/// One linear segment of the position mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSegment {
    /// First rating of the segment (inclusive).
    pub start: i32,
    /// First rating of the next segment (exclusive). `None` for the top band.
    pub end: Option<i32>,
    /// Anchor row of the band on the template.
    pub base: f64,
    /// Number of ratings the travel is spread over.
    pub width: f64,
}

pub static POSITION_SEGMENTS: [PositionSegment; 7] = [
    PositionSegment { start: 1, end: Some(21), base: 582.0, width: 20.0 },
    PositionSegment { start: 21, end: Some(39), base: 518.0, width: 17.0 },
    PositionSegment { start: 39, end: Some(55), base: 453.0, width: 15.0 },
    PositionSegment { start: 55, end: Some(69), base: 389.0, width: 13.0 },
    PositionSegment { start: 69, end: Some(81), base: 325.0, width: 11.0 },
    PositionSegment { start: 81, end: Some(92), base: 261.0, width: 10.0 },
    PositionSegment { start: 92, end: None, base: 197.0, width: 10.0 },
];

impl PositionSegment {
    pub fn contains(&self, value: i32) -> bool {
        value >= self.start && self.end.map_or(true, |end| value < end)
    }

    fn offset(&self, value: i32) -> i32 {
        let steps = (value - self.start) as f64;
        // `as` truncates toward zero.
        (self.base - steps * BAND_TRAVEL / self.width - GLYPH_LIFT) as i32
    }
}

/// Top edge, in template pixels, at which the pointer for `value` is drawn.
///
/// Returns `None` for ratings below 1, which have no place on the bar.
pub fn vertical_offset(value: i32) -> Option<i32> {
    let segment = POSITION_SEGMENTS.iter().find(|s| s.contains(value))?;
    Some(segment.offset(value.min(MAX_RATING)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_starts() {
        assert_eq!(vertical_offset(1), Some(552));
        assert_eq!(vertical_offset(21), Some(488));
        assert_eq!(vertical_offset(92), Some(167));
    }

    #[test]
    fn test_clamps_above_max() {
        assert_eq!(vertical_offset(100), Some(120));
        assert_eq!(vertical_offset(101), Some(120));
        assert_eq!(vertical_offset(i32::MAX), Some(120));
    }

    #[test]
    fn test_below_one_is_undefined() {
        assert_eq!(vertical_offset(0), None);
        assert_eq!(vertical_offset(-5), None);
    }

    #[test]
    fn test_segments_are_contiguous() {
        for pair in POSITION_SEGMENTS.windows(2) {
            assert_eq!(pair[0].end, Some(pair[1].start));
        }
    }
}
