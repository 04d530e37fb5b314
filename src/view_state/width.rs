//! Terminal display width of characters and strings.
//!
//! This is a fixed classification table rather than a full East Asian Width
//! implementation. Every layout primitive in this crate measures with it, so
//! padding and truncation agree with each other on every line.

/// Width-0 code point ranges (inclusive).
const ZERO_WIDTH: &[(u32, u32)] = &[
    (0xFE00, 0xFE0F), // variation selectors
    (0x200B, 0x200F), // zero-width spaces, directional marks
    (0x2028, 0x202F), // line/paragraph separators, embedding controls
    (0x2060, 0x206F), // word joiner and invisible operators
];

/// Width-2 code point ranges (inclusive), checked after [`ZERO_WIDTH`].
const DOUBLE_WIDTH: &[(u32, u32)] = &[
    // Emoji and symbols
    (0x1F300, 0x1F9FF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
    (0x23E9, 0x23FF),
    (0x1F600, 0x1F64F),
    (0x1F680, 0x1F6FF),
    // CJK and full-width forms
    (0x1100, 0x11FF),
    (0x3000, 0x9FFF),
    (0xAC00, 0xD7AF),
    (0xF900, 0xFAFF),
    (0xFE10, 0xFE1F),
    (0xFE30, 0xFE6F),
    (0xFF00, 0xFF60),
    (0xFFE0, 0xFFE6),
];

/// Last code point of the Basic Multilingual Plane.
const BMP_END: u32 = 0xFFFF;

fn in_ranges(code: u32, ranges: &[(u32, u32)]) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&code))
}

/// Number of terminal columns a single character occupies: 0, 1 or 2.
///
/// Classification order (first match wins):
/// 1. zero-width controls and selectors → 0
/// 2. emoji, symbol and CJK/full-width blocks, and anything outside the BMP → 2
/// 3. everything else → 1
pub fn char_width(ch: char) -> usize {
    let code = u32::from(ch);
    if in_ranges(code, ZERO_WIDTH) {
        0
    } else if in_ranges(code, DOUBLE_WIDTH) || code > BMP_END {
        2
    } else {
        1
    }
}

/// Total display width of a string, summed per code point.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}
