//! Width-aware text layout primitives.
//!
//! All functions measure with [`char_width`](super::width::char_width) and
//! never split a code point. They are pure and allocate fresh strings.

use super::width::{char_width, display_width};

/// Marker appended by [`truncate_with_ellipsis`].
pub const ELLIPSIS: &str = "...";

const ELLIPSIS_WIDTH: usize = 3;

/// Byte length of the longest prefix of `s` whose width stays within `max_width`.
fn prefix_len_within(s: &str, max_width: usize) -> usize {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        let w = char_width(ch);
        if width + w > max_width {
            return idx;
        }
        width += w;
    }
    s.len()
}

/// Longest prefix of `s` that fits in `max_width` columns. No ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    s[..prefix_len_within(s, max_width)].to_string()
}

/// Truncate `s` to `max_width` columns, ending in `"..."` when anything was cut.
///
/// Three columns are reserved for the marker, so a string is returned
/// unchanged only if it fits within `max_width - 3`.
///
/// ```
/// use curaq_tui::view_state::text::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello...");
/// assert_eq!(truncate_with_ellipsis("Hello", 8), "Hello");
/// ```
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    let budget = max_width.saturating_sub(ELLIPSIS_WIDTH);
    let keep = prefix_len_within(s, budget);
    if keep == s.len() {
        return s.to_string();
    }
    let mut out = String::with_capacity(keep + ELLIPSIS.len());
    out.push_str(&s[..keep]);
    out.push_str(ELLIPSIS);
    out
}

/// Right-pad `s` with spaces to `target_width` columns.
///
/// Strings already at or beyond the target are returned unchanged.
pub fn pad_to_width(s: &str, target_width: usize) -> String {
    let pad = target_width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Exactly `width` columns: truncated, then padded.
pub fn fit_to_width(s: &str, width: usize) -> String {
    pad_to_width(&truncate_to_width(s, width), width)
}

/// Greedy character-level wrap.
///
/// Always yields at least one line. Joining the lines gives back `s`.
pub fn wrap_to_width(s: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in s.chars() {
        let w = char_width(ch);
        if current_width + w > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Convert raw multi-line text into fixed-width physical lines.
///
/// Each source line becomes one or more lines of exactly `max_width` columns.
/// Empty source lines become a single blank line. The result is meant to be
/// computed once and cached; rendering only slices it.
pub fn process_text_content(text: &str, max_width: usize) -> Vec<String> {
    let mut processed = Vec::new();

    for line in text.split('\n') {
        if line.is_empty() {
            processed.push(" ".repeat(max_width));
            continue;
        }

        let mut remaining = line;
        while !remaining.is_empty() {
            let mut take = prefix_len_within(remaining, max_width);
            if take == 0 {
                // A single character wider than the whole line.
                take = remaining.chars().next().map_or(remaining.len(), char::len_utf8);
            }
            processed.push(pad_to_width(&remaining[..take], max_width));
            remaining = &remaining[take..];
        }
    }

    processed
}
