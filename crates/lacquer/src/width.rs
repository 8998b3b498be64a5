//! Escape-aware measurement, slicing, truncation, padding, and
//! alignment.
//!
//! Every function here treats embedded escape sequences as zero-width
//! and keeps them intact. Positions and budgets are in visible
//! characters (code points of the stripped text); [`display_width`]
//! additionally weighs wide characters as two columns for layout math.
//!
//! Slicing is the workhorse: [`visible_slice`] cuts by visible index
//! while carrying any style opened before the cut into the fragment and
//! closing whatever is still open at its end, so fragments are
//! independently printable. Truncation, splitting, and the wrap engine
//! all build on it.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

use crate::ansi::{AnsiToken, RESET, SgrState, is_sgr, tokens};

/// Per-character column width, pluggable so the measurement rules can be
/// swapped without touching call sites.
pub trait CharWidth {
    /// Terminal columns `ch` occupies.
    fn width(&self, ch: char) -> usize;
}

/// Fixed code-point range heuristic: 0 for control characters, 2 for the
/// CJK/Hangul/fullwidth blocks and a curated emoji block, 1 otherwise.
///
/// This is deliberately not a full Unicode East-Asian-Width database;
/// [`UnicodeTables`] provides that.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicWidth;

impl CharWidth for HeuristicWidth {
    fn width(&self, ch: char) -> usize {
        let cp = ch as u32;
        if cp < 32 || (0x7f..0xa0).contains(&cp) {
            return 0;
        }
        if is_wide(cp) { 2 } else { 1 }
    }
}

fn is_wide(cp: u32) -> bool {
    matches!(
        cp,
        0x1100..=0x115f          // Hangul Jamo
        | 0x2600..=0x26ff        // misc symbols
        | 0x2700..=0x27bf        // dingbats
        | 0x2e80..=0xa4cf        // CJK
        | 0xac00..=0xd7a3        // Hangul syllables
        | 0xf900..=0xfaff        // CJK compatibility
        | 0xfe10..=0xfe6f        // CJK forms
        | 0xff00..=0xff60        // fullwidth forms
        | 0xffe0..=0xffe6        // fullwidth signs
        | 0x1f300..=0x1f9ff      // emoji
        | 0x20000..=0x2fffd      // CJK extensions
        | 0x30000..=0x3fffd
    )
}

/// Column width from the `unicode-width` tables (East Asian Width plus
/// emoji presentation); control and combining characters measure 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTables;

impl CharWidth for UnicodeTables {
    fn width(&self, ch: char) -> usize {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

/// Number of visible characters: code points of the text with all escape
/// sequences removed.
///
/// ```rust
/// use lacquer::width::visible_length;
///
/// assert_eq!(visible_length("\x1b[1m\x1b[31mHi\x1b[39m\x1b[22m"), 2);
/// ```
#[must_use]
pub fn visible_length(s: &str) -> usize {
    if !s.contains('\x1b') {
        return s.chars().count();
    }
    tokens(s)
        .map(|token| match token {
            AnsiToken::Text(text) => text.chars().count(),
            AnsiToken::Escape(_) => 0,
        })
        .sum()
}

/// Display columns under the built-in [`HeuristicWidth`] rules.
#[must_use]
pub fn display_width(s: &str) -> usize {
    display_width_with(&HeuristicWidth, s)
}

/// Display columns under a caller-chosen [`CharWidth`] measure.
pub fn display_width_with(measure: &impl CharWidth, s: &str) -> usize {
    tokens(s)
        .map(|token| match token {
            AnsiToken::Text(text) => text.chars().map(|ch| measure.width(ch)).sum(),
            AnsiToken::Escape(_) => 0,
        })
        .sum()
}

/// Whether `s` fits in `width` visible characters.
#[must_use]
pub fn fits_within(s: &str, width: usize) -> bool {
    visible_length(s) <= width
}

/// Display width of each line of `s`, in order.
#[must_use]
pub fn line_widths(s: &str) -> Vec<usize> {
    s.lines().map(display_width).collect()
}

/// Slice by visible character index, keeping the fragment styled the way
/// it appeared in context.
///
/// Escape sequences inside the range are kept in place. Style opened
/// before the range is re-emitted at the front of the fragment, and any
/// style still open at the end of the range is closed with a reset, so
/// the fragment neither loses its color nor leaks it into following
/// text.
///
/// ```rust
/// use lacquer::width::visible_slice;
///
/// let styled = "\x1b[31mHello World\x1b[39m";
/// assert_eq!(visible_slice(styled, 0..5), "\x1b[31mHello\x1b[0m");
/// assert_eq!(visible_slice(styled, 6..11), "\x1b[31mWorld\x1b[0m");
/// ```
#[must_use]
pub fn visible_slice(s: &str, range: Range<usize>) -> String {
    if range.start >= range.end || s.is_empty() {
        return String::new();
    }
    if !s.contains('\x1b') {
        return s
            .chars()
            .skip(range.start)
            .take(range.end - range.start)
            .collect();
    }

    let mut state = SgrState::new();
    let mut out = String::new();
    let mut emitted = false;
    let mut idx = 0usize;

    'scan: for token in tokens(s) {
        match token {
            AnsiToken::Escape(seq) => {
                if idx >= range.end {
                    break 'scan;
                }
                if emitted {
                    out.push_str(seq);
                    state.absorb(seq);
                } else if idx >= range.start && !is_sgr(seq) {
                    // Keep non-style escapes (hyperlinks and the like)
                    // that start inside the range.
                    out.push_str(&state.prefix());
                    emitted = true;
                    out.push_str(seq);
                } else {
                    // Style codes at or before the range start fold into
                    // the carried state and reappear in the prefix.
                    state.absorb(seq);
                }
            }
            AnsiToken::Text(text) => {
                for ch in text.chars() {
                    if idx >= range.end {
                        break 'scan;
                    }
                    if idx >= range.start {
                        if !emitted {
                            out.push_str(&state.prefix());
                            emitted = true;
                        }
                        out.push(ch);
                    }
                    idx += 1;
                }
            }
        }
    }

    if emitted && !state.is_empty() {
        out.push_str(RESET);
    }
    out
}

/// Split at a visible index into two independently printable halves.
#[must_use]
pub fn visible_split_at(s: &str, index: usize) -> (String, String) {
    let visible = visible_length(s);
    (visible_slice(s, 0..index), visible_slice(s, index..visible))
}

/// The default truncation marker.
pub const ELLIPSIS: &str = "…";

/// Truncate to `max` visible characters, marking the cut with `…`.
///
/// ```rust
/// use lacquer::width::truncate;
///
/// assert_eq!(truncate("Hello World", 8), "Hello W…");
/// assert_eq!(truncate("short", 8), "short");
/// ```
#[must_use]
pub fn truncate(s: &str, max: usize) -> String {
    truncate_with(s, max, ELLIPSIS)
}

/// Truncate to `max` visible characters with a custom marker.
///
/// Already-fitting text comes back unchanged, escapes and all. When
/// `max` cannot even hold the marker, the marker itself is sliced down.
#[must_use]
pub fn truncate_with(s: &str, max: usize, ellipsis: &str) -> String {
    let visible = visible_length(s);
    if visible <= max {
        return s.to_string();
    }
    let ellipsis_len = visible_length(ellipsis);
    if max <= ellipsis_len {
        return visible_slice(ellipsis, 0..max);
    }
    let keep = max - ellipsis_len;
    format!("{}{ellipsis}", visible_slice(s, 0..keep))
}

/// Truncate from the front, keeping the tail: `…orld`.
#[must_use]
pub fn truncate_start(s: &str, max: usize) -> String {
    let visible = visible_length(s);
    if visible <= max {
        return s.to_string();
    }
    let ellipsis_len = visible_length(ELLIPSIS);
    if max <= ellipsis_len {
        return visible_slice(ELLIPSIS, 0..max);
    }
    let keep = max - ellipsis_len;
    format!("{ELLIPSIS}{}", visible_slice(s, visible - keep..visible))
}

/// Truncate out the middle, keeping both ends: `Hel…rld`. The left side
/// gets the extra character when the budget is odd.
#[must_use]
pub fn truncate_middle(s: &str, max: usize) -> String {
    let visible = visible_length(s);
    if visible <= max {
        return s.to_string();
    }
    let ellipsis_len = visible_length(ELLIPSIS);
    if max <= ellipsis_len {
        return visible_slice(ELLIPSIS, 0..max);
    }
    let keep = max - ellipsis_len;
    let left = keep.div_ceil(2);
    let right = keep / 2;
    format!(
        "{}{ELLIPSIS}{}",
        visible_slice(s, 0..left),
        visible_slice(s, visible - right..visible)
    )
}

/// Horizontal placement for padding and alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Pad on the right with spaces to `width` visible characters.
#[must_use]
pub fn pad_end(s: &str, width: usize) -> String {
    pad_fill(s, width, Alignment::Left, " ")
}

/// Pad on the left with spaces to `width` visible characters.
#[must_use]
pub fn pad_start(s: &str, width: usize) -> String {
    pad_fill(s, width, Alignment::Right, " ")
}

/// Pad both sides with spaces; an odd leftover column goes to the right.
#[must_use]
pub fn pad_both(s: &str, width: usize) -> String {
    pad_fill(s, width, Alignment::Center, " ")
}

/// Place `s` in a field of `width` visible characters.
#[must_use]
pub fn align(s: &str, width: usize, alignment: Alignment) -> String {
    pad_fill(s, width, alignment, " ")
}

/// The padding core: every pad and align variant is this one
/// width-delta computation with a different placement.
///
/// `pad` may be longer than one character (or styled); it is repeated
/// and sliced to fill exactly the missing columns. Text already at or
/// over `width` comes back unchanged.
#[must_use]
pub fn pad_fill(s: &str, width: usize, alignment: Alignment, pad: &str) -> String {
    let visible = visible_length(s);
    if visible >= width {
        return s.to_string();
    }
    let missing = width - visible;
    match alignment {
        Alignment::Left => format!("{s}{}", fill(pad, missing)),
        Alignment::Right => format!("{}{s}", fill(pad, missing)),
        Alignment::Center => {
            let left = missing / 2;
            let right = missing - left;
            format!("{}{s}{}", fill(pad, left), fill(pad, right))
        }
    }
}

/// `len` visible characters of repeated `pad`; empty pad falls back to
/// spaces.
fn fill(pad: &str, len: usize) -> String {
    if len == 0 {
        return String::new();
    }
    let unit = visible_length(pad);
    if unit == 0 {
        return " ".repeat(len);
    }
    let mut out = pad.repeat(len / unit);
    let remainder = len % unit;
    if remainder > 0 {
        out.push_str(&visible_slice(pad, 0..remainder));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_length_ignores_escapes() {
        assert_eq!(visible_length("Hello"), 5);
        assert_eq!(visible_length("\x1b[1m\x1b[31mHi\x1b[39m\x1b[22m"), 2);
        assert_eq!(visible_length(""), 0);
        assert_eq!(visible_length("\x1b[31m\x1b[39m"), 0);
        // Code points, not bytes.
        assert_eq!(visible_length("héllo"), 5);
    }

    #[test]
    fn display_width_counts_wide_chars() {
        assert_eq!(display_width("Hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("\x1b[31m你好\x1b[39m"), 4);
        assert_eq!(display_width("한글"), 4);
        assert_eq!(display_width("🔥"), 2);
        assert_eq!(display_width("a\tb"), 2, "controls are zero-width");
    }

    #[test]
    fn line_widths_measures_each_line() {
        assert_eq!(line_widths("ab\n你好\n\ncdef"), [2, 4, 0, 4]);
        assert_eq!(line_widths("plain"), [5]);
        assert_eq!(line_widths(""), [0usize; 0]);
    }

    #[test]
    fn width_measures_disagree_on_combining_marks() {
        // Decomposed e + combining acute: the heuristic sees two
        // printables, the Unicode tables see one column.
        let decomposed = "e\u{301}";
        assert_eq!(display_width_with(&HeuristicWidth, decomposed), 2);
        assert_eq!(display_width_with(&UnicodeTables, decomposed), 1);
        assert_eq!(display_width_with(&UnicodeTables, "你"), 2);
    }

    #[test]
    fn slice_plain_text_by_char_index() {
        assert_eq!(visible_slice("Hello World", 0..5), "Hello");
        assert_eq!(visible_slice("Hello World", 6..11), "World");
        assert_eq!(visible_slice("héllo", 1..3), "él");
        assert_eq!(visible_slice("Hi", 0..10), "Hi");
        assert_eq!(visible_slice("Hi", 3..5), "");
        assert_eq!(visible_slice("Hi", 1..1), "");
    }

    #[test]
    fn slice_keeps_fragment_styled_and_closed() {
        let styled = "\x1b[31mHello World\x1b[39m";
        assert_eq!(visible_slice(styled, 0..5), "\x1b[31mHello\x1b[0m");
        assert_eq!(visible_slice(styled, 6..11), "\x1b[31mWorld\x1b[0m");
        assert_eq!(visible_slice(styled, 0..11), "\x1b[31mHello World\x1b[0m");
    }

    #[test]
    fn slice_carries_only_live_state() {
        // The green opened before the range was closed again before it;
        // only bold may be carried into the fragment.
        let s = "\x1b[32mab\x1b[39m\x1b[1mcd\x1b[22m ef";
        assert_eq!(visible_slice(s, 2..4), "\x1b[1mcd\x1b[0m");
        assert_eq!(visible_slice(s, 4..7), " ef");
    }

    #[test]
    fn slice_emits_escape_starting_exactly_at_range() {
        assert_eq!(visible_slice("ab\x1b[1mcd", 2..4), "\x1b[1mcd\x1b[0m");
        assert_eq!(visible_slice("ab\x1b[1mcd\x1b[22m", 0..2), "ab");
    }

    #[test]
    fn slice_with_reset_inside_prefix_tracking() {
        let s = "\x1b[31mred\x1b[0mplain";
        assert_eq!(visible_slice(s, 3..8), "plain");
    }

    #[test]
    fn split_at_gives_two_printable_halves() {
        let (left, right) = visible_split_at("\x1b[4mlinked text\x1b[24m", 6);
        assert_eq!(left, "\x1b[4mlinked\x1b[0m");
        assert_eq!(right, "\x1b[4m text\x1b[0m");
        assert_eq!(visible_length(&left) + visible_length(&right), 11);
    }

    #[test]
    fn truncate_end() {
        assert_eq!(truncate("Hello World", 8), "Hello W…");
        assert_eq!(truncate("Hello", 8), "Hello");
        assert_eq!(truncate("Hello", 5), "Hello");
        assert_eq!(truncate("Hello", 1), "…");
        assert_eq!(truncate("Hello", 0), "");
    }

    #[test]
    fn truncate_closes_styles_before_the_marker() {
        let styled = "\x1b[31mHello World\x1b[39m";
        assert_eq!(truncate(styled, 8), "\x1b[31mHello W\x1b[0m…");
        assert_eq!(truncate(styled, 11), styled, "fitting text is untouched");
    }

    #[test]
    fn truncate_start_and_middle() {
        assert_eq!(truncate_start("Hello World", 8), "…o World");
        assert_eq!(truncate_middle("Hello World", 8), "Hell…rld");
        assert_eq!(truncate_middle("Hello World", 7), "Hel…rld");
        assert_eq!(truncate_start("Hello", 5), "Hello");
    }

    #[test]
    fn truncate_with_custom_marker() {
        assert_eq!(truncate_with("Hello World", 8, "..."), "Hello...");
        assert_eq!(truncate_with("Hello World", 2, "..."), "..");
        assert_eq!(truncate_with("Hello World", 8, ""), "Hello Wo");
    }

    #[test]
    fn pads_measure_visible_length() {
        assert_eq!(pad_end("Hi", 5), "Hi   ");
        assert_eq!(pad_start("Hi", 5), "   Hi");
        assert_eq!(pad_both("Hi", 6), "  Hi  ");
        assert_eq!(pad_both("Hi", 7), "  Hi   ", "odd column goes right");
        assert_eq!(pad_end("\x1b[31mHi\x1b[39m", 4), "\x1b[31mHi\x1b[39m  ");
        assert_eq!(pad_end("toolong", 3), "toolong");
    }

    #[test]
    fn pad_fill_repeats_and_slices_multichar_pads() {
        assert_eq!(pad_fill("x", 6, Alignment::Left, "ab"), "xababa");
        assert_eq!(pad_fill("x", 4, Alignment::Right, "-="), "-=-x");
        assert_eq!(pad_fill("x", 3, Alignment::Left, ""), "x  ");
    }

    #[test]
    fn align_dispatches() {
        assert_eq!(align("Hi", 6, Alignment::Left), "Hi    ");
        assert_eq!(align("Hi", 6, Alignment::Right), "    Hi");
        assert_eq!(align("Hi", 6, Alignment::Center), "  Hi  ");
        assert_eq!(align("wide", 2, Alignment::Center), "wide");
    }

    #[test]
    fn fits_within_bounds() {
        assert!(fits_within("Hello", 5));
        assert!(fits_within("\x1b[1mHello\x1b[22m", 5));
        assert!(!fits_within("Hello!", 5));
    }
}
