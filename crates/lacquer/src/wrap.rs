//! Width-constrained word wrap that survives embedded styling.
//!
//! The wrapper walks each line by visible character, preferring to break
//! after the last break character that fits and cutting mid-word only
//! when no break character is in range (or always, in hard mode). Escape
//! sequences never count against the width.
//!
//! Open styles are tracked across the whole input: every emitted line is
//! prefixed with whatever style is active when it starts and closed with
//! a reset when style is still open at its end, so callers can reorder,
//! pad, or print lines individually without colors bleeding between
//! them.
//!
//! ```rust
//! use lacquer::wrap::wrap;
//!
//! let text = "The quick brown fox jumps over the lazy dog";
//! assert_eq!(
//!     wrap(text, 10),
//!     "The quick\nbrown fox\njumps over\nthe lazy\ndog",
//! );
//! ```

use tracing::trace;

use crate::ansi::{AnsiToken, RESET, SgrState, has_ansi, strip_ansi, tokens};
use crate::width::visible_length;

/// Wrapping behavior knobs. Start from [`WrapOptions::new`] and chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    width: usize,
    hard: bool,
    trim: bool,
    preserve_newlines: bool,
    break_chars: Vec<char>,
    carry_style: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 80,
            hard: false,
            trim: true,
            preserve_newlines: true,
            break_chars: vec![' ', '\t', '-'],
            carry_style: true,
        }
    }
}

impl WrapOptions {
    /// Options with the given width and the defaults otherwise: soft
    /// breaks, trimming on, newlines preserved, style carried.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            ..Self::default()
        }
    }

    /// Maximum visible characters per line; clamped to at least 1.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Cut at exactly the width boundary instead of looking for a break
    /// character first.
    #[must_use]
    pub fn hard(mut self, hard: bool) -> Self {
        self.hard = hard;
        self
    }

    /// Strip whitespace at the edges of every wrapped line (on by
    /// default).
    #[must_use]
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Keep source newlines as line breaks (on by default); when off,
    /// newlines are treated as plain spaces and the text reflows as one
    /// paragraph.
    #[must_use]
    pub fn preserve_newlines(mut self, preserve: bool) -> Self {
        self.preserve_newlines = preserve;
        self
    }

    /// Characters a soft break may follow. Defaults to space, tab, and
    /// hyphen.
    #[must_use]
    pub fn break_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.break_chars = chars.into_iter().collect();
        self
    }

    /// Re-open active styles on continuation lines and close them at
    /// line ends (on by default). When off, all escape sequences are
    /// stripped before wrapping.
    #[must_use]
    pub fn carry_style(mut self, carry: bool) -> Self {
        self.carry_style = carry;
        self
    }
}

/// Wrap to `width` visible characters with default options, joining the
/// lines with `\n`.
#[must_use]
pub fn wrap(s: &str, width: usize) -> String {
    wrap_with(s, &WrapOptions::new(width)).join("\n")
}

/// Wrap with explicit options, returning the individual lines.
///
/// Empty input yields a single empty line. Each returned line is
/// independently printable: style active at a line boundary is closed
/// with a reset and re-opened on the next line.
///
/// ```rust
/// use lacquer::wrap::{WrapOptions, wrap_with};
///
/// let lines = wrap_with("\x1b[31mRed text here\x1b[39m", &WrapOptions::new(8));
/// assert_eq!(lines, ["\x1b[31mRed text\x1b[0m", "\x1b[31mhere\x1b[39m"]);
/// ```
#[must_use]
pub fn wrap_with(s: &str, options: &WrapOptions) -> Vec<String> {
    if s.is_empty() {
        return vec![String::new()];
    }

    let stripped;
    let mut source = s;
    if !options.carry_style && has_ansi(source) {
        stripped = strip_ansi(source);
        source = &stripped;
    }
    let flattened;
    if !options.preserve_newlines {
        flattened = source.replace('\n', " ");
        source = &flattened;
    }

    let mut state = SgrState::new();
    let mut out = Vec::new();
    for line in source.split('\n') {
        wrap_line(line, options, &mut state, &mut out);
    }
    out
}

fn wrap_line(line: &str, options: &WrapOptions, state: &mut SgrState, out: &mut Vec<String>) {
    let mut remaining = if options.trim {
        trim_visible(line)
    } else {
        line.to_string()
    };

    if visible_length(&remaining) == 0 {
        // Blank line: emit it bare, but let its escapes advance the
        // running state.
        absorb_escapes(&remaining, state);
        out.push(String::new());
        return;
    }

    loop {
        if visible_length(&remaining) <= options.width {
            out.push(finish_line(&remaining, state, options));
            return;
        }
        let break_at = find_break(&remaining, options);
        let (segment, rest) = split_visible(&remaining, break_at);
        out.push(finish_line(&segment, state, options));
        remaining = if options.trim {
            trim_start_visible(&rest)
        } else {
            rest
        };
        if visible_length(&remaining) == 0 {
            absorb_escapes(&remaining, state);
            return;
        }
    }
}

/// Turn a raw segment into an emitted line: style prefix, edge trim,
/// closing reset.
fn finish_line(raw: &str, state: &mut SgrState, options: &WrapOptions) -> String {
    let prefix = if options.carry_style && !state.is_empty() {
        state.prefix()
    } else {
        String::new()
    };
    absorb_escapes(raw, state);
    let body = if options.trim {
        trim_end_visible(raw)
    } else {
        raw.to_string()
    };

    let mut line = String::with_capacity(prefix.len() + body.len() + RESET.len());
    line.push_str(&prefix);
    line.push_str(&body);
    if options.carry_style && !state.is_empty() {
        line.push_str(RESET);
    }
    line
}

/// Visible index to split at: one past the last usable break character,
/// or the width boundary when there is none (and always, in hard mode).
/// A break character is usable while its line still fits; whitespace
/// sitting exactly on the boundary also qualifies when trimming, since
/// the trim drops it anyway.
fn find_break(s: &str, options: &WrapOptions) -> usize {
    if options.hard {
        return options.width;
    }

    let mut best = None;
    let mut idx = 0usize;
    'scan: for token in tokens(s) {
        let AnsiToken::Text(text) = token else {
            continue;
        };
        for ch in text.chars() {
            if idx > options.width {
                break 'scan;
            }
            let usable = idx < options.width || (options.trim && ch.is_whitespace());
            if usable && options.break_chars.contains(&ch) {
                best = Some(idx + 1);
            }
            idx += 1;
        }
    }

    match best {
        Some(at) if at < visible_length(s) => at,
        _ => {
            trace!(width = options.width, "no break character in range, cutting word");
            options.width
        }
    }
}

/// Raw cut at a visible index. Escapes sitting exactly on the boundary
/// go to the right half so the left half ends on its last visible
/// character.
fn split_visible(s: &str, at: usize) -> (String, String) {
    let mut left = String::new();
    let mut right = String::new();
    let mut idx = 0usize;
    for token in tokens(s) {
        match token {
            AnsiToken::Escape(seq) => {
                if idx < at {
                    left.push_str(seq);
                } else {
                    right.push_str(seq);
                }
            }
            AnsiToken::Text(text) => {
                for ch in text.chars() {
                    if idx < at {
                        left.push(ch);
                    } else {
                        right.push(ch);
                    }
                    idx += 1;
                }
            }
        }
    }
    (left, right)
}

fn absorb_escapes(s: &str, state: &mut SgrState) {
    for token in tokens(s) {
        if let AnsiToken::Escape(seq) = token {
            state.absorb(seq);
        }
    }
}

fn trim_visible(s: &str) -> String {
    trim_end_visible(&trim_start_visible(s))
}

/// Drop leading whitespace characters while keeping escape sequences.
fn trim_start_visible(s: &str) -> String {
    let mut out = String::new();
    let mut trimming = true;
    for token in tokens(s) {
        match token {
            AnsiToken::Escape(seq) => out.push_str(seq),
            AnsiToken::Text(text) => {
                for ch in text.chars() {
                    if trimming && ch.is_whitespace() {
                        continue;
                    }
                    trimming = false;
                    out.push(ch);
                }
            }
        }
    }
    out
}

/// Drop trailing whitespace characters while keeping escape sequences.
fn trim_end_visible(s: &str) -> String {
    let mut out = String::new();
    let mut pending_ws = String::new();
    for token in tokens(s) {
        match token {
            AnsiToken::Escape(seq) => out.push_str(seq),
            AnsiToken::Text(text) => {
                for ch in text.chars() {
                    if ch.is_whitespace() {
                        pending_ws.push(ch);
                    } else {
                        out.push_str(&pending_ws);
                        pending_ws.clear();
                        out.push(ch);
                    }
                }
            }
        }
    }
    out
}

/// Prefix every non-empty line with `prefix`.
#[must_use]
pub fn indent(s: &str, prefix: &str) -> String {
    s.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove the longest common leading run of spaces and tabs shared by
/// all non-blank lines.
#[must_use]
pub fn dedent(s: &str) -> String {
    let common = s
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);
    if common == 0 {
        return s.to_string();
    }
    s.split('\n')
        .map(|line| line.get(common..).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}
