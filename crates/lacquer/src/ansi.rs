//! SGR escape sequences: the style code table, sequence builders, and an
//! escape-aware lexer.
//!
//! Everything the crate emits goes through the tables here. Named
//! modifier and basic-color sequences are `&'static str` literals;
//! parametric truecolor / 256-color sequences are formatted on demand.
//! Scanning for measurement, slicing, and wrapping goes through
//! [`tokens`], which understands CSI, OSC, and bare escapes (ESC plus
//! one following character) and consumes malformed input conservatively
//! instead of panicking.

use bitflags::bitflags;

use crate::color::Rgb;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";
/// Close any foreground color (SGR 39).
pub const CLOSE_FG: &str = "\x1b[39m";
/// Close any background color (SGR 49).
pub const CLOSE_BG: &str = "\x1b[49m";

/// A named SGR text attribute with a paired open/close code.
///
/// Close codes are shared where SGR defines them that way: bold and dim
/// both close with 22, underline and double underline with 24, the blink
/// pair with 25, framed and encircled with 54.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Bold,
    Dim,
    Italic,
    Underline,
    DoubleUnderline,
    Blink,
    RapidBlink,
    Inverse,
    Hidden,
    Strikethrough,
    Framed,
    Encircled,
    Overline,
}

impl Modifier {
    /// Every modifier, in open-code order.
    pub const ALL: [Modifier; 13] = [
        Modifier::Bold,
        Modifier::Dim,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Blink,
        Modifier::RapidBlink,
        Modifier::Inverse,
        Modifier::Hidden,
        Modifier::Strikethrough,
        Modifier::DoubleUnderline,
        Modifier::Framed,
        Modifier::Encircled,
        Modifier::Overline,
    ];

    #[must_use]
    pub const fn open_code(self) -> u8 {
        match self {
            Modifier::Bold => 1,
            Modifier::Dim => 2,
            Modifier::Italic => 3,
            Modifier::Underline => 4,
            Modifier::Blink => 5,
            Modifier::RapidBlink => 6,
            Modifier::Inverse => 7,
            Modifier::Hidden => 8,
            Modifier::Strikethrough => 9,
            Modifier::DoubleUnderline => 21,
            Modifier::Framed => 51,
            Modifier::Encircled => 52,
            Modifier::Overline => 53,
        }
    }

    #[must_use]
    pub const fn close_code(self) -> u8 {
        match self {
            Modifier::Bold | Modifier::Dim => 22,
            Modifier::Italic => 23,
            Modifier::Underline | Modifier::DoubleUnderline => 24,
            Modifier::Blink | Modifier::RapidBlink => 25,
            Modifier::Inverse => 27,
            Modifier::Hidden => 28,
            Modifier::Strikethrough => 29,
            Modifier::Framed | Modifier::Encircled => 54,
            Modifier::Overline => 55,
        }
    }

    /// The escape sequence that enables this attribute.
    #[must_use]
    pub const fn open(self) -> &'static str {
        match self {
            Modifier::Bold => "\x1b[1m",
            Modifier::Dim => "\x1b[2m",
            Modifier::Italic => "\x1b[3m",
            Modifier::Underline => "\x1b[4m",
            Modifier::Blink => "\x1b[5m",
            Modifier::RapidBlink => "\x1b[6m",
            Modifier::Inverse => "\x1b[7m",
            Modifier::Hidden => "\x1b[8m",
            Modifier::Strikethrough => "\x1b[9m",
            Modifier::DoubleUnderline => "\x1b[21m",
            Modifier::Framed => "\x1b[51m",
            Modifier::Encircled => "\x1b[52m",
            Modifier::Overline => "\x1b[53m",
        }
    }

    /// The escape sequence that disables this attribute.
    #[must_use]
    pub const fn close(self) -> &'static str {
        match self {
            Modifier::Bold | Modifier::Dim => "\x1b[22m",
            Modifier::Italic => "\x1b[23m",
            Modifier::Underline | Modifier::DoubleUnderline => "\x1b[24m",
            Modifier::Blink | Modifier::RapidBlink => "\x1b[25m",
            Modifier::Inverse => "\x1b[27m",
            Modifier::Hidden => "\x1b[28m",
            Modifier::Strikethrough => "\x1b[29m",
            Modifier::Framed | Modifier::Encircled => "\x1b[54m",
            Modifier::Overline => "\x1b[55m",
        }
    }

    const fn flag(self) -> Modifiers {
        match self {
            Modifier::Bold => Modifiers::BOLD,
            Modifier::Dim => Modifiers::DIM,
            Modifier::Italic => Modifiers::ITALIC,
            Modifier::Underline => Modifiers::UNDERLINE,
            Modifier::Blink => Modifiers::BLINK,
            Modifier::RapidBlink => Modifiers::RAPID_BLINK,
            Modifier::Inverse => Modifiers::INVERSE,
            Modifier::Hidden => Modifiers::HIDDEN,
            Modifier::Strikethrough => Modifiers::STRIKETHROUGH,
            Modifier::DoubleUnderline => Modifiers::DOUBLE_UNDERLINE,
            Modifier::Framed => Modifiers::FRAMED,
            Modifier::Encircled => Modifiers::ENCIRCLED,
            Modifier::Overline => Modifiers::OVERLINE,
        }
    }
}

/// One of the 16 basic ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl BasicColor {
    /// All 16 colors in palette order.
    pub const ALL: [BasicColor; 16] = [
        BasicColor::Black,
        BasicColor::Red,
        BasicColor::Green,
        BasicColor::Yellow,
        BasicColor::Blue,
        BasicColor::Magenta,
        BasicColor::Cyan,
        BasicColor::White,
        BasicColor::BrightBlack,
        BasicColor::BrightRed,
        BasicColor::BrightGreen,
        BasicColor::BrightYellow,
        BasicColor::BrightBlue,
        BasicColor::BrightMagenta,
        BasicColor::BrightCyan,
        BasicColor::BrightWhite,
    ];

    /// Palette index 0–15.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_index(index: u8) -> Option<BasicColor> {
        if index < 16 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// SGR foreground code: 30–37 for normal, 90–97 for bright.
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        let i = self.index();
        if i < 8 { 30 + i } else { 82 + i }
    }

    /// SGR background code: 40–47 for normal, 100–107 for bright.
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        let i = self.index();
        if i < 8 { 40 + i } else { 92 + i }
    }

    /// Canonical xterm RGB value of this palette entry.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        crate::color::ANSI_PALETTE[self.index() as usize]
    }

    /// Foreground escape sequence. Closes with [`CLOSE_FG`].
    #[must_use]
    pub const fn fg(self) -> &'static str {
        match self {
            BasicColor::Black => "\x1b[30m",
            BasicColor::Red => "\x1b[31m",
            BasicColor::Green => "\x1b[32m",
            BasicColor::Yellow => "\x1b[33m",
            BasicColor::Blue => "\x1b[34m",
            BasicColor::Magenta => "\x1b[35m",
            BasicColor::Cyan => "\x1b[36m",
            BasicColor::White => "\x1b[37m",
            BasicColor::BrightBlack => "\x1b[90m",
            BasicColor::BrightRed => "\x1b[91m",
            BasicColor::BrightGreen => "\x1b[92m",
            BasicColor::BrightYellow => "\x1b[93m",
            BasicColor::BrightBlue => "\x1b[94m",
            BasicColor::BrightMagenta => "\x1b[95m",
            BasicColor::BrightCyan => "\x1b[96m",
            BasicColor::BrightWhite => "\x1b[97m",
        }
    }

    /// Background escape sequence. Closes with [`CLOSE_BG`].
    #[must_use]
    pub const fn bg(self) -> &'static str {
        match self {
            BasicColor::Black => "\x1b[40m",
            BasicColor::Red => "\x1b[41m",
            BasicColor::Green => "\x1b[42m",
            BasicColor::Yellow => "\x1b[43m",
            BasicColor::Blue => "\x1b[44m",
            BasicColor::Magenta => "\x1b[45m",
            BasicColor::Cyan => "\x1b[46m",
            BasicColor::White => "\x1b[47m",
            BasicColor::BrightBlack => "\x1b[100m",
            BasicColor::BrightRed => "\x1b[101m",
            BasicColor::BrightGreen => "\x1b[102m",
            BasicColor::BrightYellow => "\x1b[103m",
            BasicColor::BrightBlue => "\x1b[104m",
            BasicColor::BrightMagenta => "\x1b[105m",
            BasicColor::BrightCyan => "\x1b[106m",
            BasicColor::BrightWhite => "\x1b[107m",
        }
    }
}

/// 24-bit foreground sequence (`38;2;R;G;B`).
#[must_use]
pub fn fg_rgb(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// 24-bit background sequence (`48;2;R;G;B`).
#[must_use]
pub fn bg_rgb(color: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Indexed 256-color foreground sequence (`38;5;N`).
#[must_use]
pub fn fg_indexed(index: u8) -> String {
    format!("\x1b[38;5;{index}m")
}

/// Indexed 256-color background sequence (`48;5;N`).
#[must_use]
pub fn bg_indexed(index: u8) -> String {
    format!("\x1b[48;5;{index}m")
}

/// OSC 8 hyperlink wrapping `text`, terminated with string terminators.
#[must_use]
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

/// One lexed piece of a possibly-styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiToken<'a> {
    /// A run of plain text containing no escapes.
    Text(&'a str),
    /// One complete escape sequence, including the leading `\x1b`.
    Escape(&'a str),
}

/// Lex `s` into alternating text runs and escape sequences.
pub fn tokens(s: &str) -> Tokens<'_> {
    Tokens { src: s, pos: 0 }
}

/// Iterator returned by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = AnsiToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.src[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let bytes = rest.as_bytes();
        if bytes[0] == 0x1b {
            let len = escape_len(rest);
            self.pos += len;
            return Some(AnsiToken::Escape(&rest[..len]));
        }
        let end = bytes
            .iter()
            .position(|&b| b == 0x1b)
            .unwrap_or(bytes.len());
        self.pos += end;
        Some(AnsiToken::Text(&rest[..end]))
    }
}

/// Byte length of the escape sequence at the start of `rest`.
///
/// CSI runs to a final byte in `@..=~`; OSC runs to BEL or ST; anything
/// else is the escape plus one whole following character. Every stop is
/// an ASCII byte or a char edge, so the returned length always lands on
/// a char boundary.
fn escape_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    match bytes.get(1) {
        None => 1,
        Some(b'[') => {
            let mut i = 2;
            while i < bytes.len() {
                let b = bytes[i];
                if (0x40..=0x7e).contains(&b) {
                    return i + 1;
                }
                if !(0x20..=0x3f).contains(&b) {
                    // Malformed: stop before the stray byte.
                    return i;
                }
                i += 1;
            }
            bytes.len()
        }
        Some(b']') => {
            let mut i = 2;
            while i < bytes.len() {
                match bytes[i] {
                    0x07 => return i + 1,
                    0x1b if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
                    _ => i += 1,
                }
            }
            bytes.len()
        }
        // Bare escape: ESC plus the next character, taken whole so the
        // token never splits a multibyte char.
        Some(_) => 1 + rest[1..].chars().next().map_or(0, char::len_utf8),
    }
}

/// Remove every escape sequence, leaving plain text.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    if !s.contains('\x1b') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    for token in tokens(s) {
        if let AnsiToken::Text(text) = token {
            out.push_str(text);
        }
    }
    out
}

/// Whether `s` contains any escape sequence.
#[must_use]
pub fn has_ansi(s: &str) -> bool {
    s.contains('\x1b')
}

pub(crate) fn is_sgr(seq: &str) -> bool {
    seq.starts_with(CSI) && seq.ends_with('m')
}

bitflags! {
    /// Modifier attributes tracked while scanning SGR parameters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u16 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const RAPID_BLINK = 1 << 5;
        const INVERSE = 1 << 6;
        const HIDDEN = 1 << 7;
        const STRIKETHROUGH = 1 << 8;
        const DOUBLE_UNDERLINE = 1 << 9;
        const FRAMED = 1 << 10;
        const ENCIRCLED = 1 << 11;
        const OVERLINE = 1 << 12;
    }
}

/// Live SGR attribute state accumulated while scanning styled text.
///
/// Tracks the last-seen foreground and background sequences and the set
/// of active modifiers. A reset (SGR 0) clears all three channels; a
/// channel's close code (39, 49, 22–29, 54, 55) clears just that channel,
/// so a fully closed span leaves the state empty. [`SgrState::prefix`]
/// re-emits the state at the start of a new line or fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SgrState {
    fg: Option<String>,
    bg: Option<String>,
    modifiers: Modifiers,
}

impl SgrState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.modifiers.is_empty()
    }

    pub fn clear(&mut self) {
        self.fg = None;
        self.bg = None;
        self.modifiers = Modifiers::empty();
    }

    /// Fold one escape sequence into the state. Non-SGR sequences are
    /// ignored.
    pub fn absorb(&mut self, seq: &str) {
        if !is_sgr(seq) {
            return;
        }
        let params = &seq[CSI.len()..seq.len() - 1];
        let mut iter = params.split(';');
        while let Some(param) = iter.next() {
            match param {
                "" | "0" => self.clear(),
                "39" => self.fg = None,
                "49" => self.bg = None,
                "38" | "48" => {
                    let is_bg = param == "48";
                    let mut body = String::from(param);
                    match iter.next() {
                        Some("5") => {
                            body.push_str(";5");
                            if let Some(n) = iter.next() {
                                body.push(';');
                                body.push_str(n);
                            }
                        }
                        Some("2") => {
                            body.push_str(";2");
                            for _ in 0..3 {
                                if let Some(v) = iter.next() {
                                    body.push(';');
                                    body.push_str(v);
                                }
                            }
                        }
                        Some(other) => {
                            body.push(';');
                            body.push_str(other);
                        }
                        None => {}
                    }
                    let sequence = format!("{CSI}{body}m");
                    if is_bg {
                        self.bg = Some(sequence);
                    } else {
                        self.fg = Some(sequence);
                    }
                }
                _ => match param.parse::<u8>() {
                    Ok(n @ (30..=37 | 90..=97)) => self.fg = Some(format!("{CSI}{n}m")),
                    Ok(n @ (40..=47 | 100..=107)) => self.bg = Some(format!("{CSI}{n}m")),
                    Ok(n) => self.apply_code(n),
                    Err(_) => {}
                },
            }
        }
    }

    fn apply_code(&mut self, code: u8) {
        match code {
            1 => self.modifiers |= Modifiers::BOLD,
            2 => self.modifiers |= Modifiers::DIM,
            3 => self.modifiers |= Modifiers::ITALIC,
            4 => self.modifiers |= Modifiers::UNDERLINE,
            5 => self.modifiers |= Modifiers::BLINK,
            6 => self.modifiers |= Modifiers::RAPID_BLINK,
            7 => self.modifiers |= Modifiers::INVERSE,
            8 => self.modifiers |= Modifiers::HIDDEN,
            9 => self.modifiers |= Modifiers::STRIKETHROUGH,
            21 => self.modifiers |= Modifiers::DOUBLE_UNDERLINE,
            51 => self.modifiers |= Modifiers::FRAMED,
            52 => self.modifiers |= Modifiers::ENCIRCLED,
            53 => self.modifiers |= Modifiers::OVERLINE,
            22 => self.modifiers.remove(Modifiers::BOLD | Modifiers::DIM),
            23 => self.modifiers.remove(Modifiers::ITALIC),
            24 => self
                .modifiers
                .remove(Modifiers::UNDERLINE | Modifiers::DOUBLE_UNDERLINE),
            25 => self
                .modifiers
                .remove(Modifiers::BLINK | Modifiers::RAPID_BLINK),
            27 => self.modifiers.remove(Modifiers::INVERSE),
            28 => self.modifiers.remove(Modifiers::HIDDEN),
            29 => self.modifiers.remove(Modifiers::STRIKETHROUGH),
            54 => self.modifiers.remove(Modifiers::FRAMED | Modifiers::ENCIRCLED),
            55 => self.modifiers.remove(Modifiers::OVERLINE),
            _ => {}
        }
    }

    /// Sequences that reproduce this state at the start of a line:
    /// modifiers in table order, then foreground, then background.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut out = String::new();
        for modifier in Modifier::ALL {
            if self.modifiers.contains(modifier.flag()) {
                out.push_str(modifier.open());
            }
        }
        if let Some(fg) = &self.fg {
            out.push_str(fg);
        }
        if let Some(bg) = &self.bg {
            out.push_str(bg);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_text_and_escapes() {
        let toks: Vec<_> = tokens("\x1b[31mred\x1b[39m plain").collect();
        assert_eq!(
            toks,
            vec![
                AnsiToken::Escape("\x1b[31m"),
                AnsiToken::Text("red"),
                AnsiToken::Escape("\x1b[39m"),
                AnsiToken::Text(" plain"),
            ]
        );
    }

    #[test]
    fn lexes_osc_hyperlink() {
        let link = hyperlink("https://example.com", "here");
        let toks: Vec<_> = tokens(&link).collect();
        assert_eq!(
            toks,
            vec![
                AnsiToken::Escape("\x1b]8;;https://example.com\x1b\\"),
                AnsiToken::Text("here"),
                AnsiToken::Escape("\x1b]8;;\x1b\\"),
            ]
        );
    }

    #[test]
    fn lexes_osc_with_bel_terminator() {
        let toks: Vec<_> = tokens("\x1b]0;title\x07after").collect();
        assert_eq!(
            toks,
            vec![
                AnsiToken::Escape("\x1b]0;title\x07"),
                AnsiToken::Text("after"),
            ]
        );
    }

    #[test]
    fn consumes_unterminated_and_bare_escapes() {
        let toks: Vec<_> = tokens("\x1b[31").collect();
        assert_eq!(toks, vec![AnsiToken::Escape("\x1b[31")]);

        let toks: Vec<_> = tokens("\x1bMup").collect();
        assert_eq!(toks, vec![AnsiToken::Escape("\x1bM"), AnsiToken::Text("up")]);

        let toks: Vec<_> = tokens("end\x1b").collect();
        assert_eq!(toks, vec![AnsiToken::Text("end"), AnsiToken::Escape("\x1b")]);
    }

    #[test]
    fn bare_escape_swallows_a_whole_multibyte_char() {
        let toks: Vec<_> = tokens("\x1b你好").collect();
        assert_eq!(
            toks,
            vec![AnsiToken::Escape("\x1b你"), AnsiToken::Text("好")]
        );

        let toks: Vec<_> = tokens("a\x1b終b").collect();
        assert_eq!(
            toks,
            vec![
                AnsiToken::Text("a"),
                AnsiToken::Escape("\x1b終"),
                AnsiToken::Text("b"),
            ]
        );

        assert_eq!(strip_ansi("x\x1béy"), "xy");
    }

    #[test]
    fn malformed_csi_stops_before_multibyte_text() {
        // A CSI interrupted by text must not split the following char.
        let toks: Vec<_> = tokens("\x1b[3你").collect();
        assert_eq!(
            toks,
            vec![AnsiToken::Escape("\x1b[3"), AnsiToken::Text("你")]
        );
    }

    #[test]
    fn strip_removes_all_escape_kinds() {
        let styled = format!(
            "\x1b[1m\x1b[38;2;255;0;0mbold red\x1b[0m {}",
            hyperlink("https://x.test", "link")
        );
        assert_eq!(strip_ansi(&styled), "bold red link");
        assert_eq!(strip_ansi("no escapes"), "no escapes");
    }

    #[test]
    fn modifier_codes_match_sgr_table() {
        assert_eq!(Modifier::Bold.open(), "\x1b[1m");
        assert_eq!(Modifier::Bold.close(), "\x1b[22m");
        assert_eq!(Modifier::Dim.close(), "\x1b[22m");
        assert_eq!(Modifier::DoubleUnderline.open(), "\x1b[21m");
        assert_eq!(Modifier::DoubleUnderline.close(), "\x1b[24m");
        assert_eq!(Modifier::Overline.close(), "\x1b[55m");
        for modifier in Modifier::ALL {
            assert_eq!(
                modifier.open(),
                format!("\x1b[{}m", modifier.open_code()),
                "open sequence mismatch for {modifier:?}"
            );
            assert_eq!(
                modifier.close(),
                format!("\x1b[{}m", modifier.close_code()),
                "close sequence mismatch for {modifier:?}"
            );
        }
    }

    #[test]
    fn basic_color_codes() {
        assert_eq!(BasicColor::Red.fg(), "\x1b[31m");
        assert_eq!(BasicColor::Red.bg(), "\x1b[41m");
        assert_eq!(BasicColor::BrightBlack.fg(), "\x1b[90m");
        assert_eq!(BasicColor::BrightWhite.bg(), "\x1b[107m");
        assert_eq!(BasicColor::Red.rgb(), Rgb::new(128, 0, 0));
        assert_eq!(BasicColor::BrightRed.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(BasicColor::White.rgb(), Rgb::new(192, 192, 192));
        for color in BasicColor::ALL {
            assert_eq!(color.fg(), format!("\x1b[{}m", color.fg_code()));
            assert_eq!(color.bg(), format!("\x1b[{}m", color.bg_code()));
            assert_eq!(BasicColor::from_index(color.index()), Some(color));
        }
        assert_eq!(BasicColor::from_index(16), None);
    }

    #[test]
    fn state_tracks_open_and_close() {
        let mut state = SgrState::new();
        state.absorb("\x1b[1m");
        state.absorb("\x1b[31m");
        assert!(!state.is_empty());
        assert_eq!(state.prefix(), "\x1b[1m\x1b[31m");

        state.absorb("\x1b[39m");
        assert_eq!(state.prefix(), "\x1b[1m");
        state.absorb("\x1b[22m");
        assert!(state.is_empty());
    }

    #[test]
    fn state_reset_clears_everything() {
        let mut state = SgrState::new();
        state.absorb("\x1b[1;4;35;48;5;17m");
        assert!(!state.is_empty());
        state.absorb("\x1b[0m");
        assert!(state.is_empty());
        assert_eq!(state.prefix(), "");
    }

    #[test]
    fn state_keeps_last_color_per_channel() {
        let mut state = SgrState::new();
        state.absorb("\x1b[31m");
        state.absorb("\x1b[38;2;1;2;3m");
        assert_eq!(state.prefix(), "\x1b[38;2;1;2;3m");
        state.absorb("\x1b[44m");
        assert_eq!(state.prefix(), "\x1b[38;2;1;2;3m\x1b[44m");
    }

    #[test]
    fn state_parses_compound_sequence() {
        let mut state = SgrState::new();
        state.absorb("\x1b[1;38;5;196;49m");
        assert_eq!(state.prefix(), "\x1b[1m\x1b[38;5;196m");
    }

    #[test]
    fn state_ignores_non_sgr() {
        let mut state = SgrState::new();
        state.absorb("\x1b[2J");
        state.absorb("\x1b]8;;http://x\x1b\\");
        assert!(state.is_empty());
    }

    #[test]
    fn empty_csi_is_reset() {
        let mut state = SgrState::new();
        state.absorb("\x1b[31m");
        state.absorb("\x1b[m");
        assert!(state.is_empty());
    }
}
