//! Terminal color capability tiers and environment detection.
//!
//! A [`ColorLevel`] is an ordinal: a terminal that renders truecolor also
//! renders everything below it. Detection reads the conventional
//! environment variables (`NO_COLOR`, `FORCE_COLOR`, CI markers,
//! `COLORTERM`, `TERM`) plus whether stdout is a terminal, first match
//! wins. [`ColorSupport`] caches the detected value and lets callers pin
//! an explicit override that always beats detection.

use std::fmt;
use std::io::IsTerminal;
use std::sync::atomic::{AtomicI8, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// How much color the target terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ColorLevel {
    /// No color output at all.
    None = 0,
    /// The 16 basic ANSI colors.
    Basic = 1,
    /// The 256-color palette.
    Ansi256 = 2,
    /// 24-bit RGB.
    TrueColor = 3,
}

impl ColorLevel {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Basic),
            2 => Some(Self::Ansi256),
            3 => Some(Self::TrueColor),
            _ => None,
        }
    }

    /// Whether this level can render output that needs `required`.
    #[must_use]
    pub fn supports(self, required: ColorLevel) -> bool {
        self >= required
    }
}

impl fmt::Display for ColorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Ansi256 => "ansi256",
            Self::TrueColor => "truecolor",
        })
    }
}

impl Serialize for ColorLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for ColorLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Self::from_u8(value)
            .ok_or_else(|| serde::de::Error::custom(format!("color level out of range: {value}")))
    }
}

/// Detect the terminal's color level from the live process environment.
///
/// Pure read: nothing is cached here. [`ColorSupport`] layers caching and
/// overrides on top.
#[must_use]
pub fn detect_color_level() -> ColorLevel {
    let level = detect_from(
        |name| std::env::var(name).ok(),
        std::io::stdout().is_terminal(),
    );
    debug!(%level, "detected terminal color level");
    level
}

/// Detection against an injected environment, so the precedence rules are
/// testable without touching process globals.
fn detect_from<F>(get: F, stdout_tty: bool) -> ColorLevel
where
    F: Fn(&str) -> Option<String>,
{
    // https://no-color.org/: presence alone disables color.
    if get("NO_COLOR").is_some() {
        return ColorLevel::None;
    }

    if let Some(force) = get("FORCE_COLOR") {
        match force.as_str() {
            "0" | "false" => return ColorLevel::None,
            "" | "1" | "true" => return ColorLevel::Basic,
            "2" => return ColorLevel::Ansi256,
            "3" => return ColorLevel::TrueColor,
            // Unrecognized values fall through to the heuristics below.
            _ => {}
        }
    }

    if get("CI").is_some() {
        const RICH_PROVIDERS: [&str; 5] = [
            "GITHUB_ACTIONS",
            "GITEA_ACTIONS",
            "TRAVIS",
            "CIRCLECI",
            "GITLAB_CI",
        ];
        if RICH_PROVIDERS.iter().any(|provider| get(provider).is_some()) {
            return ColorLevel::TrueColor;
        }
        return ColorLevel::Basic;
    }

    if !stdout_tty {
        return ColorLevel::None;
    }

    if cfg!(windows) {
        if get("OS").is_some_and(|os| os.contains("Windows")) {
            return ColorLevel::TrueColor;
        }
        return ColorLevel::Basic;
    }

    if get("COLORTERM").is_some_and(|ct| ct == "truecolor" || ct == "24bit") {
        return ColorLevel::TrueColor;
    }

    let term = get("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256") {
        return ColorLevel::Ansi256;
    }

    const TRUECOLOR_TERMS: [&str; 9] = [
        "iterm",
        "konsole",
        "terminator",
        "vscode",
        "hyper",
        "alacritty",
        "kitty",
        "wezterm",
        "rio",
    ];
    let program = get("TERM_PROGRAM").unwrap_or_default().to_lowercase();
    if TRUECOLOR_TERMS
        .iter()
        .any(|name| term.contains(name) || program.contains(name))
    {
        return ColorLevel::TrueColor;
    }

    if term.contains("xterm") || term.contains("screen") {
        return ColorLevel::Ansi256;
    }

    // Anything else on a TTY gets basic colors, including TERM values
    // naming color/ansi/linux.
    ColorLevel::Basic
}

const UNSET: i8 = -1;

/// Cached, overridable color-level state.
///
/// Both cells start unset. A query resolves override first, then the
/// cached detection, then detects and caches. [`set_level`] pins an
/// override that wins until [`reset`] clears both cells.
///
/// [`set_level`]: ColorSupport::set_level
/// [`reset`]: ColorSupport::reset
#[derive(Debug)]
pub struct ColorSupport {
    forced: AtomicI8,
    detected: AtomicI8,
}

impl ColorSupport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            forced: AtomicI8::new(UNSET),
            detected: AtomicI8::new(UNSET),
        }
    }

    /// The effective color level: override, then cached detection, then a
    /// fresh detection (which is cached).
    pub fn level(&self) -> ColorLevel {
        if let Some(forced) = load_level(&self.forced) {
            return forced;
        }
        if let Some(cached) = load_level(&self.detected) {
            return cached;
        }
        let level = detect_color_level();
        self.detected.store(level.as_u8() as i8, Ordering::Relaxed);
        level
    }

    /// Pin the level explicitly; wins over detection until [`reset`].
    ///
    /// [`reset`]: ColorSupport::reset
    pub fn set_level(&self, level: ColorLevel) {
        self.forced.store(level.as_u8() as i8, Ordering::Relaxed);
    }

    /// Clear the override and the cached detection; the next query
    /// re-detects.
    pub fn reset(&self) {
        self.forced.store(UNSET, Ordering::Relaxed);
        self.detected.store(UNSET, Ordering::Relaxed);
    }
}

impl Default for ColorSupport {
    fn default() -> Self {
        Self::new()
    }
}

fn load_level(cell: &AtomicI8) -> Option<ColorLevel> {
    let raw = cell.load(Ordering::Relaxed);
    if raw < 0 {
        None
    } else {
        ColorLevel::from_u8(raw as u8)
    }
}
