//! Style composition: build a [`Style`], compile it against a color
//! level, apply it to text.
//!
//! A [`Style`] is an ordered list of requests (modifiers, foreground,
//! background). Compilation resolves each request into concrete open and
//! close sequences for a given [`ColorLevel`], degrading truecolor
//! requests to the 256-color palette and dropping what the level cannot
//! render. Application is nesting-safe: embedded styled fragments that
//! close one of this style's channels get the channel reopened right
//! after, so outer styling survives inner styling.
//!
//! Compilation goes through a [`Styler`], which owns the color-level
//! state and the caches. Independent stylers are fully isolated; a
//! process-wide default instance backs the free functions and
//! [`Style::render`].
//!
//! # Example
//!
//! ```rust
//! use lacquer::level::ColorLevel;
//! use lacquer::style::{Style, Styler};
//!
//! let styler = Styler::with_level(ColorLevel::TrueColor);
//! let style = Style::new().bold().foreground("#ff0000");
//! assert_eq!(
//!     styler.render(&style, "hi"),
//!     "\x1b[1m\x1b[38;2;255;0;0mhi\x1b[39m\x1b[22m"
//! );
//! ```

use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use tracing::{trace, warn};

use crate::ansi::{BasicColor, CLOSE_BG, CLOSE_FG, Modifier, bg_indexed, bg_rgb, fg_indexed, fg_rgb};
use crate::cache::FifoCache;
use crate::color::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, parse_color, rgb_to_ansi256};
use crate::level::{ColorLevel, ColorSupport};

const COLOR_CACHE_CAPACITY: usize = 1000;
const STYLE_CACHE_CAPACITY: usize = 500;

/// A color request, resolved against the color level at compile time.
///
/// `Str` defers parsing until compilation so that style construction
/// stays infallible; an unparseable string renders as black. Callers who
/// want the error instead can go through [`parse_color`] first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// One of the 16 basic ANSI colors.
    Basic(BasicColor),
    /// A 256-palette index.
    Indexed(u8),
    /// A 24-bit color.
    Rgb(Rgb),
    /// Any string form [`parse_color`] accepts, resolved lazily.
    Str(String),
}

impl ColorSpec {
    /// Strict parse of a color string.
    ///
    /// # Errors
    ///
    /// [`crate::color::ColorError::InvalidFormat`] when the string
    /// matches no supported form.
    pub fn parse(input: &str) -> Result<Self, crate::color::ColorError> {
        parse_color(input).map(Self::Rgb)
    }
}

impl From<BasicColor> for ColorSpec {
    fn from(color: BasicColor) -> Self {
        Self::Basic(color)
    }
}

impl From<u8> for ColorSpec {
    fn from(index: u8) -> Self {
        Self::Indexed(index)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(color: Rgb) -> Self {
        Self::Rgb(color)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }
}

impl From<Hsl> for ColorSpec {
    fn from(hsl: Hsl) -> Self {
        Self::Rgb(hsl_to_rgb(hsl))
    }
}

impl From<&str> for ColorSpec {
    fn from(input: &str) -> Self {
        Self::Str(input.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(input: String) -> Self {
        Self::Str(input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum StylePart {
    Modifier(Modifier),
    Foreground(ColorSpec),
    Background(ColorSpec),
}

/// An ordered, immutable-by-value style description.
///
/// Builders move `self`, so styles chain and clone cheaply:
///
/// ```rust
/// use lacquer::style::Style;
///
/// let emphasis = Style::new().bold().italic();
/// let warning = emphasis.clone().foreground("orange");
/// # let _ = warning;
/// ```
///
/// Open sequences are emitted in the order the requests were added; close
/// sequences in reverse order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    parts: Vec<StylePart>,
}

impl Style {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the style requests nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Add any modifier by name.
    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.parts.push(StylePart::Modifier(modifier));
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: impl Into<ColorSpec>) -> Self {
        self.parts.push(StylePart::Foreground(color.into()));
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: impl Into<ColorSpec>) -> Self {
        self.parts.push(StylePart::Background(color.into()));
        self
    }

    /// Set the foreground from a hex string; malformed input styles the
    /// text black.
    #[must_use]
    pub fn foreground_hex(self, hex: &str) -> Self {
        self.foreground(hex_to_rgb(hex))
    }

    /// Set the background from a hex string; malformed input styles the
    /// text black.
    #[must_use]
    pub fn background_hex(self, hex: &str) -> Self {
        self.background(hex_to_rgb(hex))
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.modifier(Modifier::Bold)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.modifier(Modifier::Dim)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.modifier(Modifier::Italic)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.modifier(Modifier::Underline)
    }

    #[must_use]
    pub fn double_underline(self) -> Self {
        self.modifier(Modifier::DoubleUnderline)
    }

    #[must_use]
    pub fn blink(self) -> Self {
        self.modifier(Modifier::Blink)
    }

    #[must_use]
    pub fn rapid_blink(self) -> Self {
        self.modifier(Modifier::RapidBlink)
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        self.modifier(Modifier::Inverse)
    }

    #[must_use]
    pub fn hidden(self) -> Self {
        self.modifier(Modifier::Hidden)
    }

    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.modifier(Modifier::Strikethrough)
    }

    #[must_use]
    pub fn framed(self) -> Self {
        self.modifier(Modifier::Framed)
    }

    #[must_use]
    pub fn encircled(self) -> Self {
        self.modifier(Modifier::Encircled)
    }

    #[must_use]
    pub fn overline(self) -> Self {
        self.modifier(Modifier::Overline)
    }

    /// Apply this style to `text` through the process-wide default
    /// [`Styler`].
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        default_styler().render(self, text)
    }
}

/// A style resolved against a concrete color level: ready-to-emit open
/// and close sequences plus the per-part stacks they were built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledStyle {
    open: String,
    close: String,
    open_stack: Vec<String>,
    close_stack: Vec<String>,
}

impl CompiledStyle {
    /// Concatenated open sequences, in request order.
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Concatenated close sequences, in reverse request order.
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Individual open sequences.
    #[must_use]
    pub fn open_stack(&self) -> &[String] {
        &self.open_stack
    }

    /// Individual close sequences, already reversed.
    #[must_use]
    pub fn close_stack(&self) -> &[String] {
        &self.close_stack
    }

    /// Whether compilation dropped every request (or there were none).
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.open.is_empty() && self.close.is_empty()
    }

    /// Wrap `text` in this style's sequences, surviving nesting.
    ///
    /// If `text` already contains this style's close sequence (an
    /// embedded fragment styled the same way closed it), every occurrence
    /// is followed by a fresh open so the remainder of `text` stays
    /// styled. Empty text stays empty; a no-op style passes text through
    /// unchanged.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        if text.is_empty() || self.is_noop() {
            return text.to_string();
        }
        if !text.contains(&self.close) {
            return format!("{}{}{}", self.open, text, self.close);
        }
        let reopened = text.replace(&self.close, &format!("{}{}", self.close, self.open));
        format!("{}{}{}", self.open, reopened, self.close)
    }
}

/// The styling engine: color-level state plus compile caches.
///
/// Every piece of state lives on the instance, so separate `Styler`s can
/// run at different levels in one process (a TTY-facing one and a
/// plain-text one, say) without sharing caches. All methods take `&self`;
/// the instance is safe to share across threads.
#[derive(Debug)]
pub struct Styler {
    support: ColorSupport,
    color_cache: Mutex<FifoCache<String, Rgb>>,
    style_cache: Mutex<FifoCache<(Style, ColorLevel), Arc<CompiledStyle>>>,
}

impl Styler {
    /// A styler that detects its color level from the environment on
    /// first use.
    #[must_use]
    pub fn new() -> Self {
        Self {
            support: ColorSupport::new(),
            color_cache: Mutex::new(FifoCache::new(COLOR_CACHE_CAPACITY)),
            style_cache: Mutex::new(FifoCache::new(STYLE_CACHE_CAPACITY)),
        }
    }

    /// A styler pinned to `level`; never consults the environment.
    #[must_use]
    pub fn with_level(level: ColorLevel) -> Self {
        let styler = Self::new();
        styler.support.set_level(level);
        styler
    }

    /// The effective color level (override, else cached detection).
    pub fn level(&self) -> ColorLevel {
        self.support.level()
    }

    /// Pin the color level, overriding detection.
    pub fn set_level(&self, level: ColorLevel) {
        self.support.set_level(level);
    }

    /// Drop the override and cached detection; the next render
    /// re-detects.
    pub fn reset_level(&self) {
        self.support.reset();
    }

    /// Compile `style` against the current level, consulting the cache.
    ///
    /// The cache key includes the level, so changing the level never
    /// serves stale sequences.
    pub fn compile(&self, style: &Style) -> Arc<CompiledStyle> {
        let level = self.level();
        let key = (style.clone(), level);
        {
            let cache = self
                .style_cache
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = cache.get(&key) {
                return Arc::clone(hit);
            }
        }
        let compiled = Arc::new(self.compile_at(style, level));
        let mut cache = self
            .style_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        cache.insert(key, Arc::clone(&compiled));
        trace!(%level, parts = style.parts.len(), entries = cache.len(), "compiled style");
        compiled
    }

    /// Compile and apply in one step.
    pub fn render(&self, style: &Style, text: &str) -> String {
        self.compile(style).apply(text)
    }

    fn compile_at(&self, style: &Style, level: ColorLevel) -> CompiledStyle {
        let mut open_stack = Vec::new();
        let mut close_stack = Vec::new();
        for part in &style.parts {
            if let Some((open, close)) = self.part_codes(part, level) {
                open_stack.push(open);
                close_stack.push(close);
            }
        }
        close_stack.reverse();
        CompiledStyle {
            open: open_stack.concat(),
            close: close_stack.concat(),
            open_stack,
            close_stack,
        }
    }

    fn part_codes(&self, part: &StylePart, level: ColorLevel) -> Option<(String, String)> {
        match part {
            StylePart::Modifier(modifier) => {
                if !level.supports(ColorLevel::Basic) {
                    return None;
                }
                Some((modifier.open().to_string(), modifier.close().to_string()))
            }
            StylePart::Foreground(spec) => self.color_codes(spec, level, false),
            StylePart::Background(spec) => self.color_codes(spec, level, true),
        }
    }

    fn color_codes(
        &self,
        spec: &ColorSpec,
        level: ColorLevel,
        background: bool,
    ) -> Option<(String, String)> {
        let open = match spec {
            ColorSpec::Basic(color) => {
                if !level.supports(ColorLevel::Basic) {
                    return None;
                }
                if background {
                    color.bg().to_string()
                } else {
                    color.fg().to_string()
                }
            }
            ColorSpec::Indexed(index) => {
                if !level.supports(ColorLevel::Ansi256) {
                    return None;
                }
                if background {
                    bg_indexed(*index)
                } else {
                    fg_indexed(*index)
                }
            }
            ColorSpec::Rgb(rgb) => rgb_open(*rgb, level, background)?,
            ColorSpec::Str(input) => rgb_open(self.resolve_color(input), level, background)?,
        };
        let close = if background { CLOSE_BG } else { CLOSE_FG };
        Some((open, close.to_string()))
    }

    fn resolve_color(&self, input: &str) -> Rgb {
        let mut cache = self
            .color_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = cache.get(input) {
            return *hit;
        }
        let rgb = parse_color(input).unwrap_or_else(|_| {
            warn!(input, "unparseable color, falling back to black");
            Rgb::BLACK
        });
        cache.insert(input.to_string(), rgb);
        rgb
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

/// RGB at truecolor, 256-palette below that, dropped below that.
fn rgb_open(rgb: Rgb, level: ColorLevel, background: bool) -> Option<String> {
    if level.supports(ColorLevel::TrueColor) {
        Some(if background { bg_rgb(rgb) } else { fg_rgb(rgb) })
    } else if level.supports(ColorLevel::Ansi256) {
        let index = rgb_to_ansi256(rgb);
        Some(if background {
            bg_indexed(index)
        } else {
            fg_indexed(index)
        })
    } else {
        None
    }
}

static DEFAULT_STYLER: LazyLock<Styler> = LazyLock::new(Styler::new);

/// The process-wide styler behind [`Style::render`] and the free
/// functions.
pub fn default_styler() -> &'static Styler {
    &DEFAULT_STYLER
}

/// Render through the default styler.
pub fn render(style: &Style, text: &str) -> String {
    default_styler().render(style, text)
}

/// The default styler's effective color level.
pub fn color_level() -> ColorLevel {
    default_styler().level()
}

/// Pin the default styler's color level.
pub fn set_color_level(level: ColorLevel) {
    default_styler().set_level(level);
}

/// Clear the default styler's override and cached detection.
pub fn reset_color_level() {
    default_styler().reset_level();
}
