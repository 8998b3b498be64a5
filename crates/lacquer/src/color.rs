//! Color types and color-space math.
//!
//! Everything here is a total function: out-of-range components clamp,
//! hue wraps, and the infallible parse paths fall back to black so that
//! styling can never fail at render time. Strict parsing with a typed
//! error is available through [`Rgb::from_hex`] and [`parse_color`].
//!
//! # Example
//!
//! ```rust
//! use lacquer::color::{Hsl, Rgb, hsl_to_rgb, rgb_to_ansi256};
//!
//! let red = Rgb::from_hex("#ff0000").unwrap();
//! assert_eq!(rgb_to_ansi256(red), 196);
//! assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), red);
//! ```

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::warn;

/// Error for color inputs that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input matched none of the accepted color forms.
    #[error("invalid color format: {input:?}")]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
    },
}

impl ColorError {
    fn invalid(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
        }
    }
}

/// A 24-bit RGB color.
///
/// Serializes as a lowercase hex string (`"#1e90ff"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color: `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`,
    /// case-insensitive, leading `#` optional. Shorthand digits are
    /// doubled; alpha digits are parsed and discarded.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidFormat`] for any other shape or non-hex
    /// digits.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid(input));
        }
        let expanded: String;
        let full = match digits.len() {
            3 | 4 => {
                expanded = digits[..3].bytes().flat_map(|b| [b, b]).map(char::from).collect();
                expanded.as_str()
            }
            6 => digits,
            8 => &digits[..6],
            _ => return Err(ColorError::invalid(input)),
        };
        let channel = |i: usize| {
            u8::from_str_radix(&full[i..i + 2], 16).map_err(|_| ColorError::invalid(input))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `[0, 1]`.
    #[must_use]
    pub fn luminance(self) -> f64 {
        fn linear(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Whether the color reads as dark (relative luminance below 0.5).
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.luminance() < 0.5
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        !self.is_dark()
    }

    /// Black or white, whichever is readable over this color. Uses the
    /// quick BT.601 perceived-brightness weighting.
    #[must_use]
    pub fn contrast_color(self) -> Rgb {
        let brightness =
            (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
                / 255.0;
        if brightness > 0.5 { Rgb::BLACK } else { Rgb::WHITE }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex color string like \"#1e90ff\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Rgb, E> {
                Rgb::from_hex(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

/// HSL color: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// HSV color: hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// CMYK color, all components in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    #[must_use]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

/// The standard 16-color palette (xterm defaults), indexed 0–15.
pub(crate) const ANSI_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(128, 0, 0),
    Rgb::new(0, 128, 0),
    Rgb::new(128, 128, 0),
    Rgb::new(0, 0, 128),
    Rgb::new(128, 0, 128),
    Rgb::new(0, 128, 128),
    Rgb::new(192, 192, 192),
    Rgb::new(128, 128, 128),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Infallible hex parse for styling paths: malformed input falls back to
/// black (with a warning) so rendering never fails.
#[must_use]
pub fn hex_to_rgb(input: &str) -> Rgb {
    Rgb::from_hex(input).unwrap_or_else(|_| {
        warn!(input, "invalid hex color, falling back to black");
        Rgb::BLACK
    })
}

/// Convert RGB to HSL.
#[must_use]
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d.abs() < f64::EPSILON {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        ((g - b) / d).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s * 100.0, l * 100.0)
}

/// Convert HSL to RGB. Hue wraps into `[0, 360)`; saturation and
/// lightness clamp to `[0, 100]`.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = ((hsl.h % 360.0) + 360.0) % 360.0;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = sextant(h, c, x);
    Rgb::new(channel(r + m), channel(g + m), channel(b + m))
}

fn sextant(h: f64, c: f64, x: f64) -> (f64, f64, f64) {
    if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    }
}

/// Convert RGB to HSV.
#[must_use]
pub fn rgb_to_hsv(color: Rgb) -> Hsv {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max <= f64::EPSILON { 0.0 } else { d / max };
    let h = if d.abs() < f64::EPSILON {
        0.0
    } else if (max - r).abs() < f64::EPSILON {
        ((g - b) / d).rem_euclid(6.0) * 60.0
    } else if (max - g).abs() < f64::EPSILON {
        ((b - r) / d + 2.0) * 60.0
    } else {
        ((r - g) / d + 4.0) * 60.0
    };

    Hsv::new(h, s * 100.0, max * 100.0)
}

/// Convert HSV to RGB. Hue wraps; saturation and value clamp.
#[must_use]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = ((hsv.h % 360.0) + 360.0) % 360.0;
    let s = hsv.s.clamp(0.0, 100.0) / 100.0;
    let v = hsv.v.clamp(0.0, 100.0) / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = sextant(h, c, x);
    Rgb::new(channel(r + m), channel(g + m), channel(b + m))
}

/// Convert RGB to CMYK (components in percent).
#[must_use]
pub fn rgb_to_cmyk(color: Rgb) -> Cmyk {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if (1.0 - k).abs() < f64::EPSILON {
        return Cmyk::new(0.0, 0.0, 0.0, 100.0);
    }
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    Cmyk::new(c * 100.0, m * 100.0, y * 100.0, k * 100.0)
}

/// Convert CMYK to RGB. Components clamp to `[0, 100]`.
#[must_use]
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let c = cmyk.c.clamp(0.0, 100.0) / 100.0;
    let m = cmyk.m.clamp(0.0, 100.0) / 100.0;
    let y = cmyk.y.clamp(0.0, 100.0) / 100.0;
    let k = cmyk.k.clamp(0.0, 100.0) / 100.0;

    Rgb::new(
        channel((1.0 - c) * (1.0 - k)),
        channel((1.0 - m) * (1.0 - k)),
        channel((1.0 - y) * (1.0 - k)),
    )
}

/// Map RGB onto the 256-color palette.
///
/// Pure grays take the 24-step grayscale ramp (232–255) with black and
/// white clamped into the cube corners; everything else lands in the
/// 6×6×6 cube (16–231).
#[must_use]
pub fn rgb_to_ansi256(color: Rgb) -> u8 {
    if color.r == color.g && color.g == color.b {
        if color.r < 8 {
            return 16;
        }
        if color.r > 248 {
            return 231;
        }
        return ((f64::from(color.r) - 8.0) / 247.0 * 24.0).round() as u8 + 232;
    }
    let scale = |v: u8| (f64::from(v) / 255.0 * 5.0).round() as u8;
    16 + 36 * scale(color.r) + 6 * scale(color.g) + scale(color.b)
}

/// Map a 256-color index back to RGB: standard palette for 0–15, the
/// color cube for 16–231 (component = 40·v + 55 for nonzero v), and the
/// grayscale ramp for 232–255.
#[must_use]
pub fn ansi256_to_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => ANSI_PALETTE[index as usize],
        16..=231 => {
            let n = index - 16;
            let cube = |v: u8| if v == 0 { 0 } else { v * 40 + 55 };
            Rgb::new(cube(n / 36), cube((n % 36) / 6), cube(n % 6))
        }
        _ => {
            let v = (index - 232) * 10 + 8;
            Rgb::new(v, v, v)
        }
    }
}

/// Nearest basic color by Euclidean distance, returned as an SGR
/// foreground code (30–37 normal, 90–97 bright). Ties keep the lowest
/// palette index.
#[must_use]
pub fn rgb_to_ansi16(color: Rgb) -> u8 {
    let mut best = 0usize;
    let mut best_distance = u32::MAX;
    for (index, entry) in ANSI_PALETTE.iter().enumerate() {
        let distance = distance_sq(color, *entry);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    if best < 8 {
        30 + best as u8
    } else {
        82 + best as u8
    }
}

/// RGB value of a basic color, accepting a palette index (0–15) or an
/// SGR foreground code (30–37, 90–97). Anything else is black.
#[must_use]
pub fn ansi16_to_rgb(code: u8) -> Rgb {
    match code {
        0..=15 => ANSI_PALETTE[code as usize],
        30..=37 => ANSI_PALETTE[(code - 30) as usize],
        90..=97 => ANSI_PALETTE[(code - 82) as usize],
        _ => Rgb::BLACK,
    }
}

fn distance_sq(a: Rgb, b: Rgb) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

/// Componentwise linear interpolation from `a` to `b`; `t` clamps to
/// `[0, 1]`.
#[must_use]
pub fn interpolate_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let lerp = |from: u8, to: u8| {
        (f64::from(from) + (f64::from(to) - f64::from(from)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}

/// Interpolate through HSL space along the shortest hue arc.
#[must_use]
pub fn interpolate_hsl(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let from = rgb_to_hsl(a);
    let to = rgb_to_hsl(b);

    let mut h1 = from.h;
    let mut h2 = to.h;
    if (h2 - h1).abs() > 180.0 {
        // Wrap the smaller endpoint so the lerp takes the short way round.
        if h2 > h1 {
            h1 += 360.0;
        } else {
            h2 += 360.0;
        }
    }

    hsl_to_rgb(Hsl::new(
        (h1 + (h2 - h1) * t).rem_euclid(360.0),
        from.s + (to.s - from.s) * t,
        from.l + (to.l - from.l) * t,
    ))
}

/// Mix two colors; `weight` in `[0, 1]` pulls toward `b`.
#[must_use]
pub fn mix(a: Rgb, b: Rgb, weight: f64) -> Rgb {
    interpolate_rgb(a, b, weight)
}

/// Raise lightness by `amount` percentage points.
#[must_use]
pub fn lighten(color: Rgb, amount: f64) -> Rgb {
    let hsl = rgb_to_hsl(color);
    hsl_to_rgb(Hsl::new(hsl.h, hsl.s, (hsl.l + amount).min(100.0)))
}

/// Lower lightness by `amount` percentage points.
#[must_use]
pub fn darken(color: Rgb, amount: f64) -> Rgb {
    let hsl = rgb_to_hsl(color);
    hsl_to_rgb(Hsl::new(hsl.h, hsl.s, (hsl.l - amount).max(0.0)))
}

/// Raise saturation by `amount` percentage points.
#[must_use]
pub fn saturate(color: Rgb, amount: f64) -> Rgb {
    let hsl = rgb_to_hsl(color);
    hsl_to_rgb(Hsl::new(hsl.h, (hsl.s + amount).min(100.0), hsl.l))
}

/// Lower saturation by `amount` percentage points.
#[must_use]
pub fn desaturate(color: Rgb, amount: f64) -> Rgb {
    let hsl = rgb_to_hsl(color);
    hsl_to_rgb(Hsl::new(hsl.h, (hsl.s - amount).max(0.0), hsl.l))
}

/// Rotate the hue by `degrees` (negative rotates the other way).
#[must_use]
pub fn rotate_hue(color: Rgb, degrees: f64) -> Rgb {
    let hsl = rgb_to_hsl(color);
    hsl_to_rgb(Hsl::new(hsl.h + degrees, hsl.s, hsl.l))
}

/// The complementary color (hue rotated 180°).
#[must_use]
pub fn complement(color: Rgb) -> Rgb {
    rotate_hue(color, 180.0)
}

/// Channelwise inversion.
#[must_use]
pub fn invert(color: Rgb) -> Rgb {
    Rgb::new(255 - color.r, 255 - color.g, 255 - color.b)
}

/// Luminance-weighted grayscale.
#[must_use]
pub fn grayscale(color: Rgb) -> Rgb {
    let gray = (0.299 * f64::from(color.r) + 0.587 * f64::from(color.g) + 0.114 * f64::from(color.b))
        .round() as u8;
    Rgb::new(gray, gray, gray)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Look up a CSS color name (case-insensitive).
#[must_use]
pub fn named_color(name: &str) -> Option<Rgb> {
    let lower = name.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == lower)
        .map(|(_, color)| *color)
}

/// Parse a color from any supported string form: hex (`#ff8800`,
/// `f80`), functional `rgb(r, g, b)` / `hsl(h, s%, l%)` / `hsv(...)`
/// (alpha arguments tolerated and ignored), a bare 256-palette index
/// (`196`), or a CSS color name.
///
/// # Errors
///
/// [`ColorError::InvalidFormat`] when nothing matches.
pub fn parse_color(input: &str) -> Result<Rgb, ColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::invalid(input));
    }
    if s.starts_with('#') {
        return Rgb::from_hex(s);
    }
    if let Some(args) = functional_args(s, "rgb") {
        return match args.as_slice() {
            [r, g, b, ..] => Ok(Rgb::new(channel(r / 255.0), channel(g / 255.0), channel(b / 255.0))),
            _ => Err(ColorError::invalid(input)),
        };
    }
    if let Some(args) = functional_args(s, "hsl") {
        return match args.as_slice() {
            [h, sat, l, ..] => Ok(hsl_to_rgb(Hsl::new(*h, *sat, *l))),
            _ => Err(ColorError::invalid(input)),
        };
    }
    if let Some(args) = functional_args(s, "hsv") {
        return match args.as_slice() {
            [h, sat, v, ..] => Ok(hsv_to_rgb(Hsv::new(*h, *sat, *v))),
            _ => Err(ColorError::invalid(input)),
        };
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return match s.parse::<u8>() {
            Ok(index) => Ok(ansi256_to_rgb(index)),
            Err(_) => Err(ColorError::invalid(input)),
        };
    }
    if let Some(color) = named_color(s) {
        return Ok(color);
    }
    // Bare hex without the leading '#'.
    Rgb::from_hex(s).map_err(|_| ColorError::invalid(input))
}

/// Arguments of `name(a, b, c[, d])`, with `%` suffixes and an optional
/// alpha function suffix (`rgba`, `hsla`) tolerated.
fn functional_args(s: &str, name: &str) -> Option<Vec<f64>> {
    let prefix = s.get(..name.len())?;
    if !prefix.eq_ignore_ascii_case(name) {
        return None;
    }
    let rest = &s[name.len()..];
    let rest = rest.strip_prefix(['a', 'A']).unwrap_or(rest);
    let rest = rest.trim_start().strip_prefix('(')?;
    let rest = rest.trim_end().strip_suffix(')')?;
    let mut args = Vec::new();
    for raw in rest.split(',') {
        let piece = raw.trim().trim_end_matches('%');
        args.push(piece.parse::<f64>().ok()?);
    }
    if args.len() >= 3 { Some(args) } else { None }
}

const NAMED_COLORS: [(&str, Rgb); 57] = [
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("silver", Rgb::new(192, 192, 192)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("olive", Rgb::new(128, 128, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("aqua", Rgb::new(0, 255, 255)),
    ("teal", Rgb::new(0, 128, 128)),
    ("navy", Rgb::new(0, 0, 128)),
    ("fuchsia", Rgb::new(255, 0, 255)),
    ("purple", Rgb::new(128, 0, 128)),
    ("orange", Rgb::new(255, 165, 0)),
    ("pink", Rgb::new(255, 192, 203)),
    ("brown", Rgb::new(165, 42, 42)),
    ("gold", Rgb::new(255, 215, 0)),
    ("coral", Rgb::new(255, 127, 80)),
    ("salmon", Rgb::new(250, 128, 114)),
    ("tomato", Rgb::new(255, 99, 71)),
    ("crimson", Rgb::new(220, 20, 60)),
    ("indigo", Rgb::new(75, 0, 130)),
    ("violet", Rgb::new(238, 130, 238)),
    ("plum", Rgb::new(221, 160, 221)),
    ("orchid", Rgb::new(218, 112, 214)),
    ("turquoise", Rgb::new(64, 224, 208)),
    ("skyblue", Rgb::new(135, 206, 235)),
    ("steelblue", Rgb::new(70, 130, 180)),
    ("chocolate", Rgb::new(210, 105, 30)),
    ("sienna", Rgb::new(160, 82, 45)),
    ("tan", Rgb::new(210, 180, 140)),
    ("beige", Rgb::new(245, 245, 220)),
    ("ivory", Rgb::new(255, 255, 240)),
    ("lavender", Rgb::new(230, 230, 250)),
    ("linen", Rgb::new(250, 240, 230)),
    ("snow", Rgb::new(255, 250, 250)),
    ("azure", Rgb::new(240, 255, 255)),
    ("honeydew", Rgb::new(240, 255, 240)),
    ("mintcream", Rgb::new(245, 255, 250)),
    ("aliceblue", Rgb::new(240, 248, 255)),
    ("ghostwhite", Rgb::new(248, 248, 255)),
    ("seashell", Rgb::new(255, 245, 238)),
    ("oldlace", Rgb::new(253, 245, 230)),
    ("wheat", Rgb::new(245, 222, 179)),
    ("moccasin", Rgb::new(255, 228, 181)),
    ("peachpuff", Rgb::new(255, 218, 185)),
    ("mistyrose", Rgb::new(255, 228, 225)),
    ("papayawhip", Rgb::new(255, 239, 213)),
    ("blanchedalmond", Rgb::new(255, 235, 205)),
    ("bisque", Rgb::new(255, 228, 196)),
    ("navajowhite", Rgb::new(255, 222, 173)),
];
