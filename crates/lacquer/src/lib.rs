#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics and terminal styling code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::single_match_else)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::if_not_else)]
#![allow(clippy::map_unwrap_or)]

//! # Lacquer
//!
//! Terminal text styling: ANSI escape composition, color math, and
//! escape-aware text measurement.
//!
//! Lacquer covers the layer between "print a string" and a full TUI:
//! - **Styles**: bold, italic, underline, and friends, plus foreground
//!   and background colors in any format, composed into minimal escape
//!   sequences with safe nesting
//! - **Color math**: hex/RGB/HSL/HSV/CMYK conversions, palette
//!   quantization, interpolation, lighten/darken and relatives
//! - **Capability detection**: `NO_COLOR`/`FORCE_COLOR`/terminal
//!   heuristics decide how much color to emit, and styles degrade
//!   gracefully to match
//! - **Measurement**: width, slicing, truncation, padding, and word
//!   wrap that all treat escape sequences as invisible
//!
//! ## Quick Start
//!
//! ```rust
//! use lacquer::{ColorLevel, Style, Styler};
//!
//! let styler = Styler::with_level(ColorLevel::TrueColor);
//! let style = Style::new().bold().foreground("#ff00ff");
//! assert_eq!(
//!     styler.render(&style, "Hello"),
//!     "\x1b[1m\x1b[38;2;255;0;255mHello\x1b[39m\x1b[22m",
//! );
//! ```
//!
//! The process-wide [`default_styler`] detects the terminal's color
//! level once and caches compiled styles, so the common path is just:
//!
//! ```rust
//! use lacquer::Style;
//!
//! let warning = Style::new().bold().foreground("yellow");
//! println!("{}", warning.render("careful now"));
//! ```
//!
//! ## Styles nest
//!
//! Styled text can be embedded in other styled text without the inner
//! close codes killing the outer style:
//!
//! ```rust
//! use lacquer::{ColorLevel, Style, Styler};
//!
//! let styler = Styler::with_level(ColorLevel::TrueColor);
//! let inner = styler.render(&Style::new().foreground("green"), "B");
//! let outer = styler.render(&Style::new().foreground("red"), &format!("A {inner} C"));
//! // The red re-opens after the green segment closes.
//! assert!(outer.contains("\x1b[39m\x1b[38;2;255;0;0m C"));
//! ```
//!
//! ## Measuring and wrapping
//!
//! ```rust
//! use lacquer::width::{truncate, visible_length};
//! use lacquer::wrap::wrap;
//!
//! assert_eq!(visible_length("\x1b[1mHi\x1b[22m"), 2);
//! assert_eq!(truncate("Hello World", 8), "Hello W…");
//! assert_eq!(wrap("one two three", 7), "one two\nthree");
//! ```

pub mod ansi;
pub mod color;
pub mod level;
pub mod style;
pub mod width;
pub mod wrap;

mod cache;

// Re-exports
pub use ansi::{BasicColor, Modifier, has_ansi, hyperlink, strip_ansi};
pub use color::Rgb;
pub use level::{ColorLevel, ColorSupport, detect_color_level};
pub use style::{
    ColorSpec, CompiledStyle, Style, Styler, color_level, default_styler, reset_color_level,
    set_color_level,
};
pub use width::{Alignment, display_width, truncate, visible_length, visible_slice};
pub use wrap::{WrapOptions, wrap, wrap_with};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ansi::{BasicColor, Modifier, has_ansi, strip_ansi};
    pub use crate::color::Rgb;
    pub use crate::level::ColorLevel;
    pub use crate::style::{ColorSpec, Style, Styler, default_styler};
    pub use crate::width::{
        Alignment, display_width, pad_both, pad_end, pad_start, truncate, visible_length,
        visible_slice,
    };
    pub use crate::wrap::{WrapOptions, wrap, wrap_with};
}

// Convenience constructors

/// Create a new empty style.
///
/// This is equivalent to `Style::new()`.
pub fn new_style() -> Style {
    Style::new()
}

/// Get the display width of the widest line in a string.
pub fn width(s: &str) -> usize {
    s.lines().map(display_width).max().unwrap_or(0)
}

/// Get the number of lines in a string.
pub fn height(s: &str) -> usize {
    s.lines().count().max(1)
}
