//! Integration tests for style rendering: escape composition, nesting
//! safety, and color-level degradation.

use lacquer::{
    BasicColor, ColorLevel, Modifier, Rgb, Style, Styler, color_level, has_ansi, hyperlink,
    reset_color_level, set_color_level, strip_ansi, visible_length,
};

// ===========================================================================
// Helpers
// ===========================================================================

/// Styler pinned to truecolor so output does not depend on the
/// environment.
fn truecolor() -> Styler {
    Styler::with_level(ColorLevel::TrueColor)
}

/// Render a style at an explicit level.
fn render_at(level: ColorLevel, style: &Style, text: &str) -> String {
    Styler::with_level(level).render(style, text)
}

/// Check if a string contains a specific SGR code, standalone or inside
/// a compound sequence.
fn contains_sgr(s: &str, code: &str) -> bool {
    let standalone = format!("\x1b[{code}m");
    let prefix = format!("\x1b[{code};");
    let suffix = format!(";{code}m");
    let middle = format!(";{code};");
    s.contains(&standalone) || s.contains(&prefix) || s.contains(&suffix) || s.contains(&middle)
}

// ===========================================================================
// 1. Modifier sequences
// ===========================================================================

#[test]
fn every_modifier_opens_and_closes_with_its_own_codes() {
    let cases = [
        (Modifier::Bold, "1", "22"),
        (Modifier::Dim, "2", "22"),
        (Modifier::Italic, "3", "23"),
        (Modifier::Underline, "4", "24"),
        (Modifier::DoubleUnderline, "21", "24"),
        (Modifier::Blink, "5", "25"),
        (Modifier::RapidBlink, "6", "25"),
        (Modifier::Inverse, "7", "27"),
        (Modifier::Hidden, "8", "28"),
        (Modifier::Strikethrough, "9", "29"),
        (Modifier::Framed, "51", "54"),
        (Modifier::Encircled, "52", "54"),
        (Modifier::Overline, "53", "55"),
    ];
    let styler = truecolor();
    for (modifier, open, close) in cases {
        let out = styler.render(&Style::new().modifier(modifier), "x");
        assert_eq!(
            out,
            format!("\x1b[{open}mx\x1b[{close}m"),
            "wrong codes for {modifier:?}"
        );
    }
}

#[test]
fn builder_shorthands_match_the_modifier_route() {
    let styler = truecolor();
    assert_eq!(
        styler.render(&Style::new().bold(), "x"),
        styler.render(&Style::new().modifier(Modifier::Bold), "x"),
    );
    assert_eq!(styler.render(&Style::new().strikethrough(), "x"), "\x1b[9mx\x1b[29m");
}

// ===========================================================================
// 2. Color sequences
// ===========================================================================

#[test]
fn basic_colors_use_the_classic_ranges() {
    let styler = Styler::with_level(ColorLevel::Basic);
    assert_eq!(
        styler.render(&Style::new().foreground(BasicColor::Red), "x"),
        "\x1b[31mx\x1b[39m",
    );
    assert_eq!(
        styler.render(&Style::new().foreground(BasicColor::BrightCyan), "x"),
        "\x1b[96mx\x1b[39m",
    );
    assert_eq!(
        styler.render(&Style::new().background(BasicColor::Blue), "x"),
        "\x1b[44mx\x1b[49m",
    );
    assert_eq!(
        styler.render(&Style::new().background(BasicColor::BrightBlack), "x"),
        "\x1b[100mx\x1b[49m",
    );
}

#[test]
fn rgb_colors_render_as_24_bit_parameters() {
    let out = truecolor().render(&Style::new().foreground(Rgb::new(255, 99, 71)), "x");
    assert_eq!(out, "\x1b[38;2;255;99;71mx\x1b[39m");
    let out = truecolor().render(&Style::new().background((0, 0, 255)), "x");
    assert_eq!(out, "\x1b[48;2;0;0;255mx\x1b[49m");
}

#[test]
fn indexed_colors_render_as_256_palette_parameters() {
    let out = render_at(
        ColorLevel::Ansi256,
        &Style::new().foreground(196u8).background(17u8),
        "x",
    );
    assert_eq!(out, "\x1b[38;5;196m\x1b[48;5;17mx\x1b[49m\x1b[39m");
}

// ===========================================================================
// 3. Composition order
// ===========================================================================

#[test]
fn opens_apply_in_insertion_order_and_close_in_reverse() {
    let style = Style::new()
        .bold()
        .italic()
        .foreground(BasicColor::Red)
        .background(BasicColor::Blue);
    let out = render_at(ColorLevel::Basic, &style, "hi");
    assert_eq!(out, "\x1b[1m\x1b[3m\x1b[31m\x1b[44mhi\x1b[49m\x1b[39m\x1b[23m\x1b[22m");
}

#[test]
fn compiled_style_exposes_the_stacks() {
    let styler = truecolor();
    let compiled = styler.compile(&Style::new().bold().foreground("#ff0000"));
    assert_eq!(compiled.open_stack().len(), 2);
    assert_eq!(compiled.close_stack().len(), 2);
    assert_eq!(compiled.open(), "\x1b[1m\x1b[38;2;255;0;0m");
    assert_eq!(compiled.close(), "\x1b[39m\x1b[22m");
    assert!(!compiled.is_noop());
}

// ===========================================================================
// 4. Nesting safety
// ===========================================================================

#[test]
fn inner_close_reopens_the_outer_style() {
    let styler = truecolor();
    let inner = styler.render(&Style::new().foreground("#00ff00"), "B");
    let outer = styler.render(&Style::new().foreground("#ff0000"), &format!("A {inner} C"));
    assert_eq!(
        outer,
        "\x1b[38;2;255;0;0mA \x1b[38;2;0;255;0mB\x1b[39m\x1b[38;2;255;0;0m C\x1b[39m",
    );
}

#[test]
fn three_levels_of_nesting_stay_balanced() {
    let styler = truecolor();
    let blue = styler.render(&Style::new().foreground("#0000ff"), "c");
    let green = styler.render(&Style::new().foreground("#00ff00"), &format!("b{blue}"));
    let red = styler.render(&Style::new().foreground("#ff0000"), &format!("a{green}d"));

    assert_eq!(strip_ansi(&red), "abcd");
    assert_eq!(red.matches("\x1b[39m").count(), 3, "one close per nesting exit: {red:?}");
    // Every close except the final one is immediately followed by a
    // re-open of the red outer color.
    assert_eq!(red.matches("\x1b[39m\x1b[38;2;255;0;0m").count(), 2);
    assert!(red.ends_with("\x1b[39m"));
}

#[test]
fn nesting_with_different_channels_does_not_reopen() {
    // Bold inside a color: the inner close code never appears in the
    // outer close set, so no reopening is needed and none happens.
    let styler = truecolor();
    let bold = styler.render(&Style::new().bold(), "B");
    let out = styler.render(&Style::new().foreground("#ff0000"), &format!("A {bold}"));
    assert_eq!(out, "\x1b[38;2;255;0;0mA \x1b[1mB\x1b[22m\x1b[39m");
}

#[test]
fn rendering_empty_text_gives_empty_output() {
    let styler = truecolor();
    assert_eq!(styler.render(&Style::new().bold().foreground("#ff0000"), ""), "");
}

// ===========================================================================
// 5. Degradation across color levels
// ===========================================================================

#[test]
fn rgb_degrades_down_the_level_ladder() {
    let style = Style::new().foreground(Rgb::new(255, 0, 0));
    assert_eq!(
        render_at(ColorLevel::TrueColor, &style, "x"),
        "\x1b[38;2;255;0;0mx\x1b[39m",
    );
    assert_eq!(render_at(ColorLevel::Ansi256, &style, "x"), "\x1b[38;5;196mx\x1b[39m");
    assert_eq!(render_at(ColorLevel::Basic, &style, "x"), "x", "rgb drops below ansi256");
    assert_eq!(render_at(ColorLevel::None, &style, "x"), "x");
}

#[test]
fn indexed_color_needs_at_least_ansi256() {
    let style = Style::new().foreground(196u8);
    assert_eq!(render_at(ColorLevel::Ansi256, &style, "x"), "\x1b[38;5;196mx\x1b[39m");
    assert_eq!(render_at(ColorLevel::Basic, &style, "x"), "x");
}

#[test]
fn modifiers_survive_when_colors_drop() {
    let style = Style::new().bold().foreground(Rgb::new(18, 52, 86));
    let out = render_at(ColorLevel::Basic, &style, "x");
    assert_eq!(out, "\x1b[1mx\x1b[22m");
}

#[test]
fn level_none_renders_plain_text() {
    let style = Style::new()
        .bold()
        .italic()
        .foreground("#ff0000")
        .background(BasicColor::Blue);
    let out = render_at(ColorLevel::None, &style, "plain");
    assert_eq!(out, "plain");
    assert!(!has_ansi(&out));
}

// ===========================================================================
// 6. String color resolution
// ===========================================================================

#[test]
fn string_colors_accept_many_formats() {
    let styler = truecolor();
    assert_eq!(
        styler.render(&Style::new().foreground("#ff0000"), "x"),
        "\x1b[38;2;255;0;0mx\x1b[39m",
    );
    assert_eq!(
        styler.render(&Style::new().foreground("tomato"), "x"),
        "\x1b[38;2;255;99;71mx\x1b[39m",
    );
    assert_eq!(
        styler.render(&Style::new().foreground("196"), "x"),
        "\x1b[38;2;255;0;0mx\x1b[39m",
        "numeric strings resolve through the 256-color palette",
    );
    assert_eq!(
        styler.render(&Style::new().foreground("rgb(0, 128, 255)"), "x"),
        "\x1b[38;2;0;128;255mx\x1b[39m",
    );
}

#[test]
fn string_colors_quantize_at_ansi256() {
    let out = render_at(ColorLevel::Ansi256, &Style::new().foreground("tomato"), "x");
    assert_eq!(out, "\x1b[38;5;209mx\x1b[39m");
}

#[test]
fn unparseable_color_falls_back_to_black() {
    // A capturing subscriber keeps the warn path quiet under test while
    // still exercising it.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let styler = truecolor();
    let out = styler.render(&Style::new().foreground("definitely-not-a-color"), "x");
    assert_eq!(out, "\x1b[38;2;0;0;0mx\x1b[39m");
}

// ===========================================================================
// 7. Compilation caching
// ===========================================================================

#[test]
fn repeated_compiles_share_one_compiled_style() {
    let styler = truecolor();
    let style = Style::new().bold().foreground("#abcdef");
    let first = styler.compile(&style);
    let second = styler.compile(&style);
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn cache_respects_level_changes() {
    let styler = truecolor();
    let style = Style::new().foreground(Rgb::new(255, 0, 0));
    assert!(styler.render(&style, "x").contains("38;2;255;0;0"));

    styler.set_level(ColorLevel::Ansi256);
    assert!(
        styler.render(&style, "x").contains("38;5;196"),
        "stale truecolor output after a level change",
    );

    styler.set_level(ColorLevel::TrueColor);
    assert!(styler.render(&style, "x").contains("38;2;255;0;0"));
}

// ===========================================================================
// 8. Process-wide default styler
// ===========================================================================

#[test]
fn global_level_override_and_reset() {
    set_color_level(ColorLevel::TrueColor);
    assert_eq!(color_level(), ColorLevel::TrueColor);
    let out = Style::new().foreground("#336699").render("x");
    assert_eq!(out, "\x1b[38;2;51;102;153mx\x1b[39m");

    set_color_level(ColorLevel::None);
    assert_eq!(Style::new().foreground("#336699").render("x"), "x");

    reset_color_level();
    let _ = color_level();
}

// ===========================================================================
// 9. Hyperlinks and stripping
// ===========================================================================

#[test]
fn hyperlink_wraps_text_in_osc8() {
    let link = hyperlink("https://example.com", "docs");
    assert_eq!(link, "\x1b]8;;https://example.com\x1b\\docs\x1b]8;;\x1b\\");
    assert_eq!(strip_ansi(&link), "docs");
    assert_eq!(visible_length(&link), 4);
}

#[test]
fn rendered_output_strips_back_to_the_input() {
    let styler = truecolor();
    let style = Style::new()
        .bold()
        .underline()
        .foreground("#ff8800")
        .background(BasicColor::Black);
    let out = styler.render(&style, "The quick brown fox");
    assert_eq!(strip_ansi(&out), "The quick brown fox");
    assert_eq!(visible_length(&out), 19);
    assert!(contains_sgr(&out, "1"));
    assert!(contains_sgr(&out, "4"));
}
