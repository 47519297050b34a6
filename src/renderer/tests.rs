// src/renderer/tests.rs

use super::html::escape_html;
use super::{HtmlRenderer, Renderer, TextRenderer};
use crate::color::{NamedColor, PaletteEntry};
use crate::config::RenderConfig;
use crate::rendition::{ColorState, Fragment};

fn classes() -> HtmlRenderer {
    HtmlRenderer::new(RenderConfig {
        use_css_classes: true,
        escape_html: true,
    })
}

fn inline() -> HtmlRenderer {
    HtmlRenderer::new(RenderConfig::default())
}

fn fragment(text: &str, bright: bool, fg: Option<PaletteEntry>, bg: Option<PaletteEntry>) -> Fragment {
    Fragment::new(text, ColorState { bright, fg, bg })
}

fn red() -> Option<PaletteEntry> {
    Some(PaletteEntry::named(NamedColor::Red))
}

// --- Text ---

#[test]
fn text_renderer_passes_text_through() {
    let renderer = TextRenderer::new();
    let styled = fragment("a<b>&c", true, red(), red());
    assert_eq!(renderer.render(&styled), "a<b>&c");
}

#[test]
fn compose_concatenates() {
    let parts = vec!["a".to_string(), String::new(), "bc".to_string()];
    assert_eq!(TextRenderer::new().compose(parts.clone()), "abc");
    assert_eq!(inline().compose(parts), "abc");
}

// --- Escaping ---

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    assert_eq!(escape_html("\"quotes\" 'stay'"), "\"quotes\" 'stay'");
}

#[test]
fn unstyled_text_is_escaped_without_wrapper() {
    let plain = fragment("<b>", false, None, None);
    assert_eq!(inline().render(&plain), "&lt;b&gt;");
    assert_eq!(classes().render(&plain), "&lt;b&gt;");
}

#[test]
fn escaping_can_be_disabled() {
    let mut renderer = inline();
    renderer.set_escape_html(false);
    let plain = fragment("<b>", false, None, None);
    assert_eq!(renderer.render(&plain), "<b>");
}

#[test]
fn empty_text_renders_nothing() {
    assert_eq!(classes().render(&fragment("", true, red(), red())), "");
}

// --- Class mode ---

#[test]
fn class_mode_named_foreground() {
    assert_eq!(
        classes().render(&fragment("x", false, red(), None)),
        "<span class=\"ansi-red-fg\">x</span>"
    );
}

#[test]
fn class_mode_named_foreground_and_background() {
    let bg = Some(PaletteEntry::named(NamedColor::BrightBlue));
    assert_eq!(
        classes().render(&fragment("x", false, red(), bg)),
        "<span class=\"ansi-red-fg ansi-bright-blue-bg\">x</span>"
    );
}

#[test]
fn class_mode_truecolor_falls_back_to_inline_style() {
    let fg = Some(PaletteEntry::true_color(1, 2, 3));
    let bg = Some(PaletteEntry::named(NamedColor::Green));
    assert_eq!(
        classes().render(&fragment("x", false, fg, bg)),
        "<span class=\"ansi-green-bg\" style=\"color:rgb(1,2,3)\">x</span>"
    );
}

#[test]
fn bright_without_foreground_uses_bright_white() {
    assert_eq!(
        classes().render(&fragment("x", true, None, None)),
        "<span class=\"ansi-bright-white-fg\">x</span>"
    );
    assert_eq!(
        inline().render(&fragment("x", true, None, None)),
        "<span style=\"color:rgb(255,255,255)\">x</span>"
    );
}

#[test]
fn bright_keeps_explicit_foreground() {
    assert_eq!(
        classes().render(&fragment("x", true, red(), None)),
        "<span class=\"ansi-red-fg\">x</span>"
    );
}

#[test]
fn background_only_has_no_foreground() {
    assert_eq!(
        classes().render(&fragment("x", false, None, red())),
        "<span class=\"ansi-red-bg\">x</span>"
    );
}

// --- Inline mode ---

#[test]
fn inline_mode_uses_rgb_styles() {
    let bg = Some(PaletteEntry::true_color(0, 0, 95));
    assert_eq!(
        inline().render(&fragment("a&b", false, red(), bg)),
        "<span style=\"color:rgb(187,0,0);background-color:rgb(0,0,95)\">a&amp;b</span>"
    );
}

#[test]
fn switching_to_class_mode_takes_effect() {
    let mut renderer = inline();
    renderer.set_use_css_classes(true);
    assert!(renderer.config().use_css_classes);
    assert_eq!(
        renderer.render(&fragment("x", false, red(), None)),
        "<span class=\"ansi-red-fg\">x</span>"
    );
}
