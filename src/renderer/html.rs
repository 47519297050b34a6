// src/renderer/html.rs

use super::Renderer;
use crate::color::{NamedColor, PaletteEntry, Rgb};
use crate::config::RenderConfig;
use crate::rendition::Fragment;

/// Foreground used for bright text that has no explicit foreground color.
const BRIGHT_DEFAULT_FG: NamedColor = NamedColor::BrightWhite;

/// Renders fragments as HTML.
///
/// Unstyled runs come out as (escaped) bare text. Styled runs are wrapped in a
/// single `<span>` carrying `class` and/or `style` attributes, in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        HtmlRenderer { config }
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    pub fn set_use_css_classes(&mut self, enabled: bool) {
        self.config.use_css_classes = enabled;
    }

    pub fn set_escape_html(&mut self, enabled: bool) {
        self.config.escape_html = enabled;
    }

    /// Adds either a class or an inline declaration for one color.
    fn push_color(
        &self,
        entry: &PaletteEntry,
        class_suffix: &str,
        property: &str,
        classes: &mut Vec<String>,
        styles: &mut Vec<String>,
    ) {
        match entry.class_name() {
            Some(class) if self.config.use_css_classes => {
                classes.push(format!("{}-{}", class, class_suffix));
            }
            _ => styles.push(format!("{}:{}", property, css_rgb(entry.rgb))),
        }
    }
}

fn css_rgb(Rgb(r, g, b): Rgb) -> String {
    format!("rgb({},{},{})", r, g, b)
}

/// Escapes the three characters that can change HTML structure in text
/// content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl Renderer for HtmlRenderer {
    fn render(&self, fragment: &Fragment) -> String {
        if fragment.text.is_empty() {
            return String::new();
        }

        let text = if self.config.escape_html {
            escape_html(&fragment.text)
        } else {
            fragment.text.clone()
        };

        if fragment.is_unstyled() {
            return text;
        }

        let fg = fragment.fg.or_else(|| {
            fragment
                .bright
                .then(|| PaletteEntry::named(BRIGHT_DEFAULT_FG))
        });

        let mut classes = Vec::new();
        let mut styles = Vec::new();
        if let Some(fg) = &fg {
            self.push_color(fg, "fg", "color", &mut classes, &mut styles);
        }
        if let Some(bg) = &fragment.bg {
            self.push_color(bg, "bg", "background-color", &mut classes, &mut styles);
        }

        let mut out = String::with_capacity(text.len() + 64);
        out.push_str("<span");
        if !classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&classes.join(" "));
            out.push('"');
        }
        if !styles.is_empty() {
            out.push_str(" style=\"");
            out.push_str(&styles.join(";"));
            out.push('"');
        }
        out.push('>');
        out.push_str(&text);
        out.push_str("</span>");
        out
    }
}
