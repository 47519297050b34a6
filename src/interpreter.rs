// src/interpreter.rs

//! The stateful SGR interpreter.
//!
//! An [`Interpreter`] is created once per logical stream (one log panel, one
//! captured console) and fed that stream's text in order. It carries the
//! current rendition and any partial escape sequence from one call to the
//! next, so chunk boundaries never change the result.
//!
//! ```
//! use sgr_render::{Interpreter, RenderConfig};
//!
//! let mut interp = Interpreter::with_config(RenderConfig {
//!     use_css_classes: true,
//!     ..RenderConfig::default()
//! });
//! let html = interp.convert_to_html("plain \x1b[1;31mbold-red\x1b[0m plain");
//! assert_eq!(
//!     html,
//!     "plain <span class=\"ansi-bright-red-fg\">bold-red</span> plain"
//! );
//! ```
//!
//! An instance is plain mutable state: one stream, one caller, calls in order.

use crate::ansi::{Command, StreamBuffer};
use crate::config::RenderConfig;
use crate::renderer::{HtmlRenderer, Renderer, TextRenderer};
use crate::rendition::{ColorState, Fragment};
use log::trace;

/// Converts SGR-annotated text to HTML or plain text, one chunk at a time.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    state: ColorState,
    stream: StreamBuffer,
    html: HtmlRenderer,
}

impl Interpreter {
    /// Creates an interpreter with default options (inline styles, escaping on).
    pub fn new() -> Self {
        Interpreter::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Interpreter {
            html: HtmlRenderer::new(config),
            ..Interpreter::default()
        }
    }

    /// Converts the next chunk of the stream to an HTML fragment.
    pub fn convert_to_html(&mut self, text: &str) -> String {
        let html = self.html;
        self.convert_with(text, &html)
    }

    /// Converts the next chunk of the stream to plain text, dropping styling.
    pub fn convert_to_text(&mut self, text: &str) -> String {
        self.convert_with(text, &TextRenderer)
    }

    /// Converts the next chunk with any renderer.
    pub fn convert_with<R: Renderer>(&mut self, text: &str, renderer: &R) -> String {
        let parts = self
            .fragments(text)
            .iter()
            .map(|fragment| renderer.render(fragment))
            .collect();
        renderer.compose(parts)
    }

    /// Parses the next chunk into styled fragments without rendering them.
    ///
    /// Empty text runs are omitted, but the commands in front of them still
    /// update the state.
    pub fn fragments(&mut self, text: &str) -> Vec<Fragment> {
        let segments = self.stream.feed(text);
        let mut fragments = Vec::with_capacity(segments.len());
        for segment in segments {
            if let Some(Command::Sgr(params)) = &segment.command {
                self.state = self.state.apply(params);
                trace!("SGR {:?} -> {:?}", params, self.state);
            }
            if !segment.text.is_empty() {
                fragments.push(Fragment::new(segment.text, self.state));
            }
        }
        fragments
    }

    /// Renders any buffered partial sequence as literal HTML in the current
    /// style and clears it. For hosts that want unterminated sequences visible
    /// at the end of a stream.
    pub fn flush_html(&mut self) -> String {
        let html = self.html;
        self.flush_with(&html)
    }

    /// Like [`Interpreter::flush_html`], for plain text.
    pub fn flush_text(&mut self) -> String {
        self.flush_with(&TextRenderer)
    }

    fn flush_with<R: Renderer>(&mut self, renderer: &R) -> String {
        let pending = self.stream.take_pending();
        if pending.is_empty() {
            return String::new();
        }
        trace!("Flushing {} pending bytes as text", pending.len());
        renderer.render(&Fragment::new(pending, self.state))
    }

    /// The buffered partial escape sequence, empty if none.
    pub fn pending(&self) -> &str {
        self.stream.pending()
    }

    /// The rendition that will apply to the next text.
    pub fn state(&self) -> ColorState {
        self.state
    }

    /// Returns to the freshly constructed state, keeping the options.
    pub fn reset(&mut self) {
        self.state = ColorState::default();
        self.stream.clear();
    }

    pub fn config(&self) -> RenderConfig {
        self.html.config()
    }

    pub fn use_css_classes(&self) -> bool {
        self.html.config().use_css_classes
    }

    pub fn set_use_css_classes(&mut self, enabled: bool) {
        self.html.set_use_css_classes(enabled);
    }

    pub fn escape_html(&self) -> bool {
        self.html.config().escape_html
    }

    pub fn set_escape_html(&mut self, enabled: bool) {
        self.html.set_escape_html(enabled);
    }
}
