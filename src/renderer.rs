// src/renderer.rs

//! This module defines the `Renderer` trait and its two implementations.
//!
//! A renderer turns one [`Fragment`] (a text run plus the rendition it was
//! produced under) into an output string, and composes the per-fragment
//! strings of one conversion call into the final result.
//!
//! - [`HtmlRenderer`]: escapes the text and wraps styled runs in `<span>`s.
//! - [`TextRenderer`]: drops all styling and keeps the text as is.

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::rendition::Fragment;

/// Turns fragments into output.
pub trait Renderer {
    /// Renders a single fragment.
    fn render(&self, fragment: &Fragment) -> String;

    /// Joins the rendered fragments of one call. Defaults to concatenation.
    fn compose(&self, parts: Vec<String>) -> String {
        parts.concat()
    }
}

#[cfg(test)]
mod tests;
