// src/renderer/text.rs

use super::Renderer;
use crate::rendition::Fragment;

/// Strips all styling. Output is the input with escape sequences removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        TextRenderer
    }
}

impl Renderer for TextRenderer {
    fn render(&self, fragment: &Fragment) -> String {
        fragment.text.clone()
    }
}
