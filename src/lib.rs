//! sgr-render library crate.
//!
//! Interprets ANSI SGR (color/bold) escape sequences in captured terminal
//! output and renders the result as HTML or plain text.
//!
//! - [`ansi`]: tokenizer and chunk-boundary buffering
//! - [`color`]: palette tables and the color model
//! - [`rendition`]: the current color state and the SGR state machine
//! - [`renderer`]: HTML and plain-text renderers
//! - [`interpreter`]: the stateful entry point a caller holds
//! - [`config`]: rendering options

pub mod ansi;
pub mod color;
pub mod config;
pub mod interpreter;
pub mod renderer;
pub mod rendition;

pub use config::RenderConfig;
pub use interpreter::Interpreter;
pub use renderer::{HtmlRenderer, Renderer, TextRenderer};
pub use rendition::{ColorState, Fragment};
