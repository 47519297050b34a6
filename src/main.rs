// src/main.rs

//! `sgr-render`: converts SGR-colored text on stdin to HTML (or plain text)
//! on stdout, one line at a time.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use sgr_render::{Interpreter, RenderConfig};
use std::io::{self, BufRead, BufWriter, Write};

const USAGE: &str = "\
Usage: sgr-render [OPTIONS] < input

Options:
  --text           Strip styling instead of emitting HTML
  --classes        Use CSS classes for named colors
  --inline         Use inline styles for all colors (default)
  --no-escape      Do not escape &, < and > (input is already HTML-safe)
  --pre            Wrap HTML output in <pre class=\"ansi\">...</pre>
  --config FILE    Load rendering options from a JSON file
  -h, --help       Show this help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Html,
    Text,
}

#[derive(Debug)]
struct Options {
    mode: OutputMode,
    wrap_pre: bool,
    config: RenderConfig,
}

/// Parses command-line arguments. Returns `None` when help was requested.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<Options>> {
    let mut mode = OutputMode::Html;
    let mut wrap_pre = false;
    let mut config_path = None;
    let mut use_css_classes = None;
    let mut escape_html = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => mode = OutputMode::Text,
            "--classes" => use_css_classes = Some(true),
            "--inline" => use_css_classes = Some(false),
            "--no-escape" => escape_html = Some(false),
            "--pre" => wrap_pre = true,
            "--config" => {
                let path = args.next().context("--config requires a file argument")?;
                config_path = Some(path);
            }
            "-h" | "--help" => return Ok(None),
            other => bail!("Unknown argument '{}'\n\n{}", other, USAGE),
        }
    }

    // Flags given on the command line win over the config file.
    let mut config = match config_path {
        Some(path) => RenderConfig::load(&path)?,
        None => RenderConfig::default(),
    };
    if let Some(enabled) = use_css_classes {
        config.use_css_classes = enabled;
    }
    if let Some(enabled) = escape_html {
        config.escape_html = enabled;
    }

    Ok(Some(Options {
        mode,
        wrap_pre,
        config,
    }))
}

/// Streams `input` through one interpreter, line by line.
fn run(options: &Options, mut input: impl BufRead, output: &mut impl Write) -> Result<()> {
    let mut interp = Interpreter::with_config(options.config);
    let html = options.mode == OutputMode::Html;

    if html && options.wrap_pre {
        output.write_all(b"<pre class=\"ansi\">")?;
    }

    let mut line = Vec::new();
    let mut lines = 0usize;
    loop {
        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }
        // Decoding is the host's job; invalid bytes become U+FFFD.
        let text = String::from_utf8_lossy(&line);
        let converted = match options.mode {
            OutputMode::Html => interp.convert_to_html(&text),
            OutputMode::Text => interp.convert_to_text(&text),
        };
        output.write_all(converted.as_bytes())?;
        lines += 1;
    }

    if !interp.pending().is_empty() {
        debug!("Flushing unterminated sequence at end of input");
    }
    let tail = match options.mode {
        OutputMode::Html => interp.flush_html(),
        OutputMode::Text => interp.flush_text(),
    };
    output.write_all(tail.as_bytes())?;

    if html && options.wrap_pre {
        output.write_all(b"</pre>\n")?;
    }
    output.flush().context("Failed to flush output")?;
    info!("Converted {} lines", lines);
    Ok(())
}

/// Main entry point for the `sgr-render` filter.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(options) = parse_args(std::env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };
    debug!("Options: {:?}", options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    run(&options, stdin.lock(), &mut output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_to_string(options: &Options, input: &str) -> String {
        let mut out = Vec::new();
        run(options, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_args_produce_inline_html() {
        let options = parse_args(args(&[])).unwrap().unwrap();
        assert_eq!(options.mode, OutputMode::Html);
        assert!(!options.wrap_pre);
        assert_eq!(options.config, RenderConfig::default());
    }

    #[test]
    fn flags_set_options() {
        let options = parse_args(args(&["--text", "--classes", "--no-escape", "--pre"]))
            .unwrap()
            .unwrap();
        assert_eq!(options.mode, OutputMode::Text);
        assert!(options.wrap_pre);
        assert!(options.config.use_css_classes);
        assert!(!options.config.escape_html);
    }

    #[test]
    fn help_returns_none() {
        assert!(parse_args(args(&["--help"])).unwrap().is_none());
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["--config"])).is_err());
    }

    #[test]
    fn style_carries_across_lines() {
        let options = parse_args(args(&["--classes"])).unwrap().unwrap();
        let out = run_to_string(&options, "\x1b[31mone\ntwo\x1b[0m\n");
        assert_eq!(
            out,
            "<span class=\"ansi-red-fg\">one\n</span>\
             <span class=\"ansi-red-fg\">two</span>\n"
        );
    }

    #[test]
    fn text_mode_strips_and_flushes_tail() {
        let options = parse_args(args(&["--text"])).unwrap().unwrap();
        let out = run_to_string(&options, "a\x1b[1mb\nc\x1b[3");
        assert_eq!(out, "ab\nc\x1b[3");
    }

    #[test]
    fn pre_wrapper_surrounds_html() {
        let options = parse_args(args(&["--pre"])).unwrap().unwrap();
        let out = run_to_string(&options, "x");
        assert_eq!(out, "<pre class=\"ansi\">x</pre>\n");
    }
}
