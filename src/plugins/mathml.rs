//! Adapter for typesetting math as MathML with pulldown-latex.

use std::fmt;

use pulldown_latex::config::{DisplayMode, RenderConfig};
use pulldown_latex::mathml::push_mathml;
use pulldown_latex::{Parser, Storage};
use tracing::debug;

use crate::adapters::MathRendererAdapter;
use crate::html::escape;

#[derive(Debug, Default, Clone, Copy)]
/// Renders LaTeX to MathML.
///
/// Expressions that fail to parse are written as an error span holding the
/// escaped source, with the error message in its `title`.
pub struct MathmlAdapter;

impl MathmlAdapter {
    /// Construct a new `MathmlAdapter`.
    pub fn new() -> Self {
        MathmlAdapter
    }
}

impl MathRendererAdapter for MathmlAdapter {
    fn write_math(&self, output: &mut dyn fmt::Write, latex: &str, display: bool) -> fmt::Result {
        let storage = Storage::new();
        let parser = Parser::new(latex, &storage);
        let config = RenderConfig {
            display_mode: if display {
                DisplayMode::Block
            } else {
                DisplayMode::Inline
            },
            ..Default::default()
        };

        let events: Vec<_> = parser.collect();
        let errors: Vec<String> = events
            .iter()
            .filter_map(|e| e.as_ref().err().map(|err| err.to_string()))
            .collect();

        if !errors.is_empty() {
            return write_error(output, latex, &errors.join("; "), display);
        }

        let mut mathml = String::new();
        match push_mathml(&mut mathml, events.into_iter(), config) {
            Ok(_) => output.write_str(&mathml),
            Err(e) => write_error(output, latex, &e.to_string(), display),
        }
    }
}

fn write_error(output: &mut dyn fmt::Write, latex: &str, error: &str, display: bool) -> fmt::Result {
    debug!(latex, error, "math failed to typeset");
    let mode_class = if display {
        "math-display"
    } else {
        "math-inline"
    };
    write!(output, "<span class=\"math math-error {}\" title=\"", mode_class)?;
    escape(output, error)?;
    output.write_str("\"><code>")?;
    escape(output, latex)?;
    output.write_str("</code></span>")
}
