pub mod options;

use std::iter::FusedIterator;
use std::ops::Range;

use tracing::trace;

use crate::nodes::{Segment, Span};
pub use crate::parser::options::Options;
use crate::scanners;
use crate::strings;

/// Split text into literal text and `$$…$$` math segments.
///
/// See the documentation of the crate root for an example.
pub fn parse<'s>(text: &'s str, options: &Options) -> Vec<Segment<'s>> {
    Parser::new(options).parse(text)
}

/// Whether `text` holds at least one `$$…$$` pair.
///
/// Always `false` when [`Options::inline_mode`] is off.
pub fn contains_math_syntax(text: &str, options: &Options) -> bool {
    Parser::new(options).contains_math_syntax(text)
}

/// The trimmed expression of every `$$…$$` pair in `text`, in order.
pub fn extract_math_expressions<'s>(text: &'s str, options: &Options) -> Vec<&'s str> {
    Parser::new(options).extract_math_expressions(text)
}

/// A delimiter parser bound to a set of options.
///
/// Holds no per-call state, so one parser may be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'o> {
    options: &'o Options,
}

impl<'o> Parser<'o> {
    /// Create a parser with the given options.
    pub fn new(options: &'o Options) -> Self {
        Parser { options }
    }

    /// Parse `text` into segments.
    pub fn parse<'s>(&self, text: &'s str) -> Vec<Segment<'s>> {
        let mut segments = Vec::new();
        if text.is_empty() {
            return segments;
        }

        let mut last = 0;
        for span in self.spans(text) {
            if span.start > last {
                segments.push(Segment::text(
                    &text[last..span.start],
                    (last, span.start).into(),
                ));
            }
            segments.push(Segment::math(math_content(text, span), span));
            last = span.end;
        }

        if last < text.len() {
            segments.push(Segment::text(&text[last..], (last, text.len()).into()));
        }

        trace!(
            len = text.len(),
            segments = segments.len(),
            "parsed delimited math"
        );
        segments
    }

    /// Whether `text` holds at least one delimiter pair.
    pub fn contains_math_syntax(&self, text: &str) -> bool {
        self.spans(text).next().is_some()
    }

    /// The trimmed expression of every delimiter pair in `text`.
    pub fn extract_math_expressions<'s>(&self, text: &'s str) -> Vec<&'s str> {
        self.spans(text)
            .map(|span| math_content(text, span))
            .collect()
    }

    /// The delimiter-inclusive spans of every math match in `text`.
    pub fn spans<'s>(&self, text: &'s str) -> Spans<'s> {
        Spans {
            bytes: text.as_bytes(),
            pos: if self.options.inline_mode {
                0
            } else {
                text.len()
            },
        }
    }
}

/// Iterator over the math spans of a string; see [`Parser::spans`].
#[derive(Debug, Clone)]
pub struct Spans<'s> {
    bytes: &'s [u8],
    pos: usize,
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        match scanners::math_span(self.bytes, self.pos) {
            Some(range) => {
                self.pos = range.end;
                Some(range.into())
            }
            None => {
                self.pos = self.bytes.len();
                None
            }
        }
    }
}

impl FusedIterator for Spans<'_> {}

/// Interior of `span` with [`strings::is_space`] trimmed from both ends. Unlike
/// `str::trim`, U+FEFF is stripped and U+0085 is kept.
fn math_content(text: &str, span: Span) -> &str {
    let range: Range<usize> = span.into();
    strings::trim(&text[scanners::interior(&range)])
}
