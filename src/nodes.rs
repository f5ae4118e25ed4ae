//! The segment model produced by the delimiter parser.

use std::fmt;
use std::ops::Range;

/// The kind of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Literal text, kept verbatim.
    Text,

    /// A math expression found between a pair of `$$` delimiters.
    Math,
}

/// A half-open byte range into the parsed input.
///
/// For a math segment the span covers both delimiters, so `&input[span]`
/// always yields the exact original text a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
}

impl Span {
    /// The number of bytes covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Span {
        Span { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Span {
        Span {
            start: range.start,
            end: range.end,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Range<usize> {
        span.start..span.end
    }
}

/// One piece of parsed input.
///
/// Segments borrow from the string they were parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'s> {
    /// Whether this is literal text or a math expression.
    pub kind: SegmentKind,

    /// For text, the literal text. For math, the expression between the
    /// delimiters with surrounding whitespace trimmed.
    pub content: &'s str,

    /// Where the segment came from, delimiters included.
    pub span: Span,
}

impl<'s> Segment<'s> {
    pub(crate) fn text(content: &'s str, span: Span) -> Self {
        Segment {
            kind: SegmentKind::Text,
            content,
            span,
        }
    }

    pub(crate) fn math(content: &'s str, span: Span) -> Self {
        Segment {
            kind: SegmentKind::Math,
            content,
            span,
        }
    }

    /// Whether this is a math segment.
    pub fn is_math(&self) -> bool {
        self.kind == SegmentKind::Math
    }

    /// Whether this is a text segment.
    pub fn is_text(&self) -> bool {
        self.kind == SegmentKind::Text
    }

    /// The original text of this segment, delimiters included.
    ///
    /// `source` must be the string the segment was parsed from.
    ///
    /// ```rust
    /// # use dollarmath::{parse, Options};
    /// let input = "x $$ a $$";
    /// let segments = parse(input, &Options::default());
    /// assert_eq!(segments[1].content, "a");
    /// assert_eq!(segments[1].source(input), "$$ a $$");
    /// ```
    pub fn source<'i>(&self, source: &'i str) -> &'i str {
        &source[self.span.start..self.span.end]
    }
}

/// Rebuild the parsed input from its segments.
///
/// Math content is trimmed, so this re-reads each segment's span from
/// `source` rather than re-serializing `content`.
pub fn reconstruct(source: &str, segments: &[Segment<'_>]) -> String {
    let mut out = String::with_capacity(source.len());
    for segment in segments {
        out.push_str(segment.source(source));
    }
    out
}
