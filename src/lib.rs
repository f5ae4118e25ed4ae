//! Double-dollar LaTeX math for block-structured documents.
//!
//! The core is a delimiter parser: it splits text into literal text and math
//! segments wherever a `$$…$$` pair appears.
//!
//! ```rust
//! use dollarmath::{parse, Options, SegmentKind};
//!
//! let segments = parse("x $$a$$ y $$b$$ z", &Options::default());
//! let kinds: Vec<_> = segments.iter().map(|s| (s.kind, s.content)).collect();
//! assert_eq!(kinds, vec![
//!     (SegmentKind::Text, "x "),
//!     (SegmentKind::Math, "a"),
//!     (SegmentKind::Text, " y "),
//!     (SegmentKind::Math, "b"),
//!     (SegmentKind::Text, " z"),
//! ]);
//! ```
//!
//! Around it sit a small block [`Document`] whose paragraphs can have their
//! `$$…$$` spans turned into inline math nodes, the [`commands`] that insert
//! math blocks, and an HTML renderer that hands math to a pluggable
//! typesetter.
//!
//! ```rust
//! use dollarmath::{text_to_html, Options};
//!
//! assert_eq!(
//!     text_to_html("Hello, $$x < y$$!", &Options::default()),
//!     "Hello, <span data-math-style=\"inline\">x &lt; y</span>!"
//! );
//! ```
//!
//! The parser never fails and never checks LaTeX syntax: unpaired
//! delimiters stay in the surrounding text, and whether an expression
//! typesets is the renderer's business.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces
)]

pub mod adapters;
pub mod commands;
mod document;
pub mod html;
pub mod nodes;
mod parser;
pub mod plugins;
mod scanners;
mod strings;
#[cfg(test)]
mod tests;

pub use document::{
    Block, BlockContent, BlockId, Document, DocumentError, Inline, InlineMath, NodeMath,
    DEFAULT_BLOCK_LATEX,
};
pub use html::{format_document, format_html};
pub use nodes::{reconstruct, Segment, SegmentKind, Span};
pub use parser::options::{self, Plugins, RenderPlugins};
pub use parser::{
    contains_math_syntax, extract_math_expressions, parse, Options, Parser, Spans,
};
pub use scanners::DELIMITER;

use std::fmt;

/// Render text containing `$$…$$` math to HTML.
pub fn text_to_html(text: &str, options: &Options) -> String {
    let mut s = String::new();
    // With no adapter set, writing to a String can't fail.
    let _ = format_html(text, options, &Plugins::default(), &mut s);
    s
}

/// Render text containing `$$…$$` math to HTML using the given plugins.
///
/// Fails when the math renderer adapter does.
pub fn text_to_html_with_plugins(
    text: &str,
    options: &Options,
    plugins: &Plugins,
) -> Result<String, fmt::Error> {
    let mut s = String::new();
    format_html(text, options, plugins, &mut s)?;
    Ok(s)
}

/// Render a document to HTML.
pub fn document_to_html(doc: &Document) -> String {
    let mut s = String::new();
    // With no adapter set, writing to a String can't fail.
    let _ = format_document(doc, &Plugins::default(), &mut s);
    s
}

/// Render a document to HTML using the given plugins.
///
/// Fails when the math renderer adapter does.
pub fn document_to_html_with_plugins(
    doc: &Document,
    plugins: &Plugins,
) -> Result<String, fmt::Error> {
    let mut s = String::new();
    format_document(doc, plugins, &mut s)?;
    Ok(s)
}
