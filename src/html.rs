//! HTML output for parsed text and documents.

use std::fmt::{self, Write};

use crate::document::{BlockContent, Document, Inline};
use crate::nodes::SegmentKind;
use crate::parser::{Options, Parser};
use crate::Plugins;

/// Render the segments of `text` as HTML.
///
/// Text is escaped; math goes through the configured
/// [`MathRendererAdapter`](crate::adapters::MathRendererAdapter), or is
/// emitted escaped within `<span data-math-style="inline">` when none is
/// set.
pub fn format_html(
    text: &str,
    options: &Options,
    plugins: &Plugins,
    output: &mut dyn Write,
) -> fmt::Result {
    for segment in Parser::new(options).parse(text) {
        match segment.kind {
            SegmentKind::Text => escape(output, segment.content)?,
            SegmentKind::Math => write_math(output, plugins, segment.content, false)?,
        }
    }
    Ok(())
}

/// Render a whole document as HTML.
///
/// Paragraphs become `<p>` elements and math blocks become
/// `<div data-math-style="display">` elements, one per line.
pub fn format_document(doc: &Document, plugins: &Plugins, output: &mut dyn Write) -> fmt::Result {
    for block in doc.blocks() {
        match &block.content {
            BlockContent::Paragraph(inlines) => {
                output.write_str("<p>")?;
                for inline in inlines {
                    match inline {
                        Inline::Text(text) => escape(output, text)?,
                        Inline::Math(math) => write_math(output, plugins, &math.latex, false)?,
                    }
                }
                output.write_str("</p>\n")?;
            }
            BlockContent::Math(math) => {
                write_math(output, plugins, &math.latex, true)?;
                output.write_char('\n')?;
            }
        }
    }
    Ok(())
}

fn write_math(output: &mut dyn Write, plugins: &Plugins, latex: &str, display: bool) -> fmt::Result {
    if let Some(renderer) = plugins.render.math_renderer {
        return renderer.write_math(output, latex, display);
    }

    let (tag, style) = if display {
        ("div", "display")
    } else {
        ("span", "inline")
    };
    write!(output, "<{} data-math-style=\"{}\">", tag, style)?;
    escape(output, latex)?;
    write!(output, "</{}>", tag)
}

/// Write `buffer` with HTML special characters escaped.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    let bytes = buffer.as_bytes();
    let matcher = jetscii::bytes!(b'"', b'&', b'<', b'>');

    let mut offset = 0;
    while let Some(i) = matcher.find(&bytes[offset..]) {
        let esc: &str = match bytes[offset + i] {
            b'"' => "&quot;",
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => unreachable!(),
        };
        output.write_str(&buffer[offset..offset + i])?;
        output.write_str(esc)?;
        offset += i + 1;
    }
    output.write_str(&buffer[offset..])
}
