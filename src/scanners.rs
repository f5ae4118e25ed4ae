//! Byte-level scanning for `$$` delimiter pairs.

use std::ops::Range;

/// The delimiter that both opens and closes a math span.
pub const DELIMITER: &str = "$$";

const DELIMITER_LEN: usize = DELIMITER.len();

/// Find the next delimiter pair at or after `from`.
///
/// Returns the byte range of the whole match, delimiters included. The
/// closing delimiter is the first `$$` after the opener, and the interior
/// never crosses a line terminator; an opener with no closer on its own line
/// is abandoned and scanning resumes on the next line.
pub fn math_span(bytes: &[u8], from: usize) -> Option<Range<usize>> {
    // 0xe2 leads the UTF-8 encodings of U+2028 and U+2029.
    let matcher = jetscii::bytes!(b'$', b'\r', b'\n', b'\xe2');
    let mut open: Option<usize> = None;
    let mut ix = from;

    while ix < bytes.len() {
        let at = ix + matcher.find(&bytes[ix..])?;
        match bytes[at] {
            b'$' => {
                if bytes.get(at + 1) != Some(&b'$') {
                    ix = at + 1;
                    continue;
                }
                match open {
                    Some(start) => return Some(start..at + DELIMITER_LEN),
                    None => {
                        open = Some(at);
                        ix = at + DELIMITER_LEN;
                    }
                }
            }
            b'\r' | b'\n' => {
                open = None;
                ix = at + 1;
            }
            _ => {
                if is_line_separator(&bytes[at..]) {
                    open = None;
                    ix = at + 3;
                } else {
                    ix = at + 1;
                }
            }
        }
    }

    None
}

/// Whether `bytes` starts with U+2028 LINE SEPARATOR or U+2029 PARAGRAPH
/// SEPARATOR.
fn is_line_separator(bytes: &[u8]) -> bool {
    matches!(bytes, [0xe2, 0x80, 0xa8 | 0xa9, ..])
}

/// The interior of a match returned by [`math_span`].
pub fn interior(span: &Range<usize>) -> Range<usize> {
    span.start + DELIMITER_LEN..span.end - DELIMITER_LEN
}
