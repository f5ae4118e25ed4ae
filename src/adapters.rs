//! Adapter traits for plugins.
//!
//! Each plugin has to implement one of the traits available in this module.

use std::fmt;

/// Implement this adapter for creating a plugin that typesets LaTeX math.
///
/// The renderer owns syntax checking: the parser hands over whatever sits
/// between the delimiters, and an adapter decides how to show input it
/// cannot typeset.
pub trait MathRendererAdapter: Send + Sync {
    /// Write the typeset form of a math expression.
    ///
    /// `latex`: The expression, without delimiters.
    /// `display`: `true` for a math block, `false` for inline math.
    fn write_math(&self, output: &mut dyn fmt::Write, latex: &str, display: bool) -> fmt::Result;
}
