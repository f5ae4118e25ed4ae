//! Configuration for the parser and renderer.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};

use crate::adapters::MathRendererAdapter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Recognise `$$…$$` spans as inline math.
    ///
    /// On by default. When off, text is never split: parsing yields the
    /// input as a single text segment, and no math is detected or extracted.
    ///
    /// ```rust
    /// # use dollarmath::{parse, Options, SegmentKind};
    /// let mut options = Options::default();
    /// assert_eq!(parse("$$a$$", &options)[0].kind, SegmentKind::Math);
    ///
    /// options.inline_mode = false;
    /// let segments = parse("$$a$$", &options);
    /// assert_eq!(segments.len(), 1);
    /// assert_eq!(segments[0].kind, SegmentKind::Text);
    /// assert_eq!(segments[0].content, "$$a$$");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub inline_mode: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { inline_mode: true }
    }
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella plugins struct.
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: RenderPlugins<'p>,
}

#[derive(Default, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Plugins for alternative rendering.
pub struct RenderPlugins<'p> {
    /// Provide a math renderer adapter implementation to typeset math
    /// segments, inline math nodes and math blocks.
    ///
    /// ```rust
    /// # use dollarmath::{text_to_html_with_plugins, Options, Plugins};
    /// # use dollarmath::adapters::MathRendererAdapter;
    /// use std::fmt::{self, Write};
    /// let options = Options::default();
    /// let mut plugins = Plugins::default();
    /// let input = "Energy: $$E = mc^2$$";
    ///
    /// assert_eq!(text_to_html_with_plugins(input, &options, &plugins).unwrap(),
    ///            "Energy: <span data-math-style=\"inline\">E = mc^2</span>");
    ///
    /// pub struct MockAdapter {}
    /// impl MathRendererAdapter for MockAdapter {
    ///     fn write_math(&self, output: &mut dyn Write, latex: &str, display: bool) -> fmt::Result {
    ///         write!(output, "<m display=\"{}\">{}</m>", display, latex)
    ///     }
    /// }
    ///
    /// let adapter = MockAdapter {};
    /// plugins.render.math_renderer = Some(&adapter);
    ///
    /// assert_eq!(text_to_html_with_plugins(input, &options, &plugins).unwrap(),
    ///            "Energy: <m display=\"false\">E = mc^2</m>");
    /// ```
    pub math_renderer: Option<&'p dyn MathRendererAdapter>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPlugins")
            .field(
                "math_renderer",
                &self.math_renderer.map(|_| "impl MathRendererAdapter"),
            )
            .finish()
    }
}
