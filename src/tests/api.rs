use super::*;
use pretty_assertions::assert_eq;
use crate::adapters::MathRendererAdapter;
use crate::commands::{self, KeyChord};
use std::fmt::Write;

#[test]
fn exercise_full_api() {
    let options = Options::default();
    let plugins = Plugins::default();
    let text = "a $$b$$ c";

    // Use every member of the exposed API without any defaults.
    // Not looking for specific outputs, just want to know if the API changes shape.

    let _: Vec<Segment> = parse(text, &options);
    let _: bool = contains_math_syntax(text, &options);
    let _: Vec<&str> = extract_math_expressions(text, &options);
    let parser: Parser = Parser::new(&options);
    let _: Spans = parser.spans(text);
    let segments = parser.parse(text);
    let _: String = reconstruct(text, &segments);
    let segment: &Segment = &segments[1];
    let _: SegmentKind = segment.kind;
    let _: &str = segment.content;
    let _: Span = segment.span;
    let _: &str = segment.source(text);
    let _: bool = segment.is_math() && !segment.is_text();
    let _: &str = DELIMITER;

    let mut out = String::new();
    let _: std::fmt::Result = format_html(text, &options, &plugins, &mut out);
    let _: String = text_to_html(text, &options);
    let _: Result<String, std::fmt::Error> = text_to_html_with_plugins(text, &options, &plugins);

    let mut doc = Document::new();
    let id: BlockId = doc.push(BlockContent::paragraph(text));
    let _: Result<usize, DocumentError> = doc.convert_dollar_math(id, &options);
    let _: Result<BlockId, DocumentError> = doc.insert_after(id, BlockContent::math("x"));
    let _: Result<(), DocumentError> = doc.update(id, BlockContent::Math(NodeMath::default()));
    let _: Option<&Block> = doc.get(id);
    let _: &[Block] = doc.blocks();
    let _: String = document_to_html(&doc);
    let _: Result<String, std::fmt::Error> = document_to_html_with_plugins(&doc, &plugins);
    let _: std::fmt::Result = format_document(&doc, &plugins, &mut out);
    let _: Result<Block, DocumentError> = doc.remove(id);
    let _: InlineMath = InlineMath::default();

    let _: &[commands::SlashMenuItem] = commands::slash_menu_items();
    let _: Option<&commands::SlashMenuItem> = commands::find_slash_item("math");
    let _: Vec<&commands::SlashMenuItem> = commands::filter_slash_items("m");
    let _: Option<&str> = commands::slash_query("/m");
    let _: &[commands::KeyboardShortcut] = commands::math_keyboard_shortcuts();
    let _: Option<&commands::KeyboardShortcut> =
        commands::match_shortcut(&KeyChord::key('e').ctrl().shift());
    let _: Option<&str> = commands::submit_latex("x");
    let _: &commands::FormattingButton = &commands::MATH_FORMATTING_BUTTON;

    pub struct MockAdapter {}
    impl MathRendererAdapter for MockAdapter {
        fn write_math(
            &self,
            output: &mut dyn Write,
            latex: &str,
            _display: bool,
        ) -> std::fmt::Result {
            output.write_str(latex)
        }
    }

    let mock = MockAdapter {};
    let mut plugins = Plugins::default();
    plugins.render.math_renderer = Some(&mock);
    let _: Result<String, std::fmt::Error> = text_to_html_with_plugins(text, &options, &plugins);
}

#[cfg(feature = "bon")]
#[test]
fn builders() {
    let options = Options::builder().build();
    assert!(options.inline_mode);

    let options = Options::builder().inline_mode(false).build();
    assert!(!options.inline_mode);

    let plugins = Plugins::builder().build();
    assert!(plugins.render.math_renderer.is_none());
}

#[test]
fn options_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Options>();
    assert_send_sync::<Plugins>();
    assert_send_sync::<Segment>();
    assert_send_sync::<Document>();
}

#[test]
fn span_conversions() {
    let span: Span = (2..5).into();
    assert_eq!(span, Span { start: 2, end: 5 });
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
    assert_eq!(span.to_string(), "2..5");
    let range: std::ops::Range<usize> = span.into();
    assert_eq!(range, 2..5);
}
