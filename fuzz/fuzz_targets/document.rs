#![no_main]
use dollarmath::{document_to_html, BlockContent, Document, Options};
use libfuzzer_sys::fuzz_target;

// Converting a paragraph twice must change nothing the second time, and
// rendering must never panic.
fuzz_target!(|text: &str| {
    let mut doc = Document::new();
    let id = doc.push(BlockContent::paragraph(text));
    let options = Options::default();

    doc.convert_dollar_math(id, &options).unwrap();
    let once = doc.get(id).unwrap().clone();
    assert_eq!(doc.convert_dollar_math(id, &options), Ok(0));
    assert_eq!(doc.get(id).unwrap(), &once);

    let _ = document_to_html(&doc);
});
