use crate::*;

mod api;
mod commands;

use crate::nodes::SegmentKind::{Math as M, Text as T};

#[track_caller]
fn segments(input: &str, expected: &[(SegmentKind, &str)]) {
    segments_opts(input, expected, &Options::default());
}

#[track_caller]
fn segments_opts(input: &str, expected: &[(SegmentKind, &str)], options: &Options) {
    let parsed = parse(input, options);
    let actual: Vec<(SegmentKind, &str)> = parsed.iter().map(|s| (s.kind, s.content)).collect();
    pretty_assertions::assert_eq!(actual, expected, "segments of {:?}", input);
    pretty_assertions::assert_eq!(reconstruct(input, &parsed), input, "reconstruction of {:?}", input);
}

#[track_caller]
fn html(input: &str, expected: &str) {
    pretty_assertions::assert_eq!(text_to_html(input, &Options::default()), expected);
}

fn no_inline() -> Options {
    Options { inline_mode: false }
}
