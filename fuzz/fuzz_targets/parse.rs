#![no_main]
use dollarmath::{contains_math_syntax, extract_math_expressions, parse, reconstruct, Options};
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    options: Options,
    text: &'a str,
}

fuzz_target!(|input: Input| {
    let segments = parse(input.text, &input.options);
    assert_eq!(reconstruct(input.text, &segments), input.text);
    assert_eq!(segments.is_empty(), input.text.is_empty());

    for pair in segments.windows(2) {
        assert_eq!(pair[0].span.end, pair[1].span.start);
        assert!(pair[0].is_math() || pair[1].is_math());
    }

    let expressions = extract_math_expressions(input.text, &input.options);
    assert_eq!(
        contains_math_syntax(input.text, &input.options),
        !expressions.is_empty()
    );
    assert_eq!(
        expressions,
        segments
            .iter()
            .filter(|s| s.is_math())
            .map(|s| s.content)
            .collect::<Vec<_>>()
    );
});
