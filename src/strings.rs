use caseless::default_case_fold_str;

/// Fold `s` for caseless comparison.
pub fn fold_case(s: &str) -> String {
    default_case_fold_str(s)
}

/// Whitespace and line terminators as trimmed from math content and
/// dialog input: Unicode `White_Space` without U+0085 NEXT LINE, plus
/// U+FEFF ZERO WIDTH NO-BREAK SPACE.
pub fn is_space(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

/// `s` with leading and trailing [`is_space`] characters removed.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Whether `s` is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    trim(s).is_empty()
}
