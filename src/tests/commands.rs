use super::*;
use pretty_assertions::assert_eq;
use crate::commands::*;
use ntest::test_case;

#[test]
fn menu_items_in_order() {
    let names: Vec<&str> = slash_menu_items().iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Math Block", "Equation", "Formula"]);
    assert!(slash_menu_items().iter().all(|i| i.group == MATH_GROUP));
}

#[test_case("math", "Math Block")]
#[test_case("LaTeX", "Math Block")]
#[test_case("math block", "Math Block")]
#[test_case("eq", "Equation")]
#[test_case("EQN", "Equation")]
#[test_case("equation", "Equation")]
#[test_case("formula", "Formula")]
#[test_case("GS", "Formula")]
#[test_case(" gongshi ", "Formula")]
fn finds_items_by_alias(query: &str, name: &str) {
    assert_eq!(find_slash_item(query).map(|i| i.name), Some(name));
}

#[test]
fn unknown_alias() {
    assert_eq!(find_slash_item("table"), None);
    assert_eq!(find_slash_item(""), None);
}

#[test]
fn every_alias_resolves() {
    for item in slash_menu_items() {
        assert!(find_slash_item(item.name).is_some());
        for alias in item.aliases {
            assert!(find_slash_item(alias).is_some(), "alias {}", alias);
        }
    }
}

#[test]
fn filters_by_prefix() {
    let names = |q: &str| -> Vec<&'static str> { filter_slash_items(q).iter().map(|i| i.name).collect() };

    assert_eq!(names("eq"), vec!["Math Block", "Equation"]);
    assert_eq!(names("G"), vec!["Formula"]);
    assert_eq!(names("f"), vec!["Math Block", "Formula"]);
    assert_eq!(names(""), vec!["Math Block", "Equation", "Formula"]);
    assert_eq!(names("zzz"), Vec::<&str>::new());
}

#[test]
fn detects_slash_query() {
    let cases: &[(&str, Option<&str>)] = &[
        ("/", Some("")),
        ("/gs", Some("gs")),
        ("text /math", Some("math")),
        ("line\n/eq", Some("eq")),
        ("1/2 /", Some("")),
        ("a/b", None),
        ("/gs ", None),
        ("no slash", None),
    ];
    for &(text, expected) in cases {
        assert_eq!(slash_query(text), expected, "query of {:?}", text);
    }
}

#[test]
fn slash_command_inserts_math_block() {
    let mut doc = Document::new();
    let cursor = doc.push(BlockContent::paragraph("before"));
    let after = doc.push(BlockContent::paragraph("after"));

    let item = find_slash_item("gs").unwrap();
    let id = item.execute(&mut doc, cursor).unwrap();

    let ids: Vec<BlockId> = doc.blocks().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![cursor, id, after]);
    assert_eq!(
        doc.get(id).unwrap().content,
        BlockContent::math("\\sum_{i=1}^{n} x_i")
    );
}

#[test]
fn slash_command_on_missing_block() {
    let mut doc = Document::new();
    let id = doc.push(BlockContent::paragraph(""));
    doc.remove(id).unwrap();
    assert_eq!(
        slash_menu_items()[0].execute(&mut doc, id),
        Err(DocumentError::UnknownBlock(id))
    );
}

#[test]
fn shortcuts_open_dialog() {
    let ctrl = KeyChord::key('e').ctrl().shift();
    let cmd = KeyChord::key('E').meta().shift();

    assert_eq!(
        match_shortcut(&ctrl).map(|s| s.action),
        Some(ShortcutAction::OpenMathDialog)
    );
    assert_eq!(
        match_shortcut(&cmd).map(|s| s.description),
        Some("Open math formula input dialog (Mac)")
    );
    assert_eq!(math_keyboard_shortcuts().len(), 2);
}

#[test]
fn shortcuts_need_exact_modifiers() {
    assert!(match_shortcut(&KeyChord::key('e').ctrl()).is_none());
    assert!(match_shortcut(&KeyChord::key('e').ctrl().shift().alt()).is_none());
    assert!(match_shortcut(&KeyChord::key('x').ctrl().shift()).is_none());
    assert!(match_shortcut(&KeyChord::key('e')).is_none());
}

#[test]
fn dialog_submission() {
    assert_eq!(submit_latex("  x^2 \n"), Some("x^2"));
    assert_eq!(submit_latex("   "), None);
    assert_eq!(submit_latex(""), None);
    assert_eq!(submit_latex("\u{feff}"), None);
    assert_eq!(submit_latex("\u{feff}y\u{feff}"), Some("y"));
}

#[test]
fn formatting_button_converts_selection() {
    let mut doc = Document::new();
    let cursor = doc.push(BlockContent::paragraph("a^2 + b^2"));
    let button = &MATH_FORMATTING_BUTTON;

    assert!(!button.is_active(&doc, cursor));

    let id = button
        .convert_selection(&mut doc, cursor, "  a^2 + b^2 ")
        .unwrap()
        .unwrap();
    assert_eq!(doc.get(id).unwrap().content, BlockContent::math("a^2 + b^2"));
    assert!(button.is_active(&doc, id));
}

#[test]
fn formatting_button_blank_selection() {
    let mut doc = Document::new();
    let cursor = doc.push(BlockContent::paragraph("text"));

    assert_eq!(
        MATH_FORMATTING_BUTTON.convert_selection(&mut doc, cursor, " \t"),
        Ok(None)
    );
    assert_eq!(doc.len(), 1);
}
