//! Editor commands that create math: slash-menu items, keyboard shortcuts,
//! and the "convert selection" formatting action.

use phf::phf_map;
use tracing::debug;

use crate::document::{BlockContent, BlockId, Document, DocumentError};
use crate::strings::{fold_case, is_blank, trim};

/// The menu group every math command belongs to.
pub const MATH_GROUP: &str = "Math";

/// An entry in the slash menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashMenuItem {
    /// Display name.
    pub name: &'static str,
    /// Further words that select this item.
    pub aliases: &'static [&'static str],
    /// Menu group.
    pub group: &'static str,
    /// Short glyph shown beside the name.
    pub icon: &'static str,
    /// One-line description.
    pub hint: &'static str,
    /// The formula the inserted math block starts with.
    pub latex: &'static str,
}

static SLASH_MENU_ITEMS: [SlashMenuItem; 3] = [
    SlashMenuItem {
        name: "Math Block",
        aliases: &["math", "equation", "formula", "latex"],
        group: MATH_GROUP,
        icon: "√",
        hint: "Insert a math equation block",
        latex: "E = mc^2",
    },
    SlashMenuItem {
        name: "Equation",
        aliases: &["eq", "eqn"],
        group: MATH_GROUP,
        icon: "=",
        hint: "Insert an equation block",
        latex: "\\frac{a}{b}",
    },
    SlashMenuItem {
        name: "Formula",
        aliases: &["gs", "gongshi"],
        group: MATH_GROUP,
        icon: "∫",
        hint: "Insert a formula block",
        latex: "\\sum_{i=1}^{n} x_i",
    },
];

// Case-folded name or alias to item index. Where an item's name is also
// another item's alias, the name wins.
static SLASH_LOOKUP: phf::Map<&'static str, usize> = phf_map! {
    "math block" => 0,
    "math" => 0,
    "latex" => 0,
    "equation" => 1,
    "eq" => 1,
    "eqn" => 1,
    "formula" => 2,
    "gs" => 2,
    "gongshi" => 2,
};

/// The math slash-menu items, in menu order.
pub fn slash_menu_items() -> &'static [SlashMenuItem] {
    &SLASH_MENU_ITEMS
}

/// The item whose name or alias is exactly `query`, ignoring case.
pub fn find_slash_item(query: &str) -> Option<&'static SlashMenuItem> {
    SLASH_LOOKUP
        .get(fold_case(trim(query)).as_str())
        .map(|&ix| &SLASH_MENU_ITEMS[ix])
}

/// The items whose name or any alias starts with `query`, ignoring case.
///
/// An empty query matches every item.
pub fn filter_slash_items(query: &str) -> Vec<&'static SlashMenuItem> {
    let query = fold_case(trim(query));
    SLASH_MENU_ITEMS
        .iter()
        .filter(|item| {
            std::iter::once(item.name)
                .chain(item.aliases.iter().copied())
                .any(|word| fold_case(word).starts_with(&query))
        })
        .collect()
}

/// The command word of a slash command being typed at the end of `text`.
///
/// The slash must start the text or follow whitespace, and the word after
/// it runs to the end of the text without whitespace. A lone trailing `/`
/// yields the empty word.
///
/// ```rust
/// # use dollarmath::commands::slash_query;
/// assert_eq!(slash_query("see /gs"), Some("gs"));
/// assert_eq!(slash_query("/"), Some(""));
/// assert_eq!(slash_query("a/b"), None);
/// assert_eq!(slash_query("/gs done"), None);
/// ```
pub fn slash_query(text: &str) -> Option<&str> {
    let slash = text.rfind('/')?;
    let word = &text[slash + 1..];
    if word.chars().any(char::is_whitespace) {
        return None;
    }
    match text[..slash].chars().next_back() {
        None => Some(word),
        Some(c) if c.is_whitespace() => Some(word),
        Some(_) => None,
    }
}

impl SlashMenuItem {
    /// Insert this item's math block after `cursor`.
    pub fn execute(&self, doc: &mut Document, cursor: BlockId) -> Result<BlockId, DocumentError> {
        debug!(item = self.name, "running slash command");
        doc.insert_after(cursor, BlockContent::math(self.latex))
    }
}

/// What a keyboard shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Ask the user for a formula, then insert it as a math block.
    OpenMathDialog,
}

/// A key together with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyChord {
    /// The key pressed.
    pub key: char,
    /// Control held.
    pub ctrl: bool,
    /// Meta (Command on macOS) held.
    pub meta: bool,
    /// Shift held.
    pub shift: bool,
    /// Alt (Option on macOS) held.
    pub alt: bool,
}

impl KeyChord {
    /// A chord with no modifiers.
    pub const fn key(key: char) -> Self {
        KeyChord {
            key,
            ctrl: false,
            meta: false,
            shift: false,
            alt: false,
        }
    }

    /// Hold Control.
    pub const fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Hold Meta.
    pub const fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Hold Shift.
    pub const fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Hold Alt.
    pub const fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Same modifiers, and the same key ignoring case.
    pub fn matches(&self, other: &KeyChord) -> bool {
        self.ctrl == other.ctrl
            && self.meta == other.meta
            && self.shift == other.shift
            && self.alt == other.alt
            && self.key.to_lowercase().eq(other.key.to_lowercase())
    }
}

/// A keyboard shortcut binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardShortcut {
    /// The chord that triggers it.
    pub chord: KeyChord,
    /// What it does.
    pub action: ShortcutAction,
    /// Human-readable description.
    pub description: &'static str,
}

static MATH_SHORTCUTS: [KeyboardShortcut; 2] = [
    KeyboardShortcut {
        chord: KeyChord::key('e').ctrl().shift(),
        action: ShortcutAction::OpenMathDialog,
        description: "Open math formula input dialog",
    },
    KeyboardShortcut {
        chord: KeyChord::key('e').meta().shift(),
        action: ShortcutAction::OpenMathDialog,
        description: "Open math formula input dialog (Mac)",
    },
];

/// The math keyboard shortcuts.
pub fn math_keyboard_shortcuts() -> &'static [KeyboardShortcut] {
    &MATH_SHORTCUTS
}

/// The shortcut bound to `chord`, if any.
pub fn match_shortcut(chord: &KeyChord) -> Option<&'static KeyboardShortcut> {
    MATH_SHORTCUTS.iter().find(|s| s.chord.matches(chord))
}

/// The trimmed formula from the input dialog, or `None` when blank.
pub fn submit_latex(input: &str) -> Option<&str> {
    let latex = trim(input);
    (!latex.is_empty()).then_some(latex)
}

/// The "Math Formula" toolbar action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingButton {
    /// Display name.
    pub name: &'static str,
    /// Button glyph.
    pub icon: &'static str,
    /// Tooltip text.
    pub tooltip: &'static str,
    /// Toolbar group.
    pub group: &'static str,
}

/// The math formatting button.
pub static MATH_FORMATTING_BUTTON: FormattingButton = FormattingButton {
    name: "Math Formula",
    icon: "√x",
    tooltip: "Convert selection to math formula (Ctrl+Shift+E)",
    group: MATH_GROUP,
};

impl FormattingButton {
    /// Whether the block under the cursor is a math block.
    pub fn is_active(&self, doc: &Document, cursor: BlockId) -> bool {
        doc.get(cursor).is_some_and(|b| b.is_math())
    }

    /// Insert the selected text after `cursor` as a math block.
    ///
    /// A blank selection inserts nothing and returns `None`; the caller
    /// should then prompt for a formula, as with
    /// [`ShortcutAction::OpenMathDialog`].
    pub fn convert_selection(
        &self,
        doc: &mut Document,
        cursor: BlockId,
        selected: &str,
    ) -> Result<Option<BlockId>, DocumentError> {
        if is_blank(selected) {
            return Ok(None);
        }
        let id = doc.insert_after(cursor, BlockContent::math(trim(selected)))?;
        Ok(Some(id))
    }
}
