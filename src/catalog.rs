use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::CatalogError;
use crate::insertion::InsertionMap;
use crate::types::{Key, KeyStyle, Layout, Mode, ModeEvent};

pub const DELETE_GLYPH: &str = "⌫";
/// Label of the diacritics key; held, it offers the individual marks.
pub const DIACRITICS_GLYPH: &str = "\u{25CC}\u{064E}\u{064F}\u{0650}";
/// Zero-width non-joiner, the Persian "half space".
pub const HALF_SPACE: &str = "\u{200C}";

const FATHA_DISPLAY: &str = "\u{25CC}\u{064E}";
const KASRA_DISPLAY: &str = "\u{25CC}\u{0650}";
const DAMMA_DISPLAY: &str = "\u{25CC}\u{064F}";

const SCRIPT_ROWS: [&[&str]; 3] = [
    &["ض", "ص", "ق", "ف", "غ", "ع", "ه", "خ", "ح", "ج", "چ"],
    &["ش", "س", "ی", "ب", "ل", "ا", "ت", "ن", "م", "ک", "گ"],
    &["ظ", "ط", "ز", "ر", "ذ", "د", "پ", "و", "ث"],
];

const NUMBER_ROWS: [&[&str]; 3] = [
    &["۱", "۲", "۳", "۴", "۵", "۶", "۷", "۸", "۹", "۰"],
    &["-", "/", ":", ";", "(", ")", "$", "&", "@", "\""],
    &[".", ",", "?", "!", "'", "\""],
];

const SYMBOL_ROWS: [&[&str]; 3] = [
    &["[", "]", "{", "}", "#", "%", "^", "*", "+", "="],
    &["_", "\\", "|", "~", "<", ">", "€", "£", "¥", "•"],
    &[".", ",", "?", "!", "'", "\""],
];

const ALTERNATES: [(&str, &[&str]); 7] = [
    ("ی", &["ئ", "ي", "ؽ"]),
    ("ا", &["آ", "ء", "أ", "إ"]),
    ("و", &["ؤ", "ۆ", "ۇ", "وْ"]),
    ("ن", &["ن", "ں"]),
    ("ک", &["ک", "ك"]),
    ("ه", &["هٔ", "ه", "ة"]),
    (DIACRITICS_GLYPH, &[FATHA_DISPLAY, KASRA_DISPLAY, DAMMA_DISPLAY]),
];

/// Candidate rows for alternate-bearing anchors.
///
/// Every stored row starts with its anchor so that "no change" is always
/// candidate 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlternateTable {
    entries: HashMap<String, Vec<String>>,
}

impl AlternateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `candidates` for `anchor`.
    ///
    /// The anchor is moved to the front if listed, and prepended otherwise.
    /// An empty list is stored as-is and behaves like no alternates.
    pub fn insert<I, S>(&mut self, anchor: &str, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = candidates.into_iter().map(Into::into).collect();
        if !row.is_empty() {
            row.retain(|c| c != anchor);
            row.insert(0, anchor.to_string());
        }
        self.entries.insert(anchor.to_string(), row);
    }

    pub fn get(&self, anchor: &str) -> Option<&[String]> {
        self.entries
            .get(anchor)
            .map(Vec::as_slice)
            .filter(|row| !row.is_empty())
    }

    pub fn has_alternates(&self, anchor: &str) -> bool {
        self.get(anchor).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Static keyboard configuration: one layout per mode plus the alternates
/// and insertion tables. Built once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    layouts: [Layout; 3],
    alternates: AlternateTable,
    insertions: InsertionMap,
}

fn slot(mode: Mode) -> usize {
    match mode {
        Mode::Script => 0,
        Mode::Numbers => 1,
        Mode::Symbols => 2,
    }
}

impl Catalog {
    /// Assembles a catalog from host-supplied parts. `layouts` are given in
    /// `Mode::ALL` order.
    pub fn new(layouts: [Layout; 3], alternates: AlternateTable, insertions: InsertionMap) -> Self {
        Self {
            layouts,
            alternates,
            insertions,
        }
    }

    /// The built-in Persian layout family.
    pub fn standard() -> Self {
        let mut alternates = AlternateTable::new();
        for (anchor, candidates) in ALTERNATES {
            alternates.insert(anchor, candidates.iter().copied());
        }

        // The diacritics key itself commits a fatha, like its first mark.
        let insertions = [
            (DIACRITICS_GLYPH, "\u{064E}"),
            (FATHA_DISPLAY, "\u{064E}"),
            (KASRA_DISPLAY, "\u{0650}"),
            (DAMMA_DISPLAY, "\u{064F}"),
        ]
        .into_iter()
        .collect();

        Self {
            layouts: [
                script_layout(),
                numeric_layout(Mode::Numbers),
                numeric_layout(Mode::Symbols),
            ],
            alternates,
            insertions,
        }
    }

    pub fn layout(&self, mode: Mode) -> &Layout {
        &self.layouts[slot(mode)]
    }

    pub fn alternates(&self) -> &AlternateTable {
        &self.alternates
    }

    pub fn insertions(&self) -> &InsertionMap {
        &self.insertions
    }

    /// Checks that every layout has keys and every candidate is a single
    /// grapheme cluster.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for mode in Mode::ALL {
            let layout = self.layout(mode);
            if layout.mode != mode {
                return Err(CatalogError::ModeMismatch {
                    expected: mode,
                    found: layout.mode,
                });
            }
            if layout.rows.is_empty() {
                return Err(CatalogError::EmptyLayout { mode });
            }
            for (row, keys) in layout.rows.iter().enumerate() {
                if keys.is_empty() {
                    return Err(CatalogError::EmptyRow { mode, row });
                }
                if keys.iter().any(|k| k.glyph.is_empty()) {
                    return Err(CatalogError::EmptyGlyph { mode });
                }
            }
        }

        for (anchor, candidates) in self.alternates.iter() {
            if let Some(bad) = candidates.iter().find(|c| c.graphemes(true).count() != 1) {
                return Err(CatalogError::CandidateNotSingleGlyph {
                    anchor: anchor.to_string(),
                    candidate: bad.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn char_row(glyphs: &[&str]) -> Vec<Key> {
    glyphs.iter().map(|g| Key::normal(g)).collect()
}

fn bottom_row(mode: Mode) -> Vec<Key> {
    let mode_key = match mode {
        Mode::Script => Key::toggle("۱۲۳", ModeEvent::ToNumericSymbolic),
        Mode::Numbers | Mode::Symbols => Key::toggle("ABC", ModeEvent::ToScript),
    };
    vec![
        mode_key,
        Key::fixed("|", HALF_SPACE),
        Key::fixed("بوْشلۇق", " ").styled(KeyStyle::COMPACT_LABEL),
        Key::normal(DIACRITICS_GLYPH).styled(KeyStyle::SPECIAL),
        Key::fixed("←", "\n").styled(KeyStyle::SPECIAL),
    ]
}

fn script_layout() -> Layout {
    let mut rows: Vec<Vec<Key>> = SCRIPT_ROWS.iter().map(|r| char_row(r)).collect();
    rows[2].push(Key::delete(DELETE_GLYPH));
    rows.push(bottom_row(Mode::Script));
    Layout {
        mode: Mode::Script,
        rows,
    }
}

fn numeric_layout(mode: Mode) -> Layout {
    let (source, sub_toggle) = match mode {
        Mode::Symbols => (SYMBOL_ROWS, Key::toggle("۱۲۳", ModeEvent::ToNumbers)),
        _ => (NUMBER_ROWS, Key::toggle("#+=", ModeEvent::ToSymbols)),
    };
    let mut rows: Vec<Vec<Key>> = source.iter().map(|r| char_row(r)).collect();
    rows[2].insert(0, sub_toggle);
    rows[2].push(Key::delete(DELETE_GLYPH));
    rows.push(bottom_row(mode));
    Layout { mode, rows }
}
