use std::collections::HashMap;

/// Maps a display glyph to the text actually inserted when it is committed.
///
/// Diacritic candidates are displayed on a dotted circle (U+25CC) so they
/// are visible on their own; committing one must insert only the bare
/// combining mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertionMap {
    entries: HashMap<String, String>,
}

impl InsertionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, display: impl Into<String>, inserted: impl Into<String>) {
        self.entries.insert(display.into(), inserted.into());
    }

    pub fn contains(&self, display: &str) -> bool {
        self.entries.contains_key(display)
    }

    /// The string to insert for `display`. Glyphs without an entry insert themselves.
    pub fn resolve<'a>(&'a self, display: &'a str) -> &'a str {
        self.entries.get(display).map_or(display, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InsertionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
