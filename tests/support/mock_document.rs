use hold_keys::traits::TextSink;
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

/// A text field with the caret pinned at the end, like a chat input.
pub struct MockDocument {
    rope: Rope,
}

impl MockDocument {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn grapheme_count(&self) -> usize {
        self.text().graphemes(true).count()
    }
}

impl TextSink for MockDocument {
    fn insert_text(&mut self, text: &str) {
        self.rope.insert(self.rope.len_chars(), text);
    }

    fn delete_backward(&mut self) {
        let text = self.text();
        // Remove the whole last grapheme cluster, as host text views do.
        let Some((start, _)) = text.grapheme_indices(true).next_back() else {
            return;
        };
        let char_start = self.rope.byte_to_char(start);
        self.rope.remove(char_start..);
    }
}
