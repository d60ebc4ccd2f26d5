use hold_keys::traits::TextSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Insert(String),
    DeleteBackward,
}

#[derive(Default, Debug, Clone)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inserts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Insert(s) => Some(s.as_str()),
                SinkCall::DeleteBackward => None,
            })
            .collect()
    }

    pub fn deletes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::DeleteBackward))
            .count()
    }
}

impl TextSink for RecordingSink {
    fn insert_text(&mut self, text: &str) {
        self.calls.push(SinkCall::Insert(text.to_string()));
    }

    fn delete_backward(&mut self) {
        self.calls.push(SinkCall::DeleteBackward);
    }
}
