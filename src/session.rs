use tracing::{debug, trace};

use crate::catalog::AlternateTable;
use crate::insertion::InsertionMap;
use crate::traits::{HitTest, TextSink};
use crate::types::{Feedback, Point};

#[derive(Debug, Clone)]
struct Active {
    anchor: String,
    candidates: Vec<String>,
    selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView<'a> {
    pub anchor: &'a str,
    pub candidates: &'a [String],
    pub selected_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub anchor: String,
    pub candidates: Vec<String>,
    pub selected_index: usize,
}

/// The press-and-hold alternates protocol.
///
/// Legal orderings are `begin -> update* -> commit` and
/// `begin -> update* -> cancel`. Everything else degrades to a no-op, so
/// late or duplicated events from the host are harmless. At most one
/// session is live; beginning a new one silently abandons the old one.
#[derive(Debug, Clone, Default)]
pub struct AlternatesSession {
    current: Option<Active>,
}

impl AlternatesSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn view(&self) -> Option<SessionView<'_>> {
        self.current.as_ref().map(|s| SessionView {
            anchor: &s.anchor,
            candidates: &s.candidates,
            selected_index: s.selected,
        })
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.current.as_ref().map(|s| SessionSnapshot {
            anchor: s.anchor.clone(),
            candidates: s.candidates.clone(),
            selected_index: s.selected,
        })
    }

    /// Opens a session on `anchor`.
    ///
    /// Refused (no feedback, any live session untouched) when `anchor` has no
    /// usable alternates; the caller then treats the press as a plain tap.
    pub fn begin(&mut self, anchor: &str, table: &AlternateTable) -> Vec<Feedback> {
        let Some(candidates) = table.get(anchor) else {
            debug!(anchor, "no alternates, session refused");
            return vec![];
        };

        let mut out = self.cancel();
        debug!(anchor, count = candidates.len(), "alternates session begin");
        self.current = Some(Active {
            anchor: anchor.to_string(),
            candidates: candidates.to_vec(),
            selected: 0,
        });
        out.push(Feedback::ShowCandidates {
            anchor: anchor.to_string(),
            candidates: candidates.to_vec(),
            selected: 0,
        });
        out
    }

    /// Re-targets the selection from the pointer position.
    ///
    /// A miss selects candidate 0, never the last hit.
    pub fn update<H: HitTest + ?Sized>(&mut self, pos: Point, hit_test: &H) -> Vec<Feedback> {
        let Some(s) = self.current.as_mut() else {
            return vec![];
        };

        let last = s.candidates.len() - 1;
        let index = hit_test
            .candidate_at(pos, &s.candidates)
            .map_or(0, |i| i.min(last));
        trace!(index, "alternates selection");
        s.selected = index;
        vec![Feedback::SelectionChanged { index }]
    }

    /// Inserts the selected candidate, resolved through `insertions`, and
    /// ends the session.
    pub fn commit<S: TextSink + ?Sized>(
        &mut self,
        insertions: &InsertionMap,
        sink: &mut S,
    ) -> Vec<Feedback> {
        let Some(s) = self.current.take() else {
            return vec![];
        };

        let glyph = &s.candidates[s.selected];
        let text = insertions.resolve(glyph);
        debug!(anchor = %s.anchor, index = s.selected, text, "alternates session commit");
        sink.insert_text(text);
        vec![Feedback::HideCandidates]
    }

    pub fn cancel(&mut self) -> Vec<Feedback> {
        match self.current.take() {
            Some(s) => {
                debug!(anchor = %s.anchor, "alternates session cancelled");
                vec![Feedback::HideCandidates]
            }
            None => vec![],
        }
    }
}
