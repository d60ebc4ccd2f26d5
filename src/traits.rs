use crate::types::Point;

/// The host's text document.
///
/// Called exactly once per committed tap, session commit, fixed insertion
/// or delete. Never called while a session is only being updated or when
/// it is cancelled.
pub trait TextSink {
    fn insert_text(&mut self, text: &str);
    fn delete_backward(&mut self);
}

/// Host-owned candidate geometry.
pub trait HitTest {
    /// Index of the candidate whose on-screen region contains `pos`, if any.
    fn candidate_at(&self, pos: Point, candidates: &[String]) -> Option<usize>;
}

impl<F> HitTest for F
where
    F: Fn(Point, &[String]) -> Option<usize>,
{
    fn candidate_at(&self, pos: Point, candidates: &[String]) -> Option<usize> {
        self(pos, candidates)
    }
}
