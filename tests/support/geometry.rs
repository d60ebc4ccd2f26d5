use hold_keys::traits::HitTest;
use hold_keys::types::Point;

pub const CELL: f32 = 40.0;

/// Candidates laid out left to right in equal cells along `y in 0..CELL`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateRow {
    pub origin_x: f32,
}

impl HitTest for CandidateRow {
    fn candidate_at(&self, pos: Point, candidates: &[String]) -> Option<usize> {
        if !(0.0..CELL).contains(&pos.y) || pos.x < self.origin_x {
            return None;
        }
        let index = ((pos.x - self.origin_x) / CELL) as usize;
        (index < candidates.len()).then_some(index)
    }
}

/// Center of candidate `index` in a row at the origin.
pub fn over(index: usize) -> Point {
    Point::new(index as f32 * CELL + CELL / 2.0, CELL / 2.0)
}

/// A point no candidate covers.
pub fn outside() -> Point {
    Point::new(-100.0, 500.0)
}

/// Hit test that never finds anything.
pub struct Nowhere;

impl HitTest for Nowhere {
    fn candidate_at(&self, _pos: Point, _candidates: &[String]) -> Option<usize> {
        None
    }
}
