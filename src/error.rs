use crate::types::Mode;

/// Problems found when validating a host-supplied [`Catalog`](crate::catalog::Catalog).
///
/// These only surface at configuration time; the interaction protocol
/// itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("layout for {mode:?} has no rows")]
    EmptyLayout { mode: Mode },
    #[error("row {row} of the {mode:?} layout has no keys")]
    EmptyRow { mode: Mode, row: usize },
    #[error("a key in the {mode:?} layout has an empty label")]
    EmptyGlyph { mode: Mode },
    #[error("layout stored under {expected:?} declares itself as {found:?}")]
    ModeMismatch { expected: Mode, found: Mode },
    #[error("candidate {candidate:?} of {anchor:?} is not a single glyph")]
    CandidateNotSingleGlyph { anchor: String, candidate: String },
}
