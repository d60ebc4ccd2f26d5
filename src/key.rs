use crate::types::{Key, Point};

/// Input events delivered by the host's event source.
///
/// The event source owns the hold threshold: it decides whether a touch
/// was a quick tap or a sustained press and reports it accordingly.
/// Events are processed strictly in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A press released before the hold threshold.
    Tap(Key),
    /// A press that crossed the hold threshold.
    PressBegin(Key),
    /// The pointer moved while a sustained press is held.
    PressMove(Point),
    /// The sustained press was released.
    PressEnd,
    /// The press was interrupted (pointer left the surface, system gesture).
    PressCancel,
}
