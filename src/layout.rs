use tracing::debug;

use crate::types::{Mode, ModeEvent};

/// Tracks which key set is visible.
///
/// Transitions happen only on mode-toggle keys:
///
/// | From    | Event             | To      |
/// |---------|-------------------|---------|
/// | Script  | ToNumericSymbolic | Numbers |
/// | Numbers | ToSymbols         | Symbols |
/// | Symbols | ToNumbers         | Numbers |
/// | Numbers | ToScript          | Script  |
/// | Symbols | ToScript          | Script  |
///
/// Any other pairing is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutStateMachine {
    mode: Mode,
}

impl LayoutStateMachine {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The target of `event` from `from`, if the pair is in the table.
    pub fn next(from: Mode, event: ModeEvent) -> Option<Mode> {
        match (from, event) {
            (Mode::Script, ModeEvent::ToNumericSymbolic) => Some(Mode::Numbers),
            (Mode::Numbers, ModeEvent::ToSymbols) => Some(Mode::Symbols),
            (Mode::Symbols, ModeEvent::ToNumbers) => Some(Mode::Numbers),
            (Mode::Numbers | Mode::Symbols, ModeEvent::ToScript) => Some(Mode::Script),
            _ => None,
        }
    }

    /// Applies `event`, returning the new mode when a transition happened.
    pub fn apply(&mut self, event: ModeEvent) -> Option<Mode> {
        match Self::next(self.mode, event) {
            Some(to) => {
                debug!(from = ?self.mode, ?event, ?to, "mode transition");
                self.mode = to;
                Some(to)
            }
            None => {
                debug!(mode = ?self.mode, ?event, "ignored mode event");
                None
            }
        }
    }
}
