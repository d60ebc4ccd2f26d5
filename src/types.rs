/// The key set currently shown.
///
/// `Numbers` and `Symbols` are the two sub-modes of the numeric/symbolic
/// family; they reach each other directly, while `Script` is only reached
/// through an explicit return key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Script,
    Numbers,
    Symbols,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Script, Mode::Numbers, Mode::Symbols];
}

/// A mode-toggle key's requested transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeEvent {
    ToNumericSymbolic, // Script -> Numbers
    ToSymbols,
    ToNumbers,
    ToScript, // from either numeric sub-mode
}

/// What a key does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRole {
    /// Inserts its glyph (through the insertion map), or opens an
    /// alternates session when held.
    Normal,
    Delete,
    ModeToggle(ModeEvent),
    /// Inserts a fixed string verbatim, bypassing the insertion map.
    FixedInsertion(String),
}

bitflags::bitflags! {
    /// Presentation hints for renderers. The core never reads these.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyStyle: u8 {
        /// Function key shading (mode toggles, delete, return).
        const SPECIAL       = 0b01;
        /// Smaller label font for multi-character labels.
        const COMPACT_LABEL = 0b10;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub glyph: String,
    pub role: KeyRole,
    pub style: KeyStyle,
}

impl Key {
    pub fn normal(glyph: &str) -> Self {
        Self {
            glyph: glyph.to_string(),
            role: KeyRole::Normal,
            style: KeyStyle::empty(),
        }
    }

    pub fn delete(glyph: &str) -> Self {
        Self {
            glyph: glyph.to_string(),
            role: KeyRole::Delete,
            style: KeyStyle::SPECIAL,
        }
    }

    pub fn toggle(glyph: &str, event: ModeEvent) -> Self {
        Self {
            glyph: glyph.to_string(),
            role: KeyRole::ModeToggle(event),
            style: KeyStyle::SPECIAL | KeyStyle::COMPACT_LABEL,
        }
    }

    pub fn fixed(glyph: &str, text: &str) -> Self {
        Self {
            glyph: glyph.to_string(),
            role: KeyRole::FixedInsertion(text.to_string()),
            style: KeyStyle::empty(),
        }
    }

    pub fn styled(mut self, style: KeyStyle) -> Self {
        self.style = style;
        self
    }
}

/// An immutable set of key rows shown for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub mode: Mode,
    /// Rows top to bottom, keys left to right.
    pub rows: Vec<Vec<Key>>,
}

impl Layout {
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flatten()
    }

    pub fn find(&self, glyph: &str) -> Option<&Key> {
        self.keys().find(|k| k.glyph == glyph)
    }
}

// Host coordinates; only ever forwarded to the hit test.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rendering signals emitted by the keyboard for the host to present.
///
/// These carry no text side effects; insertion and deletion go through
/// [`TextSink`](crate::traits::TextSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// An alternates session opened; show its candidate row.
    ShowCandidates {
        anchor: String,
        candidates: Vec<String>,
        selected: usize,
    },
    /// The highlighted candidate changed.
    SelectionChanged { index: usize },
    /// The session ended (committed or cancelled); hide the candidate row.
    HideCandidates,
    /// The active layout changed.
    LayoutChanged { mode: Mode },
}
