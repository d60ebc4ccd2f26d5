use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::key::InputEvent;
use crate::layout::LayoutStateMachine;
use crate::session::{AlternatesSession, SessionSnapshot, SessionView};
use crate::traits::{HitTest, TextSink};
use crate::types::{Feedback, Key, KeyRole, Layout, Mode, Point};

/// The keyboard's input-method core: routes host events to the layout
/// state machine, the alternates session or the text sink.
#[derive(Debug, Clone)]
pub struct Keyboard {
    catalog: Catalog,
    layout: LayoutStateMachine,
    session: AlternatesSession,
    // Sustained press on a key without alternates; it acts as a tap on release.
    pending: Option<Key>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    pub mode: Mode,
    pub session: Option<SessionSnapshot>,
}

pub struct KeyboardBuilder {
    catalog: Catalog,
    mode: Mode,
}

impl Default for KeyboardBuilder {
    fn default() -> Self {
        Self {
            catalog: Catalog::standard(),
            mode: Mode::Script,
        }
    }
}

impl KeyboardBuilder {
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn initial_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> Keyboard {
        Keyboard {
            catalog: self.catalog,
            layout: LayoutStateMachine::new(self.mode),
            session: AlternatesSession::new(),
            pending: None,
        }
    }

    /// Like [`build`](Self::build), but rejects a malformed catalog.
    pub fn try_build(self) -> Result<Keyboard, CatalogError> {
        self.catalog.validate()?;
        Ok(self.build())
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        KeyboardBuilder::default().build()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> KeyboardBuilder {
        KeyboardBuilder::default()
    }

    pub fn mode(&self) -> Mode {
        self.layout.mode()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The layout for the current mode. Always the same reference for a
    /// given mode.
    pub fn active_layout(&self) -> &Layout {
        self.catalog.layout(self.layout.mode())
    }

    pub fn session(&self) -> Option<SessionView<'_>> {
        self.session.view()
    }

    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            mode: self.layout.mode(),
            session: self.session.snapshot(),
        }
    }

    /// Resolves a display glyph to the text it inserts.
    pub fn resolve<'a>(&'a self, glyph: &'a str) -> &'a str {
        self.catalog.insertions().resolve(glyph)
    }

    pub fn handle_event<S, H>(
        &mut self,
        sink: &mut S,
        hit_test: &H,
        input: InputEvent,
    ) -> Vec<Feedback>
    where
        S: TextSink + ?Sized,
        H: HitTest + ?Sized,
    {
        match input {
            InputEvent::Tap(key) => self.tap(sink, &key),
            InputEvent::PressBegin(key) => {
                let mut out = self.interrupt();
                if key.role == KeyRole::Normal
                    && self.catalog.alternates().has_alternates(&key.glyph)
                {
                    out.extend(self.begin(&key.glyph));
                } else {
                    self.pending = Some(key);
                }
                out
            }
            InputEvent::PressMove(pos) => self.session.update(pos, hit_test),
            InputEvent::PressEnd => {
                if self.session.is_active() {
                    return self.commit(sink);
                }
                match self.pending.take() {
                    Some(key) => self.dispatch(sink, &key),
                    None => vec![],
                }
            }
            InputEvent::PressCancel => self.interrupt(),
        }
    }

    /// A quick tap on `key`. A new press always wins over a live session,
    /// so any session is cancelled first.
    pub fn tap<S: TextSink + ?Sized>(&mut self, sink: &mut S, key: &Key) -> Vec<Feedback> {
        let mut out = self.interrupt();
        out.extend(self.dispatch(sink, key));
        out
    }

    fn dispatch<S: TextSink + ?Sized>(&mut self, sink: &mut S, key: &Key) -> Vec<Feedback> {
        match &key.role {
            KeyRole::Delete => {
                sink.delete_backward();
                vec![]
            }
            KeyRole::ModeToggle(event) => match self.layout.apply(*event) {
                Some(mode) => vec![Feedback::LayoutChanged { mode }],
                None => vec![],
            },
            KeyRole::FixedInsertion(text) => {
                sink.insert_text(text);
                vec![]
            }
            KeyRole::Normal => {
                sink.insert_text(self.catalog.insertions().resolve(&key.glyph));
                vec![]
            }
        }
    }

    /// Opens an alternates session on `anchor`. Empty when refused.
    pub fn begin(&mut self, anchor: &str) -> Vec<Feedback> {
        let out = self.session.begin(anchor, self.catalog.alternates());
        // The new session supersedes any pending plain press.
        if !out.is_empty() && self.pending.take().is_some() {
            debug!(anchor, "pending press dropped for session");
        }
        out
    }

    pub fn update<H: HitTest + ?Sized>(&mut self, pos: Point, hit_test: &H) -> Vec<Feedback> {
        self.session.update(pos, hit_test)
    }

    pub fn commit<S: TextSink + ?Sized>(&mut self, sink: &mut S) -> Vec<Feedback> {
        self.session.commit(self.catalog.insertions(), sink)
    }

    pub fn cancel(&mut self) -> Vec<Feedback> {
        self.session.cancel()
    }

    fn interrupt(&mut self) -> Vec<Feedback> {
        if let Some(key) = self.pending.take() {
            debug!(glyph = %key.glyph, "pending press dropped");
        }
        self.session.cancel()
    }
}
