//! Terminal keyboard host using crossterm and ratatui.
//!
//! Click keys to type. Hold the mouse button on ی ا و ن ک ه or the
//! diacritics key for half a second to open the alternates row, drag
//! across it and release to commit.
//! Run with: cargo run --example tui_keyboard
//! Debug logs go to tui_keyboard.log (filter with RUST_LOG).

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hold_keys::{
    Feedback, InputEvent, Keyboard,
    traits::{HitTest, TextSink},
    types::{Key, KeyRole, KeyStyle, Point},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use unicode_segmentation::UnicodeSegmentation;

const KEY_W: u16 = 6;
const SPACE_W: u16 = 18;
const KEY_H: u16 = 3;
const TEXT_H: u16 = 5;
const STRIP_Y: u16 = TEXT_H;
const KEYS_Y: u16 = TEXT_H + KEY_H;

/// Press duration after which a press becomes a hold.
const HOLD_THRESHOLD: Duration = Duration::from_millis(500);

#[derive(Default)]
struct Document {
    text: String,
}

impl TextSink for Document {
    fn insert_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn delete_backward(&mut self) {
        if let Some((start, _)) = self.text.grapheme_indices(true).next_back() {
            self.text.truncate(start);
        }
    }
}

fn contains(rect: Rect, pos: Point) -> bool {
    if pos.x < 0.0 || pos.y < 0.0 {
        return false;
    }
    let (x, y) = (pos.x as u16, pos.y as u16);
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// On-screen cells of the open candidate row.
#[derive(Default)]
struct CandidateStrip {
    rects: Vec<Rect>,
}

impl CandidateStrip {
    /// Lays `count` cells out from the anchor key, shifted left to stay on screen.
    fn place(anchor_x: u16, count: usize, width: u16) -> Self {
        let total = count as u16 * KEY_W;
        let x = anchor_x.min(width.saturating_sub(total));
        let rects = (0..count as u16)
            .map(|i| Rect::new(x + i * KEY_W, STRIP_Y, KEY_W, KEY_H))
            .collect();
        Self { rects }
    }
}

impl HitTest for CandidateStrip {
    fn candidate_at(&self, pos: Point, _candidates: &[String]) -> Option<usize> {
        self.rects.iter().position(|r| contains(*r, pos))
    }
}

fn key_width(key: &Key) -> u16 {
    match &key.role {
        KeyRole::FixedInsertion(text) if text == " " => SPACE_W,
        _ => KEY_W,
    }
}

fn key_rects(keyboard: &Keyboard) -> Vec<(Rect, Key)> {
    let mut out = Vec::new();
    for (r, row) in keyboard.active_layout().rows.iter().enumerate() {
        let mut x = 0;
        for key in row {
            let w = key_width(key);
            out.push((Rect::new(x, KEYS_Y + r as u16 * KEY_H, w, KEY_H), key.clone()));
            x += w;
        }
    }
    out
}

struct Press {
    key: Key,
    since: Instant,
    held: bool,
}

struct App {
    keyboard: Keyboard,
    doc: Document,
    strip: CandidateStrip,
    press: Option<Press>,
    status: String,
    width: u16,
}

impl App {
    fn new(width: u16) -> Self {
        Self {
            keyboard: Keyboard::new(),
            doc: Document::default(),
            strip: CandidateStrip::default(),
            press: None,
            status: "click to type, hold for alternates, Esc to quit".to_string(),
            width,
        }
    }

    fn key_at(&self, pos: Point) -> Option<Key> {
        key_rects(&self.keyboard)
            .into_iter()
            .find(|(r, _)| contains(*r, pos))
            .map(|(_, k)| k)
    }

    fn send(&mut self, event: InputEvent) {
        let feedback = self.keyboard.handle_event(&mut self.doc, &self.strip, event);
        for fb in feedback {
            match fb {
                Feedback::ShowCandidates {
                    anchor, candidates, ..
                } => {
                    let anchor_x = key_rects(&self.keyboard)
                        .into_iter()
                        .find(|(_, k)| k.glyph == anchor)
                        .map_or(0, |(r, _)| r.x);
                    self.strip = CandidateStrip::place(anchor_x, candidates.len(), self.width);
                    self.status = format!("{} alternates for {anchor}", candidates.len());
                }
                Feedback::SelectionChanged { index } => {
                    self.status = format!("candidate {index}");
                }
                Feedback::HideCandidates => {
                    self.strip = CandidateStrip::default();
                }
                Feedback::LayoutChanged { mode } => {
                    self.status = format!("{mode:?}");
                }
            }
        }
    }

    fn on_mouse(&mut self, m: MouseEvent) {
        let pos = Point::new(m.column as f32, m.row as f32);
        match m.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(key) = self.key_at(pos) {
                    self.press = Some(Press {
                        key,
                        since: Instant::now(),
                        held: false,
                    });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.press.as_ref().is_some_and(|p| p.held) {
                    self.send(InputEvent::PressMove(pos));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(press) = self.press.take() {
                    if press.held {
                        self.send(InputEvent::PressEnd);
                    } else {
                        self.send(InputEvent::Tap(press.key));
                    }
                }
            }
            _ => {}
        }
    }

    /// Promotes a press to a hold once it outlasts the threshold.
    fn tick(&mut self) {
        if let Some(press) = self.press.as_mut()
            && !press.held
            && press.since.elapsed() >= HOLD_THRESHOLD
        {
            press.held = true;
            let key = press.key.clone();
            self.send(InputEvent::PressBegin(key));
        }
    }

    fn interrupt(&mut self) {
        self.press = None;
        self.send(InputEvent::PressCancel);
    }
}

fn ui(f: &mut Frame, app: &App) {
    let area = f.size();

    let text = Paragraph::new(app.doc.text.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.status.as_str()),
        );
    f.render_widget(text, Rect::new(0, 0, area.width, TEXT_H).intersection(area));

    if let Some(session) = app.keyboard.session() {
        for (i, (rect, glyph)) in app.strip.rects.iter().zip(session.candidates).enumerate() {
            let rect = rect.intersection(area);
            if rect.area() == 0 {
                continue;
            }
            let style = if i == session.selected_index {
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let cell = Paragraph::new(glyph.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(cell, rect);
        }
    }

    for (rect, key) in key_rects(&app.keyboard) {
        let rect = rect.intersection(area);
        if rect.area() == 0 {
            continue;
        }
        let mut style = Style::default();
        if key.style.contains(KeyStyle::SPECIAL) {
            style = style.bg(Color::DarkGray);
        }
        if key.style.contains(KeyStyle::COMPACT_LABEL) {
            style = style.add_modifier(Modifier::DIM);
        }
        let cell = Paragraph::new(key.glyph.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(cell, rect);
    }
}

fn init_tracing() -> io::Result<()> {
    let file = std::fs::File::create("tui_keyboard.log")?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hold_keys=debug")),
        )
        .init();
    Ok(())
}

fn main() -> Result<(), io::Error> {
    init_tracing()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(terminal.size()?.width);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl_c || key.code == KeyCode::Esc {
                        break;
                    }
                }
                Event::Mouse(m) => app.on_mouse(m),
                Event::Resize(width, _) => {
                    app.width = width;
                    app.interrupt();
                }
                Event::FocusLost => app.interrupt(),
                _ => {}
            }
        }

        app.tick();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
