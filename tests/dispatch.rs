use hold_keys::{
    Feedback, InputEvent, Keyboard,
    catalog::{DELETE_GLYPH, DIACRITICS_GLYPH, HALF_SPACE},
    types::{Key, Mode},
};
mod support;
use support::geometry::{CandidateRow, Nowhere, outside, over};
use support::mock_document::MockDocument;
use support::recording_sink::{RecordingSink, SinkCall};

fn key(kb: &Keyboard, glyph: &str) -> Key {
    kb.active_layout()
        .find(glyph)
        .cloned()
        .unwrap_or_else(|| panic!("{glyph:?} not on the {:?} layout", kb.mode()))
}

fn tap(kb: &Keyboard, glyph: &str) -> InputEvent {
    InputEvent::Tap(key(kb, glyph))
}

fn hold(kb: &Keyboard, glyph: &str) -> InputEvent {
    InputEvent::PressBegin(key(kb, glyph))
}

#[test]
fn tap_inserts_letter() {
    let mut kb = Keyboard::new();
    let mut doc = MockDocument::new("");

    for glyph in ["س", "ل", "ا", "م"] {
        let ev = tap(&kb, glyph);
        kb.handle_event(&mut doc, &Nowhere, ev);
    }
    assert_eq!(doc.text(), "سلام");
}

#[test]
fn delete_calls_delete_backward_once() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();

    let ev = tap(&kb, DELETE_GLYPH);
    let fb = kb.handle_event(&mut sink, &Nowhere, ev);
    assert!(fb.is_empty());
    assert_eq!(sink.calls, vec![SinkCall::DeleteBackward]);
}

#[test]
fn delete_removes_whole_grapheme() {
    let mut kb = Keyboard::new();
    let mut doc = MockDocument::new("سو\u{0652}");
    assert_eq!(doc.grapheme_count(), 2);

    let ev = tap(&kb, DELETE_GLYPH);
    kb.handle_event(&mut doc, &Nowhere, ev);
    assert_eq!(doc.text(), "س");
}

#[test]
fn fixed_keys_insert_their_strings() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();

    for glyph in ["|", "بوْشلۇق", "←"] {
        let ev = tap(&kb, glyph);
        kb.handle_event(&mut sink, &Nowhere, ev);
    }
    assert_eq!(sink.inserts(), vec![HALF_SPACE, " ", "\n"]);
}

#[test]
fn quick_tap_on_alternate_anchor_inserts_primary() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();

    let ev = tap(&kb, "ا");
    let fb = kb.handle_event(&mut sink, &Nowhere, ev);
    assert!(fb.is_empty());
    assert!(kb.session().is_none());
    assert_eq!(sink.inserts(), vec!["ا"]);
}

#[test]
fn hold_drag_release_commits_alternate() {
    let mut kb = Keyboard::new();
    let mut doc = MockDocument::new("");
    let row = CandidateRow::default();

    let ev = hold(&kb, "ا");
    let fb = kb.handle_event(&mut doc, &row, ev);
    assert!(matches!(
        fb.as_slice(),
        [Feedback::ShowCandidates { candidates, selected: 0, .. }] if candidates[0] == "ا"
    ));

    kb.handle_event(&mut doc, &row, InputEvent::PressMove(over(1)));
    assert_eq!(kb.session().unwrap().selected_index, 1);

    let fb = kb.handle_event(&mut doc, &row, InputEvent::PressEnd);
    assert_eq!(fb, vec![Feedback::HideCandidates]);
    assert_eq!(doc.text(), "آ");
    assert!(kb.session().is_none());
}

#[test]
fn diacritic_hold_inserts_combining_mark() {
    let mut kb = Keyboard::new();
    let mut doc = MockDocument::new("ب");
    let row = CandidateRow::default();

    let ev = hold(&kb, DIACRITICS_GLYPH);
    kb.handle_event(&mut doc, &row, ev);
    kb.handle_event(&mut doc, &row, InputEvent::PressMove(over(2)));
    kb.handle_event(&mut doc, &row, InputEvent::PressEnd);

    // Kasra lands on the base letter, no dotted circle
    assert_eq!(doc.text(), "ب\u{0650}");
    assert_eq!(doc.grapheme_count(), 1);
}

#[test]
fn drag_off_candidates_commits_primary() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();
    let row = CandidateRow::default();

    let ev = hold(&kb, "و");
    kb.handle_event(&mut sink, &row, ev);
    kb.handle_event(&mut sink, &row, InputEvent::PressMove(over(4)));
    kb.handle_event(&mut sink, &row, InputEvent::PressMove(outside()));
    kb.handle_event(&mut sink, &row, InputEvent::PressEnd);
    assert_eq!(sink.inserts(), vec!["و"]);
}

#[test]
fn press_cancel_inserts_nothing() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();
    let row = CandidateRow::default();

    let ev = hold(&kb, "ی");
    kb.handle_event(&mut sink, &row, ev);
    kb.handle_event(&mut sink, &row, InputEvent::PressMove(over(2)));
    let fb = kb.handle_event(&mut sink, &row, InputEvent::PressCancel);
    assert_eq!(fb, vec![Feedback::HideCandidates]);

    // Stray release after cancel is absorbed
    assert!(kb.handle_event(&mut sink, &row, InputEvent::PressEnd).is_empty());
    assert!(sink.calls.is_empty());
}

#[test]
fn new_press_preempts_open_session() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();
    let row = CandidateRow::default();

    let ev = hold(&kb, "ا");
    kb.handle_event(&mut sink, &row, ev);
    kb.handle_event(&mut sink, &row, InputEvent::PressMove(over(3)));

    let ev = hold(&kb, "ک");
    let fb = kb.handle_event(&mut sink, &row, ev);
    assert_eq!(fb[0], Feedback::HideCandidates);
    assert!(sink.calls.is_empty());

    kb.handle_event(&mut sink, &row, InputEvent::PressMove(over(1)));
    kb.handle_event(&mut sink, &row, InputEvent::PressEnd);
    assert_eq!(sink.inserts(), vec!["ك"]);
}

#[test]
fn tap_during_session_cancels_it_first() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();
    let row = CandidateRow::default();

    let ev = hold(&kb, "ه");
    kb.handle_event(&mut sink, &row, ev);
    kb.handle_event(&mut sink, &row, InputEvent::PressMove(over(1)));

    let ev = tap(&kb, "۱۲۳");
    let fb = kb.handle_event(&mut sink, &row, ev);
    assert_eq!(
        fb,
        vec![
            Feedback::HideCandidates,
            Feedback::LayoutChanged { mode: Mode::Numbers },
        ]
    );
    assert!(kb.session().is_none());
    assert!(sink.calls.is_empty());
}

#[test]
fn hold_on_plain_key_acts_as_tap_on_release() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();

    let ev = hold(&kb, "ب");
    let fb = kb.handle_event(&mut sink, &Nowhere, ev);
    assert!(fb.is_empty());
    assert!(kb.session().is_none());
    assert!(sink.calls.is_empty());

    kb.handle_event(&mut sink, &Nowhere, InputEvent::PressMove(over(1)));
    kb.handle_event(&mut sink, &Nowhere, InputEvent::PressEnd);
    assert_eq!(sink.inserts(), vec!["ب"]);
}

#[test]
fn cancelled_plain_hold_inserts_nothing() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();

    let ev = hold(&kb, DELETE_GLYPH);
    kb.handle_event(&mut sink, &Nowhere, ev);
    kb.handle_event(&mut sink, &Nowhere, InputEvent::PressCancel);
    kb.handle_event(&mut sink, &Nowhere, InputEvent::PressEnd);
    assert!(sink.calls.is_empty());
}

#[test]
fn begin_on_plain_letter_then_tap() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();

    assert!(kb.begin("ب").is_empty());
    assert!(kb.session().is_none());

    let ev = tap(&kb, "ب");
    kb.handle_event(&mut sink, &Nowhere, ev);
    assert_eq!(sink.inserts(), vec![kb.resolve("ب")]);
}

#[test]
fn snapshot_reports_mode_and_session() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();
    let row = CandidateRow::default();

    assert_eq!(kb.snapshot().session, None);

    let ev = hold(&kb, "ن");
    kb.handle_event(&mut sink, &row, ev);
    kb.handle_event(&mut sink, &row, InputEvent::PressMove(over(1)));

    let snap = kb.snapshot();
    assert_eq!(snap.mode, Mode::Script);
    let session = snap.session.unwrap();
    assert_eq!(session.anchor, "ن");
    assert_eq!(session.candidates, vec!["ن".to_string(), "ں".to_string()]);
    assert_eq!(session.selected_index, 1);
}

#[test]
fn diacritic_hold_without_drag_inserts_fatha() {
    let mut kb = Keyboard::new();
    let mut doc = MockDocument::new("ب");
    let row = CandidateRow::default();

    let ev = hold(&kb, DIACRITICS_GLYPH);
    kb.handle_event(&mut doc, &row, ev);
    kb.handle_event(&mut doc, &row, InputEvent::PressEnd);

    assert_eq!(doc.text(), "ب\u{064E}");
    assert!(!doc.text().contains('\u{25CC}'));
}

#[test]
fn diacritic_tap_never_inserts_dotted_circle() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();

    let ev = tap(&kb, DIACRITICS_GLYPH);
    kb.handle_event(&mut sink, &Nowhere, ev);

    assert_eq!(sink.inserts(), vec!["\u{064E}"]);
    assert!(sink.inserts().iter().all(|s| !s.contains('\u{25CC}')));
}

#[test]
fn begin_supersedes_pending_plain_press() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();

    let ev = hold(&kb, "ب");
    kb.handle_event(&mut sink, &Nowhere, ev);
    assert!(!kb.begin("ا").is_empty());

    kb.handle_event(&mut sink, &Nowhere, InputEvent::PressEnd);
    // The plain press is over; a stray release writes nothing
    kb.handle_event(&mut sink, &Nowhere, InputEvent::PressEnd);
    assert_eq!(sink.inserts(), vec!["ا"]);
}

#[test]
fn refused_begin_keeps_pending_plain_press() {
    let mut kb = Keyboard::new();
    let mut sink = RecordingSink::new();

    let ev = hold(&kb, "ب");
    kb.handle_event(&mut sink, &Nowhere, ev);
    assert!(kb.begin("ب").is_empty());

    kb.handle_event(&mut sink, &Nowhere, InputEvent::PressEnd);
    assert_eq!(sink.inserts(), vec!["ب"]);
}
