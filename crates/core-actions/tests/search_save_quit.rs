mod common;
use common::*;

use core_events::KeyEvent;
use core_state::{HELP_MESSAGE, QUIT_WARNING};
use core_text::Position;
use pretty_assertions::assert_eq;

#[test]
fn find_then_escape_returns_to_start() {
    let text: String = (0..60).map(|i| format!("row {i}\n")).collect();
    let mut m = model_from(&text);
    m.view_mut().cursor = Position::new(3, 2);
    m.scroll();

    press(&mut m, &[ctrl(b'f')]);
    type_text(&mut m, "row 55");
    assert_eq!(m.view().cursor, Position::new(55, 0));
    assert_eq!(m.view().rowoff, 55);

    press(&mut m, &[KeyEvent::Escape]);
    assert_eq!(m.view().cursor, Position::new(3, 2));
    assert_eq!(m.view().rowoff, 0);
    assert!(m.state().prompt.is_none());
}

#[test]
fn erasing_the_query_moves_to_first_non_empty_row() {
    let mut m = model_from("\nfoo\nbar");
    m.view_mut().cursor = Position::new(2, 2);
    press(&mut m, &[ctrl(b'f'), KeyEvent::Char(b'b')]);
    assert_eq!(m.view().cursor, Position::new(2, 0));
    press(&mut m, &[KeyEvent::Backspace]);
    assert_eq!(m.view().cursor, Position::new(1, 0));
    assert!(m.state().prompt.is_some());
}

#[test]
fn find_then_enter_stays_on_match() {
    let mut m = model_from("foo\nbar\nbaz");
    press(&mut m, &[ctrl(b'f')]);
    type_text(&mut m, "az");
    press(&mut m, &[KeyEvent::Char(b'\r')]);
    assert!(m.state().prompt.is_none());
    assert_eq!(m.view().cursor, Position::new(2, 1));

    // Keys edit the document again once the prompt closed.
    type_text(&mut m, "!");
    assert_eq!(lines(&m), vec!["foo", "bar", "b!az"]);
}

#[test]
fn search_miss_leaves_cursor() {
    let mut m = model_from("foo\nbar");
    m.view_mut().cursor = Position::new(1, 1);
    press(&mut m, &[ctrl(b'f')]);
    type_text(&mut m, "zzz");
    assert_eq!(m.view().cursor, Position::new(1, 1));
}

#[test]
fn save_existing_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let name = path.to_string_lossy().into_owned();
    let mut m = model_named("one", Some(&name));
    type_text(&mut m, "X");
    assert!(m.state().is_dirty());
    press(&mut m, &[ctrl(b's')]);
    assert!(!m.state().is_dirty());
    assert_eq!(std::fs::read(&path).unwrap(), b"Xone\n");
    assert_eq!(
        m.state().message_line().as_deref(),
        Some("5 bytes written to disk")
    );
}

#[test]
fn save_as_prompt_then_quit_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.py");
    let mut m = model_from("");
    type_text(&mut m, "x = 1");
    press(&mut m, &[ctrl(b's')]);
    assert!(m.state().prompt.is_some());
    type_text(&mut m, &path.to_string_lossy());
    press(&mut m, &[KeyEvent::Char(b'\r')]);

    assert_eq!(m.state().document.filetype(), Some("python"));
    assert_eq!(std::fs::read(&path).unwrap(), b"x = 1\n");
    assert!(press(&mut m, &[ctrl(b'q')]).quit);
}

#[test]
fn save_as_escape_aborts() {
    let mut m = model_from("");
    type_text(&mut m, "data");
    press(&mut m, &[ctrl(b's'), KeyEvent::Char(b'f'), KeyEvent::Escape]);
    assert!(m.state().file_name().is_none());
    assert!(m.state().is_dirty());
    assert_eq!(m.state().message_line().as_deref(), Some("Save aborted"));
}

#[test]
fn dirty_quit_requires_confirmation() {
    let mut m = model_from("");
    m.state_mut().set_ephemeral(HELP_MESSAGE);
    type_text(&mut m, "unsaved");

    let r = press(&mut m, &[ctrl(b'q')]);
    assert!(!r.quit);
    assert_eq!(m.state().message_line().as_deref(), Some(QUIT_WARNING));

    let r = press(&mut m, &[KeyEvent::Char(b'N')]);
    assert!(!r.quit);
    assert!(!m.state().quit_pending);

    let r = press(&mut m, &[ctrl(b'q'), KeyEvent::Char(b'y')]);
    assert!(r.quit);
}
