use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn alt(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::ALT)
}

#[test]
fn edit_keys_have_two_names_each() {
    assert_eq!(action_for(alt(KeyCode::Up)), Some(Action::MoveUp));
    assert_eq!(action_for(alt(KeyCode::Char('k'))), Some(Action::MoveUp));
    assert_eq!(action_for(alt(KeyCode::Down)), Some(Action::MoveDown));
    assert_eq!(action_for(alt(KeyCode::Char('j'))), Some(Action::MoveDown));
    assert_eq!(action_for(key(KeyCode::Backspace)), Some(Action::Delete));
    assert_eq!(action_for(key(KeyCode::Delete)), Some(Action::Delete));
}

#[test]
fn plain_j_k_navigate_instead_of_moving() {
    assert_eq!(action_for(key(KeyCode::Char('k'))), Some(Action::SelectPrevious));
    assert_eq!(action_for(key(KeyCode::Char('j'))), Some(Action::SelectNext));
    assert_eq!(action_for(key(KeyCode::Up)), Some(Action::SelectPrevious));
    assert_eq!(action_for(key(KeyCode::End)), Some(Action::SelectLast));
}

#[test]
fn transport_keys() {
    assert_eq!(action_for(key(KeyCode::Char(' '))), Some(Action::TogglePause));
    assert_eq!(action_for(key(KeyCode::Char('L'))), Some(Action::ScrubForward));
    assert_eq!(action_for(key(KeyCode::Char('='))), Some(Action::VolumeUp));
    assert_eq!(action_for(key(KeyCode::Char('s'))), Some(Action::ToggleShuffle));
    assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::Activate));
}

#[test]
fn unbound_keys_map_to_nothing() {
    assert_eq!(action_for(key(KeyCode::Char('z'))), None);
    assert_eq!(action_for(alt(KeyCode::Char('x'))), None);
    assert_eq!(
        action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
}

#[test]
fn only_edits_are_edits() {
    assert!(Action::Delete.is_edit());
    assert!(Action::MoveUp.is_edit());
    assert!(!Action::Activate.is_edit());
}
