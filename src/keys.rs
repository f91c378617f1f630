//! Key bindings.
//!
//! Maps crossterm key events to [`Action`]s. The event loop only ever sees
//! actions, so the bindings can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Move focus between the queue list and the transport readout.
    ToggleFocus,
    ToggleQueueView,
    ToggleTransport,

    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Play the selected queue row.
    Activate,
    MoveUp,
    MoveDown,
    Delete,

    TogglePause,
    Stop,
    Next,
    Previous,
    ScrubForward,
    ScrubBackward,
    VolumeUp,
    VolumeDown,
    ToggleShuffle,
}

impl Action {
    /// Queue edits, which are suppressed while the queue is shuffled.
    pub fn is_edit(self) -> bool {
        matches!(self, Action::MoveUp | Action::MoveDown | Action::Delete)
    }
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab => Action::ToggleFocus,
        KeyCode::Char('v') => Action::ToggleQueueView,
        KeyCode::Char('t') => Action::ToggleTransport,

        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Home | KeyCode::Char('g') => Action::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => Action::SelectLast,
        KeyCode::Enter => Action::Activate,
        KeyCode::Backspace | KeyCode::Delete => Action::Delete,

        KeyCode::Char(' ') | KeyCode::Char('p') => Action::TogglePause,
        KeyCode::Char('x') => Action::Stop,
        KeyCode::Char('l') => Action::Next,
        KeyCode::Char('h') => Action::Previous,
        KeyCode::Char('L') => Action::ScrubForward,
        KeyCode::Char('H') => Action::ScrubBackward,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::VolumeUp,
        KeyCode::Char('-') => Action::VolumeDown,
        KeyCode::Char('s') => Action::ToggleShuffle,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests;
