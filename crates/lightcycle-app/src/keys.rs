use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use lightcycle_core::input::KeyId;

/// What a terminal event means to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A key for the game to interpret.
    Key(KeyId),
    /// Activate the restart control.
    Restart,
    Quit,
    /// The terminal changed size; repaint.
    Redraw,
}

/// Name a crossterm key code the way browser key events do.
pub fn key_id(code: KeyCode) -> Option<KeyId> {
    let name = match code {
        KeyCode::Char(c) => return Some(KeyId::from_char(c)),
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Tab => "Tab",
        KeyCode::Backspace => "Backspace",
        _ => return None,
    };
    Some(KeyId::from(name))
}

/// Translate a terminal event. `restart_visible` gates the restart control:
/// Enter and `r` only restart while it is shown.
pub fn translate(event: &Event, restart_visible: bool) -> Option<Command> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => {
            if *code == KeyCode::Esc
                || (*code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
            {
                return Some(Command::Quit);
            }
            if restart_visible && matches!(code, KeyCode::Enter | KeyCode::Char('r')) {
                return Some(Command::Restart);
            }
            key_id(*code).map(Command::Key)
        },
        Event::Resize(..) => Some(Command::Redraw),
        _ => None,
    }
}
