use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Result;

/// Block until a key is pressed.
pub fn next_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Effect of a key on the prompt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit {
    Insert(char),
    Backspace,
    Clear,
    Submit,
    Interrupt,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    None,
}

impl From<KeyEvent> for LineEdit {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                LineEdit::Interrupt
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => LineEdit::None,
            KeyCode::Char(c) => LineEdit::Insert(c),
            KeyCode::Backspace => LineEdit::Backspace,
            KeyCode::Esc => LineEdit::Clear,
            KeyCode::Enter => LineEdit::Submit,
            KeyCode::Up => LineEdit::ScrollUp,
            KeyCode::Down => LineEdit::ScrollDown,
            KeyCode::PageUp => LineEdit::PageUp,
            KeyCode::PageDown => LineEdit::PageDown,
            _ => LineEdit::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_characters_are_inserted() {
        assert_eq!(LineEdit::from(key(KeyCode::Char('7'))), LineEdit::Insert('7'));
        assert_eq!(LineEdit::from(key(KeyCode::Char('Q'))), LineEdit::Insert('Q'));
        assert_eq!(
            LineEdit::from(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            LineEdit::Insert('Q')
        );
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(LineEdit::from(ctrl_c), LineEdit::Interrupt);

        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(LineEdit::from(ctrl_a), LineEdit::None);
    }

    #[test]
    fn test_editing_and_scrolling_keys() {
        assert_eq!(LineEdit::from(key(KeyCode::Enter)), LineEdit::Submit);
        assert_eq!(LineEdit::from(key(KeyCode::Backspace)), LineEdit::Backspace);
        assert_eq!(LineEdit::from(key(KeyCode::Esc)), LineEdit::Clear);
        assert_eq!(LineEdit::from(key(KeyCode::PageDown)), LineEdit::PageDown);
        assert_eq!(LineEdit::from(key(KeyCode::Up)), LineEdit::ScrollUp);
        assert_eq!(LineEdit::from(key(KeyCode::Tab)), LineEdit::None);
    }
}
