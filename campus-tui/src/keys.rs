//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    SwitchPage(usize),
    MoveUp,
    MoveDown,
    DeleteItem,
    Refresh,
    Confirm,
    Cancel,
    OpenHelp,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('d') => Some(Action::DeleteItem),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextPage),
        KeyCode::BackTab => Some(Action::PrevPage),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let idx = match c {
                '1' => 0,
                '2' => 1,
                '3' => 2,
                '4' => 3,
                '5' => 4,
                '6' => 5,
                '7' => 6,
                _ => return None,
            };
            Some(Action::SwitchPage(idx))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn digits_map_to_page_indices() {
        assert_eq!(
            map_key(key(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(Action::SwitchPage(0))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('7'), KeyModifiers::NONE)),
            Some(Action::SwitchPage(6))
        );
        // There is no eighth page.
        assert_eq!(map_key(key(KeyCode::Char('8'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn vim_style_movement() {
        assert_eq!(
            map_key(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::MoveDown)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('k'), KeyModifiers::NONE)),
            Some(Action::MoveUp)
        );
    }
}
