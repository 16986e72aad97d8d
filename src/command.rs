use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An abstract key press.  Anything that doesn't map to a `Command` is
/// ignored by every screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Home,
    End,
    Next,
    Prev,
    P,
    Q,
    R,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, _) if !normal_modifiers.contains(m) => None,
            (_, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (_, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (_, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (_, KeyCode::Char(' ')) => Some(Command::Space),
            (_, KeyCode::Home) => Some(Command::Home),
            (_, KeyCode::End) => Some(Command::End),
            (_, KeyCode::Tab) => Some(Command::Next),
            (_, KeyCode::BackTab) => Some(Command::Prev),
            (_, KeyCode::Char('p')) => Some(Command::P),
            (_, KeyCode::Char('q')) => Some(Command::Q),
            (_, KeyCode::Char('r')) => Some(Command::R),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Command::Quit))]
    #[case(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE), Some(Command::Up))]
    #[case(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE), Some(Command::Up))]
    #[case(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE), Some(Command::Down))]
    #[case(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE), Some(Command::Left))]
    #[case(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE), Some(Command::Right))]
    #[case(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), Some(Command::Enter))]
    #[case(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE), Some(Command::Space))]
    #[case(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), Some(Command::Prev))]
    #[case(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE), Some(Command::R))]
    #[case(KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT), None)]
    #[case(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), None)]
    #[case(KeyEvent::new(KeyCode::Up, KeyModifiers::ALT), None)]
    #[case(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }
}
