use crate::command::Command;
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A pop-up over the board listing what the player can do while no game is
/// running
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Prompt {
    kind: PromptKind,
    /// Index into `kind.choices()` of the currently-selected item
    selection: usize,
}

impl Prompt {
    /// The height that should be used for the `Rect` passed to
    /// `Prompt::render()`
    pub(super) fn height(self) -> u16 {
        // choices + border + title row for the game over box
        let rows = self.kind.choices().len() + 2 + usize::from(self.kind == PromptKind::GameOver);
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// The width that should be used for the `Rect` passed to
    /// `Prompt::render()`
    pub(super) const WIDTH: u16 = 22;

    pub(super) fn welcome() -> Prompt {
        Prompt {
            kind: PromptKind::Welcome,
            selection: 0,
        }
    }

    pub(super) fn game_over() -> Prompt {
        Prompt {
            kind: PromptKind::GameOver,
            selection: 0,
        }
    }

    /// Handle a command.  Returns `Some` if the user made a choice.
    pub(super) fn handle_command(&mut self, cmd: Command) -> Option<Choice> {
        let choices = self.kind.choices();
        let last = choices.len() - 1;
        match cmd {
            Command::Quit => return Some(Choice::Quit),
            Command::Enter | Command::Space => return choices.get(self.selection).copied(),
            Command::Up => self.selection = self.selection.saturating_sub(1),
            Command::Down => self.selection = (self.selection + 1).min(last),
            Command::Next => {
                self.selection = if self.selection == last {
                    0
                } else {
                    self.selection + 1
                };
            }
            Command::Prev => self.selection = self.selection.checked_sub(1).unwrap_or(last),
            Command::Home => self.selection = 0,
            Command::End => self.selection = last,
            cmd => return choices.iter().copied().find(|c| c.hotkey() == cmd),
        }
        None
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PromptKind {
    /// Shown before the first game
    Welcome,
    GameOver,
}

impl PromptKind {
    fn title(self) -> &'static str {
        match self {
            PromptKind::Welcome => " SNAKE ",
            PromptKind::GameOver => " GAME OVER ",
        }
    }

    fn choices(self) -> &'static [Choice] {
        match self {
            PromptKind::Welcome => &[Choice::Start, Choice::Quit],
            PromptKind::GameOver => &[Choice::Start, Choice::Reset, Choice::Quit],
        }
    }
}

/// The things the player can pick from a [`Prompt`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Choice {
    /// Begin a new game immediately
    Start,

    /// Go back to the welcome prompt with a fresh board
    Reset,

    /// Quit the application
    Quit,
}

impl Choice {
    fn hotkey(self) -> Command {
        match self {
            Choice::Start => Command::P,
            Choice::Reset => Command::R,
            Choice::Quit => Command::Q,
        }
    }

    /// Render the choice as a `Line` for display in the prompt.  If
    /// `selected` is `true`, this choice is the currently-selected one.
    fn to_line(self, kind: PromptKind, selected: bool) -> Line<'static> {
        let (label, key) = match (self, kind) {
            (Choice::Start, PromptKind::Welcome) => ("Play", "p"),
            (Choice::Start, PromptKind::GameOver) => ("Play Again", "p"),
            (Choice::Reset, _) => ("Reset", "r"),
            (Choice::Quit, _) => ("Quit", "q"),
        };
        let mut line = Line::default();
        line.push_span(if selected { "» " } else { "  " });
        line.push_span(format!("{label} ("));
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

/// A [`Prompt`] together with the score to show in it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PromptView {
    pub(super) prompt: Prompt,
    pub(super) score: u32,
}

impl Widget for PromptView {
    /*
     * ┌──── GAME OVER ─────┐
     * │ Final score: 12    │
     * │ » Play Again (p)   │
     * │   Reset (r)        │
     * │   Quit (q)         │
     * └────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let Prompt { kind, selection } = self.prompt;
        let block = Block::bordered()
            .title(kind.title())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let mut rows = inner.rows();
        if kind == PromptKind::GameOver {
            if let Some(row) = rows.next() {
                Line::from(format!("Final score: {}", self.score)).render(row, buf);
            }
        }
        for ((i, &choice), row) in kind.choices().iter().enumerate().zip(rows) {
            choice.to_line(kind, i == selection).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn welcome_enter_starts() {
        let mut prompt = Prompt::welcome();
        assert_eq!(prompt.handle_command(Command::Enter), Some(Choice::Start));
    }

    #[test]
    fn welcome_navigate_to_quit() {
        let mut prompt = Prompt::welcome();
        assert_eq!(prompt.handle_command(Command::Down), None);
        assert_eq!(prompt.handle_command(Command::Down), None);
        assert_eq!(prompt.handle_command(Command::Space), Some(Choice::Quit));
    }

    #[test]
    fn game_over_wraparound() {
        let mut prompt = Prompt::game_over();
        assert_eq!(prompt.handle_command(Command::Prev), None);
        assert_eq!(prompt.handle_command(Command::Enter), Some(Choice::Quit));
        assert_eq!(prompt.handle_command(Command::Next), None);
        assert_eq!(prompt.handle_command(Command::Enter), Some(Choice::Start));
        assert_eq!(prompt.handle_command(Command::End), None);
        assert_eq!(prompt.handle_command(Command::Up), None);
        assert_eq!(prompt.handle_command(Command::Enter), Some(Choice::Reset));
    }

    #[rstest]
    #[case(Prompt::welcome(), Command::P, Some(Choice::Start))]
    #[case(Prompt::welcome(), Command::R, None)]
    #[case(Prompt::welcome(), Command::Q, Some(Choice::Quit))]
    #[case(Prompt::welcome(), Command::Left, None)]
    #[case(Prompt::game_over(), Command::P, Some(Choice::Start))]
    #[case(Prompt::game_over(), Command::R, Some(Choice::Reset))]
    #[case(Prompt::game_over(), Command::Quit, Some(Choice::Quit))]
    fn hotkeys(#[case] prompt: Prompt, #[case] cmd: Command, #[case] r: Option<Choice>) {
        let mut prompt = prompt;
        assert_eq!(prompt.handle_command(cmd), r);
    }

    #[test]
    fn heights() {
        assert_eq!(Prompt::welcome().height(), 4);
        assert_eq!(Prompt::game_over().height(), 6);
    }

    #[test]
    fn render_game_over() {
        let view = PromptView {
            prompt: Prompt::game_over(),
            score: 12,
        };
        let area = Rect::new(0, 0, Prompt::WIDTH, view.prompt.height());
        let mut buffer = Buffer::empty(area);
        view.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌──── GAME OVER ─────┐",
            "│ Final score: 12    │",
            "│ » Play Again (p)   │",
            "│   Reset (r)        │",
            "│   Quit (q)         │",
            "└────────────────────┘",
        ]);
        expected.set_style(area, Style::reset());
        expected.set_style(Rect::new(2, 2, 18, 1), consts::MENU_SELECTION_STYLE);
        expected.set_style(Rect::new(16, 2, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(11, 3, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(10, 4, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
