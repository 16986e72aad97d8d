mod cell;
mod direction;
mod engine;
mod movement;
mod prompt;
mod queue;
mod state;
pub(crate) use self::cell::Board;
use self::cell::Cell;
pub(crate) use self::direction::Direction;
use self::engine::{Engine, TickOutcome};
use self::prompt::{Choice, Prompt, PromptView};
pub(crate) use self::state::Tile;
use self::state::{GameState, Phase};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::highscores::HighScore;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use enum_map::{enum_map, EnumMap};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Clear, Widget},
    Frame,
};
use std::time::Instant;

/// The game screen: owns the engine, drives it at a fixed tick rate, feeds it
/// the player's key presses, and draws it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    palette: Palette,
    prompt: Prompt,
    /// Set when the most recent game ended by running into something
    crashed: bool,
    /// When the next tick is due.  Only ever `Some` while a game is running.
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(board: Board, palette: Palette, high_score: HighScore) -> Self {
        Game::new_with_rng(board, palette, high_score, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        board: Board,
        palette: Palette,
        high_score: HighScore,
        rng: R,
    ) -> Game<R> {
        Game {
            engine: Engine::new(board, high_score, rng),
            palette,
            prompt: Prompt::welcome(),
            crashed: false,
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + consts::TICK_PERIOD);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.next_tick = None;
                self.tick();
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn tick(&mut self) {
        match self.engine.tick() {
            Some(TickOutcome::Collided) => {
                self.crashed = true;
                self.game_over();
            }
            Some(TickOutcome::BoardFilled) => self.game_over(),
            Some(TickOutcome::Moved | TickOutcome::Ate) | None => (),
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        match self.engine.phase() {
            Phase::Running => match cmd {
                Command::Quit | Command::Q => return Some(Screen::Quit),
                Command::Up => self.turn(Direction::North),
                Command::Down => self.turn(Direction::South),
                Command::Left => self.turn(Direction::West),
                Command::Right => self.turn(Direction::East),
                _ => (),
            },
            Phase::Idle | Phase::Over => match self.prompt.handle_command(cmd)? {
                Choice::Start => self.start(),
                Choice::Reset => self.reset(),
                Choice::Quit => return Some(Screen::Quit),
            },
        }
        None
    }

    fn start(&mut self) {
        self.engine.start();
        self.crashed = false;
        self.next_tick = None;
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.crashed = false;
        self.next_tick = None;
        self.prompt = Prompt::welcome();
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn running(&self) -> bool {
        self.engine.phase() == Phase::Running
    }

    fn turn(&mut self, direction: Direction) {
        if self.engine.enqueue(direction) {
            log::trace!(
                "Queued turn to {direction:?}; {} pending",
                self.engine.pending_turns()
            );
        } else {
            log::debug!("Ignoring turn to {direction:?}");
        }
    }

    /// Stop the tick schedule and show the game over prompt
    fn game_over(&mut self) {
        self.next_tick = None;
        self.prompt = Prompt::game_over();
    }

    fn head_symbol(&self, state: &GameState) -> (char, Style) {
        if self.crashed {
            return (consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        }
        let symbol = match state.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        };
        (symbol, self.palette.get(Tile::SnakeHead))
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        let state = self.engine.state();
        Line::styled(
            format!(
                " Score: {}    High Score: {}",
                state.score,
                self.engine.high_score()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let size = self.engine.board().size();
        let block_size = Size {
            width: size.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
            height: size.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        let board_style = if self.running() {
            Style::new()
        } else {
            consts::INACTIVE_BOARD_STYLE
        };
        Block::bordered()
            .border_style(board_style)
            .render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            overlay: board_style,
            buf,
        };
        for cell in self.engine.board().cells() {
            match state.tile_at(cell) {
                Tile::Empty => (),
                Tile::Food => {
                    canvas.draw_cell(cell, consts::FOOD_SYMBOL, self.palette.get(Tile::Food));
                }
                Tile::SnakeBody => canvas.draw_cell(
                    cell,
                    consts::SNAKE_BODY_SYMBOL,
                    self.palette.get(Tile::SnakeBody),
                ),
                Tile::SnakeHead => {
                    let (symbol, style) = self.head_symbol(state);
                    canvas.draw_cell(cell, symbol, style);
                }
            }
        }

        if !self.running() {
            // The board may be narrower than the prompt
            let prompt_area = center_rect(
                board_area,
                Size {
                    width: Prompt::WIDTH,
                    height: self.prompt.height(),
                },
            );
            Clear.render(prompt_area, buf);
            PromptView {
                prompt: self.prompt,
                score: state.score,
            }
            .render(prompt_area, buf);
        }
    }
}

/// Styles for drawing each kind of [`Tile`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Palette(EnumMap<Tile, Style>);

impl Palette {
    pub(crate) fn get(&self, tile: Tile) -> Style {
        self.0[tile]
    }

    pub(crate) fn set(&mut self, tile: Tile, style: Style) {
        self.0[tile] = style;
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette(enum_map! {
            Tile::Empty => Style::new(),
            Tile::Food => consts::FOOD_STYLE,
            Tile::SnakeHead => consts::SNAKE_HEAD_STYLE,
            Tile::SnakeBody => consts::SNAKE_BODY_STYLE,
        })
    }
}

/// Draws board cells into a buffer, translating board coordinates to
/// terminal coordinates
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    /// Applied on top of every cell's own style
    overlay: Style,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Ok(x) = u16::try_from(cell.x) else {
            return;
        };
        let Ok(y) = u16::try_from(cell.y) else {
            return;
        };
        let Some(x) = x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(y) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut((x, y)) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(style).patch(self.overlay));
        }
    }
}
