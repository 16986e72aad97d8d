use super::cell::{Board, Cell};
use super::direction::Direction;
use crate::consts;
use enum_map::Enum;
use std::collections::VecDeque;

/// One instant of a game.  The engine never edits a `GameState` in place
/// during a tick; it builds the next one and swaps it in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    /// The cells occupied by the snake, head first
    pub(crate) body: VecDeque<Cell>,

    /// The food's location.  `None` only once the snake has filled the board.
    pub(crate) food: Option<Cell>,

    /// The direction the snake most recently moved in
    pub(crate) direction: Direction,

    pub(crate) score: u32,
    pub(crate) game_over: bool,
    pub(crate) started: bool,
}

impl GameState {
    /// A fresh, not-yet-started state on `board` with the given food
    pub(crate) fn initial(board: Board, food: Option<Cell>) -> GameState {
        GameState {
            body: board.initial_body(),
            food,
            direction: consts::INITIAL_DIRECTION,
            score: 0,
            game_over: false,
            started: false,
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        match (self.started, self.game_over) {
            (_, true) => Phase::Over,
            (true, false) => Phase::Running,
            (false, false) => Phase::Idle,
        }
    }

    pub(crate) fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    /// Classify `cell` for drawing.  The head takes precedence over the rest
    /// of the body, which takes precedence over food.
    pub(crate) fn tile_at(&self, cell: Cell) -> Tile {
        if self.head() == Some(cell) {
            Tile::SnakeHead
        } else if self.body.contains(&cell) {
            Tile::SnakeBody
        } else if self.food == Some(cell) {
            Tile::Food
        } else {
            Tile::Empty
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Waiting for the player to start
    Idle,
    Running,
    Over,
}

/// What occupies a board cell
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Tile {
    Empty,
    Food,
    SnakeHead,
    SnakeBody,
}
