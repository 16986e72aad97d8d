//! Assorted constants & hard-coded configuration
use crate::game::Direction;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake.  This never changes over the course
/// of a game.
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(120);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of cells along each side of the board when not configured
pub(crate) const DEFAULT_BOARD_SIZE: u16 = 20;

/// Smallest configurable board size; the initial snake must fit
pub(crate) const MIN_BOARD_SIZE: u16 = 5;

/// Largest configurable board size; the board plus its border and the score
/// bar must fit in [`DISPLAY_SIZE`]
pub(crate) const MAX_BOARD_SIZE: u16 = 21;

/// Number of terminal columns used to draw one board cell, so that cells come
/// out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Length of the snake at the start of every game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// The direction the snake faces at the start of every game
pub(crate) const INITIAL_DIRECTION: Direction = Direction::North;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head once it's crashed
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Default style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Default style for the rest of the snake
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new()
    .fg(Color::Green)
    .add_modifier(Modifier::BOLD);

/// Default style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the board while no game is in progress
pub(crate) const INACTIVE_BOARD_STYLE: Style = Style::new().add_modifier(Modifier::DIM);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
