use super::direction::Direction;
use crate::consts;
use std::collections::VecDeque;

/// A grid coordinate.  Coordinates on the board satisfy `0 <= x, y < size`;
/// anything else is off the board and only ever shows up as the head of a
/// body that is about to be judged colliding.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell one step away from `self` in `direction`
    pub(crate) fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The bounds of the square playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    size: u16,
}

impl Board {
    /// Create a board with `size` cells on each side.  Returns `None` if
    /// `size` is outside
    /// [`MIN_BOARD_SIZE`][consts::MIN_BOARD_SIZE]..=[`MAX_BOARD_SIZE`][consts::MAX_BOARD_SIZE].
    pub(crate) fn new(size: u16) -> Option<Board> {
        (consts::MIN_BOARD_SIZE..=consts::MAX_BOARD_SIZE)
            .contains(&size)
            .then_some(Board { size })
    }

    pub(crate) fn size(self) -> u16 {
        self.size
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        let size = i32::from(self.size);
        (0..size).contains(&cell.x) && (0..size).contains(&cell.y)
    }

    /// Iterate over every cell on the board in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let size = i32::from(self.size);
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell { x, y }))
    }

    /// The body every game starts with: the head in the middle of the board
    /// and the rest of the body trailing straight behind it.
    pub(crate) fn initial_body(self) -> VecDeque<Cell> {
        let center = i32::from(self.size / 2);
        let head = Cell::new(center, center);
        let behind = consts::INITIAL_DIRECTION.reverse();
        std::iter::successors(Some(head), |&c| Some(c.step(behind)))
            .take(consts::INITIAL_SNAKE_LENGTH)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board {
            size: consts::DEFAULT_BOARD_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(9, 9), true)]
    #[case(Cell::new(-1, 5), false)]
    #[case(Cell::new(5, -1), false)]
    #[case(Cell::new(10, 5), false)]
    #[case(Cell::new(5, 10), false)]
    fn test_contains(#[case] cell: Cell, #[case] inside: bool) {
        let board = Board::new(10).unwrap();
        assert_eq!(board.contains(cell), inside);
    }

    #[rstest]
    #[case(4, None)]
    #[case(5, Some(5))]
    #[case(20, Some(20))]
    #[case(21, Some(21))]
    #[case(22, None)]
    fn test_new(#[case] size: u16, #[case] r: Option<u16>) {
        assert_eq!(Board::new(size).map(Board::size), r);
    }

    #[test]
    fn cells_covers_board() {
        let board = Board::new(5).unwrap();
        let cells = board.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), 25);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[24], Cell::new(4, 4));
        assert!(cells.iter().all(|&c| board.contains(c)));
    }

    #[test]
    fn initial_body() {
        let body = Board::default().initial_body();
        assert_eq!(
            body,
            VecDeque::from([Cell::new(10, 10), Cell::new(10, 11), Cell::new(10, 12)])
        );
    }

    #[test]
    fn initial_body_fits_smallest_board() {
        let board = Board::new(consts::MIN_BOARD_SIZE).unwrap();
        assert!(board.initial_body().iter().all(|&c| board.contains(c)));
    }
}
