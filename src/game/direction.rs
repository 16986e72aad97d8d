/// A unit step on the grid.  North is towards row 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the `(dx, dy)` vector for a single step in this direction
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// True if the vectors of `self` and `other` sum to zero, i.e., turning
    /// from `other` to `self` would send the head straight back into the
    /// neck.
    pub(crate) fn is_reversal_of(self, other: Direction) -> bool {
        let (x1, y1) = self.delta();
        let (x2, y2) = other.delta();
        x1 + x2 == 0 && y1 + y2 == 0
    }
}
