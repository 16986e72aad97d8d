//! Movement and collision rules.  Nothing in here touches game state; the
//! engine feeds these functions a body and decides what to do with the
//! answer.
use super::cell::{Board, Cell};
use super::direction::Direction;
use rand::{seq::IteratorRandom, Rng};
use std::collections::{HashSet, VecDeque};

/// Return a copy of `body` with a new head one step from the current head in
/// `direction`.  The tail is left alone; the caller drops it if the snake did
/// not eat.
pub(crate) fn advance(body: &VecDeque<Cell>, direction: Direction) -> VecDeque<Cell> {
    let mut moved = body.clone();
    if let Some(&head) = body.front() {
        moved.push_front(head.step(direction));
    }
    moved
}

/// True if the head of `body` is off `board` or on top of another segment
pub(crate) fn is_colliding(body: &VecDeque<Cell>, board: Board) -> bool {
    let Some(&head) = body.front() else {
        return false;
    };
    !board.contains(head) || body.iter().skip(1).any(|&seg| seg == head)
}

pub(crate) fn is_food_captured(body: &VecDeque<Cell>, food: Cell) -> bool {
    body.front() == Some(&food)
}

/// Pick a cell of `board` uniformly at random from those not in `occupied`.
/// Returns `None` when every cell is occupied.
pub(crate) fn random_free_cell<R: Rng>(
    rng: &mut R,
    board: Board,
    occupied: &HashSet<Cell>,
) -> Option<Cell> {
    board
        .cells()
        .filter(|c| !occupied.contains(c))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn segs<const N: usize>(cells: [(i32, i32); N]) -> VecDeque<Cell> {
        cells.into_iter().map(|(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn advance_prepends_head() {
        let before = segs([(5, 5), (5, 6)]);
        let after = advance(&before, Direction::East);
        assert_eq!(after, segs([(6, 5), (5, 5), (5, 6)]));
        assert_eq!(before, segs([(5, 5), (5, 6)]));
    }

    #[rstest]
    #[case(segs([(5, 5)]), false)]
    #[case(segs([(0, 0), (1, 0)]), false)]
    #[case(segs([(9, 9), (8, 9)]), false)]
    #[case(segs([(-1, 5), (0, 5)]), true)]
    #[case(segs([(5, -1), (5, 0)]), true)]
    #[case(segs([(10, 5), (9, 5)]), true)]
    #[case(segs([(5, 10), (5, 9)]), true)]
    #[case(segs([(5, 5), (5, 6), (6, 6), (6, 5), (5, 5)]), true)]
    #[case(segs([(5, 5), (5, 6), (6, 6), (6, 5), (6, 4)]), false)]
    fn test_is_colliding(#[case] body: VecDeque<Cell>, #[case] r: bool) {
        assert_eq!(is_colliding(&body, Board::new(10).unwrap()), r);
    }

    #[test]
    fn moving_onto_vacating_tail_collides() {
        // A 4-segment loop whose head turns into the tail's current cell
        let before = segs([(5, 5), (6, 5), (6, 6), (5, 6)]);
        let after = advance(&before, Direction::South);
        assert!(is_colliding(&after, Board::new(10).unwrap()));
    }

    #[rstest]
    #[case(segs([(6, 5), (5, 5)]), Cell::new(6, 5), true)]
    #[case(segs([(6, 5), (5, 5)]), Cell::new(5, 5), false)]
    #[case(segs([(6, 5)]), Cell::new(0, 0), false)]
    fn test_is_food_captured(#[case] body: VecDeque<Cell>, #[case] food: Cell, #[case] r: bool) {
        assert_eq!(is_food_captured(&body, food), r);
    }

    #[test]
    fn free_cell_avoids_occupied() {
        let board = Board::new(5).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let occupied = board.cells().take(20).collect::<HashSet<_>>();
        for _ in 0..100 {
            let cell = random_free_cell(&mut rng, board, &occupied).unwrap();
            assert!(board.contains(cell));
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn free_cell_last_one() {
        let board = Board::new(5).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut occupied = board.cells().collect::<HashSet<_>>();
        occupied.remove(&Cell::new(3, 1));
        assert_eq!(
            random_free_cell(&mut rng, board, &occupied),
            Some(Cell::new(3, 1))
        );
    }

    #[test]
    fn free_cell_full_board() {
        let board = Board::new(5).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let occupied = board.cells().collect::<HashSet<_>>();
        assert_eq!(random_free_cell(&mut rng, board, &occupied), None);
    }
}
