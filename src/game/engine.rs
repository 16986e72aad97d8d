use super::cell::{Board, Cell};
use super::direction::Direction;
use super::movement::{advance, is_colliding, is_food_captured, random_free_cell};
use super::queue::DirectionQueue;
use super::state::{GameState, Phase};
use crate::highscores::HighScore;
use rand::Rng;
use std::collections::HashSet;

/// What happened during a single tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// The snake moved without eating
    Moved,
    /// The snake ate the food and grew by one segment
    Ate,
    /// The snake hit a wall or itself; the game is over
    Collided,
    /// The snake ate the food and now fills the whole board; the game is over
    BoardFilled,
}

/// The game rules and lifecycle: `Idle` → `start()` → `Running` → collision
/// → `Over` → `start()`/`reset()`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Engine<R> {
    rng: R,
    board: Board,
    state: GameState,
    queue: DirectionQueue,
    high_score: HighScore,
}

impl<R: Rng> Engine<R> {
    pub(crate) fn new(board: Board, high_score: HighScore, mut rng: R) -> Engine<R> {
        let state = fresh_state(board, &mut rng);
        Engine {
            rng,
            board,
            state,
            queue: DirectionQueue::new(),
            high_score,
        }
    }

    /// Begin a new game from the initial configuration.  Allowed from any
    /// phase; an in-progress game is discarded.
    pub(crate) fn start(&mut self) {
        self.state = GameState {
            started: true,
            ..fresh_state(self.board, &mut self.rng)
        };
        if !self.queue.is_empty() {
            log::debug!("Discarding {} queued turns", self.queue.len());
        }
        self.queue.clear();
        log::info!("Starting new game on {0}x{0} board", self.board.size());
    }

    /// Return to the not-yet-started phase with a fresh board
    pub(crate) fn reset(&mut self) {
        self.state = fresh_state(self.board, &mut self.rng);
        self.queue.clear();
        log::debug!("Game reset");
    }

    /// Advance the game by one step.  Returns `None` if the game isn't
    /// running.
    pub(crate) fn tick(&mut self) -> Option<TickOutcome> {
        if self.phase() != Phase::Running {
            return None;
        }
        let direction = self.queue.dequeue_or(self.state.direction);
        let mut body = advance(&self.state.body, direction);
        if is_colliding(&body, self.board) {
            self.state = GameState {
                direction,
                game_over: true,
                ..self.state.clone()
            };
            log::info!(
                "Game over: collided at {:?} with score {}",
                body.front(),
                self.state.score
            );
            return Some(TickOutcome::Collided);
        }
        let (food, score, outcome) = match self.state.food {
            Some(food) if is_food_captured(&body, food) => {
                let score = self.state.score + 1;
                self.high_score.update(score);
                let occupied = body.iter().copied().collect::<HashSet<_>>();
                let food = random_free_cell(&mut self.rng, self.board, &occupied);
                log::debug!("Ate food at {food:?}; score is now {score}");
                let outcome = if food.is_some() {
                    TickOutcome::Ate
                } else {
                    log::info!("Board filled with score {score}");
                    TickOutcome::BoardFilled
                };
                (food, score, outcome)
            }
            food => {
                let _ = body.pop_back();
                (food, self.state.score, TickOutcome::Moved)
            }
        };
        self.state = GameState {
            body,
            food,
            direction,
            score,
            game_over: outcome == TickOutcome::BoardFilled,
            started: true,
        };
        Some(outcome)
    }
}

impl<R> Engine<R> {
    /// Queue a turn.  Ignored unless the game is running.  Returns whether the
    /// turn was accepted.
    pub(crate) fn enqueue(&mut self, direction: Direction) -> bool {
        self.phase() == Phase::Running && self.queue.enqueue(direction, self.state.direction)
    }

    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }

    pub(crate) fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub(crate) fn board(&self) -> Board {
        self.board
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score.get()
    }

    /// Number of queued turns not yet applied
    pub(crate) fn pending_turns(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

fn fresh_state<R: Rng>(board: Board, rng: &mut R) -> GameState {
    let body = board.initial_body();
    let occupied = body.iter().copied().collect::<HashSet<Cell>>();
    let food = random_free_cell(rng, board, &occupied);
    GameState::initial(board, food)
}
