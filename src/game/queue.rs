use super::direction::Direction;
use std::collections::VecDeque;

/// Turns requested by the player that have not yet been applied.  At most
/// one is consumed per tick.
///
/// The queue has no size limit.  Human key presses arrive slower than ticks
/// are consumed, so it never holds more than a couple of entries in practice.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct DirectionQueue(VecDeque<Direction>);

impl DirectionQueue {
    pub(crate) fn new() -> DirectionQueue {
        DirectionQueue::default()
    }

    /// Append `candidate` unless it reverses the most recently queued
    /// direction (or `live` if nothing is queued).  Returns whether the
    /// direction was queued.
    pub(crate) fn enqueue(&mut self, candidate: Direction, live: Direction) -> bool {
        let last = self.0.back().copied().unwrap_or(live);
        if candidate.is_reversal_of(last) {
            false
        } else {
            self.0.push_back(candidate);
            true
        }
    }

    /// Pop the oldest queued direction, or return `current` if there is none
    pub(crate) fn dequeue_or(&mut self, current: Direction) -> Direction {
        self.0.pop_front().unwrap_or(current)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
