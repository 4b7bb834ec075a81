//! Bounded FIFO of cells waiting to be fired on.

use super::board::ShotBoard;
use super::config::TARGET_QUEUE_CAPACITY;
use super::coord::Coord;

/// Fixed-capacity ring buffer. A push into a full queue is dropped.
///
/// Entries are not deduplicated; a cell can be queued by several hits and may
/// already be known by the time it is popped.
#[derive(Clone)]
pub struct TargetQueue {
    slots: [Coord; TARGET_QUEUE_CAPACITY],
    head: usize,
    len: usize,
}

impl TargetQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self {
            slots: [Coord::ORIGIN; TARGET_QUEUE_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    /// Maximum number of pending entries.
    pub fn capacity(&self) -> usize {
        TARGET_QUEUE_CAPACITY
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is waiting to be fired on.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the next `push` would be dropped.
    pub fn is_full(&self) -> bool {
        self.len == TARGET_QUEUE_CAPACITY
    }

    /// Appends `at`; returns `false` if the queue was full and it was dropped.
    pub fn push(&mut self, at: Coord) -> bool {
        if self.is_full() {
            log::trace!("target queue full, dropping {}", at);
            return false;
        }
        let tail = (self.head + self.len) % TARGET_QUEUE_CAPACITY;
        self.slots[tail] = at;
        self.len += 1;
        true
    }

    /// Removes the oldest entry.
    pub fn pop(&mut self) -> Option<Coord> {
        if self.is_empty() {
            return None;
        }
        let at = self.slots[self.head];
        self.head = (self.head + 1) % TARGET_QUEUE_CAPACITY;
        self.len -= 1;
        Some(at)
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Queue the on-board, still Unknown orthogonal neighbors of `at`.
    /// Returns how many were accepted.
    pub fn enqueue_neighbors(&mut self, board: &ShotBoard, at: Coord) -> usize {
        let mut pushed = 0;
        for n in at.neighbors().filter(|n| board.is_unknown(*n)) {
            if self.push(n) {
                pushed += 1;
            }
        }
        pushed
    }

    /// Pending entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.len).map(move |i| self.slots[(self.head + i) % TARGET_QUEUE_CAPACITY])
    }
}

impl Default for TargetQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TargetQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
