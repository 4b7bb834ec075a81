//! The shooter's view of the opponent board.

use core::fmt;

use super::bitboard::BitBoard;
use super::common::CellStatus;
use super::config::{BOARD_CELLS, BOARD_SIZE};
use super::coord::Coord;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Per-cell Unknown / Miss / Hit state, one instance per game.
///
/// A cell is written at most once: after the first `record` it keeps its
/// status until `reset`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotBoard {
    hits: BB,
    misses: BB,
}

impl ShotBoard {
    /// Board with every cell Unknown.
    pub fn new() -> Self {
        Self {
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// Forget all shots. Call once per new game.
    pub fn reset(&mut self) {
        self.hits.clear_all();
        self.misses.clear_all();
    }

    /// Status of one cell.
    pub fn cell_at(&self, at: Coord) -> CellStatus {
        if self.hits.get(at.x(), at.y()).unwrap_or(false) {
            CellStatus::Hit
        } else if self.misses.get(at.x(), at.y()).unwrap_or(false) {
            CellStatus::Miss
        } else {
            CellStatus::Unknown
        }
    }

    /// True if `at` has not been recorded yet.
    pub fn is_unknown(&self, at: Coord) -> bool {
        self.cell_at(at) == CellStatus::Unknown
    }

    /// Record a shot result at `(x, y)`.
    ///
    /// Returns `false` and leaves the board untouched when the coordinate is
    /// off the board or the cell is already known.
    pub fn record(&mut self, x: usize, y: usize, hit: bool) -> bool {
        let Some(at) = Coord::new(x, y) else {
            return false;
        };
        if !self.is_unknown(at) {
            return false;
        }
        let target = if hit { &mut self.hits } else { &mut self.misses };
        target.set(at.x(), at.y()).is_ok()
    }

    /// Number of cells recorded as Hit.
    pub fn hits(&self) -> usize {
        self.hits.count_ones()
    }

    /// Number of cells recorded as Miss.
    pub fn misses(&self) -> usize {
        self.misses.count_ones()
    }

    /// Number of cells still Unknown.
    pub fn unknown_count(&self) -> usize {
        BOARD_CELLS - self.hits() - self.misses()
    }

    /// First Unknown cell in row-major order whose checkerboard parity
    /// matches, or any Unknown cell when `parity` is `None`.
    pub fn first_unknown(&self, parity: Option<u8>) -> Option<Coord> {
        Coord::all()
            .filter(|c| parity.map_or(true, |p| c.parity() == p))
            .find(|c| self.is_unknown(*c))
    }
}

impl fmt::Debug for ShotBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShotBoard {{ hits: {}, misses: {}, unknown: {} }}",
            self.hits(),
            self.misses(),
            self.unknown_count()
        )
    }
}

/// Grid rendering: `X` hit, `o` miss, `.` unknown, x across and y down.
impl fmt::Display for ShotBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", x)?;
        }
        for y in 0..BOARD_SIZE as usize {
            writeln!(f)?;
            write!(f, "{:>2}", y)?;
            for x in 0..BOARD_SIZE as usize {
                let ch = match Coord::new(x, y).map(|c| self.cell_at(c)) {
                    Some(CellStatus::Hit) => 'X',
                    Some(CellStatus::Miss) => 'o',
                    _ => '.',
                };
                write!(f, " {}", ch)?;
            }
        }
        Ok(())
    }
}
