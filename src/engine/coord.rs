//! Board coordinates.

use core::fmt;

use super::common::BoardError;
use super::config::{BOARD_SIZE, NEIGHBOR_OFFSETS};

/// A cell position with `x` (column) and `y` (row) both in `[0, BOARD_SIZE)`.
///
/// A `Coord` can only be built through a range-checked constructor, so any
/// value of this type is a legal shot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// The top-left cell.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Returns `None` when either component is off the board.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_SIZE as usize && y < BOARD_SIZE as usize {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Column.
    pub fn x(&self) -> usize {
        self.x as usize
    }

    /// Row.
    pub fn y(&self) -> usize {
        self.y as usize
    }

    /// Checkerboard colour of the cell: `(x + y) mod 2`.
    pub fn parity(&self) -> u8 {
        (self.x + self.y) & 1
    }

    /// Cell offset by `(dx, dy)`, or `None` if that leaves the board.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if x < 0 || y < 0 {
            return None;
        }
        Coord::new(x as usize, y as usize)
    }

    /// On-board orthogonal neighbors in `NEIGHBOR_OFFSETS` order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Every cell of the board in row-major order (y outer, x inner).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord { x, y }))
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = BoardError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(x, y).ok_or(BoardError::OutOfBounds { x, y })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:2},{:2}]", self.x, self.y)
    }
}
