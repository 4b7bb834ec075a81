//! Ship definitions and placement masks for the referee fleet.

use core::fmt;

use super::bitboard::BitBoard;
use super::common::BoardError;
use super::config::BOARD_SIZE;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Name and length of a kind of ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Creates a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Returns the name of the ship type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the length of the ship.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed with its bow at `(x, y)`, extending right or down.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    x: usize,
    y: usize,
    mask: BB,
    hits: BB,
}

impl Ship {
    /// Place a ship, or `ShipOutOfBounds` if it does not fit on the board.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        let n = BOARD_SIZE as usize;
        let fits = match orientation {
            Orientation::Horizontal => x + len <= n && y < n,
            Orientation::Vertical => y + len <= n && x < n,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        let mask = BB::from_cells((0..len).map(|i| match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        }))?;
        Ok(Ship {
            ship_type,
            orientation,
            x,
            y,
            mask,
            hits: BB::new(),
        })
    }

    /// Marks `(x, y)` as hit if the ship covers it.
    pub fn strike(&mut self, x: usize, y: usize) -> bool {
        if self.covers(x, y) {
            let _ = self.hits.set(x, y);
            true
        } else {
            false
        }
    }

    /// True if the ship occupies `(x, y)`.
    pub fn covers(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y).unwrap_or(false)
    }

    /// True once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.ship_type.length()
    }

    /// Returns the ship type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Cells the ship occupies.
    pub fn mask(&self) -> BB {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.x,
            self.y,
            self.orientation,
            self.hits.count_ones(),
        )
    }
}
