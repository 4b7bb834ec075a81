//! The opponent's hidden board: placed ships plus the shots taken at them.

use rand::Rng;

use super::bitboard::BitBoard;
use super::common::BoardError;
use super::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use super::ship::{Orientation, Ship};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// What a shot did to the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Miss,
    Hit,
    /// Hit that sank the named ship.
    Sink(&'static str),
}

pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Fleet {
    /// No ships placed, no shots taken.
    pub fn new() -> Self {
        Fleet {
            ships: [None; NUM_SHIPS],
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// Standard fleet at random non-overlapping positions.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut fleet = Fleet::new();
        for i in 0..NUM_SHIPS {
            let (x, y, o) = fleet.random_placement(rng, i)?;
            fleet.place(i, x, y, o)?;
        }
        Ok(fleet)
    }

    /// Place ship `ship_index` of the standard fleet with its bow at `(x, y)`.
    pub fn place(
        &mut self,
        ship_index: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let def = *SHIPS.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(def, orientation, x, y)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// A free `(x, y, orientation)` for ship `ship_index`, trying up to 100
    /// random spots.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let def = *SHIPS.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        let n = BOARD_SIZE as usize;
        for _ in 0..100 {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orient {
                Orientation::Horizontal => (n - def.length(), n - 1),
                Orientation::Vertical => (n - 1, n - def.length()),
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let ship = Ship::new(def, orient, x, y)?;
            if (self.ship_map & ship.mask()).is_empty() {
                return Ok((x, y, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Placed ships, in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Every cell covered by a ship.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// True when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships().all(|s| s.is_sunk())
    }

    /// Distinct cells fired at so far.
    pub fn shots_taken(&self) -> usize {
        self.hits.count_ones() + self.misses.count_ones()
    }

    /// Whether `(x, y)` was fired on before, and if so whether it hit.
    pub fn previous_shot(&self, x: usize, y: usize) -> Result<Option<bool>, BoardError> {
        if self.hits.get(x, y)? {
            Ok(Some(true))
        } else if self.misses.get(x, y)? {
            Ok(Some(false))
        } else {
            Ok(None)
        }
    }

    /// Fire at `(x, y)`. Repeated shots fail with `AlreadyGuessed`.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<Impact, BoardError> {
        if self.previous_shot(x, y)?.is_some() {
            return Err(BoardError::AlreadyGuessed);
        }
        if !self.ship_map.get(x, y)? {
            self.misses.set(x, y)?;
            return Ok(Impact::Miss);
        }
        self.hits.set(x, y)?;
        let ship = self
            .ships
            .iter_mut()
            .flatten()
            .find(|s| s.covers(x, y))
            .ok_or(BoardError::UnknownShipHit)?;
        ship.strike(x, y);
        if ship.is_sunk() {
            Ok(Impact::Sink(ship.ship_type().name()))
        } else {
            Ok(Impact::Hit)
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Fleet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fleet")
            .field("ships", &self.ships)
            .field("hits", &self.hits.count_ones())
            .field("misses", &self.misses.count_ones())
            .finish()
    }
}
