use super::ship::ShipType;

/// Width and height of the square board.
pub const BOARD_SIZE: u8 = 10;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Usable slots in the target queue. Pushes past this are dropped.
pub const TARGET_QUEUE_CAPACITY: usize = 256;

/// Orthogonal neighbor offsets, in the order they are queued after a hit.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;
