use super::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Hits needed to win: every segment of one fleet.
pub const WINNING_SCORE: usize = fleet_cells(&SHIPS);

/// Random draws tried before falling back to a full scan of the candidates.
pub const MAX_SAMPLING_ATTEMPTS: usize = 1_000;

/// Default pause before each shot is resolved, in milliseconds.
pub const DEFAULT_PACING_MS: u64 = 500;

/// Sum of the ship lengths in `ships`.
pub const fn fleet_cells(ships: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < ships.len() {
        total += ships[i].length();
        i += 1;
    }
    total
}

/// Look up a ship of the standard fleet by name.
pub fn ship_by_name(name: &str) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.name() == name)
}
