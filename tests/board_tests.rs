use battleship::{
    is_valid_placement, place_fleet, place_ship, random_placement, Board, BoardError, CellState,
    GuessResult, Orientation, Placement, BOARD_SIZE, SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_destroyer_at_origin_then_collision() {
    let mut board = Board::new();
    let destroyer = Placement::new(0, 0, Orientation::Horizontal, 2);
    assert!(is_valid_placement(&board, &destroyer));
    place_ship(&mut board, &destroyer).unwrap();

    assert_eq!(board.cell(0, 0).unwrap(), CellState::Occupied);
    assert_eq!(board.cell(0, 1).unwrap(), CellState::Occupied);
    assert_eq!(board.cell(0, 2).unwrap(), CellState::Empty);
    assert_eq!(board.count(CellState::Occupied), 2);

    for length in 1..=5 {
        let clash = Placement::new(0, 0, Orientation::Horizontal, length);
        assert!(!is_valid_placement(&board, &clash));
    }
    assert_eq!(
        place_ship(&mut board, &Placement::new(0, 0, Orientation::Horizontal, 3)),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(board.count(CellState::Occupied), 2);
}

#[test]
fn test_valid_placement_bounds() {
    let board = Board::new();
    assert!(is_valid_placement(&board, &Placement::new(0, 0, Orientation::Horizontal, 3)));
    assert!(!is_valid_placement(&board, &Placement::new(9, 9, Orientation::Horizontal, 3)));
    assert!(!is_valid_placement(&board, &Placement::new(9, 9, Orientation::Vertical, 3)));
    assert!(is_valid_placement(&board, &Placement::new(5, 9, Orientation::Vertical, 5)));
    assert!(!is_valid_placement(&board, &Placement::new(6, 9, Orientation::Vertical, 5)));
    assert!(is_valid_placement(&board, &Placement::new(9, 5, Orientation::Horizontal, 5)));
    assert!(!is_valid_placement(&board, &Placement::new(10, 0, Orientation::Horizontal, 1)));
    assert!(!is_valid_placement(&board, &Placement::new(0, 0, Orientation::Horizontal, 0)));
    assert!(!is_valid_placement(
        &board,
        &Placement::new(0, usize::MAX, Orientation::Horizontal, 2)
    ));
}

#[test]
fn test_placement_rejects_targeted_cells() {
    let mut board = Board::new();
    board.set_cell(4, 4, CellState::Miss).unwrap();
    assert!(!is_valid_placement(&board, &Placement::new(4, 2, Orientation::Horizontal, 3)));
    assert!(is_valid_placement(&board, &Placement::new(4, 5, Orientation::Horizontal, 3)));
}

#[test]
fn test_place_out_of_bounds_is_error() {
    let mut board = Board::new();
    assert_eq!(
        place_ship(&mut board, &Placement::new(8, 0, Orientation::Vertical, 4)),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_random_placement_is_valid() {
    let board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    for ship in SHIPS {
        let placement = random_placement(&mut rng, &board, ship.length()).unwrap();
        assert_eq!(placement.length, ship.length());
        assert!(is_valid_placement(&board, &placement));
    }
}

#[test]
fn test_random_placement_finds_last_gap() {
    // Fill everything except a single horizontal slot of length 3 on row 7.
    let mut board = Board::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if !(r == 7 && (2..5).contains(&c)) {
                board.set_cell(r, c, CellState::Occupied).unwrap();
            }
        }
    }
    let mut rng = SmallRng::seed_from_u64(7);
    let placement = random_placement(&mut rng, &board, 3).unwrap();
    assert_eq!(placement, Placement::new(7, 2, Orientation::Horizontal, 3));
    assert_eq!(
        random_placement(&mut rng, &board, 4),
        Err(BoardError::UnableToPlaceShip)
    );
}

#[test]
fn test_place_fleet_occupies_seventeen_cells() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    place_fleet(&mut rng, &mut board, &SHIPS).unwrap();
    assert_eq!(board.count(CellState::Occupied), 17);
    assert_eq!(board.count(CellState::Empty), BOARD_SIZE * BOARD_SIZE - 17);
}

#[test]
fn test_reproducible_fleet() {
    let mut a = Board::new();
    let mut b = Board::new();
    place_fleet(&mut SmallRng::seed_from_u64(9), &mut a, &SHIPS).unwrap();
    place_fleet(&mut SmallRng::seed_from_u64(9), &mut b, &SHIPS).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_strike() {
    let mut board = Board::new();
    board.set_cell(3, 3, CellState::Occupied).unwrap();
    assert_eq!(board.strike(3, 3).unwrap(), GuessResult::Hit);
    assert_eq!(board.cell(3, 3).unwrap(), CellState::Hit);
    assert_eq!(board.strike(3, 4).unwrap(), GuessResult::Miss);
    assert_eq!(board.cell(3, 4).unwrap(), CellState::Miss);
    assert_eq!(
        board.strike(3, 3),
        Err(BoardError::InvalidGuess { row: 3, col: 3 })
    );
    assert_eq!(
        board.strike(0, 10),
        Err(BoardError::OutOfBounds { row: 0, col: 10 })
    );
    assert_eq!(board.legal_targets().count(), BOARD_SIZE * BOARD_SIZE - 2);
}

#[test]
fn test_view_masks_ships() {
    let mut board = Board::new();
    place_ship(&mut board, &Placement::new(0, 0, Orientation::Horizontal, 2)).unwrap();
    board.strike(0, 0).unwrap();
    board.strike(1, 0).unwrap();

    let revealed = board.view(true).to_string();
    let masked = board.view(false).to_string();
    let lines: Vec<_> = revealed.lines().collect();
    assert_eq!(lines[0], "   A B C D E F G H I J");
    assert_eq!(lines[1], " 1 O S ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(lines[2], " 2 X ~ ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(lines[10], "10 ~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(lines.len(), 11);
    assert_eq!(masked.lines().nth(1), Some(" 1 O ~ ~ ~ ~ ~ ~ ~ ~ ~"));
}
