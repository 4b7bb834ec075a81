use battleship_client::{CellStatus, Coord, ShotBoard};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

#[test]
fn fresh_board_is_all_unknown() {
    let board = ShotBoard::new();
    assert!(Coord::all().all(|at| board.cell_at(at) == CellStatus::Unknown));
    assert_eq!(board.unknown_count(), 100);
}

#[test]
fn record_marks_hit_and_miss() {
    let mut board = ShotBoard::new();
    assert!(board.record(2, 7, true));
    assert!(board.record(7, 2, false));
    assert_eq!(board.cell_at(c(2, 7)), CellStatus::Hit);
    assert_eq!(board.cell_at(c(7, 2)), CellStatus::Miss);
    assert_eq!(board.hits(), 1);
    assert_eq!(board.misses(), 1);
    assert_eq!(board.unknown_count(), 98);
}

#[test]
fn second_record_does_not_change_cell() {
    let mut board = ShotBoard::new();
    board.record(4, 4, false);
    assert!(!board.record(4, 4, true));
    assert_eq!(board.cell_at(c(4, 4)), CellStatus::Miss);

    board.record(5, 5, true);
    assert!(!board.record(5, 5, false));
    assert_eq!(board.cell_at(c(5, 5)), CellStatus::Hit);
}

#[test]
fn off_board_record_is_ignored() {
    let mut board = ShotBoard::new();
    assert!(!board.record(10, 0, true));
    assert!(!board.record(0, 10, false));
    assert!(!board.record(usize::MAX, 3, true));
    assert_eq!(board.unknown_count(), 100);
}

#[test]
fn reset_forgets_every_shot() {
    let mut board = ShotBoard::new();
    for at in Coord::all().step_by(3) {
        board.record(at.x(), at.y(), at.x() % 2 == 0);
    }
    board.reset();
    assert_eq!(board, ShotBoard::new());
}

#[test]
fn first_unknown_respects_parity() {
    let mut board = ShotBoard::new();
    assert_eq!(board.first_unknown(Some(0)), Some(c(0, 0)));
    assert_eq!(board.first_unknown(Some(1)), Some(c(1, 0)));
    board.record(0, 0, false);
    board.record(2, 0, false);
    assert_eq!(board.first_unknown(Some(0)), Some(c(4, 0)));
    assert_eq!(board.first_unknown(None), Some(c(1, 0)));
}

#[test]
fn display_marks_hits_and_misses() {
    let mut board = ShotBoard::new();
    board.record(0, 0, true);
    board.record(1, 0, false);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[1], " 0 X o . . . . . . . .");
}
