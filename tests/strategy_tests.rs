use battleship_client::{
    CellStatus, Coord, Decision, GameResult, HuntTarget, Mode, MoveResult, ShotOutcome,
};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

fn success(shot: ShotOutcome) -> MoveResult {
    MoveResult::Success { shot, score: None }
}

#[test]
fn fresh_game_opens_at_origin() {
    let mut s = HuntTarget::new();
    assert_eq!(s.parity(), 0);
    assert_eq!(s.mode(), Mode::Hunting);
    assert_eq!(s.decide(), Decision::Fire(c(0, 0)));
}

#[test]
fn hunting_walks_the_checkerboard() {
    let mut s = HuntTarget::new();
    let mut fired = Vec::new();
    for _ in 0..6 {
        let Decision::Fire(at) = s.decide() else {
            panic!("expected a shot");
        };
        s.observe(at, &success(ShotOutcome::Miss));
        fired.push(at);
    }
    assert_eq!(
        fired,
        vec![c(0, 0), c(2, 0), c(4, 0), c(6, 0), c(8, 0), c(1, 1)]
    );
    assert!(fired.iter().all(|at| at.parity() == 0));
}

#[test]
fn hit_queues_neighbors_in_order() {
    let mut s = HuntTarget::new();
    assert_eq!(s.observe(c(5, 5), &success(ShotOutcome::Hit)), None);
    assert_eq!(s.board().cell_at(c(5, 5)), CellStatus::Hit);
    let queued: Vec<_> = s.queue().iter().collect();
    assert_eq!(queued, vec![c(6, 5), c(4, 5), c(5, 6), c(5, 4)]);
    assert_eq!(s.mode(), Mode::Targeting);
    assert_eq!(s.decide(), Decision::Fire(c(6, 5)));
}

#[test]
fn queued_cell_known_before_pop_is_discarded() {
    let mut s = HuntTarget::new();
    s.queue_mut().push(c(3, 3));
    s.board_mut().record(3, 3, true);
    assert_eq!(s.decide(), Decision::Discard(c(3, 3)));
    assert!(s.queue().is_empty());
    assert_eq!(s.decide(), Decision::Fire(c(0, 0)));
}

#[test]
fn transport_failure_changes_nothing() {
    let mut s = HuntTarget::new();
    s.queue_mut().push(c(7, 7));
    let before_board = *s.board();
    assert_eq!(s.observe(c(2, 2), &MoveResult::TransportFailure), None);
    assert_eq!(*s.board(), before_board);
    assert_eq!(s.queue().len(), 1);
}

#[test]
fn already_fired_is_not_recorded_but_hit_still_queues() {
    let mut s = HuntTarget::new();
    s.observe(c(0, 5), &success(ShotOutcome::AlreadyFired { hit: true }));
    assert_eq!(s.board().cell_at(c(0, 5)), CellStatus::Unknown);
    let queued: Vec<_> = s.queue().iter().collect();
    assert_eq!(queued, vec![c(1, 5), c(0, 6), c(0, 4)]);

    s.observe(c(9, 9), &success(ShotOutcome::AlreadyFired { hit: false }));
    assert_eq!(s.board().cell_at(c(9, 9)), CellStatus::Unknown);
    assert_eq!(s.queue().len(), 3);
}

#[test]
fn game_over_is_recorded_and_reported() {
    let mut s = HuntTarget::new();
    let won = MoveResult::GameOver {
        shot: ShotOutcome::Hit,
        result: GameResult::Won,
        score: Some(12),
    };
    assert_eq!(s.observe(c(4, 4), &won), Some(GameResult::Won));
    assert_eq!(s.board().cell_at(c(4, 4)), CellStatus::Hit);

    let lost = MoveResult::GameOver {
        shot: ShotOutcome::Miss,
        result: GameResult::Lost,
        score: Some(0),
    };
    assert_eq!(s.observe(c(0, 0), &lost), Some(GameResult::Lost));
    assert_eq!(s.board().cell_at(c(0, 0)), CellStatus::Miss);
}

#[test]
fn parity_flips_once_its_class_is_exhausted() {
    let mut s = HuntTarget::new();
    for at in Coord::all().filter(|at| at.parity() == 0) {
        s.board_mut().record(at.x(), at.y(), false);
    }
    assert_eq!(s.decide(), Decision::Fire(c(1, 0)));
    assert_eq!(s.parity(), 1);
}

#[test]
fn full_board_is_stuck() {
    let mut s = HuntTarget::new();
    for at in Coord::all() {
        s.board_mut().record(at.x(), at.y(), false);
    }
    assert_eq!(s.decide(), Decision::Stuck);
}

#[test]
fn reset_starts_over() {
    let mut s = HuntTarget::new();
    s.observe(c(5, 5), &success(ShotOutcome::Hit));
    s.reset();
    assert!(s.queue().is_empty());
    assert_eq!(s.board().unknown_count(), 100);
    assert_eq!(s.decide(), Decision::Fire(c(0, 0)));
}
