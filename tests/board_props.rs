use battleship_client::{CellStatus, Coord, ShotBoard, TargetQueue, TARGET_QUEUE_CAPACITY};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> ShotBoard {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = ShotBoard::new();
    let shots = rng.random_range(0..100);
    for _ in 0..shots {
        let x = rng.random_range(0..10);
        let y = rng.random_range(0..10);
        board.record(x, y, rng.random_bool(0.3));
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn record_is_idempotent(x in 0usize..10, y in 0usize..10, first in any::<bool>(), second in any::<bool>()) {
        let mut board = ShotBoard::new();
        prop_assert!(board.record(x, y, first));
        let at = Coord::new(x, y).unwrap();
        let expected = if first { CellStatus::Hit } else { CellStatus::Miss };
        prop_assert_eq!(board.cell_at(at), expected);
        let snapshot = board;
        prop_assert!(!board.record(x, y, second));
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn neighbors_are_on_board_and_unknown(seed in any::<u64>(), x in 0usize..10, y in 0usize..10) {
        let board = random_board(seed);
        let at = Coord::new(x, y).unwrap();
        let mut q = TargetQueue::new();
        let pushed = q.enqueue_neighbors(&board, at);
        prop_assert!(pushed <= 4);
        prop_assert_eq!(pushed, q.len());
        let expected: Vec<Coord> = at.neighbors().filter(|n| board.is_unknown(*n)).collect();
        let queued: Vec<Coord> = q.iter().collect();
        prop_assert_eq!(&queued, &expected);
        for n in queued {
            prop_assert_eq!(board.cell_at(n), CellStatus::Unknown);
            prop_assert!(n.x().abs_diff(x) + n.y().abs_diff(y) == 1);
        }
    }

    #[test]
    fn queue_never_exceeds_capacity(pushes in 0usize..1000, pops in 0usize..300) {
        let mut q = TargetQueue::new();
        let mut accepted = 0;
        for i in 0..pushes {
            if q.push(Coord::new(i % 10, (i / 10) % 10).unwrap()) {
                accepted += 1;
            }
            prop_assert!(q.len() <= TARGET_QUEUE_CAPACITY);
        }
        prop_assert_eq!(accepted, pushes.min(TARGET_QUEUE_CAPACITY));
        for _ in 0..pops {
            q.pop();
        }
        prop_assert_eq!(q.len(), accepted.saturating_sub(pops));
    }
}
