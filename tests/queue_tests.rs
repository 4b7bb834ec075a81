use battleship_client::{Coord, ShotBoard, TargetQueue, TARGET_QUEUE_CAPACITY};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

#[test]
fn pops_in_fifo_order() {
    let mut q = TargetQueue::new();
    assert!(q.is_empty());
    assert_eq!(q.pop(), None);
    q.push(c(1, 1));
    q.push(c(2, 2));
    q.push(c(1, 1));
    assert_eq!(q.len(), 3);
    assert_eq!(q.pop(), Some(c(1, 1)));
    assert_eq!(q.pop(), Some(c(2, 2)));
    assert_eq!(q.pop(), Some(c(1, 1)));
    assert!(q.is_empty());
}

#[test]
fn pushes_past_capacity_are_dropped() {
    let mut q = TargetQueue::new();
    assert_eq!(q.capacity(), TARGET_QUEUE_CAPACITY);
    for i in 0..TARGET_QUEUE_CAPACITY {
        assert!(q.push(c(i % 10, (i / 10) % 10)));
    }
    assert!(q.is_full());
    assert!(!q.push(c(9, 9)));
    assert_eq!(q.len(), TARGET_QUEUE_CAPACITY);
    // the oldest entry is still first
    assert_eq!(q.pop(), Some(c(0, 0)));
    assert!(q.push(c(9, 9)));
    assert_eq!(q.iter().last(), Some(c(9, 9)));
}

#[test]
fn wraps_around_the_ring() {
    let mut q = TargetQueue::new();
    for round in 0..3 * TARGET_QUEUE_CAPACITY {
        let at = c(round % 10, 3);
        assert!(q.push(at));
        assert_eq!(q.pop(), Some(at));
    }
    assert!(q.is_empty());
}

#[test]
fn neighbors_are_queued_in_fixed_order() {
    let board = ShotBoard::new();
    let mut q = TargetQueue::new();
    assert_eq!(q.enqueue_neighbors(&board, c(5, 5)), 4);
    let queued: Vec<_> = q.iter().collect();
    assert_eq!(queued, vec![c(6, 5), c(4, 5), c(5, 6), c(5, 4)]);
}

#[test]
fn neighbors_skip_edges_and_known_cells() {
    let mut board = ShotBoard::new();
    board.record(8, 9, false);
    let mut q = TargetQueue::new();
    assert_eq!(q.enqueue_neighbors(&board, c(9, 9)), 1);
    assert_eq!(q.pop(), Some(c(9, 8)));

    board.record(1, 0, true);
    assert_eq!(q.enqueue_neighbors(&board, c(0, 0)), 1);
    assert_eq!(q.pop(), Some(c(0, 1)));
}

#[test]
fn clear_empties_queue() {
    let mut q = TargetQueue::new();
    q.push(c(0, 0));
    q.push(c(0, 1));
    q.clear();
    assert!(q.is_empty());
    assert_eq!(q.pop(), None);
}
