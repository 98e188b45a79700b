use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Counts its own drops into a shared cell.
struct Tracked {
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(drops: &Rc<Cell<usize>>) -> Self {
        Tracked { drops: Rc::clone(drops) }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn destroy_drops_each_once() {
    let drops = Rc::new(Cell::new(0));
    let mut pq = PriorityDeque::new();
    for p in 0..25 {
        pq.insert(Tracked::new(&drops), p).unwrap();
    }
    assert_eq!(drops.get(), 0);
    pq.destroy();
    assert_eq!(drops.get(), 25);
}

#[test]
fn destroy_empty() {
    let drops = Rc::new(Cell::new(0));
    let mut pq = PriorityDeque::new();
    pq.insert(Tracked::new(&drops), 1).unwrap();
    let (_, taken) = pq.extract_min().unwrap();
    pq.destroy();
    assert_eq!(drops.get(), 0);
    drop(taken);
    assert_eq!(drops.get(), 1);
}

#[test]
fn extract_hands_back_ownership() {
    let drops = Rc::new(Cell::new(0));
    let mut pq = PriorityDeque::new();
    pq.insert(Tracked::new(&drops), 2).unwrap();
    pq.insert(Tracked::new(&drops), 1).unwrap();
    let max = pq.extract_max().unwrap();
    let min = pq.peek_min().map(|(p, _)| *p).unwrap();
    assert_eq!(min, 1);
    assert_eq!(drops.get(), 0);
    drop(max);
    assert_eq!(drops.get(), 1);
    drop(pq);
    assert_eq!(drops.get(), 2);
}

#[test]
fn reassign_returns_old_priority() {
    let drops = Rc::new(Cell::new(0));
    let cmp = |a: &(i32, Tracked), b: &(i32, Tracked)| a.0.cmp(&b.0);
    let mut pq = PriorityDeque::with_comparator(cmp);
    pq.insert("x", (5, Tracked::new(&drops))).unwrap();
    let old = pq.reassign_priority(&"x", (1, Tracked::new(&drops))).unwrap();
    assert_eq!(drops.get(), 0);
    assert_eq!(old.0, 5);
    drop(old);
    assert_eq!(drops.get(), 1);
    pq.clear();
    assert_eq!(drops.get(), 2);
}

#[test]
fn failed_insert_keeps_caller_payload() {
    let drops = Rc::new(Cell::new(0));
    let config = HeapConfig::new().initial_capacity(1).expand_factor(usize::MAX);
    let mut pq = PriorityDeque::from_config(config, compare::natural()).unwrap();
    pq.insert(Tracked::new(&drops), 1).unwrap();
    let err = pq.insert(Tracked::new(&drops), 2).unwrap_err();
    assert_eq!(drops.get(), 0);
    assert!(matches!(err.error, HeapError::AllocationFailure { .. }));
    assert_eq!(pq.len(), 1);
    let (priority, element) = err.into_pair();
    assert_eq!(priority, 2);
    assert_eq!(drops.get(), 0);
    drop(element);
    assert_eq!(drops.get(), 1);
}

#[test]
fn failed_extend_hands_back_failing_pair() {
    let drops = Rc::new(Cell::new(0));
    let config = HeapConfig::new().initial_capacity(1).expand_factor(usize::MAX);
    let mut pq = PriorityDeque::from_config(config, compare::natural()).unwrap();
    let entries = vec![(1, Tracked::new(&drops)), (2, Tracked::new(&drops))];
    let err = pq.try_extend(entries).unwrap_err();
    assert_eq!(drops.get(), 0);
    assert_eq!(err.priority, 2);
    assert!(format!("{:?}", err).starts_with("InsertError { error: AllocationFailure"));
    drop(err);
    assert_eq!(drops.get(), 1);
    pq.destroy();
    assert_eq!(drops.get(), 2);
}
