use rstest::rstest;

use super::*;

#[test]
fn decrease_to_root() {
    init_logger();
    let mut pq = filled(Orientation::Min, &[10, 20, 30]);
    let old = pq.reassign_priority(&"e30".to_string(), 1).unwrap();
    assert_eq!(old, 30);
    assert!(pq.check());
    assert_eq!(pq.extract_min().unwrap(), (1, "e30".to_string()));
}

#[test]
fn increase_sinks() {
    let mut pq = filled(Orientation::Min, &[1, 2, 3, 4, 5, 6, 7]);
    pq.reassign_priority(&"e1".to_string(), 100).unwrap();
    assert!(pq.check());
    assert_eq!(pq.extract_min().unwrap().0, 2);
    assert_eq!(pq.extract_max().unwrap(), (100, "e1".to_string()));
}

#[test]
fn max_oriented_mirror() {
    let mut pq = filled(Orientation::Max, &[10, 20, 30, 40]);
    pq.reassign_priority(&"e10".to_string(), 50).unwrap();
    assert!(pq.check());
    assert_eq!(pq.peek_max().unwrap().1, "e10");
    pq.reassign_priority(&"e10".to_string(), 0).unwrap();
    assert!(pq.check());
    assert_eq!(pq.peek_max().unwrap().0, &40);
    assert_eq!(pq.orientation(), Orientation::Max);
}

#[test]
fn not_found_leaves_queue_alone() {
    let mut pq = filled(Orientation::Min, &[3, 1, 2]);
    let before: Vec<_> = pq.iter().map(|(p, e)| (*p, e.clone())).collect();
    assert_eq!(pq.reassign_priority(&"nope".to_string(), 0), Err(HeapError::NotFound));
    let after: Vec<_> = pq.iter().map(|(p, e)| (*p, e.clone())).collect();
    assert_eq!(before, after);

    let mut empty = PriorityDeque::<i32, i32>::new();
    assert_eq!(empty.reassign_priority(&1, 0), Err(HeapError::NotFound));
}

#[test]
fn match_function_form() {
    let mut pq = PriorityDeque::new();
    pq.insert((1, "one"), 5).unwrap();
    pq.insert((2, "two"), 6).unwrap();
    let old = pq
        .reassign_priority_by(&(2, ""), 0, |a, b| a.0.cmp(&b.0))
        .unwrap();
    assert_eq!(old, 6);
    assert_eq!(pq.extract_min().unwrap(), (0, (2, "two")));
}

#[rstest]
#[case(Orientation::Min, 15)]
#[case(Orientation::Min, -1)]
#[case(Orientation::Min, 4)]
#[case(Orientation::Max, 15)]
#[case(Orientation::Max, -1)]
#[case(Orientation::Max, 4)]
fn every_position(#[case] orientation: Orientation, #[case] priority: i32) {
    let priorities: Vec<i32> = (0..12).collect();
    for target in &priorities {
        let mut pq = filled(orientation, &priorities);
        pq.reassign_priority(&format!("e{}", target), priority).unwrap();
        assert!(pq.check(), "target {} -> {}", target, priority);
        assert_eq!(pq.len(), priorities.len());
    }
}
