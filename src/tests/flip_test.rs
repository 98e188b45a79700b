use super::*;

#[test]
fn peek_max_then_extract_min() {
    init_logger();
    let mut pq = filled(Orientation::Min, &[4, 2, 7]);
    assert_eq!(pq.peek_max().unwrap(), (&7, &"e7".to_string()));
    assert_eq!(pq.orientation(), Orientation::Max);
    assert!(pq.check());
    assert_eq!(pq.extract_min().unwrap(), (2, "e2".to_string()));
    assert_eq!(pq.orientation(), Orientation::Min);
    assert!(pq.check());
    assert_eq!(pq.len(), 2);
}

#[test]
fn same_side_peek_does_not_flip() {
    let mut pq = filled(Orientation::Max, &[3, 1, 2]);
    assert_eq!(pq.peek_max().unwrap().0, &3);
    assert_eq!(pq.orientation(), Orientation::Max);
    let before: Vec<_> = pq.iter().map(|(p, _)| *p).collect();
    pq.peek_max().unwrap();
    let after: Vec<_> = pq.iter().map(|(p, _)| *p).collect();
    assert_eq!(before, after);
}

#[test]
fn reorient_is_idempotent() {
    let mut pq = filled(Orientation::Min, &[8, 6, 7, 5, 3, 0, 9]);
    pq.reorient(Orientation::Min);
    assert_eq!(pq.orientation(), Orientation::Min);
    pq.reorient(Orientation::Max);
    pq.reorient(Orientation::Max);
    assert_eq!(pq.orientation(), Orientation::Max);
    assert!(pq.check());
    assert_eq!(pq.iter().next().unwrap().0, &9);
}

#[test]
fn alternate_extremes() {
    let mut pq = filled(Orientation::Min, &(1..=20).collect::<Vec<_>>());
    let mut low = 1;
    let mut high = 20;
    while !pq.is_empty() {
        assert_eq!(pq.extract_max().unwrap().0, high);
        assert!(pq.check());
        high -= 1;
        if pq.is_empty() {
            break;
        }
        assert_eq!(pq.extract_min().unwrap().0, low);
        assert!(pq.check());
        low += 1;
    }
    assert_eq!(high - low, -1);
}

#[test]
fn insert_after_flip_uses_new_orientation() {
    let mut pq = filled(Orientation::Min, &[10, 20, 30]);
    pq.peek_max().unwrap();
    pq.insert("e40".to_string(), 40).unwrap();
    assert!(pq.check());
    assert_eq!(pq.iter().next().unwrap().0, &40);
    pq.insert("e5".to_string(), 5).unwrap();
    assert!(pq.check());
    assert_eq!(pq.extract_min().unwrap().0, 5);
}

#[test]
fn flip_empty_queue() {
    let mut pq = PriorityDeque::<i32, ()>::new();
    pq.reorient(Orientation::Max);
    assert_eq!(pq.orientation(), Orientation::Max);
    assert!(pq.check());
}
