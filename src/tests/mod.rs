use crate::core::*;
use crate::config::{HeapConfig, Orientation};
use crate::error::HeapError;

mod flip_test;
mod reassign_test;
mod drop_test;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn filled(orientation: Orientation, priorities: &[i32]) -> PriorityDeque<i32, String> {
    let config = HeapConfig::new().orientation(orientation);
    let mut pq = PriorityDeque::from_config(config, compare::natural()).unwrap();
    for p in priorities {
        pq.insert(format!("e{}", p), *p).unwrap();
        assert!(pq.check());
    }
    pq
}
