use seqkit::prelude::*;
use seqkit::seq::{
    empty, from_iter, from_slice, from_slice_reversed, from_vec, of, pointers_from_slice, range,
    range_to, range_with_step, repeat, tick,
};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

#[test]
fn test_of_and_from_vec() {
    assert_eq!(of(["x", "y"]).collect(), vec!["x", "y"]);

    let seq = from_vec(vec![1, 2, 3]);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.as_slice(), &[1, 2, 3]);
    assert_eq!(seq.collect(), vec![1, 2, 3]);
}

#[test]
fn test_from_vec_traversals_are_double_ended() {
    let seq = from_vec(vec![1, 2, 3, 4]);
    let mut iter = seq.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.len(), 2);
}

#[test]
fn test_from_slice_borrows() {
    let words = vec!["alpha".to_string(), "beta".to_string()];
    let seq = from_slice(&words);
    assert_eq!(seq.collect(), words);

    let reversed = from_slice_reversed(&words).collect();
    assert_eq!(reversed, vec!["beta".to_string(), "alpha".to_string()]);
}

#[test]
fn test_pointers_from_slice_yields_references() {
    let values = [10, 20, 30];
    let pointers = pointers_from_slice(&values).collect();
    assert!(std::ptr::eq(pointers[1], &values[1]));
    assert_eq!(pointers.into_iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[test]
fn test_from_iter_replays_the_source() {
    let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    let seq = from_iter(set);
    assert_eq!(seq.collect(), vec![1, 2, 3]);
    assert_eq!(seq.count(), 3);

    let lazy = from_iter((1..4).map(|x| x * 2));
    assert_eq!(lazy.collect(), vec![2, 4, 6]);
    assert_eq!(lazy.collect(), vec![2, 4, 6]);
}

#[test]
fn test_empty_and_repeat() {
    assert!(empty::<String>().is_empty());
    assert_eq!(repeat('z', 3).collect(), vec!['z', 'z', 'z']);
    assert!(repeat(1, 0).is_empty());
}

#[test]
fn test_ranges_are_half_open() {
    assert_eq!(range(2, 5).collect(), vec![2, 3, 4]);
    assert_eq!(range_to(3u8).collect(), vec![0, 1, 2]);
    assert!(range(5, 5).is_empty());
    assert!(range(5, 1).is_empty());
}

#[test]
fn test_range_with_step() {
    assert_eq!(range_with_step(0, 10, 3).collect(), vec![0, 3, 6, 9]);
    assert_eq!(range_with_step(-4i64, 0, 2).collect(), vec![-4, -2]);
}

#[test]
fn test_range_stops_at_type_limit() {
    let tail = range_with_step(250u8, u8::MAX, 4).collect();
    assert_eq!(tail, vec![250, 254]);
}

#[test]
#[should_panic(expected = "range step must be positive")]
fn test_range_with_zero_step_panics() {
    let _ = range_with_step(0, 10, 0);
}

#[test]
fn test_tick_yields_increasing_times() {
    let started = Instant::now();
    let times = tick(Duration::from_millis(5)).take(3).collect();

    assert_eq!(times.len(), 3);
    assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(started.elapsed() >= Duration::from_millis(15));
}

#[test]
fn test_tick_drops_missed_ticks_for_a_slow_consumer() {
    let period = Duration::from_millis(20);
    let ticks = tick(period);
    let mut traversal = ticks.iter();
    assert!(traversal.next().is_some());

    std::thread::sleep(Duration::from_millis(200));

    let started = Instant::now();
    for _ in 0..5 {
        assert!(traversal.next().is_some());
    }
    // the late pull fires at once, the remaining four stay one period apart
    assert!(started.elapsed() >= Duration::from_millis(60));
}

#[test]
#[should_panic(expected = "tick period must be non-zero")]
fn test_tick_rejects_zero_period() {
    let _ = tick(Duration::ZERO);
}
