use seqkit::prelude::*;
use seqkit::seq::{self, empty, from_vec, of, range};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_flat_map_concatenates_in_order() {
    let result = of(vec![1, 2, 3]).flat_map(|n| seq::repeat(n, n as usize)).collect();
    assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
}

#[test]
fn test_flat_map_is_lazy_across_sub_sequences() {
    let opened = Rc::new(Cell::new(0));
    let counter = Rc::clone(&opened);
    let result = range(0, 100)
        .flat_map(move |n| {
            counter.set(counter.get() + 1);
            range(0, n)
        })
        .take(3)
        .collect();

    // sub-sequences of 0, 1 and 2 elements supply the first three values
    assert_eq!(result, vec![0, 0, 1]);
    assert_eq!(opened.get(), 3);
}

#[test]
fn test_flatten_sequences_and_slices() {
    let nested = of(vec![of(vec![1, 2]), empty_vec(), of(vec![3])]);
    assert_eq!(nested.flatten().collect(), vec![1, 2, 3]);

    let vectors = of(vec![vec!['a'], vec![], vec!['b', 'c']]);
    assert_eq!(vectors.flatten_slices().collect(), vec!['a', 'b', 'c']);

    let options = of(vec![Some(1), None, Some(3)]);
    assert_eq!(options.flatten_slices().collect(), vec![1, 3]);
}

fn empty_vec() -> seq::FromVec<i32> {
    from_vec(Vec::new())
}

#[test]
fn test_zip_stops_at_shorter() {
    let zipped = of(vec![1, 2, 3]).zip(of(vec!["one", "two"])).collect();
    assert_eq!(zipped, vec![(1, "one"), (2, "two")]);
}

#[test]
fn test_concat_append_prepend() {
    let base = of(vec![2, 3]);
    assert_eq!(base.clone().concat(of(vec![4])).collect(), vec![2, 3, 4]);
    assert_eq!(base.clone().union_all(of(vec![2])).collect(), vec![2, 3, 2]);
    assert_eq!(base.clone().append([4, 5]).collect(), vec![2, 3, 4, 5]);
    assert_eq!(base.prepend([0, 1]).collect(), vec![0, 1, 2, 3]);
}

#[test]
fn test_concat_many() {
    let joined = seq::concat(vec![of(vec![1]), of(vec![]), of(vec![2, 3])]).collect();
    assert_eq!(joined, vec![1, 2, 3]);
}

#[test]
fn test_union_drops_duplicates_keeping_first() {
    let merged = of(vec![3, 1, 3]).union(of(vec![2, 1, 4])).collect();
    assert_eq!(merged, vec![3, 1, 2, 4]);
}

#[test]
fn test_uniq_and_uniq_by() {
    assert_eq!(of(vec![1, 1, 2, 1, 3]).uniq().collect(), vec![1, 2, 3]);
    assert_eq!(of(vec!["a", "b", "a"]).distinct().collect(), vec!["a", "b"]);

    let by_length = of(vec!["one", "two", "three", "four", "six"])
        .uniq_by(|word| word.len())
        .collect();
    assert_eq!(by_length, vec!["one", "three", "four"]);
}

#[test]
fn test_cycle_consumes_only_what_take_requests() {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let source = of(vec![1, 2]).tap(move |_| counter.set(counter.get() + 1));

    let result = source.cycle().take(3).collect();
    assert_eq!(result, vec![1, 2, 1]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_take_over_mapped_filtered_cycle_pulls_only_what_it_needs() {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let source = of(vec![1, 2, 3, 4]).tap(move |_| counter.set(counter.get() + 1));

    let result = source.cycle().map(|x| x * 10).filter(|x| x % 20 == 0).take(3).collect();
    assert_eq!(result, vec![20, 40, 20]);
    // 1, 2, 3, 4, 1, 2: the third even value is the sixth element pulled
    assert_eq!(pulls.get(), 6);
}

#[test]
fn test_cycle_times() {
    assert_eq!(of(vec!['x', 'y']).cycle_times(2).collect(), vec!['x', 'y', 'x', 'y']);
    assert!(of(vec![1]).cycle_times(0).is_empty());
}

#[test]
fn test_cycle_of_empty_terminates() {
    assert!(empty::<i32>().cycle().is_empty());
}

#[test]
fn test_with_index() {
    let indexed = of(vec!["a", "b"]).with_index().collect();
    assert_eq!(indexed, vec![(0, "a"), (1, "b")]);
}
