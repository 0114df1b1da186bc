use seqkit::prelude::*;
use seqkit::seq::{of, range};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_reverse_and_sort() {
    assert_eq!(of(vec![1, 2, 3]).reverse().collect(), vec![3, 2, 1]);
    assert_eq!(of(vec![3, 1, 2]).sort().collect(), vec![1, 2, 3]);
}

#[test]
fn test_sort_by_key_is_stable() {
    let people = of(vec![("ann", 30), ("bob", 25), ("cid", 30), ("dan", 25)]);
    let by_age = people.sort_by(|(_, age)| *age).collect();
    assert_eq!(by_age, vec![("bob", 25), ("dan", 25), ("ann", 30), ("cid", 30)]);
}

#[test]
fn test_sort_comparing() {
    let descending = of(vec![2, 9, 4]).sort_comparing(|a, b| b.cmp(a)).collect();
    assert_eq!(descending, vec![9, 4, 2]);
}

#[test]
fn test_reordering_waits_for_first_pull() {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let sorted = of(vec![5, 3, 4])
        .tap(move |_| counter.set(counter.get() + 1))
        .sort();
    let mut traversal = sorted.iter();
    assert_eq!(pulls.get(), 0);

    assert_eq!(traversal.next(), Some(3));
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_partition_into_fixed_chunks() {
    let chunks: Vec<Vec<i32>> = of(1..=6).partition(2).map(|chunk| chunk.to_vec()).collect();
    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
}

#[test]
fn test_chunk_keeps_short_tail() {
    let chunks: Vec<Vec<i32>> = of(1..=5).chunk(2).map(|chunk| chunk.to_vec()).collect();
    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[test]
#[should_panic]
fn test_partition_of_zero_panics() {
    let _ = of(vec![1]).partition(0);
}

#[test]
fn test_group_by_key_in_first_occurrence_order() {
    let groups = of(1..=6).group_by(|x| x % 2).collect();
    assert_eq!(groups.len(), 2);

    let (odd_key, odds) = &groups[0];
    assert_eq!(*odd_key, 1);
    assert_eq!(odds.to_vec(), vec![1, 3, 5]);

    let (even_key, evens) = &groups[1];
    assert_eq!(*even_key, 0);
    assert_eq!(evens.to_vec(), vec![2, 4, 6]);
}

#[test]
fn test_partition_by_drops_keys() {
    let parts: Vec<Vec<&str>> = of(vec!["apple", "bee", "avocado", "cat", "banana"])
        .partition_by(|word| word.chars().next())
        .map(|part| part.to_vec())
        .collect();
    assert_eq!(
        parts,
        vec![vec!["apple", "avocado"], vec!["bee", "banana"], vec!["cat"]]
    );
}

#[test]
fn test_take_while_excludes_boundary() {
    let taken = of(vec![1, 2, 5, 1]).take_while(|x| *x < 3).collect();
    assert_eq!(taken, vec![1, 2]);
}

#[test]
fn test_skip_while() {
    let rest = of(vec![1, 2, 5, 1]).skip_while(|x| *x < 3).collect();
    assert_eq!(rest, vec![5, 1]);
}

#[test]
fn test_take_until_excludes_match() {
    let taken = of(vec!["a", "b", "stop", "c"]).take_until(|s| *s == "stop").collect();
    assert_eq!(taken, vec!["a", "b"]);
}

#[test]
fn test_skip_until_keeps_match() {
    let rest = of(vec!["a", "b", "stop", "c"]).skip_until(|s| *s == "stop").collect();
    assert_eq!(rest, vec!["stop", "c"]);
}

#[test]
fn test_take_while_does_not_pull_past_boundary() {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let taken = range(0, 1000)
        .tap(move |_| counter.set(counter.get() + 1))
        .take_while(|x| *x < 2)
        .collect();

    assert_eq!(taken, vec![0, 1]);
    assert_eq!(pulls.get(), 3);
}
