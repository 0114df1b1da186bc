use seqkit::prelude::*;
use seqkit::seq::{empty, of, range};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn test_collect_variants() {
    let seq = of(vec![1, 2, 3]);
    assert_eq!(seq.collect(), vec![1, 2, 3]);
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);

    let mut out = vec![0];
    seq.collect_into(&mut out);
    assert_eq!(out, vec![0, 1, 2, 3]);
}

#[test]
fn test_for_each_and_flush() {
    let seen = RefCell::new(Vec::new());
    of(vec!['a', 'b']).for_each(|c| seen.borrow_mut().push(c));
    assert_eq!(*seen.borrow(), vec!['a', 'b']);

    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    range(0, 4).tap(move |_| counter.set(counter.get() + 1)).flush();
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_count_and_emptiness() {
    assert_eq!(of(vec![1, 2, 3]).count(), 3);
    assert_eq!(empty::<u8>().count(), 0);
    assert!(empty::<u8>().is_empty());
    assert!(of(vec![0]).is_not_empty());
}

#[test]
fn test_is_empty_pulls_at_most_one() {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let seq = range(0, 100).tap(move |_| counter.set(counter.get() + 1));
    assert!(seq.is_not_empty());
    assert_eq!(pulls.get(), 1);
}

#[test]
fn test_find_and_find_last() {
    let seq = of(vec![1, 4, 6, 7]);
    assert_eq!(seq.find(|x| x % 2 == 0).must_get(), 4);
    assert_eq!(seq.find_last(|x| x % 2 == 0).must_get(), 6);
    assert!(seq.find(|x| *x > 10).is_empty());
}

#[test]
fn test_find_stops_at_first_match() {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let seq = range(0, 100).tap(move |_| counter.set(counter.get() + 1));
    assert_eq!(seq.find(|x| *x == 2).must_get(), 2);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_find_all_is_lazy() {
    let matches = of(vec![5, 10, 15, 20]).find_all(|x| x % 10 == 0);
    assert_eq!(matches.collect(), vec![10, 20]);
}

#[test]
fn test_membership() {
    let seq = of(vec!["red", "green", "blue"]);
    assert!(seq.contains(&"green"));
    assert!(seq.not_contains(&"black"));
    assert!(seq.contains_all(&["blue", "red"]));
    assert!(!seq.contains_all(&["blue", "black"]));
    assert!(seq.contains_all(&[]));
}

#[test]
fn test_quantifiers() {
    let seq = of(vec![2, 4, 6]);
    assert!(seq.exists(|x| x == 4));
    assert!(seq.every(|x| x % 2 == 0));
    assert!(seq.none(|x| x > 6));
    assert!(empty::<i32>().every(|_| false));
    assert!(!empty::<i32>().exists(|_| true));
}

#[test]
fn test_reduce_and_reduce_right() {
    let letters = of(vec!["a", "b", "c"]);
    assert_eq!(letters.reduce(String::new(), |acc, s| acc + s), "abc");
    assert_eq!(letters.reduce_right(String::new(), |acc, s| acc + s), "cba");
}

#[test]
fn test_fold_and_fold_right() {
    let seq = of(vec![1, 2, 3]);
    assert_eq!(seq.fold(|acc, x| acc * 10 + x).must_get(), 123);
    assert_eq!(seq.fold_right(|acc, x| acc * 10 + x).must_get(), 321);
    assert!(empty::<i32>().fold(|a, b| a + b).is_empty());
    assert_eq!(of(vec![7]).fold(|a, b| a + b).must_get(), 7);
}

#[test]
fn test_max_and_min() {
    let seq = of(vec![3, 5, 1, 5]);
    assert_eq!(seq.max().must_get(), 5);
    assert_eq!(seq.min().must_get(), 1);
    assert!(empty::<i32>().max().is_empty());
    assert!(empty::<i32>().min().is_empty());
}

#[test]
fn test_max_keeps_first_of_equals() {
    #[derive(Debug, Clone, PartialEq)]
    struct Ranked(u32, &'static str);

    impl PartialOrd for Ranked {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    let seq = of(vec![Ranked(1, "low"), Ranked(9, "first"), Ranked(9, "second")]);
    assert_eq!(seq.max().must_get().1, "first");
    assert_eq!(seq.min().must_get().1, "low");
}
