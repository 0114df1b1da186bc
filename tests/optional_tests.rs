use seqkit::prelude::*;
use seqkit::Error;
use std::cell::Cell;

#[test]
fn test_of_is_present_even_for_default_values() {
    let zero = Optional::of(0);
    assert!(zero.is_present());
    assert!(zero.is_not_empty());
    assert_eq!(zero.must_get(), 0);

    let empty_string = Optional::of(String::new());
    assert!(empty_string.is_present());
}

#[test]
fn test_empty() {
    let absent = Optional::<u8>::empty();
    assert!(absent.is_empty());
    assert!(!absent.is_present());
    assert_eq!(Optional::<u8>::default(), absent);
}

#[test]
fn test_of_option_and_of_ptr() {
    assert_eq!(Optional::of_option(Some(3)).must_get(), 3);
    assert!(Optional::<i32>::of_option(None).is_empty());

    let name = "ada".to_string();
    assert_eq!(Optional::of_ptr(Some(&name)).must_get(), "ada");
    assert!(Optional::of_ptr(None::<&String>).is_empty());
}

#[test]
fn test_of_non_zero() {
    assert!(Optional::of_non_zero(0u32).is_empty());
    assert!(Optional::of_non_zero(String::new()).is_empty());
    assert_eq!(Optional::of_non_zero(5).must_get(), 5);
}

#[test]
#[should_panic(expected = "value is not present")]
fn test_must_get_panics_when_empty() {
    Optional::<i32>::empty().must_get();
}

#[test]
#[should_panic(expected = "config key missing")]
fn test_must_get_with_message() {
    Optional::<i32>::empty().must_get_with_message("config key missing");
}

#[test]
fn test_should_get() {
    assert_eq!(Optional::of('a').should_get(), Ok('a'));
    assert_eq!(Optional::<char>::empty().should_get(), Err(Error::ValueNotPresent));
}

#[test]
fn test_fallbacks() {
    assert_eq!(Optional::of(1).get_or_else(9), 1);
    assert_eq!(Optional::empty().get_or_else(9), 9);
    assert_eq!(Optional::<String>::empty().get_or_zero_value(), "");
    assert_eq!(Optional::<u8>::empty().get_or_error("missing"), Err("missing"));
    assert_eq!(Optional::of(2).get_or_error("missing"), Ok(2));
    assert_eq!(
        Optional::<u8>::empty().get_or_compute_error(|| "computed".to_string()),
        Err("computed".to_string())
    );
}

#[test]
fn test_get_or_compute_runs_only_when_empty() {
    let calls = Cell::new(0);
    let compute = || {
        calls.set(calls.get() + 1);
        42
    };

    assert_eq!(Optional::of(1).get_or_compute(compute), 1);
    assert_eq!(calls.get(), 0);

    assert_eq!(Optional::empty().get_or_compute(compute), 42);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_or() {
    assert_eq!(Optional::of(1).or(Optional::of(2)).must_get(), 1);
    assert_eq!(Optional::empty().or(Optional::of(2)).must_get(), 2);
    assert!(Optional::<i32>::empty().or(Optional::empty()).is_empty());
}

#[test]
fn test_if_present_and_if_absent() {
    let seen = Cell::new(0);
    Optional::of(7).if_present(|v| seen.set(*v));
    Optional::<i32>::empty().if_present(|_| seen.set(-1));
    assert_eq!(seen.get(), 7);

    let absent_calls = Cell::new(0);
    Optional::<i32>::empty().if_absent(|| absent_calls.set(absent_calls.get() + 1));
    Optional::of(1).if_absent(|| absent_calls.set(absent_calls.get() + 1));
    assert_eq!(absent_calls.get(), 1);
}

#[test]
fn test_map_and_as_ref() {
    assert_eq!(Optional::of(3).map(|x| x * 2).must_get(), 6);

    let called = Cell::new(false);
    let mapped = Optional::<i32>::empty().map(|x| {
        called.set(true);
        x
    });
    assert!(mapped.is_empty());
    assert!(!called.get());

    let owned = Optional::of("text".to_string());
    assert_eq!(owned.as_ref().map(|s| s.len()).must_get(), 4);
    assert!(owned.is_present());
}

#[test]
fn test_option_round_trip() {
    let optional: Optional<i32> = Some(5).into();
    let back: Option<i32> = optional.into();
    assert_eq!(back, Some(5));

    assert_eq!(Optional::<i32>::from(None).into_option(), None);
}

#[test]
fn test_to_seq() {
    assert_eq!(Optional::of(8).to_seq().collect(), vec![8]);
    assert!(Optional::<i32>::empty().to_seq().is_empty());
}

#[test]
fn test_lookups_return_optional() {
    let seq = seqkit::seq::of(vec![10, 20, 30]);
    let found = seq.find(|x| *x > 15);
    assert_eq!(found, Optional::of(20));
    assert_eq!(format!("{:?}", found), format!("{:?}", Optional::of(20)));
}
