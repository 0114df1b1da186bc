use quickcheck::{quickcheck, TestResult};
use seqkit::prelude::*;
use seqkit::seq::from_vec;
use std::collections::HashMap;

quickcheck! {
    fn prop_map_matches_vec(items: Vec<i32>) -> bool {
        let expected: Vec<i64> = items.iter().map(|x| i64::from(*x) * 3).collect();
        from_vec(items).map(|x| i64::from(x) * 3).collect() == expected
    }

    fn prop_filter_then_count(items: Vec<u8>) -> bool {
        let expected = items.iter().filter(|x| **x % 3 == 0).count();
        from_vec(items).filter(|x| x % 3 == 0).count() == expected
    }

    fn prop_take_skip_split(items: Vec<u16>, n: usize) -> bool {
        let n = n % (items.len() + 1);
        let seq = from_vec(items.clone());
        let mut rejoined = seq.clone().take(n).collect();
        rejoined.extend(seq.skip(n).collect());
        rejoined == items
    }

    fn prop_sort_matches_std(items: Vec<i16>) -> bool {
        let mut expected = items.clone();
        expected.sort();
        from_vec(items).sort().collect() == expected
    }

    fn prop_reverse_twice_is_identity(items: Vec<char>) -> bool {
        from_vec(items.clone()).reverse().reverse().collect() == items
    }

    fn prop_partition_preserves_elements(items: Vec<u32>, size: usize) -> TestResult {
        if size == 0 {
            return TestResult::discard();
        }
        let size = size % 16 + 1;
        let chunks = from_vec(items.clone()).partition(size).map(|c| c.to_vec()).collect();
        let all_full = chunks.iter().rev().skip(1).all(|chunk| chunk.len() == size);
        let flattened: Vec<u32> = chunks.into_iter().flatten().collect();
        TestResult::from_bool(all_full && flattened == items)
    }

    fn prop_group_by_covers_every_element(items: Vec<u8>) -> bool {
        let groups = from_vec(items.clone()).group_by(|x| x % 4).collect();
        let total: usize = groups.iter().map(|(_, group)| group.len()).sum();
        let keys_distinct = seqkit::is::unique(&from_vec(groups.iter().map(|(k, _)| *k).collect()));
        let keyed_correctly = groups
            .iter()
            .all(|(k, group)| group.every(|x| x % 4 == *k));
        total == items.len() && keys_distinct && keyed_correctly
    }

    fn prop_reduce_right_is_reverse_reduce(items: Vec<u8>) -> bool {
        let seq = from_vec(items);
        let right = seq.reduce_right(Vec::new(), |mut acc, x| { acc.push(x); acc });
        let mut left = seq.reduce(Vec::new(), |mut acc, x| { acc.push(x); acc });
        left.reverse();
        left == right
    }

    fn prop_max_matches_std(items: Vec<i32>) -> bool {
        from_vec(items.clone()).max().into_option() == items.iter().copied().max()
    }

    fn prop_uniq_keeps_first_occurrences(items: Vec<u8>) -> bool {
        let mut seen = std::collections::HashSet::new();
        let expected: Vec<u8> = items.iter().copied().filter(|x| seen.insert(*x)).collect();
        from_vec(items).uniq().collect() == expected
    }

    fn prop_to_map_last_write_wins(pairs: Vec<(u8, u16)>) -> bool {
        let expected: HashMap<u8, u16> = pairs.iter().copied().collect();
        from_vec(pairs).to_map() == expected
    }

    fn prop_try_collect_stops_at_first_error(items: Vec<Result<u8, String>>) -> bool {
        let first_err = items.iter().position(|item| item.is_err());
        match (from_vec(items.clone()).try_collect(), first_err) {
            (Ok(values), None) => values.len() == items.len(),
            (Err(partial), Some(position)) => {
                partial.collected.len() == position
                    && Err(partial.error) == items[position]
            }
            _ => false,
        }
    }

    fn prop_try_take_never_exceeds(items: Vec<u8>, n: usize) -> bool {
        let n = n % 8;
        let lifted = seqkit::try_seq::from_vec::<_, String>(items.clone());
        lifted.try_take(n).try_count() == Ok(n.min(items.len()))
    }
}
