//! Searches over non-decreasing slices for the first element `>= value`.
//!
//! Two variants live here:
//! - [`converging_search`]: a three-pointer scan kept bit-for-bit compatible
//!   with existing callers, quirks included.
//! - [`first_at_least`]: the textbook lower bound.

use std::fmt;
use std::str::FromStr;

use crate::SamplingError;

/// Which search [`SearchStrategy::find`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// [`first_at_least`]; always finds the minimal index.
    #[default]
    Standard,
    /// [`converging_search`]; may miss, see its docs.
    Converging,
}

impl SearchStrategy {
    /// Run the selected search for `value` over `sorted`.
    pub fn find<T: Ord>(self, value: &T, sorted: &[T]) -> Option<usize> {
        match self {
            Self::Standard => first_at_least(value, sorted),
            Self::Converging => converging_search(value, sorted),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Converging => "converging",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "converging" => Ok(Self::Converging),
            other => Err(SamplingError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Locate an index whose element is `>= value` by converging three pointers.
///
/// `low`, `mid` and `high` start at `0`, `len / 2` and `len - 1` and move
/// toward each other until `mid` collides with one of its neighbours. The
/// index is only recorded when the *updated* `mid` satisfies the predicate,
/// which gives this search its boundary behaviour:
///
/// - slices of length 0, 1 or 2 always return `None`;
/// - the very first probe is never recorded, so `converging_search(&2, &[1, 2, 3])`
///   returns `None`;
/// - in general a `None` does not prove that every element is `< value`.
///
/// A returned `Some(i)` is the minimal index with `sorted[i] >= *value`. Unsorted input
/// gives a deterministic but meaningless answer.
pub fn converging_search<T: Ord>(value: &T, sorted: &[T]) -> Option<usize> {
    if sorted.is_empty() {
        return None;
    }

    let mut found = None;
    let mut low = 0;
    let mut mid = sorted.len() / 2;
    let mut high = sorted.len() - 1;

    while low != mid && mid != high {
        if *value <= sorted[mid] {
            high = mid;
            mid = (low + high) / 2;
        } else {
            low = mid;
            mid = (low + high + 1) / 2;
        }
        if *value <= sorted[mid] {
            found = Some(mid);
        }
    }

    found
}

/// Return the minimal index `i` with `sorted[i] >= *value`, or `None` when every
/// element is smaller.
pub fn first_at_least<T: Ord>(value: &T, sorted: &[T]) -> Option<usize> {
    let index = sorted.partition_point(|x| x < value);
    (index < sorted.len()).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn linear_first_at_least(value: i64, sorted: &[i64]) -> Option<usize> {
        sorted.iter().position(|&x| x >= value)
    }

    fn random_sorted(rng: &mut StdRng, len: usize) -> Vec<i64> {
        let mut values: Vec<i64> = (0..len).map(|_| rng.gen_range(-20..20)).collect();
        values.sort_unstable();
        values
    }

    #[test]
    fn converging_empty_returns_none() {
        assert_eq!(converging_search(&0, &[] as &[i64]), None);
        assert_eq!(converging_search(&i64::MIN, &[] as &[i64]), None);
    }

    #[test]
    fn converging_single_element_never_found() {
        assert_eq!(converging_search(&5, &[5]), None);
        assert_eq!(converging_search(&1, &[5]), None);
        assert_eq!(converging_search(&9, &[5]), None);
    }

    #[test]
    fn converging_two_elements_never_found() {
        for value in -1..=3 {
            assert_eq!(converging_search(&value, &[0, 2]), None, "value={value}");
        }
    }

    #[test]
    fn converging_traced_cases() {
        let cases: Vec<(i64, Vec<i64>, Option<usize>)> = vec![
            (4, vec![1, 3, 3, 5, 7, 9], Some(3)),
            (10, vec![2, 4, 6, 8], None),
            (0, vec![1, 3, 5, 7], Some(0)),
            (1, vec![1, 2, 3], Some(0)),
            (3, vec![1, 2, 3], Some(2)),
            // The first probe hits index 1 but is never recorded.
            (2, vec![1, 2, 3], None),
        ];

        for (value, sorted, want) in cases {
            let got = converging_search(&value, &sorted);
            assert_eq!(got, want, "value={value} sorted={sorted:?}");
        }
    }

    #[test]
    fn converging_hit_is_minimal_and_misses_only_first_probe() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 2..40 {
            for _ in 0..50 {
                let sorted = random_sorted(&mut rng, len);
                let value = rng.gen_range(-25..25);
                let first = linear_first_at_least(value, &sorted);
                match converging_search(&value, &sorted) {
                    Some(i) => {
                        assert!(
                            sorted[i] >= value,
                            "value={value} sorted={sorted:?} index={i}"
                        );
                        assert_eq!(Some(i), first, "value={value} sorted={sorted:?}");
                    }
                    // A miss is either a short slice, nothing to find, or the
                    // answer sitting on the unrecorded first probe.
                    None => assert!(
                        len <= 2 || first.is_none() || first == Some(len / 2),
                        "value={value} sorted={sorted:?} first={first:?}"
                    ),
                }
            }
        }
    }

    #[test]
    fn converging_is_deterministic() {
        let sorted = [1, 1, 2, 3, 5, 8, 13, 21, 34];
        let first = converging_search(&6, &sorted);
        let second = converging_search(&6, &sorted);
        assert_eq!(first, second);
    }

    #[test]
    fn converging_accepts_unsorted_input() {
        let unsorted = [9, 1, 8, 2, 7, 3];
        let a = converging_search(&5, &unsorted);
        let b = converging_search(&5, &unsorted);
        assert_eq!(a, b);
        if let Some(i) = a {
            assert!(unsorted[i] >= 5);
        }
    }

    #[test]
    fn first_at_least_boundaries() {
        assert_eq!(first_at_least(&3, &[] as &[i32]), None);
        assert_eq!(first_at_least(&5, &[5]), Some(0));
        assert_eq!(first_at_least(&6, &[5]), None);
        assert_eq!(first_at_least(&2, &[1, 2, 3]), Some(1));
        assert_eq!(first_at_least(&4, &[1, 3, 3, 5, 7, 9]), Some(3));
        assert_eq!(first_at_least(&3, &[1, 3, 3, 5, 7, 9]), Some(1));
        assert_eq!(first_at_least(&10, &[2, 4, 6, 8]), None);
    }

    #[test]
    fn first_at_least_matches_linear_scan() {
        let mut rng = StdRng::seed_from_u64(11);
        for len in 0..30 {
            for _ in 0..30 {
                let sorted = random_sorted(&mut rng, len);
                let value = rng.gen_range(-25..25);
                assert_eq!(
                    first_at_least(&value, &sorted),
                    linear_first_at_least(value, &sorted),
                    "value={value} sorted={sorted:?}"
                );
            }
        }
    }

    #[test]
    fn strategy_dispatch() {
        let sorted = [1, 2, 3];
        assert_eq!(SearchStrategy::Standard.find(&2, &sorted), Some(1));
        assert_eq!(SearchStrategy::Converging.find(&2, &sorted), None);
    }

    #[test]
    fn strategy_parse() {
        assert_eq!("standard".parse::<SearchStrategy>(), Ok(SearchStrategy::Standard));
        assert_eq!(" Converging ".parse::<SearchStrategy>(), Ok(SearchStrategy::Converging));
        assert_eq!(
            "bisect".parse::<SearchStrategy>(),
            Err(SamplingError::UnknownStrategy("bisect".to_string()))
        );
        assert_eq!(SearchStrategy::default(), SearchStrategy::Standard);
        assert_eq!(SearchStrategy::Converging.to_string(), "converging");
    }
}
