//! Aggregate statistics over a [`TripTable`](crate::records::TripTable).
//!
//! Each submodule computes one report's worth of numbers; printing lives in
//! [`crate::output`].

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

use std::collections::BTreeMap;

/// Counts occurrences of each value, keyed in ascending order.
pub fn counts<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value. Ties go to the smallest value. Returns `None` for
/// empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, n) in counts(values) {
        if best.as_ref().is_none_or(|(_, max)| n > *max) {
            best = Some((value, n));
        }
    }
    best.map(|(value, _)| value)
}

/// Occurrence counts ordered from most to least frequent; equal counts stay
/// in ascending value order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut sorted: Vec<_> = counts(values).into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
pub(crate) fn test_time(ts: &str) -> chrono::NaiveDateTime {
    chrono::NaiveDateTime::parse_from_str(ts, crate::records::START_TIME_FORMAT).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode([3, 1, 3, 2, 3, 1]), Some(3));
        assert_eq!(mode(["b", "a", "b"]), Some("b"));
    }

    #[test]
    fn test_mode_tie_goes_to_smallest() {
        assert_eq!(mode([7, 2, 7, 2, 9]), Some(2));
        assert_eq!(mode(["Tuesday", "Monday", "Tuesday", "Monday"]), Some("Monday"));
        // names compare lexicographically, not by weekday order
        assert_eq!(mode(["Monday", "Friday"]), Some("Friday"));
    }

    #[test]
    fn test_mode_is_stable_across_input_order() {
        let a = mode(["x", "y", "z", "y", "x"]);
        let b = mode(["y", "x", "x", "z", "y"]);
        assert_eq!(a, Some("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(["Customer", "Subscriber", "Dependent", "Subscriber", "Customer", "Subscriber"]);
        assert_eq!(
            counts,
            vec![("Subscriber", 3), ("Customer", 2), ("Dependent", 1)]
        );
    }

    #[test]
    fn test_value_counts_ties_ascending() {
        let counts = value_counts(["Male", "Female"]);
        assert_eq!(counts, vec![("Female", 1), ("Male", 1)]);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }
}
