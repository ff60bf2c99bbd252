//! In-place comparator-driven quicksort.
//!
//! The algorithm is a deliberate re-creation of the legacy container's
//! sort: recursive quicksort with the *first element* of each sub-range as
//! the pivot and a prefix-of-strictly-less partition. It is not stable, and
//! the fixed pivot choice degrades to O(n^2) on adversarial input such as
//! descending-sorted sequences. That behavior is kept for parity with the
//! legacy surface rather than silently swapped for a more robust pivot
//! strategy.

use std::cmp::Ordering;

/// Sorts `items` in place so the sequence is non-decreasing under
/// `compare`.
///
/// `compare` is any callable producing a three-way [`Ordering`] for a pair
/// of elements; closures, function pointers and boxed trait objects all
/// qualify. The comparator must describe a total order; otherwise the
/// resulting arrangement is unspecified (but never unsafe).
///
/// Average O(n log n), worst case O(n^2); see the module docs.
pub fn quicksort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(items, &mut compare);
}

fn sort_recursive<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    let pivot = partition(items, compare);
    let (left, right) = items.split_at_mut(pivot);
    sort_recursive(left, compare);
    sort_recursive(&mut right[1..], compare);
}

/// Partitions around `items[0]`: elements strictly less than the pivot are
/// swapped into a contiguous prefix, then the pivot is swapped into its
/// final slot. Returns the pivot's final index.
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut boundary = 0;
    for i in 1..items.len() {
        if compare(&items[i], &items[0]) == Ordering::Less {
            boundary += 1;
            items.swap(i, boundary);
        }
    }
    items.swap(0, boundary);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_basic() {
        let mut values = [5, 3, 8];
        quicksort_by(&mut values, i32::cmp);
        assert_eq!(values, [3, 5, 8]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: [i32; 0] = [];
        quicksort_by(&mut empty, i32::cmp);

        let mut one = [42];
        quicksort_by(&mut one, i32::cmp);
        assert_eq!(one, [42]);
    }

    #[test]
    fn test_sort_already_sorted_and_reversed() {
        let mut ascending: Vec<i32> = (0..100).collect();
        quicksort_by(&mut ascending, i32::cmp);
        assert_eq!(ascending, (0..100).collect::<Vec<_>>());

        let mut descending: Vec<i32> = (0..100).rev().collect();
        quicksort_by(&mut descending, i32::cmp);
        assert_eq!(descending, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_duplicates_keep_multiplicity() {
        let mut values = vec![3, 1, 3, 2, 3, 1, 2, 2, 2];
        let mut expected = values.clone();
        expected.sort();
        quicksort_by(&mut values, i32::cmp);
        assert_eq!(values, expected);
    }

    #[test]
    fn test_sort_descending_comparator() {
        let mut values = vec![4, 1, 7, 2];
        quicksort_by(&mut values, |a, b| b.cmp(a));
        assert_eq!(values, vec![7, 4, 2, 1]);
    }

    #[test]
    fn test_sort_random_permutations() {
        fastrand::seed(0x5eed);
        for _ in 0..50 {
            let len = fastrand::usize(0..200);
            let mut values: Vec<u32> = (0..len).map(|_| fastrand::u32(0..1000)).collect();
            let mut expected = values.clone();
            expected.sort();
            quicksort_by(&mut values, u32::cmp);
            assert_eq!(values, expected);
        }
    }

    #[test]
    fn test_sort_non_copy_elements() {
        let mut values = vec!["pear".to_string(), "apple".to_string(), "fig".to_string()];
        quicksort_by(&mut values, |a, b| a.cmp(b));
        assert_eq!(values, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_sort_by_key_through_comparator() {
        #[derive(Debug, PartialEq)]
        struct Item {
            key: i32,
            tag: char,
        }
        let mut items = vec![
            Item { key: 2, tag: 'b' },
            Item { key: 1, tag: 'a' },
            Item { key: 3, tag: 'c' },
        ];
        quicksort_by(&mut items, |x, y| x.key.cmp(&y.key));
        let tags: String = items.iter().map(|i| i.tag).collect();
        assert_eq!(tags, "abc");
    }
}
