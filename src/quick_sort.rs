use crate::comparator::Comparator;
use crate::order::Order;

/// Sort lines with a partition-exchange sort under `order`.
///
/// The collection is consumed and returned reordered. The sort is not stable and picks the
/// leftmost element as the pivot, so already ordered input costs O(n²) comparisons.
pub fn quick_sort(mut lines: Vec<String>, order: Order) -> Vec<String> {
    if lines.len() > 1 {
        partition_sort(&mut lines, &Comparator::new(order));
    }
    lines
}

/// In-place partition-exchange sort of `v`
pub(crate) fn partition_sort(mut v: &mut [String], comparator: &Comparator) {
    // recurse into the smaller side and loop over the larger one to bound stack depth
    while v.len() > 1 {
        let pivot = partition(v, comparator);
        let (left, right) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            partition_sort(left, comparator);
            v = right;
        } else {
            partition_sort(right, comparator);
            v = left;
        }
    }
}

/// Partition `v` around its first element and return the pivot's final index.
///
/// The pivot travels between the two closing indices: elements it should precede collect on the
/// right, everything else on the left.
fn partition(v: &mut [String], comparator: &Comparator) -> usize {
    let mut i = 0;
    let mut j = v.len() - 1;
    while i < j {
        // pivot at i
        while i < j && comparator.is_first_ordered(&v[i], &v[j]) {
            j -= 1;
        }
        v.swap(i, j);
        // pivot at j
        while i < j && !comparator.is_first_ordered(&v[j], &v[i]) {
            i += 1;
        }
        v.swap(i, j);
    }
    i
}

#[cfg(test)]
mod tests {
    use crate::comparator::Comparator;
    use crate::order::Order;
    use crate::quick_sort::quick_sort;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ascending() {
        let sorted = quick_sort(lines(&["banana", "apple", "cherry"]), Order::Ascending);
        assert_eq!(sorted, lines(&["apple", "banana", "cherry"]));
    }

    #[test]
    fn test_descending() {
        let sorted = quick_sort(lines(&["banana", "apple", "cherry"]), Order::Descending);
        assert_eq!(sorted, lines(&["cherry", "banana", "apple"]));
    }

    #[test]
    fn test_last_letter() {
        let sorted = quick_sort(lines(&["cat", "bat", "rat"]), Order::LastLetter);
        assert_eq!(sorted, lines(&["bat", "cat", "rat"]));

        let sorted = quick_sort(lines(&["cat", "at", "t", "dog", "", "a"]), Order::LastLetter);
        assert_eq!(sorted, lines(&["", "a", "dog", "t", "at", "cat"]));
    }

    #[test]
    fn test_empty_and_single() {
        for order in Order::all() {
            assert!(quick_sort(vec![], order).is_empty());
            assert_eq!(quick_sort(lines(&["only"]), order), lines(&["only"]));
            assert_eq!(quick_sort(lines(&[""]), order), lines(&[""]));
        }
    }

    #[test]
    fn test_duplicates_and_prefixes() {
        let input = lines(&["b", "a", "ab", "b", "", "a", "abc", ""]);
        let sorted = quick_sort(input.clone(), Order::Ascending);
        assert_eq!(sorted, lines(&["", "", "a", "a", "ab", "abc", "b", "b"]));
        let sorted = quick_sort(input, Order::Descending);
        assert_eq!(sorted, lines(&["b", "b", "abc", "ab", "a", "a", "", ""]));
    }

    #[test]
    fn test_sorted_input_is_idempotent() {
        for order in Order::all() {
            let input: Vec<String> = (0..2_000).map(|i| format!("line-{:05}", i * 7 % 2_000)).collect();
            let once = quick_sort(input, order);
            assert!(Comparator::new(order).is_sorted(&once));
            let twice = quick_sort(once.clone(), order);
            assert_eq!(once, twice);
        }
    }
}
