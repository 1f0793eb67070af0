use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::comparator::Comparator;
use crate::order::Order;

/// Merge two collections that are already ordered by `comparator`.
///
/// Input order is not validated. When either side is empty the other one is returned as is.
pub fn merge_pair(first: Vec<String>, second: Vec<String>, comparator: &Comparator) -> Vec<String> {
    merge_with(first, second, |a, b| comparator.is_first_ordered(a, b))
}

/// Reduce ordered partial results to one collection.
///
/// The two front collections are merged and the result is queued at the back until a single
/// collection remains. The reduction is unbalanced, later partials merge against the growing
/// cumulative result.
pub fn merge_all(partials: Vec<Vec<String>>, order: Order) -> Vec<String> {
    let comparator = Comparator::new(order);
    let mut queue: VecDeque<Vec<String>> = partials.into();
    while queue.len() > 1 {
        let (Some(first), Some(second)) = (queue.pop_front(), queue.pop_front()) else {
            break;
        };
        log::debug!("Merging partials of {} and {} lines", first.len(), second.len());
        queue.push_back(merge_pair(first, second, &comparator));
    }
    queue.pop_front().unwrap_or_default()
}

/// Stable top-down merge sort under `order`
pub fn merge_sort(mut lines: Vec<String>, order: Order) -> Vec<String> {
    if lines.len() <= 1 {
        return lines;
    }
    let comparator = Comparator::new(order);
    let right = lines.split_off(lines.len() / 2);
    merge_with(
        merge_sort(lines, order),
        merge_sort(right, order),
        |a, b| comparator.compare(b, a) != Ordering::Less,
    )
}

fn merge_with<F>(first: Vec<String>, second: Vec<String>, take_first: F) -> Vec<String>
where
    F: Fn(&str, &str) -> bool,
{
    if first.is_empty() {
        return second;
    }
    if second.is_empty() {
        return first;
    }

    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut first = first.into_iter().peekable();
    let mut second = second.into_iter().peekable();
    loop {
        let from_first = match (first.peek(), second.peek()) {
            (Some(a), Some(b)) => take_first(a.as_str(), b.as_str()),
            _ => break,
        };
        let next = if from_first {
            first.next()
        } else {
            second.next()
        };
        merged.extend(next);
    }
    merged.extend(first);
    merged.extend(second);
    merged
}

#[cfg(test)]
mod tests {
    use crate::comparator::Comparator;
    use crate::merge::{merge_all, merge_pair, merge_sort};
    use crate::order::Order;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_pair() {
        let comparator = Comparator::new(Order::Ascending);
        let merged = merge_pair(lines(&["a", "c", "e"]), lines(&["b", "c", "d", "f"]), &comparator);
        assert_eq!(merged, lines(&["a", "b", "c", "c", "d", "e", "f"]));
    }

    #[test]
    fn test_merge_pair_empty_side() {
        let comparator = Comparator::new(Order::Descending);
        assert_eq!(merge_pair(vec![], lines(&["b", "a"]), &comparator), lines(&["b", "a"]));
        assert_eq!(merge_pair(lines(&["b", "a"]), vec![], &comparator), lines(&["b", "a"]));
        assert!(merge_pair(vec![], vec![], &comparator).is_empty());
    }

    #[test]
    fn test_merge_pair_last_letter() {
        let comparator = Comparator::new(Order::LastLetter);
        let merged = merge_pair(lines(&["a", "at", "cat"]), lines(&["dog", "t", "bat"]), &comparator);
        assert_eq!(merged, lines(&["a", "dog", "t", "at", "bat", "cat"]));
        assert!(comparator.is_sorted(&merged));
    }

    #[test]
    fn test_merge_all() {
        let partials = vec![
            lines(&["b", "e"]),
            vec![],
            lines(&["a", "f"]),
            lines(&["c"]),
            lines(&["d", "d"]),
        ];
        assert_eq!(merge_all(partials, Order::Ascending), lines(&["a", "b", "c", "d", "d", "e", "f"]));
        assert!(merge_all(vec![], Order::Ascending).is_empty());
        assert_eq!(merge_all(vec![lines(&["x"])], Order::Descending), lines(&["x"]));
    }

    #[test]
    fn test_merge_sort() {
        for order in Order::all() {
            let sorted = merge_sort(lines(&["pear", "fig", "", "apple", "fig", "kiwi", "date"]), order);
            assert_eq!(sorted.len(), 7);
            assert!(Comparator::new(order).is_sorted(&sorted));
        }
        assert_eq!(
            merge_sort(lines(&["banana", "apple", "cherry"]), Order::Descending),
            lines(&["cherry", "banana", "apple"])
        );
    }
}
