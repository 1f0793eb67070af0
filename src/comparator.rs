use std::cmp::Ordering;

use crate::order::Order;

/// Line comparator for one [Order].
///
/// A comparator is a plain value, copy it into every worker that needs one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparator {
    order: Order,
}

impl Comparator {
    pub fn new(order: Order) -> Comparator {
        Comparator { order }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Total order of two lines under this comparator's rule.
    ///
    /// * Ascending compares bytes, a strict prefix is [Ordering::Less]
    /// * Descending is the reverse of Ascending
    /// * LastLetter compares characters from the end, a strict suffix is [Ordering::Less]
    pub fn compare(&self, first: &str, second: &str) -> Ordering {
        match self.order {
            Order::Ascending => first.as_bytes().cmp(second.as_bytes()),
            Order::Descending => second.as_bytes().cmp(first.as_bytes()),
            Order::LastLetter => first.chars().rev().cmp(second.chars().rev()),
        }
    }

    /// Should `first` be placed before `second`.
    ///
    /// Ascending and LastLetter answer strictly, equal lines return false. Descending keeps equal
    /// lines in place and returns true for them, so a line that extends `second` also returns
    /// true.
    pub fn is_first_ordered(&self, first: &str, second: &str) -> bool {
        match self.order {
            Order::Ascending | Order::LastLetter => self.compare(first, second) == Ordering::Less,
            Order::Descending => self.compare(first, second) != Ordering::Greater,
        }
    }

    /// Index of the first line that is out of order relative to its predecessor
    pub fn first_violation(&self, lines: &[String]) -> Option<usize> {
        lines
            .windows(2)
            .position(|pair| self.compare(&pair[0], &pair[1]) == Ordering::Greater)
            .map(|i| i + 1)
    }

    pub fn is_sorted(&self, lines: &[String]) -> bool {
        self.first_violation(lines).is_none()
    }
}
