use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::SortError;
use crate::merge::merge_sort;
use crate::order::Order;
use crate::quick_sort::quick_sort;

/// Sort algorithm bound to a [crate::sort_job::SortJob]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortAlgorithm {
    /// Partition-exchange sort with a leftmost pivot, not stable
    #[default]
    Partition,
    /// Top-down merge sort, stable
    Merge,
}

impl SortAlgorithm {
    pub fn sort(&self, lines: Vec<String>, order: Order) -> Vec<String> {
        match self {
            SortAlgorithm::Partition => quick_sort(lines, order),
            SortAlgorithm::Merge => merge_sort(lines, order),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Partition => "partition",
            SortAlgorithm::Merge => "merge",
        }
    }
}

impl Display for SortAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "partition" | "quick" | "quicksort" => Ok(SortAlgorithm::Partition),
            "merge" | "mergesort" => Ok(SortAlgorithm::Merge),
            _ => Err(SortError::invalid_argument(format!(
                "unrecognized sort algorithm '{}', must be one of: partition, merge",
                s
            ))),
        }
    }
}
