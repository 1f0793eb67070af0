use crate::algorithm::SortAlgorithm;
use crate::order::Order;

/// A named pairing of an [Order] and the [SortAlgorithm] that applies it.
///
/// The name becomes the suffix of the output files, for example `SingleAscending.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortJob {
    name: String,
    order: Order,
    algorithm: SortAlgorithm,
}

impl SortJob {
    pub fn new(name: &str, order: Order, algorithm: SortAlgorithm) -> SortJob {
        SortJob {
            name: name.to_string(),
            order,
            algorithm,
        }
    }

    /// A job named after `order` that uses the partition sort
    pub fn for_order(order: Order) -> SortJob {
        SortJob::new(order.name(), order, SortAlgorithm::Partition)
    }

    /// The three built-in jobs: Ascending, Descending and LastLetter
    pub fn defaults() -> Vec<SortJob> {
        Order::all().into_iter().map(SortJob::for_order).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    pub fn with_algorithm(mut self, algorithm: SortAlgorithm) -> SortJob {
        self.algorithm = algorithm;
        self
    }

    pub fn sort(&self, lines: Vec<String>) -> Vec<String> {
        self.algorithm.sort(lines, self.order)
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithm::SortAlgorithm;
    use crate::order::Order;
    use crate::sort_job::SortJob;

    #[test]
    fn test_defaults() {
        let jobs = SortJob::defaults();
        let names: Vec<&str> = jobs.iter().map(|job| job.name()).collect();
        assert_eq!(names, vec!["Ascending", "Descending", "LastLetter"]);
        assert!(jobs.iter().all(|job| job.algorithm() == SortAlgorithm::Partition));
        assert_eq!(jobs[2].order(), Order::LastLetter);
    }
}
