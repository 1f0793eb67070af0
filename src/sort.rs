use std::path::{Path, PathBuf};

use regex::Regex;

use crate::algorithm::SortAlgorithm;
use crate::comparator::Comparator;
use crate::config::Config;
use crate::error::{SortError, SortResult};
use crate::input::list_input_files;
use crate::line_reader::read_lines;
use crate::order::Order;
use crate::output::{write_lines, SortReport};
use crate::parallel::run_parallel;
use crate::single::{run_sequential, Outcome};
use crate::sort_job::SortJob;

/// Sort the lines of all files in a directory, once per [SortJob] and strategy.
///
/// # Examples
/// ```no_run
/// use std::path::PathBuf;
/// use line_order_sort::order::Order;
/// use line_order_sort::sort::Sort;
///
/// fn sort_input(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
///     let mut sort = Sort::new(input, output);
///     // only the multi threaded strategy, ascending
///     sort.with_order(Order::Ascending);
///     sort.with_single_threaded(false);
///     for report in sort.sort()? {
///         println!("{}", report);
///     }
///     Ok(())
/// }
/// ```
pub struct Sort {
    input_dir: PathBuf,
    output_dir: PathBuf,
    jobs: Vec<SortJob>,
    single_threaded: bool,
    multi_threaded: bool,
    resort_each_file: bool,
    final_resort: bool,
    file_filter: Option<Regex>,
}

impl Sort {
    /// Create a default Sort definition.
    ///
    /// * all three built-in jobs: Ascending, Descending and LastLetter, using the partition sort
    /// * both strategies, single threaded first
    /// * the single threaded strategy sorts the accumulated lines again after every file
    /// * the multi threaded strategy sorts the merged result once more
    /// * every regular file in `input_dir` is an input
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Sort {
        Sort {
            input_dir,
            output_dir,
            jobs: SortJob::defaults(),
            single_threaded: true,
            multi_threaded: true,
            resort_each_file: true,
            final_resort: true,
            file_filter: None,
        }
    }

    /// Replace all jobs with the `jobs` value
    pub fn with_jobs(&mut self, jobs: Vec<SortJob>) {
        self.jobs = jobs;
    }

    /// Run a single job for `order`
    pub fn with_order(&mut self, order: Order) {
        self.jobs = vec![SortJob::for_order(order)];
    }

    /// Use `algorithm` for every configured job
    pub fn with_algorithm(&mut self, algorithm: SortAlgorithm) {
        let jobs = std::mem::take(&mut self.jobs);
        self.jobs = jobs.into_iter().map(|job| job.with_algorithm(algorithm)).collect();
    }

    pub fn with_single_threaded(&mut self, single_threaded: bool) {
        self.single_threaded = single_threaded;
    }

    pub fn with_multi_threaded(&mut self, multi_threaded: bool) {
        self.multi_threaded = multi_threaded;
    }

    /// Sort the accumulated lines after every file instead of once after the last one. The
    /// output is the same, only the single threaded timing changes. The default is true
    pub fn with_resort_each_file(&mut self, resort_each_file: bool) {
        self.resort_each_file = resort_each_file;
    }

    /// Sort the merged multi threaded result once more. The default is true
    pub fn with_final_resort(&mut self, final_resort: bool) {
        self.final_resort = final_resort;
    }

    /// Only use input files whose name matches `r`
    pub fn with_file_filter(&mut self, r: Regex) {
        self.file_filter = Some(r);
    }

    /// Run every job with the enabled strategies and write one output file per run.
    ///
    /// Outputs are named `Single{job}` and `Multi{job}`. Unreadable input files are skipped and
    /// listed in the report, failing to write an output is fatal.
    pub fn sort(&self) -> SortResult<Vec<SortReport>> {
        let config = self.create_config()?;
        let files = list_input_files(config.input_dir(), config.file_filter().as_ref())?;
        log::info!("Start sorting {} files from {}", files.len(), config.input_dir().display());

        let mut reports = Vec::new();
        if config.single_threaded() {
            for job in config.jobs() {
                let outcome = run_sequential(&files, job, config.resort_each_file());
                reports.push(Self::write_outcome(outcome, "Single", job, &config)?);
            }
        }
        if config.multi_threaded() {
            for job in config.jobs() {
                let outcome = run_parallel(&files, job, &config)?;
                reports.push(Self::write_outcome(outcome, "Multi", job, &config)?);
            }
        }
        log::info!("Finish sorting, {} outputs in {}", reports.len(), config.output_dir().display());
        Ok(reports)
    }

    /// Check that every input file is ordered by `order`
    pub fn check(&self, order: Order) -> SortResult<bool> {
        let files = list_input_files(&self.input_dir, self.file_filter.as_ref())?;
        for path in &files {
            if !Self::check_file(path, order)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Check that the lines of `path` are ordered by `order`
    pub fn check_file(path: &Path, order: Order) -> SortResult<bool> {
        let lines = read_lines(path)?;
        match Comparator::new(order).first_violation(&lines) {
            None => Ok(true),
            Some(line) => {
                log::info!("{} is not ordered by {}, first violation at line {}", path.display(), order, line + 1);
                Ok(false)
            }
        }
    }

    fn create_config(&self) -> SortResult<Config> {
        if self.jobs.is_empty() {
            return Err(SortError::invalid_argument("at least one sort job is required"));
        }
        if !self.single_threaded && !self.multi_threaded {
            return Err(SortError::invalid_argument(
                "at least one of the single or multi threaded strategies must be enabled",
            ));
        }
        Ok(Config::new(
            self.input_dir.clone(),
            self.output_dir.clone(),
            self.jobs.clone(),
            self.single_threaded,
            self.multi_threaded,
            self.resort_each_file,
            self.final_resort,
            self.file_filter.clone(),
        ))
    }

    fn write_outcome(outcome: Outcome, prefix: &str, job: &SortJob, config: &Config) -> SortResult<SortReport> {
        let name = format!("{}{}", prefix, job.name());
        let (lines, elapsed, skipped) = outcome.into_parts();
        let path = write_lines(&lines, config.output_dir(), &name)?;
        Ok(SortReport::new(name, path, lines.len(), elapsed, skipped))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::error::SortError;
    use crate::sort::Sort;

    #[test]
    fn test_no_strategy_is_invalid() {
        let mut sort = Sort::new(PathBuf::from("InputFiles"), PathBuf::from("MyOutputFiles"));
        sort.with_single_threaded(false);
        sort.with_multi_threaded(false);
        assert!(matches!(sort.sort(), Err(SortError::InvalidArgument { .. })));
    }

    #[test]
    fn test_no_jobs_is_invalid() {
        let mut sort = Sort::new(PathBuf::from("InputFiles"), PathBuf::from("MyOutputFiles"));
        sort.with_jobs(vec![]);
        assert!(matches!(sort.sort(), Err(SortError::InvalidArgument { .. })));
    }
}
