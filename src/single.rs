use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::line_reader::read_lines;
use crate::sort_job::SortJob;

/// Lines produced by one strategy and what it cost
#[derive(Debug)]
pub(crate) struct Outcome {
    lines: Vec<String>,
    elapsed: Duration,
    skipped: Vec<PathBuf>,
}

impl Outcome {
    pub(crate) fn new(lines: Vec<String>, elapsed: Duration, skipped: Vec<PathBuf>) -> Outcome {
        Outcome {
            lines,
            elapsed,
            skipped,
        }
    }

    #[cfg(test)]
    pub(crate) fn lines(&self) -> &Vec<String> {
        &self.lines
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Duration, Vec<PathBuf>) {
        (self.lines, self.elapsed, self.skipped)
    }
}

/// Read `files` in order into one collection and sort it on the calling thread.
///
/// With `resort_each_file` the whole accumulated collection is sorted again after every file,
/// otherwise once after the last file. The final order is the same either way. Unreadable files
/// are skipped with a warning.
pub(crate) fn run_sequential(files: &[PathBuf], job: &SortJob, resort_each_file: bool) -> Outcome {
    log::info!("Start single threaded sort, job: {}, files: {}", job.name(), files.len());
    let start = Instant::now();
    let mut accumulated: Vec<String> = Vec::new();
    let mut skipped = Vec::new();
    for path in files {
        match read_lines(path) {
            Ok(mut lines) => {
                accumulated.append(&mut lines);
                if resort_each_file {
                    accumulated = job.sort(accumulated);
                }
            }
            Err(e) => {
                log::warn!("Skipping input file, job: {}, {}", job.name(), e);
                skipped.push(path.clone());
            }
        }
    }
    if !resort_each_file {
        accumulated = job.sort(accumulated);
    }
    let elapsed = start.elapsed();
    log::info!(
        "Finish single threaded sort, job: {}, lines: {}, elapsed: {:?}",
        job.name(),
        accumulated.len(),
        elapsed
    );
    Outcome::new(accumulated, elapsed, skipped)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::order::Order;
    use crate::single::run_sequential;
    use crate::sort_job::SortJob;

    #[test]
    fn test_accumulate_and_sort() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let first = dir.path().join("1.txt");
        let second = dir.path().join("2.txt");
        let empty = dir.path().join("3.txt");
        fs::write(&first, "banana\napple\n")?;
        fs::write(&second, "cherry\r\napricot")?;
        fs::write(&empty, "")?;
        let files = vec![first, empty, second];

        let job = SortJob::for_order(Order::Ascending);
        let each = run_sequential(&files, &job, true);
        let once = run_sequential(&files, &job, false);
        assert_eq!(each.lines(), &vec!["apple", "apricot", "banana", "cherry"]);
        assert_eq!(each.lines(), once.lines());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_skipped() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let present = dir.path().join("present.txt");
        fs::write(&present, "rat\ncat\nbat\n")?;
        let missing = dir.path().join("missing.txt");

        let job = SortJob::for_order(Order::LastLetter);
        let (lines, _elapsed, skipped) = run_sequential(&[missing.clone(), present], &job, true).into_parts();
        assert_eq!(lines, vec!["bat", "cat", "rat"]);
        assert_eq!(skipped, vec![missing]);
        Ok(())
    }
}
