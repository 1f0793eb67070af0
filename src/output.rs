use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::Builder;

use crate::error::{SortError, SortResult};

/// Outcome of one strategy run for one job
#[derive(Clone, Debug)]
pub struct SortReport {
    name: String,
    path: PathBuf,
    lines: usize,
    elapsed: Duration,
    skipped: Vec<PathBuf>,
}

impl SortReport {
    pub(crate) fn new(name: String, path: PathBuf, lines: usize, elapsed: Duration, skipped: Vec<PathBuf>) -> SortReport {
        SortReport {
            name,
            path,
            lines,
            elapsed,
            skipped,
        }
    }

    /// Output name, for example `MultiLastLetter`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the written output file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Measured time, see [crate::sort::Sort] for what each strategy includes
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Input files that could not be read and did not contribute lines
    pub fn skipped(&self) -> &Vec<PathBuf> {
        &self.skipped
    }
}

impl Display for SortReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t- Time Taken: {} ms ({} lines)",
            self.name,
            self.elapsed.as_millis(),
            self.lines
        )?;
        if !self.skipped.is_empty() {
            write!(f, ", skipped {} files", self.skipped.len())?;
        }
        Ok(())
    }
}

/// Write `lines` to `{output_dir}/{name}.txt`, one newline terminated line per entry.
///
/// The output directory is created when missing. Lines are written to a temporary file in the
/// same directory first and renamed into place when complete.
pub fn write_lines(lines: &[String], output_dir: &Path, name: &str) -> SortResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| SortError::io(output_dir, e))?;
    let path = output_dir.join(format!("{}.txt", name));

    let tmp_file = Builder::new()
        .prefix(&format!("{}-", name))
        .suffix(".partial")
        .tempfile_in(output_dir)
        .map_err(|e| SortError::io(output_dir, e))?;
    {
        let mut writer = BufWriter::new(tmp_file.as_file());
        for line in lines {
            writeln!(writer, "{}", line).map_err(|e| SortError::io(tmp_file.path(), e))?;
        }
        writer.flush().map_err(|e| SortError::io(tmp_file.path(), e))?;
    }
    tmp_file
        .persist(&path)
        .map_err(|e| SortError::io(&path, e.error))?;
    log::debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(path)
}
