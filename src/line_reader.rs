use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{SortError, SortResult};

/// Read all lines of `path`.
///
/// Line terminators and a trailing carriage return are stripped. A last line without a newline is
/// kept, an empty file yields no lines. A line that is not valid UTF-8 fails the whole file with an
/// [SortError::Io] of kind [io::ErrorKind::InvalidData].
pub fn read_lines(path: &Path) -> SortResult<Vec<String>> {
    let file = File::open(path).map_err(|e| SortError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut buffer = Vec::new();
    loop {
        let bytes = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| SortError::io(path, e))?;
        if bytes == 0 {
            break;
        }
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
        let line = String::from_utf8(std::mem::take(&mut buffer)).map_err(|e| {
            let message = format!("line {} is not valid UTF-8: {}", lines.len() + 1, e.utf8_error());
            SortError::io(path, io::Error::new(io::ErrorKind::InvalidData, message))
        })?;
        lines.push(line);
    }
    log::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
