//! Saving and loading timetables as flat text files.

use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::record::{RecordError, format_record, parse_record};
use crate::timetable::Timetable;

/// What a load does when it meets a line it cannot decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Reject the whole file and leave the timetable untouched.
    #[default]
    Abort,
    /// Load every good line and report the bad ones.
    Skip,
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Line {line}: {source}")]
    Malformed { line: usize, source: RecordError },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a successful load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    /// 1-based line numbers of lines skipped under [`LoadPolicy::Skip`]
    pub skipped: Vec<(usize, RecordError)>,
    /// Empty lines, ignored under either policy
    pub blank: usize,
}

/// Write every event, one per line, in display order.
/// Returns the number of events written.
///
/// The file is truncated first; a failure part-way leaves it truncated.
pub fn save(timetable: &Timetable, path: &Path) -> Result<usize, PersistError> {
    let mut writer = BufWriter::new(File::create(path)?);

    let mut written = 0;
    for (day, event) in timetable.iter() {
        writeln!(writer, "{}", format_record(day, event))?;
        written += 1;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), events = written, "saved timetable");
    Ok(written)
}

/// Append the events in `path` to `timetable`. Existing events are kept
/// and no overlap or working-hours check is applied.
///
/// Empty lines are ignored and counted in [`LoadReport::blank`].
pub fn load(
    timetable: &mut Timetable,
    path: &Path,
    policy: LoadPolicy,
) -> Result<LoadReport, PersistError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PersistError::NotFound(path.to_path_buf()),
        _ => PersistError::Io(e),
    })?;

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (i, line) in content.lines().enumerate() {
        if line.is_empty() {
            tracing::debug!(line = i + 1, "ignoring empty line");
            report.blank += 1;
            continue;
        }
        match parse_record(line) {
            Ok(record) => records.push(record),
            Err(source) => match policy {
                LoadPolicy::Abort => {
                    return Err(PersistError::Malformed { line: i + 1, source });
                }
                LoadPolicy::Skip => {
                    tracing::warn!(line = i + 1, error = %source, "skipping malformed line");
                    report.skipped.push((i + 1, source));
                }
            },
        }
    }

    report.loaded = records.len();
    for record in records {
        timetable.append(record.day, record.event);
    }

    tracing::info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped.len(),
        blank = report.blank,
        "loaded timetable"
    );
    Ok(report)
}
