//! Tally sheet rendering and file creation

use chrono::{DateTime, FixedOffset};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::consts::{REPORT_LABEL, REPORT_SUFFIX, SEPARATOR_WIDTH, STAMP_FORMAT};
use crate::core::tally::TallyEntry;
use crate::error::AppError;
use crate::utils::debug_log;

pub(crate) fn report_stamp(now: DateTime<FixedOffset>) -> String {
    now.format(STAMP_FORMAT).to_string()
}

pub(crate) fn report_file_name(stamp: &str) -> String {
    format!("{stamp}{REPORT_SUFFIX}")
}

/// Write header, separator and one `name: count` line per entry
pub(crate) fn write_report_body<W: Write>(
    writer: &mut W,
    stamp: &str,
    entries: &[TallyEntry],
) -> io::Result<()> {
    writeln!(writer, "{REPORT_LABEL}{stamp}")?;
    writeln!(writer, "{}", "~".repeat(SEPARATOR_WIDTH))?;
    for entry in entries {
        writeln!(writer, "{}: {}", entry.name, entry.count)?;
    }
    Ok(())
}

fn create_new(path: &Path) -> Result<File, AppError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                AppError::OutputAlreadyExists {
                    path: path.to_path_buf(),
                }
            } else {
                AppError::OutputCreateFailed {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
}

/// Write the body through a buffer and hand the flushed sink back
fn write_into<W: Write>(sink: W, stamp: &str, entries: &[TallyEntry]) -> io::Result<W> {
    let mut writer = BufWriter::new(sink);
    write_report_body(&mut writer, stamp, entries)?;
    // BufWriter swallows errors on drop, so flush explicitly
    writer.into_inner().map_err(|e| e.into_error())
}

/// Remove the half-written report at `path` and report why writing failed
fn discard_partial(path: &Path, source: io::Error) -> AppError {
    if let Err(e) = fs::remove_file(path) {
        debug_log!("Failed to remove partial {}: {}", path.display(), e);
    }
    AppError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Fill the freshly created report at `path` through `sink`
fn fill_report<W: Write>(
    path: &Path,
    sink: W,
    stamp: &str,
    entries: &[TallyEntry],
) -> Result<W, AppError> {
    write_into(sink, stamp, entries).map_err(|source| discard_partial(path, source))
}

/// Create `<stamp>-strecklista.txt` in `dir` and fill it with `entries`.
///
/// Never overwrites: a report from the same minute already on disk is an
/// `OutputAlreadyExists` error. A failed write removes the partial file.
pub(crate) fn write_report(
    dir: &Path,
    now: DateTime<FixedOffset>,
    entries: &[TallyEntry],
) -> Result<PathBuf, AppError> {
    let stamp = report_stamp(now);
    let path = dir.join(report_file_name(&stamp));

    let file = create_new(&path)?;
    debug_log!("Created {}", path.display());

    let file = fill_report(&path, file, &stamp, entries)?;
    file.sync_all()
        .map_err(|source| discard_partial(&path, source))?;

    debug_log!("Wrote {} entries to {}", entries.len(), path.display());

    Ok(path)
}
