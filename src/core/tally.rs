//! Frequency table of item names read line by line

use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::AppError;

/// One row of a sorted tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TallyEntry {
    pub(crate) name: String,
    pub(crate) count: u64,
}

/// Name -> occurrence count, built fresh for every run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Tally {
    counts: HashMap<String, u64>,
    lines_read: u64,
    skip_blank: bool,
}

impl Tally {
    pub(crate) fn new(skip_blank: bool) -> Self {
        Tally {
            skip_blank,
            ..Tally::default()
        }
    }

    /// Count a single line; the key is the line with surrounding whitespace removed
    pub(crate) fn add_line(&mut self, line: &str) {
        self.lines_read += 1;
        let name = line.trim();
        if self.skip_blank && name.is_empty() {
            return;
        }
        match self.counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.to_string(), 1);
            }
        }
    }

    /// Consume every line of `reader`. A line ends at `\n`, `\r\n` or a lone `\r`.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// list saved in a legacy encoding still counts, only with mangled names.
    pub(crate) fn add_reader<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for chunk in reader.split(b'\n') {
            let chunk = chunk?;
            // `\r\n` is one break, not a lone `\r` followed by an empty line
            let body = chunk.strip_suffix(&b"\r"[..]).unwrap_or(chunk.as_slice());
            for line in body.split(|&b| b == b'\r') {
                self.add_line(&String::from_utf8_lossy(line));
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_reader<R: BufRead>(reader: R, skip_blank: bool) -> io::Result<Self> {
        let mut tally = Tally::new(skip_blank);
        tally.add_reader(reader)?;
        Ok(tally)
    }

    /// Tally the file at `path`. The file is closed before this returns.
    pub(crate) fn add_path(&mut self, path: &Path) -> Result<(), AppError> {
        let unavailable = |source| AppError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        self.add_reader(BufReader::new(file)).map_err(unavailable)
    }

    pub(crate) fn from_path(path: &Path, skip_blank: bool) -> Result<Self, AppError> {
        let mut tally = Tally::new(skip_blank);
        tally.add_path(path)?;
        Ok(tally)
    }

    pub(crate) fn merge(&mut self, other: Tally) {
        self.lines_read += other.lines_read;
        for (name, count) in other.counts {
            *self.counts.entry(name).or_default() += count;
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub(crate) fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub(crate) fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Entries by count descending, ties by name ascending
    pub(crate) fn sorted(&self) -> Vec<TallyEntry> {
        let mut entries: Vec<TallyEntry> = self
            .counts
            .iter()
            .map(|(name, &count)| TallyEntry {
                name: name.clone(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        entries
    }
}
