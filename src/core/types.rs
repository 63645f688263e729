//! Result types handed from the core to the output layer

use serde::Serialize;
use std::path::PathBuf;

use crate::core::tally::TallyEntry;

/// Outcome of one run: the tally sheet and where it was written
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DrinkList {
    /// Written report, `None` for a dry run
    pub(crate) file: Option<PathBuf>,
    /// Stamp used in the header and file name
    pub(crate) generated: String,
    /// Sum of all counts
    pub(crate) total: u64,
    /// Entries by count descending
    pub(crate) entries: Vec<TallyEntry>,
}
