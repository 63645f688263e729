//! Core module - counting and tally sheet generation

mod drinklist;
mod report;
mod tally;
mod types;

pub(crate) use drinklist::{ReportOptions, create_drinklist, create_drinklist_from, preview_drinklist};
#[cfg(test)]
pub(crate) use tally::TallyEntry;
pub(crate) use types::DrinkList;
