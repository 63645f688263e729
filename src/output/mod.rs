mod format;
mod json;
mod table;

pub(crate) use json::output_drinklist_json;
pub(crate) use table::{TableOptions, print_drinklist_table};
