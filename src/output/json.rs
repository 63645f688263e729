use crate::core::DrinkList;
use crate::error::AppError;

/// Pretty JSON for `--json`: file (null on dry run), generated, total, entries
pub(crate) fn output_drinklist_json(list: &DrinkList) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(list)?)
}
