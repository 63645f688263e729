//! Resolve input arguments into concrete file paths
//!
//! Arguments containing glob metacharacters are expanded; anything else is
//! passed through so a missing file surfaces as an unreadable source later.

use std::path::PathBuf;

use crate::error::AppError;
use crate::utils::debug_log;

fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

pub(crate) fn expand_inputs(args: &[String]) -> Result<Vec<PathBuf>, AppError> {
    let mut paths = Vec::new();

    for arg in args {
        if !is_pattern(arg) {
            paths.push(PathBuf::from(arg));
            continue;
        }

        let entries = glob::glob(arg).map_err(|e| AppError::InvalidPattern {
            pattern: arg.clone(),
            message: e.msg.to_string(),
        })?;

        let mut matched: Vec<PathBuf> = entries.filter_map(Result::ok).collect();
        if matched.is_empty() {
            return Err(AppError::NoInputs {
                pattern: arg.clone(),
            });
        }
        matched.sort();
        debug_log!("{} matched {} file(s)", arg, matched.len());
        paths.extend(matched);
    }

    Ok(paths)
}
