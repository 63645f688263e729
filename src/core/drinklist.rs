//! Caller-facing entry points: input file(s) in, tally sheet out

use chrono::{DateTime, FixedOffset};
use std::path::{Path, PathBuf};

use crate::core::report::{report_stamp, write_report};
use crate::core::tally::Tally;
use crate::core::types::DrinkList;
use crate::error::AppError;
use crate::utils::{Timezone, debug_log};

#[derive(Debug, Clone)]
pub(crate) struct ReportOptions {
    pub(crate) output_dir: PathBuf,
    pub(crate) timezone: Timezone,
    pub(crate) skip_blank: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            output_dir: PathBuf::from("."),
            timezone: Timezone::Local,
            skip_blank: false,
        }
    }
}

/// Tally every input into a single fresh table
pub(crate) fn count_drinks(inputs: &[PathBuf], options: &ReportOptions) -> Result<Tally, AppError> {
    let mut tally = Tally::new(options.skip_blank);
    for path in inputs {
        let part = Tally::from_path(path, options.skip_blank)?;
        debug_log!(
            "{}: {} lines, {} names",
            path.display(),
            part.lines_read(),
            part.len()
        );
        tally.merge(part);
    }
    if tally.is_empty() {
        debug_log!("No names found in {} input(s)", inputs.len());
    }
    Ok(tally)
}

/// Count `input` and write a new tally sheet; `file` of the result names it
pub(crate) fn create_drinklist(input: &Path, options: &ReportOptions) -> Result<DrinkList, AppError> {
    create_drinklist_from(&[input.to_path_buf()], options)
}

/// Count all `inputs` into one table and write a single tally sheet
pub(crate) fn create_drinklist_from(
    inputs: &[PathBuf],
    options: &ReportOptions,
) -> Result<DrinkList, AppError> {
    create_drinklist_at(inputs, options, options.timezone.now())
}

fn create_drinklist_at(
    inputs: &[PathBuf],
    options: &ReportOptions,
    now: DateTime<FixedOffset>,
) -> Result<DrinkList, AppError> {
    let tally = count_drinks(inputs, options)?;
    let entries = tally.sorted();
    let file = write_report(&options.output_dir, now, &entries)?;
    Ok(DrinkList {
        file: Some(file),
        generated: report_stamp(now),
        total: tally.total(),
        entries,
    })
}

/// Dry-run result: what the tally sheet would contain
pub(crate) fn preview_drinklist(
    inputs: &[PathBuf],
    options: &ReportOptions,
) -> Result<DrinkList, AppError> {
    let tally = count_drinks(inputs, options)?;
    Ok(DrinkList {
        file: None,
        generated: report_stamp(options.timezone.now()),
        total: tally.total(),
        entries: tally.sorted(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;

    fn options_in(dir: &Path) -> ReportOptions {
        ReportOptions {
            output_dir: dir.to_path_buf(),
            timezone: Timezone::Named(chrono_tz::UTC),
            skip_blank: false,
        }
    }

    fn fixed_now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 5, 30, 22, 45, 10)
            .unwrap()
    }

    fn body_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .skip(2)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn scenario_counts_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("drinks.txt");
        fs::write(&input, "cola\nbeer\ncola\nwater\nbeer\ncola\n").unwrap();

        let list = create_drinklist(&input, &options_in(dir.path())).unwrap();
        let file = list.file.unwrap();
        assert!(file.to_string_lossy().ends_with("-strecklista.txt"));
        assert_eq!(body_lines(&file), vec!["cola: 3", "beer: 2", "water: 1"]);
        assert_eq!(list.total, 6);
    }

    #[test]
    fn empty_input_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        fs::write(&input, "").unwrap();

        let list = create_drinklist_at(&[input], &options_in(dir.path()), fixed_now()).unwrap();
        assert!(list.entries.is_empty());
        let content = fs::read_to_string(list.file.unwrap()).unwrap();
        assert_eq!(
            content,
            "Strecklista genererad: 2026-05-30-22-45\n~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n"
        );
    }

    #[test]
    fn missing_input_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let err = create_drinklist(&dir.path().join("missing.txt"), &options_in(&out)).unwrap_err();
        assert!(matches!(err, AppError::SourceUnavailable { .. }));
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn second_run_in_same_minute_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("drinks.txt");
        fs::write(&input, "cola\n").unwrap();
        let options = options_in(dir.path());

        create_drinklist_at(&[input.clone()], &options, fixed_now()).unwrap();
        let err = create_drinklist_at(&[input], &options, fixed_now()).unwrap_err();
        assert!(matches!(err, AppError::OutputAlreadyExists { .. }));
    }

    #[test]
    fn each_run_starts_from_zero() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("drinks.txt");
        fs::write(&input, "cola\ncola\n").unwrap();
        let options = options_in(dir.path());

        let first = count_drinks(&[input.clone()], &options).unwrap();
        let second = count_drinks(&[input], &options).unwrap();
        assert_eq!(first.get("cola"), Some(2));
        assert_eq!(second.get("cola"), Some(2));
    }

    #[test]
    fn accumulates_multiple_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let friday = dir.path().join("friday.txt");
        let saturday = dir.path().join("saturday.txt");
        fs::write(&friday, "cola\nbeer\n").unwrap();
        fs::write(&saturday, "beer\nbeer\ncider\n").unwrap();

        let list = create_drinklist_at(
            &[friday, saturday],
            &options_in(dir.path()),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(list.total, 5);
        assert_eq!(
            body_lines(list.file.as_deref().unwrap()),
            vec!["beer: 3", "cider: 1", "cola: 1"]
        );
    }

    #[test]
    fn one_bad_input_aborts_accumulation() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "cola\n").unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let err = create_drinklist_at(
            &[good, dir.path().join("bad.txt")],
            &options_in(&out),
            fixed_now(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::SourceUnavailable { .. }));
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn skip_blank_option_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("drinks.txt");
        fs::write(&input, "cola\n\ncola\n").unwrap();
        let options = ReportOptions {
            skip_blank: true,
            ..options_in(dir.path())
        };

        let tally = count_drinks(&[input], &options).unwrap();
        assert_eq!(tally.get(""), None);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn preview_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("drinks.txt");
        fs::write(&input, "cola\nbeer\ncola\n").unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let list = preview_drinklist(&[input], &options_in(&out)).unwrap();
        assert!(list.file.is_none());
        assert_eq!(list.total, 3);
        assert_eq!(list.entries[0].name, "cola");
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }
}
