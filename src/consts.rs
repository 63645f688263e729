/// Timestamp used in both the report file name and its header: "2025-01-15-21-04"
pub(crate) const STAMP_FORMAT: &str = "%Y-%m-%d-%H-%M";

/// Appended to the stamp to form the report file name
pub(crate) const REPORT_SUFFIX: &str = "-strecklista.txt";

pub(crate) const REPORT_LABEL: &str = "Strecklista genererad: ";

pub(crate) const SEPARATOR_WIDTH: usize = 39;
