use std::fmt::Write as _;

use crate::error::ReportError;

pub(super) fn write_line(output: &mut String, line: &str) -> Result<(), ReportError> {
    writeln!(output, "{}", line).map_err(|err| ReportError::WriteLine { source: err })
}

pub(super) fn format_2dp(value: f64) -> String {
    format!("{:.2}", value)
}
