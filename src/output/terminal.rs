//! Terminal output utilities.
//!
//! Provides formatting helpers for the fixed-layout text reports.

use colored::Colorize;
use itertools::Itertools;

/// Width the report labels are padded to.
pub const LABEL_WIDTH: usize = 13;

/// Format a report line as `label = value` with the label left-aligned.
///
/// # Arguments
/// * `label` - The field label
/// * `value` - The value to print after the `=`
///
/// # Returns
/// A padded line with a bold label
pub fn format_field<T: ToString>(label: &str, value: T) -> String {
    let padded = format!("{label:<width$}", width = LABEL_WIDTH);
    format!("{} = {}", padded.bold(), value.to_string())
}

/// Group the digits of `n` in threes separated by commas.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(String::from_utf8_lossy)
        .join(",")
}
