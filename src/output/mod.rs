//! Output formatting for mask and range reports.
//!
//! - [`report`] - the text and JSON report layouts
//! - [`terminal`] - label padding and number formatting

mod report;
mod terminal;

pub use report::{
    range_report_text, render_range, render_report, render_subnet, subnet_report_text, NONE_MARKER,
};
pub use terminal::{format_field, thousands, LABEL_WIDTH};
