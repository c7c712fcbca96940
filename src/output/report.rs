//! Text and JSON rendering of subnet and range reports.

use super::terminal::{format_field, thousands};
use crate::config::OutputFormat;
use crate::input::Report;
use crate::models::{RangeReport, SubnetReport};
use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;

/// Placeholder printed for a missing usable address.
pub const NONE_MARKER: &str = "<none>";

#[derive(Serialize)]
struct CombinedReport<'a> {
    subnet: &'a SubnetReport,
    range: &'a RangeReport,
}

/// Render the single-mask report.
pub fn subnet_report_text(subnet: &SubnetReport) -> String {
    [
        format_field("CIDR", format!("/{}", subnet.cidr)),
        format_field("Netmask", subnet.netmask),
        format_field("Netmask (hex)", &subnet.hex),
        format_field("Wildcard Bits", subnet.wildcard),
        format_field("Usable IPs", thousands(subnet.usable_hosts)),
    ]
    .join("\n")
}

/// Render the full report for an address inside a subnet.
pub fn range_report_text(subnet: &SubnetReport, range: &RangeReport) -> String {
    [
        format_field("Address", range.ip_entered),
        format_field("Network", format!("{} / {}", range.network, subnet.cidr)),
        format_field("Netmask", subnet.netmask),
        format_field("Netmask (hex)", &subnet.hex),
        format_field("Wildcard Bits", subnet.wildcard),
        format_field("Broadcast", range.broadcast),
        format_field("First Usable", or_none(range.first_usable)),
        format_field("Last Usable", or_none(range.last_usable)),
        format_field("Usable IPs", thousands(subnet.usable_hosts)),
    ]
    .join("\n")
}

fn or_none(addr: Option<Ipv4Addr>) -> String {
    addr.map_or_else(|| NONE_MARKER.to_string(), |a| a.to_string())
}

/// Render a single-mask report in the requested format.
pub fn render_subnet(subnet: &SubnetReport, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => Ok(subnet_report_text(subnet)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(subnet)?),
    }
}

/// Render a subnet plus range report in the requested format.
pub fn render_range(
    subnet: &SubnetReport,
    range: &RangeReport,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => Ok(range_report_text(subnet, range)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CombinedReport {
            subnet,
            range,
        })?),
    }
}

/// Render whichever report a request produced.
pub fn render_report(report: &Report, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    match report {
        Report::Subnet(subnet) => render_subnet(subnet, format),
        Report::Range(subnet, range) => render_range(subnet, range, format),
    }
}
