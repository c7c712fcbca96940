//! Mask format detection, validation and normalisation.

use crate::error::{MaskError, Result};
use crate::models::{
    cidr_to_netmask, first_octet, hex_to_netmask, is_contiguous_mask, is_dotted_quad,
    parse_netmask, parse_octets, parse_wildcard, MaskFormat, Netmask, SubnetReport,
};

/// Work out which of the four mask encodings `token` is written in.
///
/// Rules, in order:
/// 1. no `.` at all: hex if it starts with `0x`, otherwise CIDR
/// 2. `0.0.0.0` is a netmask (it is also the /32 wildcard)
/// 3. a dotted quad is a netmask if its bits are a contiguous mask, wildcard
///    bits if its complement is, and otherwise classified by its first octet
///    (above 127 reads as a netmask) so the error names the likely intent
///
/// Anything else with a `.` in it is [`MaskError::FormatUndetected`].
pub fn detect_format(token: &str) -> Result<MaskFormat> {
    if !token.contains('.') {
        return Ok(if token.starts_with("0x") {
            MaskFormat::Hex
        } else {
            MaskFormat::Cidr
        });
    }
    if token == "0.0.0.0" {
        return Ok(MaskFormat::Netmask);
    }
    if !is_dotted_quad(token) {
        return Err(MaskError::FormatUndetected(token.to_string()));
    }

    if let Some(addr) = parse_octets(token) {
        let bits = u32::from(addr);
        if is_contiguous_mask(bits) {
            return Ok(MaskFormat::Netmask);
        }
        if is_contiguous_mask(!bits) {
            return Ok(MaskFormat::Wildcard);
        }
    }

    match first_octet(token) {
        Some(octet) if octet > 127 => Ok(MaskFormat::Netmask),
        Some(_) => Ok(MaskFormat::Wildcard),
        None => Err(MaskError::FormatUndetected(token.to_string())),
    }
}

/// Check `token` is a legal mask in the given format and decode it.
pub fn validate(token: &str, format: MaskFormat) -> Result<Netmask> {
    match format {
        MaskFormat::Cidr => parse_cidr(token),
        MaskFormat::Netmask => parse_netmask(token),
        MaskFormat::Hex => hex_to_netmask(token),
        MaskFormat::Wildcard => parse_wildcard(token),
    }
}

/// Prefix length as plain decimal digits, 0-32.
fn parse_cidr(token: &str) -> Result<Netmask> {
    let invalid = || MaskError::InvalidCidr(token.to_string());
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let len: u8 = token.parse().map_err(|_| invalid())?;
    cidr_to_netmask(len).map_err(|_| invalid())
}

/// Detect, validate and expand a raw mask token into a [`SubnetReport`].
///
/// # Examples
/// ```
/// use subnet_mask_calc::gather_report;
/// let report = gather_report("26").unwrap();
/// assert_eq!(report.netmask.to_string(), "255.255.255.192");
/// assert_eq!(report.hex, "0xffffffc0");
/// assert_eq!(report.usable_hosts, 62);
/// ```
pub fn gather_report(token: &str) -> Result<SubnetReport> {
    let format = detect_format(token)?;
    log::debug!("gather_report({token}) detected format {format:?}");

    let mask = validate(token, format).map_err(|e| {
        log::debug!("gather_report({token}) rejected: {e}");
        e
    })?;
    log::debug!("gather_report({token}) -> /{}", mask.cidr());

    Ok(SubnetReport::from(mask))
}
