//! IPv4 dotted-decimal parsing and prefix-length bit utilities.
//!
//! The helpers here work on raw prefix lengths and [`Ipv4Addr`] values; the
//! validated mask type built on top of them lives in [`super::netmask`].

use crate::error::{MaskError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::num::IntErrorKind;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid Regex?");
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_mask_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(MaskError::InvalidCidr(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) | !mask))
}

/// Number of usable host addresses for a prefix length.
///
/// The network and broadcast addresses are reserved, so a /31 has none, and
/// a /32 is a single-host route with none either.
pub fn num_usable_hosts(len: u8) -> Result<u64> {
    if len > MAX_LENGTH {
        Err(MaskError::InvalidCidr(len.to_string()))
    } else if len == MAX_LENGTH {
        Ok(0)
    } else {
        Ok((1u64 << (MAX_LENGTH - len)) - 2)
    }
}

/// True if `input` is four dot-separated runs of ASCII decimal digits.
///
/// Octet range is not checked; `300.1.2.3` is still a dotted quad.
pub fn is_dotted_quad(input: &str) -> bool {
    DOTTED_QUAD.is_match(input)
}

/// Parse a dotted quad whose octets are all in 0-255.
///
/// Unlike [`Ipv4Addr::from_str`](std::str::FromStr) this accepts leading
/// zeros (`010.0.0.1`), matching what users type into mask calculators.
pub fn parse_octets(input: &str) -> Option<Ipv4Addr> {
    let caps = DOTTED_QUAD.captures(input)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps[i + 1].parse().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

/// Leading octet of a dotted quad as an integer, without the 0-255 check.
pub fn first_octet(input: &str) -> Option<u64> {
    let caps = DOTTED_QUAD.captures(input)?;
    match caps[1].parse::<u64>() {
        Ok(octet) => Some(octet),
        // absurdly long digit runs are still above any octet value
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

/// Parse an IPv4 address entered alongside a mask.
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr> {
    parse_octets(input).ok_or_else(|| MaskError::InvalidIpAddress(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert_eq!(
            get_cidr_mask(33).unwrap_err(),
            MaskError::InvalidCidr("33".to_string())
        );
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(broadcast_addr(ip, 0).unwrap(), Ipv4Addr::BROADCAST);
    }

    #[test]
    fn test_num_usable_hosts() {
        assert_eq!(num_usable_hosts(0).unwrap(), 4294967294);
        assert_eq!(num_usable_hosts(8).unwrap(), 16777214);
        assert_eq!(num_usable_hosts(16).unwrap(), 65534);
        assert_eq!(num_usable_hosts(24).unwrap(), 254);
        assert_eq!(num_usable_hosts(26).unwrap(), 62);
        assert_eq!(num_usable_hosts(30).unwrap(), 2);
        assert_eq!(num_usable_hosts(31).unwrap(), 0);
        assert_eq!(num_usable_hosts(32).unwrap(), 0);
        assert!(num_usable_hosts(33).is_err());
    }

    #[test]
    fn test_parse_octets() {
        assert_eq!(
            parse_octets("192.168.0.113"),
            Some(Ipv4Addr::new(192, 168, 0, 113))
        );
        assert_eq!(parse_octets("010.0.0.001"), Some(Ipv4Addr::new(10, 0, 0, 1)));
        assert_eq!(parse_octets("256.0.0.0"), None);
        assert_eq!(parse_octets("1.2.3"), None);
        assert_eq!(parse_octets("1.2.3.4.5"), None);
        assert_eq!(parse_octets("+1.2.3.4"), None);
        assert_eq!(parse_octets("a.b.c.d"), None);
        assert_eq!(parse_octets("\u{0662}\u{0665}\u{0665}.0.0.0"), None);
        assert!(!is_dotted_quad("\u{0662}\u{0665}\u{0665}.0.0.0"));
        assert!(!is_dotted_quad("1.2.3.\u{0664}"));
        assert_eq!(parse_octets(""), None);
    }

    #[test]
    fn test_first_octet() {
        assert_eq!(first_octet("255.255.255.0"), Some(255));
        assert_eq!(first_octet("300.0.0.0"), Some(300));
        assert_eq!(first_octet("99999999999999999999999.0.0.0"), Some(u64::MAX));
        assert_eq!(first_octet("0.0.x.0"), None);
        assert_eq!(first_octet("\u{0662}\u{0665}\u{0665}.0.0.0"), None);
    }

    #[test]
    fn test_parse_ipv4() {
        assert_eq!(
            parse_ipv4("10.0.0.1").unwrap(),
            Ipv4Addr::new(10, 0, 0, 1)
        );
        assert_eq!(
            parse_ipv4("10.0.0.256").unwrap_err(),
            MaskError::InvalidIpAddress("10.0.0.256".to_string())
        );
        assert!(parse_ipv4("10.0.0").is_err());
        assert!(parse_ipv4("10.0.0.-1").is_err());
        assert!(parse_ipv4("10.0.0.\u{0661}").is_err());
    }
}
