//! Validated IPv4 subnet mask and the conversions between its encodings.
//!
//! A [`Netmask`] can only be built from a bit pattern whose 1-bits run
//! contiguously from the most significant bit, so every value of the type is
//! one of the 33 legal masks `/0` through `/32`.

use super::ipv4::{get_cidr_mask, num_usable_hosts, parse_octets, MAX_LENGTH};
use super::MaskFormat;
use crate::error::{MaskError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

lazy_static! {
    static ref HEX_MASK: Regex = Regex::new(r"^0x[0-9a-fA-F]{8}$").expect("Invalid Regex?");
}

/// IPv4 subnet mask with contiguous leading 1-bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Netmask(u32);

impl Netmask {
    /// Build from a prefix length in 0-32.
    pub fn from_cidr(len: u8) -> Result<Netmask> {
        Ok(Netmask(get_cidr_mask(len)?))
    }

    /// Build from raw mask bits, rejecting non-contiguous patterns.
    pub fn from_bits(bits: u32) -> Option<Netmask> {
        if is_contiguous_mask(bits) {
            Some(Netmask(bits))
        } else {
            None
        }
    }

    /// Build from wildcard bits, i.e. the complement of the mask.
    pub fn from_wildcard_bits(bits: u32) -> Option<Netmask> {
        Netmask::from_bits(!bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Prefix length: the number of leading 1-bits.
    pub fn cidr(&self) -> u8 {
        self.0.leading_ones() as u8
    }

    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.0)
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.0)
    }

    /// Lowercase `0x` prefixed hex, one digit pair per octet.
    pub fn to_hex(&self) -> String {
        format!("0x{:08x}", self.0)
    }

    /// Usable host addresses, excluding network and broadcast.
    pub fn usable_hosts(&self) -> u64 {
        // cidr() is at most 32 by construction
        num_usable_hosts(self.cidr()).unwrap_or(0)
    }

    /// True for /31 and /32, which leave no host address between the
    /// network and broadcast addresses.
    pub fn is_degenerate(&self) -> bool {
        matches!(self.octets(), [_, _, 255, 254] | [_, _, 255, 255])
    }
}

impl fmt::Display for Netmask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.addr())
    }
}

impl Serialize for Netmask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// True if `bits` is `0xFFFFFFFF << k` for some k in 0-32.
pub fn is_contiguous_mask(bits: u32) -> bool {
    bits.leading_ones() + bits.trailing_zeros() == u32::from(MAX_LENGTH)
}

/// True if `input` is `0x` followed by exactly 8 hex digits.
pub fn is_hex_shape(input: &str) -> bool {
    HEX_MASK.is_match(input)
}

pub fn cidr_to_netmask(len: u8) -> Result<Netmask> {
    Netmask::from_cidr(len)
}

pub fn netmask_to_cidr(mask: Netmask) -> u8 {
    mask.cidr()
}

pub fn netmask_to_hex(mask: Netmask) -> String {
    mask.to_hex()
}

/// Decode a `0x` hex netmask, checking both its shape and its bit pattern.
pub fn hex_to_netmask(input: &str) -> Result<Netmask> {
    let invalid = || MaskError::InvalidHex(input.to_string());
    if !is_hex_shape(input) {
        return Err(invalid());
    }
    let bits = u32::from_str_radix(&input[2..], 16).map_err(|_| invalid())?;
    Netmask::from_bits(bits).ok_or_else(invalid)
}

/// Per-octet complement, `255 - octet`.
pub fn netmask_to_wildcard(mask: Netmask) -> Ipv4Addr {
    mask.wildcard()
}

pub fn wildcard_to_netmask(wildcard: Ipv4Addr) -> Result<Netmask> {
    Netmask::from_wildcard_bits(u32::from(wildcard)).ok_or_else(|| MaskError::InvalidMask {
        value: wildcard.to_string(),
        format: MaskFormat::Wildcard,
    })
}

/// Parse a dotted-decimal netmask such as `255.255.255.192`.
pub fn parse_netmask(input: &str) -> Result<Netmask> {
    parse_octets(input)
        .and_then(|addr| Netmask::from_bits(u32::from(addr)))
        .ok_or_else(|| MaskError::InvalidMask {
            value: input.to_string(),
            format: MaskFormat::Netmask,
        })
}

/// Parse dotted-decimal wildcard bits such as `0.0.0.63`.
pub fn parse_wildcard(input: &str) -> Result<Netmask> {
    parse_octets(input)
        .and_then(|addr| Netmask::from_wildcard_bits(u32::from(addr)))
        .ok_or_else(|| MaskError::InvalidMask {
            value: input.to_string(),
            format: MaskFormat::Wildcard,
        })
}
