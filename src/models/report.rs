//! Report value objects produced by the mask engine and range calculator.

use super::Netmask;
use serde::Serialize;
use std::net::Ipv4Addr;

/// A validated mask in all four encodings plus its usable host count.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// Prefix length (0-32).
    pub cidr: u8,
    /// Dotted-decimal netmask.
    pub netmask: Netmask,
    /// `0x` prefixed hex netmask.
    pub hex: String,
    /// Dotted-decimal wildcard bits.
    pub wildcard: Ipv4Addr,
    /// Host addresses excluding network and broadcast.
    pub usable_hosts: u64,
}

impl From<Netmask> for SubnetReport {
    fn from(mask: Netmask) -> Self {
        SubnetReport {
            cidr: mask.cidr(),
            netmask: mask,
            hex: mask.to_hex(),
            wildcard: mask.wildcard(),
            usable_hosts: mask.usable_hosts(),
        }
    }
}

/// Address range for an IP inside a subnet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RangeReport {
    /// Address as entered by the user.
    pub ip_entered: Ipv4Addr,
    /// Host bits cleared.
    pub network: Ipv4Addr,
    /// Host bits set.
    pub broadcast: Ipv4Addr,
    /// `None` for /31 and /32.
    pub first_usable: Option<Ipv4Addr>,
    /// `None` for /31 and /32.
    pub last_usable: Option<Ipv4Addr>,
}
