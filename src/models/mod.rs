//! Domain models for subnet mask conversion.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Netmask`] - validated IPv4 subnet mask and its conversions
//! - [`MaskFormat`] - the four textual mask encodings
//! - [`SubnetReport`] and [`RangeReport`] - computed results

mod format;
mod ipv4;
mod netmask;
mod report;

// Re-export public types
pub use format::MaskFormat;
pub use ipv4::{
    broadcast_addr, cut_addr, first_octet, get_cidr_mask, is_dotted_quad, num_usable_hosts,
    parse_ipv4, parse_octets, MAX_LENGTH,
};
pub use netmask::{
    cidr_to_netmask, hex_to_netmask, is_contiguous_mask, is_hex_shape, netmask_to_cidr,
    netmask_to_hex, netmask_to_wildcard, parse_netmask, parse_wildcard, wildcard_to_netmask,
    Netmask,
};
pub use report::{RangeReport, SubnetReport};

#[cfg(test)]
pub(crate) use netmask::tests::CANONICAL_NETMASKS;
