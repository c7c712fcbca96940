//! The four textual encodings a subnet mask can arrive in.

use serde::Serialize;
use std::fmt;

/// Format of a raw mask token.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MaskFormat {
    /// Prefix length, e.g. `26`.
    Cidr,
    /// Dotted-decimal netmask, e.g. `255.255.255.192`.
    Netmask,
    /// `0x` prefixed hex netmask, e.g. `0xffffffc0`.
    Hex,
    /// Dotted-decimal wildcard bits, e.g. `0.0.0.63`.
    Wildcard,
}

impl fmt::Display for MaskFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            MaskFormat::Cidr => "CIDR prefix",
            MaskFormat::Netmask => "netmask",
            MaskFormat::Hex => "hex netmask",
            MaskFormat::Wildcard => "wildcard bits",
        };
        f.write_str(name)
    }
}
