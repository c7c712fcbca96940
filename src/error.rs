//! Error type shared by the mask engine and the range calculator.

use crate::models::MaskFormat;
use thiserror::Error;

/// Reasons a mask or address token can be rejected.
///
/// Every variant carries the offending input so the caller can render it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Input matches none of the recognised mask shapes.
    #[error("Unable to determine the subnet mask format of '{0}'")]
    FormatUndetected(String),

    /// Numeric prefix length outside 0-32.
    #[error("Invalid CIDR prefix length '{0}' (must be 0-32)")]
    InvalidCidr(String),

    /// Dotted-decimal netmask or wildcard that is not one of the 33 legal masks.
    #[error("Invalid {format} '{value}'")]
    InvalidMask { value: String, format: MaskFormat },

    /// Hex netmask with the wrong shape, or a shape that is not a legal mask.
    #[error("Invalid hex netmask '{0}' (expected 0x followed by 8 hex digits of a contiguous mask)")]
    InvalidHex(String),

    /// Malformed or out of range dotted-decimal IPv4 address.
    #[error("Invalid IP address '{0}'")]
    InvalidIpAddress(String),
}

pub type Result<T> = std::result::Result<T, MaskError>;

impl MaskError {
    /// Process exit status the CLI uses for this error.
    ///
    /// Codes start at 3; clap uses 2 for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            MaskError::FormatUndetected(_) => 3,
            MaskError::InvalidCidr(_) => 4,
            MaskError::InvalidMask { .. } => 5,
            MaskError::InvalidHex(_) => 6,
            MaskError::InvalidIpAddress(_) => 7,
        }
    }
}
