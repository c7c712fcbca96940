//! IPv4 subnet mask conversion.
//!
//! Converts a mask given as a CIDR prefix, dotted netmask, hex netmask or
//! wildcard bits into all four forms, and derives the network, broadcast and
//! usable range for an address inside it.
//!
//! ```
//! use subnet_mask_calc::{derive_range, gather_report};
//!
//! let subnet = gather_report("0xffffffe0").unwrap();
//! assert_eq!(subnet.cidr, 27);
//!
//! let range = derive_range("192.168.0.113", subnet.netmask).unwrap();
//! assert_eq!(range.network.to_string(), "192.168.0.96");
//! assert_eq!(range.broadcast.to_string(), "192.168.0.127");
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{MaskError, Result};
pub use input::{Report, Request};
pub use models::{MaskFormat, Netmask, RangeReport, SubnetReport};
pub use processing::{derive_range, detect_format, gather_report, validate};
