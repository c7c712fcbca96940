//! Mask conversion and range logic.
//!
//! - [`mask_engine`] - format detection, validation and normalisation
//! - [`range`] - network, broadcast and usable range for an address

mod mask_engine;
mod range;

// Re-export public functions
pub use mask_engine::{detect_format, gather_report, validate};
pub use range::{derive_range, derive_range_for, range_for};
