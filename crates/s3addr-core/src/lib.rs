//! Parse S3 object addresses into bucket, key and region.
//!
//! See [`address::parse_address`].

pub mod address;
pub mod config;
pub mod logging;

pub use address::{parse_address, parse_optional_address, AddressError, ParsedAddress, Region};
