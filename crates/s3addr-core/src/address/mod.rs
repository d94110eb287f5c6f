//! S3 object address parsing.
//!
//! Accepts the three address forms in common use and normalizes them into a
//! [`ParsedAddress`] (bucket, key and optional region):
//! - HTTPS URLs, virtual-hosted or path style (`https://bucket.s3.region.amazonaws.com/key`)
//! - native URIs (`s3://bucket/key`)
//! - resource names (`arn:aws:s3:::bucket/key`)

pub mod arn;
mod error;
pub mod https;
pub mod s3_uri;

pub use error::AddressError;

use serde::{Serialize, Serializer};
use std::fmt;

const HTTPS_PREFIX: &str = "https://";
const S3_URI_PREFIX: &str = "s3://";
const ARN_PREFIX: &str = "arn:";

/// Region of a parsed address.
///
/// `Global` and `Unset` are distinct: `Global` means the address form says
/// "no region" (global endpoint, URI, ARN), `Unset` means nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Region {
    #[default]
    Unset,
    Global,
    Named(String),
}

impl Region {
    pub fn is_unset(&self) -> bool {
        matches!(self, Region::Unset)
    }

    /// Region name, if one was encoded in the address.
    pub fn name(&self) -> Option<&str> {
        match self {
            Region::Named(name) => Some(name),
            Region::Unset | Region::Global => None,
        }
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Region::Named(name) => serializer.serialize_str(name),
            Region::Unset | Region::Global => serializer.serialize_none(),
        }
    }
}

/// Bucket, key and region extracted from an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedAddress {
    #[serde(rename = "bucket", skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Region::is_unset")]
    pub region: Region,
}

impl ParsedAddress {
    pub fn is_empty(&self) -> bool {
        self.container.is_none() && self.key.is_none() && self.region.is_unset()
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let region = match &self.region {
            Region::Unset => "-",
            Region::Global => "(global)",
            Region::Named(name) => name.as_str(),
        };
        write!(
            f,
            "bucket={} key={} region={}",
            self.container.as_deref().unwrap_or("-"),
            self.key.as_deref().unwrap_or("-"),
            region
        )
    }
}

/// Parses an S3 address in any supported form.
///
/// Empty input yields an empty [`ParsedAddress`]. `Ok(None)` means an HTTPS
/// URL whose host is not an S3 endpoint. Inputs with any other prefix fail
/// with [`AddressError::UnrecognizedFormat`].
///
/// # Examples
///
/// - `parse_address("s3://my-bucket/my/key.txt")` → bucket `my-bucket`, key `/my/key.txt`, global region
/// - `parse_address("https://example.com/foo")` → `None`
pub fn parse_address(input: &str) -> Result<Option<ParsedAddress>, AddressError> {
    if input.is_empty() {
        return Ok(Some(ParsedAddress::default()));
    }
    if input.starts_with(HTTPS_PREFIX) {
        tracing::trace!(%input, "parsing as https url");
        return https::parse_https_url(input);
    }
    if input.starts_with(S3_URI_PREFIX) {
        tracing::trace!(%input, "parsing as s3 uri");
        return s3_uri::parse_s3_uri(input).map(Some);
    }
    if input.starts_with(ARN_PREFIX) {
        tracing::trace!(%input, "parsing as arn");
        return arn::parse_arn(input).map(Some);
    }
    Err(AddressError::UnrecognizedFormat(input.to_string()))
}

/// Like [`parse_address`], treating a missing input as empty.
pub fn parse_optional_address(input: Option<&str>) -> Result<Option<ParsedAddress>, AddressError> {
    parse_address(input.unwrap_or_default())
}
