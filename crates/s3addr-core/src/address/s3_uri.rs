//! Native URI form (`s3://bucket/key`).

use super::{AddressError, ParsedAddress, Region};
use url::Url;

/// Parses an `s3://` URI. The key keeps its leading `/`; the region is always global.
pub fn parse_s3_uri(input: &str) -> Result<ParsedAddress, AddressError> {
    let url = Url::parse(input)?;
    Ok(ParsedAddress {
        container: Some(url.host_str().unwrap_or_default().to_string()),
        key: Some(url.path().to_string()),
        region: Region::Global,
    })
}
