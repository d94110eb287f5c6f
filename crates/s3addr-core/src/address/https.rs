//! HTTPS URL form (`https://...amazonaws.com/...`).
//!
//! S3 has accumulated several endpoint layouts over the years:
//!
//! | host                                          | style                  |
//! |-----------------------------------------------|------------------------|
//! | `bucket.s3.amazonaws.com`                     | virtual-hosted, global |
//! | `bucket.s3.us-east-1.amazonaws.com`           | virtual-hosted         |
//! | `bucket.s3-us-east-1.amazonaws.com`           | virtual-hosted, legacy |
//! | `bucket.s3.dualstack.us-east-1.amazonaws.com` | virtual-hosted, IPv6   |
//! | `s3.us-east-1.amazonaws.com/bucket`           | path style             |
//!
//! Only the dot-separated host segments tell them apart, so resolution is a
//! fixed sequence of small steps. Each step may override what an earlier one
//! decided; none of them fail.

use super::{AddressError, ParsedAddress, Region};
use url::Url;

const ROOT_DOMAIN: &str = "amazonaws.com";
const SERVICE_TOKEN: &str = "s3";
const SERVICE_SEGMENT: &str = ".s3";
const DUALSTACK_TOKEN: &str = "dualstack";
const LEGACY_REGION_PREFIX: &str = "s3-";
/// Second-level label of the root domain; seen in the region slot on global endpoints.
const GLOBAL_LABEL: &str = "amazonaws";
const PATH_STYLE_SEGMENTS: usize = 4;

/// Addressing style read off an S3 host.
#[derive(Debug)]
struct HostLayout<'a> {
    segments: Vec<&'a str>,
    /// Host starts with the service token (`s3.`, `s3-region.`).
    starts_with_service: bool,
    dualstack: bool,
}

impl<'a> HostLayout<'a> {
    /// Returns `None` for hosts that are not S3 endpoints.
    fn detect(host: &'a str) -> Option<Self> {
        if !host.ends_with(ROOT_DOMAIN) {
            return None;
        }
        let starts_with_service = host.starts_with(SERVICE_TOKEN);
        if !starts_with_service && !host.contains(SERVICE_SEGMENT) {
            return None;
        }
        let segments: Vec<&str> = host.split('.').collect();
        let marker = if starts_with_service { 1 } else { 2 };
        let dualstack = segments.get(marker) == Some(&DUALSTACK_TOKEN);
        Some(Self {
            segments,
            starts_with_service,
            dualstack,
        })
    }

    fn segment(&self, index: usize) -> Option<&'a str> {
        self.segments.get(index).copied()
    }

    fn region_at(&self, index: usize) -> Region {
        self.segment(index)
            .map_or(Region::Unset, |s| Region::Named(s.to_string()))
    }

    fn is_path_style(&self) -> bool {
        self.starts_with_service && self.segments.len() == PATH_STYLE_SEGMENTS
    }
}

/// Intermediate result threaded through the resolution steps.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolution {
    container: Option<String>,
    key: String,
    region: Region,
}

impl From<Resolution> for ParsedAddress {
    fn from(res: Resolution) -> Self {
        ParsedAddress {
            container: res.container,
            key: Some(res.key),
            region: res.region,
        }
    }
}

/// Parses an HTTPS S3 URL.
///
/// `Ok(None)` when the host is not an S3 endpoint.
pub fn parse_https_url(input: &str) -> Result<Option<ParsedAddress>, AddressError> {
    let url = Url::parse(input)?;
    let host = url.host_str().unwrap_or_default();
    let Some(layout) = HostLayout::detect(host) else {
        tracing::debug!(host, "not an s3 endpoint");
        return Ok(None);
    };

    let res = guess(&layout, url.path());
    let res = skip_service_token(res, &layout);
    let res = skip_dualstack_token(res, &layout);
    let res = strip_legacy_prefix(res, &layout);
    let res = normalize_global_region(res);
    let res = apply_path_style(res, &layout);

    tracing::debug!(
        host,
        path_style = layout.is_path_style(),
        dualstack = layout.dualstack,
        "resolved https url"
    );
    Ok(Some(res.into()))
}

/// Virtual-hosted guess: first segment is the bucket, second the region.
fn guess(layout: &HostLayout<'_>, path: &str) -> Resolution {
    Resolution {
        container: layout.segment(0).map(str::to_string),
        key: path.to_string(),
        region: layout.region_at(1),
    }
}

/// `bucket.s3.region...`: the region sits after the service token.
fn skip_service_token(mut res: Resolution, layout: &HostLayout<'_>) -> Resolution {
    if res.region.name() == Some(SERVICE_TOKEN) {
        res.region = layout.region_at(2);
    }
    res
}

fn skip_dualstack_token(mut res: Resolution, layout: &HostLayout<'_>) -> Resolution {
    if res.region.name() == Some(DUALSTACK_TOKEN) {
        let index = if layout.starts_with_service { 2 } else { 3 };
        res.region = layout.region_at(index);
    }
    res
}

/// `s3-us-west-2` → `us-west-2`.
fn strip_legacy_prefix(mut res: Resolution, layout: &HostLayout<'_>) -> Resolution {
    if layout.dualstack {
        return res;
    }
    let stripped = res
        .region
        .name()
        .and_then(|name| name.strip_prefix(LEGACY_REGION_PREFIX))
        .map(str::to_string);
    if let Some(name) = stripped {
        res.region = Region::Named(name);
    }
    res
}

fn normalize_global_region(mut res: Resolution) -> Resolution {
    if res.region.name() == Some(GLOBAL_LABEL) {
        res.region = Region::Global;
    }
    res
}

/// `s3.region.amazonaws.com/bucket/key`: the bucket moves out of the path.
///
/// The resulting key has no leading `/`, unlike the virtual-hosted forms.
fn apply_path_style(res: Resolution, layout: &HostLayout<'_>) -> Resolution {
    if !layout.is_path_style() {
        return res;
    }
    let mut parts = res.key.split('/').skip(1);
    let container = parts.next().map(str::to_string);
    let key = parts.collect::<Vec<_>>().join("/");
    Resolution {
        container,
        key,
        region: layout.region_at(1),
    }
}
