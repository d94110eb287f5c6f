//! Resource-name form (`arn:aws:s3:::bucket/key`).

use super::{AddressError, ParsedAddress, Region};

const RESOURCE_FIELD: usize = 5;

/// Parses an S3 ARN.
///
/// The sixth colon-separated field holds `bucket/key`; anything after a
/// further `:` is dropped. The ARN's own region field is not surfaced: the
/// result region is always global.
pub fn parse_arn(input: &str) -> Result<ParsedAddress, AddressError> {
    let fields: Vec<&str> = input.split(':').collect();
    let resource = fields
        .get(RESOURCE_FIELD)
        .copied()
        .ok_or_else(|| AddressError::InsufficientFields {
            input: input.to_string(),
            found: fields.len(),
        })?;

    let (container, key) = resource.split_once('/').unwrap_or((resource, ""));
    Ok(ParsedAddress {
        container: Some(container.to_string()),
        key: Some(key.to_string()),
        region: Region::Global,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_and_key() {
        let parsed = parse_arn("arn:aws:s3:::my-bucket/my/key.txt").unwrap();
        assert_eq!(parsed.container.as_deref(), Some("my-bucket"));
        assert_eq!(parsed.key.as_deref(), Some("my/key.txt"));
        assert_eq!(parsed.region, Region::Global);
    }

    #[test]
    fn bucket_only() {
        let parsed = parse_arn("arn:aws:s3:::my-bucket").unwrap();
        assert_eq!(parsed.container.as_deref(), Some("my-bucket"));
        assert_eq!(parsed.key.as_deref(), Some(""));
    }

    #[test]
    fn region_field_is_ignored() {
        let parsed = parse_arn("arn:aws-cn:s3:cn-north-1:123456789012:b/k").unwrap();
        assert_eq!(parsed.container.as_deref(), Some("b"));
        assert_eq!(parsed.region, Region::Global);
    }

    #[test]
    fn key_ends_at_next_colon() {
        let parsed = parse_arn("arn:aws:s3:::b/2024-01-01T00:00:00.json").unwrap();
        assert_eq!(parsed.container.as_deref(), Some("b"));
        assert_eq!(parsed.key.as_deref(), Some("2024-01-01T00"));
        assert_eq!(parsed.region, Region::Global);
    }

    #[test]
    fn too_few_fields() {
        match parse_arn("arn:aws:s3:my-bucket/key") {
            Err(AddressError::InsufficientFields { found, .. }) => assert_eq!(found, 4),
            other => panic!("expected InsufficientFields, got {other:?}"),
        }
    }
}
