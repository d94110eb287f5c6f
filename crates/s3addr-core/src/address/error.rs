//! Address parse errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressError {
    /// Input is not an `https://` URL, `s3://` URI or `arn:` resource name.
    #[error("unknown protocol / url format: {0}")]
    UnrecognizedFormat(String),
    /// Host/path decomposition failed.
    #[error("malformed url: {0}")]
    MalformedUrl(#[from] url::ParseError),
    /// Resource name without the bucket/key field.
    #[error("arn has {found} colon-separated fields, expected 6: {input}")]
    InsufficientFields { input: String, found: usize },
}
