use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use raws3_aws_v4::{Credential, RequestSigner};
use raws3_core::{Error, Result, SignRequest};
use serde::Deserialize;

/// The signature scheme used to authenticate requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureType {
    /// Requests are sent without any signature.
    Anonymous,
    /// AWS Signature Version 2, as query parameters.
    V2,
    /// AWS Signature Version 2, as `Authorization` header.
    V2Header,
    /// AWS Signature Version 4.
    #[default]
    V4,
}

impl SignatureType {
    /// The identifier of this scheme in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureType::Anonymous => "anonymous",
            SignatureType::V2 => "v2",
            SignatureType::V2Header => "v2-header",
            SignatureType::V4 => "v4",
        }
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anonymous" => Ok(SignatureType::Anonymous),
            "v2" => Ok(SignatureType::V2),
            "v2-header" => Ok(SignatureType::V2Header),
            "v4" => Ok(SignatureType::V4),
            _ => Err(Error::config_invalid(format!(
                "unknown signature type: {s}"
            ))),
        }
    }
}

/// Pick the request signer for `signature_type`.
///
/// Only [`SignatureType::V4`] is supported, every other scheme is rejected
/// with [`ErrorKind::ConfigInvalid`](raws3_core::ErrorKind::ConfigInvalid).
pub fn new_signer(
    signature_type: SignatureType,
) -> Result<Arc<dyn SignRequest<Credential = Credential>>> {
    match signature_type {
        SignatureType::V4 => Ok(Arc::new(RequestSigner::new())),
        SignatureType::Anonymous | SignatureType::V2 | SignatureType::V2Header => Err(
            Error::config_invalid(format!("unsupported signature type: {signature_type}")),
        ),
    }
}
