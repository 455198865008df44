//! AWS SigV4 signing for s3.
//!
//! This crate signs S3 requests with `AWS4-HMAC-SHA256` header
//! authentication: it builds the canonical request, derives the signing key
//! for `YYYYMMDD/<region>/s3/aws4_request` and writes the `Authorization`
//! header back to the request.
//!
//! ## Example
//!
//! ```no_run
//! use raws3_aws_v4::{RequestSigner, StaticCredentialProvider, EMPTY_STRING_SHA256};
//! use raws3_core::{Body, Context, Result, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let signer = Signer::new(
//!         Context::new(),
//!         StaticCredentialProvider::new("access_key_id", "secret_access_key"),
//!         RequestSigner::new(),
//!         "us-east-1",
//!     );
//!
//!     let mut req = http::Request::get("https://examplebucket.s3.amazonaws.com/test.txt")
//!         .header("x-amz-content-sha256", EMPTY_STRING_SHA256)
//!         .body(Body::Empty)?;
//!     signer.sign(&mut req).await?;
//!
//!     println!("{:?}", req.headers().get("authorization"));
//!     Ok(())
//! }
//! ```

mod constants;
pub use constants::EMPTY_STRING_SHA256;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::RequestSigner;
