use crate::constants::{
    AWS4_HMAC_SHA256, AWS4_REQUEST, AWS_URI_ENCODE_SET, S3_SERVICE, X_AMZ_CONTENT_SHA_256,
    X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
};
use crate::Credential;
use http::{header, HeaderValue};
use log::debug;
use percent_encoding::percent_encode;
use raws3_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use raws3_core::time::{format_date, format_iso8601, now, parse_iso8601, DateTime};
use raws3_core::{Body, Error, Result, SignRequest, SigningRequest};
use std::fmt::Write;

/// RequestSigner that implement AWS SigV4 for s3.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Signing never leaves a request half signed: all headers are computed on
/// a detached copy and written back only once the `Authorization` header is
/// ready.
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new SigV4 request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        req: &mut http::Request<Body>,
        credential: &Self::Credential,
        region: &str,
    ) -> Result<()> {
        let now = self.time.unwrap_or_else(now);
        let mut signed_req = SigningRequest::build(req)?;

        canonicalize_header(&mut signed_req, req.body_mut(), credential, now)?;
        let authorization = build_authorization(&signed_req, credential, region)?;
        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        // Apply to the request.
        signed_req.apply(req);
        Ok(())
    }
}

/// Fill in the headers every signed request must carry.
///
/// Values the caller already set are kept as is.
fn canonicalize_header(
    ctx: &mut SigningRequest,
    body: &mut Body,
    cred: &Credential,
    now: DateTime,
) -> Result<()> {
    // Insert HOST header if not present.
    if !ctx.header_contains(header::HOST) {
        let authority = ctx.authority.as_ref().ok_or_else(|| {
            Error::request_invalid("request without authority or host is invalid for signing")
        })?;
        let value = HeaderValue::from_str(authority.as_str())?;
        ctx.headers.insert(header::HOST, value);
    }

    // Insert DATE header if not present.
    if !ctx.header_contains(X_AMZ_DATE) {
        let value = HeaderValue::try_from(format_iso8601(now))?;
        ctx.headers.insert(X_AMZ_DATE, value);
    }

    // Insert X_AMZ_CONTENT_SHA_256 header if not present.
    if !ctx.header_contains(X_AMZ_CONTENT_SHA_256) {
        let payload = body.buffer()?;
        let value = HeaderValue::try_from(hex_sha256(&payload))?;
        ctx.headers.insert(X_AMZ_CONTENT_SHA_256, value);
    }

    // Insert X_AMZ_SECURITY_TOKEN header if security token exists.
    if let Some(token) = &cred.session_token {
        let mut value = HeaderValue::from_str(token)?;
        // Set token value sensitive to valid leaking.
        value.set_sensitive(true);

        ctx.headers.insert(X_AMZ_SECURITY_TOKEN, value);
    }

    Ok(())
}

/// Compute the `Authorization` header value for an already canonicalized
/// request.
fn build_authorization(
    ctx: &SigningRequest,
    cred: &Credential,
    region: &str,
) -> Result<HeaderValue> {
    let date = extract_date(ctx)?;

    // Scope: "20220313/<region>/s3/aws4_request"
    let scope = format!(
        "{}/{}/{}/{}",
        format_date(date),
        region,
        S3_SERVICE,
        AWS4_REQUEST
    );
    debug!("calculated scope: {scope}");

    let (creq, signed_headers) = canonical_request_string(ctx)?;
    debug!("calculated canonical request: {creq}");

    let string_to_sign = string_to_sign(date, &scope, &creq);
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(&cred.secret_access_key, date, region);
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

    let mut authorization = HeaderValue::from_str(&format!(
        "{} Credential={}/{},SignedHeaders={},Signature={}",
        AWS4_HMAC_SHA256, cred.access_key_id, scope, signed_headers, signature
    ))?;
    authorization.set_sensitive(true);

    Ok(authorization)
}

/// Find the date this request is signed at.
///
/// Sources are checked in order and the first one present wins:
///
/// - header `x-amz-date`
/// - header `date`
/// - query parameter `x-amz-date`
///
/// All of them must be in the `YYYYMMDDTHHMMSSZ` format.
fn extract_date(ctx: &SigningRequest) -> Result<DateTime> {
    for name in [X_AMZ_DATE, "date"] {
        if let Some(raw) = ctx.header_get(name)? {
            return parse_iso8601(raw).map_err(|e| {
                Error::timestamp_invalid(format!("cannot parse the header '{name}: {raw}'"))
                    .with_source(e)
            });
        }
    }

    if let Some(raw) = ctx.query_get(X_AMZ_DATE).filter(|v| !v.is_empty()) {
        let raw = String::from_utf8_lossy(raw);
        return parse_iso8601(&raw).map_err(|e| {
            Error::timestamp_invalid(format!(
                "cannot parse the query parameter '{X_AMZ_DATE}: {raw}'"
            ))
            .with_source(e)
        });
    }

    Err(Error::timestamp_missing("cannot find date for the signature"))
}

/// Build the canonical request, returns it with the signed headers list.
fn canonical_request_string(ctx: &SigningRequest) -> Result<(String, String)> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", ctx.method)?;
    // Insert encoded path
    writeln!(f, "{}", uri_encode(&ctx.path_percent_decoded()))?;
    // Insert query
    writeln!(f, "{}", canonical_query_string(ctx))?;

    // Insert signed headers
    let (headers, signed_headers) = canonical_headers(ctx)?;
    for (name, value) in headers.iter() {
        writeln!(f, "{name}:{value}")?;
    }
    writeln!(f)?;
    writeln!(f, "{signed_headers}")?;

    let payload = ctx.header_get(X_AMZ_CONTENT_SHA_256)?.ok_or_else(|| {
        Error::request_invalid("request without x-amz-content-sha256 can't be signed")
    })?;
    write!(f, "{payload}")?;

    Ok((f, signed_headers))
}

/// Query pairs are sorted by key; values of a repeated key keep their order.
fn canonical_query_string(ctx: &SigningRequest) -> String {
    let mut query = ctx
        .query
        .iter()
        .map(|(k, v)| (k.as_slice(), v.as_slice()))
        .collect::<Vec<_>>();
    query.sort_by(|l, r| l.0.cmp(r.0));

    query
        .into_iter()
        .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Select, normalize and sort the headers that take part in the signature.
fn canonical_headers(ctx: &SigningRequest) -> Result<(Vec<(&str, &str)>, String)> {
    let mut names = ctx
        .headers
        .keys()
        .map(|k| k.as_str())
        .filter(|k| is_signed_header(k))
        .collect::<Vec<_>>();
    names.sort_unstable();

    let mut headers = Vec::with_capacity(names.len());
    for name in names.iter() {
        for value in ctx.headers.get_all(*name) {
            let mut value = value.to_str()?.trim();
            if *name == "host" {
                value = strip_default_port(value, ctx.is_tls());
            }
            headers.push((*name, value));
        }
    }

    Ok((headers, names.join(";")))
}

/// `host` is always signed, `content-type`, `date`, `range` and every
/// `x-amz-*` header when present. Everything else is left out.
fn is_signed_header(name: &str) -> bool {
    matches!(name, "host" | "content-type" | "date" | "range") || name.starts_with("x-amz-")
}

/// Drop `:80` for http and `:443` for https, keep any other port.
fn strip_default_port(host: &str, tls: bool) -> &str {
    let default_port = if tls { "443" } else { "80" };

    match host.rsplit_once(':') {
        Some((h, port)) if port == default_port => h,
        _ => host,
    }
}

/// AWS UriEncode with the exception that a space is written as `+`.
fn uri_encode(input: &[u8]) -> String {
    percent_encode(input, &AWS_URI_ENCODE_SET)
        .map(|v| if v == "%20" { "+" } else { v })
        .collect()
}

fn string_to_sign(date: DateTime, scope: &str, canonical_request: &str) -> String {
    // StringToSign:
    //
    // AWS4-HMAC-SHA256
    // 20220313T072004Z
    // 20220313/<region>/s3/aws4_request
    // <hashed_canonical_request>
    [
        AWS4_HMAC_SHA256,
        &format_iso8601(date),
        scope,
        &hex_sha256(canonical_request.as_bytes()),
    ]
    .join("\n")
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str) -> [u8; 32] {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(&sign_date, region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(&sign_region, S3_SERVICE.as_bytes());
    // Sign request
    hmac_sha256(&sign_service, AWS4_REQUEST.as_bytes())
}
