use std::borrow::Cow;
use std::mem;

use http::header::AsHeaderName;
use http::uri::Authority;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;

use crate::Result;

/// Signing context for request.
///
/// It's a detached copy of the parts of a request that take part in the
/// signature. Signers compute on it and only [`SigningRequest::apply`] the
/// headers back once everything succeeded, so a failed signing leaves the
/// original request untouched.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority, absent for origin-form uris.
    pub authority: Option<Authority>,
    /// HTTP path, `/` if the uri carries none.
    pub path: String,
    /// HTTP query parameters, decoded to raw bytes, in their original order.
    pub query: Vec<(Vec<u8>, Vec<u8>)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from a request.
    pub fn build<B>(req: &http::Request<B>) -> Result<Self> {
        let uri = req.uri();

        let path = match uri.path() {
            "" => "/".to_string(),
            v => v.to_string(),
        };

        Ok(SigningRequest {
            method: req.method().clone(),
            scheme: uri.scheme().cloned().unwrap_or(Scheme::HTTP),
            authority: uri.authority().cloned(),
            path,
            query: uri.query().map(parse_query).unwrap_or_default(),
            headers: req.headers().clone(),
        })
    }

    /// Apply the signed headers back to the request.
    ///
    /// Method, uri and body are never changed by signing.
    pub fn apply<B>(mut self, req: &mut http::Request<B>) {
        mem::swap(req.headers_mut(), &mut self.headers);
    }

    /// Get the path percent decoded as raw bytes.
    pub fn path_percent_decoded(&self) -> Cow<[u8]> {
        percent_encoding::percent_decode_str(&self.path).into()
    }

    /// Whether the request goes over TLS.
    #[inline]
    pub fn is_tls(&self) -> bool {
        self.scheme == Scheme::HTTPS
    }

    /// Get the first value of query `key`, compared case-insensitively.
    pub fn query_get(&self, key: &str) -> Option<&[u8]> {
        self.query
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key.as_bytes()))
            .map(|(_, v)| v.as_slice())
    }

    /// Get header value by name.
    ///
    /// Returns `None` if header not found or empty.
    pub fn header_get<K: AsHeaderName>(&self, key: K) -> Result<Option<&str>> {
        match self.headers.get(key) {
            Some(v) if !v.is_empty() => Ok(Some(v.to_str()?)),
            _ => Ok(None),
        }
    }

    /// Check if the header is present with a non-empty value.
    #[inline]
    pub fn header_contains<K: AsHeaderName>(&self, key: K) -> bool {
        self.headers.get(key).is_some_and(|v| !v.is_empty())
    }
}

/// Split a raw query into decoded pairs.
///
/// `+` stands for a space and escapes are decoded to bytes, invalid utf-8
/// included. A bare key gets an empty value.
fn parse_query(query: &str) -> Vec<(Vec<u8>, Vec<u8>)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query_component(k), decode_query_component(v))
        })
        .collect()
}

fn decode_query_component(input: &str) -> Vec<u8> {
    percent_encoding::percent_decode_str(&input.replace('+', " ")).collect()
}
