use std::fmt::{self, Debug, Formatter};
use std::io::Read;

use bytes::Bytes;

use crate::{Error, Result};

/// Body of a request that is going to be signed.
///
/// A `Reader` can only be consumed once. Signers that need the payload call
/// [`Body::buffer`], which reads it to the end and swaps it for the
/// equivalent `Bytes` so the transport still sees the same content.
#[derive(Default)]
pub enum Body {
    /// No payload.
    #[default]
    Empty,
    /// Payload fully held in memory.
    Bytes(Bytes),
    /// One-shot payload.
    Reader(Box<dyn Read + Send + Sync>),
}

impl Body {
    /// Create a body from a one-shot reader.
    pub fn from_reader(r: impl Read + Send + Sync + 'static) -> Self {
        Body::Reader(Box::new(r))
    }

    /// Returns the payload if it's already in memory.
    ///
    /// `Empty` yields an empty slice, `Reader` yields `None`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Body::Empty => Some(b"".as_slice()),
            Body::Bytes(bs) => Some(bs.as_ref()),
            Body::Reader(_) => None,
        }
    }

    /// Materialize the whole payload in memory and return it.
    ///
    /// A `Reader` body is read to the end and replaced by `Body::Bytes`.
    /// If reading fails, the reader is left partially consumed and must not
    /// be sent.
    pub fn buffer(&mut self) -> Result<Bytes> {
        match self {
            Body::Empty => Ok(Bytes::new()),
            Body::Bytes(bs) => Ok(bs.clone()),
            Body::Reader(r) => {
                let mut buf = Vec::new();
                r.read_to_end(&mut buf).map_err(|e| {
                    Error::body_read("failed to read request body for payload hash")
                        .with_source(e)
                })?;

                let bs = Bytes::from(buf);
                *self = Body::Bytes(bs.clone());
                Ok(bs)
            }
        }
    }
}

impl Debug for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Body::Empty => f.write_str("Body::Empty"),
            Body::Bytes(bs) => write!(f, "Body::Bytes({} bytes)", bs.len()),
            Body::Reader(_) => f.write_str("Body::Reader"),
        }
    }
}

impl From<Bytes> for Body {
    fn from(bs: Bytes) -> Self {
        Body::Bytes(bs)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bs: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(bs))
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Bytes(Bytes::from(s))
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Body::Bytes(Bytes::from_static(s.as_bytes()))
    }
}
