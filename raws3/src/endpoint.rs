// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;

use http::uri::Scheme;
use http::Uri;
use raws3_core::{Error, Result};
use serde::Deserialize;

/// Endpoint of an S3-compatible service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endpoint {
    /// Host name or ip, without port.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Talk to the endpoint over https.
    #[serde(default)]
    pub with_ssl: bool,
    /// Address buckets as `bucket.host` instead of `host/bucket`.
    #[serde(default)]
    pub with_virtual_host: bool,
}

impl Endpoint {
    /// Parse an endpoint from an `http` or `https` url.
    ///
    /// The port defaults to the scheme's one when the url carries none.
    pub fn from_url(url: &str) -> Result<Self> {
        let uri: Uri = url.parse()?;

        let with_ssl = match uri.scheme() {
            Some(s) if *s == Scheme::HTTPS => true,
            Some(s) if *s == Scheme::HTTP => false,
            _ => {
                return Err(Error::config_invalid(format!(
                    "endpoint url must be http or https: {url}"
                )))
            }
        };
        let host = uri
            .host()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid(format!("endpoint url without host: {url}")))?;
        let port = uri
            .port_u16()
            .unwrap_or(if with_ssl { 443 } else { 80 });

        Ok(Self {
            host: host.to_string(),
            port,
            with_ssl,
            with_virtual_host: false,
        })
    }

    /// Enable virtual host addressing.
    pub fn with_virtual_host(mut self) -> Self {
        self.with_virtual_host = true;
        self
    }

    /// `https` or `http`.
    pub fn scheme(&self) -> &'static str {
        if self.with_ssl {
            "https"
        } else {
            "http"
        }
    }

    fn is_default_port(&self) -> bool {
        self.port == if self.with_ssl { 443 } else { 80 }
    }

    /// Build the `Host` value for requests against `bucket`.
    ///
    /// Under virtual host addressing the bucket becomes a sub domain. The
    /// port is omitted when it's the scheme's default.
    pub fn authority(&self, bucket: Option<&str>) -> String {
        let host = match bucket {
            Some(bucket) if self.with_virtual_host => format!("{bucket}.{}", self.host),
            _ => self.host.clone(),
        };

        if self.is_default_port() {
            host
        } else {
            format!("{host}:{}", self.port)
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme(), self.host, self.port)
    }
}
