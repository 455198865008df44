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

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use log::debug;
use raws3_aws_v4::{
    Credential, EnvCredentialProvider, ProvideCredentialChain, StaticCredentialProvider,
};
use raws3_core::utils::Redact;
use raws3_core::{Context, Result, Signer};
use serde::Deserialize;

use crate::{new_signer, Endpoint, SignatureType};

/// Env value for the region.
pub const AWS_REGION: &str = "AWS_REGION";
/// Env value for the access key id.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Env value for the secret access key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Env value for the session token.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
/// Env value for the endpoint url.
pub const RAWS3_ENDPOINT: &str = "RAWS3_ENDPOINT";
/// Env value for the signature type.
pub const RAWS3_SIGNATURE_TYPE: &str = "RAWS3_SIGNATURE_TYPE";

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Config for talking to an S3-compatible service.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - default to [`DEFAULT_REGION`]
    pub region: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RAWS3_ENDPOINT`], as an url
    pub endpoint: Option<Endpoint>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SESSION_TOKEN`]
    pub session_token: Option<String>,
    /// `signature_type` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RAWS3_SIGNATURE_TYPE`]
    /// - default to [`SignatureType::V4`]
    pub signature_type: Option<SignatureType>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("signature_type", &self.signature_type)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Fields already set are kept. Fails if [`RAWS3_ENDPOINT`] or
    /// [`RAWS3_SIGNATURE_TYPE`] can't be parsed.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        let env_var = |key: &str| ctx.env_var(key).filter(|v| !v.is_empty());

        if let Some(v) = env_var(AWS_REGION) {
            self.region.get_or_insert(v);
        }
        if let Some(v) = env_var(AWS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = env_var(AWS_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = env_var(AWS_SESSION_TOKEN) {
            self.session_token.get_or_insert(v);
        }
        if self.endpoint.is_none() {
            if let Some(v) = env_var(RAWS3_ENDPOINT) {
                self.endpoint = Some(Endpoint::from_url(&v)?);
            }
        }
        if self.signature_type.is_none() {
            if let Some(v) = env_var(RAWS3_SIGNATURE_TYPE) {
                self.signature_type = Some(v.parse()?);
            }
        }

        Ok(self)
    }

    /// The configured region, or [`DEFAULT_REGION`].
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// The configured signature type, or [`SignatureType::V4`].
    pub fn signature_type(&self) -> SignatureType {
        self.signature_type.unwrap_or_default()
    }

    /// Build a signer from this config.
    ///
    /// The key pair from this config is tried first, then the credentials
    /// found in env when signing.
    pub fn signer(&self, ctx: Context) -> Result<Signer<Credential>> {
        let builder = new_signer(self.signature_type())?;

        let mut loader = ProvideCredentialChain::new();
        if let (Some(ak), Some(sk)) = (&self.access_key_id, &self.secret_access_key) {
            let mut provider = StaticCredentialProvider::new(ak, sk);
            if let Some(token) = &self.session_token {
                provider = provider.with_session_token(token);
            }
            loader = loader.push(provider);
        }
        let loader = loader.push(EnvCredentialProvider::new());

        debug!(
            "building {} signer for region {}",
            self.signature_type(),
            self.region()
        );
        Ok(Signer::from_arc(
            ctx,
            Arc::new(loader),
            builder,
            self.region(),
        ))
    }
}
