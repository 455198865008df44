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

use super::{init_signer, sign};
use http::{Method, Request};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use pretty_assertions::assert_eq;
use raws3_core::Body;

fn signature(auth: &str) -> &str {
    auth.rsplit_once("Signature=")
        .map(|(_, v)| v)
        .expect("signature must be present")
}

async fn sign_path(path: &str) -> anyhow::Result<String> {
    let signer = init_signer();

    let mut req = Request::builder()
        .method(Method::HEAD)
        .uri(format!("http://examplebucket.s3.amazonaws.com{path}"))
        .header("x-amz-date", "20130524T000000Z")
        .body(Body::Empty)?;

    Ok(sign(&signer, &mut req).await?)
}

#[tokio::test]
async fn test_encoded_and_raw_path_sign_the_same() -> anyhow::Result<()> {
    let raw = sign_path("/test$file.text").await?;
    let encoded = sign_path("/test%24file.text").await?;

    assert_eq!(signature(&raw), signature(&encoded));
    Ok(())
}

#[tokio::test]
async fn test_object_with_special_characters() -> anyhow::Result<()> {
    let path = format!(
        "/{}",
        utf8_percent_encode("!@#$%^&*()_+-=;:'><,?.txt", NON_ALPHANUMERIC)
    );
    let auth = sign_path(&path).await?;

    assert_eq!(signature(&auth).len(), 64);
    Ok(())
}

#[tokio::test]
async fn test_object_with_spaces() -> anyhow::Result<()> {
    let encoded = sign_path("/test%20file%20with%20spaces.txt").await?;
    let plus = sign_path("/test+file+with+spaces.txt").await?;

    // A literal `+` in the path is a different key than an encoded space.
    assert_ne!(signature(&encoded), signature(&plus));
    Ok(())
}

#[tokio::test]
async fn test_object_with_unicode_characters() -> anyhow::Result<()> {
    let path = format!("/{}", utf8_percent_encode("\u{4f60}\u{597d}.txt", NON_ALPHANUMERIC));
    let first = sign_path(&path).await?;
    let second = sign_path(&path).await?;

    assert_eq!(first, second);
    Ok(())
}
