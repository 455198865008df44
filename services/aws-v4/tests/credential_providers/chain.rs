use super::create_test_context_with_env;
use chrono::{TimeZone, Utc};
use http::Request;
use raws3_aws_v4::{
    EnvCredentialProvider, ProvideCredentialChain, RequestSigner, StaticCredentialProvider,
};
use raws3_core::{Body, ErrorKind, Signer};
use std::collections::HashMap;

fn request() -> Request<Body> {
    Request::get("http://127.0.0.1:9000/hello")
        .body(Body::Empty)
        .expect("request must be valid")
}

#[tokio::test]
async fn test_signer_with_chain_falls_back() {
    let ctx = create_test_context_with_env(HashMap::new());
    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(StaticCredentialProvider::new("static_ak", "static_sk"));
    let time = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
    let signer = Signer::new(ctx, chain, RequestSigner::new().with_time(time), "us-west-2");

    let mut req = request();
    signer.sign(&mut req).await.expect("sign must succeed");

    let auth = req.headers()["authorization"].to_str().unwrap();
    assert!(auth.starts_with(
        "AWS4-HMAC-SHA256 Credential=static_ak/20130524/us-west-2/s3/aws4_request,"
    ));
}

#[tokio::test]
async fn test_signer_without_credential() {
    let ctx = create_test_context_with_env(HashMap::new());
    let signer = Signer::new(
        ctx,
        EnvCredentialProvider::new(),
        RequestSigner::new(),
        "us-east-1",
    );

    let mut req = request();
    let err = signer.sign(&mut req).await.expect_err("sign must fail");

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(req.headers().is_empty());
}
