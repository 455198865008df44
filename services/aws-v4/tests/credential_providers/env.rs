use super::create_test_context_with_env;
use raws3_aws_v4::EnvCredentialProvider;
use raws3_core::{ProvideCredential, SigningCredential};
use std::collections::HashMap;

#[tokio::test]
async fn test_env_credential_provider() {
    let ctx = create_test_context_with_env(HashMap::from_iter([
        ("AWS_ACCESS_KEY_ID".to_string(), "access_key_id".to_string()),
        (
            "AWS_SECRET_ACCESS_KEY".to_string(),
            "secret_access_key".to_string(),
        ),
        ("AWS_SESSION_TOKEN".to_string(), "session_token".to_string()),
    ]));

    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .expect("EnvCredentialProvider should not fail")
        .expect("should load credentials from AWS_* env vars");

    assert!(cred.is_valid());
    assert_eq!(cred.access_key_id, "access_key_id");
    assert_eq!(cred.session_token.as_deref(), Some("session_token"));
}

#[tokio::test]
async fn test_env_credential_provider_without_env() {
    let ctx = create_test_context_with_env(HashMap::new());

    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .expect("EnvCredentialProvider should not fail");

    assert!(cred.is_none());
}
