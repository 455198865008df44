use crate::{Body, Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// It loads a credential from its provider on every call and hands it to
/// the request signer. Credentials are not cached.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    region: String,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
        region: &str,
    ) -> Self {
        Self::from_arc(ctx, Arc::new(loader), Arc::new(builder), region)
    }

    /// Create a new signer from shared provider and request signer.
    pub fn from_arc(
        ctx: Context,
        loader: Arc<dyn ProvideCredential<Credential = K>>,
        builder: Arc<dyn SignRequest<Credential = K>>,
        region: &str,
    ) -> Self {
        Self {
            ctx,
            loader,
            builder,
            region: region.to_string(),
        }
    }

    /// Region requests are signed for.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Signing request.
    pub async fn sign(&self, req: &mut http::Request<Body>) -> Result<()> {
        let credential = self.loader.provide_credential(&self.ctx).await?;
        let Some(credential) = credential.filter(|v| v.is_valid()) else {
            return Err(Error::credential_invalid(
                "no valid credential found for signing",
            ));
        };

        self.builder.sign_request(req, &credential, &self.region)
    }
}
