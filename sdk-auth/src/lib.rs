/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Credential types and the async credentials-provider trait used when
//! signing requests.

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// AWS-style access credentials.
///
/// The `Debug` implementation redacts the secret access key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(Arc<Inner>);

#[derive(PartialEq, Eq)]
struct Inner {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    /// Creates credentials from their parts.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Credentials(Arc::new(Inner {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }))
    }

    /// Creates credentials for tests: `from_keys("ANOTREAL", "notrealrnrELgWzOk3IfjzDKtFBhDby", None)`.
    pub fn from_keys(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self::new(access_key_id, secret_access_key, session_token)
    }

    /// The access key id.
    pub fn access_key_id(&self) -> &str {
        &self.0.access_key_id
    }

    /// The secret access key.
    pub fn secret_access_key(&self) -> &str {
        &self.0.secret_access_key
    }

    /// The session token, when these are temporary credentials.
    pub fn session_token(&self) -> Option<&str> {
        self.0.session_token.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.0.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}

/// Failure to load credentials.
#[derive(Debug)]
pub enum CredentialsError {
    /// No credentials were available from this provider.
    CredentialsNotLoaded,
    /// The provider failed for another reason.
    ProviderError(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::CredentialsNotLoaded => {
                write!(f, "no credentials were configured on the client")
            }
            CredentialsError::ProviderError(err) => {
                write!(f, "the credentials provider failed: {}", err)
            }
        }
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CredentialsError::ProviderError(err) => Some(err.as_ref() as _),
            _ => None,
        }
    }
}

/// A self-describing future returned by [`ProvideCredentials`].
pub struct ProvideCredentialsFuture<'a>(
    Pin<Box<dyn Future<Output = Result<Credentials, CredentialsError>> + Send + 'a>>,
);

impl<'a> ProvideCredentialsFuture<'a> {
    /// Wraps a future.
    pub fn new(
        future: impl Future<Output = Result<Credentials, CredentialsError>> + Send + 'a,
    ) -> Self {
        ProvideCredentialsFuture(Box::pin(future))
    }

    /// An immediately-ready result.
    pub fn ready(result: Result<Credentials, CredentialsError>) -> Self {
        Self::new(std::future::ready(result))
    }
}

impl Future for ProvideCredentialsFuture<'_> {
    type Output = Result<Credentials, CredentialsError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.0.as_mut().poll(cx)
    }
}

/// Asynchronously provides [`Credentials`] for signing a request.
pub trait ProvideCredentials: Send + Sync + fmt::Debug {
    /// Load credentials.
    fn provide_credentials(&self) -> ProvideCredentialsFuture<'_>;
}

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> ProvideCredentialsFuture<'_> {
        ProvideCredentialsFuture::ready(Ok(self.clone()))
    }
}

/// A provider that never yields credentials. This is the default until a
/// provider is configured, so clients fail with a typed error rather than
/// signing with empty keys.
#[derive(Debug, Default)]
pub struct NoCredentials;

impl ProvideCredentials for NoCredentials {
    fn provide_credentials(&self) -> ProvideCredentialsFuture<'_> {
        ProvideCredentialsFuture::ready(Err(CredentialsError::CredentialsNotLoaded))
    }
}

/// A reference-counted [`ProvideCredentials`] that can be shared across clients.
#[derive(Clone, Debug)]
pub struct SharedCredentialsProvider(Arc<dyn ProvideCredentials>);

impl SharedCredentialsProvider {
    /// Wraps a provider.
    pub fn new(provider: impl ProvideCredentials + 'static) -> Self {
        SharedCredentialsProvider(Arc::new(provider))
    }
}

impl ProvideCredentials for SharedCredentialsProvider {
    fn provide_credentials(&self) -> ProvideCredentialsFuture<'_> {
        self.0.provide_credentials()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::from_keys("ANOTREAL", "sssh-secret", None);
        let debugged = format!("{:?}", creds);
        assert!(debugged.contains("ANOTREAL"));
        assert!(!debugged.contains("sssh-secret"));
    }

    #[tokio::test]
    async fn static_credentials_provide_themselves() {
        let creds = Credentials::from_keys("ANOTREAL", "secret", Some("token".into()));
        let provider = SharedCredentialsProvider::new(creds.clone());
        let loaded = provider.provide_credentials().await.expect("loads");
        assert_eq!(loaded, creds);
    }

    #[tokio::test]
    async fn no_credentials_is_a_typed_error() {
        let err = NoCredentials.provide_credentials().await.unwrap_err();
        assert!(matches!(err, CredentialsError::CredentialsNotLoaded));
    }
}
