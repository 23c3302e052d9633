/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Endpoint model and the `ResolveEndpoint` trait.
//!
//! Every operation resolves an [`Endpoint`] before it is dispatched. A client
//! without a resolver, or a resolver that fails, surfaces the typed
//! [`Error`] in this module rather than panicking.

use std::borrow::Cow;
use std::str::FromStr;

use http::uri::{Authority, Uri};

use crate::BoxError;

/// Convenience alias for endpoint resolution results.
pub type Result = std::result::Result<Endpoint, Error>;

/// Resolves an [`Endpoint`] for a given set of parameters.
pub trait ResolveEndpoint<Params>: Send + Sync {
    /// Resolve the endpoint to use for a request.
    fn resolve_endpoint(&self, params: &Params) -> Result;
}

// Closures and functions from `Params` to an endpoint result are resolvers.
impl<Resolver, Params> ResolveEndpoint<Params> for Resolver
where
    Resolver: Fn(&Params) -> Result + Send + Sync,
{
    fn resolve_endpoint(&self, params: &Params) -> Result {
        (self)(params)
    }
}

/// Endpoint resolution failure.
#[derive(Debug)]
pub struct Error {
    message: String,
    missing_resolver: bool,
    extra: Option<BoxError>,
}

impl Error {
    /// Create an [`Error`] with a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            missing_resolver: false,
            extra: None,
        }
    }

    /// The error produced when a client is constructed without an endpoint
    /// resolver. This check runs before anything else in an operation.
    pub fn missing_resolver() -> Self {
        Self {
            message: "no endpoint resolver was configured on the client".into(),
            missing_resolver: true,
            extra: None,
        }
    }

    /// Attach an underlying cause.
    pub fn with_cause(self, cause: impl Into<BoxError>) -> Self {
        Self {
            extra: Some(cause.into()),
            ..self
        }
    }

    /// True when this error came from the missing-resolver guard.
    pub fn is_missing_resolver(&self) -> bool {
        self.missing_resolver
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.extra.as_ref().map(|err| err.as_ref() as _)
    }
}

/// A resolved API endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: http::Uri,

    /// If true, the authority of this endpoint is used verbatim and service
    /// customizations never alter it.
    immutable: bool,
}

impl Endpoint {
    /// Create a new endpoint from a URI.
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: false,
        }
    }

    /// Create a new immutable endpoint from a URI. Use this for localstack-style
    /// overrides where the authority must be used exactly as given.
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: true,
        }
    }

    /// The URI of this endpoint.
    pub fn uri(&self) -> &http::Uri {
        &self.uri
    }

    /// Sets this endpoint on `uri`, merging any path prefix carried by the
    /// endpoint with the operation's own path and query.
    pub fn set_endpoint(&self, uri: &mut http::Uri) {
        let authority = self
            .uri
            .authority()
            .as_ref()
            .map(|auth| auth.as_str())
            .unwrap_or("");
        let authority = Authority::from_str(authority).expect("resolved endpoint has an authority");
        let scheme = *self.uri.scheme().as_ref().expect("scheme must be provided");
        let new_uri = Uri::builder()
            .authority(authority)
            .scheme(scheme.clone())
            .path_and_query(Self::merge_paths(&self.uri, uri).as_ref())
            .build()
            .expect("valid uri");
        *uri = new_uri;
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

// Static `Endpoint`s can be passed in place of a function that dynamically
// resolves endpoints. This is how endpoint overrides are expressed.
impl<T> ResolveEndpoint<T> for Endpoint {
    fn resolve_endpoint(&self, _: &T) -> Result {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod test {
    use http::Uri;

    use crate::endpoint::{Endpoint, Error};

    #[test]
    fn set_endpoint_on_operation_uri() {
        let ep = Endpoint::mutable(Uri::from_static("https://rds.us-east-1.amazonaws.com"));
        let mut uri = Uri::from_static("/?Action=DescribeDBInstances");
        ep.set_endpoint(&mut uri);
        assert_eq!(
            uri,
            Uri::from_static("https://rds.us-east-1.amazonaws.com/?Action=DescribeDBInstances")
        );
    }

    #[test]
    fn endpoint_with_path_prefix() {
        for endpoint in &[
            // check that trailing slashes are properly normalized
            "https://glue.us-east-1.amazonaws.com/private",
            "https://glue.us-east-1.amazonaws.com/private/",
        ] {
            let ep = Endpoint::immutable(Uri::from_static(endpoint));
            let mut uri = Uri::from_static("/?k=v");
            ep.set_endpoint(&mut uri);
            assert_eq!(
                uri,
                Uri::from_static("https://glue.us-east-1.amazonaws.com/private/?k=v")
            );
        }
    }

    #[test]
    fn set_endpoint_empty_path() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri);
        assert_eq!(uri, Uri::from_static("http://localhost:8000/"))
    }

    #[test]
    fn missing_resolver_error_is_typed() {
        let err = Error::missing_resolver();
        assert!(err.is_missing_resolver());
        assert!(!Error::message("something else").is_missing_resolver());
    }
}
