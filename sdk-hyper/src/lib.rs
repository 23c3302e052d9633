/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP dispatch for the service clients.
//!
//! [`HyperAdapter`] is the connector used by default: a hyper client over a
//! TLS connector that buffers response bodies into [`Bytes`]. The
//! [`test_connection`] module provides a canned connector for tests.

pub mod test_connection;

use bytes::Bytes;
use hyper::client::HttpConnector;
use hyper_tls::HttpsConnector;
use sdk_http::body::SdkBody;
use sdk_http::BoxError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// A boxed future returned by [`SmithyConnector::call`].
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// An error occurring while a request was in flight.
#[derive(Debug)]
pub struct DispatchError {
    source: BoxError,
}

impl DispatchError {
    /// Creates a new [`DispatchError`] from the underlying connector error.
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to dispatch request")
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Dispatches a single HTTP request and buffers the response body.
pub trait SmithyConnector: Send + Sync {
    /// Send `req` and resolve once the full response body has arrived.
    fn call(
        &self,
        req: http::Request<SdkBody>,
    ) -> BoxFuture<Result<http::Response<Bytes>, DispatchError>>;
}

/// A connection backed by a hyper client with TLS.
#[derive(Clone)]
pub struct HyperAdapter {
    client: hyper::Client<HttpsConnector<HttpConnector>, SdkBody>,
}

impl HyperAdapter {
    /// Creates a connector with a fresh TLS context.
    pub fn new() -> Self {
        Self {
            client: hyper::Client::builder().build::<_, SdkBody>(HttpsConnector::new()),
        }
    }
}

impl Default for HyperAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SmithyConnector for HyperAdapter {
    fn call(
        &self,
        req: http::Request<SdkBody>,
    ) -> BoxFuture<Result<http::Response<Bytes>, DispatchError>> {
        let client = self.client.clone();
        Box::pin(async move {
            tracing::debug!(uri = %req.uri(), "dispatching request");
            let response = client.request(req).await.map_err(DispatchError::new)?;
            let (parts, body) = response.into_parts();
            let body = hyper::body::to_bytes(body)
                .await
                .map_err(DispatchError::new)?;
            Ok(http::Response::from_parts(parts, body))
        })
    }
}
