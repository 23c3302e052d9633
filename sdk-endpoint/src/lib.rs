/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Region types, endpoint parameters, and the default endpoint resolver.

mod region;

pub use region::{Region, SigningRegion};

use http::Uri;
use sdk_http::endpoint::{Endpoint, Error as EndpointError, ResolveEndpoint};

/// The parameter set an endpoint is resolved from.
///
/// For cross-region presigned URLs the same resolver is invoked a second time
/// with parameters built from the request's source-region field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointParams {
    region: Option<Region>,
}

impl EndpointParams {
    /// Creates parameters for `region`.
    pub fn new(region: Option<Region>) -> Self {
        Self { region }
    }

    /// The region to resolve for.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }
}

/// Resolves `https://{service}.{region}.{dns suffix}` for a fixed service.
///
/// This is the resolver clients install by default. Endpoint overrides are
/// expressed by installing a static [`Endpoint`] in its place.
#[derive(Clone, Debug)]
pub struct DefaultEndpointResolver {
    service: &'static str,
}

impl DefaultEndpointResolver {
    /// Creates a resolver for `service`, e.g. `"rds"`.
    pub fn new(service: &'static str) -> Self {
        Self { service }
    }

    fn dns_suffix(region: &str) -> &'static str {
        if region.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        }
    }
}

impl ResolveEndpoint<EndpointParams> for DefaultEndpointResolver {
    fn resolve_endpoint(&self, params: &EndpointParams) -> Result<Endpoint, EndpointError> {
        let region = params
            .region()
            .ok_or_else(|| EndpointError::message("no region in endpoint params"))?;
        let uri: Uri = format!(
            "https://{}.{}.{}",
            self.service,
            region.as_ref(),
            Self::dns_suffix(region.as_ref())
        )
        .parse()
        .map_err(|err| {
            EndpointError::message(format!(
                "constructed an invalid endpoint for region `{}`",
                region
            ))
            .with_cause(err)
        })?;
        Ok(Endpoint::mutable(uri))
    }
}
