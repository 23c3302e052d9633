/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Service configuration.

use std::sync::Arc;

use sdk_auth::{ProvideCredentials, SharedCredentialsProvider};
use sdk_endpoint::{DefaultEndpointResolver, EndpointParams, Region};
use sdk_http::endpoint::ResolveEndpoint;

use crate::presigning::PresigningConfig;

/// Configuration for an RDS [`Client`](crate::Client).
#[derive(Clone)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: SharedCredentialsProvider,
    pub(crate) endpoint_resolver: Option<Arc<dyn ResolveEndpoint<EndpointParams>>>,
    pub(crate) presigning: PresigningConfig,
}

impl Config {
    /// Returns a builder with the default regional endpoint resolver and no
    /// credentials configured.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The signing name for this service.
    pub(crate) fn signing_service(&self) -> &'static str {
        "rds"
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("presigning", &self.presigning)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Config`].
#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    credentials_provider: Option<SharedCredentialsProvider>,
    endpoint_resolver: Option<Arc<dyn ResolveEndpoint<EndpointParams>>>,
    no_endpoint_resolver: bool,
    presigning: Option<PresigningConfig>,
}

impl Builder {
    /// Sets the region used for endpoint resolution and request signing.
    /// This is also the `DestinationRegion` of generated presigned URLs.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the credentials provider used to sign requests.
    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials_provider = Some(SharedCredentialsProvider::new(provider));
        self
    }

    /// Overrides the endpoint resolver. A static
    /// [`Endpoint`](sdk_http::endpoint::Endpoint) may be passed directly to
    /// route every request to a fixed URI.
    pub fn endpoint_resolver(
        mut self,
        resolver: impl ResolveEndpoint<EndpointParams> + 'static,
    ) -> Self {
        self.endpoint_resolver = Some(Arc::new(resolver));
        self
    }

    /// Removes the endpoint resolver entirely. Every operation then fails
    /// during construction with a missing-resolver error instead of being
    /// dispatched.
    pub fn no_endpoint_resolver(mut self) -> Self {
        self.no_endpoint_resolver = true;
        self.endpoint_resolver = None;
        self
    }

    /// Overrides the expiration of generated presigned URLs.
    pub fn presigning_config(mut self, presigning: PresigningConfig) -> Self {
        self.presigning = Some(presigning);
        self
    }

    /// Builds the [`Config`].
    pub fn build(self) -> Config {
        let endpoint_resolver = if self.no_endpoint_resolver {
            None
        } else {
            Some(self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultEndpointResolver::new("rds"))
                    as Arc<dyn ResolveEndpoint<EndpointParams>>
            }))
        };
        Config {
            region: self.region,
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| SharedCredentialsProvider::new(sdk_auth::NoCredentials)),
            endpoint_resolver,
            presigning: self.presigning.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use sdk_endpoint::{EndpointParams, Region};
    use sdk_http::endpoint::ResolveEndpoint;

    #[test]
    fn default_resolver_targets_the_regional_endpoint() {
        let conf = Config::builder().region(Region::new("us-west-2")).build();
        let resolver = conf.endpoint_resolver.as_ref().unwrap();
        let endpoint = resolver
            .resolve_endpoint(&EndpointParams::new(Some(Region::new("us-west-2"))))
            .unwrap();
        assert_eq!(
            endpoint.uri(),
            &http::Uri::from_static("https://rds.us-west-2.amazonaws.com")
        );
    }
}
