/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Service configuration.

use std::sync::Arc;

use sdk_auth::{ProvideCredentials, SharedCredentialsProvider};
use sdk_endpoint::Region;
use sdk_endpoint::{DefaultEndpointResolver, EndpointParams};
use sdk_http::endpoint::ResolveEndpoint;

/// Configuration for a Glue [`Client`](crate::Client).
#[derive(Clone)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: SharedCredentialsProvider,
    pub(crate) endpoint_resolver: Option<Arc<dyn ResolveEndpoint<EndpointParams>>>,
}

impl Config {
    /// Returns a builder with the default regional endpoint resolver and no
    /// credentials configured.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The signing name for this service.
    pub(crate) fn signing_service(&self) -> &'static str {
        "glue"
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
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
}

impl Builder {
    /// Sets the region used for endpoint resolution and request signing.
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

    /// Builds the [`Config`].
    pub fn build(self) -> Config {
        let endpoint_resolver = if self.no_endpoint_resolver {
            None
        } else {
            Some(self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultEndpointResolver::new("glue"))
                    as Arc<dyn ResolveEndpoint<EndpointParams>>
            }))
        };
        Config {
            region: self.region,
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| SharedCredentialsProvider::new(sdk_auth::NoCredentials)),
            endpoint_resolver,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use sdk_endpoint::Region;
    use sdk_endpoint::EndpointParams;
    use sdk_http::endpoint::ResolveEndpoint;

    #[test]
    fn default_resolver_targets_the_regional_endpoint() {
        let conf = Config::builder().region(Region::new("eu-west-1")).build();
        let resolver = conf.endpoint_resolver.as_ref().unwrap();
        let endpoint = resolver
            .resolve_endpoint(&EndpointParams::new(Some(Region::new("eu-west-1"))))
            .unwrap();
        assert_eq!(
            endpoint.uri(),
            &http::Uri::from_static("https://glue.eu-west-1.amazonaws.com")
        );
    }

    #[test]
    fn no_endpoint_resolver_clears_the_default() {
        let conf = Config::builder().no_endpoint_resolver().build();
        assert!(conf.endpoint_resolver.is_none());
    }
}
