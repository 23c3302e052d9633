/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Signing of whole HTTP requests: canonicalization, settings, and the
//! [`sign`] entry point.

mod canonical_request;
mod error;
mod sign;
#[cfg(test)]
mod test;

use std::time::Duration;

pub use error::SigningError;
pub use sign::{sign, SignableBody, SignableRequest, SigningInstructions};

/// Whether to add `x-amz-content-sha256` to the signed headers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayloadChecksumKind {
    /// Add the payload checksum header (required by some services, e.g. S3).
    XAmzSha256,
    /// Do not add the header. The checksum is still part of the canonical request.
    NoHeader,
}

/// Config value to specify how to encode the request URL when signing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UriEncoding {
    /// Re-encode the resulting URL (e.g. `%` becomes `%25`).
    Double,
    /// Take the URL as-is.
    Single,
}

/// Where the signature is placed on the outgoing request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignatureLocation {
    /// The `authorization` and `x-amz-*` headers. The normal request path.
    Headers,
    /// `X-Amz-*` query parameters. Used for presigned URLs.
    QueryParams,
}

/// Settings that alter signing behavior.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct SigningSettings {
    /// Whether to add `x-amz-content-sha256` to the signed headers.
    pub payload_checksum_kind: PayloadChecksumKind,
    /// How to encode the request URL.
    pub uri_encoding: UriEncoding,
    /// Where the signature goes.
    pub signature_location: SignatureLocation,
    /// How long a presigned URL stays valid. Required when
    /// `signature_location` is [`SignatureLocation::QueryParams`].
    pub expires_in: Option<Duration>,
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self {
            payload_checksum_kind: PayloadChecksumKind::NoHeader,
            uri_encoding: UriEncoding::Double,
            signature_location: SignatureLocation::Headers,
            expires_in: None,
        }
    }
}

/// Parameters to use when signing.
#[derive(Debug)]
#[non_exhaustive]
pub struct SigningParams<'a> {
    pub(crate) access_key: &'a str,
    pub(crate) secret_key: &'a str,
    pub(crate) security_token: Option<&'a str>,
    pub(crate) region: &'a str,
    pub(crate) service_name: &'a str,
    pub(crate) time: std::time::SystemTime,
    pub(crate) settings: SigningSettings,
}

impl<'a> SigningParams<'a> {
    /// Returns a builder that can create new `SigningParams`.
    pub fn builder() -> signing_params::Builder<'a> {
        Default::default()
    }

    /// The region the request will be signed for.
    pub fn region(&self) -> &str {
        self.region
    }

    /// The name of the service the request will be signed for.
    pub fn service_name(&self) -> &str {
        self.service_name
    }
}

/// Builder and error for creating [`SigningParams`].
pub mod signing_params {
    use super::{SigningParams, SigningSettings};
    use std::error::Error;
    use std::fmt;
    use std::time::SystemTime;

    /// [`SigningParams`] builder error.
    #[derive(Debug)]
    pub struct BuildError {
        reason: &'static str,
    }

    impl BuildError {
        fn new(reason: &'static str) -> Self {
            Self { reason }
        }
    }

    impl fmt::Display for BuildError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.reason)
        }
    }

    impl Error for BuildError {}

    /// Builder that can create new [`SigningParams`].
    #[derive(Debug, Default)]
    pub struct Builder<'a> {
        access_key: Option<&'a str>,
        secret_key: Option<&'a str>,
        security_token: Option<&'a str>,
        region: Option<&'a str>,
        service_name: Option<&'a str>,
        time: Option<SystemTime>,
        settings: Option<SigningSettings>,
    }

    impl<'a> Builder<'a> {
        /// Sets the access key (required).
        pub fn access_key(mut self, access_key: &'a str) -> Self {
            self.access_key = Some(access_key);
            self
        }
        /// Sets the secret key (required).
        pub fn secret_key(mut self, secret_key: &'a str) -> Self {
            self.secret_key = Some(secret_key);
            self
        }
        /// Sets the session token (optional).
        pub fn security_token(mut self, security_token: Option<&'a str>) -> Self {
            self.security_token = security_token;
            self
        }
        /// Sets the region (required).
        pub fn region(mut self, region: &'a str) -> Self {
            self.region = Some(region);
            self
        }
        /// Sets the signing name of the service (required).
        pub fn service_name(mut self, service_name: &'a str) -> Self {
            self.service_name = Some(service_name);
            self
        }
        /// Sets the time to be used in the signature (required).
        pub fn time(mut self, time: SystemTime) -> Self {
            self.time = Some(time);
            self
        }
        /// Sets additional signing settings (required).
        pub fn settings(mut self, settings: SigningSettings) -> Self {
            self.settings = Some(settings);
            self
        }
        /// Builds an instance of [`SigningParams`]. Yields a [`BuildError`] if
        /// a required argument was not given.
        pub fn build(self) -> Result<SigningParams<'a>, BuildError> {
            Ok(SigningParams {
                access_key: self
                    .access_key
                    .ok_or_else(|| BuildError::new("access key is required"))?,
                secret_key: self
                    .secret_key
                    .ok_or_else(|| BuildError::new("secret key is required"))?,
                security_token: self.security_token,
                region: self
                    .region
                    .ok_or_else(|| BuildError::new("region is required"))?,
                service_name: self
                    .service_name
                    .ok_or_else(|| BuildError::new("service name is required"))?,
                time: self
                    .time
                    .ok_or_else(|| BuildError::new("time is required"))?,
                settings: self
                    .settings
                    .ok_or_else(|| BuildError::new("settings are required"))?,
            })
        }
    }
}
