/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Presigned URL generation for cross-region operations.
//!
//! A presigned URL is a GET rendition of the same operation, signed with
//! SigV4 query parameters against the *source* region's endpoint, with a
//! `DestinationRegion` parameter naming the region the request is actually
//! sent to. The destination region's service validates the signature before
//! reading from the source region.

use std::fmt;
use std::time::{Duration, SystemTime};

use http::Uri;

use sdk_auth::Credentials;
use sdk_endpoint::{EndpointParams, Region, SigningRegion};
use sdk_http::query_writer::QueryWriter;
use sdk_sigv4::http_request::{
    sign, SignableBody, SignableRequest, SignatureLocation, SigningParams, SigningSettings,
};

use crate::config::Config;
use crate::query_ser::{QueryParams, API_VERSION};

const ONE_WEEK: Duration = Duration::from_secs(604_800);

/// Configuration for generated presigned URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresigningConfig {
    expires_in: Duration,
}

impl PresigningConfig {
    /// Creates a config with the given expiration, which may not exceed one
    /// week.
    pub fn expires_in(expires_in: Duration) -> Result<Self, PresigningConfigError> {
        if expires_in > ONE_WEEK {
            return Err(PresigningConfigError::ExpiresInDurationTooLong);
        }
        Ok(PresigningConfig { expires_in })
    }
}

impl Default for PresigningConfig {
    /// One hour, matching what the service itself generates for
    /// cross-region copies.
    fn default() -> Self {
        PresigningConfig {
            expires_in: Duration::from_secs(3600),
        }
    }
}

/// Presigning configuration was invalid.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PresigningConfigError {
    /// The requested expiration exceeds the one week maximum.
    ExpiresInDurationTooLong,
}

impl fmt::Display for PresigningConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresigningConfigError::ExpiresInDurationTooLong => {
                write!(f, "presigned URLs can be valid for at most one week")
            }
        }
    }
}

impl std::error::Error for PresigningConfigError {}

/// An error produced while generating a presigned URL.
#[derive(Debug)]
pub struct PresigningError {
    message: String,
}

impl PresigningError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        PresigningError {
            message: message.into(),
        }
    }
}

impl fmt::Display for PresigningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to generate presigned URL: {}", self.message)
    }
}

impl std::error::Error for PresigningError {}

/// Builds and signs the source-region URL for a cross-region operation.
///
/// `params` are the operation's own members (minus `PreSignedUrl`); the
/// destination region is appended as `DestinationRegion` before signing.
pub(crate) fn presign_source_url(
    conf: &Config,
    credentials: &Credentials,
    source_region: &Region,
    destination_region: &Region,
    action: &'static str,
    params: &QueryParams,
) -> Result<String, PresigningError> {
    let resolver = conf
        .endpoint_resolver
        .as_ref()
        .ok_or_else(|| PresigningError::new("no endpoint resolver configured"))?;
    let endpoint = resolver
        .resolve_endpoint(&EndpointParams::new(Some(source_region.clone())))
        .map_err(|err| PresigningError::new(err.to_string()))?;
    let mut uri = Uri::from_static("/");
    endpoint.set_endpoint(&mut uri);

    let mut writer = QueryWriter::new(&uri);
    writer.insert("Action", action);
    writer.insert("Version", API_VERSION);
    for (key, value) in params {
        writer.insert(key, value);
    }
    writer.insert("DestinationRegion", destination_region.as_ref());
    let uri = writer.build();

    let mut settings = SigningSettings::default();
    settings.signature_location = SignatureLocation::QueryParams;
    settings.expires_in = Some(conf.presigning.expires_in);
    // The URL authorizes an action in the source region, so that is the
    // signing region rather than the client's own.
    let signing_region = SigningRegion::from(source_region.clone());
    let signing_params = SigningParams::builder()
        .access_key(credentials.access_key_id())
        .secret_key(credentials.secret_access_key())
        .security_token(credentials.session_token())
        .region(signing_region.as_ref())
        .service_name(conf.signing_service())
        .time(SystemTime::now())
        .settings(settings)
        .build()
        .map_err(|err| PresigningError::new(err.to_string()))?;

    let headers = http::HeaderMap::new();
    let signable = SignableRequest::new(
        &http::Method::GET,
        &uri,
        &headers,
        SignableBody::Bytes(b""),
    );
    let (instructions, _signature) = sign(signable, &signing_params)
        .map_err(|err| PresigningError::new(err.to_string()))?
        .into_parts();

    let mut request = http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(())
        .map_err(|err| PresigningError::new(err.to_string()))?;
    instructions.apply_to_request(&mut request);
    Ok(request.uri().to_string())
}
