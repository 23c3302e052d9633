/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Typed outcomes for operations.
//!
//! Every failure an operation can produce maps onto exactly one variant of
//! [`SdkError`]: the missing-resolver guard and endpoint resolution failures
//! become `ConstructionFailure`, transport failures become `DispatchFailure`,
//! and service responses become `ServiceError` (modeled) or `ResponseError`
//! (unparseable).

use bytes::Bytes;
use std::error::Error;
use std::fmt;

use crate::BoxError;

/// A failed operation.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according to the protocol (for example
    /// the server hung up while the body was being read).
    ResponseError {
        /// The raw HTTP response.
        raw: http::Response<Bytes>,
        /// The parse failure.
        err: BoxError,
    },

    /// An error response was received from the service.
    ServiceError {
        /// The raw HTTP response.
        raw: http::Response<Bytes>,
        /// The modeled service error.
        err: E,
    },
}

impl<E> SdkError<E> {
    /// Construct a `ConstructionFailure` from any error.
    pub fn construction(err: impl Into<BoxError>) -> Self {
        SdkError::ConstructionFailure(err.into())
    }

    /// Construct a `DispatchFailure` from any error.
    pub fn dispatch(err: impl Into<BoxError>) -> Self {
        SdkError::DispatchFailure(err.into())
    }

    /// Returns the modeled service error, if that is what this is.
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for SdkError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => {
                write!(f, "failed to construct request: {}", err)
            }
            SdkError::DispatchFailure(err) => write!(f, "failed to dispatch request: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "failed to parse response: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {:?}", err),
        }
    }
}

impl<E: Error + fmt::Debug + 'static> Error for SdkError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref() as _),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkError;
    use crate::endpoint;

    #[test]
    fn construction_failure_preserves_endpoint_error() {
        let err: SdkError<()> = SdkError::construction(endpoint::Error::missing_resolver());
        match err {
            SdkError::ConstructionFailure(inner) => {
                let endpoint_err = inner
                    .downcast_ref::<endpoint::Error>()
                    .expect("endpoint error");
                assert!(endpoint_err.is_missing_resolver());
            }
            _ => panic!("expected construction failure"),
        }
    }
}
