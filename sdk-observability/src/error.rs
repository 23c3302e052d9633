/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Observability Errors

use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error in the telemetry pipeline.
#[derive(Debug)]
pub struct ObservabilityError {
    kind: ErrorKind,
    source: BoxError,
}

/// The types of errors associated with [`ObservabilityError`].
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// An error flushing the metrics pipeline.
    MetricsFlushFailed,
    /// An error shutting down a meter provider.
    MetricsShutdownFailed,
    /// A custom error that does not fall under any other error kind.
    Other,
}

impl ObservabilityError {
    /// Create a new [`ObservabilityError`] from an [`ErrorKind`] and a source error.
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Other => write!(f, "unclassified error"),
            ErrorKind::MetricsFlushFailed => write!(f, "failed to flush metrics pipeline"),
            ErrorKind::MetricsShutdownFailed => write!(f, "failed to shut down meter provider"),
        }
    }
}

impl std::error::Error for ObservabilityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}
