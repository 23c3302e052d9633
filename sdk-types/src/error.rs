/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error metadata shared by all modeled service errors.

use std::collections::HashMap;
use std::fmt;

/// Generic error returned by a service.
///
/// Modeled error variants embed an `Error` so that the code, message and
/// request id survive even when the specific error shape is not recognized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    extras: HashMap<&'static str, String>,
}

impl Error {
    /// Returns a builder for `Error`.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The error code returned by the service, e.g. `EntityNotFoundException`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The human readable message returned by the service.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The request id, when the service returned one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Additional protocol-specific metadata attached during parsing.
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras.get(key).map(|v| v.as_str())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the request id.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Attaches an extra key/value pair.
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner.extras.insert(key, value.into());
        self
    }

    /// Builds the [`Error`].
    pub fn build(self) -> Error {
        self.inner
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn error_display_includes_code_and_message() {
        let err = Error::builder()
            .code("ThrottlingException")
            .message("slow down")
            .build();
        let displayed = format!("{}", err);
        assert!(displayed.contains("ThrottlingException"));
        assert!(displayed.contains("slow down"));
    }
}
