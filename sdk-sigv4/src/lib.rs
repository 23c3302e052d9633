/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! SigV4 request signing.
//!
//! Two signing modes are supported: header signing for ordinary requests,
//! and query-parameter signing for presigned URLs (used by the cross-region
//! copy/replicate operations).

mod date_fmt;
pub mod http_request;
pub mod sign;

/// The output of signing: the thing that was signed, plus the signature itself.
#[derive(Debug)]
pub struct SigningOutput<T> {
    output: T,
    signature: String,
}

impl<T> SigningOutput<T> {
    /// Creates a new [`SigningOutput`].
    pub fn new(output: T, signature: String) -> Self {
        Self { output, signature }
    }

    /// The signed output.
    pub fn output(&self) -> &T {
        &self.output
    }

    /// The hex-encoded signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Splits this into the output and the signature.
    pub fn into_parts(self) -> (T, String) {
        (self.output, self.signature)
    }
}
