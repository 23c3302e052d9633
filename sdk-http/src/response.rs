/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// Parse structured data from a fully-loaded HTTP response.
///
/// All operations in this workspace are request/response style with bodies
/// that are read to completion before parsing, so parsing is pure and
/// synchronous. This keeps the parsers trivially testable with canned
/// responses.
pub trait ParseStrictResponse {
    /// The output of parsing: typically `Result<OperationOutput, OperationError>`.
    type Output;

    /// Parse the response.
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}
