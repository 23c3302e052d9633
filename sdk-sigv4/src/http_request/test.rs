/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request fixture shared between the tests of several modules. This is the
//! `get-vanilla-query-order-key-case` case from the SigV4 test suite.

pub(crate) fn test_request() -> http::Request<&'static str> {
    http::Request::builder()
        .uri("https://example.amazonaws.com/?Param2=value2&Param1=value1")
        .header("host", "example.amazonaws.com")
        .header("x-amz-date", "20150830T123600Z")
        .body("")
        .expect("valid request")
}
