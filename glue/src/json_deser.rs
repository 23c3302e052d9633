/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response deserialization for the `awsJson1_1` protocol.

use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Deserializes a success body. Some operations return an empty body in
/// place of `{}`, so empty is treated as the empty document.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.is_empty() {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

/// Extracts the generic error metadata from an error response.
///
/// The error code is taken from the `x-amzn-errortype` header when present,
/// falling back to the `__type` member of the body. Either source may carry
/// a namespace prefix and instance metadata which are stripped, e.g.
/// `com.amazonaws.glue#EntityNotFoundException:http://...` becomes
/// `EntityNotFoundException`.
pub(crate) fn parse_generic_error(response: &http::Response<Bytes>) -> sdk_types::Error {
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap_or_default();
    let mut err = sdk_types::Error::builder();

    let header_code = response
        .headers()
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok());
    let body_code = body
        .get("__type")
        .or_else(|| body.get("code"))
        .and_then(|value| value.as_str());
    if let Some(code) = header_code.or(body_code) {
        err = err.code(sanitize_error_code(code));
    }

    let message = body
        .get("message")
        .or_else(|| body.get("Message"))
        .and_then(|value| value.as_str());
    if let Some(message) = message {
        err = err.message(message);
    }

    let request_id = response
        .headers()
        .get("x-amzn-requestid")
        .and_then(|value| value.to_str().ok());
    if let Some(request_id) = request_id {
        err = err.request_id(request_id);
    }

    err.build()
}

fn sanitize_error_code(code: &str) -> &str {
    let code = code.split(':').next().unwrap_or(code);
    match code.rsplit_once('#') {
        Some((_namespace, shape)) => shape,
        None => code,
    }
}

#[cfg(test)]
mod test {
    use super::{parse_body, parse_generic_error, sanitize_error_code};
    use crate::output::GetTablesOutput;
    use bytes::Bytes;

    #[test]
    fn error_code_prefixes_are_stripped() {
        assert_eq!(
            sanitize_error_code("com.amazonaws.glue#EntityNotFoundException"),
            "EntityNotFoundException"
        );
        assert_eq!(
            sanitize_error_code("InvalidInputException:http://internal.amazon.com/coral/"),
            "InvalidInputException"
        );
        assert_eq!(sanitize_error_code("ThrottlingException"), "ThrottlingException");
    }

    #[test]
    fn header_error_type_wins_over_body_type() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "EntityNotFoundException")
            .header("x-amzn-requestid", "0f1e2d3c")
            .body(Bytes::from_static(
                br#"{"__type":"SomethingElse","message":"no such database"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("EntityNotFoundException"));
        assert_eq!(err.message(), Some("no such database"));
        assert_eq!(err.request_id(), Some("0f1e2d3c"));
    }

    #[test]
    fn empty_body_parses_as_empty_document() {
        let output: GetTablesOutput = parse_body(b"").unwrap();
        assert_eq!(output, GetTablesOutput::default());
    }
}
