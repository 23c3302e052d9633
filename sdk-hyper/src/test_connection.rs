/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A basic test connection. It will:
//! - Respond to requests with a preloaded series of responses
//! - Record requests for future examination

use crate::{BoxFuture, DispatchError, SmithyConnector};
use bytes::Bytes;
use http::header::HeaderName;
use sdk_http::body::SdkBody;
use std::ops::Deref;
use std::sync::{Arc, Mutex};

type ConnectVec = Vec<(http::Request<SdkBody>, http::Response<Bytes>)>;

/// An expected request paired with the request that actually arrived.
pub struct ValidateRequest {
    /// The request the test expected to see.
    pub expected: http::Request<SdkBody>,
    /// The request the client actually produced.
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Asserts that `actual` matches `expected`, with `ignore_headers` exempted.
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("header {:?} missing", name));
                assert_eq!(actual_header, value, "header mismatch for {:?}", name);
            }
        }
        let actual_str = std::str::from_utf8(actual.body().bytes().unwrap_or(&[]));
        let expected_str = std::str::from_utf8(expected.body().bytes().unwrap_or(&[]));
        match (actual_str, expected_str) {
            (Ok(actual), Ok(expected)) => assert_eq!(actual, expected),
            _ => assert_eq!(actual.body().bytes(), expected.body().bytes()),
        };
        assert_eq!(actual.uri(), expected.uri());
    }
}

/// A connector that replays canned responses.
///
/// Usage example:
/// ```rust
/// use bytes::Bytes;
/// use sdk_http::body::SdkBody;
/// use sdk_hyper::test_connection::TestConnection;
/// let events = vec![(
///     http::Request::new(SdkBody::from("request body")),
///     http::Response::builder()
///         .status(200)
///         .body(Bytes::from_static(b"response body"))
///         .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// ```
#[derive(Clone)]
pub struct TestConnection {
    data: Arc<Mutex<ConnectVec>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl TestConnection {
    /// Creates a test connection that answers requests with `data`, in order.
    pub fn new(mut data: ConnectVec) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    /// The requests received so far, paired with the expected requests.
    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    /// Asserts that every canned response was consumed.
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers);
        }
        let remaining = self.data.lock().unwrap().len();
        assert_eq!(remaining, 0, "{} canned responses were never used", remaining);
    }
}

impl SmithyConnector for TestConnection {
    fn call(
        &self,
        actual: http::Request<SdkBody>,
    ) -> BoxFuture<Result<http::Response<Bytes>, DispatchError>> {
        let result = if let Some((expected, resp)) = self.data.lock().unwrap().pop() {
            self.requests
                .lock()
                .unwrap()
                .push(ValidateRequest { actual, expected });
            Ok(resp)
        } else {
            Err(DispatchError::new("no more canned responses"))
        };
        Box::pin(std::future::ready(result))
    }
}

#[cfg(test)]
mod tests {
    use super::TestConnection;
    use crate::SmithyConnector;
    use bytes::Bytes;
    use sdk_http::body::SdkBody;

    #[tokio::test]
    async fn replays_responses_in_order() {
        let conn = TestConnection::new(vec![
            (
                http::Request::new(SdkBody::from("first")),
                http::Response::builder()
                    .status(200)
                    .body(Bytes::from_static(b"one"))
                    .unwrap(),
            ),
            (
                http::Request::new(SdkBody::from("second")),
                http::Response::builder()
                    .status(500)
                    .body(Bytes::from_static(b"two"))
                    .unwrap(),
            ),
        ]);

        let resp = conn
            .call(http::Request::new(SdkBody::from("first")))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.body().as_ref(), b"one");

        let resp = conn
            .call(http::Request::new(SdkBody::from("second")))
            .await
            .unwrap();
        assert_eq!(resp.status(), 500);

        let err = conn
            .call(http::Request::new(SdkBody::from("third")))
            .await
            .unwrap_err();
        assert!(format!("{:?}", err).contains("no more canned responses"));

        conn.assert_requests_match(&[]);
    }
}
