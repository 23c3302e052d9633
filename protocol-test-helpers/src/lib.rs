/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Helpers to validate the HTTP requests the service clients produce in tests:
//! query-string assertions, header assertions, and media-type aware body
//! comparison.

use http::{Request, Uri};
use pretty_assertions::assert_eq as pretty_assert_eq;
use std::collections::HashSet;
use thiserror::Error;

/// The ways a request can fail validation.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    /// A `key=value` pair was expected in the query string but not found.
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        /// The expected `key=value` pair.
        expected: String,
        /// The params actually present.
        found: Vec<String>,
    },
    /// A query key that must not appear was present.
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam {
        /// The forbidden key.
        expected: String,
    },
    /// A query key that must appear was missing.
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam {
        /// The required key.
        expected: String,
    },
    /// A header was present with the wrong value.
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        /// The header name.
        key: String,
        /// The expected value.
        expected: String,
        /// The value actually present.
        found: String,
    },
    /// A required header was missing.
    #[error("missing required header: `{expected}`")]
    MissingHeader {
        /// The header name.
        expected: String,
    },
    /// The body did not match for the given media type.
    #[error("body did not match ({media_type}): {hint}")]
    BodyDidNotMatch {
        /// The media type the comparison used.
        media_type: String,
        /// Details about the mismatch.
        hint: String,
    },
    /// The body could not be parsed as the given media type.
    #[error("body is not valid {media_type}: {found}")]
    InvalidBodyFormat {
        /// The media type the body was expected to parse as.
        media_type: String,
        /// The unparseable input.
        found: String,
    },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    match inp {
        Ok(_) => (),
        Err(e) => {
            eprintln!("{}", e);
            panic!("protocol test failed");
        }
    }
}

#[derive(Eq, PartialEq, Hash)]
struct QueryParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> QueryParam<'a> {
    fn parse(s: &'a str) -> Self {
        let mut parsed = s.split('=');
        QueryParam {
            key: parsed.next().unwrap(),
            value: parsed.next(),
        }
    }
}

fn extract_params(uri: &Uri) -> HashSet<&str> {
    uri.query().unwrap_or_default().split('&').collect()
}

/// Requires that each `key=value` pair in `expected_params` appears verbatim
/// in the request's query string.
pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(ProtocolTestFailure::MissingQueryParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

/// Requires that none of `forbid_keys` appear as query string keys.
pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(request.uri())
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect();
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Requires that each of `require_keys` appears as a query string key.
pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys: HashSet<&str> = extract_params(request.uri())
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect();
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Requires each header in `expected_headers`, with multi-valued headers
/// compared as comma-delimited lists.
pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap())
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

/// The media type of a request body, which determines how bodies are compared.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaType {
    /// Compared as parsed JSON documents, ignoring key order.
    Json,
    /// Compared as sets of `key=value` pairs, ignoring order.
    UrlEncodedForm,
    /// Compared byte for byte.
    Other,
}

/// Compares `actual_body` against `expected_body` according to `media_type`.
pub fn validate_body(
    actual_body: &[u8],
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    match media_type {
        MediaType::Json => {
            let actual: serde_json::Value = serde_json::from_slice(actual_body).map_err(|e| {
                ProtocolTestFailure::InvalidBodyFormat {
                    media_type: "JSON".to_string(),
                    found: format!("{} {:?}", e, String::from_utf8_lossy(actual_body)),
                }
            })?;
            let expected: serde_json::Value = serde_json::from_str(expected_body).map_err(|e| {
                ProtocolTestFailure::InvalidBodyFormat {
                    media_type: "JSON".to_string(),
                    found: format!("{} {:?}", e, expected_body),
                }
            })?;
            if actual != expected {
                return Err(ProtocolTestFailure::BodyDidNotMatch {
                    media_type: "JSON".to_string(),
                    hint: format!("expected `{}`, got `{}`", expected, actual),
                });
            }
            Ok(())
        }
        MediaType::UrlEncodedForm => {
            let parse = |body: &str| -> HashSet<String> {
                body.split('&').map(|kv| kv.to_string()).collect()
            };
            let actual = match std::str::from_utf8(actual_body) {
                Ok(body) => parse(body),
                Err(_) => {
                    return Err(ProtocolTestFailure::InvalidBodyFormat {
                        media_type: "x-www-form-urlencoded".to_string(),
                        found: format!("{:?}", actual_body),
                    })
                }
            };
            let expected = parse(expected_body);
            if actual != expected {
                let missing: Vec<_> = expected.difference(&actual).cloned().collect();
                let extra: Vec<_> = actual.difference(&expected).cloned().collect();
                return Err(ProtocolTestFailure::BodyDidNotMatch {
                    media_type: "x-www-form-urlencoded".to_string(),
                    hint: format!("missing params: {:?}, unexpected params: {:?}", missing, extra),
                });
            }
            Ok(())
        }
        MediaType::Other => {
            pretty_assert_eq!(
                std::str::from_utf8(actual_body),
                Ok(expected_body),
                "body mismatch"
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_query_params, require_query_params, validate_body, validate_headers,
        validate_query_string, MediaType, ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_empty_query_string() {
        let request = Request::builder().uri("/foo").body(()).unwrap();
        validate_query_string(&request, &[]).expect("no required params should pass");
        validate_query_string(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_query_string() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        validate_query_string(&request, &["a=b"]).expect("a=b is in the query string");
        validate_query_string(&request, &["c", "a=b"])
            .expect("both params are in the query string");
        validate_query_string(&request, &["a=b", "c", "d=efg", "hello=a%20b"])
            .expect("all params are in the query string");
        validate_query_string(&request, &[]).expect("no required params should pass");

        validate_query_string(&request, &["a"]).expect_err("no parameter should match");
        validate_query_string(&request, &["a=bc"]).expect_err("no parameter should match");
        validate_query_string(&request, &["hell=a%20"]).expect_err("no parameter should match");
    }

    #[test]
    fn test_forbid_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        forbid_query_params(&request, &["a"]).expect_err("a is a query param");
        forbid_query_params(&request, &["not_included"]).expect("query param not included");
        forbid_query_params(&request, &["a=b"]).expect("should be matching against keys");
        forbid_query_params(&request, &["c"]).expect_err("c is a query param");
    }

    #[test]
    fn test_require_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        require_query_params(&request, &["a"]).expect("a is a query param");
        require_query_params(&request, &["not_included"]).expect_err("query param not included");
        require_query_params(&request, &["a=b"]).expect_err("should be matching against keys");
        require_query_params(&request, &["c"]).expect("c is a query param");
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        validate_body(br#"{"a":1,"b":"two"}"#, r#"{"b":"two","a":1}"#, MediaType::Json)
            .expect("identical modulo key order");
        validate_body(br#"{"a":1}"#, r#"{"a":2}"#, MediaType::Json)
            .expect_err("different values");
        validate_body(b"not json", r#"{}"#, MediaType::Json).expect_err("unparseable");
    }

    #[test]
    fn test_validate_form_body() {
        validate_body(
            b"Action=DescribeDBInstances&Version=2014-10-31",
            "Version=2014-10-31&Action=DescribeDBInstances",
            MediaType::UrlEncodedForm,
        )
        .expect("order does not matter");
        validate_body(
            b"Action=DescribeDBInstances",
            "Action=CopyDBSnapshot",
            MediaType::UrlEncodedForm,
        )
        .expect_err("different params");
    }
}
