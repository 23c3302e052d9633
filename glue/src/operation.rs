/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Per-operation response parsers.
//!
//! Error status codes are discriminated into the operation's error enum;
//! success bodies deserialize into the operation's output. A success body
//! that fails to deserialize becomes an `Unhandled` error carrying the
//! parse failure, so callers always get a typed result.

use bytes::Bytes;

use sdk_http::response::ParseStrictResponse;

macro_rules! strict_response_parser {
    ($op:ident, $output:ident, $error:ident) => {
        #[doc = concat!("Parses `", stringify!($op), "` responses.")]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $op;

        impl ParseStrictResponse for $op {
            type Output = Result<crate::output::$output, crate::error::$error>;

            fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                if !response.status().is_success() {
                    let meta = crate::json_deser::parse_generic_error(response);
                    return Err(crate::error::$error::from_meta(meta));
                }
                crate::json_deser::parse_body(response.body()).map_err(|err| {
                    crate::error::$error::Unhandled(
                        sdk_types::Error::builder()
                            .code("InvalidResponse")
                            .message(format!("failed to parse response body: {}", err))
                            .build(),
                    )
                })
            }
        }
    };
}

strict_response_parser!(CreateDatabase, CreateDatabaseOutput, CreateDatabaseError);
strict_response_parser!(GetDatabase, GetDatabaseOutput, GetDatabaseError);
strict_response_parser!(DeleteDatabase, DeleteDatabaseOutput, DeleteDatabaseError);
strict_response_parser!(CreateTable, CreateTableOutput, CreateTableError);
strict_response_parser!(GetTables, GetTablesOutput, GetTablesError);
strict_response_parser!(CreateJob, CreateJobOutput, CreateJobError);
strict_response_parser!(StartJobRun, StartJobRunOutput, StartJobRunError);
strict_response_parser!(GetJobRun, GetJobRunOutput, GetJobRunError);

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GetDatabaseError;
    use bytes::Bytes;
    use sdk_http::response::ParseStrictResponse;

    #[test]
    fn success_body_parses_into_output() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"Database":{"Name":"analytics","CreateTime":1622837979.0}}"#,
            ))
            .unwrap();
        let output = GetDatabase.parse(&response).unwrap();
        let database = output.database.unwrap();
        assert_eq!(database.name.as_deref(), Some("analytics"));
        assert_eq!(database.create_time.unwrap().secs(), 1622837979);
    }

    #[test]
    fn error_status_maps_to_modeled_variant() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{"__type":"EntityNotFoundException","message":"Database gone"}"#,
            ))
            .unwrap();
        let err = GetDatabase.parse(&response).unwrap_err();
        assert!(matches!(
            err,
            GetDatabaseError::EntityNotFoundException(_)
        ));
    }

    #[test]
    fn malformed_success_body_is_unhandled() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"<html>not json</html>"))
            .unwrap();
        let err = GetDatabase.parse(&response).unwrap_err();
        match err {
            GetDatabaseError::Unhandled(meta) => {
                assert_eq!(meta.code(), Some("InvalidResponse"))
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
