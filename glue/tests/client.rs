/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::header::{AUTHORIZATION, HOST};

use glue::error::GetDatabaseError;
use glue::model::{DatabaseInput, JobRunState};
use glue::{Client, Config, Credentials, Region, SdkError};
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use sdk_http::body::SdkBody;
use sdk_hyper::test_connection::TestConnection;

fn test_config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys(
            "ANOTREAL",
            "notrealrnrELgWzOk3IfjzDKtFBhDby",
            Some("notarealsessiontoken".to_string()),
        ))
        .build()
}

#[tokio::test]
async fn create_database_request_has_target_and_signature() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://glue.us-east-1.amazonaws.com/")
            .body(SdkBody::from(r#"{"DatabaseInput":{"Name":"analytics"}}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{}"))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    client
        .create_database()
        .database_input(DatabaseInput::builder().name("analytics").build())
        .send()
        .await
        .expect("valid request");

    conn.assert_requests_match(&[]);
    let requests = conn.requests();
    let request = &requests[0].actual;
    assert_ok(validate_headers(
        request,
        &[
            ("x-amz-target", "AWSGlue.CreateDatabase"),
            ("content-type", "application/x-amz-json-1.1"),
        ],
    ));
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"DatabaseInput":{"Name":"analytics"}}"#,
        MediaType::Json,
    ));
    assert_eq!(
        request.headers().get(HOST).unwrap(),
        "glue.us-east-1.amazonaws.com"
    );
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .expect("request is signed")
        .to_str()
        .unwrap();
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=ANOTREAL/"));
    assert!(authorization.contains("/us-east-1/glue/aws4_request"));
    assert!(authorization.contains("SignedHeaders="));
    assert!(request.headers().contains_key("x-amz-date"));
    assert!(request.headers().contains_key("x-amz-security-token"));
}

#[tokio::test]
async fn get_database_parses_output() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://glue.us-east-1.amazonaws.com/")
            .body(SdkBody::from(r#"{"Name":"analytics"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"Database":{"Name":"analytics","LocationUri":"s3://bucket/analytics/","CreateTime":1622837979.0}}"#,
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    let output = client
        .get_database()
        .name("analytics")
        .send()
        .await
        .expect("successful response");

    let database = output.database.unwrap();
    assert_eq!(database.name.as_deref(), Some("analytics"));
    assert_eq!(
        database.location_uri.as_deref(),
        Some("s3://bucket/analytics/")
    );
    assert_eq!(database.create_time.unwrap().secs(), 1622837979);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn get_tables_round_trips_pagination_token() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://glue.us-east-1.amazonaws.com/")
            .body(SdkBody::from(
                r#"{"DatabaseName":"analytics","NextToken":"page-2","MaxResults":5}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"TableList":[{"Name":"events","DatabaseName":"analytics"}],"NextToken":"page-3"}"#,
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    let output = client
        .get_tables()
        .database_name("analytics")
        .next_token("page-2")
        .max_results(5)
        .send()
        .await
        .expect("successful response");

    let tables = output.table_list.unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].name.as_deref(), Some("events"));
    assert_eq!(output.next_token.as_deref(), Some("page-3"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn get_job_run_parses_state() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://glue.us-east-1.amazonaws.com/")
            .body(SdkBody::from(
                r#"{"JobName":"nightly-etl","RunId":"jr_0123"}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"JobRun":{"Id":"jr_0123","JobName":"nightly-etl","JobRunState":"SUCCEEDED","ExecutionTime":182}}"#,
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    let output = client
        .get_job_run()
        .job_name("nightly-etl")
        .run_id("jr_0123")
        .send()
        .await
        .expect("successful response");

    let job_run = output.job_run.unwrap();
    assert_eq!(job_run.job_run_state, Some(JobRunState::Succeeded));
    assert_eq!(job_run.execution_time, Some(182));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn service_error_maps_to_modeled_variant() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://glue.us-east-1.amazonaws.com/")
            .body(SdkBody::from(r#"{"Name":"missing"}"#))
            .unwrap(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "83b0d3e7")
            .body(Bytes::from_static(
                br#"{"__type":"com.amazonaws.glue#EntityNotFoundException","message":"Database missing not found"}"#,
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn);

    let err = client
        .get_database()
        .name("missing")
        .send()
        .await
        .expect_err("service returned an error");

    match &err {
        SdkError::ServiceError { raw, err } => {
            assert_eq!(raw.status(), 400);
            match err {
                GetDatabaseError::EntityNotFoundException(inner) => {
                    assert_eq!(inner.message.as_deref(), Some("Database missing not found"));
                    assert_eq!(inner.request_id(), Some("83b0d3e7"));
                }
                other => panic!("unexpected variant: {:?}", other),
            }
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn missing_endpoint_resolver_fails_during_construction() {
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys(
            "ANOTREAL",
            "notrealrnrELgWzOk3IfjzDKtFBhDby",
            None,
        ))
        .no_endpoint_resolver()
        .build();
    let conn = TestConnection::new(vec![]);
    let client = Client::from_conf_conn(conf, conn.clone());

    let err = client
        .get_database()
        .name("analytics")
        .send()
        .await
        .expect_err("no endpoint resolver configured");

    match err {
        SdkError::ConstructionFailure(inner) => {
            let endpoint_err = inner
                .downcast_ref::<sdk_http::endpoint::Error>()
                .expect("endpoint error");
            assert!(endpoint_err.is_missing_resolver());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // nothing was dispatched
    assert_eq!(conn.requests().len(), 0);
}

#[tokio::test]
async fn missing_required_member_fails_before_dispatch() {
    let conn = TestConnection::new(vec![]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    let err = client.get_job_run().job_name("nightly-etl").send().await;
    match err {
        Err(SdkError::ConstructionFailure(inner)) => {
            assert!(inner.to_string().contains("run_id"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(conn.requests().len(), 0);
}
