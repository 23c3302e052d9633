/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::header::{AUTHORIZATION, HOST};

use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use rds::error::DescribeDbInstancesError;
use rds::{Client, Config, Credentials, Region, SdkError};
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

fn body_str(request: &http::Request<SdkBody>) -> String {
    std::str::from_utf8(request.body().bytes().unwrap())
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn create_db_instance_request_is_signed_form_post() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://rds.us-east-1.amazonaws.com/")
            .body(SdkBody::from(
                "Action=CreateDBInstance&Version=2014-10-31\
                 &DBInstanceIdentifier=database-1&DBInstanceClass=db.m5.large\
                 &Engine=mysql&AllocatedStorage=20",
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                b"<CreateDBInstanceResponse>\
                    <CreateDBInstanceResult>\
                      <DBInstance>\
                        <DBInstanceIdentifier>database-1</DBInstanceIdentifier>\
                        <DBInstanceStatus>creating</DBInstanceStatus>\
                      </DBInstance>\
                    </CreateDBInstanceResult>\
                  </CreateDBInstanceResponse>",
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    let output = client
        .create_db_instance()
        .db_instance_identifier("database-1")
        .db_instance_class("db.m5.large")
        .engine("mysql")
        .allocated_storage(20)
        .send()
        .await
        .expect("valid request");

    let instance = output.db_instance.unwrap();
    assert_eq!(instance.db_instance_status.as_deref(), Some("creating"));

    conn.assert_requests_match(&[]);
    let requests = conn.requests();
    let request = &requests[0].actual;
    assert_ok(validate_headers(
        request,
        &[("content-type", "application/x-www-form-urlencoded")],
    ));
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        "Action=CreateDBInstance&Version=2014-10-31\
         &DBInstanceIdentifier=database-1&DBInstanceClass=db.m5.large\
         &Engine=mysql&AllocatedStorage=20",
        MediaType::UrlEncodedForm,
    ));
    assert_eq!(
        request.headers().get(HOST).unwrap(),
        "rds.us-east-1.amazonaws.com"
    );
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .expect("request is signed")
        .to_str()
        .unwrap();
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=ANOTREAL/"));
    assert!(authorization.contains("/us-east-1/rds/aws4_request"));
    assert!(request.headers().contains_key("x-amz-date"));
    assert!(request.headers().contains_key("x-amz-security-token"));
}

#[tokio::test]
async fn describe_db_instances_parses_xml_response() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://rds.us-east-1.amazonaws.com/")
            .body(SdkBody::from("Action=DescribeDBInstances&Version=2014-10-31"))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                b"<DescribeDBInstancesResponse>\
                    <DescribeDBInstancesResult>\
                      <DBInstances>\
                        <DBInstance>\
                          <DBInstanceIdentifier>database-1</DBInstanceIdentifier>\
                          <Engine>mysql</Engine>\
                          <DBInstanceStatus>available</DBInstanceStatus>\
                          <Endpoint>\
                            <Address>database-1.abc123.us-east-1.rds.amazonaws.com</Address>\
                            <Port>3306</Port>\
                          </Endpoint>\
                          <InstanceCreateTime>2021-06-04T19:39:39.600Z</InstanceCreateTime>\
                        </DBInstance>\
                      </DBInstances>\
                      <Marker>page-2</Marker>\
                    </DescribeDBInstancesResult>\
                    <ResponseMetadata>\
                      <RequestId>523e3218-afc7-11c3-90f5</RequestId>\
                    </ResponseMetadata>\
                  </DescribeDBInstancesResponse>",
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    let output = client
        .describe_db_instances()
        .send()
        .await
        .expect("successful response");

    assert_eq!(output.db_instances.len(), 1);
    let instance = &output.db_instances[0];
    assert_eq!(instance.db_instance_identifier.as_deref(), Some("database-1"));
    assert_eq!(instance.db_instance_status.as_deref(), Some("available"));
    let endpoint = instance.endpoint.as_ref().unwrap();
    assert_eq!(
        endpoint.address.as_deref(),
        Some("database-1.abc123.us-east-1.rds.amazonaws.com")
    );
    assert_eq!(endpoint.port, Some(3306));
    assert_eq!(
        instance.instance_create_time.as_ref().unwrap().secs(),
        1622835579
    );
    assert_eq!(output.marker.as_deref(), Some("page-2"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn copy_db_snapshot_generates_presigned_url() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://rds.us-east-1.amazonaws.com/")
            .body(SdkBody::from(""))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                b"<CopyDBSnapshotResponse>\
                    <CopyDBSnapshotResult>\
                      <DBSnapshot>\
                        <DBSnapshotIdentifier>nightly-copy</DBSnapshotIdentifier>\
                        <Status>pending</Status>\
                      </DBSnapshot>\
                    </CopyDBSnapshotResult>\
                  </CopyDBSnapshotResponse>",
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    client
        .copy_db_snapshot()
        .source_db_snapshot_identifier("arn:aws:rds:us-west-2:123456789012:snapshot:nightly")
        .target_db_snapshot_identifier("nightly-copy")
        .source_region("us-west-2")
        .send()
        .await
        .expect("successful response");

    // The signature varies with the clock, so inspect the captured
    // request instead of matching a canned body.
    let requests = conn.requests();
    let body = body_str(&requests[0].actual);
    assert!(!body.contains("SourceRegion"));
    let url = form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == "PreSignedUrl")
        .map(|(_, value)| value.to_string())
        .expect("presigned url was generated");
    assert!(url.starts_with("https://rds.us-west-2.amazonaws.com/?"));
    assert!(url.contains("Action=CopyDBSnapshot"));
    assert!(url.contains("DestinationRegion=us-east-1"));
    assert!(url.contains("X-Amz-Algorithm=AWS4-HMAC-SHA256"));
    assert!(url.contains("X-Amz-Credential=ANOTREAL%2F"));
    assert!(url.contains("%2Fus-west-2%2Frds%2Faws4_request"));
    assert!(url.contains("X-Amz-Expires=3600"));
    assert!(url.contains("X-Amz-Signature="));
}

#[tokio::test]
async fn copy_db_snapshot_keeps_explicit_presigned_url() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://rds.us-east-1.amazonaws.com/")
            .body(SdkBody::from(
                "Action=CopyDBSnapshot&Version=2014-10-31\
                 &SourceDBSnapshotIdentifier=arn%3Aaws%3Ards%3Aus-west-2%3A123456789012%3Asnapshot%3Anightly\
                 &TargetDBSnapshotIdentifier=nightly-copy\
                 &PreSignedUrl=https%3A%2F%2Fexample.com%2Fpresigned",
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                b"<CopyDBSnapshotResponse><CopyDBSnapshotResult/></CopyDBSnapshotResponse>",
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    client
        .copy_db_snapshot()
        .source_db_snapshot_identifier("arn:aws:rds:us-west-2:123456789012:snapshot:nightly")
        .target_db_snapshot_identifier("nightly-copy")
        .source_region("us-west-2")
        .pre_signed_url("https://example.com/presigned")
        .send()
        .await
        .expect("successful response");

    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn start_automated_backups_replication_generates_presigned_url() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://rds.us-east-1.amazonaws.com/")
            .body(SdkBody::from(""))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                b"<StartDBInstanceAutomatedBackupsReplicationResponse>\
                    <StartDBInstanceAutomatedBackupsReplicationResult>\
                      <DBInstanceAutomatedBackup>\
                        <DBInstanceArn>arn:aws:rds:us-west-2:123456789012:db:database-1</DBInstanceArn>\
                        <Status>pending</Status>\
                        <BackupRetentionPeriod>7</BackupRetentionPeriod>\
                      </DBInstanceAutomatedBackup>\
                    </StartDBInstanceAutomatedBackupsReplicationResult>\
                  </StartDBInstanceAutomatedBackupsReplicationResponse>",
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    let output = client
        .start_db_instance_automated_backups_replication()
        .source_db_instance_arn("arn:aws:rds:us-west-2:123456789012:db:database-1")
        .backup_retention_period(7)
        .source_region("us-west-2")
        .send()
        .await
        .expect("successful response");

    let backup = output.db_instance_automated_backup.unwrap();
    assert_eq!(backup.status.as_deref(), Some("pending"));
    assert_eq!(backup.backup_retention_period, Some(7));

    let requests = conn.requests();
    let body = body_str(&requests[0].actual);
    assert!(body.starts_with(
        "Action=StartDBInstanceAutomatedBackupsReplication&Version=2014-10-31"
    ));
    assert!(!body.contains("SourceRegion"));
    let url = form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == "PreSignedUrl")
        .map(|(_, value)| value.to_string())
        .expect("presigned url was generated");
    assert!(url.starts_with("https://rds.us-west-2.amazonaws.com/?"));
    assert!(url.contains("Action=StartDBInstanceAutomatedBackupsReplication"));
    assert!(url.contains("DestinationRegion=us-east-1"));
    assert!(url.contains("X-Amz-Signature="));
}

#[tokio::test]
async fn service_error_maps_to_modeled_fault() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://rds.us-east-1.amazonaws.com/")
            .body(SdkBody::from(
                "Action=DescribeDBInstances&Version=2014-10-31&DBInstanceIdentifier=missing",
            ))
            .unwrap(),
        http::Response::builder()
            .status(404)
            .body(Bytes::from_static(
                b"<ErrorResponse>\
                    <Error>\
                      <Type>Sender</Type>\
                      <Code>DBInstanceNotFound</Code>\
                      <Message>DBInstance missing not found.</Message>\
                    </Error>\
                    <RequestId>fa0eb2a5-98f1-4465-b2c9</RequestId>\
                  </ErrorResponse>",
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn);

    let err = client
        .describe_db_instances()
        .db_instance_identifier("missing")
        .send()
        .await
        .expect_err("service returned an error");

    match &err {
        SdkError::ServiceError { raw, err } => {
            assert_eq!(raw.status(), 404);
            match err {
                DescribeDbInstancesError::DbInstanceNotFoundFault(inner) => {
                    assert_eq!(
                        inner.message.as_deref(),
                        Some("DBInstance missing not found.")
                    );
                    assert_eq!(inner.request_id(), Some("fa0eb2a5-98f1-4465-b2c9"));
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
        .describe_db_instances()
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
    assert_eq!(conn.requests().len(), 0);
}

#[tokio::test]
async fn missing_required_member_fails_before_dispatch() {
    let conn = TestConnection::new(vec![]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    let err = client
        .copy_db_snapshot()
        .source_db_snapshot_identifier("nightly")
        .send()
        .await;
    match err {
        Err(SdkError::ConstructionFailure(inner)) => {
            assert!(inner.to_string().contains("target_db_snapshot_identifier"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(conn.requests().len(), 0);
}
