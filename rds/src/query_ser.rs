/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request serialization for the `awsQuery` protocol.
//!
//! Each operation's members flatten into percent-encoded `key=value` pairs,
//! prefixed by an `Action`/`Version` pair naming the operation. The same
//! member list is reused to build the query string of a presigned URL, so
//! serializers return pairs rather than a finished body.

use sdk_http::query::fmt_string;

use crate::input::{
    CopyDbSnapshotInput, CreateDbClusterInput, CreateDbInstanceInput, DeleteDbInstanceInput,
    DescribeDbClustersInput, DescribeDbInstancesInput, DescribeDbSnapshotsInput,
    StartDbInstanceAutomatedBackupsReplicationInput,
};

/// The API version every request carries.
pub(crate) const API_VERSION: &str = "2014-10-31";

pub(crate) type QueryParams = Vec<(&'static str, String)>;

/// Encodes an operation into its form-urlencoded body.
pub(crate) fn encode_body(action: &'static str, params: &QueryParams) -> String {
    let mut body = format!("Action={}&Version={}", action, API_VERSION);
    for (key, value) in params {
        body.push('&');
        body.push_str(key);
        body.push('=');
        body.push_str(&fmt_string(value));
    }
    body
}

fn push(params: &mut QueryParams, key: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        params.push((key, value.clone()));
    }
}

fn push_i32(params: &mut QueryParams, key: &'static str, value: Option<i32>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}

fn push_bool(params: &mut QueryParams, key: &'static str, value: Option<bool>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}

pub(crate) fn serialize_create_db_instance(input: &CreateDbInstanceInput) -> QueryParams {
    let mut params = vec![
        (
            "DBInstanceIdentifier",
            input.db_instance_identifier.clone(),
        ),
        ("DBInstanceClass", input.db_instance_class.clone()),
        ("Engine", input.engine.clone()),
    ];
    push(&mut params, "MasterUsername", &input.master_username);
    push(
        &mut params,
        "MasterUserPassword",
        &input.master_user_password,
    );
    push_i32(&mut params, "AllocatedStorage", input.allocated_storage);
    params
}

pub(crate) fn serialize_describe_db_instances(input: &DescribeDbInstancesInput) -> QueryParams {
    let mut params = Vec::new();
    push(
        &mut params,
        "DBInstanceIdentifier",
        &input.db_instance_identifier,
    );
    push_i32(&mut params, "MaxRecords", input.max_records);
    push(&mut params, "Marker", &input.marker);
    params
}

pub(crate) fn serialize_delete_db_instance(input: &DeleteDbInstanceInput) -> QueryParams {
    let mut params = vec![(
        "DBInstanceIdentifier",
        input.db_instance_identifier.clone(),
    )];
    push_bool(&mut params, "SkipFinalSnapshot", input.skip_final_snapshot);
    push(
        &mut params,
        "FinalDBSnapshotIdentifier",
        &input.final_db_snapshot_identifier,
    );
    params
}

pub(crate) fn serialize_describe_db_clusters(input: &DescribeDbClustersInput) -> QueryParams {
    let mut params = Vec::new();
    push(
        &mut params,
        "DBClusterIdentifier",
        &input.db_cluster_identifier,
    );
    push_i32(&mut params, "MaxRecords", input.max_records);
    push(&mut params, "Marker", &input.marker);
    params
}

pub(crate) fn serialize_describe_db_snapshots(input: &DescribeDbSnapshotsInput) -> QueryParams {
    let mut params = Vec::new();
    push(
        &mut params,
        "DBSnapshotIdentifier",
        &input.db_snapshot_identifier,
    );
    push(
        &mut params,
        "DBInstanceIdentifier",
        &input.db_instance_identifier,
    );
    push_i32(&mut params, "MaxRecords", input.max_records);
    push(&mut params, "Marker", &input.marker);
    params
}

/// `source_region` is deliberately absent: it only directs presigned URL
/// generation and must never reach the wire.
pub(crate) fn serialize_copy_db_snapshot(input: &CopyDbSnapshotInput) -> QueryParams {
    let mut params = vec![
        (
            "SourceDBSnapshotIdentifier",
            input.source_db_snapshot_identifier.clone(),
        ),
        (
            "TargetDBSnapshotIdentifier",
            input.target_db_snapshot_identifier.clone(),
        ),
    ];
    push(&mut params, "KmsKeyId", &input.kms_key_id);
    push_bool(&mut params, "CopyTags", input.copy_tags);
    push(&mut params, "PreSignedUrl", &input.pre_signed_url);
    params
}

pub(crate) fn serialize_create_db_cluster(input: &CreateDbClusterInput) -> QueryParams {
    let mut params = vec![
        (
            "DBClusterIdentifier",
            input.db_cluster_identifier.clone(),
        ),
        ("Engine", input.engine.clone()),
    ];
    push(&mut params, "MasterUsername", &input.master_username);
    push(
        &mut params,
        "MasterUserPassword",
        &input.master_user_password,
    );
    push_bool(&mut params, "StorageEncrypted", input.storage_encrypted);
    push(&mut params, "KmsKeyId", &input.kms_key_id);
    push(
        &mut params,
        "ReplicationSourceIdentifier",
        &input.replication_source_identifier,
    );
    push(&mut params, "PreSignedUrl", &input.pre_signed_url);
    params
}

pub(crate) fn serialize_start_db_instance_automated_backups_replication(
    input: &StartDbInstanceAutomatedBackupsReplicationInput,
) -> QueryParams {
    let mut params = vec![(
        "SourceDBInstanceArn",
        input.source_db_instance_arn.clone(),
    )];
    push_i32(
        &mut params,
        "BackupRetentionPeriod",
        input.backup_retention_period,
    );
    push(&mut params, "KmsKeyId", &input.kms_key_id);
    push(&mut params, "PreSignedUrl", &input.pre_signed_url);
    params
}
