/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response deserialization for the `awsQuery` protocol.
//!
//! Responses are small, so the tokenizer output is collected into an
//! in-memory element tree and fields are pulled out by name. Namespace
//! prefixes are dropped; only local names matter here.

use std::fmt;

use sdk_types::DateTime;
use xmlparser::{ElementEnd, Token, Tokenizer};

use crate::model::{
    DbCluster, DbInstance, DbInstanceAutomatedBackup, DbSnapshot, InstanceEndpoint,
};
use crate::output::{
    CopyDbSnapshotOutput, CreateDbClusterOutput, CreateDbInstanceOutput, DeleteDbInstanceOutput,
    DescribeDbClustersOutput, DescribeDbInstancesOutput, DescribeDbSnapshotsOutput,
    StartDbInstanceAutomatedBackupsReplicationOutput,
};

/// The response body was not parseable XML.
#[derive(Debug)]
pub(crate) struct XmlDecodeError {
    message: String,
}

impl XmlDecodeError {
    fn new(message: impl Into<String>) -> Self {
        XmlDecodeError {
            message: message.into(),
        }
    }
}

impl fmt::Display for XmlDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decode XML response: {}", self.message)
    }
}

impl std::error::Error for XmlDecodeError {}

/// One XML element with its text content and children.
#[derive(Debug, Default)]
pub(crate) struct Elem {
    name: String,
    text: String,
    children: Vec<Elem>,
}

impl Elem {
    /// Parses a full document into its root element.
    pub(crate) fn parse(xml: &str) -> Result<Elem, XmlDecodeError> {
        let mut stack: Vec<Elem> = Vec::new();
        for token in Tokenizer::from(xml) {
            let token = token.map_err(|err| XmlDecodeError::new(err.to_string()))?;
            match token {
                Token::ElementStart { local, .. } => {
                    stack.push(Elem {
                        name: local.as_str().to_string(),
                        ..Default::default()
                    });
                }
                Token::ElementEnd { end, .. } => match end {
                    ElementEnd::Open => {}
                    ElementEnd::Close(..) | ElementEnd::Empty => {
                        let finished = stack
                            .pop()
                            .ok_or_else(|| XmlDecodeError::new("unbalanced close tag"))?;
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(finished),
                            // the root element is done; trailing tokens are ignored
                            None => return Ok(finished),
                        }
                    }
                },
                Token::Text { text } => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(text.as_str());
                    }
                }
                _ => {}
            }
        }
        Err(XmlDecodeError::new("no root element"))
    }

    fn get(&self, name: &str) -> Option<&Elem> {
        self.children.iter().find(|child| child.name == name)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Elem> {
        self.children.iter().filter(move |child| child.name == name)
    }

    fn text_of(&self, name: &str) -> Option<String> {
        let text = self.get(name)?.text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    fn i32_of(&self, name: &str) -> Option<i32> {
        self.text_of(name)?.parse().ok()
    }

    fn bool_of(&self, name: &str) -> Option<bool> {
        self.text_of(name)?.parse().ok()
    }

    fn date_of(&self, name: &str) -> Option<DateTime> {
        DateTime::from_rfc3339(&self.text_of(name)?).ok()
    }
}

fn deser_instance_endpoint(elem: &Elem) -> InstanceEndpoint {
    InstanceEndpoint {
        address: elem.text_of("Address"),
        port: elem.i32_of("Port"),
    }
}

fn deser_db_instance(elem: &Elem) -> DbInstance {
    DbInstance {
        db_instance_identifier: elem.text_of("DBInstanceIdentifier"),
        db_instance_class: elem.text_of("DBInstanceClass"),
        engine: elem.text_of("Engine"),
        db_instance_status: elem.text_of("DBInstanceStatus"),
        master_username: elem.text_of("MasterUsername"),
        allocated_storage: elem.i32_of("AllocatedStorage"),
        endpoint: elem.get("Endpoint").map(deser_instance_endpoint),
        availability_zone: elem.text_of("AvailabilityZone"),
        instance_create_time: elem.date_of("InstanceCreateTime"),
        db_instance_arn: elem.text_of("DBInstanceArn"),
    }
}

fn deser_db_snapshot(elem: &Elem) -> DbSnapshot {
    DbSnapshot {
        db_snapshot_identifier: elem.text_of("DBSnapshotIdentifier"),
        db_instance_identifier: elem.text_of("DBInstanceIdentifier"),
        snapshot_create_time: elem.date_of("SnapshotCreateTime"),
        engine: elem.text_of("Engine"),
        status: elem.text_of("Status"),
        allocated_storage: elem.i32_of("AllocatedStorage"),
        source_region: elem.text_of("SourceRegion"),
        encrypted: elem.bool_of("Encrypted"),
        kms_key_id: elem.text_of("KmsKeyId"),
        db_snapshot_arn: elem.text_of("DBSnapshotArn"),
    }
}

fn deser_db_cluster(elem: &Elem) -> DbCluster {
    DbCluster {
        db_cluster_identifier: elem.text_of("DBClusterIdentifier"),
        engine: elem.text_of("Engine"),
        status: elem.text_of("Status"),
        master_username: elem.text_of("MasterUsername"),
        storage_encrypted: elem.bool_of("StorageEncrypted"),
        kms_key_id: elem.text_of("KmsKeyId"),
        replication_source_identifier: elem.text_of("ReplicationSourceIdentifier"),
        cluster_create_time: elem.date_of("ClusterCreateTime"),
        db_cluster_arn: elem.text_of("DBClusterArn"),
    }
}

fn deser_db_instance_automated_backup(elem: &Elem) -> DbInstanceAutomatedBackup {
    DbInstanceAutomatedBackup {
        db_instance_arn: elem.text_of("DBInstanceArn"),
        dbi_resource_id: elem.text_of("DbiResourceId"),
        region: elem.text_of("Region"),
        status: elem.text_of("Status"),
        kms_key_id: elem.text_of("KmsKeyId"),
        backup_retention_period: elem.i32_of("BackupRetentionPeriod"),
    }
}

/// Locates `<{Action}Result>` under the response root, tolerating a root
/// that already is the result element.
fn result_elem<'a>(root: &'a Elem, result_name: &str) -> &'a Elem {
    root.get(result_name).unwrap_or(root)
}

fn parse_root(body: &[u8]) -> Result<Elem, XmlDecodeError> {
    let text =
        std::str::from_utf8(body).map_err(|_| XmlDecodeError::new("response body is not UTF-8"))?;
    Elem::parse(text)
}

pub(crate) fn parse_create_db_instance(
    body: &[u8],
) -> Result<CreateDbInstanceOutput, XmlDecodeError> {
    let root = parse_root(body)?;
    let result = result_elem(&root, "CreateDBInstanceResult");
    Ok(CreateDbInstanceOutput {
        db_instance: result.get("DBInstance").map(deser_db_instance),
    })
}

pub(crate) fn parse_describe_db_instances(
    body: &[u8],
) -> Result<DescribeDbInstancesOutput, XmlDecodeError> {
    let root = parse_root(body)?;
    let result = result_elem(&root, "DescribeDBInstancesResult");
    let db_instances = result
        .get("DBInstances")
        .map(|list| list.children_named("DBInstance").map(deser_db_instance).collect())
        .unwrap_or_default();
    Ok(DescribeDbInstancesOutput {
        db_instances,
        marker: result.text_of("Marker"),
    })
}

pub(crate) fn parse_delete_db_instance(
    body: &[u8],
) -> Result<DeleteDbInstanceOutput, XmlDecodeError> {
    let root = parse_root(body)?;
    let result = result_elem(&root, "DeleteDBInstanceResult");
    Ok(DeleteDbInstanceOutput {
        db_instance: result.get("DBInstance").map(deser_db_instance),
    })
}

pub(crate) fn parse_describe_db_clusters(
    body: &[u8],
) -> Result<DescribeDbClustersOutput, XmlDecodeError> {
    let root = parse_root(body)?;
    let result = result_elem(&root, "DescribeDBClustersResult");
    let db_clusters = result
        .get("DBClusters")
        .map(|list| list.children_named("DBCluster").map(deser_db_cluster).collect())
        .unwrap_or_default();
    Ok(DescribeDbClustersOutput {
        db_clusters,
        marker: result.text_of("Marker"),
    })
}

pub(crate) fn parse_describe_db_snapshots(
    body: &[u8],
) -> Result<DescribeDbSnapshotsOutput, XmlDecodeError> {
    let root = parse_root(body)?;
    let result = result_elem(&root, "DescribeDBSnapshotsResult");
    let db_snapshots = result
        .get("DBSnapshots")
        .map(|list| list.children_named("DBSnapshot").map(deser_db_snapshot).collect())
        .unwrap_or_default();
    Ok(DescribeDbSnapshotsOutput {
        db_snapshots,
        marker: result.text_of("Marker"),
    })
}

pub(crate) fn parse_copy_db_snapshot(body: &[u8]) -> Result<CopyDbSnapshotOutput, XmlDecodeError> {
    let root = parse_root(body)?;
    let result = result_elem(&root, "CopyDBSnapshotResult");
    Ok(CopyDbSnapshotOutput {
        db_snapshot: result.get("DBSnapshot").map(deser_db_snapshot),
    })
}

pub(crate) fn parse_create_db_cluster(
    body: &[u8],
) -> Result<CreateDbClusterOutput, XmlDecodeError> {
    let root = parse_root(body)?;
    let result = result_elem(&root, "CreateDBClusterResult");
    Ok(CreateDbClusterOutput {
        db_cluster: result.get("DBCluster").map(deser_db_cluster),
    })
}

pub(crate) fn parse_start_db_instance_automated_backups_replication(
    body: &[u8],
) -> Result<StartDbInstanceAutomatedBackupsReplicationOutput, XmlDecodeError> {
    let root = parse_root(body)?;
    let result = result_elem(&root, "StartDBInstanceAutomatedBackupsReplicationResult");
    Ok(StartDbInstanceAutomatedBackupsReplicationOutput {
        db_instance_automated_backup: result
            .get("DBInstanceAutomatedBackup")
            .map(deser_db_instance_automated_backup),
    })
}

/// Extracts the generic error metadata from an `<ErrorResponse>` document.
///
/// Malformed error bodies still produce generic metadata with whatever
/// could be recovered, so error mapping never fails.
pub(crate) fn parse_generic_error(body: &[u8]) -> sdk_types::Error {
    let mut err = sdk_types::Error::builder();
    if let Ok(root) = parse_root(body) {
        let error = root.get("Error").unwrap_or(&root);
        if let Some(code) = error.text_of("Code") {
            err = err.code(code);
        }
        if let Some(message) = error.text_of("Message") {
            err = err.message(message);
        }
        if let Some(request_id) = root.text_of("RequestId") {
            err = err.request_id(request_id);
        }
    }
    err.build()
}
