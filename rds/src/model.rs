/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes returned by RDS operations.
//!
//! These shapes are deserialized from XML by hand (see `xml_deser`), so they
//! carry no serde derives.

use sdk_types::DateTime;

/// The connection endpoint of a DB instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstanceEndpoint {
    /// The DNS address of the instance.
    pub address: Option<String>,
    /// The port the database engine listens on.
    pub port: Option<i32>,
}

/// An Amazon RDS DB instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DbInstance {
    /// The user-supplied database identifier.
    pub db_instance_identifier: Option<String>,
    /// The compute and memory capacity class.
    pub db_instance_class: Option<String>,
    /// The database engine, e.g. `postgres`.
    pub engine: Option<String>,
    /// The current state of this instance.
    pub db_instance_status: Option<String>,
    /// The master username.
    pub master_username: Option<String>,
    /// The allocated storage size in gibibytes.
    pub allocated_storage: Option<i32>,
    /// The connection endpoint, absent while the instance is being created.
    pub endpoint: Option<InstanceEndpoint>,
    /// The availability zone the instance is located in.
    pub availability_zone: Option<String>,
    /// The date and time the instance was created.
    pub instance_create_time: Option<DateTime>,
    /// The Amazon Resource Name for the instance.
    pub db_instance_arn: Option<String>,
}

/// A snapshot of a DB instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DbSnapshot {
    /// The identifier for the snapshot.
    pub db_snapshot_identifier: Option<String>,
    /// The identifier of the instance this snapshot was taken from.
    pub db_instance_identifier: Option<String>,
    /// When the snapshot was taken.
    pub snapshot_create_time: Option<DateTime>,
    /// The database engine.
    pub engine: Option<String>,
    /// The status of this snapshot, e.g. `available`.
    pub status: Option<String>,
    /// The allocated storage size in gibibytes.
    pub allocated_storage: Option<i32>,
    /// The region the snapshot was copied from, for cross-region copies.
    pub source_region: Option<String>,
    /// True if the snapshot is encrypted.
    pub encrypted: Option<bool>,
    /// The KMS key identifier for an encrypted snapshot.
    pub kms_key_id: Option<String>,
    /// The Amazon Resource Name for the snapshot.
    pub db_snapshot_arn: Option<String>,
}

/// An Aurora DB cluster.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DbCluster {
    /// The user-supplied cluster identifier.
    pub db_cluster_identifier: Option<String>,
    /// The database engine.
    pub engine: Option<String>,
    /// The current state of this cluster.
    pub status: Option<String>,
    /// The master username.
    pub master_username: Option<String>,
    /// True if the cluster is encrypted.
    pub storage_encrypted: Option<bool>,
    /// The KMS key identifier for an encrypted cluster.
    pub kms_key_id: Option<String>,
    /// The ARN of the source if this cluster is a read replica.
    pub replication_source_identifier: Option<String>,
    /// The time the cluster was created.
    pub cluster_create_time: Option<DateTime>,
    /// The Amazon Resource Name for the cluster.
    pub db_cluster_arn: Option<String>,
}

/// An automated backup for a DB instance, replicated in another region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DbInstanceAutomatedBackup {
    /// The ARN of the source DB instance.
    pub db_instance_arn: Option<String>,
    /// The resource id of the source DB instance.
    pub dbi_resource_id: Option<String>,
    /// The region the backups are replicated to.
    pub region: Option<String>,
    /// The state of the replication, e.g. `replicating`.
    pub status: Option<String>,
    /// The KMS key identifier used to encrypt the replicated backups.
    pub kms_key_id: Option<String>,
    /// The retention period for the replicated backups, in days.
    pub backup_retention_period: Option<i32>,
}
