/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs, deserialized from the XML result documents.

use crate::model::{DbCluster, DbInstance, DbInstanceAutomatedBackup, DbSnapshot};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateDbInstanceOutput {
    /// The instance being created.
    pub db_instance: Option<DbInstance>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeDbInstancesOutput {
    /// The matching instances.
    pub db_instances: Vec<DbInstance>,
    /// A pagination marker, present when more records are available.
    pub marker: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteDbInstanceOutput {
    /// The instance being deleted.
    pub db_instance: Option<DbInstance>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeDbClustersOutput {
    /// The matching clusters.
    pub db_clusters: Vec<DbCluster>,
    /// A pagination marker, present when more records are available.
    pub marker: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeDbSnapshotsOutput {
    /// The matching snapshots.
    pub db_snapshots: Vec<DbSnapshot>,
    /// A pagination marker, present when more records are available.
    pub marker: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CopyDbSnapshotOutput {
    /// The snapshot copy being created.
    pub db_snapshot: Option<DbSnapshot>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateDbClusterOutput {
    /// The cluster being created.
    pub db_cluster: Option<DbCluster>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartDbInstanceAutomatedBackupsReplicationOutput {
    /// The automated backup replication that was started.
    pub db_instance_automated_backup: Option<DbInstanceAutomatedBackup>,
}
