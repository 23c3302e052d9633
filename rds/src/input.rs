/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs and their builders.
//!
//! The cross-region inputs (`CopyDbSnapshotInput`, `CreateDbClusterInput`,
//! `StartDbInstanceAutomatedBackupsReplicationInput`) carry a
//! `source_region` member that is never serialized: it only directs
//! presigned URL generation on the client side.

use sdk_http::operation::BuildError;
use sdk_endpoint::Region;

/// Requires a field to be set, naming it in the error when it is not.
fn required<T>(field: Option<T>, name: &'static str) -> Result<T, BuildError> {
    field.ok_or(BuildError::MissingField {
        field: name,
        details: "cannot be empty or unset",
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateDbInstanceInput {
    /// The DB instance identifier, stored lowercased.
    pub db_instance_identifier: String,
    /// The compute and memory capacity class, e.g. `db.m5.large`.
    pub db_instance_class: String,
    /// The database engine.
    pub engine: String,
    /// The name for the master user.
    pub master_username: Option<String>,
    /// The password for the master user.
    pub master_user_password: Option<String>,
    /// The amount of storage in gibibytes to allocate.
    pub allocated_storage: Option<i32>,
}

impl CreateDbInstanceInput {
    pub fn builder() -> create_db_instance_input::Builder {
        create_db_instance_input::Builder::default()
    }
}

pub mod create_db_instance_input {
    use super::*;

    /// Builder for [`CreateDbInstanceInput`](super::CreateDbInstanceInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) db_instance_identifier: Option<String>,
        pub(crate) db_instance_class: Option<String>,
        pub(crate) engine: Option<String>,
        pub(crate) master_username: Option<String>,
        pub(crate) master_user_password: Option<String>,
        pub(crate) allocated_storage: Option<i32>,
    }

    impl Builder {
        pub fn db_instance_identifier(mut self, value: impl Into<String>) -> Self {
            self.db_instance_identifier = Some(value.into());
            self
        }

        pub fn db_instance_class(mut self, value: impl Into<String>) -> Self {
            self.db_instance_class = Some(value.into());
            self
        }

        pub fn engine(mut self, value: impl Into<String>) -> Self {
            self.engine = Some(value.into());
            self
        }

        pub fn master_username(mut self, value: impl Into<String>) -> Self {
            self.master_username = Some(value.into());
            self
        }

        pub fn master_user_password(mut self, value: impl Into<String>) -> Self {
            self.master_user_password = Some(value.into());
            self
        }

        pub fn allocated_storage(mut self, value: i32) -> Self {
            self.allocated_storage = Some(value);
            self
        }

        pub fn build(self) -> Result<CreateDbInstanceInput, BuildError> {
            Ok(CreateDbInstanceInput {
                db_instance_identifier: required(
                    self.db_instance_identifier,
                    "db_instance_identifier",
                )?,
                db_instance_class: required(self.db_instance_class, "db_instance_class")?,
                engine: required(self.engine, "engine")?,
                master_username: self.master_username,
                master_user_password: self.master_user_password,
                allocated_storage: self.allocated_storage,
            })
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeDbInstancesInput {
    /// Restricts results to a single instance.
    pub db_instance_identifier: Option<String>,
    /// The maximum number of records to include in the response.
    pub max_records: Option<i32>,
    /// A pagination marker from a previous call.
    pub marker: Option<String>,
}

impl DescribeDbInstancesInput {
    pub fn builder() -> describe_db_instances_input::Builder {
        describe_db_instances_input::Builder::default()
    }
}

pub mod describe_db_instances_input {
    use super::*;

    /// Builder for [`DescribeDbInstancesInput`](super::DescribeDbInstancesInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        inner: DescribeDbInstancesInput,
    }

    impl Builder {
        pub fn db_instance_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner.db_instance_identifier = Some(value.into());
            self
        }

        pub fn max_records(mut self, value: i32) -> Self {
            self.inner.max_records = Some(value);
            self
        }

        pub fn marker(mut self, value: impl Into<String>) -> Self {
            self.inner.marker = Some(value.into());
            self
        }

        pub fn build(self) -> Result<DescribeDbInstancesInput, BuildError> {
            Ok(self.inner)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeleteDbInstanceInput {
    /// The identifier of the instance to delete.
    pub db_instance_identifier: String,
    /// True to skip the final snapshot before deletion.
    pub skip_final_snapshot: Option<bool>,
    /// The identifier of the final snapshot, required when one is taken.
    pub final_db_snapshot_identifier: Option<String>,
}

impl DeleteDbInstanceInput {
    pub fn builder() -> delete_db_instance_input::Builder {
        delete_db_instance_input::Builder::default()
    }
}

pub mod delete_db_instance_input {
    use super::*;

    /// Builder for [`DeleteDbInstanceInput`](super::DeleteDbInstanceInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) db_instance_identifier: Option<String>,
        pub(crate) skip_final_snapshot: Option<bool>,
        pub(crate) final_db_snapshot_identifier: Option<String>,
    }

    impl Builder {
        pub fn db_instance_identifier(mut self, value: impl Into<String>) -> Self {
            self.db_instance_identifier = Some(value.into());
            self
        }

        pub fn skip_final_snapshot(mut self, value: bool) -> Self {
            self.skip_final_snapshot = Some(value);
            self
        }

        pub fn final_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
            self.final_db_snapshot_identifier = Some(value.into());
            self
        }

        pub fn build(self) -> Result<DeleteDbInstanceInput, BuildError> {
            Ok(DeleteDbInstanceInput {
                db_instance_identifier: required(
                    self.db_instance_identifier,
                    "db_instance_identifier",
                )?,
                skip_final_snapshot: self.skip_final_snapshot,
                final_db_snapshot_identifier: self.final_db_snapshot_identifier,
            })
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeDbClustersInput {
    /// Restricts results to a single cluster.
    pub db_cluster_identifier: Option<String>,
    /// The maximum number of records to include in the response.
    pub max_records: Option<i32>,
    /// A pagination marker from a previous call.
    pub marker: Option<String>,
}

impl DescribeDbClustersInput {
    pub fn builder() -> describe_db_clusters_input::Builder {
        describe_db_clusters_input::Builder::default()
    }
}

pub mod describe_db_clusters_input {
    use super::*;

    /// Builder for [`DescribeDbClustersInput`](super::DescribeDbClustersInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        inner: DescribeDbClustersInput,
    }

    impl Builder {
        pub fn db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner.db_cluster_identifier = Some(value.into());
            self
        }

        pub fn max_records(mut self, value: i32) -> Self {
            self.inner.max_records = Some(value);
            self
        }

        pub fn marker(mut self, value: impl Into<String>) -> Self {
            self.inner.marker = Some(value.into());
            self
        }

        pub fn build(self) -> Result<DescribeDbClustersInput, BuildError> {
            Ok(self.inner)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeDbSnapshotsInput {
    /// Restricts results to a single snapshot.
    pub db_snapshot_identifier: Option<String>,
    /// Restricts results to snapshots of a single instance.
    pub db_instance_identifier: Option<String>,
    /// The maximum number of records to include in the response.
    pub max_records: Option<i32>,
    /// A pagination marker from a previous call.
    pub marker: Option<String>,
}

impl DescribeDbSnapshotsInput {
    pub fn builder() -> describe_db_snapshots_input::Builder {
        describe_db_snapshots_input::Builder::default()
    }
}

pub mod describe_db_snapshots_input {
    use super::*;

    /// Builder for [`DescribeDbSnapshotsInput`](super::DescribeDbSnapshotsInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        inner: DescribeDbSnapshotsInput,
    }

    impl Builder {
        pub fn db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner.db_snapshot_identifier = Some(value.into());
            self
        }

        pub fn db_instance_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner.db_instance_identifier = Some(value.into());
            self
        }

        pub fn max_records(mut self, value: i32) -> Self {
            self.inner.max_records = Some(value);
            self
        }

        pub fn marker(mut self, value: impl Into<String>) -> Self {
            self.inner.marker = Some(value.into());
            self
        }

        pub fn build(self) -> Result<DescribeDbSnapshotsInput, BuildError> {
            Ok(self.inner)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CopyDbSnapshotInput {
    /// The identifier of the snapshot to copy. For a cross-region copy this
    /// must be the full ARN of the source snapshot.
    pub source_db_snapshot_identifier: String,
    /// The identifier for the copied snapshot.
    pub target_db_snapshot_identifier: String,
    /// The KMS key to encrypt the copy with.
    pub kms_key_id: Option<String>,
    /// True to copy the source snapshot's tags to the copy.
    pub copy_tags: Option<bool>,
    /// A SigV4 presigned URL authorizing the copy in the source region.
    /// Generated automatically when `source_region` is set and this is not.
    pub pre_signed_url: Option<String>,
    /// The region the source snapshot lives in. Client-side only.
    pub source_region: Option<Region>,
}

impl CopyDbSnapshotInput {
    pub fn builder() -> copy_db_snapshot_input::Builder {
        copy_db_snapshot_input::Builder::default()
    }
}

pub mod copy_db_snapshot_input {
    use super::*;

    /// Builder for [`CopyDbSnapshotInput`](super::CopyDbSnapshotInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) source_db_snapshot_identifier: Option<String>,
        pub(crate) target_db_snapshot_identifier: Option<String>,
        pub(crate) kms_key_id: Option<String>,
        pub(crate) copy_tags: Option<bool>,
        pub(crate) pre_signed_url: Option<String>,
        pub(crate) source_region: Option<Region>,
    }

    impl Builder {
        pub fn source_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
            self.source_db_snapshot_identifier = Some(value.into());
            self
        }

        pub fn target_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
            self.target_db_snapshot_identifier = Some(value.into());
            self
        }

        pub fn kms_key_id(mut self, value: impl Into<String>) -> Self {
            self.kms_key_id = Some(value.into());
            self
        }

        pub fn copy_tags(mut self, value: bool) -> Self {
            self.copy_tags = Some(value);
            self
        }

        pub fn pre_signed_url(mut self, value: impl Into<String>) -> Self {
            self.pre_signed_url = Some(value.into());
            self
        }

        pub fn source_region(mut self, value: impl Into<String>) -> Self {
            self.source_region = Some(Region::new(value.into()));
            self
        }

        pub fn build(self) -> Result<CopyDbSnapshotInput, BuildError> {
            Ok(CopyDbSnapshotInput {
                source_db_snapshot_identifier: required(
                    self.source_db_snapshot_identifier,
                    "source_db_snapshot_identifier",
                )?,
                target_db_snapshot_identifier: required(
                    self.target_db_snapshot_identifier,
                    "target_db_snapshot_identifier",
                )?,
                kms_key_id: self.kms_key_id,
                copy_tags: self.copy_tags,
                pre_signed_url: self.pre_signed_url,
                source_region: self.source_region,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateDbClusterInput {
    /// The cluster identifier, stored lowercased.
    pub db_cluster_identifier: String,
    /// The database engine, e.g. `aurora-postgresql`.
    pub engine: String,
    /// The name for the master user.
    pub master_username: Option<String>,
    /// The password for the master user.
    pub master_user_password: Option<String>,
    /// True to encrypt the cluster.
    pub storage_encrypted: Option<bool>,
    /// The KMS key to encrypt the cluster with.
    pub kms_key_id: Option<String>,
    /// The ARN of the source if this cluster is created as a read replica.
    pub replication_source_identifier: Option<String>,
    /// A SigV4 presigned URL authorizing replica creation in the source
    /// region. Generated automatically when `source_region` is set and this
    /// is not.
    pub pre_signed_url: Option<String>,
    /// The region the replication source lives in. Client-side only.
    pub source_region: Option<Region>,
}

impl CreateDbClusterInput {
    pub fn builder() -> create_db_cluster_input::Builder {
        create_db_cluster_input::Builder::default()
    }
}

pub mod create_db_cluster_input {
    use super::*;

    /// Builder for [`CreateDbClusterInput`](super::CreateDbClusterInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) db_cluster_identifier: Option<String>,
        pub(crate) engine: Option<String>,
        pub(crate) master_username: Option<String>,
        pub(crate) master_user_password: Option<String>,
        pub(crate) storage_encrypted: Option<bool>,
        pub(crate) kms_key_id: Option<String>,
        pub(crate) replication_source_identifier: Option<String>,
        pub(crate) pre_signed_url: Option<String>,
        pub(crate) source_region: Option<Region>,
    }

    impl Builder {
        pub fn db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
            self.db_cluster_identifier = Some(value.into());
            self
        }

        pub fn engine(mut self, value: impl Into<String>) -> Self {
            self.engine = Some(value.into());
            self
        }

        pub fn master_username(mut self, value: impl Into<String>) -> Self {
            self.master_username = Some(value.into());
            self
        }

        pub fn master_user_password(mut self, value: impl Into<String>) -> Self {
            self.master_user_password = Some(value.into());
            self
        }

        pub fn storage_encrypted(mut self, value: bool) -> Self {
            self.storage_encrypted = Some(value);
            self
        }

        pub fn kms_key_id(mut self, value: impl Into<String>) -> Self {
            self.kms_key_id = Some(value.into());
            self
        }

        pub fn replication_source_identifier(mut self, value: impl Into<String>) -> Self {
            self.replication_source_identifier = Some(value.into());
            self
        }

        pub fn pre_signed_url(mut self, value: impl Into<String>) -> Self {
            self.pre_signed_url = Some(value.into());
            self
        }

        pub fn source_region(mut self, value: impl Into<String>) -> Self {
            self.source_region = Some(Region::new(value.into()));
            self
        }

        pub fn build(self) -> Result<CreateDbClusterInput, BuildError> {
            Ok(CreateDbClusterInput {
                db_cluster_identifier: required(
                    self.db_cluster_identifier,
                    "db_cluster_identifier",
                )?,
                engine: required(self.engine, "engine")?,
                master_username: self.master_username,
                master_user_password: self.master_user_password,
                storage_encrypted: self.storage_encrypted,
                kms_key_id: self.kms_key_id,
                replication_source_identifier: self.replication_source_identifier,
                pre_signed_url: self.pre_signed_url,
                source_region: self.source_region,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StartDbInstanceAutomatedBackupsReplicationInput {
    /// The ARN of the source DB instance, e.g.
    /// `arn:aws:rds:us-west-2:123456789012:db:mydatabase`.
    pub source_db_instance_arn: String,
    /// The retention period for the replicated backups, in days.
    pub backup_retention_period: Option<i32>,
    /// The KMS key to encrypt the replicated backups with.
    pub kms_key_id: Option<String>,
    /// A SigV4 presigned URL authorizing replication from the source
    /// region. Generated automatically when `source_region` is set and this
    /// is not.
    pub pre_signed_url: Option<String>,
    /// The region the source instance lives in. Client-side only.
    pub source_region: Option<Region>,
}

impl StartDbInstanceAutomatedBackupsReplicationInput {
    pub fn builder() -> start_db_instance_automated_backups_replication_input::Builder {
        start_db_instance_automated_backups_replication_input::Builder::default()
    }
}

pub mod start_db_instance_automated_backups_replication_input {
    use super::*;

    /// Builder for
    /// [`StartDbInstanceAutomatedBackupsReplicationInput`](super::StartDbInstanceAutomatedBackupsReplicationInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) source_db_instance_arn: Option<String>,
        pub(crate) backup_retention_period: Option<i32>,
        pub(crate) kms_key_id: Option<String>,
        pub(crate) pre_signed_url: Option<String>,
        pub(crate) source_region: Option<Region>,
    }

    impl Builder {
        pub fn source_db_instance_arn(mut self, value: impl Into<String>) -> Self {
            self.source_db_instance_arn = Some(value.into());
            self
        }

        pub fn backup_retention_period(mut self, value: i32) -> Self {
            self.backup_retention_period = Some(value);
            self
        }

        pub fn kms_key_id(mut self, value: impl Into<String>) -> Self {
            self.kms_key_id = Some(value.into());
            self
        }

        pub fn pre_signed_url(mut self, value: impl Into<String>) -> Self {
            self.pre_signed_url = Some(value.into());
            self
        }

        pub fn source_region(mut self, value: impl Into<String>) -> Self {
            self.source_region = Some(Region::new(value.into()));
            self
        }

        pub fn build(
            self,
        ) -> Result<StartDbInstanceAutomatedBackupsReplicationInput, BuildError> {
            Ok(StartDbInstanceAutomatedBackupsReplicationInput {
                source_db_instance_arn: required(
                    self.source_db_instance_arn,
                    "source_db_instance_arn",
                )?,
                backup_retention_period: self.backup_retention_period,
                kms_key_id: self.kms_key_id,
                pre_signed_url: self.pre_signed_url,
                source_region: self.source_region,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_requires_target_snapshot_identifier() {
        let err = CopyDbSnapshotInput::builder()
            .source_db_snapshot_identifier("arn:aws:rds:us-west-2:123456789012:snapshot:nightly")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("target_db_snapshot_identifier"));
    }
}
