/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled service errors.
//!
//! Query-protocol faults carry an error code in `<Error><Code>` that does
//! not always match the fault's shape name (`DBInstanceNotFoundFault` is
//! reported as `DBInstanceNotFound`), so each variant records its wire code
//! explicitly. Unrecognized codes land in `Unhandled` with the generic
//! metadata preserved.

use std::fmt;

macro_rules! modeled_fault {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            /// The message describing the problem.
            pub message: Option<String>,
            pub(crate) meta: sdk_types::Error,
        }

        impl $name {
            /// The request id attached to the failed response, when present.
            pub fn request_id(&self) -> Option<&str> {
                self.meta.request_id()
            }

            pub(crate) fn from_meta(meta: sdk_types::Error) -> Self {
                Self {
                    message: meta.message().map(str::to_string),
                    meta,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, stringify!($name))?;
                if let Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}
    };
}

modeled_fault! {
    /// The requested DB instance was not found.
    DbInstanceNotFoundFault
}
modeled_fault! {
    /// A DB instance with the given identifier already exists.
    DbInstanceAlreadyExistsFault
}
modeled_fault! {
    /// The DB instance is not in a valid state for this operation.
    InvalidDbInstanceStateFault
}
modeled_fault! {
    /// The requested DB snapshot was not found.
    DbSnapshotNotFoundFault
}
modeled_fault! {
    /// A DB snapshot with the given identifier already exists.
    DbSnapshotAlreadyExistsFault
}
modeled_fault! {
    /// The DB snapshot is not in a valid state for this operation.
    InvalidDbSnapshotStateFault
}
modeled_fault! {
    /// The request would exceed the allowed number of snapshots.
    SnapshotQuotaExceededFault
}
modeled_fault! {
    /// The requested DB cluster was not found.
    DbClusterNotFoundFault
}
modeled_fault! {
    /// A DB cluster with the given identifier already exists.
    DbClusterAlreadyExistsFault
}
modeled_fault! {
    /// The request would exceed the allowed number of DB clusters.
    DbClusterQuotaExceededFault
}
modeled_fault! {
    /// The KMS key is not accessible from this account or region.
    KmsKeyNotAccessibleFault
}
modeled_fault! {
    /// The request would exceed the allowed amount of storage.
    StorageQuotaExceededFault
}

/// Defines a per-operation error enum. Each variant pairs the wire error
/// code with the fault shape it maps to.
macro_rules! operation_error {
    ($(#[$docs:meta])* $name:ident { $($code:literal => $variant:ident),+ $(,)? }) => {
        $(#[$docs])*
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum $name {
            $($variant($variant),)+
            /// A fault this client does not model.
            Unhandled(sdk_types::Error),
        }

        impl $name {
            /// The wire error code, e.g. `DBSnapshotNotFound`.
            pub fn code(&self) -> Option<&str> {
                match self {
                    $(Self::$variant(_) => Some($code),)+
                    Self::Unhandled(meta) => meta.code(),
                }
            }

            pub(crate) fn from_meta(meta: sdk_types::Error) -> Self {
                $(
                    if meta.code() == Some($code) {
                        return Self::$variant($variant::from_meta(meta));
                    }
                )+
                Self::Unhandled(meta)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(err) => err.fmt(f),)+
                    Self::Unhandled(meta) => meta.fmt(f),
                }
            }
        }

        impl std::error::Error for $name {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match self {
                    $(Self::$variant(err) => Some(err),)+
                    Self::Unhandled(meta) => Some(meta),
                }
            }
        }
    };
}

operation_error! {
    /// Errors returned by `CreateDBInstance`.
    CreateDbInstanceError {
        "DBInstanceAlreadyExists" => DbInstanceAlreadyExistsFault,
        "KMSKeyNotAccessibleFault" => KmsKeyNotAccessibleFault,
        "StorageQuotaExceeded" => StorageQuotaExceededFault,
    }
}

operation_error! {
    /// Errors returned by `DescribeDBInstances`.
    DescribeDbInstancesError {
        "DBInstanceNotFound" => DbInstanceNotFoundFault,
    }
}

operation_error! {
    /// Errors returned by `DeleteDBInstance`.
    DeleteDbInstanceError {
        "DBInstanceNotFound" => DbInstanceNotFoundFault,
        "InvalidDBInstanceState" => InvalidDbInstanceStateFault,
        "DBSnapshotAlreadyExists" => DbSnapshotAlreadyExistsFault,
        "SnapshotQuotaExceeded" => SnapshotQuotaExceededFault,
    }
}

operation_error! {
    /// Errors returned by `DescribeDBClusters`.
    DescribeDbClustersError {
        "DBClusterNotFoundFault" => DbClusterNotFoundFault,
    }
}

operation_error! {
    /// Errors returned by `DescribeDBSnapshots`.
    DescribeDbSnapshotsError {
        "DBSnapshotNotFound" => DbSnapshotNotFoundFault,
    }
}

operation_error! {
    /// Errors returned by `CopyDBSnapshot`.
    CopyDbSnapshotError {
        "DBSnapshotAlreadyExists" => DbSnapshotAlreadyExistsFault,
        "DBSnapshotNotFound" => DbSnapshotNotFoundFault,
        "InvalidDBSnapshotState" => InvalidDbSnapshotStateFault,
        "SnapshotQuotaExceeded" => SnapshotQuotaExceededFault,
        "KMSKeyNotAccessibleFault" => KmsKeyNotAccessibleFault,
    }
}

operation_error! {
    /// Errors returned by `CreateDBCluster`.
    CreateDbClusterError {
        "DBClusterAlreadyExistsFault" => DbClusterAlreadyExistsFault,
        "DBClusterQuotaExceededFault" => DbClusterQuotaExceededFault,
        "KMSKeyNotAccessibleFault" => KmsKeyNotAccessibleFault,
        "StorageQuotaExceeded" => StorageQuotaExceededFault,
    }
}

operation_error! {
    /// Errors returned by `StartDBInstanceAutomatedBackupsReplication`.
    StartDbInstanceAutomatedBackupsReplicationError {
        "DBInstanceNotFound" => DbInstanceNotFoundFault,
        "InvalidDBInstanceState" => InvalidDbInstanceStateFault,
        "KMSKeyNotAccessibleFault" => KmsKeyNotAccessibleFault,
        "StorageQuotaExceeded" => StorageQuotaExceededFault,
    }
}
