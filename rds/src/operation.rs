/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Per-operation response parsers.
//!
//! Error status codes are discriminated into the operation's error enum via
//! the `<ErrorResponse>` document; success bodies go through `xml_deser`.
//! A success body that fails to parse becomes an `Unhandled` error carrying
//! the parse failure.

use bytes::Bytes;

use sdk_http::response::ParseStrictResponse;

macro_rules! strict_response_parser {
    ($op:ident, $parse_fn:ident, $output:ident, $error:ident) => {
        #[doc = concat!("Parses `", stringify!($op), "` responses.")]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $op;

        impl ParseStrictResponse for $op {
            type Output = Result<crate::output::$output, crate::error::$error>;

            fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                if !response.status().is_success() {
                    let meta = crate::xml_deser::parse_generic_error(response.body());
                    return Err(crate::error::$error::from_meta(meta));
                }
                crate::xml_deser::$parse_fn(response.body()).map_err(|err| {
                    crate::error::$error::Unhandled(
                        sdk_types::Error::builder()
                            .code("InvalidResponse")
                            .message(err.to_string())
                            .build(),
                    )
                })
            }
        }
    };
}

strict_response_parser!(
    CreateDbInstance,
    parse_create_db_instance,
    CreateDbInstanceOutput,
    CreateDbInstanceError
);
strict_response_parser!(
    DescribeDbInstances,
    parse_describe_db_instances,
    DescribeDbInstancesOutput,
    DescribeDbInstancesError
);
strict_response_parser!(
    DeleteDbInstance,
    parse_delete_db_instance,
    DeleteDbInstanceOutput,
    DeleteDbInstanceError
);
strict_response_parser!(
    DescribeDbClusters,
    parse_describe_db_clusters,
    DescribeDbClustersOutput,
    DescribeDbClustersError
);
strict_response_parser!(
    DescribeDbSnapshots,
    parse_describe_db_snapshots,
    DescribeDbSnapshotsOutput,
    DescribeDbSnapshotsError
);
strict_response_parser!(
    CopyDbSnapshot,
    parse_copy_db_snapshot,
    CopyDbSnapshotOutput,
    CopyDbSnapshotError
);
strict_response_parser!(
    CreateDbCluster,
    parse_create_db_cluster,
    CreateDbClusterOutput,
    CreateDbClusterError
);
strict_response_parser!(
    StartDbInstanceAutomatedBackupsReplication,
    parse_start_db_instance_automated_backups_replication,
    StartDbInstanceAutomatedBackupsReplicationOutput,
    StartDbInstanceAutomatedBackupsReplicationError
);
