/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The RDS client and its fluent operation builders.
//!
//! Every operation follows the same dispatch sequence:
//! 1. fail fast if no endpoint resolver is configured,
//! 2. resolve the endpoint from the configured region,
//! 3. serialize the input into a form-urlencoded `Action` body (generating
//!    a presigned source-region URL first for cross-region operations),
//! 4. sign the request with SigV4 headers,
//! 5. POST the request and parse the typed outcome.

use std::sync::Arc;
use std::time::{Instant, SystemTime};

use bytes::Bytes;
use http::header::HOST;

use sdk_auth::ProvideCredentials;
use sdk_endpoint::{EndpointParams, SigningRegion};
use sdk_http::body::SdkBody;
use sdk_http::endpoint;
use sdk_http::response::ParseStrictResponse;
use sdk_http::result::SdkError;
use sdk_hyper::{HyperAdapter, SmithyConnector};
use sdk_observability::attributes::Attributes;
use sdk_observability::global::get_telemetry_provider;
use sdk_observability::meter::{Histogram, MonotonicCounter};
use sdk_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningSettings};

use crate::config::Config;

/// Instruments shared by every operation on a client.
pub(crate) struct ClientMetrics {
    call_duration: Box<dyn Histogram>,
    call_errors: Box<dyn MonotonicCounter>,
}

impl ClientMetrics {
    fn register(scope: &'static str) -> Self {
        let meter = get_telemetry_provider()
            .meter_provider()
            .get_meter(scope, None);
        ClientMetrics {
            call_duration: meter.create_histogram(
                "smithy.client.call.duration".to_string(),
                Some("s".to_string()),
                Some("Overall call duration including dispatch and parsing".to_string()),
            ),
            call_errors: meter.create_monotonic_counter(
                "smithy.client.call.errors".to_string(),
                None,
                Some("Number of operation calls that returned an error".to_string()),
            ),
        }
    }

    fn record_call(&self, operation: &'static str, elapsed: std::time::Duration, success: bool) {
        let mut attributes = Attributes::new();
        attributes.set("rpc.service", "rds");
        attributes.set("rpc.method", operation);
        self.call_duration
            .record(elapsed.as_secs_f64(), Some(&attributes), None);
        if !success {
            self.call_errors.add(1, Some(&attributes), None);
        }
    }
}

pub(crate) struct Handle {
    pub(crate) conf: Config,
    pub(crate) connector: Arc<dyn SmithyConnector>,
    pub(crate) metrics: ClientMetrics,
}

/// Client for Amazon RDS.
///
/// The client is cheap to clone; clones share the underlying connection
/// pool and metrics instruments.
#[derive(Clone)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    /// Creates a client from configuration, dispatching over HTTPS.
    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, HyperAdapter::new())
    }

    /// Creates a client that dispatches over the given connector. Tests use
    /// this with a canned-response connection.
    pub fn from_conf_conn(conf: Config, conn: impl SmithyConnector + 'static) -> Self {
        Client {
            handle: Arc::new(Handle {
                conf,
                connector: Arc::new(conn),
                metrics: ClientMetrics::register("rds"),
            }),
        }
    }

    pub fn create_db_instance(&self) -> fluent_builders::CreateDbInstance {
        fluent_builders::CreateDbInstance::new(self.handle.clone())
    }

    pub fn describe_db_instances(&self) -> fluent_builders::DescribeDbInstances {
        fluent_builders::DescribeDbInstances::new(self.handle.clone())
    }

    pub fn delete_db_instance(&self) -> fluent_builders::DeleteDbInstance {
        fluent_builders::DeleteDbInstance::new(self.handle.clone())
    }

    pub fn describe_db_clusters(&self) -> fluent_builders::DescribeDbClusters {
        fluent_builders::DescribeDbClusters::new(self.handle.clone())
    }

    pub fn describe_db_snapshots(&self) -> fluent_builders::DescribeDbSnapshots {
        fluent_builders::DescribeDbSnapshots::new(self.handle.clone())
    }

    pub fn copy_db_snapshot(&self) -> fluent_builders::CopyDbSnapshot {
        fluent_builders::CopyDbSnapshot::new(self.handle.clone())
    }

    pub fn create_db_cluster(&self) -> fluent_builders::CreateDbCluster {
        fluent_builders::CreateDbCluster::new(self.handle.clone())
    }

    pub fn start_db_instance_automated_backups_replication(
        &self,
    ) -> fluent_builders::StartDbInstanceAutomatedBackupsReplication {
        fluent_builders::StartDbInstanceAutomatedBackupsReplication::new(self.handle.clone())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("conf", &self.handle.conf)
            .finish_non_exhaustive()
    }
}

/// Dispatches one operation: resolve, sign, send, parse.
pub(crate) async fn call<O, E, P>(
    handle: &Handle,
    operation: &'static str,
    body: String,
    parser: P,
) -> Result<O, SdkError<E>>
where
    P: ParseStrictResponse<Output = Result<O, E>>,
{
    tracing::debug!(operation, "sending request");
    let start = Instant::now();
    let result = dispatch(handle, body, parser).await;
    if result.is_err() {
        tracing::debug!(operation, "operation returned an error");
    }
    handle
        .metrics
        .record_call(operation, start.elapsed(), result.is_ok());
    result
}

async fn dispatch<O, E, P>(handle: &Handle, body: String, parser: P) -> Result<O, SdkError<E>>
where
    P: ParseStrictResponse<Output = Result<O, E>>,
{
    let conf = &handle.conf;
    let resolver = conf
        .endpoint_resolver
        .as_ref()
        .ok_or_else(|| SdkError::construction(endpoint::Error::missing_resolver()))?;
    let params = EndpointParams::new(conf.region.clone());
    let resolved = resolver
        .resolve_endpoint(&params)
        .map_err(SdkError::construction)?;

    let body = Bytes::from(body);
    let mut request = http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(SdkBody::from(body.clone()))
        .map_err(SdkError::construction)?;
    let mut uri = request.uri().clone();
    resolved.set_endpoint(&mut uri);
    *request.uri_mut() = uri;
    // Set `host` explicitly so the signed value is visible on the wire.
    if let Some(authority) = request.uri().authority() {
        let host =
            http::HeaderValue::from_str(authority.as_str()).map_err(SdkError::construction)?;
        request.headers_mut().insert(HOST, host);
    }

    let credentials = conf
        .credentials_provider
        .provide_credentials()
        .await
        .map_err(SdkError::construction)?;
    let signing_region = conf
        .region
        .clone()
        .map(SigningRegion::from)
        .ok_or_else(|| SdkError::construction(endpoint::Error::message("no region configured")))?;
    let signing_params = sdk_sigv4::http_request::SigningParams::builder()
        .access_key(credentials.access_key_id())
        .secret_key(credentials.secret_access_key())
        .security_token(credentials.session_token())
        .region(signing_region.as_ref())
        .service_name(conf.signing_service())
        .time(SystemTime::now())
        .settings(SigningSettings::default())
        .build()
        .map_err(SdkError::construction)?;
    let signable = SignableRequest::new(
        request.method(),
        request.uri(),
        request.headers(),
        SignableBody::Bytes(&body),
    );
    let (instructions, _signature) = sign(signable, &signing_params)
        .map_err(SdkError::construction)?
        .into_parts();
    instructions.apply_to_request(&mut request);

    let response = handle
        .connector
        .call(request)
        .await
        .map_err(SdkError::dispatch)?;

    match parser.parse(&response) {
        Ok(parsed) => Ok(parsed),
        Err(err) => Err(SdkError::ServiceError { raw: response, err }),
    }
}

/// Generates the presigned source-region URL for a cross-region input.
async fn presign_for_input(
    handle: &Handle,
    source_region: &sdk_endpoint::Region,
    action: &'static str,
    params: &crate::query_ser::QueryParams,
) -> Result<String, crate::presigning::PresigningError> {
    let destination = handle.conf.region.clone().ok_or_else(|| {
        crate::presigning::PresigningError::new("no destination region configured")
    })?;
    let credentials = handle
        .conf
        .credentials_provider
        .provide_credentials()
        .await
        .map_err(|err| crate::presigning::PresigningError::new(err.to_string()))?;
    crate::presigning::presign_source_url(
        &handle.conf,
        &credentials,
        source_region,
        &destination,
        action,
        params,
    )
}

pub mod fluent_builders {
    //! One builder per operation; `send` consumes the builder and performs
    //! the call.

    use std::sync::Arc;

    use sdk_http::result::SdkError;

    use crate::error;
    use crate::input;
    use crate::operation;
    use crate::output;
    use crate::query_ser;

    use super::Handle;

    macro_rules! fluent_new {
        ($builder:ty) => {
            impl $builder {
                pub(crate) fn new(handle: Arc<Handle>) -> Self {
                    Self {
                        handle,
                        inner: Default::default(),
                    }
                }
            }
        };
    }

    /// Fluent builder for the `CreateDBInstance` operation.
    pub struct CreateDbInstance {
        handle: Arc<Handle>,
        inner: input::create_db_instance_input::Builder,
    }
    fluent_new!(CreateDbInstance);

    impl CreateDbInstance {
        /// The DB instance identifier.
        pub fn db_instance_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.db_instance_identifier(value);
            self
        }

        /// The compute and memory capacity class, e.g. `db.m5.large`.
        pub fn db_instance_class(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.db_instance_class(value);
            self
        }

        /// The database engine.
        pub fn engine(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.engine(value);
            self
        }

        /// The name for the master user.
        pub fn master_username(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.master_username(value);
            self
        }

        /// The password for the master user.
        pub fn master_user_password(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.master_user_password(value);
            self
        }

        /// The amount of storage in gibibytes to allocate.
        pub fn allocated_storage(mut self, value: i32) -> Self {
            self.inner = self.inner.allocated_storage(value);
            self
        }

        /// Dispatches the operation and returns the parsed output.
        pub async fn send(
            self,
        ) -> Result<output::CreateDbInstanceOutput, SdkError<error::CreateDbInstanceError>>
        {
            let input = self.inner.build().map_err(SdkError::construction)?;
            let body = query_ser::encode_body(
                "CreateDBInstance",
                &query_ser::serialize_create_db_instance(&input),
            );
            super::call(
                &self.handle,
                "CreateDBInstance",
                body,
                operation::CreateDbInstance,
            )
            .await
        }
    }

    /// Fluent builder for the `DescribeDBInstances` operation.
    pub struct DescribeDbInstances {
        handle: Arc<Handle>,
        inner: input::describe_db_instances_input::Builder,
    }
    fluent_new!(DescribeDbInstances);

    impl DescribeDbInstances {
        /// Restricts results to a single instance.
        pub fn db_instance_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.db_instance_identifier(value);
            self
        }

        /// The maximum number of records to return.
        pub fn max_records(mut self, value: i32) -> Self {
            self.inner = self.inner.max_records(value);
            self
        }

        /// A pagination marker from a previous call.
        pub fn marker(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.marker(value);
            self
        }

        /// Dispatches the operation and returns the parsed output.
        pub async fn send(
            self,
        ) -> Result<output::DescribeDbInstancesOutput, SdkError<error::DescribeDbInstancesError>>
        {
            let input = self.inner.build().map_err(SdkError::construction)?;
            let body = query_ser::encode_body(
                "DescribeDBInstances",
                &query_ser::serialize_describe_db_instances(&input),
            );
            super::call(
                &self.handle,
                "DescribeDBInstances",
                body,
                operation::DescribeDbInstances,
            )
            .await
        }
    }

    /// Fluent builder for the `DeleteDBInstance` operation.
    pub struct DeleteDbInstance {
        handle: Arc<Handle>,
        inner: input::delete_db_instance_input::Builder,
    }
    fluent_new!(DeleteDbInstance);

    impl DeleteDbInstance {
        /// The identifier of the instance to delete.
        pub fn db_instance_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.db_instance_identifier(value);
            self
        }

        /// True to skip the final snapshot.
        pub fn skip_final_snapshot(mut self, value: bool) -> Self {
            self.inner = self.inner.skip_final_snapshot(value);
            self
        }

        /// The identifier for the final snapshot.
        pub fn final_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.final_db_snapshot_identifier(value);
            self
        }

        /// Dispatches the operation and returns the parsed output.
        pub async fn send(
            self,
        ) -> Result<output::DeleteDbInstanceOutput, SdkError<error::DeleteDbInstanceError>>
        {
            let input = self.inner.build().map_err(SdkError::construction)?;
            let body = query_ser::encode_body(
                "DeleteDBInstance",
                &query_ser::serialize_delete_db_instance(&input),
            );
            super::call(
                &self.handle,
                "DeleteDBInstance",
                body,
                operation::DeleteDbInstance,
            )
            .await
        }
    }

    /// Fluent builder for the `DescribeDBClusters` operation.
    pub struct DescribeDbClusters {
        handle: Arc<Handle>,
        inner: input::describe_db_clusters_input::Builder,
    }
    fluent_new!(DescribeDbClusters);

    impl DescribeDbClusters {
        /// Restricts results to a single cluster.
        pub fn db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.db_cluster_identifier(value);
            self
        }

        /// The maximum number of records to return.
        pub fn max_records(mut self, value: i32) -> Self {
            self.inner = self.inner.max_records(value);
            self
        }

        /// A pagination marker from a previous call.
        pub fn marker(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.marker(value);
            self
        }

        /// Dispatches the operation and returns the parsed output.
        pub async fn send(
            self,
        ) -> Result<output::DescribeDbClustersOutput, SdkError<error::DescribeDbClustersError>>
        {
            let input = self.inner.build().map_err(SdkError::construction)?;
            let body = query_ser::encode_body(
                "DescribeDBClusters",
                &query_ser::serialize_describe_db_clusters(&input),
            );
            super::call(
                &self.handle,
                "DescribeDBClusters",
                body,
                operation::DescribeDbClusters,
            )
            .await
        }
    }

    /// Fluent builder for the `DescribeDBSnapshots` operation.
    pub struct DescribeDbSnapshots {
        handle: Arc<Handle>,
        inner: input::describe_db_snapshots_input::Builder,
    }
    fluent_new!(DescribeDbSnapshots);

    impl DescribeDbSnapshots {
        /// Restricts results to a single snapshot.
        pub fn db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.db_snapshot_identifier(value);
            self
        }

        /// Restricts results to snapshots of a single instance.
        pub fn db_instance_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.db_instance_identifier(value);
            self
        }

        /// The maximum number of records to return.
        pub fn max_records(mut self, value: i32) -> Self {
            self.inner = self.inner.max_records(value);
            self
        }

        /// A pagination marker from a previous call.
        pub fn marker(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.marker(value);
            self
        }

        /// Dispatches the operation and returns the parsed output.
        pub async fn send(
            self,
        ) -> Result<output::DescribeDbSnapshotsOutput, SdkError<error::DescribeDbSnapshotsError>>
        {
            let input = self.inner.build().map_err(SdkError::construction)?;
            let body = query_ser::encode_body(
                "DescribeDBSnapshots",
                &query_ser::serialize_describe_db_snapshots(&input),
            );
            super::call(
                &self.handle,
                "DescribeDBSnapshots",
                body,
                operation::DescribeDbSnapshots,
            )
            .await
        }
    }

    /// Fluent builder for the `CopyDBSnapshot` operation.
    ///
    /// For a cross-region copy, set `source_region`; the client generates
    /// the `PreSignedUrl` parameter unless one is supplied explicitly.
    pub struct CopyDbSnapshot {
        handle: Arc<Handle>,
        inner: input::copy_db_snapshot_input::Builder,
    }
    fluent_new!(CopyDbSnapshot);

    impl CopyDbSnapshot {
        /// The identifier (or, cross-region, the ARN) of the source snapshot.
        pub fn source_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.source_db_snapshot_identifier(value);
            self
        }

        /// The identifier for the copy.
        pub fn target_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.target_db_snapshot_identifier(value);
            self
        }

        /// The KMS key to encrypt the copy with.
        pub fn kms_key_id(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.kms_key_id(value);
            self
        }

        /// True to copy the source snapshot's tags.
        pub fn copy_tags(mut self, value: bool) -> Self {
            self.inner = self.inner.copy_tags(value);
            self
        }

        /// Supplies a presigned URL directly, disabling generation.
        pub fn pre_signed_url(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.pre_signed_url(value);
            self
        }

        /// The region the source snapshot lives in.
        pub fn source_region(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.source_region(value);
            self
        }

        /// Dispatches the operation and returns the parsed output.
        pub async fn send(
            self,
        ) -> Result<output::CopyDbSnapshotOutput, SdkError<error::CopyDbSnapshotError>> {
            let mut input = self.inner.build().map_err(SdkError::construction)?;
            if input.pre_signed_url.is_none() {
                if let Some(source_region) = input.source_region.clone() {
                    let params = query_ser::serialize_copy_db_snapshot(&input);
                    let url = super::presign_for_input(
                        &self.handle,
                        &source_region,
                        "CopyDBSnapshot",
                        &params,
                    )
                    .await
                    .map_err(SdkError::construction)?;
                    input.pre_signed_url = Some(url);
                }
            }
            let body = query_ser::encode_body(
                "CopyDBSnapshot",
                &query_ser::serialize_copy_db_snapshot(&input),
            );
            super::call(
                &self.handle,
                "CopyDBSnapshot",
                body,
                operation::CopyDbSnapshot,
            )
            .await
        }
    }

    /// Fluent builder for the `CreateDBCluster` operation.
    ///
    /// When creating a cross-region read replica, set `source_region`; the
    /// client generates the `PreSignedUrl` parameter unless one is supplied
    /// explicitly.
    pub struct CreateDbCluster {
        handle: Arc<Handle>,
        inner: input::create_db_cluster_input::Builder,
    }
    fluent_new!(CreateDbCluster);

    impl CreateDbCluster {
        /// The cluster identifier.
        pub fn db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.db_cluster_identifier(value);
            self
        }

        /// The database engine, e.g. `aurora-postgresql`.
        pub fn engine(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.engine(value);
            self
        }

        /// The name for the master user.
        pub fn master_username(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.master_username(value);
            self
        }

        /// The password for the master user.
        pub fn master_user_password(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.master_user_password(value);
            self
        }

        /// True to encrypt the cluster.
        pub fn storage_encrypted(mut self, value: bool) -> Self {
            self.inner = self.inner.storage_encrypted(value);
            self
        }

        /// The KMS key to encrypt the cluster with.
        pub fn kms_key_id(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.kms_key_id(value);
            self
        }

        /// The ARN of the replication source.
        pub fn replication_source_identifier(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.replication_source_identifier(value);
            self
        }

        /// Supplies a presigned URL directly, disabling generation.
        pub fn pre_signed_url(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.pre_signed_url(value);
            self
        }

        /// The region the replication source lives in.
        pub fn source_region(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.source_region(value);
            self
        }

        /// Dispatches the operation and returns the parsed output.
        pub async fn send(
            self,
        ) -> Result<output::CreateDbClusterOutput, SdkError<error::CreateDbClusterError>> {
            let mut input = self.inner.build().map_err(SdkError::construction)?;
            if input.pre_signed_url.is_none() {
                if let Some(source_region) = input.source_region.clone() {
                    let params = query_ser::serialize_create_db_cluster(&input);
                    let url = super::presign_for_input(
                        &self.handle,
                        &source_region,
                        "CreateDBCluster",
                        &params,
                    )
                    .await
                    .map_err(SdkError::construction)?;
                    input.pre_signed_url = Some(url);
                }
            }
            let body = query_ser::encode_body(
                "CreateDBCluster",
                &query_ser::serialize_create_db_cluster(&input),
            );
            super::call(
                &self.handle,
                "CreateDBCluster",
                body,
                operation::CreateDbCluster,
            )
            .await
        }
    }

    /// Fluent builder for the `StartDBInstanceAutomatedBackupsReplication`
    /// operation.
    ///
    /// The source instance lives in another region, so `source_region`
    /// triggers presigned URL generation the same way as the other
    /// cross-region operations.
    pub struct StartDbInstanceAutomatedBackupsReplication {
        handle: Arc<Handle>,
        inner: input::start_db_instance_automated_backups_replication_input::Builder,
    }
    fluent_new!(StartDbInstanceAutomatedBackupsReplication);

    impl StartDbInstanceAutomatedBackupsReplication {
        /// The ARN of the source DB instance.
        pub fn source_db_instance_arn(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.source_db_instance_arn(value);
            self
        }

        /// The retention period for the replicated backups, in days.
        pub fn backup_retention_period(mut self, value: i32) -> Self {
            self.inner = self.inner.backup_retention_period(value);
            self
        }

        /// The KMS key to encrypt the replicated backups with.
        pub fn kms_key_id(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.kms_key_id(value);
            self
        }

        /// Supplies a presigned URL directly, disabling generation.
        pub fn pre_signed_url(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.pre_signed_url(value);
            self
        }

        /// The region the source instance lives in.
        pub fn source_region(mut self, value: impl Into<String>) -> Self {
            self.inner = self.inner.source_region(value);
            self
        }

        /// Dispatches the operation and returns the parsed output.
        pub async fn send(
            self,
        ) -> Result<
            output::StartDbInstanceAutomatedBackupsReplicationOutput,
            SdkError<error::StartDbInstanceAutomatedBackupsReplicationError>,
        > {
            let mut input = self.inner.build().map_err(SdkError::construction)?;
            if input.pre_signed_url.is_none() {
                if let Some(source_region) = input.source_region.clone() {
                    let params =
                        query_ser::serialize_start_db_instance_automated_backups_replication(
                            &input,
                        );
                    let url = super::presign_for_input(
                        &self.handle,
                        &source_region,
                        "StartDBInstanceAutomatedBackupsReplication",
                        &params,
                    )
                    .await
                    .map_err(SdkError::construction)?;
                    input.pre_signed_url = Some(url);
                }
            }
            let body = query_ser::encode_body(
                "StartDBInstanceAutomatedBackupsReplication",
                &query_ser::serialize_start_db_instance_automated_backups_replication(&input),
            );
            super::call(
                &self.handle,
                "StartDBInstanceAutomatedBackupsReplication",
                body,
                operation::StartDbInstanceAutomatedBackupsReplication,
            )
            .await
        }
    }
}
