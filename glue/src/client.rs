/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The Glue client and its fluent operation builders.
//!
//! Every operation follows the same dispatch sequence:
//! 1. fail fast if no endpoint resolver is configured,
//! 2. resolve the endpoint from the configured region,
//! 3. serialize the input into a JSON body,
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
        attributes.set("rpc.service", "glue");
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

/// Client for AWS Glue.
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
                metrics: ClientMetrics::register("glue"),
            }),
        }
    }

    pub fn create_database(&self) -> fluent_builders::CreateDatabase {
        fluent_builders::CreateDatabase::new(self.handle.clone())
    }

    pub fn get_database(&self) -> fluent_builders::GetDatabase {
        fluent_builders::GetDatabase::new(self.handle.clone())
    }

    pub fn delete_database(&self) -> fluent_builders::DeleteDatabase {
        fluent_builders::DeleteDatabase::new(self.handle.clone())
    }

    pub fn create_table(&self) -> fluent_builders::CreateTable {
        fluent_builders::CreateTable::new(self.handle.clone())
    }

    pub fn get_tables(&self) -> fluent_builders::GetTables {
        fluent_builders::GetTables::new(self.handle.clone())
    }

    pub fn create_job(&self) -> fluent_builders::CreateJob {
        fluent_builders::CreateJob::new(self.handle.clone())
    }

    pub fn start_job_run(&self) -> fluent_builders::StartJobRun {
        fluent_builders::StartJobRun::new(self.handle.clone())
    }

    pub fn get_job_run(&self) -> fluent_builders::GetJobRun {
        fluent_builders::GetJobRun::new(self.handle.clone())
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
    target: &'static str,
    body: Vec<u8>,
    parser: P,
) -> Result<O, SdkError<E>>
where
    P: ParseStrictResponse<Output = Result<O, E>>,
{
    tracing::debug!(operation, "sending request");
    let start = Instant::now();
    let result = dispatch(handle, target, body, parser).await;
    if result.is_err() {
        tracing::debug!(operation, "operation returned an error");
    }
    handle
        .metrics
        .record_call(operation, start.elapsed(), result.is_ok());
    result
}

async fn dispatch<O, E, P>(
    handle: &Handle,
    target: &'static str,
    body: Vec<u8>,
    parser: P,
) -> Result<O, SdkError<E>>
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
        .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .body(SdkBody::from(body.clone()))
        .map_err(SdkError::construction)?;
    let mut uri = request.uri().clone();
    resolved.set_endpoint(&mut uri);
    *request.uri_mut() = uri;
    // Set `host` explicitly so the signed value is visible on the wire.
    if let Some(authority) = request.uri().authority() {
        let host = http::HeaderValue::from_str(authority.as_str()).map_err(SdkError::construction)?;
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

pub mod fluent_builders {
    //! One builder per operation; `send` consumes the builder and performs
    //! the call.

    use std::sync::Arc;

    use sdk_http::result::SdkError;

    use crate::error;
    use crate::input;
    use crate::json_ser::serialize_body;
    use crate::model::{DatabaseInput, JobCommand, TableInput};
    use crate::operation;
    use crate::output;

    use super::Handle;

    macro_rules! send_impl {
        ($builder:ty, $op:ident, $output:ident, $error:ident) => {
            impl $builder {
                pub(crate) fn new(handle: Arc<Handle>) -> Self {
                    Self {
                        handle,
                        inner: Default::default(),
                    }
                }

                /// Dispatches the operation and returns the parsed output.
                pub async fn send(
                    self,
                ) -> Result<output::$output, SdkError<error::$error>> {
                    let input = self.inner.build().map_err(SdkError::construction)?;
                    let body = serialize_body(&input).map_err(SdkError::construction)?;
                    super::call(
                        &self.handle,
                        stringify!($op),
                        concat!("AWSGlue.", stringify!($op)),
                        body,
                        operation::$op,
                    )
                    .await
                }
            }
        };
    }

    /// Fluent builder for the `CreateDatabase` operation.
    pub struct CreateDatabase {
        handle: Arc<Handle>,
        inner: input::create_database_input::Builder,
    }
    send_impl!(CreateDatabase, CreateDatabase, CreateDatabaseOutput, CreateDatabaseError);

    impl CreateDatabase {
        /// The metadata for the new database.
        pub fn database_input(mut self, database_input: DatabaseInput) -> Self {
            self.inner = self.inner.database_input(database_input);
            self
        }
    }

    /// Fluent builder for the `GetDatabase` operation.
    pub struct GetDatabase {
        handle: Arc<Handle>,
        inner: input::get_database_input::Builder,
    }
    send_impl!(GetDatabase, GetDatabase, GetDatabaseOutput, GetDatabaseError);

    impl GetDatabase {
        /// The name of the database to retrieve.
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.name(name);
            self
        }
    }

    /// Fluent builder for the `DeleteDatabase` operation.
    pub struct DeleteDatabase {
        handle: Arc<Handle>,
        inner: input::delete_database_input::Builder,
    }
    send_impl!(DeleteDatabase, DeleteDatabase, DeleteDatabaseOutput, DeleteDatabaseError);

    impl DeleteDatabase {
        /// The name of the database to delete.
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.name(name);
            self
        }
    }

    /// Fluent builder for the `CreateTable` operation.
    pub struct CreateTable {
        handle: Arc<Handle>,
        inner: input::create_table_input::Builder,
    }
    send_impl!(CreateTable, CreateTable, CreateTableOutput, CreateTableError);

    impl CreateTable {
        /// The catalog database in which to create the new table.
        pub fn database_name(mut self, database_name: impl Into<String>) -> Self {
            self.inner = self.inner.database_name(database_name);
            self
        }

        /// The metadata for the new table.
        pub fn table_input(mut self, table_input: TableInput) -> Self {
            self.inner = self.inner.table_input(table_input);
            self
        }
    }

    /// Fluent builder for the `GetTables` operation.
    pub struct GetTables {
        handle: Arc<Handle>,
        inner: input::get_tables_input::Builder,
    }
    send_impl!(GetTables, GetTables, GetTablesOutput, GetTablesError);

    impl GetTables {
        /// The database whose tables to list.
        pub fn database_name(mut self, database_name: impl Into<String>) -> Self {
            self.inner = self.inner.database_name(database_name);
            self
        }

        /// A regular expression pattern restricting the returned table names.
        pub fn expression(mut self, expression: impl Into<String>) -> Self {
            self.inner = self.inner.expression(expression);
            self
        }

        /// A continuation token from a previous call.
        pub fn next_token(mut self, next_token: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(next_token);
            self
        }

        /// The maximum number of tables to return.
        pub fn max_results(mut self, max_results: i32) -> Self {
            self.inner = self.inner.max_results(max_results);
            self
        }
    }

    /// Fluent builder for the `CreateJob` operation.
    pub struct CreateJob {
        handle: Arc<Handle>,
        inner: input::create_job_input::Builder,
    }
    send_impl!(CreateJob, CreateJob, CreateJobOutput, CreateJobError);

    impl CreateJob {
        /// The name to assign to the job definition.
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.name(name);
            self
        }

        /// The IAM role associated with the job.
        pub fn role(mut self, role: impl Into<String>) -> Self {
            self.inner = self.inner.role(role);
            self
        }

        /// The code executed when the job runs.
        pub fn command(mut self, command: JobCommand) -> Self {
            self.inner = self.inner.command(command);
            self
        }

        /// A description of the job.
        pub fn description(mut self, description: impl Into<String>) -> Self {
            self.inner = self.inner.description(description);
            self
        }

        /// The maximum number of retries after a failed run.
        pub fn max_retries(mut self, max_retries: i32) -> Self {
            self.inner = self.inner.max_retries(max_retries);
            self
        }

        /// The job timeout in minutes.
        pub fn timeout(mut self, timeout: i32) -> Self {
            self.inner = self.inner.timeout(timeout);
            self
        }

        /// The Glue version the job runs against.
        pub fn glue_version(mut self, glue_version: impl Into<String>) -> Self {
            self.inner = self.inner.glue_version(glue_version);
            self
        }

        /// The number of workers allocated when the job runs.
        pub fn number_of_workers(mut self, number_of_workers: i32) -> Self {
            self.inner = self.inner.number_of_workers(number_of_workers);
            self
        }

        /// The type of predefined worker allocated when the job runs.
        pub fn worker_type(mut self, worker_type: impl Into<String>) -> Self {
            self.inner = self.inner.worker_type(worker_type);
            self
        }
    }

    /// Fluent builder for the `StartJobRun` operation.
    pub struct StartJobRun {
        handle: Arc<Handle>,
        inner: input::start_job_run_input::Builder,
    }
    send_impl!(StartJobRun, StartJobRun, StartJobRunOutput, StartJobRunError);

    impl StartJobRun {
        /// The name of the job definition to run.
        pub fn job_name(mut self, job_name: impl Into<String>) -> Self {
            self.inner = self.inner.job_name(job_name);
            self
        }

        /// Adds a job argument for this run.
        pub fn arguments(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.inner = self.inner.arguments(key, value);
            self
        }

        /// The job run timeout in minutes.
        pub fn timeout(mut self, timeout: i32) -> Self {
            self.inner = self.inner.timeout(timeout);
            self
        }

        /// The number of workers allocated for this run.
        pub fn number_of_workers(mut self, number_of_workers: i32) -> Self {
            self.inner = self.inner.number_of_workers(number_of_workers);
            self
        }

        /// The type of predefined worker allocated for this run.
        pub fn worker_type(mut self, worker_type: impl Into<String>) -> Self {
            self.inner = self.inner.worker_type(worker_type);
            self
        }
    }

    /// Fluent builder for the `GetJobRun` operation.
    pub struct GetJobRun {
        handle: Arc<Handle>,
        inner: input::get_job_run_input::Builder,
    }
    send_impl!(GetJobRun, GetJobRun, GetJobRunOutput, GetJobRunError);

    impl GetJobRun {
        /// The name of the job definition being run.
        pub fn job_name(mut self, job_name: impl Into<String>) -> Self {
            self.inner = self.inner.job_name(job_name);
            self
        }

        /// The ID of the job run.
        pub fn run_id(mut self, run_id: impl Into<String>) -> Self {
            self.inner = self.inner.run_id(run_id);
            self
        }

        /// True if predecessor runs should be included.
        pub fn predecessors_included(mut self, predecessors_included: bool) -> Self {
            self.inner = self.inner.predecessors_included(predecessors_included);
            self
        }
    }
}
