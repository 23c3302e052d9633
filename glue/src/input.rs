/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs and their builders.
//!
//! Builders enforce required members: `build` returns
//! [`BuildError::MissingField`](sdk_http::operation::BuildError) rather than
//! sending a request the service is guaranteed to reject.

use serde::Serialize;
use std::collections::HashMap;

use sdk_http::operation::BuildError;

use crate::model::{DatabaseInput, JobCommand, TableInput};

/// Requires a field to be set, naming it in the error when it is not.
fn required<T>(field: Option<T>, name: &'static str) -> Result<T, BuildError> {
    field.ok_or(BuildError::MissingField {
        field: name,
        details: "cannot be empty or unset",
    })
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDatabaseInput {
    /// The metadata for the database.
    pub database_input: DatabaseInput,
}

impl CreateDatabaseInput {
    pub fn builder() -> create_database_input::Builder {
        create_database_input::Builder::default()
    }
}

pub mod create_database_input {
    use super::*;

    /// Builder for [`CreateDatabaseInput`](super::CreateDatabaseInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) database_input: Option<DatabaseInput>,
    }

    impl Builder {
        pub fn database_input(mut self, database_input: DatabaseInput) -> Self {
            self.database_input = Some(database_input);
            self
        }

        pub fn build(self) -> Result<CreateDatabaseInput, BuildError> {
            Ok(CreateDatabaseInput {
                database_input: required(self.database_input, "database_input")?,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDatabaseInput {
    /// The name of the database to retrieve, lowercased when matched.
    pub name: String,
}

impl GetDatabaseInput {
    pub fn builder() -> get_database_input::Builder {
        get_database_input::Builder::default()
    }
}

pub mod get_database_input {
    use super::*;

    /// Builder for [`GetDatabaseInput`](super::GetDatabaseInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) name: Option<String>,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        pub fn build(self) -> Result<GetDatabaseInput, BuildError> {
            Ok(GetDatabaseInput {
                name: required(self.name, "name")?,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDatabaseInput {
    /// The name of the database to delete.
    pub name: String,
}

impl DeleteDatabaseInput {
    pub fn builder() -> delete_database_input::Builder {
        delete_database_input::Builder::default()
    }
}

pub mod delete_database_input {
    use super::*;

    /// Builder for [`DeleteDatabaseInput`](super::DeleteDatabaseInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) name: Option<String>,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        pub fn build(self) -> Result<DeleteDatabaseInput, BuildError> {
            Ok(DeleteDatabaseInput {
                name: required(self.name, "name")?,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableInput {
    /// The catalog database in which to create the new table.
    pub database_name: String,
    /// The metadata for the table.
    pub table_input: TableInput,
}

impl CreateTableInput {
    pub fn builder() -> create_table_input::Builder {
        create_table_input::Builder::default()
    }
}

pub mod create_table_input {
    use super::*;

    /// Builder for [`CreateTableInput`](super::CreateTableInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) database_name: Option<String>,
        pub(crate) table_input: Option<TableInput>,
    }

    impl Builder {
        pub fn database_name(mut self, database_name: impl Into<String>) -> Self {
            self.database_name = Some(database_name.into());
            self
        }

        pub fn table_input(mut self, table_input: TableInput) -> Self {
            self.table_input = Some(table_input);
            self
        }

        pub fn build(self) -> Result<CreateTableInput, BuildError> {
            Ok(CreateTableInput {
                database_name: required(self.database_name, "database_name")?,
                table_input: required(self.table_input, "table_input")?,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTablesInput {
    /// The database whose tables to list.
    pub database_name: String,
    /// A regular expression pattern; only table names matching it are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// A continuation token from a previous call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// The maximum number of tables to return in a single response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetTablesInput {
    pub fn builder() -> get_tables_input::Builder {
        get_tables_input::Builder::default()
    }
}

pub mod get_tables_input {
    use super::*;

    /// Builder for [`GetTablesInput`](super::GetTablesInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) database_name: Option<String>,
        pub(crate) expression: Option<String>,
        pub(crate) next_token: Option<String>,
        pub(crate) max_results: Option<i32>,
    }

    impl Builder {
        pub fn database_name(mut self, database_name: impl Into<String>) -> Self {
            self.database_name = Some(database_name.into());
            self
        }

        pub fn expression(mut self, expression: impl Into<String>) -> Self {
            self.expression = Some(expression.into());
            self
        }

        pub fn next_token(mut self, next_token: impl Into<String>) -> Self {
            self.next_token = Some(next_token.into());
            self
        }

        pub fn max_results(mut self, max_results: i32) -> Self {
            self.max_results = Some(max_results);
            self
        }

        pub fn build(self) -> Result<GetTablesInput, BuildError> {
            Ok(GetTablesInput {
                database_name: required(self.database_name, "database_name")?,
                expression: self.expression,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateJobInput {
    /// The name you assign to this job definition.
    pub name: String,
    /// The IAM role associated with this job.
    pub role: String,
    /// The code that executes the job.
    pub command: JobCommand,
    /// A description of the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The maximum number of times to retry this job after a run fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i32>,
    /// The job timeout in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    /// The Glue version, which determines the Apache Spark and Python
    /// versions available to the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glue_version: Option<String>,
    /// The number of workers allocated when the job runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i32>,
    /// The type of predefined worker allocated when the job runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<String>,
}

impl CreateJobInput {
    pub fn builder() -> create_job_input::Builder {
        create_job_input::Builder::default()
    }
}

pub mod create_job_input {
    use super::*;

    /// Builder for [`CreateJobInput`](super::CreateJobInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) name: Option<String>,
        pub(crate) role: Option<String>,
        pub(crate) command: Option<JobCommand>,
        pub(crate) description: Option<String>,
        pub(crate) max_retries: Option<i32>,
        pub(crate) timeout: Option<i32>,
        pub(crate) glue_version: Option<String>,
        pub(crate) number_of_workers: Option<i32>,
        pub(crate) worker_type: Option<String>,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.name = Some(name.into());
            self
        }

        pub fn role(mut self, role: impl Into<String>) -> Self {
            self.role = Some(role.into());
            self
        }

        pub fn command(mut self, command: JobCommand) -> Self {
            self.command = Some(command);
            self
        }

        pub fn description(mut self, description: impl Into<String>) -> Self {
            self.description = Some(description.into());
            self
        }

        pub fn max_retries(mut self, max_retries: i32) -> Self {
            self.max_retries = Some(max_retries);
            self
        }

        pub fn timeout(mut self, timeout: i32) -> Self {
            self.timeout = Some(timeout);
            self
        }

        pub fn glue_version(mut self, glue_version: impl Into<String>) -> Self {
            self.glue_version = Some(glue_version.into());
            self
        }

        pub fn number_of_workers(mut self, number_of_workers: i32) -> Self {
            self.number_of_workers = Some(number_of_workers);
            self
        }

        pub fn worker_type(mut self, worker_type: impl Into<String>) -> Self {
            self.worker_type = Some(worker_type.into());
            self
        }

        pub fn build(self) -> Result<CreateJobInput, BuildError> {
            Ok(CreateJobInput {
                name: required(self.name, "name")?,
                role: required(self.role, "role")?,
                command: required(self.command, "command")?,
                description: self.description,
                max_retries: self.max_retries,
                timeout: self.timeout,
                glue_version: self.glue_version,
                number_of_workers: self.number_of_workers,
                worker_type: self.worker_type,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartJobRunInput {
    /// The name of the job definition to use.
    pub job_name: String,
    /// Job arguments for this run, replacing the default arguments set in
    /// the job definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<HashMap<String, String>>,
    /// The job run timeout in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    /// The number of workers allocated for this run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i32>,
    /// The type of predefined worker allocated for this run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<String>,
}

impl StartJobRunInput {
    pub fn builder() -> start_job_run_input::Builder {
        start_job_run_input::Builder::default()
    }
}

pub mod start_job_run_input {
    use super::*;

    /// Builder for [`StartJobRunInput`](super::StartJobRunInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) job_name: Option<String>,
        pub(crate) arguments: Option<HashMap<String, String>>,
        pub(crate) timeout: Option<i32>,
        pub(crate) number_of_workers: Option<i32>,
        pub(crate) worker_type: Option<String>,
    }

    impl Builder {
        pub fn job_name(mut self, job_name: impl Into<String>) -> Self {
            self.job_name = Some(job_name.into());
            self
        }

        pub fn arguments(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.arguments
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value.into());
            self
        }

        pub fn timeout(mut self, timeout: i32) -> Self {
            self.timeout = Some(timeout);
            self
        }

        pub fn number_of_workers(mut self, number_of_workers: i32) -> Self {
            self.number_of_workers = Some(number_of_workers);
            self
        }

        pub fn worker_type(mut self, worker_type: impl Into<String>) -> Self {
            self.worker_type = Some(worker_type.into());
            self
        }

        pub fn build(self) -> Result<StartJobRunInput, BuildError> {
            Ok(StartJobRunInput {
                job_name: required(self.job_name, "job_name")?,
                arguments: self.arguments,
                timeout: self.timeout,
                number_of_workers: self.number_of_workers,
                worker_type: self.worker_type,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobRunInput {
    /// The name of the job definition being run.
    pub job_name: String,
    /// The ID of the job run.
    pub run_id: String,
    /// True if a list of predecessor runs should be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessors_included: Option<bool>,
}

impl GetJobRunInput {
    pub fn builder() -> get_job_run_input::Builder {
        get_job_run_input::Builder::default()
    }
}

pub mod get_job_run_input {
    use super::*;

    /// Builder for [`GetJobRunInput`](super::GetJobRunInput).
    #[derive(Debug, Default)]
    pub struct Builder {
        pub(crate) job_name: Option<String>,
        pub(crate) run_id: Option<String>,
        pub(crate) predecessors_included: Option<bool>,
    }

    impl Builder {
        pub fn job_name(mut self, job_name: impl Into<String>) -> Self {
            self.job_name = Some(job_name.into());
            self
        }

        pub fn run_id(mut self, run_id: impl Into<String>) -> Self {
            self.run_id = Some(run_id.into());
            self
        }

        pub fn predecessors_included(mut self, predecessors_included: bool) -> Self {
            self.predecessors_included = Some(predecessors_included);
            self
        }

        pub fn build(self) -> Result<GetJobRunInput, BuildError> {
            Ok(GetJobRunInput {
                job_name: required(self.job_name, "job_name")?,
                run_id: required(self.run_id, "run_id")?,
                predecessors_included: self.predecessors_included,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_requires_database_name() {
        let err = GetTablesInput::builder().expression(".*").build().unwrap_err();
        assert!(err.to_string().contains("database_name"));
    }

    #[test]
    fn required_members_serialize_without_option_wrapping() {
        let input = GetJobRunInput::builder()
            .job_name("nightly-etl")
            .run_id("jr_0123")
            .build()
            .unwrap();
        let body = serde_json::to_string(&input).unwrap();
        assert_eq!(body, r#"{"JobName":"nightly-etl","RunId":"jr_0123"}"#);
    }
}
