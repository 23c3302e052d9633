/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes shared between operation inputs and outputs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use sdk_types::DateTime;

/// The structure used to create or update a database.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseInput {
    /// The name of the database, lowercased when stored.
    pub name: Option<String>,
    /// A description of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The location of the database, for example an Amazon S3 path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_uri: Option<String>,
    /// Key/value pairs that define parameters and properties of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
}

impl DatabaseInput {
    /// Returns a builder for `DatabaseInput`.
    pub fn builder() -> database_input::Builder {
        database_input::Builder::default()
    }
}

pub mod database_input {
    //! Builder for [`DatabaseInput`](super::DatabaseInput).
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct Builder {
        inner: super::DatabaseInput,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.inner.name = Some(name.into());
            self
        }

        pub fn description(mut self, description: impl Into<String>) -> Self {
            self.inner.description = Some(description.into());
            self
        }

        pub fn location_uri(mut self, location_uri: impl Into<String>) -> Self {
            self.inner.location_uri = Some(location_uri.into());
            self
        }

        pub fn parameters(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.inner
                .parameters
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value.into());
            self
        }

        pub fn build(self) -> super::DatabaseInput {
            self.inner
        }
    }
}

/// A database in the Glue Data Catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Database {
    /// The name of the database.
    pub name: Option<String>,
    /// A description of the database.
    pub description: Option<String>,
    /// The location of the database.
    pub location_uri: Option<String>,
    /// Parameters and properties of the database.
    pub parameters: Option<HashMap<String, String>>,
    /// The time at which the metadata database was created in the catalog.
    pub create_time: Option<DateTime>,
}

/// A column in a `Table`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Column {
    /// The name of the column.
    pub name: Option<String>,
    /// The data type of the column.
    #[serde(rename = "Type")]
    pub r#type: Option<String>,
    /// A free-form text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Column {
    /// Returns a builder for `Column`.
    pub fn builder() -> column::Builder {
        column::Builder::default()
    }
}

pub mod column {
    //! Builder for [`Column`](super::Column).

    #[derive(Debug, Default)]
    pub struct Builder {
        inner: super::Column,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.inner.name = Some(name.into());
            self
        }

        pub fn r#type(mut self, r#type: impl Into<String>) -> Self {
            self.inner.r#type = Some(r#type.into());
            self
        }

        pub fn comment(mut self, comment: impl Into<String>) -> Self {
            self.inner.comment = Some(comment.into());
            self
        }

        pub fn build(self) -> super::Column {
            self.inner
        }
    }
}

/// Describes the physical storage of table data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageDescriptor {
    /// The columns of the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    /// The physical location of the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The input format class for the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,
    /// The output format class for the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    /// True if the data is compressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,
}

impl StorageDescriptor {
    /// Returns a builder for `StorageDescriptor`.
    pub fn builder() -> storage_descriptor::Builder {
        storage_descriptor::Builder::default()
    }
}

pub mod storage_descriptor {
    //! Builder for [`StorageDescriptor`](super::StorageDescriptor).

    #[derive(Debug, Default)]
    pub struct Builder {
        inner: super::StorageDescriptor,
    }

    impl Builder {
        pub fn columns(mut self, column: super::Column) -> Self {
            self.inner.columns.get_or_insert_with(Vec::new).push(column);
            self
        }

        pub fn location(mut self, location: impl Into<String>) -> Self {
            self.inner.location = Some(location.into());
            self
        }

        pub fn input_format(mut self, input_format: impl Into<String>) -> Self {
            self.inner.input_format = Some(input_format.into());
            self
        }

        pub fn output_format(mut self, output_format: impl Into<String>) -> Self {
            self.inner.output_format = Some(output_format.into());
            self
        }

        pub fn compressed(mut self, compressed: bool) -> Self {
            self.inner.compressed = Some(compressed);
            self
        }

        pub fn build(self) -> super::StorageDescriptor {
            self.inner
        }
    }
}

/// The structure used to create or update a table.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableInput {
    /// The table name.
    pub name: Option<String>,
    /// A description of the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The table owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// The type of this table, e.g. `EXTERNAL_TABLE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
    /// A storage descriptor containing information about the physical storage
    /// of this table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_descriptor: Option<StorageDescriptor>,
    /// Properties associated with this table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
}

impl TableInput {
    /// Returns a builder for `TableInput`.
    pub fn builder() -> table_input::Builder {
        table_input::Builder::default()
    }
}

pub mod table_input {
    //! Builder for [`TableInput`](super::TableInput).
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct Builder {
        inner: super::TableInput,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.inner.name = Some(name.into());
            self
        }

        pub fn description(mut self, description: impl Into<String>) -> Self {
            self.inner.description = Some(description.into());
            self
        }

        pub fn owner(mut self, owner: impl Into<String>) -> Self {
            self.inner.owner = Some(owner.into());
            self
        }

        pub fn table_type(mut self, table_type: impl Into<String>) -> Self {
            self.inner.table_type = Some(table_type.into());
            self
        }

        pub fn storage_descriptor(mut self, storage_descriptor: super::StorageDescriptor) -> Self {
            self.inner.storage_descriptor = Some(storage_descriptor);
            self
        }

        pub fn parameters(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.inner
                .parameters
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value.into());
            self
        }

        pub fn build(self) -> super::TableInput {
            self.inner
        }
    }
}

/// A table in the Glue Data Catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Table {
    /// The table name.
    pub name: Option<String>,
    /// The name of the database where the table resides.
    pub database_name: Option<String>,
    /// A description of the table.
    pub description: Option<String>,
    /// The owner of the table.
    pub owner: Option<String>,
    /// The type of this table.
    pub table_type: Option<String>,
    /// The storage descriptor for this table.
    pub storage_descriptor: Option<StorageDescriptor>,
    /// Properties associated with this table.
    pub parameters: Option<HashMap<String, String>>,
    /// The time when the table was created.
    pub create_time: Option<DateTime>,
    /// The last time the table was updated.
    pub update_time: Option<DateTime>,
}

/// Specifies code executed when a job is run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JobCommand {
    /// The name of the job command: `glueetl`, `pythonshell` or `gluestreaming`.
    pub name: Option<String>,
    /// The Amazon S3 path to a script that executes a job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_location: Option<String>,
    /// The Python version being used to execute a Python shell job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,
}

impl JobCommand {
    /// Returns a builder for `JobCommand`.
    pub fn builder() -> job_command::Builder {
        job_command::Builder::default()
    }
}

pub mod job_command {
    //! Builder for [`JobCommand`](super::JobCommand).

    #[derive(Debug, Default)]
    pub struct Builder {
        inner: super::JobCommand,
    }

    impl Builder {
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.inner.name = Some(name.into());
            self
        }

        pub fn script_location(mut self, script_location: impl Into<String>) -> Self {
            self.inner.script_location = Some(script_location.into());
            self
        }

        pub fn python_version(mut self, python_version: impl Into<String>) -> Self {
            self.inner.python_version = Some(python_version.into());
            self
        }

        pub fn build(self) -> super::JobCommand {
            self.inner
        }
    }
}

/// The condition of a job run.
///
/// `Unknown` preserves values added by the service after this client was
/// generated, so deserialization never fails on a new state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobRunState {
    Starting,
    Running,
    Stopping,
    Stopped,
    Succeeded,
    Failed,
    Timeout,
    Unknown(String),
}

impl JobRunState {
    /// The wire representation of this state.
    pub fn as_str(&self) -> &str {
        match self {
            JobRunState::Starting => "STARTING",
            JobRunState::Running => "RUNNING",
            JobRunState::Stopping => "STOPPING",
            JobRunState::Stopped => "STOPPED",
            JobRunState::Succeeded => "SUCCEEDED",
            JobRunState::Failed => "FAILED",
            JobRunState::Timeout => "TIMEOUT",
            JobRunState::Unknown(value) => value.as_str(),
        }
    }
}

impl From<&str> for JobRunState {
    fn from(value: &str) -> Self {
        match value {
            "STARTING" => JobRunState::Starting,
            "RUNNING" => JobRunState::Running,
            "STOPPING" => JobRunState::Stopping,
            "STOPPED" => JobRunState::Stopped,
            "SUCCEEDED" => JobRunState::Succeeded,
            "FAILED" => JobRunState::Failed,
            "TIMEOUT" => JobRunState::Timeout,
            other => JobRunState::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for JobRunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for JobRunState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JobRunState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(JobRunState::from(value.as_str()))
    }
}

/// Contains information about a job run.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JobRun {
    /// The ID of this job run.
    pub id: Option<String>,
    /// The number of the attempt to run this job.
    pub attempt: Option<i32>,
    /// The name of the job definition being used in this run.
    pub job_name: Option<String>,
    /// The date and time at which this job run was started.
    pub started_on: Option<DateTime>,
    /// The date and time that this job run completed.
    pub completed_on: Option<DateTime>,
    /// The current state of the job run.
    pub job_run_state: Option<JobRunState>,
    /// The job arguments associated with this run.
    pub arguments: Option<HashMap<String, String>>,
    /// An error message associated with this job run.
    pub error_message: Option<String>,
    /// The amount of time (in seconds) that the job run consumed resources.
    pub execution_time: Option<i32>,
}

#[cfg(test)]
mod test {
    use super::JobRunState;

    #[test]
    fn job_run_state_round_trips_unknown_values() {
        assert_eq!(JobRunState::from("SUCCEEDED"), JobRunState::Succeeded);
        let state = JobRunState::from("WAITING");
        assert_eq!(state, JobRunState::Unknown("WAITING".to_string()));
        assert_eq!(state.as_str(), "WAITING");
    }

    #[test]
    fn job_run_state_deserializes_from_json_string() {
        let state: JobRunState = serde_json::from_str("\"RUNNING\"").unwrap();
        assert_eq!(state, JobRunState::Running);
    }
}
