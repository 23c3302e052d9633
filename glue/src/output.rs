/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs.
//!
//! Every member is optional and unmodeled members are ignored, so a newer
//! service revision never breaks deserialization.

use serde::Deserialize;

use crate::model::{Database, JobRun, Table};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateDatabaseOutput {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDatabaseOutput {
    /// The definition of the requested database.
    pub database: Option<Database>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteDatabaseOutput {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTableOutput {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetTablesOutput {
    /// The requested tables.
    pub table_list: Option<Vec<Table>>,
    /// A continuation token, present if the returned list does not include
    /// the last table.
    pub next_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateJobOutput {
    /// The unique name that was assigned to the job definition.
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartJobRunOutput {
    /// The ID assigned to this job run.
    pub job_run_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetJobRunOutput {
    /// The requested job run metadata.
    pub job_run: Option<JobRun>,
}
