/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client for Amazon Relational Database Service.
//!
//! RDS speaks the `awsQuery` protocol: every operation is a `POST /` with a
//! form-urlencoded body carrying an `Action` and `Version` pair, and the
//! response is an XML document. Cross-region operations (`CopyDBSnapshot`,
//! `CreateDBCluster`, `StartDBInstanceAutomatedBackupsReplication`) accept a
//! `source_region`; when it is set and no `pre_signed_url` was supplied, the
//! client generates one by SigV4 query-parameter signing a GET request
//! against the source region's endpoint.
//!
//! ```no_run
//! # async fn doc() -> Result<(), Box<dyn std::error::Error>> {
//! use rds::{Client, Config, Credentials, Region};
//!
//! let conf = Config::builder()
//!     .region(Region::new("us-east-1"))
//!     .credentials_provider(Credentials::from_keys("AKID", "SECRET", None))
//!     .build();
//! let client = Client::from_conf(conf);
//! let snapshot = client
//!     .copy_db_snapshot()
//!     .source_db_snapshot_identifier(
//!         "arn:aws:rds:us-west-2:123456789012:snapshot:nightly",
//!     )
//!     .target_db_snapshot_identifier("nightly-copy")
//!     .source_region("us-west-2")
//!     .send()
//!     .await?;
//! println!("{:?}", snapshot.db_snapshot);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
pub mod presigning;
mod query_ser;
mod xml_deser;

pub use client::Client;
pub use config::Config;
pub use sdk_auth::Credentials;
pub use sdk_endpoint::Region;
pub use sdk_http::endpoint::Endpoint;
pub use sdk_http::result::SdkError;
