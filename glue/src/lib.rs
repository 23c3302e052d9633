/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client for AWS Glue.
//!
//! Glue speaks the `awsJson1_1` protocol: every operation is a `POST /` with
//! an `X-Amz-Target` header naming the operation and a JSON document for the
//! body. Responses carry either the modeled output document or an error
//! discriminated by `__type` (or the `x-amzn-errortype` header).
//!
//! ```no_run
//! # async fn doc() -> Result<(), Box<dyn std::error::Error>> {
//! use glue::{Client, Config, Credentials, Region};
//!
//! let conf = Config::builder()
//!     .region(Region::new("us-east-1"))
//!     .credentials_provider(Credentials::from_keys("AKID", "SECRET", None))
//!     .build();
//! let client = Client::from_conf(conf);
//! let database = client.get_database().name("analytics").send().await?;
//! println!("{:?}", database.database);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod input;
mod json_deser;
mod json_ser;
pub mod model;
pub mod operation;
pub mod output;

pub use client::Client;
pub use config::Config;
pub use sdk_auth::Credentials;
pub use sdk_endpoint::Region;
pub use sdk_http::endpoint::Endpoint;
pub use sdk_http::result::SdkError;
