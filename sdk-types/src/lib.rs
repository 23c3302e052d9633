/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types shared by the generated service clients.

mod date_time;
pub mod error;

pub use date_time::{DateTime, DateTimeParseError};
pub use error::Error;
