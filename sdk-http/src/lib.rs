/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Core HTTP primitives used by the generated service clients: the request
//! body type, endpoint resolution, query string handling, and the typed
//! result wrappers every operation returns.

pub mod body;
pub mod endpoint;
pub mod operation;
pub mod query;
pub mod query_writer;
pub mod response;
pub mod result;

/// Boxed error type used throughout the runtime crates.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
