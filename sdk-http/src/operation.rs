/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors raised while constructing a request, before it is dispatched.

use std::fmt;

use crate::BoxError;

/// The request could not be constructed.
#[derive(Debug)]
pub enum BuildError {
    /// A required field was missing from the input.
    MissingField {
        /// The name of the missing field.
        field: &'static str,
        /// Why the field is required.
        details: &'static str,
    },
    /// The input could not be serialized.
    SerializationError(BoxError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingField { field, details } => {
                write!(f, "missing required field `{}`: {}", field, details)
            }
            BuildError::SerializationError(err) => {
                write!(f, "failed to serialize input: {}", err)
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::SerializationError(err) => Some(err.as_ref() as _),
            _ => None,
        }
    }
}
