/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled service errors.
//!
//! Each operation has its own error enum so callers can match exhaustively
//! on the set of failures that operation is documented to return. Responses
//! whose `__type` is not modeled land in the `Unhandled` variant with the
//! generic error metadata preserved.

use std::fmt;

/// Defines an exception shape: a struct carrying the service message plus
/// the generic metadata it was parsed from.
macro_rules! modeled_exception {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            /// The message describing the problem.
            pub message: Option<String>,
            pub(crate) meta: sdk_types::Error,
        }

        impl $name {
            /// The request id attached to the failed response, when present.
            pub fn request_id(&self) -> Option<&str> {
                self.meta.request_id()
            }

            pub(crate) fn from_meta(meta: sdk_types::Error) -> Self {
                Self {
                    message: meta.message().map(str::to_string),
                    meta,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, stringify!($name))?;
                if let Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}
    };
}

modeled_exception! {
    /// A resource with the same name already exists.
    AlreadyExistsException
}
modeled_exception! {
    /// Too many jobs are being run concurrently.
    ConcurrentRunsExceededException
}
modeled_exception! {
    /// A specified entity does not exist.
    EntityNotFoundException
}
modeled_exception! {
    /// An internal service error occurred.
    InternalServiceException
}
modeled_exception! {
    /// The input provided was not valid.
    InvalidInputException
}
modeled_exception! {
    /// The operation timed out.
    OperationTimeoutException
}
modeled_exception! {
    /// A resource numerical limit was exceeded.
    ResourceNumberLimitExceededException
}

/// Defines a per-operation error enum over the exception shapes the
/// operation can return, plus `Unhandled` for everything else.
macro_rules! operation_error {
    ($(#[$docs:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$docs])*
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum $name {
            $($variant($variant),)+
            /// An error the client does not model, including newly added
            /// exception types and malformed responses.
            Unhandled(sdk_types::Error),
        }

        impl $name {
            /// The service error code, e.g. `EntityNotFoundException`.
            pub fn code(&self) -> Option<&str> {
                match self {
                    $(Self::$variant(_) => Some(stringify!($variant)),)+
                    Self::Unhandled(meta) => meta.code(),
                }
            }

            pub(crate) fn from_meta(meta: sdk_types::Error) -> Self {
                $(
                    if meta.code() == Some(stringify!($variant)) {
                        return Self::$variant($variant::from_meta(meta));
                    }
                )+
                Self::Unhandled(meta)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(err) => err.fmt(f),)+
                    Self::Unhandled(meta) => meta.fmt(f),
                }
            }
        }

        impl std::error::Error for $name {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match self {
                    $(Self::$variant(err) => Some(err),)+
                    Self::Unhandled(meta) => Some(meta),
                }
            }
        }
    };
}

operation_error! {
    /// Errors returned by `CreateDatabase`.
    CreateDatabaseError {
        AlreadyExistsException,
        InternalServiceException,
        InvalidInputException,
        OperationTimeoutException,
        ResourceNumberLimitExceededException,
    }
}

operation_error! {
    /// Errors returned by `GetDatabase`.
    GetDatabaseError {
        EntityNotFoundException,
        InternalServiceException,
        InvalidInputException,
        OperationTimeoutException,
    }
}

operation_error! {
    /// Errors returned by `DeleteDatabase`.
    DeleteDatabaseError {
        EntityNotFoundException,
        InternalServiceException,
        InvalidInputException,
        OperationTimeoutException,
    }
}

operation_error! {
    /// Errors returned by `CreateTable`.
    CreateTableError {
        AlreadyExistsException,
        EntityNotFoundException,
        InternalServiceException,
        InvalidInputException,
        OperationTimeoutException,
        ResourceNumberLimitExceededException,
    }
}

operation_error! {
    /// Errors returned by `GetTables`.
    GetTablesError {
        EntityNotFoundException,
        InternalServiceException,
        InvalidInputException,
        OperationTimeoutException,
    }
}

operation_error! {
    /// Errors returned by `CreateJob`.
    CreateJobError {
        AlreadyExistsException,
        InternalServiceException,
        InvalidInputException,
        OperationTimeoutException,
        ResourceNumberLimitExceededException,
    }
}

operation_error! {
    /// Errors returned by `StartJobRun`.
    StartJobRunError {
        ConcurrentRunsExceededException,
        EntityNotFoundException,
        InternalServiceException,
        InvalidInputException,
        OperationTimeoutException,
        ResourceNumberLimitExceededException,
    }
}

operation_error! {
    /// Errors returned by `GetJobRun`.
    GetJobRunError {
        EntityNotFoundException,
        InternalServiceException,
        InvalidInputException,
        OperationTimeoutException,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn modeled_code_maps_to_variant() {
        let meta = sdk_types::Error::builder()
            .code("EntityNotFoundException")
            .message("Database not found")
            .build();
        let err = GetDatabaseError::from_meta(meta);
        match &err {
            GetDatabaseError::EntityNotFoundException(inner) => {
                assert_eq!(inner.message.as_deref(), Some("Database not found"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
        assert_eq!(err.code(), Some("EntityNotFoundException"));
    }

    #[test]
    fn unmodeled_code_is_unhandled() {
        let meta = sdk_types::Error::builder()
            .code("GlueEncryptionException")
            .build();
        let err = GetDatabaseError::from_meta(meta);
        assert!(matches!(err, GetDatabaseError::Unhandled(_)));
        assert_eq!(err.code(), Some("GlueEncryptionException"));
    }
}
