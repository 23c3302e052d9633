/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request body serialization for the `awsJson1_1` protocol.

use serde::Serialize;

use sdk_http::operation::BuildError;

/// Serializes an operation input into its JSON document body.
pub(crate) fn serialize_body<T: Serialize>(input: &T) -> Result<Vec<u8>, BuildError> {
    serde_json::to_vec(input).map_err(|err| BuildError::SerializationError(err.into()))
}

#[cfg(test)]
mod test {
    use super::serialize_body;
    use crate::input::CreateTableInput;
    use crate::model::{Column, StorageDescriptor, TableInput};

    #[test]
    fn nested_shapes_serialize_in_pascal_case() {
        let input = CreateTableInput::builder()
            .database_name("analytics")
            .table_input(
                TableInput::builder()
                    .name("events")
                    .storage_descriptor(
                        StorageDescriptor::builder()
                            .columns(Column::builder().name("id").r#type("string").build())
                            .location("s3://bucket/events/")
                            .build(),
                    )
                    .build(),
            )
            .build()
            .unwrap();
        let body: serde_json::Value =
            serde_json::from_slice(&serialize_body(&input).unwrap()).unwrap();
        assert_eq!(body["DatabaseName"], "analytics");
        assert_eq!(body["TableInput"]["Name"], "events");
        assert_eq!(
            body["TableInput"]["StorageDescriptor"]["Columns"][0]["Type"],
            "string"
        );
        // unset optional members are omitted entirely
        assert!(body["TableInput"]
            .as_object()
            .unwrap()
            .get("Description")
            .is_none());
    }
}
