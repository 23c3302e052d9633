/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities to transform from the vendor-neutral [`Attributes`] to
//! OTel [`KeyValue`]s.

use opentelemetry::{KeyValue, Value};
use sdk_observability::attributes::{AttributeValue, Attributes};

pub(crate) fn kv_from_option_attr(input: Option<&Attributes>) -> Vec<KeyValue> {
    input.map(kv_from_attr).unwrap_or_default()
}

fn kv_from_attr(attrs: &Attributes) -> Vec<KeyValue> {
    attrs
        .attributes()
        .iter()
        .map(|(k, v)| {
            KeyValue::new(
                k.clone(),
                match v {
                    AttributeValue::LONG(val) => Value::I64(*val),
                    AttributeValue::DOUBLE(val) => Value::F64(*val),
                    AttributeValue::STRING(val) => Value::String(val.clone().into()),
                    AttributeValue::BOOLEAN(val) => Value::Bool(*val),
                    _ => Value::String("UNSUPPORTED ATTRIBUTE VALUE TYPE".into()),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::kv_from_option_attr;
    use opentelemetry::Value;
    use sdk_observability::attributes::Attributes;

    #[test]
    fn converts_all_value_types() {
        let mut attrs = Attributes::new();
        attrs.set("s", "string");
        attrs.set("i", 1_i64);
        attrs.set("f", 2.5_f64);
        attrs.set("b", true);

        let kvs = kv_from_option_attr(Some(&attrs));
        assert_eq!(kvs.len(), 4);
        let value_of = |key: &str| {
            kvs.iter()
                .find(|kv| kv.key.as_str() == key)
                .map(|kv| kv.value.clone())
                .unwrap()
        };
        assert_eq!(value_of("s"), Value::String("string".into()));
        assert_eq!(value_of("i"), Value::I64(1));
        assert_eq!(value_of("f"), Value::F64(2.5));
        assert_eq!(value_of("b"), Value::Bool(true));
    }

    #[test]
    fn none_becomes_empty() {
        assert!(kv_from_option_attr(None).is_empty());
    }
}
