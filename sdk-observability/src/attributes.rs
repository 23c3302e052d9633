/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Attributes (also referred to as tags or annotations in other telemetry systems) are structured
//! key-value pairs that annotate a measurement. Structured data allows observability backends
//! to index and process telemetry data in ways that simple log messages lack.

use std::collections::HashMap;

/// Helper type alias to stay aligned with the type names in the telemetry API
pub type Long = i64;
/// Helper type alias to stay aligned with the type names in the telemetry API
pub type Double = f64;

/// The valid types of values accepted by [`Attributes`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[allow(non_camel_case_types)]
pub enum AttributeValue {
    /// Holds an [`i64`]
    LONG(Long),
    /// Holds an [`f64`]
    DOUBLE(Double),
    /// Holds a [`String`]
    STRING(String),
    /// Holds a [`bool`]
    BOOLEAN(bool),
}

impl From<Long> for AttributeValue {
    fn from(value: Long) -> Self {
        AttributeValue::LONG(value)
    }
}

impl From<Double> for AttributeValue {
    fn from(value: Double) -> Self {
        AttributeValue::DOUBLE(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::STRING(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::STRING(value.to_string())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::BOOLEAN(value)
    }
}

/// Structured telemetry metadata.
#[derive(Clone, Debug, Default)]
pub struct Attributes {
    attrs: HashMap<String, AttributeValue>,
}

impl Attributes {
    /// Create a new empty instance of [`Attributes`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Get an attribute.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attrs.get(key)
    }

    /// Get all of the attribute key value pairs.
    pub fn attributes(&self) -> &HashMap<String, AttributeValue> {
        &self.attrs
    }
}

/// A cross cutting concern for carrying execution-scoped values across API
/// boundaries (both in-process and distributed).
pub trait Context {
    /// Make this context the currently active context.
    fn make_current(&self);
}
