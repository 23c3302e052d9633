/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Metrics are used to gain insight into the operational performance and health of a system in
//! real time.

use crate::attributes::{Attributes, Context};
use crate::error::ObservabilityError;
use std::any::Any;

/// Provides named instances of [`Meter`].
pub trait ProvideMeter: Send + Sync {
    /// Get or create a named [`Meter`].
    fn get_meter(&self, scope: &'static str, attributes: Option<&Attributes>) -> Box<dyn Meter>;

    /// Optional method to flush the metrics pipeline, default is noop
    fn flush(&self) -> Result<(), ObservabilityError> {
        Ok(())
    }

    /// Optional method to shutdown the metrics provider, default is noop
    fn shutdown(&self) -> Result<(), ObservabilityError> {
        Ok(())
    }

    /// Cast to [`Any`] for downcasting to a concrete provider.
    fn as_any(&self) -> &dyn Any;
}

/// The entry point to creating instruments. A grouping of related metrics.
pub trait Meter: Send + Sync {
    /// Create a new Gauge. The `callback` is invoked by the backend on
    /// collection; recording stops when [`AsyncMeasurement::stop`] is called
    /// on the returned handle.
    fn create_gauge(
        &self,
        name: String,
        callback: Box<dyn Fn(&dyn AsyncMeasurement<Value = f64>) + Send + Sync>,
        units: Option<String>,
        description: Option<String>,
    ) -> Box<dyn AsyncMeasurement<Value = f64>>;

    /// Create a new [`UpDownCounter`].
    fn create_up_down_counter(
        &self,
        name: String,
        units: Option<String>,
        description: Option<String>,
    ) -> Box<dyn UpDownCounter>;

    /// Create a new [`MonotonicCounter`].
    fn create_monotonic_counter(
        &self,
        name: String,
        units: Option<String>,
        description: Option<String>,
    ) -> Box<dyn MonotonicCounter>;

    /// Create a new [`Histogram`].
    fn create_histogram(
        &self,
        name: String,
        units: Option<String>,
        description: Option<String>,
    ) -> Box<dyn Histogram>;
}

/// Collects a set of events with an event count and sum for all events.
pub trait Histogram: Send + Sync {
    /// Record a value.
    fn record(&self, value: f64, attributes: Option<&Attributes>, context: Option<&dyn Context>);
}

/// A counter that monotonically increases.
pub trait MonotonicCounter: Send + Sync {
    /// Increment a counter by a fixed amount.
    fn add(&self, value: u64, attributes: Option<&Attributes>, context: Option<&dyn Context>);
}

/// A counter that can increase or decrease.
pub trait UpDownCounter: Send + Sync {
    /// Increment or decrement a counter by a fixed amount.
    fn add(&self, value: i64, attributes: Option<&Attributes>, context: Option<&dyn Context>);
}

/// A measurement that can be taken asynchronously.
pub trait AsyncMeasurement: Send + Sync {
    /// The type recorded by the measurement.
    type Value;

    /// Record a value
    fn record(
        &self,
        value: Self::Value,
        attributes: Option<&Attributes>,
        context: Option<&dyn Context>,
    );

    /// Stop recording and unregister the callback.
    fn stop(&self);
}
