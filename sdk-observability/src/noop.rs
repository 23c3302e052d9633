/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A noop implementation of the Meter traits

use std::marker::PhantomData;

use crate::attributes::{Attributes, Context};
use crate::meter::{
    AsyncMeasurement, Histogram, Meter, MonotonicCounter, ProvideMeter, UpDownCounter,
};

pub(crate) struct NoopMeterProvider;

impl ProvideMeter for NoopMeterProvider {
    fn get_meter(&self, _scope: &'static str, _attributes: Option<&Attributes>) -> Box<dyn Meter> {
        Box::new(NoopMeter)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub(crate) struct NoopMeter;

impl Meter for NoopMeter {
    fn create_gauge(
        &self,
        _name: String,
        _callback: Box<dyn Fn(&dyn AsyncMeasurement<Value = f64>) + Send + Sync>,
        _units: Option<String>,
        _description: Option<String>,
    ) -> Box<dyn AsyncMeasurement<Value = f64>> {
        Box::new(NoopAsyncMeasurement(PhantomData::<f64>))
    }

    fn create_up_down_counter(
        &self,
        _name: String,
        _units: Option<String>,
        _description: Option<String>,
    ) -> Box<dyn UpDownCounter> {
        Box::new(NoopUpDownCounter)
    }

    fn create_monotonic_counter(
        &self,
        _name: String,
        _units: Option<String>,
        _description: Option<String>,
    ) -> Box<dyn MonotonicCounter> {
        Box::new(NoopMonotonicCounter)
    }

    fn create_histogram(
        &self,
        _name: String,
        _units: Option<String>,
        _description: Option<String>,
    ) -> Box<dyn Histogram> {
        Box::new(NoopHistogram)
    }
}

struct NoopAsyncMeasurement<T: Send + Sync>(PhantomData<T>);
impl<T: Send + Sync> AsyncMeasurement for NoopAsyncMeasurement<T> {
    type Value = T;

    fn record(&self, _value: T, _attributes: Option<&Attributes>, _context: Option<&dyn Context>) {}

    fn stop(&self) {}
}

struct NoopUpDownCounter;
impl UpDownCounter for NoopUpDownCounter {
    fn add(&self, _value: i64, _attributes: Option<&Attributes>, _context: Option<&dyn Context>) {}
}

struct NoopMonotonicCounter;
impl MonotonicCounter for NoopMonotonicCounter {
    fn add(&self, _value: u64, _attributes: Option<&Attributes>, _context: Option<&dyn Context>) {}
}

struct NoopHistogram;
impl Histogram for NoopHistogram {
    fn record(
        &self,
        _value: f64,
        _attributes: Option<&Attributes>,
        _context: Option<&dyn Context>,
    ) {
    }
}
