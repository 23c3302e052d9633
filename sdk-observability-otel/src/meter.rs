/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! OpenTelemetry based implementations of the Meter traits.

use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::attributes::kv_from_option_attr;
use opentelemetry::metrics::{
    AsyncInstrument, Counter as OtelCounter, Histogram as OtelHistogram, Meter as OtelMeter,
    MeterProvider as _, ObservableGauge, UpDownCounter as OtelUpDownCounter,
};
use opentelemetry_sdk::metrics::SdkMeterProvider;
use sdk_observability::attributes::{Attributes, Context};
use sdk_observability::error::{ErrorKind, ObservabilityError};
use sdk_observability::meter::{
    AsyncMeasurement, Histogram, Meter, MonotonicCounter, ProvideMeter, UpDownCounter,
};

/// An OpenTelemetry backed [`ProvideMeter`].
pub struct OtelMeterProvider {
    meter_provider: SdkMeterProvider,
}

impl OtelMeterProvider {
    /// Create a new [`OtelMeterProvider`] from an [`SdkMeterProvider`].
    pub fn new(meter_provider: SdkMeterProvider) -> Self {
        Self { meter_provider }
    }
}

impl ProvideMeter for OtelMeterProvider {
    fn get_meter(&self, scope: &'static str, _attributes: Option<&Attributes>) -> Box<dyn Meter> {
        Box::new(MeterWrap(self.meter_provider.meter(scope)))
    }

    fn flush(&self) -> Result<(), ObservabilityError> {
        self.meter_provider
            .force_flush()
            .map_err(|err| ObservabilityError::new(ErrorKind::MetricsFlushFailed, err))
    }

    fn shutdown(&self) -> Result<(), ObservabilityError> {
        self.meter_provider
            .shutdown()
            .map_err(|err| ObservabilityError::new(ErrorKind::MetricsShutdownFailed, err))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

struct MeterWrap(OtelMeter);
impl Deref for MeterWrap {
    type Target = OtelMeter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Meter for MeterWrap {
    fn create_gauge(
        &self,
        name: String,
        callback: Box<dyn Fn(&dyn AsyncMeasurement<Value = f64>) + Send + Sync>,
        units: Option<String>,
        description: Option<String>,
    ) -> Box<dyn AsyncMeasurement<Value = f64>> {
        // OTel callbacks cannot be unregistered, so a stopped gauge just goes quiet
        let stopped = Arc::new(AtomicBool::new(false));
        let stop_flag = stopped.clone();
        let mut builder = self.f64_observable_gauge(name).with_callback(move |inner| {
            if !stop_flag.load(Ordering::Relaxed) {
                callback(&AsyncInstrumentWrap(inner));
            }
        });

        if let Some(desc) = description {
            builder = builder.with_description(desc);
        }

        if let Some(u) = units {
            builder = builder.with_unit(u);
        }

        Box::new(GaugeWrap {
            inner: builder.init(),
            stopped,
        })
    }

    fn create_up_down_counter(
        &self,
        name: String,
        units: Option<String>,
        description: Option<String>,
    ) -> Box<dyn UpDownCounter> {
        let mut builder = self.i64_up_down_counter(name);
        if let Some(desc) = description {
            builder = builder.with_description(desc);
        }

        if let Some(u) = units {
            builder = builder.with_unit(u);
        }

        Box::new(UpDownCounterWrap(builder.init()))
    }

    fn create_monotonic_counter(
        &self,
        name: String,
        units: Option<String>,
        description: Option<String>,
    ) -> Box<dyn MonotonicCounter> {
        let mut builder = self.u64_counter(name);
        if let Some(desc) = description {
            builder = builder.with_description(desc);
        }

        if let Some(u) = units {
            builder = builder.with_unit(u);
        }

        Box::new(MonotonicCounterWrap(builder.init()))
    }

    fn create_histogram(
        &self,
        name: String,
        units: Option<String>,
        description: Option<String>,
    ) -> Box<dyn Histogram> {
        let mut builder = self.f64_histogram(name);
        if let Some(desc) = description {
            builder = builder.with_description(desc);
        }

        if let Some(u) = units {
            builder = builder.with_unit(u);
        }

        Box::new(HistogramWrap(builder.init()))
    }
}

struct UpDownCounterWrap(OtelUpDownCounter<i64>);

impl UpDownCounter for UpDownCounterWrap {
    fn add(&self, value: i64, attributes: Option<&Attributes>, _context: Option<&dyn Context>) {
        self.0.add(value, &kv_from_option_attr(attributes));
    }
}

struct HistogramWrap(OtelHistogram<f64>);

impl Histogram for HistogramWrap {
    fn record(&self, value: f64, attributes: Option<&Attributes>, _context: Option<&dyn Context>) {
        self.0.record(value, &kv_from_option_attr(attributes));
    }
}

struct MonotonicCounterWrap(OtelCounter<u64>);

impl MonotonicCounter for MonotonicCounterWrap {
    fn add(&self, value: u64, attributes: Option<&Attributes>, _context: Option<&dyn Context>) {
        self.0.add(value, &kv_from_option_attr(attributes));
    }
}

struct GaugeWrap {
    inner: ObservableGauge<f64>,
    stopped: Arc<AtomicBool>,
}

impl AsyncMeasurement for GaugeWrap {
    type Value = f64;

    fn record(
        &self,
        value: f64,
        attributes: Option<&Attributes>,
        _context: Option<&dyn Context>,
    ) {
        self.inner.observe(value, &kv_from_option_attr(attributes));
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}

/// The measurement handed to a gauge callback while the backend is collecting.
struct AsyncInstrumentWrap<'a>(&'a dyn AsyncInstrument<f64>);

impl AsyncMeasurement for AsyncInstrumentWrap<'_> {
    type Value = f64;

    fn record(
        &self,
        value: f64,
        attributes: Option<&Attributes>,
        _context: Option<&dyn Context>,
    ) {
        self.0.observe(value, &kv_from_option_attr(attributes));
    }

    // stopping is handled by the flag owned by the enclosing gauge
    fn stop(&self) {}
}

#[cfg(test)]
mod tests {
    use super::OtelMeterProvider;
    use opentelemetry_sdk::metrics::data::{Gauge, Histogram as OtelHistogramData, Sum};
    use opentelemetry_sdk::metrics::{PeriodicReader, SdkMeterProvider};
    use opentelemetry_sdk::runtime::Tokio;
    use opentelemetry_sdk::testing::metrics::InMemoryMetricsExporter;
    use sdk_observability::meter::ProvideMeter;
    use sdk_observability::provider::TelemetryProvider;

    fn test_provider() -> (InMemoryMetricsExporter, TelemetryProvider) {
        let exporter = InMemoryMetricsExporter::default();
        let reader = PeriodicReader::builder(exporter.clone(), Tokio).build();
        let otel_mp = SdkMeterProvider::builder().with_reader(reader).build();
        let provider = TelemetryProvider::builder()
            .meter_provider(OtelMeterProvider::new(otel_mp))
            .build();
        (exporter, provider)
    }

    fn shutdown(provider: &TelemetryProvider) {
        provider
            .meter_provider()
            .as_any()
            .downcast_ref::<OtelMeterProvider>()
            .unwrap()
            .shutdown()
            .unwrap();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn record_sync_instruments() {
        let (exporter, provider) = test_provider();
        let meter = provider.meter_provider().get_meter("TestMeter", None);

        let mono_counter =
            meter.create_monotonic_counter("TestMonoCounter".to_string(), None, None);
        mono_counter.add(4, None, None);
        let ud_counter = meter.create_up_down_counter("TestUpDownCounter".to_string(), None, None);
        ud_counter.add(-6, None, None);
        let histogram = meter.create_histogram("TestHistogram".to_string(), None, None);
        histogram.record(1.234, None, None);

        shutdown(&provider);

        let finished_metrics = exporter.get_finished_metrics().unwrap();
        let metrics = &finished_metrics[0].scope_metrics[0].metrics;
        let by_name = |name: &str| metrics.iter().find(|m| m.name == name).unwrap();

        let mono = by_name("TestMonoCounter")
            .data
            .as_any()
            .downcast_ref::<Sum<u64>>()
            .unwrap();
        assert_eq!(mono.data_points[0].value, 4);

        let ud = by_name("TestUpDownCounter")
            .data
            .as_any()
            .downcast_ref::<Sum<i64>>()
            .unwrap();
        assert_eq!(ud.data_points[0].value, -6);

        let histo = by_name("TestHistogram")
            .data
            .as_any()
            .downcast_ref::<OtelHistogramData<f64>>()
            .unwrap();
        assert_eq!(histo.data_points[0].sum, 1.234);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn gauge_callback_observes_until_stopped() {
        let (exporter, provider) = test_provider();
        let meter = provider.meter_provider().get_meter("TestMeter", None);

        let gauge = meter.create_gauge(
            "TestGauge".to_string(),
            Box::new(|measurement| measurement.record(6.789, None, None)),
            None,
            None,
        );

        provider.meter_provider().flush().unwrap();
        let finished_metrics = exporter.get_finished_metrics().unwrap();
        let data = finished_metrics[0].scope_metrics[0].metrics[0]
            .data
            .as_any()
            .downcast_ref::<Gauge<f64>>()
            .unwrap();
        assert_eq!(data.data_points[0].value, 6.789);

        // after stop the callback goes quiet
        gauge.stop();
        exporter.reset();
        provider.meter_provider().flush().unwrap();
        let finished_metrics = exporter.get_finished_metrics().unwrap();
        let quiet = finished_metrics
            .iter()
            .flat_map(|rm| rm.scope_metrics.iter())
            .flat_map(|sm| sm.metrics.iter())
            .filter(|m| m.name == "TestGauge")
            .all(|m| {
                m.data
                    .as_any()
                    .downcast_ref::<Gauge<f64>>()
                    .map(|g| g.data_points.is_empty())
                    .unwrap_or(true)
            });
        assert!(quiet);

        shutdown(&provider);
    }
}
