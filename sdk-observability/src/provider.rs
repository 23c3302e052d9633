/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Definitions of high level Telemetry Providers.

use std::sync::Arc;

use crate::meter::ProvideMeter;
use crate::noop::NoopMeterProvider;

/// A struct to hold the various types of telemetry providers.
#[non_exhaustive]
pub struct TelemetryProvider {
    meter_provider: Box<dyn ProvideMeter>,
}

impl TelemetryProvider {
    /// Returns a builder struct for [`TelemetryProvider`].
    pub fn builder() -> TelemetryProviderBuilder {
        TelemetryProviderBuilder {
            meter_provider: Box::new(NoopMeterProvider),
        }
    }

    /// Returns a [`TelemetryProvider`] with a noop meter provider.
    pub fn noop() -> TelemetryProvider {
        TelemetryProvider {
            meter_provider: Box::new(NoopMeterProvider),
        }
    }

    /// Get a reference to the set [`ProvideMeter`].
    pub fn meter_provider(&self) -> &dyn ProvideMeter {
        self.meter_provider.as_ref()
    }
}

// If we choose to expand our TelemetryProvider and make logging and tracing
// configurable at some point in the future we can do that by adding default
// logger_provider and tracer_providers based on `tracing` to maintain backwards
// compatibility with what we have today.
impl Default for TelemetryProvider {
    fn default() -> Self {
        Self::noop()
    }
}

/// A builder for [`TelemetryProvider`].
#[non_exhaustive]
pub struct TelemetryProviderBuilder {
    meter_provider: Box<dyn ProvideMeter>,
}

impl TelemetryProviderBuilder {
    /// Set the [`ProvideMeter`].
    pub fn meter_provider(mut self, meter_provider: impl ProvideMeter + 'static) -> Self {
        self.meter_provider = Box::new(meter_provider);
        self
    }

    /// Build the [`TelemetryProvider`].
    pub fn build(self) -> TelemetryProvider {
        TelemetryProvider {
            meter_provider: self.meter_provider,
        }
    }
}

/// Wrapper type to hold a [`TelemetryProvider`] in an `Arc` so that
/// it can be safely used across threads.
#[non_exhaustive]
pub(crate) struct GlobalTelemetryProvider {
    pub(crate) telemetry_provider: Arc<TelemetryProvider>,
}

impl GlobalTelemetryProvider {
    pub(crate) fn new(telemetry_provider: TelemetryProvider) -> Self {
        Self {
            telemetry_provider: Arc::new(telemetry_provider),
        }
    }

    pub(crate) fn telemetry_provider(&self) -> &Arc<TelemetryProvider> {
        &self.telemetry_provider
    }
}
