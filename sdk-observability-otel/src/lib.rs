/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! OpenTelemetry based implementations of the vendor-neutral telemetry traits.
//!
//! Wrapping an [`opentelemetry_sdk::metrics::SdkMeterProvider`] in an
//! [`meter::OtelMeterProvider`] and installing it as the global telemetry
//! provider routes every metric the service clients record into the
//! OpenTelemetry pipeline:
//!
//! ```no_run
//! use opentelemetry_sdk::metrics::SdkMeterProvider;
//! use sdk_observability::global::set_telemetry_provider;
//! use sdk_observability::provider::TelemetryProvider;
//! use sdk_observability_otel::meter::OtelMeterProvider;
//!
//! let otel_mp = SdkMeterProvider::builder().build();
//! let sdk_mp = OtelMeterProvider::new(otel_mp);
//! set_telemetry_provider(TelemetryProvider::builder().meter_provider(sdk_mp).build());
//! ```

mod attributes;
pub mod meter;
