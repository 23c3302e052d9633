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

//! Vendor-neutral telemetry traits.
//!
//! Service clients record metrics through the traits in this crate without
//! caring which telemetry backend is plugged in. The default is a noop
//! provider; a real backend (e.g. OpenTelemetry) is installed by setting the
//! global [`provider::TelemetryProvider`].

pub mod attributes;
pub mod error;
pub mod global;
pub mod meter;
mod noop;
pub mod provider;
