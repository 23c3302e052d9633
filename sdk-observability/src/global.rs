/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Globally accessible [`TelemetryProvider`].

use once_cell::sync::Lazy;
use std::mem;
use std::sync::{Arc, RwLock};

use crate::provider::{GlobalTelemetryProvider, TelemetryProvider};

static GLOBAL_TELEMETRY_PROVIDER: Lazy<RwLock<GlobalTelemetryProvider>> =
    Lazy::new(|| RwLock::new(GlobalTelemetryProvider::new(TelemetryProvider::default())));

/// Installs `new_provider` as the process-wide [`TelemetryProvider`] and
/// returns the previous one. Clients created afterwards pick up the new
/// provider; clients created before keep the meters they already built.
pub fn set_telemetry_provider(new_provider: TelemetryProvider) -> Arc<TelemetryProvider> {
    let mut old_provider = GLOBAL_TELEMETRY_PROVIDER
        .write()
        .expect("telemetry provider lock poisoned");
    let old = mem::replace(&mut *old_provider, GlobalTelemetryProvider::new(new_provider));
    old.telemetry_provider
}

/// Returns the current global [`TelemetryProvider`].
pub fn get_telemetry_provider() -> Arc<TelemetryProvider> {
    GLOBAL_TELEMETRY_PROVIDER
        .read()
        .expect("telemetry provider lock poisoned")
        .telemetry_provider()
        .clone()
}

#[cfg(test)]
mod tests {
    use super::{get_telemetry_provider, set_telemetry_provider};
    use crate::attributes::Attributes;
    use crate::meter::{Meter, ProvideMeter};
    use crate::noop::NoopMeter;
    use crate::provider::TelemetryProvider;

    struct TestProvider;

    impl ProvideMeter for TestProvider {
        fn get_meter(
            &self,
            _scope: &'static str,
            _attributes: Option<&Attributes>,
        ) -> Box<dyn Meter> {
            Box::new(NoopMeter)
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn set_and_get_global_provider() {
        let provider = TelemetryProvider::builder()
            .meter_provider(TestProvider)
            .build();
        let _old = set_telemetry_provider(provider);

        let current = get_telemetry_provider();
        assert!(current
            .meter_provider()
            .as_any()
            .downcast_ref::<TestProvider>()
            .is_some());
    }
}
