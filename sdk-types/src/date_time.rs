/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::SystemTime;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// An instant in time, with up to nanosecond precision.
///
/// JSON protocols carry instants as fractional epoch seconds and XML protocols
/// carry them as RFC 3339 date-times; both are normalized into this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from the number of seconds since the Unix epoch.
    pub fn from_secs(seconds: i64) -> Self {
        DateTime {
            seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from fractional seconds since the Unix epoch.
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let subsecond_nanos =
            ((epoch_seconds - epoch_seconds.floor()) * NANOS_PER_SECOND as f64).round() as u32;
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Parses a `DateTime` from an RFC 3339 date-time, e.g. `2011-05-23T06:06:43.110Z`.
    pub fn from_rfc3339(value: &str) -> Result<Self, DateTimeParseError> {
        let parsed = OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|err| DateTimeParseError(err.to_string()))?;
        Ok(DateTime {
            seconds: parsed.unix_timestamp(),
            subsecond_nanos: parsed.nanosecond(),
        })
    }

    /// Whole seconds since the Unix epoch.
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Sub-second component, in nanoseconds.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// The instant as fractional seconds since the Unix epoch.
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }
}

impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        let odt = OffsetDateTime::from(time);
        DateTime {
            seconds: odt.unix_timestamp(),
            subsecond_nanos: odt.nanosecond(),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match OffsetDateTime::from_unix_timestamp(self.seconds)
            .map(|odt| odt + time::Duration::nanoseconds(self.subsecond_nanos as i64))
            .ok()
            .and_then(|odt| odt.format(&Rfc3339).ok())
        {
            Some(formatted) => write!(f, "{}", formatted),
            None => write!(f, "<out of range: {}s>", self.seconds),
        }
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_secs_f64())
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = DateTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "epoch seconds as a number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<DateTime, E> {
        Ok(DateTime::from_secs_f64(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<DateTime, E> {
        Ok(DateTime::from_secs(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<DateTime, E> {
        Ok(DateTime::from_secs(v as i64))
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DateTime, D::Error> {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

/// The input could not be parsed as an RFC 3339 date-time.
#[derive(Debug)]
pub struct DateTimeParseError(String);

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse date-time: {}", self.0)
    }
}

impl std::error::Error for DateTimeParseError {}
