/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
#[cfg(test)]
use time::PrimitiveDateTime;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year][month][day]");
const DATE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year][month][day]T[hour][minute][second]Z");

/// Formats a date as `YYYYMMDD` for use in the credential scope.
pub(crate) fn format_date(date: Date) -> String {
    date.format(&DATE_FORMAT)
        .expect("YYYYMMDD formatting is infallible")
}

/// Formats an instant as `YYYYMMDD'T'HHMMSS'Z'` for `X-Amz-Date`.
pub(crate) fn format_date_time(date_time: OffsetDateTime) -> String {
    date_time
        .format(&DATE_TIME_FORMAT)
        .expect("YYYYMMDDTHHMMSSZ formatting is infallible")
}

#[cfg(test)]
pub(crate) fn parse_date_time(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
    Ok(PrimitiveDateTime::parse(s, &DATE_TIME_FORMAT)?.assume_utc())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let parsed = parse_date_time("20150830T123600Z").unwrap();
        assert_eq!(format_date_time(parsed), "20150830T123600Z");
        assert_eq!(format_date(parsed.date()), "20150830");
    }
}
