// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Calendar-date and timestamp parsing for history filters
//!
//! Date bounds are calendar days in a caller-chosen time zone. Anything that
//! does not parse yields `None` so the caller can treat the bound as absent.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset-carrying layouts tried after RFC 3339.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%#z",
];

/// Naive layouts, read as wall-clock time in the filter's zone.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// DST transitions are at most a couple of hours; probe in half-hour steps.
const DST_PROBE_STEPS: i64 = 4;

/// Parse a `YYYY-MM-DD` filter value.
pub fn parse_filter_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, FILTER_DATE_FORMAT).ok()
}

/// First instant of `date` (00:00:00.000 local in `tz`).
///
/// An ambiguous midnight resolves to the earlier instant. A midnight that
/// falls in a DST gap moves forward to the first wall-clock time that exists.
pub fn day_start<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    resolve_forward(date.and_hms_milli_opt(0, 0, 0, 0)?, tz)
}

/// Wall-clock time in `tz` as an instant, earliest reading when ambiguous.
/// Times inside a DST gap move forward to the first one that exists.
fn resolve_forward<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    (0..=DST_PROBE_STEPS).find_map(|step| {
        tz.from_local_datetime(&(local + Duration::minutes(30 * step)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Last instant of `date` (23:59:59.999 local in `tz`).
///
/// Ambiguous times resolve to the later instant so the whole day stays inside
/// the range.
pub fn day_end<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    let local = date.and_hms_milli_opt(23, 59, 59, 999)?;
    (0..=DST_PROBE_STEPS).find_map(|step| {
        tz.from_local_datetime(&(local - Duration::minutes(30 * step)))
            .latest()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Parse an ISO-8601 timestamp into an instant.
///
/// Timestamps with an offset (or `Z`) are absolute. Timestamps without one
/// are wall-clock time in `tz`, shifted forward out of a DST gap like
/// [`day_start`]. A bare date is UTC midnight.
pub fn parse_instant<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return resolve_forward(naive, tz);
        }
    }

    NaiveDate::parse_from_str(value, FILTER_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
