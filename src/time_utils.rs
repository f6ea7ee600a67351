// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_SEQUENCE: AtomicI64 = AtomicI64::new(0);

/// Format a UTC timestamp as ISO 8601 with millisecond precision and a `Z`
/// suffix, e.g. `2024-05-01T12:30:00.123Z`.
pub fn format_utc_iso8601(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time formatted with [`format_utc_iso8601`].
pub fn now_iso8601() -> String {
    format_utc_iso8601(Utc::now())
}

/// Nanoseconds since the epoch, bumped so every call in this process returns
/// a value strictly greater than the previous one.
pub fn next_sequence() -> i64 {
    let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
    let prev = LAST_SEQUENCE
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last.saturating_add(1)))
        })
        .unwrap_or_else(|last| last);
    now.max(prev.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_has_millis_and_z() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(format_utc_iso8601(date), "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn test_next_sequence_strictly_increases() {
        let mut last = next_sequence();
        for _ in 0..1000 {
            let next = next_sequence();
            assert!(next > last);
            last = next;
        }
    }
}
