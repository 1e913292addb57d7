// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Display format for dates: day/month/year
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Format a timestamp for display
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(DISPLAY_FORMAT).to_string()
}

/// Format a Unix timestamp in milliseconds for display
pub fn format_timestamp_millis(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| format_date(&dt))
}

/// Format an ISO-8601 date string for display
///
/// Returns `None` if the string cannot be parsed as a date.
pub fn format_date_str(date_str: &str) -> Option<String> {
    parse_date(date_str).map(|dt| format_date(&dt))
}

/// Parse an ISO-8601 date or date-time string into a UTC timestamp
///
/// Date-times without an offset and plain dates are taken as UTC.
pub fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    for format in formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
