//! Timestamp display helpers. The API serves UTC; operators read Beijing
//! time (UTC+8, no DST).

use chrono::{DateTime, FixedOffset, Utc};

const BEIJING_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Converts a UTC timestamp to Beijing time.
pub fn to_beijing_time(utc: DateTime<Utc>) -> DateTime<FixedOffset> {
    let offset =
        FixedOffset::east_opt(BEIJING_UTC_OFFSET_SECS).expect("UTC+8 is a valid offset");
    utc.with_timezone(&offset)
}

/// Full display format, e.g. `2025-11-02 16:15:30`.
#[allow(dead_code)]
pub fn format_beijing_time(utc: DateTime<Utc>) -> String {
    to_beijing_time(utc).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Short format for table cells, e.g. `11-02 16:15`.
pub fn format_short_beijing_time(utc: DateTime<Utc>) -> String {
    to_beijing_time(utc).format("%m-%d %H:%M").to_string()
}
