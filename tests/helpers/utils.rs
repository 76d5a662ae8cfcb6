use chrono::prelude::*;
use chrono_tz::Tz;

pub const MINUTE: i64 = 1000 * 60;
pub const HOUR: i64 = MINUTE * 60;

/// Timestamp in millis of a local wall clock time
pub fn local_timestamp(tz: &Tz, year: i32, month: u32, day: u32, hour: u32, min: u32) -> i64 {
    tz.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("Unambiguous local time")
        .timestamp_millis()
}

pub fn format_timestamp(timestamp_millis: i64, tz: &Tz) -> String {
    // https://docs.rs/chrono/latest/chrono/format/strftime/index.html
    // 2001-07-08 00:34
    tz.timestamp_millis_opt(timestamp_millis)
        .single()
        .map(|dt| dt.format("%F %R").to_string())
        .unwrap_or_default()
}
