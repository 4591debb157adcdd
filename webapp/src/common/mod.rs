pub mod download;
pub mod storage;
pub mod style;

use chrono::{Local, TimeZone};

/// Millisecond entity timestamp -> local time string for list columns.
pub fn local_time(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => String::from("-"),
    }
}
