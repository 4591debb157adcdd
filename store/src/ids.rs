//! Client-generated resource ids.

/// Current UTC time in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a new entity id: the millisecond timestamp as a string.
///
/// Ids are only unique down to the millisecond; the builder creates entities
/// one form submit at a time, so collisions do not arise in practice.
pub fn next_id() -> String {
    now_millis().to_string()
}
