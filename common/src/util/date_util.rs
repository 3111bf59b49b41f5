/// Current time as epoch milliseconds.
///
/// Millisecond precision keeps `updated_at` strictly increasing across
/// back-to-back mutations of the same document.
pub fn now_millis() -> i64 {
    chrono::Local::now().timestamp_millis()
}
