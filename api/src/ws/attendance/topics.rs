/// Single fan-out topic carrying every successful mark.
pub fn attendance_feed_topic() -> String {
    "attendance:feed".to_string()
}
