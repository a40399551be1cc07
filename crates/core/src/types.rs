/// Record identifier for generated entities (submissions, rewards, users).
///
/// Challenges are keyed by a human-readable slug instead and use plain
/// `String` ids.
pub type Id = uuid::Uuid;

/// UTC timestamp used on all persisted records.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
