/// Primary keys are opaque text identifiers (UUIDs rendered as strings).
pub type DbId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
