//! UTC timestamp formatting.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an ISO-8601 string with seconds precision,
/// e.g. `2026-08-30T14:05:00Z`.
///
/// Record `created_at` fields and catalog `generated_at` fields both
/// use this form; sub-second precision is deliberately dropped.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
