//! Pod records and the display-oriented pod views built from them

use std::fmt;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{
    de::{Error as _, IgnoredAny, MapAccess, Visitor},
    ser::SerializeStruct,
    Deserialize, Deserializer, Serialize, Serializer,
};
use utoipa::ToSchema;

use crate::error::AppResult;

/// A pod as reported by a pod source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRecord {
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Restart count of every container, in container-status order
    pub restart_counts: Vec<u32>,
}

impl PodRecord {
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>, restart_counts: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            created_at,
            restart_counts,
        }
    }

    /// Sum of all container restarts; zero when no container status is known
    pub fn total_restarts(&self) -> u64 {
        self.restart_counts.iter().map(|&c| u64::from(c)).sum()
    }
}

/// Snapshot of a pod served by `/pods`.
///
/// `age` is rendered once, when the view is built, and is not refreshed.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct PodView {
    pub name: String,
    #[schema(example = "3.00 hours")]
    pub age: String,
    #[schema(value_type = String, example = "2023-02-15T00:00:00Z")]
    pub created_ts: DateTime<Utc>,
    pub restarts: u64,
}

impl PodView {
    /// Build a view of `record` with its age measured against `now`
    pub fn from_record(record: &PodRecord, now: DateTime<Utc>) -> Self {
        Self {
            name: record.name.clone(),
            age: format_age(record.created_at, now),
            created_ts: record.created_at,
            restarts: record.total_restarts(),
        }
    }
}

/// Render the time elapsed between `created_at` and `now` for display.
///
/// Buckets are strict: exactly one minute is already "1.00 minutes". Days
/// are truncated, never rounded. A creation time in the future yields a
/// negative number of seconds.
pub fn format_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = elapsed_seconds(now - created_at);
    let minutes = seconds / 60.0;
    let hours = seconds / 3600.0;

    if minutes < 1.0 {
        format!("{:.2} seconds", seconds)
    } else if hours < 1.0 {
        format!("{:.2} minutes", minutes)
    } else if hours < 24.0 {
        format!("{:.2} hours", hours)
    } else {
        format!("{} days", (hours / 24.0) as i64)
    }
}

fn elapsed_seconds(elapsed: Duration) -> f64 {
    let whole = elapsed.num_seconds();
    let nanos = (elapsed - Duration::seconds(whole))
        .num_nanoseconds()
        .unwrap_or(0);
    whole as f64 + nanos as f64 / 1e9
}

/// RFC 3339, UTC, second precision (`2023-02-15T00:00:00Z`)
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC 3339 timestamp, normalising any offset to UTC
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

impl Serialize for PodView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PodView", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("age", &self.age)?;
        state.serialize_field("created_ts", &format_timestamp(&self.created_ts))?;
        state.serialize_field("restarts", &self.restarts)?;
        state.end()
    }
}

// Field names are matched after lower-casing, so `Name`, `name` and `NAME`
// all populate the same field. Unknown fields are ignored.
impl<'de> Deserialize<'de> for PodView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PodViewVisitor)
    }
}

// Integers are taken exactly; JSON floats truncate. Negatives are rejected.
fn restart_total(value: &serde_json::Number) -> Result<u64, String> {
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f >= 0.0 => Ok(f as u64),
        _ => Err(format!("restarts must be non-negative, got {}", value)),
    }
}

struct PodViewVisitor;

impl<'de> Visitor<'de> for PodViewVisitor {
    type Value = PodView;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a pod object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PodView, A::Error> {
        let mut name = None;
        let mut age = None;
        let mut created_ts = None;
        let mut restarts = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.to_lowercase().as_str() {
                "name" => name = Some(map.next_value::<String>()?),
                "age" => age = Some(map.next_value::<String>()?),
                "created_ts" => {
                    let raw = map.next_value::<String>()?;
                    let ts = parse_timestamp(&raw)
                        .map_err(|e| A::Error::custom(format!("created_ts {:?}: {}", raw, e)))?;
                    created_ts = Some(ts);
                }
                "restarts" => {
                    let value = map.next_value::<serde_json::Number>()?;
                    restarts = Some(restart_total(&value).map_err(A::Error::custom)?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(PodView {
            name: name.unwrap_or_default(),
            age: age.unwrap_or_default(),
            // A missing timestamp is the Unix epoch, as for pods without one
            created_ts: created_ts.unwrap_or_default(),
            restarts: restarts.unwrap_or_default(),
        })
    }
}
