// src/models/review.rs
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// One customer feedback record as served by `GET /api/reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Review {
    pub id: i64,                 // Unique within one response only
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_name: String,       // Author display name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_name: String,    // Purchased product
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_review: String,  // Free-text review
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// First letter of the author name, uppercased, for the avatar bubble.
    pub fn avatar_glyph(&self) -> String {
        match self.user_name.trim_start().chars().next() {
            Some(first) => first.to_uppercase().collect(),
            None => "?".to_string(),
        }
    }

    /// `HH:MM` of the creation time in the given time zone.
    pub fn time_of_day<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.created_at.with_timezone(tz).format("%H:%M").to_string()
    }

    /// `HH:MM` in the viewer's local time zone.
    pub fn local_time_of_day(&self) -> String {
        self.time_of_day(&Local)
    }
}

/// Accepts RFC 3339 timestamps and the naive ISO-8601 form the review service
/// emits (`2024-01-01T10:00:00.123456`). Naive values are UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::<FixedOffset>::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid created_at timestamp: {raw}")))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
