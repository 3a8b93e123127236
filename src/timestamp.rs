use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use serde::{Deserialize, Deserializer};

/// ISO-8601 layouts tried once RFC 3339 fails: colon-less offsets, minute precision and the
/// basic (no separators) format. `%#z` also accepts `Z` and hour-only offsets.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

/// The same layouts without a zone designator. These are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

fn parse_iso8601(s: &str) -> Result<DateTime<Utc>, ParseError> {
    let err = match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(err) => err,
    };

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(s, format).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
                .map(|dt| dt.and_utc())
        })
        .ok_or(err)
}

/// Parse an ISO-8601 timestamp as sent by the API.
///
/// A missing, null or empty value means "not happened yet" (an assignment that was never burned,
/// a user who isn't on vacation) and parses to `None`. A timestamp without a zone is taken to be
/// UTC.
pub fn parse_timestamp(value: Option<&str>) -> Result<Option<DateTime<Utc>>, ParseError> {
    match value {
        None | Some("") => Ok(None),
        Some(s) => parse_iso8601(s).map(Some),
    }
}

/// `deserialize_with` adapter for nullable timestamp fields.
///
/// Unlike a plain `Option<DateTime<Utc>>` field, the key itself is still required.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    parse_timestamp(value.as_deref()).map_err(serde::de::Error::custom)
}
