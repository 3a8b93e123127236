//! Query parameters accepted by the collection endpoints.
//!
//! Unset filters are left out of the query string entirely; lists are sent comma-separated.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::models::SubjectType;

fn comma_separated<S, T>(values: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    let joined = values
        .iter()
        .flatten()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

fn rfc3339<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = value
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default();
    serializer.serialize_str(&formatted)
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SubjectFilters {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub types: Option<Vec<SubjectType>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub slugs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub levels: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "rfc3339")]
    pub updated_after: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssignmentFilters {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub subject_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub subject_types: Option<Vec<SubjectType>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub levels: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "rfc3339")]
    pub available_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "rfc3339")]
    pub available_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub srs_stages: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resurrected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "rfc3339")]
    pub updated_after: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewStatisticFilters {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub subject_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub subject_types: Option<Vec<SubjectType>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "rfc3339")]
    pub updated_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentages_greater_than: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentages_less_than: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StudyMaterialFilters {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub subject_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub subject_types: Option<Vec<SubjectType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "rfc3339")]
    pub updated_after: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewFilters {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub assignment_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub subject_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "rfc3339")]
    pub updated_after: Option<DateTime<Utc>>,
}

/// Filters for endpoints that only support `ids` and `updated_after`: level progressions and
/// resets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IdFilters {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_separated")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "rfc3339")]
    pub updated_after: Option<DateTime<Utc>>,
}
