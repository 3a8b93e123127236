use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::Display;

use crate::timestamp;

/// Like a plain `Option<T>`, but the key must be present even when the value is null.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubjectType {
    Radical,
    Kanji,
    Vocabulary,
}

/// Information returned from the `/user` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserInformation {
    pub username: String,
    /// Current WaniKani level.
    pub level: u32,
    pub max_level_granted_by_subscription: u32,
    pub profile_url: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub started_at: Option<DateTime<Utc>>,
    pub subscribed: bool,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub current_vacation_started_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meaning {
    pub meaning: String,
    pub primary: bool,
    pub accepted_answer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reading {
    pub reading: String,
    pub primary: bool,
    pub accepted_answer: bool,
}

/// Fields shared by every subject type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubjectCommon {
    pub level: u32,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    /// Some radicals only exist as images and have no characters.
    #[serde(deserialize_with = "nullable")]
    pub characters: Option<String>,
    pub meanings: Vec<Meaning>,
    pub document_url: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub hidden_at: Option<DateTime<Utc>>,
}

impl SubjectCommon {
    pub fn accepted_meanings(&self) -> Vec<&str> {
        self.meanings
            .iter()
            .filter(|meaning| meaning.accepted_answer)
            .map(|meaning| meaning.meaning.as_str())
            .collect()
    }
}

fn accepted_readings(readings: &[Reading]) -> Vec<&str> {
    readings
        .iter()
        .filter(|reading| reading.accepted_answer)
        .map(|reading| reading.reading.as_str())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ImageMetadata {
    #[serde(default)]
    pub inline_styles: Option<bool>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub style_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterImage {
    pub url: String,
    pub content_type: String,
    #[serde(default)]
    pub metadata: ImageMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Radical {
    #[serde(flatten)]
    pub subject: SubjectCommon,
    #[serde(default)]
    pub character_images: Option<Vec<CharacterImage>>,
    pub amalgamation_subject_ids: Vec<u64>,
}

impl Radical {
    /// URL of the SVG rendering that carries its own inline styles, if there is one.
    pub fn inline_svg_url(&self) -> Option<&str> {
        self.character_images
            .as_deref()?
            .iter()
            .find(|image| {
                image.content_type == "image/svg+xml" && image.metadata.inline_styles == Some(true)
            })
            .map(|image| image.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Kanji {
    #[serde(flatten)]
    pub subject: SubjectCommon,
    pub amalgamation_subject_ids: Vec<u64>,
    pub component_subject_ids: Vec<u64>,
    pub readings: Vec<Reading>,
}

impl Kanji {
    pub fn accepted_readings(&self) -> Vec<&str> {
        accepted_readings(&self.readings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vocabulary {
    #[serde(flatten)]
    pub subject: SubjectCommon,
    pub parts_of_speech: Vec<String>,
    pub component_subject_ids: Vec<u64>,
    pub readings: Vec<Reading>,
}

impl Vocabulary {
    pub fn accepted_readings(&self) -> Vec<&str> {
        accepted_readings(&self.readings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Assignment {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    pub subject_id: u64,
    pub subject_type: SubjectType,
    pub level: u32,
    pub srs_stage: u32,
    pub srs_stage_name: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub unlocked_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub passed_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub burned_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub available_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub resurrected_at: Option<DateTime<Utc>>,
    pub passed: bool,
    pub resurrected: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reset {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    pub original_level: u32,
    pub target_level: u32,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewStatistic {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    pub subject_id: u64,
    pub subject_type: SubjectType,
    pub meaning_correct: u32,
    pub meaning_incorrect: u32,
    pub meaning_max_streak: u32,
    pub meaning_current_streak: u32,
    pub reading_correct: u32,
    pub reading_incorrect: u32,
    pub reading_max_streak: u32,
    pub reading_current_streak: u32,
    pub percentage_correct: u32,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudyMaterial {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    pub subject_id: u64,
    pub subject_type: SubjectType,
    #[serde(deserialize_with = "nullable")]
    pub meaning_note: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub reading_note: Option<String>,
    pub meaning_synonyms: Vec<String>,
    pub hidden: bool,
}

/// A batch of subjects that become available at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubjectBatch {
    pub subject_ids: Vec<u64>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub available_at: Option<DateTime<Utc>>,
}

fn first_batch<'de, D>(deserializer: D) -> Result<SubjectBatch, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<SubjectBatch>::deserialize(deserializer)?
        .into_iter()
        .next()
        .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one lesson batch"))
}

/// The `/summary` report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Summary {
    /// The API only ever sends one lesson batch: everything available right now.
    #[serde(deserialize_with = "first_batch")]
    pub lessons: SubjectBatch,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub next_reviews_at: Option<DateTime<Utc>>,
    /// Upcoming reviews, one batch per hour.
    pub reviews: Vec<SubjectBatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    pub assignment_id: u64,
    pub subject_id: u64,
    pub starting_srs_stage: u32,
    pub starting_srs_stage_name: String,
    pub ending_srs_stage: u32,
    pub ending_srs_stage_name: String,
    pub incorrect_meaning_answers: u32,
    pub incorrect_reading_answers: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelProgression {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    pub level: u32,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub unlocked_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub passed_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub completed_at: Option<DateTime<Utc>>,
}
