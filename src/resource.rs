use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{Error, Result};
use crate::models::{
    Assignment, Kanji, LevelProgression, Radical, Reset, Review, ReviewStatistic, StudyMaterial,
    SubjectCommon, Summary, UserInformation, Vocabulary,
};
use crate::page::Page;
use crate::timestamp;

/// The `object` discriminator of an API payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    User,
    Radical,
    Kanji,
    Vocabulary,
    Assignment,
    Reset,
    ReviewStatistic,
    StudyMaterial,
    /// The `/summary` endpoint.
    Report,
    Review,
    LevelProgression,
    Collection,
}

impl ResourceKind {
    /// Whether payloads of this kind carry a top-level `id`.
    pub fn has_id(self) -> bool {
        !matches!(self, Self::User | Self::Report | Self::Collection)
    }
}

/// A single API object: the shared envelope plus the kind-specific `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub kind: ResourceKind,
    pub url: String,
    pub data_updated_at: Option<DateTime<Utc>>,
    pub id: Option<u64>,
    pub data: T,
    raw: Value,
}

#[derive(Deserialize)]
struct Envelope {
    url: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    data_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    id: Option<u64>,
}

impl<T: DeserializeOwned> Resource<T> {
    pub(crate) fn from_payload(kind: ResourceKind, payload: Value) -> Result<Self> {
        let malformed = |err: serde_json::Error| Error::malformed(kind.to_string(), err);

        let envelope = Envelope::deserialize(&payload).map_err(malformed)?;
        let id = match envelope.id {
            None if kind.has_id() => {
                return Err(malformed(serde_json::Error::missing_field("id")));
            }
            id if kind.has_id() => id,
            _ => None,
        };

        let data = payload
            .get("data")
            .ok_or_else(|| malformed(serde_json::Error::missing_field("data")))?;
        let data = T::deserialize(data).map_err(malformed)?;

        Ok(Self {
            kind,
            url: envelope.url,
            data_updated_at: envelope.data_updated_at,
            id,
            data,
            raw: payload,
        })
    }
}

impl<T> Resource<T> {
    /// The payload this resource was built from, pretty-printed.
    pub fn raw_json(&self) -> String {
        format!("{:#}", self.raw)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedResource {
    User(Resource<UserInformation>),
    Radical(Resource<Radical>),
    Kanji(Resource<Kanji>),
    Vocabulary(Resource<Vocabulary>),
    Assignment(Resource<Assignment>),
    Reset(Resource<Reset>),
    ReviewStatistic(Resource<ReviewStatistic>),
    StudyMaterial(Resource<StudyMaterial>),
    Summary(Resource<Summary>),
    Review(Resource<Review>),
    LevelProgression(Resource<LevelProgression>),
    Collection(Page),
}

macro_rules! with_resource {
    ($value:expr, $r:ident => $body:expr, $page:ident => $page_body:expr) => {
        match $value {
            TypedResource::User($r) => $body,
            TypedResource::Radical($r) => $body,
            TypedResource::Kanji($r) => $body,
            TypedResource::Vocabulary($r) => $body,
            TypedResource::Assignment($r) => $body,
            TypedResource::Reset($r) => $body,
            TypedResource::ReviewStatistic($r) => $body,
            TypedResource::StudyMaterial($r) => $body,
            TypedResource::Summary($r) => $body,
            TypedResource::Review($r) => $body,
            TypedResource::LevelProgression($r) => $body,
            TypedResource::Collection($page) => $page_body,
        }
    };
}

impl TypedResource {
    pub fn kind(&self) -> ResourceKind {
        with_resource!(self, r => r.kind, _page => ResourceKind::Collection)
    }

    pub fn url(&self) -> &str {
        with_resource!(self, r => &r.url, page => &page.url)
    }

    pub fn id(&self) -> Option<u64> {
        with_resource!(self, r => r.id, _page => None)
    }

    pub fn data_updated_at(&self) -> Option<DateTime<Utc>> {
        with_resource!(self, r => r.data_updated_at, page => page.data_updated_at)
    }

    /// The fields shared by radicals, kanji and vocabulary.
    pub fn subject(&self) -> Option<&SubjectCommon> {
        match self {
            Self::Radical(r) => Some(&r.data.subject),
            Self::Kanji(r) => Some(&r.data.subject),
            Self::Vocabulary(r) => Some(&r.data.subject),
            _ => None,
        }
    }
}

macro_rules! impl_try_from {
    ($($variant:ident($ty:ty) => $kind:ident),* $(,)?) => {
        $(
            impl TryFrom<TypedResource> for $ty {
                type Error = Error;

                fn try_from(resource: TypedResource) -> Result<Self> {
                    match resource {
                        TypedResource::$variant(inner) => Ok(inner),
                        other => Err(Error::UnexpectedKind {
                            expected: ResourceKind::$kind,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_try_from! {
    User(Resource<UserInformation>) => User,
    Radical(Resource<Radical>) => Radical,
    Kanji(Resource<Kanji>) => Kanji,
    Vocabulary(Resource<Vocabulary>) => Vocabulary,
    Assignment(Resource<Assignment>) => Assignment,
    Reset(Resource<Reset>) => Reset,
    ReviewStatistic(Resource<ReviewStatistic>) => ReviewStatistic,
    StudyMaterial(Resource<StudyMaterial>) => StudyMaterial,
    Summary(Resource<Summary>) => Report,
    Review(Resource<Review>) => Review,
    LevelProgression(Resource<LevelProgression>) => LevelProgression,
    Collection(Page) => Collection,
}
