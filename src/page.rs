use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::factory;
use crate::models::nullable;
use crate::resource::{ResourceKind, TypedResource};
use crate::timestamp;

/// One page of a collection endpoint, with every item already converted.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub url: String,
    pub data_updated_at: Option<DateTime<Utc>>,
    /// `None` on the last page.
    pub next_page_url: Option<String>,
    pub previous_page_url: Option<String>,
    pub per_page: Option<u32>,
    pub total_count: u64,
    pub items: Vec<TypedResource>,
}

#[derive(Deserialize)]
struct Pages {
    #[serde(deserialize_with = "nullable")]
    next_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    previous_url: Option<String>,
    #[serde(default)]
    per_page: Option<u32>,
}

#[derive(Deserialize)]
struct CollectionEnvelope {
    url: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    data_updated_at: Option<DateTime<Utc>>,
    pages: Pages,
    total_count: u64,
}

impl Page {
    /// Build a page from a decoded collection payload.
    pub fn from_payload(mut payload: Value) -> Result<Self> {
        let kind = factory::discriminator(&payload)?;
        if kind != ResourceKind::Collection {
            return Err(Error::UnexpectedKind {
                expected: ResourceKind::Collection,
                found: kind,
            });
        }

        let malformed = |err: serde_json::Error| Error::malformed("collection", err);
        let envelope = CollectionEnvelope::deserialize(&payload).map_err(malformed)?;

        let items = match payload.get_mut("data").map(Value::take) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(malformed(serde_json::Error::custom(
                    "expected `data` to be an array",
                )))
            }
            None => return Err(malformed(serde_json::Error::missing_field("data"))),
        };
        let items = items
            .into_iter()
            .map(factory::convert)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            url: envelope.url,
            data_updated_at: envelope.data_updated_at,
            next_page_url: envelope.pages.next_url,
            previous_page_url: envelope.pages.previous_url,
            per_page: envelope.pages.per_page,
            total_count: envelope.total_count,
            items,
        })
    }

    pub fn is_last(&self) -> bool {
        self.next_page_url.is_none()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypedResource> {
        self.items.iter()
    }
}

impl IntoIterator for Page {
    type Item = TypedResource;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a TypedResource;
    type IntoIter = std::slice::Iter<'a, TypedResource>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
