//! Turns a decoded API payload into the matching [`TypedResource`].

use std::str::FromStr;

use serde::de::Error as _;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::page::Page;
use crate::resource::{Resource, ResourceKind, TypedResource};

type Constructor = fn(Value) -> Result<TypedResource>;

fn constructor(kind: ResourceKind) -> Constructor {
    match kind {
        ResourceKind::User => |payload| {
            Resource::from_payload(ResourceKind::User, payload).map(TypedResource::User)
        },
        ResourceKind::Radical => |payload| {
            Resource::from_payload(ResourceKind::Radical, payload).map(TypedResource::Radical)
        },
        ResourceKind::Kanji => |payload| {
            Resource::from_payload(ResourceKind::Kanji, payload).map(TypedResource::Kanji)
        },
        ResourceKind::Vocabulary => |payload| {
            Resource::from_payload(ResourceKind::Vocabulary, payload).map(TypedResource::Vocabulary)
        },
        ResourceKind::Assignment => |payload| {
            Resource::from_payload(ResourceKind::Assignment, payload).map(TypedResource::Assignment)
        },
        ResourceKind::Reset => |payload| {
            Resource::from_payload(ResourceKind::Reset, payload).map(TypedResource::Reset)
        },
        ResourceKind::ReviewStatistic => |payload| {
            Resource::from_payload(ResourceKind::ReviewStatistic, payload)
                .map(TypedResource::ReviewStatistic)
        },
        ResourceKind::StudyMaterial => |payload| {
            Resource::from_payload(ResourceKind::StudyMaterial, payload)
                .map(TypedResource::StudyMaterial)
        },
        ResourceKind::Report => |payload| {
            Resource::from_payload(ResourceKind::Report, payload).map(TypedResource::Summary)
        },
        ResourceKind::Review => |payload| {
            Resource::from_payload(ResourceKind::Review, payload).map(TypedResource::Review)
        },
        ResourceKind::LevelProgression => |payload| {
            Resource::from_payload(ResourceKind::LevelProgression, payload)
                .map(TypedResource::LevelProgression)
        },
        ResourceKind::Collection => {
            |payload| Page::from_payload(payload).map(TypedResource::Collection)
        }
    }
}

/// Read the `object` discriminator of a payload.
pub fn discriminator(payload: &Value) -> Result<ResourceKind> {
    let object = payload
        .get("object")
        .ok_or_else(|| Error::malformed("unknown", serde_json::Error::missing_field("object")))?;
    let object = object.as_str().ok_or_else(|| {
        Error::malformed(
            "unknown",
            serde_json::Error::custom("expected `object` to be a string"),
        )
    })?;

    ResourceKind::from_str(object).map_err(|_| Error::UnknownResourceKind(object.to_string()))
}

/// Build the typed resource described by `payload`.
pub fn convert(payload: Value) -> Result<TypedResource> {
    let kind = discriminator(&payload)?;
    constructor(kind)(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::SubjectType;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use similar_asserts::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unknown_kind() {
        let err = convert(json!({"object": "widget", "url": "x", "data": {}})).unwrap_err();

        assert!(matches!(err, Error::UnknownResourceKind(ref kind) if kind == "widget"));
        assert_eq!(
            err.to_string().as_str(),
            "no idea how to handle resource of type: widget"
        );
    }

    #[test]
    fn test_missing_discriminator() {
        let err = convert(json!({"url": "x", "data": {}})).unwrap_err();

        assert!(matches!(err, Error::MalformedPayload { .. }));
        assert!(err.to_string().contains("missing field `object`"));
    }

    #[test]
    fn test_non_string_discriminator() {
        let err = convert(json!({"object": 7})).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload { .. }));
    }

    #[test]
    fn test_every_kind_has_a_constructor() {
        for kind in ResourceKind::iter() {
            let payload = fixtures::payload_for(kind);
            let resource = convert(payload).unwrap();
            assert_eq!(resource.kind(), kind);
        }
    }

    #[test]
    fn test_assignment() {
        let resource = convert(fixtures::assignment(80463006)).unwrap();
        let TypedResource::Assignment(assignment) = resource else {
            panic!("expected an assignment");
        };

        assert_eq!(assignment.id, Some(80463006));
        assert_eq!(
            assignment.data_updated_at,
            Some(Utc.with_ymd_and_hms(2017, 10, 30, 1, 51, 10).unwrap())
        );
        assert_eq!(assignment.data.subject_id, 440);
        assert_eq!(assignment.data.subject_type, SubjectType::Kanji);
        assert_eq!(assignment.data.srs_stage, 8);
        assert_eq!(assignment.data.burned_at, None);
    }

    #[test]
    fn test_radical_without_character_images() {
        let mut payload = fixtures::radical(1);
        payload["data"]
            .as_object_mut()
            .unwrap()
            .remove("character_images");

        let resource = convert(payload).unwrap();
        let TypedResource::Radical(radical) = resource else {
            panic!("expected a radical");
        };
        assert_eq!(radical.data.character_images, None);
    }

    #[test]
    fn test_vocabulary_readings() {
        let resource = convert(fixtures::vocabulary(2467)).unwrap();
        let TypedResource::Vocabulary(vocabulary) = resource else {
            panic!("expected vocabulary");
        };

        assert_eq!(vocabulary.data.readings.len(), 1);
        assert_eq!(vocabulary.data.readings[0].reading.as_str(), "いち");
        assert!(vocabulary.data.readings[0].primary);
        assert_eq!(vocabulary.data.parts_of_speech, vec!["numeral".to_string()]);
    }

    #[test]
    fn test_malformed_assignment_is_not_defaulted() {
        let mut payload = fixtures::assignment(1);
        payload["data"]["srs_stage"] = json!(null);

        let err = convert(payload).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedPayload { ref kind, .. } if kind == "assignment"
        ));
    }

    #[test]
    fn test_collection() {
        let payload = fixtures::collection(
            vec![fixtures::assignment(1), fixtures::assignment(2)],
            None,
            2,
        );

        let TypedResource::Collection(page) = convert(payload).unwrap() else {
            panic!("expected a collection");
        };
        assert_eq!(page.total_count, 2);
        assert_eq!(page.items.len(), 2);
    }
}
