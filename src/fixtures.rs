//! Canned API payloads shared by the unit tests.

use serde_json::{json, Value};

use crate::resource::ResourceKind;

pub fn user() -> Value {
    json!({
        "object": "user",
        "url": "https://api.wanikani.com/v2/user",
        "data_updated_at": "2018-04-06T14:26:53.022245Z",
        "data": {
            "username": "test-user",
            "level": 5,
            "max_level_granted_by_subscription": 60,
            "profile_url": "https://www.wanikani.com/users/test-user",
            "started_at": "2012-05-11T00:52:18Z",
            "subscribed": true,
            "current_vacation_started_at": null,
        },
    })
}

pub fn radical(id: u64) -> Value {
    json!({
        "id": id,
        "object": "radical",
        "url": format!("https://api.wanikani.com/v2/subjects/{id}"),
        "data_updated_at": "2018-03-29T23:13:14.064836Z",
        "data": {
            "level": 1,
            "created_at": "2012-02-27T18:08:16.000000Z",
            "characters": null,
            "character_images": [
                {
                    "url": "https://files.wanikani.com/a.png",
                    "content_type": "image/png",
                    "metadata": {"color": "#000000", "dimensions": "1024x1024"},
                },
                {
                    "url": "https://files.wanikani.com/the-good-path",
                    "content_type": "image/svg+xml",
                    "metadata": {"inline_styles": true},
                },
                {
                    "url": "https://files.wanikani.com/bad-svg",
                    "content_type": "image/svg+xml",
                    "metadata": {"inline_styles": false},
                },
            ],
            "meanings": [
                {"meaning": "Stick", "primary": true, "accepted_answer": true},
            ],
            "document_url": "https://www.wanikani.com/radicals/stick",
            "hidden_at": null,
            "amalgamation_subject_ids": [440],
        },
    })
}

pub fn kanji(id: u64) -> Value {
    json!({
        "id": id,
        "object": "kanji",
        "url": format!("https://api.wanikani.com/v2/subjects/{id}"),
        "data_updated_at": "2018-03-29T23:14:30.805034Z",
        "data": {
            "level": 1,
            "created_at": "2012-02-27T19:55:19.000000Z",
            "characters": "一",
            "meanings": [
                {"meaning": "One", "primary": true, "accepted_answer": true},
                {"meaning": "Uno", "primary": false, "accepted_answer": false},
            ],
            "readings": [
                {"type": "onyomi", "reading": "いち", "primary": true, "accepted_answer": true},
                {"type": "onyomi", "reading": "いつ", "primary": false, "accepted_answer": true},
                {"type": "kunyomi", "reading": "ひと", "primary": false, "accepted_answer": false},
            ],
            "document_url": "https://www.wanikani.com/kanji/%E4%B8%80",
            "hidden_at": null,
            "amalgamation_subject_ids": [2467],
            "component_subject_ids": [1],
        },
    })
}

pub fn vocabulary(id: u64) -> Value {
    json!({
        "id": id,
        "object": "vocabulary",
        "url": format!("https://api.wanikani.com/v2/subjects/{id}"),
        "data_updated_at": "2018-03-29T23:13:14.064836Z",
        "data": {
            "level": 1,
            "created_at": "2012-02-28T08:04:47.000000Z",
            "characters": "一",
            "meanings": [
                {"meaning": "One", "primary": true, "accepted_answer": true},
            ],
            "readings": [
                {"reading": "いち", "primary": true, "accepted_answer": true},
            ],
            "parts_of_speech": ["numeral"],
            "document_url": "https://www.wanikani.com/vocabulary/%E4%B8%80",
            "hidden_at": null,
            "component_subject_ids": [440],
        },
    })
}

pub fn assignment(id: u64) -> Value {
    json!({
        "id": id,
        "object": "assignment",
        "url": format!("https://api.wanikani.com/v2/assignments/{id}"),
        "data_updated_at": "2017-10-30T01:51:10Z",
        "data": {
            "created_at": "2017-09-05T23:38:10.695133Z",
            "subject_id": 440,
            "subject_type": "kanji",
            "level": 1,
            "srs_stage": 8,
            "srs_stage_name": "Enlightened",
            "unlocked_at": "2017-09-05T23:38:10.695133Z",
            "started_at": "2017-09-05T23:41:28.980679Z",
            "passed_at": "2017-09-07T17:14:14.491889Z",
            "burned_at": null,
            "available_at": "2018-05-14T16:00:00Z",
            "resurrected_at": null,
            "passed": true,
            "resurrected": false,
            "hidden": false,
        },
    })
}

pub fn reset(id: u64) -> Value {
    json!({
        "id": id,
        "object": "reset",
        "url": format!("https://api.wanikani.com/v2/resets/{id}"),
        "data_updated_at": "2017-12-20T00:24:47.048380Z",
        "data": {
            "created_at": "2017-12-20T00:03:56.642838Z",
            "original_level": 42,
            "target_level": 8,
            "confirmed_at": "2017-12-19T23:31:18.077268Z",
        },
    })
}

pub fn review_statistic(id: u64) -> Value {
    json!({
        "id": id,
        "object": "review_statistic",
        "url": format!("https://api.wanikani.com/v2/review_statistics/{id}"),
        "data_updated_at": "2018-04-03T11:50:31.558505Z",
        "data": {
            "created_at": "2017-09-05T23:38:10.964821Z",
            "subject_id": 440,
            "subject_type": "kanji",
            "meaning_correct": 8,
            "meaning_incorrect": 0,
            "meaning_max_streak": 8,
            "meaning_current_streak": 8,
            "reading_correct": 8,
            "reading_incorrect": 0,
            "reading_max_streak": 8,
            "reading_current_streak": 8,
            "percentage_correct": 100,
            "hidden": false,
        },
    })
}

pub fn study_material(id: u64) -> Value {
    json!({
        "id": id,
        "object": "study_material",
        "url": format!("https://api.wanikani.com/v2/study_materials/{id}"),
        "data_updated_at": "2017-09-30T01:42:13.453291Z",
        "data": {
            "created_at": "2017-09-30T01:42:13.453291Z",
            "subject_id": 2,
            "subject_type": "radical",
            "meaning_note": "I like turtles",
            "reading_note": null,
            "meaning_synonyms": ["burn", "sizzle"],
            "hidden": false,
        },
    })
}

pub fn summary() -> Value {
    json!({
        "object": "report",
        "url": "https://api.wanikani.com/v2/summary",
        "data_updated_at": "2018-04-11T21:00:00Z",
        "data": {
            "lessons": [
                {"available_at": "2018-04-11T21:00:00Z", "subject_ids": [25, 26]},
            ],
            "next_reviews_at": "2018-04-11T21:00:00Z",
            "reviews": [
                {"available_at": "2018-04-11T21:00:00Z", "subject_ids": []},
                {"available_at": "2018-04-11T22:00:00Z", "subject_ids": [21, 23, 24]},
            ],
        },
    })
}

pub fn review(id: u64) -> Value {
    json!({
        "id": id,
        "object": "review",
        "url": format!("https://api.wanikani.com/v2/reviews/{id}"),
        "data_updated_at": "2017-12-20T01:00:59.255427Z",
        "data": {
            "created_at": "2017-12-20T01:00:59.255427Z",
            "assignment_id": 32132,
            "subject_id": 8,
            "starting_srs_stage": 4,
            "starting_srs_stage_name": "Apprentice IV",
            "ending_srs_stage": 2,
            "ending_srs_stage_name": "Apprentice II",
            "incorrect_meaning_answers": 1,
            "incorrect_reading_answers": 0,
        },
    })
}

pub fn level_progression(id: u64) -> Value {
    json!({
        "id": id,
        "object": "level_progression",
        "url": format!("https://api.wanikani.com/v2/level_progressions/{id}"),
        "data_updated_at": "2017-09-28T01:24:11.715238Z",
        "data": {
            "created_at": "2017-09-28T01:24:11.715238Z",
            "level": 13,
            "unlocked_at": "2017-09-28T01:24:11.715238Z",
            "started_at": "2017-09-28T01:24:11.715238Z",
            "passed_at": null,
            "completed_at": null,
        },
    })
}

pub fn collection(items: Vec<Value>, next_url: Option<&str>, total_count: u64) -> Value {
    let data_updated_at = if items.is_empty() {
        Value::Null
    } else {
        json!("2017-11-29T19:37:03.571377Z")
    };

    json!({
        "object": "collection",
        "url": "https://api.wanikani.com/v2/assignments",
        "pages": {
            "per_page": 500,
            "next_url": next_url,
            "previous_url": null,
        },
        "total_count": total_count,
        "data_updated_at": data_updated_at,
        "data": items,
    })
}

/// A valid payload of the given kind.
pub fn payload_for(kind: ResourceKind) -> Value {
    match kind {
        ResourceKind::User => user(),
        ResourceKind::Radical => radical(1),
        ResourceKind::Kanji => kanji(440),
        ResourceKind::Vocabulary => vocabulary(2467),
        ResourceKind::Assignment => assignment(1),
        ResourceKind::Reset => reset(1),
        ResourceKind::ReviewStatistic => review_statistic(1),
        ResourceKind::StudyMaterial => study_material(1),
        ResourceKind::Report => summary(),
        ResourceKind::Review => review(1),
        ResourceKind::LevelProgression => level_progression(1),
        ResourceKind::Collection => collection(vec![assignment(1)], None, 1),
    }
}
