use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::mongodb::Id;

/// Core interview data, as stored in the database.
///
/// `template_id` and `question_ids` are string references; like template
/// question lists they are not checked against their collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct InterviewCore {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub candidate_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub candidate_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Linked template ID, if one was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default)]
    pub question_ids: Vec<String>,
    /// Scheduled time, as an ISO-8601 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// e.g. "Onsite", "Remote", "Phone Screen".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An interview without an ID.
pub type NewInterview = InterviewCore;

/// An interview from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub interview: InterviewCore,
}

impl Deref for Interview {
    type Target = InterviewCore;

    fn deref(&self) -> &Self::Target {
        &self.interview
    }
}

impl DerefMut for Interview {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.interview
    }
}


#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;
    use validator::Validate;

    use super::*;

    #[test]
    fn empty_required_fields_are_all_reported() {
        let mut interview = InterviewCore::example();
        interview.candidate_name = String::new();
        interview.candidate_email = String::new();
        let errs = interview.validate().unwrap_err();
        let fields = errs.field_errors();
        assert!(fields.contains_key("candidate_name"));
        assert!(fields.contains_key("candidate_email"));
    }

    #[test]
    fn scheduled_at_round_trips_as_iso8601() {
        let json = serde_json::to_value(InterviewCore::example()).unwrap();
        assert_eq!(json["scheduled_at"], "2025-03-14T15:00:00Z");
        let back: InterviewCore = serde_json::from_value(json).unwrap();
        assert_eq!(back, InterviewCore::example());
    }

    #[test]
    fn minimal_payload_deserializes() {
        let interview: NewInterview = serde_json::from_str(
            r#"{"candidate_name": "Grace Hopper", "candidate_email": "grace@example.com"}"#,
        )
        .unwrap();
        assert!(interview.validate().is_ok());
        assert_eq!(interview.scheduled_at, None);
        assert!(interview.question_ids.is_empty());
    }
}
