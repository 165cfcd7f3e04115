use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::mongodb::Id;

/// Core candidate data, as stored in the database.
///
/// Declared for the `candidate` collection of the existing deployment; no
/// endpoints operate on it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CandidateCore {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_applied: Option<String>,
}

/// A candidate without an ID.
pub type NewCandidate = CandidateCore;

/// A candidate from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub candidate: CandidateCore,
}

impl Deref for Candidate {
    type Target = CandidateCore;

    fn deref(&self) -> &Self::Target {
        &self.candidate
    }
}

impl DerefMut for Candidate {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.candidate
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;
    use validator::Validate;

    use super::*;

    #[test]
    fn required_fields_must_be_non_empty() {
        let candidate: NewCandidate =
            serde_json::from_str(r#"{"name": "Ada Lovelace", "email": ""}"#).unwrap();
        let errs = candidate.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("email"));
        assert!(!errs.field_errors().contains_key("name"));
    }

    #[test]
    fn stored_candidate_round_trips() {
        let stored = r#"{"_id": {"$oid": "62e8f6fa7b4e4ca7863b2b3e"}, "name": "Ada Lovelace", "email": "ada@example.com"}"#;
        let candidate: Candidate = serde_json::from_str(stored).unwrap();
        assert_eq!(candidate.name, "Ada Lovelace");
        assert_eq!(candidate.role_applied, None);
    }
}
