use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::mongodb::Id;

/// Core interview template data, as stored in the database.
///
/// `question_ids` holds string references to questions; they are not
/// checked against the question collection and may dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct InterviewTemplateCore {
    /// Template name, e.g. "Frontend Senior Loop".
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    /// Primary role this template targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// e.g. "Junior", "Mid", "Senior", "Staff".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,
    /// Notes for interviewers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Associated question IDs (as strings).
    #[serde(default)]
    pub question_ids: Vec<String>,
}

/// A template without an ID.
pub type NewInterviewTemplate = InterviewTemplateCore;

/// A template from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewTemplate {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub template: InterviewTemplateCore,
}

impl Deref for InterviewTemplate {
    type Target = InterviewTemplateCore;

    fn deref(&self) -> &Self::Target {
        &self.template
    }
}

impl DerefMut for InterviewTemplate {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.template
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl InterviewTemplateCore {
        pub fn example() -> Self {
            Self {
                title: "Backend Mid-level Loop".to_string(),
                role: Some("Backend".to_string()),
                seniority: Some("Mid".to_string()),
                description: Some("Standard two-round loop".to_string()),
                question_ids: vec![
                    "62e8f6fa7b4e4ca7863b2b3e".to_string(),
                    "62e8f6fa7b4e4ca7863b2b3f".to_string(),
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;
    use validator::Validate;

    use super::*;

    #[test]
    fn empty_title_is_rejected_with_field_detail() {
        let mut template = InterviewTemplateCore::example();
        template.title = String::new();
        let errs = template.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("title"));
    }

    #[test]
    fn question_ids_default_to_empty() {
        let template: NewInterviewTemplate =
            serde_json::from_str(r#"{"title": "Screening call"}"#).unwrap();
        assert!(template.question_ids.is_empty());
        assert!(template.validate().is_ok());
    }
}
