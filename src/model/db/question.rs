use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::mongodb::Id;

/// Core question data, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuestionCore {
    /// The question text.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub text: String,
    /// Topic area, e.g. "Algorithms" or "System Design".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// e.g. "Easy", "Medium", "Hard".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Target role, e.g. "Backend" or "Frontend".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Question format, e.g. "Behavioral" or "Coding".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    /// Guidance for the interviewer on what to expect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_answer: Option<String>,
    /// Searchable tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A question without an ID.
pub type NewQuestion = QuestionCore;

/// A question from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub question: QuestionCore,
}

impl Deref for Question {
    type Target = QuestionCore;

    fn deref(&self) -> &Self::Target {
        &self.question
    }
}

impl DerefMut for Question {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.question
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl QuestionCore {
        pub fn example() -> Self {
            Self {
                text: "Explain the difference between a process and a thread".to_string(),
                category: Some("Operating Systems".to_string()),
                difficulty: Some("Medium".to_string()),
                role: Some("Backend".to_string()),
                question_type: Some("Knowledge".to_string()),
                expected_answer: Some(
                    "Address spaces, scheduling units, shared memory".to_string(),
                ),
                tags: vec!["OS".to_string(), "Concurrency".to_string()],
            }
        }

        /// The smallest valid payload: required fields only.
        pub fn bare_example() -> Self {
            Self {
                text: "Reverse a linked list".to_string(),
                category: None,
                difficulty: None,
                role: None,
                question_type: None,
                expected_answer: None,
                tags: Vec::new(),
            }
        }
    }
}
