use serde::{Deserialize, Serialize};

use crate::model::api::ApiId;
use crate::model::db::{Question, QuestionCore};

/// A question as returned by list endpoints: every stored field plus the
/// ID as a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDescription {
    pub id: ApiId,
    #[serde(flatten)]
    pub question: QuestionCore,
}

impl From<Question> for QuestionDescription {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.into(),
            question: question.question,
        }
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use crate::model::mongodb::Id;

    use super::*;

    #[test]
    fn description_replaces_internal_id_with_hex_string() {
        let id: Id = "62e8f6fa7b4e4ca7863b2b3e".parse().unwrap();
        let question = Question {
            id,
            question: QuestionCore::example(),
        };

        let json = serde_json::to_value(QuestionDescription::from(question)).unwrap();

        assert_eq!(json["id"], "62e8f6fa7b4e4ca7863b2b3e");
        assert!(json.get("_id").is_none());
        assert_eq!(json["text"], QuestionCore::example().text);
        assert_eq!(json["tags"], serde_json::json!(["OS", "Concurrency"]));
    }
}
