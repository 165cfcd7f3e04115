use serde::{Deserialize, Serialize};

use crate::model::api::ApiId;
use crate::model::db::{Interview, InterviewCore};

/// An interview as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewDescription {
    pub id: ApiId,
    #[serde(flatten)]
    pub interview: InterviewCore,
}

impl From<Interview> for InterviewDescription {
    fn from(interview: Interview) -> Self {
        Self {
            id: interview.id.into(),
            interview: interview.interview,
        }
    }
}
