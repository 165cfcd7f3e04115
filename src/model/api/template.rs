use serde::{Deserialize, Serialize};

use crate::model::api::ApiId;
use crate::model::db::{InterviewTemplate, InterviewTemplateCore};

/// A template as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescription {
    pub id: ApiId,
    #[serde(flatten)]
    pub template: InterviewTemplateCore,
}

impl From<InterviewTemplate> for TemplateDescription {
    fn from(template: InterviewTemplate) -> Self {
        Self {
            id: template.id.into(),
            template: template.template,
        }
    }
}
