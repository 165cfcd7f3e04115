//! API-compatible types.
//!
//! The types in this module are serialised in an API-friendly way, e.g. IDs
//! are hex strings under `id` rather than the store's nested `_id` form.

mod id;
pub use id::ApiId;

mod interview;
pub use interview::InterviewDescription;

mod question;
pub use question::QuestionDescription;

pub mod status;
pub use status::{ApiInfo, StoreStatus};

mod template;
pub use template::TemplateDescription;

use serde::{Deserialize, Serialize};

use crate::model::mongodb::Id;

/// Response body for successful create endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
    pub id: ApiId,
}

impl From<Id> for Created {
    fn from(id: Id) -> Self {
        Self { id: id.into() }
    }
}
