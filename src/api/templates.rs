use mongodb::bson::Document;
use rocket::{serde::json::Json, Route};
use validator::Validate;

use crate::api::DEFAULT_LIMIT;
use crate::error::Result;
use crate::model::{
    api::{Created, TemplateDescription},
    db::{InterviewTemplate, NewInterviewTemplate},
    mongodb::{Coll, FilterBuilder},
};

pub fn routes() -> Vec<Route> {
    routes![create_template, list_templates]
}

#[post("/api/templates", data = "<template>", format = "json")]
async fn create_template(
    template: Json<NewInterviewTemplate>,
    templates: Coll<NewInterviewTemplate>,
) -> Result<Json<Created>> {
    template.validate()?;
    let id = templates.insert_new(&template).await?;
    Ok(Json(id.into()))
}

#[get("/api/templates?<role>&<seniority>&<limit>")]
async fn list_templates(
    role: Option<String>,
    seniority: Option<String>,
    limit: Option<u32>,
    templates: Coll<InterviewTemplate>,
) -> Result<Json<Vec<TemplateDescription>>> {
    let filter = template_filter(role, seniority);
    let limit = i64::from(limit.unwrap_or(DEFAULT_LIMIT));
    let templates = templates.find_filtered(filter, limit).await?;
    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

fn template_filter(role: Option<String>, seniority: Option<String>) -> Document {
    FilterBuilder::new()
        .eq("role", role)
        .eq("seniority", seniority)
        .build()
}
