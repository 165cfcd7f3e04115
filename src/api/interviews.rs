use mongodb::bson::doc;
use rocket::{serde::json::Json, Route};
use validator::Validate;

use crate::api::DEFAULT_LIMIT;
use crate::error::Result;
use crate::model::{
    api::{Created, InterviewDescription},
    db::{Interview, NewInterview},
    mongodb::Coll,
};

pub fn routes() -> Vec<Route> {
    routes![create_interview, list_interviews]
}

#[post("/api/interviews", data = "<interview>", format = "json")]
async fn create_interview(
    interview: Json<NewInterview>,
    interviews: Coll<NewInterview>,
) -> Result<Json<Created>> {
    interview.validate()?;
    let id = interviews.insert_new(&interview).await?;
    Ok(Json(id.into()))
}

/// Interviews are listed without field filters; only `limit` applies.
#[get("/api/interviews?<limit>")]
async fn list_interviews(
    limit: Option<u32>,
    interviews: Coll<Interview>,
) -> Result<Json<Vec<InterviewDescription>>> {
    let limit = i64::from(limit.unwrap_or(DEFAULT_LIMIT));
    let interviews = interviews.find_filtered(doc! {}, limit).await?;
    Ok(Json(interviews.into_iter().map(Into::into).collect()))
}
