use mongodb::bson::Document;
use rocket::{serde::json::Json, Route};
use validator::Validate;

use crate::api::DEFAULT_LIMIT;
use crate::error::Result;
use crate::model::{
    api::{Created, QuestionDescription},
    db::{NewQuestion, Question},
    mongodb::{Coll, FilterBuilder},
};

pub fn routes() -> Vec<Route> {
    routes![create_question, list_questions]
}

#[post("/api/questions", data = "<question>", format = "json")]
async fn create_question(
    question: Json<NewQuestion>,
    questions: Coll<NewQuestion>,
) -> Result<Json<Created>> {
    question.validate()?;
    let id = questions.insert_new(&question).await?;
    Ok(Json(id.into()))
}

#[get("/api/questions?<category>&<difficulty>&<role>&<q>&<limit>")]
async fn list_questions(
    category: Option<String>,
    difficulty: Option<String>,
    role: Option<String>,
    q: Option<String>,
    limit: Option<u32>,
    questions: Coll<Question>,
) -> Result<Json<Vec<QuestionDescription>>> {
    let filter = question_filter(category, difficulty, role, q);
    let limit = i64::from(limit.unwrap_or(DEFAULT_LIMIT));
    let questions = questions.find_filtered(filter, limit).await?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

/// Build the question list filter: each supplied parameter is an equality
/// criterion, except `q` which searches `text` and `tags` case-insensitively.
fn question_filter(
    category: Option<String>,
    difficulty: Option<String>,
    role: Option<String>,
    q: Option<String>,
) -> Document {
    FilterBuilder::new()
        .eq("category", category)
        .eq("difficulty", difficulty)
        .eq("role", role)
        .search(q, &["text"], &["tags"])
        .build()
}
