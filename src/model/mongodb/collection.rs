use std::ops::Deref;

use mongodb::{
    bson::Document, options::FindOptions, Collection, Database,
};
use rocket::{
    futures::TryStreamExt,
    request::{self, FromRequest, Request},
    State,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::model::db::{
    Candidate, CandidateCore, Interview, InterviewCore, InterviewTemplate, InterviewTemplateCore,
    Question, QuestionCore,
};
use crate::model::mongodb::Id;

/// A type that can be directly inserted/read to/from the database.
pub trait MongoCollection {
    /// The name of the collection.
    const NAME: &'static str;
}

/// A database collection of the given type.
pub struct Coll<T>(Collection<T>);

impl<T> Coll<T>
where
    T: MongoCollection,
{
    /// Get a handle on this collection in the given database.
    pub fn from_db(db: &Database) -> Self {
        Self(db.collection(T::NAME))
    }
}

impl<T> Coll<T>
where
    T: MongoCollection + Serialize,
{
    /// Insert a single record and return its newly assigned ID.
    pub async fn insert_new(&self, record: &T) -> Result<Id> {
        let id = self
            .insert_one(record, None)
            .await?
            .inserted_id
            .as_object_id()
            .unwrap() // Valid because the ID comes directly from the driver.
            .into();
        Ok(id)
    }
}

impl<T> Coll<T>
where
    T: MongoCollection + DeserializeOwned + Unpin + Send + Sync,
{
    /// Find all records matching the given filter, up to `limit` results,
    /// in store-native order. No matches yields an empty vector.
    pub async fn find_filtered(&self, filter: Document, limit: i64) -> Result<Vec<T>> {
        let options = FindOptions::builder().limit(limit).build();
        let records = self.find(filter, options).await?.try_collect().await?;
        Ok(records)
    }
}

impl<T> Deref for Coll<T> {
    type Target = Collection<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r, T> FromRequest<'r> for Coll<T>
where
    T: MongoCollection,
{
    type Error = ();

    /// Get the database connection from the managed state and wrap it in a collection.
    ///
    /// Panics iff the [`Database`] is not managed by [`rocket::Rocket`].
    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let db = req.guard::<&State<Database>>().await.unwrap();
        request::Outcome::Success(Coll::from_db(db))
    }
}

// Collection names are mapped explicitly rather than derived from type
// names. They match the collections of the existing deployment.

// Question collection
const QUESTIONS: &str = "question";
impl MongoCollection for Question {
    const NAME: &'static str = QUESTIONS;
}
impl MongoCollection for QuestionCore {
    const NAME: &'static str = QUESTIONS;
}

// Interview template collection
const TEMPLATES: &str = "interviewtemplate";
impl MongoCollection for InterviewTemplate {
    const NAME: &'static str = TEMPLATES;
}
impl MongoCollection for InterviewTemplateCore {
    const NAME: &'static str = TEMPLATES;
}

// Candidate collection
const CANDIDATES: &str = "candidate";
impl MongoCollection for Candidate {
    const NAME: &'static str = CANDIDATES;
}
impl MongoCollection for CandidateCore {
    const NAME: &'static str = CANDIDATES;
}

// Interview collection
const INTERVIEWS: &str = "interview";
impl MongoCollection for Interview {
    const NAME: &'static str = INTERVIEWS;
}
impl MongoCollection for InterviewCore {
    const NAME: &'static str = INTERVIEWS;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_stored_types_share_a_collection() {
        assert_eq!(Question::NAME, QuestionCore::NAME);
        assert_eq!(InterviewTemplate::NAME, InterviewTemplateCore::NAME);
        assert_eq!(Candidate::NAME, CandidateCore::NAME);
        assert_eq!(Interview::NAME, InterviewCore::NAME);
    }
}
