use mongodb::error::Error as DbError;
use rocket::{http::Status, response::Responder, serde::json::Json};
use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("Invalid payload: {0}")]
    Validation(#[from] ValidationErrors),
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        match self {
            Self::Db(err) => {
                error!("Database error: {err}");
                Err(Status::InternalServerError)
            }
            // Validation failures carry their per-field detail to the caller.
            Self::Validation(errs) => {
                warn!("Rejected payload: {errs}");
                (Status::BadRequest, Json(errs)).respond_to(req)
            }
        }
    }
}
