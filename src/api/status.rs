use mongodb::Database;
use rocket::{serde::json::Json, Route, State};

use crate::model::api::{ApiInfo, StoreStatus};

pub fn routes() -> Vec<Route> {
    routes![index, test_store]
}

#[get("/")]
fn index() -> Json<ApiInfo> {
    Json(ApiInfo::new())
}

/// Probe the backing store and report its status. Store errors are
/// downgraded into the report body; this endpoint never fails.
#[get("/test")]
async fn test_store(db: &State<Database>) -> Json<StoreStatus> {
    let status = match db.list_collection_names(None).await {
        Ok(collections) => StoreStatus::connected(db.name(), collections),
        Err(err) => {
            warn!("Store probe failed: {err}");
            StoreStatus::unreachable(db.name(), &err.to_string())
        }
    };
    Json(status)
}
