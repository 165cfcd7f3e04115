use rocket::Route;

mod interviews;
mod questions;
mod status;
mod templates;

/// The default maximum number of records a list endpoint returns.
pub const DEFAULT_LIMIT: u32 = 100;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(status::routes());
    routes.extend(questions::routes());
    routes.extend(templates::routes());
    routes.extend(interviews::routes());
    routes
}
