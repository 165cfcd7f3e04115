#[macro_use]
extern crate rocket;

#[macro_use]
extern crate log;

use rocket::{Build, Rocket};

pub mod api;
pub mod config;
pub mod cors;
pub mod error;
pub mod logging;
pub mod model;

/// Assemble the server: all routes mounted at the root, plus the fairings
/// for database access, CORS, and request logging.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .mount("/", cors::routes())
        .attach(config::DatabaseFairing)
        .attach(cors::CorsFairing)
        .attach(logging::LoggerFairing)
}
