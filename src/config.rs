use mongodb::Client as MongoClient;
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

/// Configuration for the database, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables.
#[derive(Deserialize)]
struct DbConfig {
    // secrets
    db_uri: String,
}

/// Name of the database holding all collections.
const DATABASE: &str = "interview_builder";

/// A fairing that loads the MongoDB config, constructs the client, and
/// places both a `Client` and a `Database` into managed state.
///
/// The driver connects lazily, so an unreachable store does not prevent
/// launch; connectivity problems surface on the first operation.
pub struct DatabaseFairing;

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "MongoDB",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<DbConfig>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load database config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Construct the connection.
        let client = match MongoClient::with_uri_str(config.db_uri).await {
            Ok(client) => client,
            Err(e) => {
                error!("Invalid database URI: {e}");
                return Err(rocket);
            }
        };
        let db = client.database(DATABASE);
        info!("Database handle ready for '{DATABASE}'");

        // Manage the state.
        rocket = rocket.manage(client).manage(db);
        Ok(rocket)
    }
}
