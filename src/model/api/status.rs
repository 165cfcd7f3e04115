use serde::{Deserialize, Serialize};

/// Greeting body for the root endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
}

impl ApiInfo {
    pub fn new() -> Self {
        Self {
            message: "Interview Builder API".to_string(),
        }
    }
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic report on the backing store.
///
/// Store errors are reported inside the body rather than failing the
/// request; `database` carries a descriptive status string either way.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreStatus {
    pub backend: String,
    pub database: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl StoreStatus {
    /// At most this many collection names are reported.
    pub const MAX_COLLECTIONS: usize = 10;

    /// Store errors are truncated to this many characters.
    pub const MAX_ERROR_CHARS: usize = 50;

    pub fn connected(database_name: &str, mut collections: Vec<String>) -> Self {
        collections.truncate(Self::MAX_COLLECTIONS);
        Self {
            backend: "running".to_string(),
            database: "connected".to_string(),
            database_name: database_name.to_string(),
            connection_status: "Connected".to_string(),
            collections,
        }
    }

    pub fn unreachable(database_name: &str, error: &str) -> Self {
        Self {
            backend: "running".to_string(),
            database: format!("error: {}", truncate_chars(error, Self::MAX_ERROR_CHARS)),
            database_name: database_name.to_string(),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

/// Cap a diagnostic message at `max_chars` characters.
fn truncate_chars(msg: &str, max_chars: usize) -> String {
    msg.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_store_errors_are_truncated() {
        let error = "x".repeat(200);
        let status = StoreStatus::unreachable("interview_builder", &error);
        assert_eq!(
            status.database,
            format!("error: {}", "x".repeat(StoreStatus::MAX_ERROR_CHARS))
        );
        assert_eq!(status.connection_status, "Not Connected");
        assert!(status.collections.is_empty());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 50), "short");
    }

    #[test]
    fn collection_report_is_capped() {
        let collections = (0..15).map(|i| format!("coll{i}")).collect();
        let status = StoreStatus::connected("interview_builder", collections);
        assert_eq!(status.collections.len(), StoreStatus::MAX_COLLECTIONS);
        assert_eq!(status.database, "connected");
    }
}
