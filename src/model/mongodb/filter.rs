use mongodb::bson::{doc, Document};

/// Builder for find filters over optional query parameters.
///
/// Only supplied criteria contribute to the filter; an empty builder
/// produces the match-everything document.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    filter: Document,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact-match criterion on `field` if a value was supplied.
    pub fn eq(mut self, field: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.filter.insert(field, value);
        }
        self
    }

    /// Add a case-insensitive substring search for `pattern` across the
    /// given fields: scalar fields match on their value, list fields match
    /// if any element matches. The arms are combined with `$or`.
    pub fn search(
        mut self,
        pattern: Option<String>,
        scalar_fields: &[&str],
        list_fields: &[&str],
    ) -> Self {
        if let Some(pattern) = pattern {
            let regex = doc! { "$regex": &pattern, "$options": "i" };
            let mut arms = Vec::with_capacity(scalar_fields.len() + list_fields.len());
            for field in scalar_fields {
                let mut arm = Document::new();
                arm.insert(*field, regex.clone());
                arms.push(arm);
            }
            for field in list_fields {
                let mut arm = Document::new();
                arm.insert(*field, doc! { "$elemMatch": regex.clone() });
                arms.push(arm);
            }
            self.filter.insert("$or", arms);
        }
        self
    }

    pub fn build(self) -> Document {
        self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_matches_everything() {
        assert_eq!(FilterBuilder::new().build(), doc! {});
    }

    #[test]
    fn absent_values_contribute_nothing() {
        let filter = FilterBuilder::new()
            .eq("category", None)
            .eq("difficulty", None)
            .search(None, &["text"], &["tags"])
            .build();
        assert_eq!(filter, doc! {});
    }

    #[test]
    fn supplied_values_become_equality_criteria() {
        let filter = FilterBuilder::new()
            .eq("category", Some("Algorithms".to_string()))
            .eq("difficulty", None)
            .eq("role", Some("Backend".to_string()))
            .build();
        assert_eq!(
            filter,
            doc! {
                "category": "Algorithms",
                "role": "Backend",
            }
        );
    }

    #[test]
    fn search_builds_case_insensitive_or() {
        let filter = FilterBuilder::new()
            .search(Some("algo".to_string()), &["text"], &["tags"])
            .build();
        assert_eq!(
            filter,
            doc! {
                "$or": [
                    { "text": { "$regex": "algo", "$options": "i" } },
                    { "tags": { "$elemMatch": { "$regex": "algo", "$options": "i" } } },
                ],
            }
        );
    }

    #[test]
    fn equality_and_search_combine() {
        let filter = FilterBuilder::new()
            .eq("role", Some("Data".to_string()))
            .search(Some("sql".to_string()), &["text"], &["tags"])
            .build();
        assert_eq!(
            filter,
            doc! {
                "role": "Data",
                "$or": [
                    { "text": { "$regex": "sql", "$options": "i" } },
                    { "tags": { "$elemMatch": { "$regex": "sql", "$options": "i" } } },
                ],
            }
        );
    }
}
