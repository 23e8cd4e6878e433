//! Free-text search over a dataset.

use cohort_core::Record;

/// Reduce `records` to those matching `query` across `fields`.
///
/// The query is trimmed and lower-cased; a record matches when the lower-cased
/// string form of ANY configured field (absent and null coalesce to empty)
/// contains the query as a substring. An empty query is the identity
/// transform. Relative order of matching records is preserved. No weighting,
/// no fuzziness.
pub fn filter_records(records: &[Record], query: &str, fields: &[&str]) -> Vec<Record> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| matches(record, &needle, fields))
        .cloned()
        .collect()
}

fn matches(record: &Record, needle: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|field| record.text(field).to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => Record(map),
            _ => panic!("test records must be JSON objects"),
        }
    }

    fn people() -> Vec<Record> {
        vec![
            record(json!({ "id": 1, "name": "Anna", "email": "anna@example.edu" })),
            record(json!({ "id": 2, "name": "Hannah", "email": null })),
            record(json!({ "id": 3, "name": "Bob", "email": "bob@example.edu" })),
        ]
    }

    #[test]
    fn substring_match_preserves_source_order() {
        let matched = filter_records(&people(), "ann", &["name"]);
        let names: Vec<String> = matched.iter().map(|r| r.text("name")).collect();
        assert_eq!(names, vec!["Anna", "Hannah"]);
    }

    #[test]
    fn empty_query_is_the_identity_transform() {
        let dataset = people();
        assert_eq!(filter_records(&dataset, "", &["name"]), dataset);
        assert_eq!(filter_records(&dataset, "   ", &["name"]), dataset);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let matched = filter_records(&people(), "ANNA", &["name"]);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].text("name"), "Anna");
    }

    #[test]
    fn any_configured_field_can_match() {
        let matched = filter_records(&people(), "bob@", &["name", "email"]);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].text("name"), "Bob");
    }

    #[test]
    fn absent_fields_coalesce_to_empty_and_never_match() {
        // Hannah's email is null; no query text can match it
        let matched = filter_records(&people(), "hannah", &["email"]);
        assert!(matched.is_empty());
    }

    #[test]
    fn unconfigured_fields_are_not_scanned() {
        let matched = filter_records(&people(), "anna@example.edu", &["name"]);
        assert!(matched.is_empty());
    }
}
