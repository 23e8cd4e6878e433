use serde::{Deserialize, Serialize};
use serde_json::Value;

// Configuration types shared across all Cohort crates
pub mod config;

// Re-export commonly used config types for convenience
pub use config::{BackendConfig, CohortConfig, ConfigError, DashboardConfig};

/// A single row of tabular data, keyed by field name.
///
/// Different entity kinds (student, mentor, course) expose different field
/// subsets, so the schema is not fixed. Field order is preserved from the
/// wire, which lets the first record of a dataset supply the column ordering
/// for display and export. An `id` field is expected by convention but never
/// uniqueness-checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub serde_json::Map<String, Value>);

impl Record {
    /// Look up a raw field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field names in wire order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// String form of a field, with absent and null coalesced to empty.
    ///
    /// Strings come back verbatim; other scalars use their JSON display form.
    pub fn text(&self, field: &str) -> String {
        match self.0.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<serde_json::Map<String, Value>> for Record {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map)
    }
}

/// An ordered sequence of records, owned by the view that requested it.
///
/// Replaced wholesale on each successful load, never mutated in place.
pub type Dataset = Vec<Record>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => Record(map),
            _ => panic!("test records must be JSON objects"),
        }
    }

    #[test]
    fn text_coalesces_absent_and_null_to_empty() {
        let r = record(json!({ "name": "Anna", "email": null }));
        assert_eq!(r.text("name"), "Anna");
        assert_eq!(r.text("email"), "");
        assert_eq!(r.text("phone"), "");
    }

    #[test]
    fn text_renders_scalars_via_json_display() {
        let r = record(json!({ "id": 7, "active": true, "score": 4.5 }));
        assert_eq!(r.text("id"), "7");
        assert_eq!(r.text("active"), "true");
        assert_eq!(r.text("score"), "4.5");
    }

    #[test]
    fn fields_preserve_wire_order() {
        let r = record(json!({ "id": 1, "name": "Anna", "course": "Rust" }));
        let fields: Vec<&str> = r.fields().collect();
        assert_eq!(fields, vec!["id", "name", "course"]);
    }

    #[test]
    fn record_round_trips_through_serde() {
        let r = record(json!({ "id": 1, "name": "Anna" }));
        let encoded = serde_json::to_string(&r).unwrap();
        let decoded: Record = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, r);
    }
}
