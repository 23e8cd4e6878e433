//! Tolerated wire-response shapes.
//!
//! The upstream endpoints do not agree on one envelope: some return the
//! record list bare, others nest it under a named field. Each endpoint
//! carries an ordered list of tolerated shapes, tried in sequence; no match
//! means an empty dataset, never an error.

use cohort_core::Record;
use serde_json::Value;

/// One tolerated wire shape carrying a record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// The response body is the record list itself.
    BareList,
    /// The record list sits under a named field of a JSON object.
    ListField(&'static str),
}

impl EnvelopeShape {
    /// Extract the record list if the body matches this shape.
    pub fn extract(&self, body: &Value) -> Option<Vec<Record>> {
        let list = match self {
            Self::BareList => body.as_array()?,
            Self::ListField(field) => body.as_object()?.get(*field)?.as_array()?,
        };
        Some(records_from(list))
    }
}

/// Try `shapes` in order against `body`; the first match wins, no match
/// yields an empty list.
pub fn extract_records(body: &Value, shapes: &[EnvelopeShape]) -> Vec<Record> {
    shapes
        .iter()
        .find_map(|shape| shape.extract(body))
        .unwrap_or_default()
}

fn records_from(list: &[Value]) -> Vec<Record> {
    // Non-object elements carry no fields to browse; skip them.
    list.iter()
        .filter_map(|value| value.as_object().cloned().map(Record::from))
        .collect()
}
