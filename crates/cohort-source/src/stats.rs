//! Aggregate counters for the dashboard home page.

use crate::error::SourceError;
use crate::source::{EndpointBinding, RecordSource, STATS_PATH};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Display-ready summary of the aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    /// Enrolled students.
    pub students: u64,
    /// Active mentors.
    pub mentors: u64,
    /// Partner companies.
    pub companies: u64,
    /// Length of the course list, not a backend counter.
    pub courses: u64,
    /// When the summary was assembled.
    pub refreshed_at: DateTime<Utc>,
}

/// Combines the counters endpoint and the course list into one summary.
///
/// The two upstream calls are independent and issued concurrently; the
/// aggregation waits for both. Error surfacing is all-or-nothing: if either
/// call fails the whole summary fails, and values already resolved from the
/// other call are not reported. No retry is attempted.
pub struct StatsAggregator<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> StatsAggregator<'a> {
    /// Aggregator over `source`.
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    /// Issue both upstream calls concurrently and combine the results.
    pub async fn load(&self) -> Result<StatsSummary, SourceError> {
        let (counts, courses) = tokio::join!(
            self.source.value(STATS_PATH),
            self.source.records(&EndpointBinding::COURSES),
        );
        let counts = counts?;
        let courses = courses?;

        Ok(StatsSummary {
            students: counter(&counts, "students"),
            mentors: counter(&counts, "mentors"),
            companies: counter(&counts, "companies"),
            courses: courses.len() as u64,
            refreshed_at: Utc::now(),
        })
    }
}

/// A named counter from the stats body; absent or non-numeric counts as 0.
fn counter(body: &Value, name: &str) -> u64 {
    body.get(name).and_then(Value::as_u64).unwrap_or(0)
}
