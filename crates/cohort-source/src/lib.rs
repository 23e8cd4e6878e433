//! Async boundary between the dashboard and the upstream record API.
//!
//! Fetches record lists from named endpoints, normalizes the tolerated
//! response envelopes, guards late results behind view liveness scopes, and
//! aggregates the dashboard's summary counters.

pub mod envelope;
pub mod error;
pub mod loader;
pub mod source;
pub mod stats;

pub use envelope::EnvelopeShape;
pub use error::SourceError;
pub use loader::{LoadState, ViewScope, load_guarded};
pub use source::{EndpointBinding, HttpRecordSource, RecordSource, STATS_PATH};
pub use stats::{StatsAggregator, StatsSummary};
