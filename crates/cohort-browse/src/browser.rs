//! The parametric tabular browser.
//!
//! One abstraction drives every listing view: load a dataset through a
//! liveness scope, filter it in memory, paginate the filtered result, and
//! export the filtered result as CSV. Each view instance owns its own
//! dataset, query and page state; nothing is shared across instances, so no
//! locking is involved. Derived state is recomputed from the current inputs
//! on every render; no stale derived state survives an input change.

use crate::csv::to_csv;
use crate::filter::filter_records;
use crate::page::PageState;
use cohort_core::{Dataset, Record};
use cohort_source::loader::{LoadState, ViewScope, load_guarded};
use cohort_source::source::{EndpointBinding, RecordSource};

/// Configuration of one entity listing: where the records come from, which
/// fields free-text search scans, and the page window size.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    /// Upstream endpoint binding.
    pub endpoint: EndpointBinding,
    /// Fields scanned by free-text search.
    pub search_fields: &'static [&'static str],
    /// Rows per page, fixed per view instance.
    pub page_size: usize,
}

/// The derived, render-ready window over the filtered dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Records of the current page, in dataset order.
    pub items: Vec<Record>,
    /// Current page, guaranteed within range.
    pub page: usize,
    /// Page count of the filtered list.
    pub page_count: usize,
    /// Filtered record count.
    pub filtered_len: usize,
    /// Unfiltered record count.
    pub total_len: usize,
}

/// One mounted listing view: dataset, query, page position and load state.
#[derive(Debug)]
pub struct TableBrowser {
    spec: TableSpec,
    dataset: Dataset,
    query: String,
    page: PageState,
    state: LoadState,
}

impl TableBrowser {
    /// A freshly mounted, empty browser.
    pub fn new(spec: TableSpec) -> Self {
        Self {
            page: PageState::new(spec.page_size),
            spec,
            dataset: Dataset::new(),
            query: String::new(),
            state: LoadState::default(),
        }
    }

    /// Load the dataset through `source`, guarded by `scope`.
    ///
    /// On success the dataset is replaced wholesale; on failure an error
    /// state is surfaced and the dataset emptied, never a partial mix. A
    /// scope retired mid-flight leaves every field untouched, the loading
    /// flag included.
    pub async fn load(&mut self, source: &dyn RecordSource, scope: &ViewScope) {
        self.state = LoadState::Loading;
        match load_guarded(scope, source.records(&self.spec.endpoint)).await {
            None => {} // view torn down; outcome discarded
            Some(Ok(records)) => {
                self.dataset = records;
                self.state = LoadState::Loaded;
                self.page.reconcile(self.filtered().len());
            }
            Some(Err(error)) => {
                tracing::warn!(endpoint = self.spec.endpoint.name(), %error, "load failed");
                self.dataset = Dataset::new();
                self.state = LoadState::Failed(error.to_string());
            }
        }
    }

    /// Replace the search query. Normalization happens at match time.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Request a page of the filtered list.
    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Current raw query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The filtered dataset, in source order.
    pub fn filtered(&self) -> Vec<Record> {
        filter_records(&self.dataset, &self.query, self.spec.search_fields)
    }

    /// Derive the visible page.
    ///
    /// Reconciles the page position first, so a stored page beyond the
    /// filtered list's page count resets to 1 before anything renders.
    pub fn view(&mut self) -> PageView {
        let filtered = self.filtered();
        self.page.reconcile(filtered.len());
        PageView {
            items: self.page.slice(&filtered).to_vec(),
            page: self.page.page(),
            page_count: self.page.page_count(filtered.len()),
            filtered_len: filtered.len(),
            total_len: self.dataset.len(),
        }
    }

    /// CSV of the current filtered view (not just the visible page), or
    /// `None` when there is nothing to export.
    pub fn export(&self) -> Option<String> {
        to_csv(&self.filtered())
    }
}
