//! Request handlers for the dashboard.
//!
//! Every request mounts a fresh view: one [`TableBrowser`] per listing
//! request, one aggregation per overview request. View state never outlives
//! the request, so nothing is shared across concurrent requests.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::error::DashboardError;
use crate::pages;
use crate::state::AppState;
use crate::views::EntityView;
use cohort_browse::TableBrowser;
use cohort_source::{StatsAggregator, ViewScope, load_guarded};

/// Query parameters accepted by every listing view.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    /// Free-text search query.
    pub q: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
}

/// Handler for the dashboard home page.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let scope = ViewScope::new();
    let aggregator = StatsAggregator::new(state.source());

    let page = match load_guarded(&scope, aggregator.load()).await {
        Some(Ok(summary)) => pages::home_page(Some(&summary), None),
        Some(Err(error)) => {
            tracing::warn!(%error, "stats aggregation failed");
            pages::home_page(None, Some("Could not load dashboard statistics."))
        }
        // The scope lives for the whole request and is never retired here
        None => pages::home_page(None, None),
    };

    Html(page)
}

/// Handler for the entity listing pages.
pub async fn listing(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    Query(params): Query<ListingParams>,
) -> Result<Html<String>, DashboardError> {
    let entity = resolve(&entity)?;
    let mut browser = mount(&state, entity, &params).await;
    let view = browser.view();

    Ok(Html(pages::listing_page(
        entity,
        &view,
        browser.query(),
        browser.state(),
    )))
}

/// Handler for CSV export of the filtered listing.
pub async fn export(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    Query(params): Query<ListingParams>,
) -> Result<Response, DashboardError> {
    let entity = resolve(&entity)?;
    let browser = mount(&state, entity, &params).await;

    if let Some(message) = browser.state().error() {
        return Err(DashboardError::Upstream(message.to_string()));
    }

    match browser.export() {
        // Nothing to export: no document, no error
        None => Ok(StatusCode::NO_CONTENT.into_response()),
        Some(csv) => {
            let headers = [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", entity.export_filename()),
                ),
            ];
            Ok((headers, csv).into_response())
        }
    }
}

/// Liveness probe.
pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "cohort-dashboard" }))
}

fn resolve(slug: &str) -> Result<&'static EntityView, DashboardError> {
    EntityView::by_slug(slug)
        .ok_or_else(|| DashboardError::NotFound(format!("no such listing: {slug}")))
}

/// Mount one listing view for the duration of a request: create the browser,
/// run the guarded load, then apply the search and page parameters.
async fn mount(state: &AppState, entity: &EntityView, params: &ListingParams) -> TableBrowser {
    let mut browser = TableBrowser::new(entity.table_spec(state.page_size()));
    let scope = ViewScope::new();

    browser.load(state.source(), &scope).await;

    if let Some(q) = &params.q {
        browser.set_query(q);
    }
    if let Some(page) = params.page {
        browser.set_page(page);
    }

    browser
}
