//! Page templates for dashboard views.

use crate::templates::{
    card, empty_state, error_notice, html_escape, layout, search_form, stats_card,
};
use crate::views::EntityView;
use cohort_browse::PageView;
use cohort_source::{LoadState, StatsSummary};

// =============================================================================
// Overview
// =============================================================================

/// The dashboard home page: aggregate counters.
///
/// Error surfacing is all-or-nothing: on a failed aggregation every counter
/// is withheld, never a partial mix of resolved values.
pub fn home_page(summary: Option<&StatsSummary>, error: Option<&str>) -> String {
    let value = |count: Option<u64>| match count {
        Some(count) => count.to_string(),
        None => "—".to_string(),
    };

    let stats = format!(
        r##"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            {students}
            {mentors}
            {companies}
            {courses}
        </div>"##,
        students = stats_card("Students", &value(summary.map(|s| s.students))),
        mentors = stats_card("Mentors", &value(summary.map(|s| s.mentors))),
        companies = stats_card("Companies", &value(summary.map(|s| s.companies))),
        courses = stats_card("Courses", &value(summary.map(|s| s.courses))),
    );

    let notice = error.map(error_notice).unwrap_or_default();
    let refreshed = summary
        .map(|s| {
            format!(
                r#"<p class="text-sm text-gray-500">Refreshed at {}</p>"#,
                s.refreshed_at.format("%Y-%m-%d %H:%M:%S UTC")
            )
        })
        .unwrap_or_default();

    let content = format!(
        r##"<div class="mb-8">
            <h1 class="text-3xl font-bold text-gray-900">Overview</h1>
        </div>
        {notice}
        {stats}
        {refreshed}"##
    );

    layout("Overview", &content)
}

// =============================================================================
// Entity Listings
// =============================================================================

/// A listing page: search form, data table, pagination, export link.
pub fn listing_page(
    entity: &EntityView,
    view: &PageView,
    query: &str,
    state: &LoadState,
) -> String {
    let heading = format!(
        r##"<div class="mb-6 flex items-end justify-between">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
                <p class="text-sm text-gray-500 mt-1">{filtered} of {total} records</p>
            </div>
            <a href="{export}" class="text-indigo-600 hover:underline">Export CSV</a>
        </div>"##,
        title = html_escape(entity.title),
        filtered = view.filtered_len,
        total = view.total_len,
        export = page_href(&format!("{}/export.csv", entity.slug), query, None),
    );

    let body = if let Some(message) = state.error() {
        format!(
            "{}{}",
            error_notice(message),
            empty_state("Nothing to show", "The record list could not be loaded."),
        )
    } else if view.items.is_empty() {
        empty_state("No records", "Nothing matches the current search.")
    } else {
        format!(
            "{table}{nav}",
            table = data_table(entity, view),
            nav = pagination_nav(entity, view, query),
        )
    };

    let content = format!(
        "{heading}{search}{card}",
        search = search_form(entity.slug, query),
        card = card(entity.title, &body),
    );

    layout(entity.title, &content)
}

fn data_table(entity: &EntityView, view: &PageView) -> String {
    let headers: String = entity
        .columns
        .iter()
        .map(|column| {
            format!(
                r#"<th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{}</th>"#,
                html_escape(column.label)
            )
        })
        .collect();

    let rows: String = view
        .items
        .iter()
        .map(|record| {
            let cells: String = entity
                .columns
                .iter()
                .map(|column| {
                    format!(
                        r#"<td class="px-4 py-3 text-sm text-gray-900">{}</td>"#,
                        html_escape(&record.text(column.field))
                    )
                })
                .collect();
            format!(r#"<tr class="hover:bg-gray-50">{cells}</tr>"#)
        })
        .collect();

    format!(
        r##"<div class="overflow-x-auto">
        <table class="w-full">
            <thead class="bg-gray-50">
                <tr>{headers}</tr>
            </thead>
            <tbody class="divide-y divide-gray-200">{rows}</tbody>
        </table>
    </div>"##
    )
}

fn pagination_nav(entity: &EntityView, view: &PageView, query: &str) -> String {
    if view.page_count <= 1 {
        return String::new();
    }

    let prev = if view.page > 1 {
        format!(
            r#"<a href="{href}" class="text-indigo-600 hover:underline">Previous</a>"#,
            href = page_href(entity.slug, query, Some(view.page - 1)),
        )
    } else {
        r#"<span class="text-gray-400">Previous</span>"#.to_string()
    };

    let next = if view.page < view.page_count {
        format!(
            r#"<a href="{href}" class="text-indigo-600 hover:underline">Next</a>"#,
            href = page_href(entity.slug, query, Some(view.page + 1)),
        )
    } else {
        r#"<span class="text-gray-400">Next</span>"#.to_string()
    };

    format!(
        r##"<div class="flex items-center justify-between mt-4 text-sm">
        {prev}
        <span class="text-gray-500">Page {page} of {page_count}</span>
        {next}
    </div>"##,
        page = view.page,
        page_count = view.page_count,
    )
}

/// Build a listing href, preserving the current query.
fn page_href(path: &str, query: &str, page: Option<usize>) -> String {
    let mut params = Vec::new();
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }
    if let Some(page) = page {
        params.push(format!("page={page}"));
    }
    if params.is_empty() {
        format!("/{path}")
    } else {
        format!("/{path}?{}", params.join("&"))
    }
}
