//! HTML templates for the dashboard.
//!
//! Plain string templates with Tailwind via CDN; no build step, no client
//! framework. Layout polish is deliberately minimal.

use crate::views::EntityView;

/// Base HTML layout wrapper.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Cohort Dashboard</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 min-h-screen">
    {nav}
    <main class="p-6 lg:p-8">
        <div class="max-w-5xl mx-auto">
            {content}
        </div>
    </main>
</body>
</html>"##,
        title = html_escape(title),
        nav = nav_template(),
        content = content,
    )
}

fn nav_template() -> String {
    let links: String = EntityView::ALL
        .iter()
        .map(|view| {
            format!(
                r#"<a href="/{slug}" class="px-3 py-2 rounded hover:bg-indigo-700">{title}</a>"#,
                slug = view.slug,
                title = view.title,
            )
        })
        .collect();

    format!(
        r##"<nav class="bg-indigo-600 text-white px-4 py-3 flex items-center gap-2">
        <a href="/" class="font-semibold px-3 py-2">Cohort</a>
        {links}
    </nav>"##
    )
}

/// Content card with a heading.
pub fn card(title: &str, body: &str) -> String {
    format!(
        r##"<div class="bg-white rounded-lg shadow p-6 mb-6">
        <h3 class="text-lg font-medium text-gray-900 mb-4">{title}</h3>
        {body}
    </div>"##,
        title = html_escape(title),
        body = body,
    )
}

/// Single aggregate counter tile.
pub fn stats_card(label: &str, value: &str) -> String {
    format!(
        r##"<div class="bg-white rounded-lg shadow p-6">
        <p class="text-sm text-gray-500">{label}</p>
        <p class="text-3xl font-semibold text-gray-900">{value}</p>
    </div>"##,
        label = html_escape(label),
        value = html_escape(value),
    )
}

/// Placeholder shown when a listing has nothing to display.
pub fn empty_state(title: &str, message: &str) -> String {
    format!(
        r##"<div class="text-center py-12 text-gray-500">
        <p class="text-lg font-medium">{title}</p>
        <p class="text-sm mt-1">{message}</p>
    </div>"##,
        title = html_escape(title),
        message = html_escape(message),
    )
}

/// Inline notice for a failed load. The page still renders.
pub fn error_notice(message: &str) -> String {
    format!(
        r##"<div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 mb-6">
        {message}
    </div>"##,
        message = html_escape(message),
    )
}

/// Free-text search form submitting back to the listing route.
pub fn search_form(action: &str, query: &str) -> String {
    format!(
        r##"<form method="get" action="/{action}" class="mb-4 flex gap-2">
        <input type="text" name="q" value="{query}" placeholder="Search..."
               class="border border-gray-300 rounded px-3 py-2 w-64">
        <button type="submit" class="bg-indigo-600 text-white rounded px-4 py-2">Search</button>
    </form>"##,
        action = action,
        query = html_escape(query),
    )
}

/// Escape text for safe HTML interpolation.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
