//! CSV rendering of a record list.

use cohort_core::Record;

/// Render `rows` as a CSV document.
///
/// The header is the field sequence of the first row (rows are assumed
/// homogeneous in shape). Every value is coalesced (absent and null to
/// empty), stringified, and double-quoted; embedded double quotes are doubled
/// per RFC 4180. Returns `None` for an empty list: exporting nothing
/// produces no document and no error.
pub fn to_csv(rows: &[Record]) -> Option<String> {
    let fields: Vec<&str> = rows.first()?.fields().collect();

    let header = fields.join(",");
    let body = rows
        .iter()
        .map(|row| {
            fields
                .iter()
                .map(|field| quote(&row.text(field)))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!("{header}\n{body}"))
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
