//! The entity listings the dashboard exposes.
//!
//! Each listing is one [`EntityView`]: a route slug, the upstream endpoint
//! binding, the fields free-text search scans, and the display columns. The
//! generic listing handler resolves a slug to its view, so adding an entity
//! means adding a constant here, not another handler.

use cohort_browse::TableSpec;
use cohort_source::EndpointBinding;

/// A display column: record field plus table heading.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Record field name.
    pub field: &'static str,
    /// Table heading.
    pub label: &'static str,
}

/// One browsable entity listing.
#[derive(Debug, Clone, Copy)]
pub struct EntityView {
    /// Route slug, e.g. `students` for `/students`.
    pub slug: &'static str,
    /// Page title.
    pub title: &'static str,
    /// Upstream endpoint binding.
    pub endpoint: EndpointBinding,
    /// Fields scanned by free-text search.
    pub search_fields: &'static [&'static str],
    /// Display columns, in order.
    pub columns: &'static [Column],
}

impl EntityView {
    /// The student listing.
    pub const STUDENTS: Self = Self {
        slug: "students",
        title: "Students",
        endpoint: EndpointBinding::STUDENTS,
        search_fields: &["name", "email", "course"],
        columns: &[
            Column { field: "id", label: "ID" },
            Column { field: "name", label: "Name" },
            Column { field: "email", label: "Email" },
            Column { field: "course", label: "Course" },
        ],
    };

    /// The mentor listing.
    pub const MENTORS: Self = Self {
        slug: "mentors",
        title: "Mentors",
        endpoint: EndpointBinding::MENTORS,
        search_fields: &["name", "email", "company"],
        columns: &[
            Column { field: "id", label: "ID" },
            Column { field: "name", label: "Name" },
            Column { field: "email", label: "Email" },
            Column { field: "company", label: "Company" },
        ],
    };

    /// The course listing.
    pub const COURSES: Self = Self {
        slug: "courses",
        title: "Courses",
        endpoint: EndpointBinding::COURSES,
        search_fields: &["title", "mentor"],
        columns: &[
            Column { field: "id", label: "ID" },
            Column { field: "title", label: "Title" },
            Column { field: "mentor", label: "Mentor" },
            Column { field: "duration", label: "Duration" },
        ],
    };

    /// All listings, in navigation order.
    pub const ALL: &'static [Self] = &[Self::STUDENTS, Self::MENTORS, Self::COURSES];

    /// Resolve a route slug to its listing.
    pub fn by_slug(slug: &str) -> Option<&'static Self> {
        Self::ALL.iter().find(|view| view.slug == slug)
    }

    /// Table spec for one mounted view instance.
    pub fn table_spec(&self, page_size: usize) -> TableSpec {
        TableSpec {
            endpoint: self.endpoint,
            search_fields: self.search_fields,
            page_size,
        }
    }

    /// Filename offered for the CSV download.
    pub fn export_filename(&self) -> String {
        format!("{}.csv", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_resolve() {
        assert_eq!(EntityView::by_slug("students").unwrap().title, "Students");
        assert_eq!(EntityView::by_slug("mentors").unwrap().title, "Mentors");
        assert_eq!(EntityView::by_slug("courses").unwrap().title, "Courses");
        assert!(EntityView::by_slug("tutors").is_none());
    }

    #[test]
    fn export_filenames_follow_the_slug() {
        assert_eq!(EntityView::STUDENTS.export_filename(), "students.csv");
    }
}
