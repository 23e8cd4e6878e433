//! # cohort-dashboard
//!
//! Admin web dashboard for Cohort.
//!
//! This crate provides a server-rendered web UI over the upstream record API:
//! - Listing views (students, mentors, courses) with free-text search,
//!   pagination and CSV export
//! - An overview page with aggregate counters
//!
//! ## Tech Stack
//!
//! - Axum for the HTTP server
//! - Plain HTML templates (Tailwind via CDN, no build step)
//! - All filtering and pagination happens in memory on the loaded dataset;
//!   the upstream API only ever serves whole collections

pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;
pub mod views;

pub use error::DashboardError;
pub use server::DashboardServer;
pub use state::AppState;
