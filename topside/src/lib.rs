#![warn(missing_docs)]
#![warn(clippy::correctness)]

//! Topside is the surface operations console for the ROV. It loads a
//! telemetry feed, projects it into display-ready view models, and renders
//! those on an interactive terminal dashboard, as plain text, or as a CSV
//! export.

/// The telemetry feed store and its document ingestion boundary.
pub mod feed;

/// The interactive terminal dashboard.
pub mod interface;

/// Command line tools used to render, inspect, and produce telemetry feeds.
pub mod tool;

/// Pure projections from the feed to display-ready view models, and the
/// surface they render onto.
pub mod view;
