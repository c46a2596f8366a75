//! # Repolens Dashboard
//!
//! One owned [`DashboardState`] holding the normalized records, and read-only
//! [`DashboardView`] projections computed from it on demand.
//!
//! ```text
//! AnalysisBackend ──> Analyzer ──normalize──> DashboardState ──view()──> DashboardView
//!                     (only writer)                                     (overview, top files,
//!                                                                        tree, steps, diagram)
//! ```
//!
//! Nothing is cached: every view value is recomputed from the held records.

mod analyzer;
pub mod diagram;
mod expanded;
mod report;
mod state;
mod view;

pub use analyzer::{AnalysisOutcome, Analyzer, NO_REPOSITORY_MESSAGE};
pub use expanded::{ExpandedPaths, DEFAULT_EXPANDED_DEPTH};
pub use report::{DashboardReport, ReportLimits};
pub use state::DashboardState;
pub use view::{DashboardView, DistributionItem, OverviewItem, TOP_FILES};
