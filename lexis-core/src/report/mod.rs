//! Report assembly: frequency aggregation, derived scores, and the
//! pipeline entry point.
//!
//! One `analyze` call is one full, single-pass evaluation:
//! no suspension points, no shared mutable state across calls, either a
//! complete [`MetricsReport`](lexis_types::MetricsReport) or the single
//! input-validation error before any computation starts.

mod api;
pub mod derived;
pub mod frequency;

pub use api::TextAnalyzer;
