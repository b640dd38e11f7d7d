//! Domain services
//!
//! Matching, aggregation and summary logic. None of it touches the
//! filesystem.

mod match_evaluator;
mod result_aggregator;
mod run_report;

pub use match_evaluator::{evaluate, MatchEvaluator};
pub use result_aggregator::ResultAggregator;
pub use run_report::RunReport;
