//! Scoring pipeline components downstream of the signal detectors.

pub mod decision_engine;
pub mod report_builder;

pub use decision_engine::{DecisionConfig, RiskAggregator, RiskAssessment};
pub use report_builder::{AnalysisReport, ReportBuilder};
