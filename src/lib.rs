pub mod analyzer;
pub mod components;
pub mod config_loader;
pub mod domain_utils;
pub mod error;
pub mod features;
pub mod statistics;
pub mod url_extractor;

pub use analyzer::SmsAnalyzer;
pub use components::{AnalysisReport, DecisionConfig, RiskAggregator, RiskAssessment};
pub use config_loader::{ConfigLoader, ReferenceLists};
pub use error::InputError;
pub use features::{SignalDetector, SignalScore};
pub use statistics::{evaluate_corpus, EvaluationStats, LabeledMessage};
pub use url_extractor::{ExtractedUrl, UrlExtractor};
