use crate::components::{AnalysisReport, DecisionConfig, ReportBuilder, RiskAggregator};
use crate::config_loader::ReferenceLists;
use crate::error::InputError;
use crate::features::{default_detectors, SignalDetector, SignalScore};
use crate::url_extractor::UrlExtractor;
use anyhow::{bail, Result};

/// Stateless phishing scorer for short text messages.
///
/// Holds only immutable configuration, so one instance can be shared
/// across threads (`Arc<SmsAnalyzer>`) with no locking.
pub struct SmsAnalyzer {
    url_extractor: UrlExtractor,
    detectors: Vec<Box<dyn SignalDetector>>,
    aggregator: RiskAggregator,
}

impl Default for SmsAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SmsAnalyzer {
    pub fn new() -> Self {
        Self {
            url_extractor: UrlExtractor::new(),
            detectors: default_detectors(&ReferenceLists::default()),
            aggregator: RiskAggregator::default(),
        }
    }

    pub fn from_reference_lists(lists: &ReferenceLists) -> Result<Self> {
        lists.validate()?;
        Self::with_detectors(default_detectors(lists), DecisionConfig::default())
    }

    /// Custom detector set. Every detector must have a weight in `decision`.
    pub fn with_detectors(
        detectors: Vec<Box<dyn SignalDetector>>,
        decision: DecisionConfig,
    ) -> Result<Self> {
        for detector in &detectors {
            if !decision.weights.contains_key(detector.name()) {
                bail!("No weight configured for detector {}", detector.name());
            }
        }

        Ok(Self {
            url_extractor: UrlExtractor::new(),
            detectors,
            aggregator: RiskAggregator::new(decision),
        })
    }

    pub fn detector_names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Score a message. Total: every string, including "", yields a report.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let extracted_urls = self.url_extractor.extract(text);

        let signals: Vec<SignalScore> = self
            .detectors
            .iter()
            .map(|detector| detector.detect(text, &extracted_urls))
            .collect();

        let assessment = self.aggregator.aggregate(&signals);

        log::debug!(
            "Scored message ({} chars, {} urls): score={:.3} phishing={} confidence={:.3}",
            text.chars().count(),
            extracted_urls.len(),
            assessment.phishing_score,
            assessment.is_phishing,
            assessment.confidence
        );

        ReportBuilder::build(text, extracted_urls, assessment, &signals)
    }

    /// Raw bytes; invalid UTF-8 sequences are replaced before scoring
    pub fn analyze_bytes(&self, bytes: &[u8]) -> AnalysisReport {
        let text = String::from_utf8_lossy(bytes);
        self.analyze(&text)
    }

    /// Entry point for untyped records. Anything other than a JSON string
    /// is rejected rather than coerced to empty text.
    pub fn analyze_value(&self, value: &serde_json::Value) -> Result<AnalysisReport, InputError> {
        match value {
            serde_json::Value::String(text) => Ok(self.analyze(text)),
            other => Err(InputError::not_text(other)),
        }
    }
}
