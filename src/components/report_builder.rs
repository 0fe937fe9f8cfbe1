//! Report Builder Component
//!
//! Packages the extractor output, the aggregate assessment and the
//! detector indicators into the immutable result handed back to callers.

use crate::components::decision_engine::RiskAssessment;
use crate::features::SignalScore;
use crate::url_extractor::ExtractedUrl;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    text: String,
    extracted_urls: Vec<ExtractedUrl>,
    phishing_score: f64,
    is_phishing: bool,
    confidence: f64,
    indicators: Vec<String>,
}

impl AnalysisReport {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn extracted_urls(&self) -> &[ExtractedUrl] {
        &self.extracted_urls
    }

    /// Raw URL strings in extraction order
    pub fn urls(&self) -> Vec<&str> {
        self.extracted_urls.iter().map(|u| u.url.as_str()).collect()
    }

    pub fn phishing_score(&self) -> f64 {
        self.phishing_score
    }

    pub fn is_phishing(&self) -> bool {
        self.is_phishing
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    pub fn label(&self) -> &'static str {
        if self.is_phishing {
            "phishing"
        } else {
            "legitimate"
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub struct ReportBuilder;

impl ReportBuilder {
    /// Indicators are concatenated in the order the signals were produced
    pub fn build(
        text: &str,
        extracted_urls: Vec<ExtractedUrl>,
        assessment: RiskAssessment,
        signals: &[SignalScore],
    ) -> AnalysisReport {
        let indicators = signals
            .iter()
            .flat_map(|signal| signal.indicators.iter().cloned())
            .collect();

        AnalysisReport {
            text: text.to_string(),
            extracted_urls,
            phishing_score: assessment.phishing_score,
            is_phishing: assessment.is_phishing,
            confidence: assessment.confidence,
            indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_order_follows_signals() {
        let signals = vec![
            SignalScore::new("a", 0.1, vec!["first".to_string()]),
            SignalScore::zero("b"),
            SignalScore::new("c", 0.2, vec!["second".to_string(), "third".to_string()]),
        ];
        let assessment = RiskAssessment {
            phishing_score: 0.2,
            is_phishing: false,
            confidence: 0.6,
        };

        let report = ReportBuilder::build("msg", Vec::new(), assessment, &signals);

        assert_eq!(report.indicators(), &["first", "second", "third"]);
        assert_eq!(report.text(), "msg");
        assert_eq!(report.label(), "legitimate");
        assert!(report.urls().is_empty());
    }

    #[test]
    fn test_json_fields() {
        let assessment = RiskAssessment {
            phishing_score: 1.0,
            is_phishing: true,
            confidence: 1.0,
        };
        let urls = vec![ExtractedUrl::new("http://fake-bank.com/verify")];
        let report = ReportBuilder::build("x", urls, assessment, &[]);

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["is_phishing"], true);
        assert_eq!(value["extracted_urls"][0]["url"], "http://fake-bank.com/verify");
        assert_eq!(value["extracted_urls"][0]["domain"], "fake-bank.com");
        assert!(value.get("processing_time_ms").is_none());
    }
}
